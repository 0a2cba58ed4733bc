//! Container save/load.
//!
//! # Layout
//!
//! ```text
//! [i32 version = 0][i32 count][count x item record]
//! ```
//!
//! Header integers are little-endian. Item records come from an
//! [`ItemCodec`]; [`BincodeItemCodec`] is used by the byte and file helpers.

use std::fs;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::Inventory;
use crate::codec::{self, BincodeItemCodec, CodecError, ItemCodec};
use crate::config::InventoryConfig;
use crate::error::{ErrorSeverity, InventoryError};
use crate::item::Item;

/// Errors raised while saving or loading a container.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("unsupported inventory schema version {version} (supported: {supported})")]
    UnsupportedVersion { version: i32, supported: i32 },

    #[error("invalid entry count {count}")]
    InvalidCount { count: i64 },

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl InventoryError for PersistError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnsupportedVersion { .. } => ErrorSeverity::Validation,
            Self::InvalidCount { .. } => ErrorSeverity::Fatal,
            Self::Codec(err) => err.severity(),
            Self::Io(_) => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedVersion { .. } => "PERSIST_UNSUPPORTED_VERSION",
            Self::InvalidCount { .. } => "PERSIST_INVALID_COUNT",
            Self::Codec(err) => err.error_code(),
            Self::Io(_) => "PERSIST_IO",
        }
    }
}

/// Outcome of a successful load.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoadReport {
    /// Entries restored into the container.
    pub loaded: usize,
    /// Null slots that were skipped.
    pub skipped: usize,
    /// Entries that would have pushed the container over capacity, in save order.
    pub overflow: Vec<Item>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.skipped == 0 && self.overflow.is_empty()
    }
}

impl Inventory {
    /// Writes the header and every entry in order.
    pub fn serialize<W, C>(&self, writer: &mut W, item_codec: &C) -> Result<(), PersistError>
    where
        W: Write,
        C: ItemCodec + ?Sized,
    {
        let count = i32::try_from(self.items.len()).map_err(|_| PersistError::InvalidCount {
            count: i64::try_from(self.items.len()).unwrap_or(i64::MAX),
        })?;

        codec::write_i32(writer, InventoryConfig::SCHEMA_VERSION)?;
        codec::write_i32(writer, count)?;
        for item in &self.items {
            item_codec.write_item(item, writer)?;
        }
        Ok(())
    }

    /// Replaces the contents with the entries read from `reader`.
    ///
    /// Entries are restored in order without consolidation. Null slots are
    /// skipped and entries that would exceed capacity go to
    /// [`LoadReport::overflow`]. On error the container is left untouched.
    pub fn deserialize<R, C>(
        &mut self,
        reader: &mut R,
        item_codec: &C,
    ) -> Result<LoadReport, PersistError>
    where
        R: Read,
        C: ItemCodec + ?Sized,
    {
        let version = codec::read_i32(reader)?;
        if version != InventoryConfig::SCHEMA_VERSION {
            tracing::error!(owner = %self.owner, version, "unsupported inventory schema version");
            return Err(PersistError::UnsupportedVersion {
                version,
                supported: InventoryConfig::SCHEMA_VERSION,
            });
        }

        let raw_count = codec::read_i32(reader)?;
        let count = usize::try_from(raw_count).map_err(|_| {
            tracing::error!(owner = %self.owner, count = raw_count, "negative entry count");
            PersistError::InvalidCount {
                count: i64::from(raw_count),
            }
        })?;

        let mut report = LoadReport::default();
        let mut items = Vec::with_capacity(count.min(1024));
        let mut total: u32 = 0;

        for slot in 0..count {
            let Some(item) = item_codec.read_item(reader)? else {
                tracing::error!(owner = %self.owner, slot, "null item slot, skipping");
                report.skipped += 1;
                continue;
            };

            let units = item.amount();
            match total.checked_add(units) {
                Some(next) if next <= self.capacity => {
                    total = next;
                    items.push(item);
                }
                _ => {
                    tracing::warn!(owner = %self.owner, slot, %item, "entry exceeds capacity");
                    report.overflow.push(item);
                }
            }
        }

        report.loaded = items.len();
        self.items = items;

        tracing::debug!(
            owner = %self.owner,
            loaded = report.loaded,
            skipped = report.skipped,
            overflow = report.overflow.len(),
            "loaded inventory"
        );

        Ok(report)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, PersistError> {
        let mut bytes = Vec::new();
        self.serialize(&mut bytes, &BincodeItemCodec)?;
        Ok(bytes)
    }

    pub fn load_bytes(&mut self, mut bytes: &[u8]) -> Result<LoadReport, PersistError> {
        self.deserialize(&mut bytes, &BincodeItemCodec)
    }

    /// Saves to `path` through a sibling `<file name>.tmp` and rename.
    ///
    /// The temp file is removed when any step fails.
    pub fn save_file(&self, path: impl AsRef<Path>) -> Result<(), PersistError> {
        let path = path.as_ref();
        let temp_path = temp_path_for(path);

        if let Err(err) = self.write_and_rename(&temp_path, path) {
            let _ = fs::remove_file(&temp_path);
            return Err(err);
        }

        tracing::debug!(
            owner = %self.owner,
            entries = self.items.len(),
            "saved inventory to {}",
            path.display()
        );
        Ok(())
    }

    fn write_and_rename(&self, temp_path: &Path, path: &Path) -> Result<(), PersistError> {
        let mut writer = BufWriter::new(fs::File::create(temp_path)?);
        self.serialize(&mut writer, &BincodeItemCodec)?;
        writer.flush()?;
        drop(writer);

        fs::rename(temp_path, path)?;
        Ok(())
    }

    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<LoadReport, PersistError> {
        let path = path.as_ref();
        let mut reader = BufReader::new(fs::File::open(path)?);
        let report = self.deserialize(&mut reader, &BincodeItemCodec)?;
        tracing::debug!(owner = %self.owner, "loaded inventory from {}", path.display());
        Ok(report)
    }
}

/// `chest.inv` saves through `chest.inv.tmp`, never through the target itself.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|name| name.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::OwnerId;
    use crate::item::LookVector;

    fn chest(capacity: u32) -> Inventory {
        Inventory::new(OwnerId(1), capacity)
    }

    fn header(version: i32, count: i32) -> Vec<u8> {
        let mut bytes = version.to_le_bytes().to_vec();
        bytes.extend_from_slice(&count.to_le_bytes());
        bytes
    }

    #[test]
    fn round_trip_restores_every_variant_in_order() {
        let mut inventory = chest(1_000);
        inventory.add(Item::cube_stack(5, 2, 0, 7));
        inventory.add(Item::stack(1, 10));
        inventory.add(Item::single(4));
        inventory.add(Item::charge(3, 0.75));
        inventory.add(Item::durability(9, 50, 100));
        inventory.add(Item::location(7, [-10, 64, 3], LookVector::new(0.0, 1.0, 0.0)));

        let bytes = inventory.to_bytes().unwrap();
        let mut restored = chest(1_000);
        let report = restored.load_bytes(&bytes).unwrap();

        assert!(report.is_clean());
        assert_eq!(report.loaded, 6);
        assert_eq!(restored.items(), inventory.items());
    }

    #[test]
    fn empty_inventory_is_header_only() {
        assert_eq!(chest(10).to_bytes().unwrap(), header(0, 0));
    }

    #[test]
    fn load_replaces_existing_contents() {
        let mut source = chest(100);
        source.add(Item::stack(1, 3));
        let bytes = source.to_bytes().unwrap();

        let mut target = chest(100);
        target.add(Item::single(8));
        target.load_bytes(&bytes).unwrap();
        assert_eq!(target.items(), &[Item::stack(1, 3)]);
    }

    #[test]
    fn unknown_version_is_rejected_and_leaves_contents() {
        let mut inventory = chest(100);
        inventory.add(Item::single(8));
        let err = inventory.load_bytes(&header(3, 0)).unwrap_err();
        assert!(matches!(
            err,
            PersistError::UnsupportedVersion {
                version: 3,
                supported: 0
            }
        ));
        assert_eq!(err.error_code(), "PERSIST_UNSUPPORTED_VERSION");
        assert_eq!(inventory.items(), &[Item::single(8)]);
    }

    #[test]
    fn negative_count_is_rejected() {
        let err = chest(100).load_bytes(&header(0, -1)).unwrap_err();
        assert!(matches!(err, PersistError::InvalidCount { count: -1 }));
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
    }

    #[test]
    fn null_slot_is_skipped() {
        let mut bytes = header(0, 3);
        BincodeItemCodec.write_item(&Item::stack(1, 2), &mut bytes).unwrap();
        bytes.push(0);
        BincodeItemCodec.write_item(&Item::single(4), &mut bytes).unwrap();

        let mut inventory = chest(100);
        let report = inventory.load_bytes(&bytes).unwrap();
        assert_eq!(report.loaded, 2);
        assert_eq!(report.skipped, 1);
        assert_eq!(inventory.items(), &[Item::stack(1, 2), Item::single(4)]);
    }

    #[test]
    fn entries_over_capacity_are_reported() {
        let mut big = chest(100);
        big.add(Item::stack(1, 8));
        big.add(Item::stack(2, 5));
        big.add(Item::single(3));
        let bytes = big.to_bytes().unwrap();

        let mut small = chest(10);
        let report = small.load_bytes(&bytes).unwrap();
        assert_eq!(small.items(), &[Item::stack(1, 8), Item::single(3)]);
        assert_eq!(report.overflow, vec![Item::stack(2, 5)]);
        assert!(!report.is_clean());
        assert!(small.total_count() <= small.capacity());
    }

    #[test]
    fn truncated_stream_leaves_contents() {
        let mut source = chest(100);
        source.add(Item::stack(1, 3));
        source.add(Item::stack(2, 3));
        let bytes = source.to_bytes().unwrap();

        let mut inventory = chest(100);
        inventory.add(Item::single(8));
        let err = inventory.load_bytes(&bytes[..bytes.len() - 2]).unwrap_err();
        assert!(matches!(err, PersistError::Codec(CodecError::Io(_))));
        assert_eq!(inventory.items(), &[Item::single(8)]);
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hopper.inv");

        let mut inventory = chest(64);
        inventory.add(Item::cube_stack(5, 2, 0, 30));
        inventory.add(Item::durability(9, 12, 40));
        inventory.save_file(&path).unwrap();
        assert!(!dir.path().join("hopper.inv.tmp").exists());

        let mut restored = chest(64);
        restored.load_file(&path).unwrap();
        assert_eq!(restored, inventory);
    }

    #[test]
    fn severity_by_failure_kind() {
        let version = chest(10).load_bytes(&header(7, 0)).unwrap_err();
        assert_eq!(version.severity(), ErrorSeverity::Validation);

        let count = chest(10).load_bytes(&header(0, -4)).unwrap_err();
        assert_eq!(count.severity(), ErrorSeverity::Fatal);

        let truncated = chest(10).load_bytes(&[0, 0]).unwrap_err();
        assert!(truncated.severity().is_recoverable());

        let mut bytes = header(0, 1);
        bytes.extend_from_slice(&[1, 42, 0, 0, 0]);
        let corrupt = chest(10).load_bytes(&bytes).unwrap_err();
        assert_eq!(corrupt.error_code(), "CODEC_ENCODING");
        assert!(corrupt.severity().is_fatal());
    }

    #[test]
    fn temp_path_appends_to_file_name() {
        assert_eq!(temp_path_for(Path::new("saves/chest.inv")), Path::new("saves/chest.inv.tmp"));
        assert_eq!(temp_path_for(Path::new("saves/chest.tmp")), Path::new("saves/chest.tmp.tmp"));
        assert_ne!(temp_path_for(Path::new("chest.inv")), temp_path_for(Path::new("chest.dat")));
    }

    #[test]
    fn save_over_tmp_named_file_keeps_previous_on_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.tmp");

        let mut first = chest(64);
        first.add(Item::stack(1, 5));
        first.save_file(&path).unwrap();

        let mut second = chest(64);
        second.add(Item::stack(2, 9));
        second.save_file(&path).unwrap();

        let mut restored = chest(64);
        restored.load_file(&path).unwrap();
        assert_eq!(restored.items(), &[Item::stack(2, 9)]);
        assert!(!dir.path().join("cart.tmp.tmp").exists());
    }

    #[test]
    fn failed_save_removes_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        // A directory at the target path makes the final rename fail.
        let path = dir.path().join("locked.inv");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), b"x").unwrap();

        let mut inventory = chest(64);
        inventory.add(Item::single(3));
        let err = inventory.save_file(&path).unwrap_err();

        assert!(matches!(err, PersistError::Io(_)));
        assert!(!dir.path().join("locked.inv.tmp").exists());
        assert!(path.is_dir());
    }
}
