//! List transfer engine.
//!
//! Pure algorithms over ordered item sequences. They take exclusive `&mut`
//! access to the sequences for the duration of the call and report what did
//! not transfer through their return value:
//!
//! - [`add`]: insert one item, consolidating stacks, returning the overflow
//! - [`take`]: remove by example, optionally accepting a partial stack
//! - [`move_many`]: greedy, filtered, capacity-bounded bulk move
//!
//! Scans always run front to back and the first eligible entry wins, so the
//! outcome is fully determined by sequence order.
mod add;
mod count;
mod filter;
mod move_many;
mod take;

pub use add::add;
pub use count::{count_like, count_of_cube, count_of_id, total_count};
pub use filter::ItemFilter;
pub use move_many::{MoveRequest, move_many};
pub use take::take;
