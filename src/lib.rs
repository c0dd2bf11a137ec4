//! Append-only train container with snapshot-bounded traversal cursors
//!
//! A [`Train`] owns an ordered list of [`Wagon`]s and a running passenger
//! total. Traversal goes through a separate [`Cursor`] that shares the
//! train's backing list but captures its length once, at creation: the
//! cursor yields exactly the wagons present at that instant, in append
//! order, then signals [`Step::End`] — wagons appended later are never
//! visited by it. Every request for iteration hands out a fresh cursor,
//! so concurrent-in-spirit traversals never share a position counter.
//!
//! The [`Interval`] generator and the [`report`] banner helpers support
//! the demo binary.

pub mod cli;
pub mod config;
pub mod cursor;
pub mod error;
pub mod interval;
pub mod report;
pub mod roster;
pub mod train;
pub mod wagon;

pub use cursor::{Cursor, Step};
pub use error::{ConsistError, Result};
pub use interval::Interval;
pub use train::Train;
pub use wagon::Wagon;
