//! An ordered set of `i32` values backed by a skiplist whose levels are closed into
//! rings by a shared sentinel tower.
//!
//! Search and insertion run in expected-logarithmic time without any rebalancing: each
//! inserted tower is assigned a probabilistic level count by a seeded [`LevelGenerator`],
//! and taller towers form express lanes over the fully-ordered level-0 ring. Every level
//! is doubly linked, which is what makes the [backward cursor](Direction::Backward) as
//! cheap as the forward one.
//!
//! Duplicate values are silently rejected, and individual values cannot be removed;
//! dropping the list releases everything at once.
//!
//! ```
//! use skipring::{Direction, SkipRing};
//!
//! let mut list = SkipRing::new(4)?;
//! for value in [5, 3, 8, 1] {
//!     list.insert(value);
//! }
//!
//! assert_eq!(list.iter(Direction::Forward).collect::<Vec<_>>(), [1, 3, 5, 8]);
//! assert_eq!(list.at(2)?, 5);
//! assert!(list.search(8).found);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod iter;
mod levels;
mod list;
mod tower;


pub use self::{
    error::{BuildError, CursorError, IndexError},
    iter::{Direction, Iter},
    levels::{GeometricLevels, LevelGenerator},
    list::{SearchOutcome, SkipRing},
};
