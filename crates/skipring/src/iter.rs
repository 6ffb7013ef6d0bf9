//! Bidirectional cursors over the level-0 ring.
//!
//! A cursor reads the list's sentinel and level-0 links but never mutates them; since it
//! borrows the list, the borrow checker rules out both mutation during traversal and a
//! cursor outliving its list.

use crate::{
    error::CursorError,
    list::SkipRing,
    tower::{SENTINEL, TowerIndex},
};


/// The direction of travel of an [`Iter`], fixed when the cursor is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Travel along `next` links, yielding values in ascending order.
    Forward,
    /// Travel along `previous` links, yielding values in descending order.
    Backward,
}

/// A cursor over the level-0 ring of a [`SkipRing`], traveling in one fixed direction.
///
/// A fresh cursor sits on the first value in its direction (or on the sentinel, if the
/// list is empty). Conceptually the cursor is circular, not fused: advancing while
/// [`at_end`] wraps around and restarts the traversal. Callers must check [`at_end`]
/// before [`value`], since the sentinel holds no user value.
///
/// [`at_end`]: Iter::at_end
/// [`value`]: Iter::value
#[derive(Debug)]
pub struct Iter<'a, Levels> {
    list:      &'a SkipRing<Levels>,
    cursor:    TowerIndex,
    direction: Direction,
}

impl<'a, Levels> Iter<'a, Levels> {
    #[inline]
    #[must_use]
    pub(crate) fn new(list: &'a SkipRing<Levels>, direction: Direction) -> Self {
        Self {
            list,
            cursor: list.step(SENTINEL, direction),
            direction,
        }
    }

    /// Whether the cursor has passed the last value in its direction and sits on the
    /// sentinel.
    ///
    /// True immediately after creation iff the list is empty.
    #[inline]
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.cursor == SENTINEL
    }

    /// Move one step in the fixed direction.
    ///
    /// Advancing while [`at_end`] moves to the sentinel's neighbor, restarting the
    /// traversal from the first value.
    ///
    /// [`at_end`]: Iter::at_end
    #[inline]
    pub fn advance(&mut self) {
        self.cursor = self.list.step(self.cursor, self.direction);
    }

    /// The value under the cursor, or [`CursorError::AtEnd`] if the cursor is on the
    /// sentinel.
    #[inline]
    pub fn value(&self) -> Result<i32, CursorError> {
        if self.at_end() {
            Err(CursorError::AtEnd)
        } else {
            Ok(self.list.value_at(self.cursor))
        }
    }

    /// The direction this cursor was created with.
    #[inline]
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }
}

impl<Levels> Clone for Iter<'_, Levels> {
    /// The clone travels independently; the cursor position is not shared.
    #[inline]
    fn clone(&self) -> Self {
        Self {
            list:      self.list,
            cursor:    self.cursor,
            direction: self.direction,
        }
    }
}

impl<Levels> Iterator for Iter<'_, Levels> {
    type Item = i32;

    /// Yield the value under the cursor and advance past it.
    ///
    /// Returns `None` once per lap, when the cursor reaches the sentinel; like the
    /// cursor protocol itself, the iterator is circular rather than fused, so calling
    /// `next` again starts the following lap.
    fn next(&mut self) -> Option<i32> {
        let value = self.value().ok();
        self.advance();
        value
    }
}
