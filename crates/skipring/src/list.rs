//! The skiplist core: tower arena ownership, the multi-level insert traversal, the
//! hop-counted search descent, and positional/whole-structure reads.

use tracing::Level as LogLevel;

use crate::{
    error::{BuildError, IndexError},
    iter::{Direction, Iter},
    levels::{DEFAULT_SEED, GeometricLevels, LevelGenerator},
    tower::{SENTINEL, Tower, TowerIndex},
};


/// An ordered set of `i32` values backed by a skiplist whose every level closes into a
/// ring through a sentinel tower.
///
/// Expected-logarithmic search and insertion, without rebalancing. Values are kept in
/// strictly ascending order on level 0; each higher level holds a probabilistically
/// thinning subsequence of the level below, chosen by the list's [`LevelGenerator`].
/// Inserting a value already in the set is a silent no-op. Individual values cannot be
/// removed; dropping the list releases every tower at once.
///
/// The number of levels is fixed at construction and never changes. Two lists built with
/// the same seed from the same insertion sequence have identical topology, including
/// [`search`] hop counts.
///
/// [`search`]: SkipRing::search
#[derive(Debug, Clone)]
pub struct SkipRing<Levels = GeometricLevels> {
    /// All towers of the list. `towers[SENTINEL]` is the sentinel; the arena only ever
    /// grows, so a `TowerIndex` stays valid for the life of the list.
    towers:     Vec<Tower>,
    max_levels: usize,
    len:        usize,
    levels:     Levels,
}

impl SkipRing {
    /// Create an empty list with `max_levels` levels and the default, fixed-seed
    /// level generator.
    ///
    /// The fixed seed makes insertion topology reproducible: two lists created this way
    /// and fed the same values end up identical.
    #[inline]
    pub fn new(max_levels: usize) -> Result<Self, BuildError> {
        Self::new_seeded(max_levels, DEFAULT_SEED)
    }

    /// Create an empty list whose level generator is seeded with `seed`.
    #[inline]
    pub fn new_seeded(max_levels: usize, seed: u64) -> Result<Self, BuildError> {
        Self::with_generator(max_levels, GeometricLevels::new(seed))
    }
}

impl<Levels> SkipRing<Levels> {
    /// Create an empty list with `max_levels` levels, drawing tower level counts from
    /// the provided generator.
    pub fn with_generator(max_levels: usize, levels: Levels) -> Result<Self, BuildError> {
        if max_levels == 0 {
            return Err(BuildError::NoLevels);
        }

        tracing::event!(LogLevel::TRACE, max_levels, "creating empty skipring");

        // The sentinel closes every level into a ring; in an empty list it is its own
        // neighbor at every level.
        Ok(Self {
            towers: vec![Tower::new(0, max_levels, SENTINEL)],
            max_levels,
            len: 0,
            levels,
        })
    }

    /// The number of distinct values in the list. O(1).
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of levels the list was created with.
    #[inline]
    #[must_use]
    pub const fn max_levels(&self) -> usize {
        self.max_levels
    }

    /// The value at position `index` in ascending order, by walking the level-0 ring.
    ///
    /// O(n); no level-aware fast path exists for positional access.
    pub fn at(&self, index: usize) -> Result<i32, IndexError> {
        if index >= self.len {
            return Err(IndexError::OutOfBounds { index, len: self.len });
        }

        let mut current = self.towers[SENTINEL].next(0);
        for _ in 0..index {
            current = self.towers[current].next(0);
        }
        Ok(self.towers[current].value())
    }

    /// Invoke `visitor` on every value, in ascending order, exactly once each.
    ///
    /// Cannot short-circuit; for early exit, use [`iter`] instead.
    ///
    /// [`iter`]: SkipRing::iter
    pub fn for_each<F: FnMut(i32)>(&self, mut visitor: F) {
        let mut current = self.towers[SENTINEL].next(0);
        while current != SENTINEL {
            visitor(self.towers[current].value());
            current = self.towers[current].next(0);
        }
    }

    /// Whether `value` is in the list, along with the number of tower-to-tower hops the
    /// search performed.
    ///
    /// The search descends level by level from the top, advancing while the next tower
    /// is not the sentinel and its value does not exceed the target. It returns the
    /// moment the tower it stands on matches, even on a level above 0; the hop count is
    /// part of the contract and reflects that early exit.
    #[must_use]
    pub fn search(&self, value: i32) -> SearchOutcome {
        let mut hops = 0;
        let mut current = SENTINEL;

        for level in (0..self.max_levels).rev() {
            loop {
                let next = self.towers[current].next(level);
                if next == SENTINEL || self.towers[next].value() > value {
                    // This level looked too far ahead; drop down and keep scanning.
                    break;
                }

                current = next;
                hops += 1;

                if self.towers[current].value() == value {
                    return SearchOutcome { found: true, hops };
                }
            }
        }

        SearchOutcome { found: false, hops }
    }

    /// A cursor over the level-0 ring, fixed to `direction`, positioned on the first
    /// value in that direction (or at the end, if the list is empty).
    #[inline]
    #[must_use]
    pub fn iter(&self, direction: Direction) -> Iter<'_, Levels> {
        Iter::new(self, direction)
    }

    /// The level-0 neighbor of `from` in the given direction.
    #[inline]
    pub(crate) fn step(&self, from: TowerIndex, direction: Direction) -> TowerIndex {
        match direction {
            Direction::Forward  => self.towers[from].next(0),
            Direction::Backward => self.towers[from].previous(0),
        }
    }

    /// The value stored at `index`. Must not be called on the sentinel.
    #[inline]
    pub(crate) fn value_at(&self, index: TowerIndex) -> i32 {
        debug_assert!(index != SENTINEL, "the sentinel's value is not user data");

        self.towers[index].value()
    }

    /// Splice `tower` into the level-`level` ring immediately before `successor`,
    /// rewiring the four links among the tower, its new predecessor, and `successor`.
    fn splice_before(&mut self, level: usize, tower: TowerIndex, successor: TowerIndex) {
        let predecessor = self.towers[successor].previous(level);

        self.towers[tower].set_previous(level, predecessor);
        self.towers[tower].set_next(level, successor);
        self.towers[predecessor].set_next(level, tower);
        self.towers[successor].set_previous(level, tower);
    }
}

impl<Levels: LevelGenerator> SkipRing<Levels> {
    /// Insert `value`, keeping ascending order on every level.
    ///
    /// Returns `true` if the value was added, and `false` if it was already present;
    /// a duplicate never mutates the list and is not an error. The level generator is
    /// consulted only when something is actually inserted.
    pub fn insert(&mut self, value: i32) -> bool {
        // Scan level 0 for the first tower whose value is >= `value`; the sentinel
        // bounds the scan, so inserting a new minimum, maximum, or into an empty list
        // needs no special casing.
        let mut successor = self.towers[SENTINEL].next(0);
        while successor != SENTINEL && self.towers[successor].value() < value {
            successor = self.towers[successor].next(0);
        }

        if successor != SENTINEL && self.towers[successor].value() == value {
            tracing::event!(LogLevel::TRACE, value, "rejecting duplicate value");
            return false;
        }

        let levels = self.levels.level_count(self.max_levels);
        let tower = self.towers.len();
        self.towers.push(Tower::new(value, levels, SENTINEL));

        self.splice_before(0, tower, successor);

        for level in 1..levels {
            // Walk the level below, starting from the new tower's successor there, to
            // the nearest right neighbor tall enough to participate at `level`. The
            // sentinel participates at every level, so the walk always terminates.
            let mut neighbor = self.towers[tower].next(level - 1);
            while self.towers[neighbor].levels() <= level {
                neighbor = self.towers[neighbor].next(level - 1);
            }

            self.splice_before(level, tower, neighbor);
        }

        self.len += 1;
        true
    }
}

impl<'a, Levels> IntoIterator for &'a SkipRing<Levels> {
    type Item     = i32;
    type IntoIter = Iter<'a, Levels>;

    /// A forward cursor over the list.
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter(Direction::Forward)
    }
}

/// The result of a [`SkipRing::search`]: whether the value was found, and the cost of
/// finding out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Whether the value is in the list.
    pub found: bool,
    /// The number of tower-to-tower hops the search performed, an instrumentation
    /// output for analyzing expected-logarithmic behavior.
    pub hops:  usize,
}
