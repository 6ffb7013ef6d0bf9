//! The per-value storage node of a [`SkipRing`], and the arena index type used to link
//! towers together.
//!
//! The C-style version of this structure would hold raw `next`/`previous` pointers at
//! every level. Here, every tower lives in a single `Vec` owned by the list, and links
//! are stable indices into that arena. Splicing a tower into a level can therefore never
//! dangle: the arena only ever grows, and indices stay valid until the list is dropped.
//!
//! [`SkipRing`]: crate::SkipRing

/// A stable index into the tower arena of a list.
pub(crate) type TowerIndex = usize;

/// The arena index of the sentinel tower.
///
/// The sentinel is allocated first, so it always sits at index 0. It participates in
/// every level's ring and its `value` is never read as user data.
pub(crate) const SENTINEL: TowerIndex = 0;

/// A skiplist node spanning `1..=max_levels` levels, holding one value and, per level,
/// a forward and a backward link.
///
/// A tower with `L` levels participates in the rings of levels `0..L-1` only.
/// After being spliced into the list, a tower's value and level count never change;
/// only its neighbor links are updated by later insertions.
#[derive(Debug, Clone)]
pub(crate) struct Tower {
    value:    i32,
    next:     Vec<TowerIndex>,
    previous: Vec<TowerIndex>,
}

impl Tower {
    /// Create a tower with `levels` levels, every link pointing at `link`.
    ///
    /// The sentinel is created linked to itself at every level, which is exactly the
    /// empty-ring state. Value towers are created linked to the sentinel and are
    /// immediately respliced level by level during insertion.
    #[must_use]
    pub(crate) fn new(value: i32, levels: usize, link: TowerIndex) -> Self {
        debug_assert!(levels >= 1, "a tower must participate in level 0");

        Self {
            value,
            next:     vec![link; levels],
            previous: vec![link; levels],
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn value(&self) -> i32 {
        self.value
    }

    /// The number of levels this tower participates in.
    #[inline]
    #[must_use]
    pub(crate) fn levels(&self) -> usize {
        self.next.len()
    }

    /// The forward neighbor at `level`.
    ///
    /// # Panics
    /// Panics if this tower does not participate in `level`.
    #[inline]
    #[must_use]
    pub(crate) fn next(&self, level: usize) -> TowerIndex {
        self.next[level]
    }

    /// The backward neighbor at `level`.
    ///
    /// # Panics
    /// Panics if this tower does not participate in `level`.
    #[inline]
    #[must_use]
    pub(crate) fn previous(&self, level: usize) -> TowerIndex {
        self.previous[level]
    }

    pub(crate) fn set_next(&mut self, level: usize, link: TowerIndex) {
        self.next[level] = link;
    }

    pub(crate) fn set_previous(&mut self, level: usize, link: TowerIndex) {
        self.previous[level] = link;
    }
}

#[cfg(test)]
mod tests {
    use super::*;


    #[test]
    fn self_linked_tower() {
        let tower = Tower::new(7, 3, SENTINEL);

        assert_eq!(tower.value(), 7);
        assert_eq!(tower.levels(), 3);

        for level in 0..3 {
            assert_eq!(tower.next(level), SENTINEL);
            assert_eq!(tower.previous(level), SENTINEL);
        }
    }

    #[test]
    fn relinking_levels() {
        let mut tower = Tower::new(-1, 2, SENTINEL);

        tower.set_next(1, 4);
        tower.set_previous(0, 9);

        assert_eq!(tower.next(1), 4);
        assert_eq!(tower.previous(0), 9);
        // Untouched links keep their initial target.
        assert_eq!(tower.next(0), SENTINEL);
        assert_eq!(tower.previous(1), SENTINEL);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn absent_level_panics() {
        let tower = Tower::new(0, 1, SENTINEL);
        let _ = tower.next(1);
    }
}
