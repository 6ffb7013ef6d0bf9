//! Level assignment for newly-inserted towers.
//!
//! The list consults its level generator exactly once per successful insertion, and
//! treats it as a black box: any value in `1..=max_levels` is acceptable. The default
//! generator is seeded and fully deterministic, so two lists built from the same input
//! sequence have identical topology.

use oorandom::Rand32;


/// The seed used by [`SkipRing::new`].
///
/// A fixed default seed makes list topology reproducible across runs, which the
/// deterministic-behavior contract of the container requires.
///
/// [`SkipRing::new`]: crate::SkipRing::new
pub(crate) const DEFAULT_SEED: u64 = 0;


/// A source of level counts for new towers.
///
/// Implementations must return a value in `1..=max_levels`, and must not be called with
/// `max_levels == 0` (the list never does; a list cannot be built with zero levels).
pub trait LevelGenerator {
    /// Produce the number of levels for the next inserted tower,
    /// in the range `1..=max_levels`.
    #[must_use]
    fn level_count(&mut self, max_levels: usize) -> usize;
}

/// The default level generator: a seeded PRNG drawing from a geometric distribution,
/// where each successive level is a quarter as likely as the one below it.
///
/// A `1/4` growth chance uses less memory than the also-common `1/2`, and is what
/// Google's LevelDB implementation uses.
///
/// Deterministic given its seed: two `GeometricLevels` with the same seed produce the
/// same sequence of level counts for the same sequence of bounds.
#[derive(Debug, Clone)]
pub struct GeometricLevels {
    prng: Rand32,
}

impl GeometricLevels {
    #[inline]
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            prng: Rand32::new(seed),
        }
    }
}

impl LevelGenerator for GeometricLevels {
    fn level_count(&mut self, max_levels: usize) -> usize {
        debug_assert!(max_levels >= 1, "the list never asks for a level count with a zero bound");

        let mut levels = 1;
        while levels < max_levels && self.prng.rand_u32() % 4 == 0 {
            levels += 1;
        }
        levels
    }
}
