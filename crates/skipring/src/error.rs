use thiserror::Error;


/// An error from constructing a [`SkipRing`] with an unusable configuration.
///
/// [`SkipRing`]: crate::SkipRing
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// Every tower, the sentinel included, must participate in level 0.
    #[error("a skipring needs at least one level")]
    NoLevels,
}

/// An error from positional access into a [`SkipRing`].
///
/// [`SkipRing`]: crate::SkipRing
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    /// The requested position is past the last value.
    #[error("index {index} is out of bounds for a skipring of length {len}")]
    OutOfBounds {
        /// The requested position.
        index: usize,
        /// The number of values in the list at the time of the call.
        len:   usize,
    },
}

/// An error from reading a value through an [`Iter`] cursor.
///
/// [`Iter`]: crate::Iter
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorError {
    /// The cursor is on the sentinel, which holds no user value.
    #[error("the cursor is at the end of iteration and holds no value")]
    AtEnd,
}
