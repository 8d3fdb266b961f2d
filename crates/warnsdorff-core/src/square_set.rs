//! A set of board squares backed by a 64-bit mask.
//!
//! # Examples
//!
//! ```
//! use warnsdorff_core::{Square, SquareSet};
//!
//! let mut set = SquareSet::new();
//! assert!(set.insert(Square::new(1, 1)));
//! assert!(!set.insert(Square::new(1, 1)));
//! set.insert(Square::new(8, 8));
//!
//! assert_eq!(set.len(), 2);
//! assert_eq!(
//!     set.iter().collect::<Vec<_>>(),
//!     [Square::new(1, 1), Square::new(8, 8)]
//! );
//! ```

use std::iter::FusedIterator;

use crate::{SQUARE_COUNT, Square};

/// A set of squares, one bit per square index.
///
/// Iteration yields squares in index order (see [`Square::index`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SquareSet {
    bits: u64,
}

impl SquareSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set of all 64 squares.
    pub const FULL: Self = Self { bits: u64::MAX };

    /// Creates an empty set.
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    #[inline]
    const fn bit(square: Square) -> u64 {
        1 << square.index()
    }

    /// Adds a square. Returns `true` if it was not already present.
    #[inline]
    pub fn insert(&mut self, square: Square) -> bool {
        let added = !self.contains(square);
        self.bits |= Self::bit(square);
        added
    }

    /// Removes a square. Returns `true` if it was present.
    #[inline]
    pub fn remove(&mut self, square: Square) -> bool {
        let present = self.contains(square);
        self.bits &= !Self::bit(square);
        present
    }

    /// Returns `true` if the set contains the square.
    #[must_use]
    #[inline]
    pub const fn contains(self, square: Square) -> bool {
        self.bits & Self::bit(square) != 0
    }

    /// Returns the number of squares in the set.
    #[must_use]
    #[inline]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns `true` if the set contains every square of the board.
    #[must_use]
    #[inline]
    pub const fn is_full(self) -> bool {
        self.bits == u64::MAX
    }

    /// Returns an iterator over the squares in index order.
    #[must_use]
    #[inline]
    pub const fn iter(self) -> Iter {
        Iter { bits: self.bits }
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<T: IntoIterator<Item = Square>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<Square> for SquareSet {
    fn extend<T: IntoIterator<Item = Square>>(&mut self, iter: T) {
        for square in iter {
            self.insert(square);
        }
    }
}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the squares of a [`SquareSet`].
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u64,
}

impl Iterator for Iter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros() as usize;
        debug_assert!(index < SQUARE_COUNT);
        self.bits &= self.bits - 1;
        Some(Square::from_index(index))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for Iter {}
impl ExactSizeIterator for Iter {}
