//! Knight move offsets and destination enumeration.
//!
//! [`KnightOffset::ALL`] fixes the order in which a knight's destinations are
//! visited. Searches rely on that order to break ties, so it is part of the
//! observable behavior and must not be changed.

use std::iter::FusedIterator;

use crate::Square;

/// A knight displacement `(Δfile, Δrank)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KnightOffset {
    file: i8,
    rank: i8,
}

impl KnightOffset {
    /// All eight knight displacements in enumeration order.
    pub const ALL: [Self; 8] = [
        Self::new(2, 1),
        Self::new(2, -1),
        Self::new(1, 2),
        Self::new(1, -2),
        Self::new(-1, 2),
        Self::new(-1, -2),
        Self::new(-2, 1),
        Self::new(-2, -1),
    ];

    const fn new(file: i8, rank: i8) -> Self {
        Self { file, rank }
    }

    /// Returns the file displacement.
    #[must_use]
    #[inline]
    pub const fn file(self) -> i8 {
        self.file
    }

    /// Returns the rank displacement.
    #[must_use]
    #[inline]
    pub const fn rank(self) -> i8 {
        self.rank
    }

    /// Returns the displacement that undoes this one.
    #[must_use]
    #[inline]
    pub const fn inverse(self) -> Self {
        Self::new(-self.file, -self.rank)
    }
}

impl Square {
    /// Applies a knight offset, returning `None` if the result is off the board.
    ///
    /// # Examples
    ///
    /// ```
    /// use warnsdorff_core::{KnightOffset, Square};
    ///
    /// let a1 = Square::new(1, 1);
    /// assert_eq!(a1.offset(KnightOffset::ALL[0]), Some(Square::new(3, 2)));
    /// assert_eq!(a1.offset(KnightOffset::ALL[1]), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn offset(self, offset: KnightOffset) -> Option<Self> {
        let file = self.file().checked_add_signed(offset.file)?;
        let rank = self.rank().checked_add_signed(offset.rank)?;
        Self::try_new(file, rank)
    }

    /// Returns the on-board knight destinations of this square in offset order.
    ///
    /// Nothing is materialized; each call walks [`KnightOffset::ALL`] again.
    #[must_use]
    #[inline]
    pub fn knight_destinations(self) -> KnightDestinations {
        KnightDestinations {
            origin: self,
            next: 0,
        }
    }

    /// Returns `true` if `other` is one knight move away from this square.
    #[must_use]
    pub fn is_knight_move(self, other: Self) -> bool {
        let df = i16::from(other.file()) - i16::from(self.file());
        let dr = i16::from(other.rank()) - i16::from(self.rank());
        KnightOffset::ALL
            .iter()
            .any(|o| i16::from(o.file) == df && i16::from(o.rank) == dr)
    }
}

/// Iterator over the on-board knight destinations of a square.
///
/// Created by [`Square::knight_destinations`].
#[derive(Debug, Clone)]
pub struct KnightDestinations {
    origin: Square,
    next: usize,
}

impl Iterator for KnightDestinations {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&offset) = KnightOffset::ALL.get(self.next) {
            self.next += 1;
            if let Some(square) = self.origin.offset(offset) {
                return Some(square);
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(KnightOffset::ALL.len().saturating_sub(self.next)))
    }
}

impl FusedIterator for KnightDestinations {}
