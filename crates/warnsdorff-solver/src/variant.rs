use std::fmt::{self, Display};

use warnsdorff_core::Square;

use crate::{BoardState, KnightGraph, TourBuilder, TourOutcome};

/// Board representation used to search for a tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// Search on a [`BoardState`].
    #[default]
    BoardState,
    /// Search on a [`KnightGraph`].
    Graph,
}

impl Variant {
    /// Array containing all variants.
    pub const ALL: [Self; 2] = [Self::BoardState, Self::Graph];

    /// Returns the short name of the variant.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::BoardState => "board state",
            Self::Graph => "graph",
        }
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Searches for a Knight's Tour from `start` on a fresh board of the given variant.
///
/// Every call builds its own board, so calls are independent of each other.
///
/// # Examples
///
/// ```
/// use warnsdorff_core::Square;
/// use warnsdorff_solver::{TourOutcome, Variant, find_tour};
///
/// let outcome = find_tour(Square::new(2, 7), Variant::BoardState);
/// assert_eq!(
///     outcome,
///     TourOutcome::Stuck {
///         placed: 56,
///         last: Square::new(1, 7)
///     }
/// );
/// ```
#[must_use]
pub fn find_tour(start: Square, variant: Variant) -> TourOutcome {
    match variant {
        Variant::BoardState => TourBuilder::<BoardState>::fresh(start).run(),
        Variant::Graph => TourBuilder::<KnightGraph>::fresh(start).run(),
    }
}
