use warnsdorff_core::{Square, SquareSet};

use crate::TourBoard;

/// Board representation holding only a visitation grid.
///
/// Degrees are recomputed on demand by applying the eight knight offsets and
/// counting the on-board destinations that are still unvisited.
///
/// # Examples
///
/// ```
/// use warnsdorff_core::Square;
/// use warnsdorff_solver::{BoardState, TourBoard as _};
///
/// let mut board = BoardState::new();
/// let a1 = Square::new(1, 1);
/// assert_eq!(board.degree(a1), 2);
///
/// board.visit(Square::new(2, 3));
/// assert_eq!(board.degree(a1), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardState {
    visited: SquareSet,
}

impl BoardState {
    /// Creates a board with every square unvisited.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TourBoard for BoardState {
    fn name(&self) -> &'static str {
        "board state"
    }

    fn visited(&self) -> SquareSet {
        self.visited
    }

    fn visit(&mut self, square: Square) {
        let added = self.visited.insert(square);
        debug_assert!(added, "{square} visited twice");
    }

    fn degree(&self, square: Square) -> usize {
        self.candidates(square).count()
    }

    fn candidates(&self, from: Square) -> impl Iterator<Item = Square> + '_ {
        let visited = self.visited;
        from.knight_destinations()
            .filter(move |&square| !visited.contains(square))
    }
}
