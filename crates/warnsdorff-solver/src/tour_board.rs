use warnsdorff_core::{Square, SquareSet};

/// A board representation the tour builder can walk on.
///
/// Implementations track which squares have been visited and answer degree
/// queries. The selection rule itself lives in [`select_next`], which all
/// representations share.
///
/// [`select_next`]: TourBoard::select_next
pub trait TourBoard {
    /// Returns a short name of the representation, used in log messages.
    fn name(&self) -> &'static str;

    /// Returns the set of visited squares.
    fn visited(&self) -> SquareSet;

    /// Returns `true` if `square` has been visited.
    fn is_visited(&self, square: Square) -> bool {
        self.visited().contains(square)
    }

    /// Marks `square` as visited.
    ///
    /// A square must be visited at most once.
    fn visit(&mut self, square: Square);

    /// Returns the number of unvisited squares one knight move away from `square`.
    fn degree(&self, square: Square) -> usize;

    /// Returns the unvisited squares one knight move away from `from`.
    ///
    /// Candidates are yielded in [`KnightOffset::ALL`] order.
    ///
    /// [`KnightOffset::ALL`]: warnsdorff_core::KnightOffset::ALL
    fn candidates(&self, from: Square) -> impl Iterator<Item = Square> + '_;

    /// Chooses the next square of the tour from `from` by Warnsdorff's rule.
    ///
    /// Returns the candidate with the strictly smallest degree. On a tie the
    /// candidate enumerated first wins. Returns `None` when `from` has no
    /// unvisited neighbor.
    ///
    /// This only reads the board; the caller is expected to [`visit`] the
    /// returned square.
    ///
    /// [`visit`]: TourBoard::visit
    fn select_next(&self, from: Square) -> Option<Square> {
        let mut best: Option<(Square, usize)> = None;
        for candidate in self.candidates(from) {
            let degree = self.degree(candidate);
            if best.is_none_or(|(_, best_degree)| degree < best_degree) {
                best = Some((candidate, degree));
            }
        }
        best.map(|(square, _)| square)
    }
}
