use warnsdorff_core::{SQUARE_COUNT, Square};

use crate::{Tour, TourBoard, TourError};

/// Progress of a [`TourBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum TourState {
    /// The start square is placed and no step has been taken yet.
    Initialized,
    /// At least one step has been taken and the tour is not complete.
    Stepping,
    /// All 64 squares are placed.
    Succeeded,
    /// The heuristic reached a square with no unvisited neighbor.
    Failed,
}

impl TourState {
    /// Returns `true` for [`Succeeded`](Self::Succeeded) and [`Failed`](Self::Failed).
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

/// Result of running a [`TourBuilder`] to completion.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum TourOutcome {
    /// A tour covering the whole board was found.
    Complete(Tour),
    /// The heuristic got stuck before covering the board.
    Stuck {
        /// Number of squares placed, the start included.
        placed: usize,
        /// The square the knight could not leave.
        last: Square,
    },
}

impl TourOutcome {
    /// Returns the tour if one was found.
    #[must_use]
    pub fn tour(&self) -> Option<&Tour> {
        match self {
            Self::Complete(tour) => Some(tour),
            Self::Stuck { .. } => None,
        }
    }

    /// Consumes the outcome and returns the tour if one was found.
    #[must_use]
    pub fn into_tour(self) -> Option<Tour> {
        match self {
            Self::Complete(tour) => Some(tour),
            Self::Stuck { .. } => None,
        }
    }
}

/// Greedy Knight's Tour construction over a [`TourBoard`].
///
/// The builder owns the board for the duration of the walk. Each
/// [`step`](Self::step) asks the board for the next square by Warnsdorff's
/// rule, visits it and appends it to the path. There is no backtracking: when
/// the rule finds no move the builder fails for good.
///
/// # Examples
///
/// ```
/// use warnsdorff_core::Square;
/// use warnsdorff_solver::{KnightGraph, TourBuilder, TourState};
///
/// let mut builder = TourBuilder::new(KnightGraph::new(), Square::new(1, 1))?;
/// assert_eq!(builder.state(), TourState::Initialized);
///
/// assert_eq!(builder.step(), TourState::Stepping);
/// assert_eq!(builder.current(), Square::new(3, 2));
///
/// let outcome = builder.run();
/// assert!(outcome.is_complete());
/// # Ok::<(), warnsdorff_solver::TourError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TourBuilder<B> {
    board: B,
    path: Vec<Square>,
    state: TourState,
}

impl<B> TourBuilder<B>
where
    B: TourBoard,
{
    /// Starts a tour at `start` on the given board.
    ///
    /// The board may already contain visited squares; they are treated as
    /// unavailable for the whole walk.
    ///
    /// # Errors
    ///
    /// Returns [`TourError::StartAlreadyVisited`] if `start` is already visited
    /// on `board`.
    pub fn new(board: B, start: Square) -> Result<Self, TourError> {
        if board.is_visited(start) {
            return Err(TourError::StartAlreadyVisited { square: start });
        }
        Ok(Self::start_unchecked(board, start))
    }

    /// Starts a tour at `start` on a fresh board.
    #[must_use]
    pub fn fresh(start: Square) -> Self
    where
        B: Default,
    {
        Self::start_unchecked(B::default(), start)
    }

    fn start_unchecked(mut board: B, start: Square) -> Self {
        log::debug!("starting tour at {start} on {}", board.name());
        board.visit(start);
        let mut path = Vec::with_capacity(SQUARE_COUNT);
        path.push(start);
        Self {
            board,
            path,
            state: TourState::Initialized,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> TourState {
        self.state
    }

    /// Returns the board being walked.
    #[must_use]
    pub fn board(&self) -> &B {
        &self.board
    }

    /// Returns the square the knight stands on.
    #[must_use]
    pub fn current(&self) -> Square {
        self.path[self.path.len() - 1]
    }

    /// Returns the squares placed so far, in visiting order.
    ///
    /// Once the builder has failed this is the partial walk up to the dead end;
    /// it is not a tour.
    #[must_use]
    pub fn visited_squares(&self) -> &[Square] {
        &self.path
    }

    /// Takes one step and returns the resulting state.
    ///
    /// In a terminal state this does nothing.
    pub fn step(&mut self) -> TourState {
        if self.state.is_terminal() {
            return self.state;
        }

        let current = self.current();
        let Some(next) = self.board.select_next(current) else {
            log::debug!(
                "no move from {current} after {} squares on {}",
                self.path.len(),
                self.board.name()
            );
            self.state = TourState::Failed;
            return self.state;
        };
        debug_assert!(current.is_knight_move(next));

        log::trace!(
            "step {}: {current} -> {next} (degree {})",
            self.path.len(),
            self.board.degree(next)
        );
        self.board.visit(next);
        self.path.push(next);

        self.state = if self.path.len() == SQUARE_COUNT {
            log::debug!(
                "tour from {} complete on {}",
                self.path[0],
                self.board.name()
            );
            TourState::Succeeded
        } else {
            TourState::Stepping
        };
        self.state
    }

    /// Steps until a terminal state is reached.
    #[must_use]
    pub fn run(mut self) -> TourOutcome {
        while !self.step().is_terminal() {}
        self.into_outcome()
    }

    fn into_outcome(self) -> TourOutcome {
        debug_assert!(self.state.is_terminal());
        if self.state.is_succeeded() {
            TourOutcome::Complete(Tour::from_path(self.path))
        } else {
            TourOutcome::Stuck {
                placed: self.path.len(),
                last: self.current(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use warnsdorff_core::SquareSet;

    use super::*;
    use crate::{
        BoardState, KnightGraph,
        testing::{A1_TOUR, DEAD_ENDS, assert_valid_tour, sq, squares},
    };

    fn run_fresh<B: TourBoard + Default>(start: Square) -> TourOutcome {
        TourBuilder::<B>::fresh(start).run()
    }

    #[test]
    fn test_variants_agree_on_every_start() {
        for start in Square::ALL {
            let board = run_fresh::<BoardState>(start);
            let graph = run_fresh::<KnightGraph>(start);
            assert_eq!(board, graph, "start {start}");
        }
    }

    #[test]
    fn test_successful_tours_are_valid() {
        for start in Square::ALL {
            if let TourOutcome::Complete(tour) = run_fresh::<BoardState>(start) {
                assert_eq!(tour.start(), start);
                assert_valid_tour(tour.squares());
            }
        }
    }

    #[test]
    fn test_degrees_agree_at_every_step() {
        let mut board = TourBuilder::<BoardState>::fresh(sq("e4"));
        let mut graph = TourBuilder::<KnightGraph>::fresh(sq("e4"));
        loop {
            for square in Square::ALL {
                assert_eq!(
                    board.board().degree(square),
                    graph.board().degree(square),
                    "degree of {square} after {} squares",
                    board.visited_squares().len()
                );
            }
            assert_eq!(board.board().visited(), graph.board().visited());
            let state = board.step();
            assert_eq!(graph.step(), state);
            assert_eq!(board.current(), graph.current());
            if state.is_terminal() {
                break;
            }
        }
    }

    #[test]
    fn test_a1_tour_is_fixed() {
        for outcome in [
            run_fresh::<BoardState>(sq("a1")),
            run_fresh::<KnightGraph>(sq("a1")),
        ] {
            let tour = outcome.into_tour().unwrap();
            assert_eq!(tour.squares(), squares(A1_TOUR));
        }
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        for start in ["a1", "e4", "h8", "b7"].map(sq) {
            let first = run_fresh::<BoardState>(start);
            let second = run_fresh::<BoardState>(start);
            assert_eq!(first, second);
            let first = run_fresh::<KnightGraph>(start);
            let second = run_fresh::<KnightGraph>(start);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_known_dead_ends() {
        for start in Square::ALL {
            let expected = DEAD_ENDS
                .iter()
                .find(|(name, _, _)| sq(name) == start)
                .map(|&(_, placed, last)| TourOutcome::Stuck {
                    placed,
                    last: sq(last),
                });
            let outcome = run_fresh::<KnightGraph>(start);
            match expected {
                Some(expected) => assert_eq!(outcome, expected, "start {start}"),
                None => assert!(outcome.is_complete(), "start {start}"),
            }
        }
    }

    #[test]
    fn test_closed_tours() {
        let closed: Vec<_> = Square::ALL
            .into_iter()
            .filter(|&start| {
                run_fresh::<BoardState>(start)
                    .tour()
                    .is_some_and(Tour::is_closed)
            })
            .collect();
        assert_eq!(closed, ["a2", "b4", "b5", "c4", "c6", "d3"].map(sq));
    }

    fn assert_fails_immediately<B: TourBoard>(mut board: B) {
        board.visit(sq("c2"));
        board.visit(sq("b3"));
        let mut builder = TourBuilder::new(board, sq("a1")).unwrap();
        assert_eq!(builder.state(), TourState::Initialized);

        assert_eq!(builder.step(), TourState::Failed);
        assert_eq!(builder.visited_squares(), [sq("a1")]);

        // Further steps change nothing.
        assert_eq!(builder.step(), TourState::Failed);
        assert_eq!(builder.visited_squares(), [sq("a1")]);

        assert_eq!(
            builder.run(),
            TourOutcome::Stuck {
                placed: 1,
                last: sq("a1")
            }
        );
    }

    #[test]
    fn test_exhaustion_on_reduced_board() {
        assert_fails_immediately(BoardState::new());
        assert_fails_immediately(KnightGraph::new());
    }

    #[test]
    fn test_exhaustion_midway_stops_appending() {
        // With squares visited up front the board cannot be covered.
        let mut board = BoardState::new();
        for name in ["a1", "c1", "d2", "d4", "c5", "a5"] {
            board.visit(sq(name));
        }
        let mut builder = TourBuilder::new(board, sq("h8")).unwrap();
        while !builder.step().is_terminal() {}
        assert_eq!(builder.state(), TourState::Failed);

        let placed = builder.visited_squares().to_vec();
        assert!(placed.len() < SQUARE_COUNT);
        let unique: SquareSet = placed.iter().copied().collect();
        assert_eq!(unique.len(), placed.len());
        assert!(placed.windows(2).all(|w| w[0].is_knight_move(w[1])));

        builder.step();
        assert_eq!(builder.visited_squares(), placed);
    }

    #[test]
    fn test_visited_prefix_matches_board() {
        let mut builder = TourBuilder::<KnightGraph>::fresh(sq("d5"));
        for _ in 0..20 {
            builder.step();
            let prefix: SquareSet = builder.visited_squares().iter().copied().collect();
            assert_eq!(prefix.len(), builder.visited_squares().len());
            assert_eq!(prefix, builder.board().visited());
        }
    }

    #[test]
    fn test_new_rejects_visited_start() {
        let mut board = BoardState::new();
        board.visit(sq("e4"));
        assert_eq!(
            TourBuilder::new(board, sq("e4")).unwrap_err(),
            TourError::StartAlreadyVisited { square: sq("e4") }
        );
    }

    #[test]
    fn test_state_transitions() {
        let mut builder = TourBuilder::<BoardState>::fresh(sq("a1"));
        let mut states = vec![builder.state()];
        while !builder.state().is_terminal() {
            states.push(builder.step());
        }
        // The start plus 63 steps.
        assert_eq!(states.len(), 64);
        assert!(states[0].is_initialized());
        assert!(states[1..63].iter().all(|s| s.is_stepping()));
        assert!(states[63].is_succeeded());

        assert_eq!(builder.step(), TourState::Succeeded);
        assert_eq!(builder.visited_squares().len(), 64);
    }
}
