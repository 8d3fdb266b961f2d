use warnsdorff_core::Square;

/// Errors raised when setting up a tour.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error,
)]
pub enum TourError {
    /// The board handed to the builder already has the start square visited.
    #[display("start square {square} is already visited")]
    StartAlreadyVisited {
        /// The requested start square.
        square: Square,
    },
}

/// Reasons a square sequence is not a Knight's Tour.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error,
)]
pub enum InvalidTourError {
    /// The sequence does not hold exactly 64 squares.
    #[display("tour has {len} squares, expected 64")]
    WrongLength {
        /// Number of squares in the sequence.
        len: usize,
    },
    /// A square occurs more than once.
    #[display("square {square} is visited twice (again at index {index})")]
    Repeated {
        /// The repeated square.
        square: Square,
        /// Index of the second occurrence.
        index: usize,
    },
    /// Two consecutive squares are not a knight move apart.
    #[display("{from} -> {to} at index {index} is not a knight move")]
    NotKnightMove {
        /// Square the move starts from.
        from: Square,
        /// Square the move lands on.
        to: Square,
        /// Index of `to` in the sequence.
        index: usize,
    },
}
