use std::fmt::{self, Display};

use warnsdorff_core::{SQUARE_COUNT, Square, SquareSet};

use crate::InvalidTourError;

/// A complete Knight's Tour: all 64 squares in visiting order.
///
/// Index 0 is the start square. Consecutive squares are always one knight
/// move apart and no square repeats.
///
/// # Examples
///
/// ```
/// use warnsdorff_core::Square;
/// use warnsdorff_solver::{Variant, find_tour};
///
/// let tour = find_tour(Square::new(1, 1), Variant::BoardState)
///     .into_tour()
///     .expect("a1 has a tour");
///
/// let text = tour.to_string();
/// assert_eq!(text.lines().count(), 64);
/// assert_eq!(text.lines().next(), Some("a1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    squares: Vec<Square>,
}

impl Tour {
    pub(crate) fn from_path(squares: Vec<Square>) -> Self {
        debug_assert_eq!(Self::validate(&squares), Ok(()));
        Self { squares }
    }

    /// Checks that `squares` is a Knight's Tour.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, checking the length, then repeated
    /// squares and illegal moves in sequence order.
    pub fn validate(squares: &[Square]) -> Result<(), InvalidTourError> {
        if squares.len() != SQUARE_COUNT {
            return Err(InvalidTourError::WrongLength { len: squares.len() });
        }
        let mut seen = SquareSet::new();
        for (index, &square) in squares.iter().enumerate() {
            if !seen.insert(square) {
                return Err(InvalidTourError::Repeated { square, index });
            }
            if index == 0 {
                continue;
            }
            let from = squares[index - 1];
            if !from.is_knight_move(square) {
                return Err(InvalidTourError::NotKnightMove {
                    from,
                    to: square,
                    index,
                });
            }
        }
        Ok(())
    }

    /// Returns the squares in visiting order.
    #[must_use]
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Returns an iterator over the squares in visiting order.
    pub fn iter(&self) -> impl Iterator<Item = Square> + '_ {
        self.squares.iter().copied()
    }

    /// Returns the start square.
    #[must_use]
    pub fn start(&self) -> Square {
        self.squares[0]
    }

    /// Returns the last square visited.
    #[must_use]
    pub fn end(&self) -> Square {
        self.squares[SQUARE_COUNT - 1]
    }

    /// Returns `true` if the last square is one knight move from the start.
    ///
    /// A closed tour can be continued back to its start, forming a circuit.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.end().is_knight_move(self.start())
    }
}

impl TryFrom<Vec<Square>> for Tour {
    type Error = InvalidTourError;

    fn try_from(squares: Vec<Square>) -> Result<Self, Self::Error> {
        Self::validate(&squares)?;
        Ok(Self { squares })
    }
}

/// Writes one square per line, in visiting order.
impl Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, square) in self.squares.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{square}")?;
        }
        Ok(())
    }
}
