//! Board squares and algebraic notation.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// Number of files, and of ranks, on the board.
pub const BOARD_SIZE: u8 = 8;

/// Number of squares on the board.
pub const SQUARE_COUNT: usize = 64;

const FILE_LETTERS: [char; BOARD_SIZE as usize] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// A square of the 8×8 board.
///
/// Files and ranks are both numbered `1..=8`. File 1 is written `a` in
/// algebraic notation and file 8 is written `h`.
///
/// Every square also has a dense index in `0..64` laid out file-major:
/// `(file - 1) * 8 + (rank - 1)`. [`Square::ALL`] lists squares in that order.
///
/// # Examples
///
/// ```
/// use warnsdorff_core::Square;
///
/// let square = Square::new(5, 4);
/// assert_eq!(square.to_string(), "e4");
/// assert_eq!("e4".parse::<Square>()?, square);
/// assert_eq!(square.index(), 35);
/// # Ok::<(), warnsdorff_core::ParseSquareError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Array containing all squares in index order.
    pub const ALL: [Self; SQUARE_COUNT] = {
        let mut all = [Self { file: 1, rank: 1 }; SQUARE_COUNT];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < SQUARE_COUNT {
            all[i] = Self {
                file: (i / BOARD_SIZE as usize) as u8 + 1,
                rank: (i % BOARD_SIZE as usize) as u8 + 1,
            };
            i += 1;
        }
        all
    };

    /// Creates a square from a file and a rank, both in `1..=8`.
    ///
    /// # Panics
    ///
    /// Panics if `file` or `rank` is outside `1..=8`.
    #[must_use]
    #[track_caller]
    pub fn new(file: u8, rank: u8) -> Self {
        match Self::try_new(file, rank) {
            Some(square) => square,
            None => panic!("Invalid square: file {file}, rank {rank}"),
        }
    }

    /// Creates a square, returning `None` if it would lie off the board.
    #[must_use]
    pub const fn try_new(file: u8, rank: u8) -> Option<Self> {
        if is_on_board(file) && is_on_board(rank) {
            Some(Self { file, rank })
        } else {
            None
        }
    }

    /// Creates a square from its dense index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below 64.
    #[must_use]
    #[track_caller]
    pub fn from_index(index: usize) -> Self {
        assert!(index < SQUARE_COUNT, "Invalid square index: {index}");
        Self::ALL[index]
    }

    /// Returns the file (`1..=8`).
    #[must_use]
    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Returns the rank (`1..=8`).
    #[must_use]
    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Returns the file letter, `a` through `h`.
    #[must_use]
    #[inline]
    pub const fn file_letter(self) -> char {
        FILE_LETTERS[(self.file - 1) as usize]
    }

    /// Returns the dense index of this square (`0..64`).
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        (self.file as usize - 1) * BOARD_SIZE as usize + (self.rank as usize - 1)
    }
}

const fn is_on_board(coordinate: u8) -> bool {
    coordinate >= 1 && coordinate <= BOARD_SIZE
}

/// Maps a file letter to its number, `a` to 1 through `h` to 8.
///
/// The lookup is case-sensitive; anything other than `a..=h` yields `None`.
#[must_use]
pub fn file_from_letter(letter: char) -> Option<u8> {
    FILE_LETTERS
        .iter()
        .position(|&l| l == letter)
        .and_then(|i| u8::try_from(i + 1).ok())
}

impl Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_letter(), self.rank)
    }
}

/// Error returned when algebraic notation cannot be parsed into a [`Square`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSquareError {
    /// The input was empty.
    #[display("invalid start square: empty input")]
    Empty,
    /// The first character is not a file letter `a..=h`.
    #[display("invalid start square: file {found:?} is not one of a-h")]
    InvalidFile {
        /// The offending character.
        found: char,
    },
    /// The text after the file letter is not a single digit `1..=8`.
    #[display("invalid start square: rank {found:?} is not one of 1-8")]
    InvalidRank {
        /// The text following the file letter.
        found: String,
    },
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let letter = chars.next().ok_or(ParseSquareError::Empty)?;
        let file =
            file_from_letter(letter).ok_or(ParseSquareError::InvalidFile { found: letter })?;

        let rest = chars.as_str();
        let invalid_rank = || ParseSquareError::InvalidRank {
            found: rest.to_owned(),
        };
        let [digit] = rest.as_bytes() else {
            return Err(invalid_rank());
        };
        let rank = digit.wrapping_sub(b'0');
        Self::try_new(file, rank).ok_or_else(invalid_rank)
    }
}
