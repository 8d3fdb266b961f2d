//! Core data structures for Knight's Tour search.
//!
//! This crate provides the board vocabulary shared by the tour solver and the
//! command-line front end.
//!
//! # Overview
//!
//! - [`square`]: Board squares `(file, rank)` in `1..=8`, with algebraic
//!   notation (`a1` through `h8`) for parsing and display.
//! - [`knight`]: The fixed table of eight knight offsets and the destination
//!   enumeration built on it. The table order is the enumeration order used by
//!   every search in the workspace.
//! - [`square_set`]: A 64-bit set of squares.
//!
//! # Examples
//!
//! ```
//! use warnsdorff_core::{KnightOffset, Square, SquareSet};
//!
//! let start: Square = "a1".parse()?;
//! let destinations: Vec<Square> = start.knight_destinations().collect();
//! assert_eq!(destinations, [Square::new(3, 2), Square::new(2, 3)]);
//!
//! let mut visited = SquareSet::new();
//! visited.insert(start);
//! assert!(visited.contains(start));
//! assert_eq!(KnightOffset::ALL.len(), 8);
//! # Ok::<(), warnsdorff_core::ParseSquareError>(())
//! ```

pub mod knight;
pub mod square;
pub mod square_set;

pub use self::{
    knight::{KnightDestinations, KnightOffset},
    square::{BOARD_SIZE, ParseSquareError, SQUARE_COUNT, Square},
    square_set::SquareSet,
};
