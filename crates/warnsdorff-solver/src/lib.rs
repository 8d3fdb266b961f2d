//! Knight's Tour construction with Warnsdorff's heuristic.
//!
//! Starting from one square, [`TourBuilder`] repeatedly moves the knight to the
//! unvisited reachable square whose own count of unvisited reachable squares
//! (its *degree*) is smallest. The walk is greedy and never backtracks: it
//! either places all 64 squares or gets stuck.
//!
//! Two interchangeable board representations implement [`TourBoard`]:
//!
//! - [`BoardState`] keeps only a visitation grid and recounts a degree by
//!   scanning the eight knight offsets.
//! - [`KnightGraph`] keeps the knight-move graph with live adjacency lists, so a
//!   degree is the length of a list.
//!
//! Both enumerate candidates in the same order and break ties the same way,
//! so they produce identical tours.
//!
//! # Examples
//!
//! ```
//! use warnsdorff_core::Square;
//! use warnsdorff_solver::{Variant, find_tour};
//!
//! let start: Square = "a1".parse()?;
//! let outcome = find_tour(start, Variant::Graph);
//! let tour = outcome.tour().expect("a1 has a tour");
//! assert_eq!(tour.start(), start);
//! assert_eq!(tour.squares().len(), 64);
//!
//! assert_eq!(outcome, find_tour(start, Variant::BoardState));
//! # Ok::<(), warnsdorff_core::ParseSquareError>(())
//! ```

pub use self::{
    board_state::*, error::*, knight_graph::*, tour::*, tour_board::*, tour_builder::*, variant::*,
};

mod board_state;
mod error;
mod knight_graph;
mod tour;
mod tour_board;
mod tour_builder;
mod variant;

#[cfg(test)]
mod testing;
