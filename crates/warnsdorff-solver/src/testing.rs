//! Shared fixtures and assertions for solver tests.

use warnsdorff_core::Square;

use crate::Tour;

/// The tour found from `a1` with offset-order tie-breaking.
pub(crate) const A1_TOUR: &str = "\
    a1 c2 e1 g2 h4 g6 h8 f7 h6 g8 e7 c8 a7 b5 a3 b1 \
    d2 f1 h2 g4 e3 d1 b2 a4 c3 a2 c1 b3 a5 c4 b6 a8 \
    c7 e8 g7 h5 g3 h1 f2 h3 g1 e2 f4 d5 f6 h7 f8 d7 \
    b8 a6 b4 d3 e5 f3 g5 e4 d6 f5 d4 c6 d8 e6 c5 b7";

/// Starts where the heuristic gets stuck: `(start, squares placed, last square)`.
pub(crate) const DEAD_ENDS: [(&str, usize, &str); 3] =
    [("b7", 56, "a7"), ("e5", 62, "a2"), ("e8", 60, "c5")];

#[track_caller]
pub(crate) fn sq(s: &str) -> Square {
    match s.parse() {
        Ok(square) => square,
        Err(e) => panic!("bad square {s:?} in test: {e}"),
    }
}

#[track_caller]
pub(crate) fn squares(s: &str) -> Vec<Square> {
    s.split_whitespace().map(sq).collect()
}

/// Asserts that `squares` is a complete Knight's Tour.
#[track_caller]
pub(crate) fn assert_valid_tour(squares: &[Square]) {
    if let Err(e) = Tour::validate(squares) {
        panic!(
            "invalid tour: {e}\n  squares: {}",
            squares
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        );
    }
}
