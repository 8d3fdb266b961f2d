//! Text rendering of search outcomes.

use std::io::{self, Write};

use warnsdorff_solver::{Tour, TourOutcome};

/// Line printed when the heuristic finds no tour.
pub const NO_SOLUTION: &str = "Não há solução";

/// Writes a tour as one square per line, or the no-solution line.
pub fn write_outcome<W: Write>(out: &mut W, outcome: &TourOutcome) -> io::Result<()> {
    match outcome {
        TourOutcome::Complete(tour) => {
            for square in tour.iter() {
                writeln!(out, "{square}")?;
            }
        }
        TourOutcome::Stuck { .. } => writeln!(out, "{NO_SOLUTION}")?,
    }
    Ok(())
}

/// Describes whether the tour can be closed into a circuit.
pub fn closed_summary(tour: &Tour) -> String {
    if tour.is_closed() {
        format!("closed tour: {} returns to {}", tour.end(), tour.start())
    } else {
        format!("open tour: {} does not reach {}", tour.end(), tour.start())
    }
}

#[cfg(test)]
mod tests {
    use warnsdorff_core::Square;
    use warnsdorff_solver::{Variant, find_tour};

    use super::*;

    fn render(start: &str, variant: Variant) -> String {
        let start: Square = start.parse().unwrap();
        let mut buf = Vec::new();
        write_outcome(&mut buf, &find_tour(start, variant)).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_tour_prints_one_square_per_line() {
        let text = render("a1", Variant::BoardState);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 64);
        assert_eq!(lines[..4], ["a1", "c2", "e1", "g2"]);
        assert_eq!(lines[63], "b7");
        assert!(text.ends_with("b7\n"));
    }

    #[test]
    fn test_variants_print_the_same() {
        for start in ["a1", "e4", "h8", "e8"] {
            assert_eq!(
                render(start, Variant::BoardState),
                render(start, Variant::Graph)
            );
        }
    }

    #[test]
    fn test_stuck_prints_no_solution() {
        assert_eq!(render("b7", Variant::BoardState), "Não há solução\n");
        assert_eq!(render("e5", Variant::Graph), "Não há solução\n");
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_errors_are_returned() {
        for start in ["a1", "b7"] {
            let outcome = find_tour(start.parse().unwrap(), Variant::BoardState);
            let err = write_outcome(&mut BrokenPipe, &outcome).unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        }
    }

    #[test]
    fn test_closed_summary() {
        let closed = find_tour("a2".parse().unwrap(), Variant::Graph)
            .into_tour()
            .unwrap();
        assert!(closed_summary(&closed).starts_with("closed tour: "));

        let open = find_tour("a1".parse().unwrap(), Variant::Graph)
            .into_tour()
            .unwrap();
        assert_eq!(closed_summary(&open), "open tour: b7 does not reach a1");
    }
}
