//! Command-line Knight's Tour finder.
//!
//! Prints the tour found by Warnsdorff's heuristic from the given start square,
//! one square per line, or a single line saying there is no solution.
//!
//! # Usage
//!
//! ```sh
//! knights-tour e4
//! knights-tour --variant graph a1
//! RUST_LOG=trace knights-tour b7
//! ```

use std::{
    io::{self, Write as _},
    process,
};

use clap::{Parser, ValueEnum};
use warnsdorff_core::Square;
use warnsdorff_solver::{TourOutcome, Variant, find_tour};

mod output;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum VariantKind {
    /// Recount degrees from a visitation grid.
    Board,
    /// Track degrees in a knight-move graph.
    Graph,
}

impl From<VariantKind> for Variant {
    fn from(kind: VariantKind) -> Self {
        match kind {
            VariantKind::Board => Variant::BoardState,
            VariantKind::Graph => Variant::Graph,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Start square in algebraic notation, `a1` to `h8`.
    #[arg(value_name = "START")]
    start: Square,

    /// Board representation to search on.
    #[arg(long, value_name = "KIND", default_value = "board")]
    variant: VariantKind,

    /// Also report on stderr whether the tour is closed.
    #[arg(long)]
    closed: bool,
}

fn main() {
    better_panic::install();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let variant = Variant::from(args.variant);
    let outcome = find_tour(args.start, variant);

    match &outcome {
        TourOutcome::Complete(tour) => {
            log::info!(
                "tour from {} on {variant} ends at {}",
                args.start,
                tour.end()
            );
        }
        TourOutcome::Stuck { placed, last } => {
            log::info!(
                "no tour from {} on {variant}: stuck at {last} after {placed} squares",
                args.start
            );
        }
    }

    let mut stdout = io::stdout().lock();
    if let Err(e) = output::write_outcome(&mut stdout, &outcome).and_then(|()| stdout.flush()) {
        // A failed write is not a search outcome and does not exit with 0.
        log::error!("failed to write tour: {e}");
        process::exit(1);
    }

    if let Some(tour) = outcome.tour().filter(|_| args.closed) {
        eprintln!("{}", output::closed_summary(tour));
    }
}
