//! Runs the tour search from every square and prints a summary.
//!
//! This example shows how to:
//! - Search all 64 start squares in parallel, one fresh board per search
//! - Compare the board-state and graph variants
//! - Spot starts where the heuristic gets stuck and tours that are closed
//!
//! # Usage
//!
//! ```sh
//! cargo run --example all_starts
//! ```
//!
//! Select the board representation:
//!
//! ```sh
//! cargo run --example all_starts -- --variant graph
//! ```
//!
//! Check that both variants agree on every start:
//!
//! ```sh
//! cargo run --example all_starts -- --compare
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use rayon::prelude::*;
use warnsdorff_core::Square;
use warnsdorff_solver::{TourOutcome, Variant, find_tour};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum VariantKind {
    Board,
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
    /// Board representation to search on.
    #[arg(long, value_name = "KIND", default_value = "board")]
    variant: VariantKind,

    /// Run both variants and report any start where they disagree.
    #[arg(long)]
    compare: bool,
}

fn main() {
    let args = Args::parse();

    if args.compare {
        let mismatches = Square::ALL
            .into_par_iter()
            .filter(|&start| {
                find_tour(start, Variant::BoardState) != find_tour(start, Variant::Graph)
            })
            .collect::<Vec<_>>();
        if !mismatches.is_empty() {
            for start in &mismatches {
                eprintln!("Variants disagree from {start}");
            }
            process::exit(1);
        }
        println!("Both variants agree on all 64 starts.");
        return;
    }

    let variant = Variant::from(args.variant);
    let outcomes = Square::ALL
        .into_par_iter()
        .map(|start| (start, find_tour(start, variant)))
        .collect::<Vec<_>>();

    println!("Variant: {variant}");
    println!();

    let mut complete = 0;
    let mut closed = 0;
    for (start, outcome) in &outcomes {
        match outcome {
            TourOutcome::Complete(tour) => {
                complete += 1;
                if tour.is_closed() {
                    closed += 1;
                    println!("  {start}: closed tour ending at {}", tour.end());
                } else {
                    println!("  {start}: tour ending at {}", tour.end());
                }
            }
            TourOutcome::Stuck { placed, last } => {
                println!("  {start}: stuck at {last} after {placed} squares");
            }
        }
    }

    println!();
    println!("Complete: {complete}/{}", outcomes.len());
    println!("Closed: {closed}");
}
