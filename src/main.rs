// File: src/main.rs
//
// Main entry point for the seqlab exercises.
// Handles command-line argument parsing and dispatches to the appropriate
// subcommand (bench, reverse, or sort).

use clap::{Parser, Subcommand};
use seqlab::bench::BenchRunner;
use seqlab::{sort, words};
use std::io::{self, Write};

#[derive(Parser)]
#[command(
    name = "seqlab",
    about = "Seqlab: sequence-container benchmarks and small exercises",
    version = env!("CARGO_PKG_VERSION"),
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[command(arg_required_else_help = true)]
enum Commands {
    /// Benchmark insertion and random access across sequence containers
    Bench,

    /// Reverse the word order of a line read from standard input
    Reverse,

    /// Bubble-sort a randomly initialized vector, ascending then descending
    Sort,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench => {
            BenchRunner::new().run();
        }

        Commands::Reverse => {
            print!("Enter a string: ");
            io::stdout().flush().expect("Failed to flush stdout");
            let stdin = io::stdin();
            let line = words::read_line_from(&mut stdin.lock())
                .expect("Failed to read from stdin");
            println!("{}", words::reverse_words(&line));
        }

        Commands::Sort => {
            sort::run_demo();
        }
    }
}
