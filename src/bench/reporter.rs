// Results formatting and reporting for the container benchmark

use crate::bench::Shape;
use colored::*;
use std::time::Duration;

pub struct Reporter;

impl Reporter {
    pub fn print_header(title: &str) {
        let width = 60;
        println!("{}", "=".repeat(width).bright_blue());
        println!("{:^width$}", title.bright_white().bold(), width = width);
        println!("{}", "=".repeat(width).bright_blue());
    }

    pub fn print_phase(name: &str) {
        println!();
        println!("{}", format!("{}:", name).bright_white().bold());
    }

    /// One labeled measurement line: `<shape>: <integer> microseconds`.
    pub fn print_duration(shape: Shape, duration: Duration) {
        println!(
            "{}: {} microseconds",
            shape.name().cyan(),
            duration.as_micros().to_string().yellow()
        );
    }

    /// Informational line for a shape the current phase does not apply to.
    pub fn print_note(shape: Shape, note: &str) {
        println!("{}: {}", shape.name().cyan(), note.blue());
    }

    /// Fixed summary of expected relative performance. Static prose, never
    /// derived from the measured durations.
    pub fn print_summary() {
        println!();
        println!("{}", "summary:".bright_white().bold());
        println!("1. vector is the fastest for random access due to contiguous memory.");
        println!("2. list is the slowest for front insertion because elements need to be shifted.");
        println!("3. deque is fast for both front and back insertions, but not as fast as vector for random access.");
    }
}
