// Benchmark runner - orchestrates the three profiling phases

use crate::bench::profiler::{profile_back_insert, profile_front_insert, profile_random_access};
use crate::bench::{Container, Reporter, Shape};

/// Number of elements each insertion phase inserts.
pub const NUM_ELEMENTS: usize = 100_000;

/// Number of reads the random-access phase performs.
pub const NUM_ACCESSES: usize = 10_000;

pub struct BenchRunner {
    num_elements: usize,
    num_accesses: usize,
}

impl BenchRunner {
    pub fn new() -> Self {
        Self {
            num_elements: NUM_ELEMENTS,
            num_accesses: NUM_ACCESSES,
        }
    }

    /// Override the operation counts, used by tests to keep runs short.
    pub fn with_counts(num_elements: usize, num_accesses: usize) -> Self {
        Self {
            num_elements,
            num_accesses,
        }
    }

    /// Run all three phases in order and print the report. Strictly
    /// sequential; no phase branches on the outcome of another.
    pub fn run(&self) {
        let mut vector = Container::new(Shape::Vector);
        let mut list = Container::new(Shape::List);
        let mut deque = Container::new(Shape::Deque);

        Reporter::print_header("Sequence Container Benchmark");

        Reporter::print_phase("insert at back");
        for container in [&mut vector, &mut list, &mut deque] {
            let duration = profile_back_insert(container, self.num_elements);
            Reporter::print_duration(container.shape(), duration);
        }

        // Clear everything before the next phase; each phase starts from a
        // logically fresh container.
        vector.clear();
        list.clear();
        deque.clear();

        Reporter::print_phase("insert at front");
        for container in [&mut deque, &mut list] {
            let duration = profile_front_insert(container, self.num_elements);
            Reporter::print_duration(container.shape(), duration);
        }
        Reporter::print_note(Shape::Vector, "insertion at front is inefficient for vector!");

        Reporter::print_phase("random access");
        for container in [&vector, &deque] {
            let duration = profile_random_access(container, self.num_accesses);
            Reporter::print_duration(container.shape(), duration);
        }
        Reporter::print_note(Shape::List, "no random access, so not applicable!");

        Reporter::print_summary();
    }
}

impl Default for BenchRunner {
    fn default() -> Self {
        Self::new()
    }
}
