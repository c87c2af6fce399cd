// Benchmarking module for sequence containers
//
// This module compares the cost of three bulk operations across the three
// standard sequence shapes:
// - Back insertion (vector, list, deque)
// - Front insertion (list, deque)
// - Random access (vector, deque)
//
// Usage:
//   let bench = BenchRunner::new();
//   bench.run();

pub mod profiler;
pub mod reporter;
pub mod runner;
pub mod timer;

pub use reporter::Reporter;
pub use runner::BenchRunner;
pub use timer::Timer;

use std::collections::{LinkedList, VecDeque};

/// The structural category of a sequence container, determining which
/// operations it performs efficiently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Vector,
    List,
    Deque,
}

impl Shape {
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Vector => "vector",
            Shape::List => "list",
            Shape::Deque => "deque",
        }
    }

    /// Front insertion is constant-time only for the list and deque shapes.
    pub fn supports_front_insert(&self) -> bool {
        !matches!(self, Shape::Vector)
    }

    /// Indexed reads are constant-time only for the vector and deque shapes.
    /// A linked list would degrade every "random access" to a linear scan,
    /// which would silently invalidate the benchmark.
    pub fn supports_random_access(&self) -> bool {
        !matches!(self, Shape::List)
    }
}

/// One sequence container holding integers, tagged by shape.
#[derive(Debug, Clone)]
pub enum Container {
    Vector(Vec<i32>),
    List(LinkedList<i32>),
    Deque(VecDeque<i32>),
}

impl Container {
    pub fn new(shape: Shape) -> Self {
        match shape {
            Shape::Vector => Container::Vector(Vec::new()),
            Shape::List => Container::List(LinkedList::new()),
            Shape::Deque => Container::Deque(VecDeque::new()),
        }
    }

    pub fn shape(&self) -> Shape {
        match self {
            Container::Vector(_) => Shape::Vector,
            Container::List(_) => Shape::List,
            Container::Deque(_) => Shape::Deque,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Container::Vector(v) => v.len(),
            Container::List(l) => l.len(),
            Container::Deque(d) => d.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        match self {
            Container::Vector(v) => v.clear(),
            Container::List(l) => l.clear(),
            Container::Deque(d) => d.clear(),
        }
    }

    pub fn push_back(&mut self, value: i32) {
        match self {
            Container::Vector(v) => v.push(value),
            Container::List(l) => l.push_back(value),
            Container::Deque(d) => d.push_back(value),
        }
    }

    /// Prepend a value. For the vector shape this shifts every existing
    /// element; the driver never front-inserts into a vector for exactly
    /// that reason.
    pub fn push_front(&mut self, value: i32) {
        match self {
            Container::Vector(v) => v.insert(0, value),
            Container::List(l) => l.push_front(value),
            Container::Deque(d) => d.push_front(value),
        }
    }

    /// Constant-time indexed read. Returns `None` for the list shape,
    /// which has no indexed access.
    pub fn get(&self, index: usize) -> Option<i32> {
        match self {
            Container::Vector(v) => v.get(index).copied(),
            Container::List(_) => None,
            Container::Deque(d) => d.get(index).copied(),
        }
    }

    /// Snapshot of the contents in order, mainly for assertions in tests.
    pub fn to_vec(&self) -> Vec<i32> {
        match self {
            Container::Vector(v) => v.clone(),
            Container::List(l) => l.iter().copied().collect(),
            Container::Deque(d) => d.iter().copied().collect(),
        }
    }
}
