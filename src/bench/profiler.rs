// Per-operation profiling functions for the container benchmark
//
// Each profiler times one bulk operation loop against a single container.
// Setup work (constructing the random generator) happens outside the timed
// region, matching what the benchmark claims to measure.

use crate::bench::timer::time_once;
use crate::bench::Container;
use rand::Rng;
use std::time::Duration;

/// Append the integers `0..num_elements` to the back of the container, one
/// element per call, and return the elapsed time. Valid for all shapes;
/// `num_elements = 0` is a valid no-op measurement.
pub fn profile_back_insert(container: &mut Container, num_elements: usize) -> Duration {
    time_once(|| {
        for i in 0..num_elements {
            container.push_back(i as i32);
        }
    })
}

/// Prepend the integers `0..num_elements` to the front of the container,
/// one element per call, so the last inserted value ends up at index 0.
///
/// Precondition (enforced by the driver, not here): the shape supports
/// efficient front insertion. The driver never calls this on a vector.
pub fn profile_front_insert(container: &mut Container, num_elements: usize) -> Duration {
    time_once(|| {
        for i in 0..num_elements {
            container.push_front(i as i32);
        }
    })
}

/// Perform `num_accesses` reads at uniformly random indices in
/// `[0, len - 1]`, drawn independently with replacement, and return the
/// elapsed time.
///
/// Self-guards: returns zero without sampling when there is nothing to
/// measure (empty container, zero accesses) or when the shape has no
/// constant-time indexed access. Reading a linked list "at an index" is a
/// linear scan, and timing that as random access would produce a number
/// that looks valid but measures the wrong thing.
pub fn profile_random_access(container: &Container, num_accesses: usize) -> Duration {
    if container.is_empty() || num_accesses == 0 {
        return Duration::ZERO;
    }
    if !container.shape().supports_random_access() {
        return Duration::ZERO;
    }

    let len = container.len();
    let mut rng = rand::thread_rng();

    time_once(move || {
        for _ in 0..num_accesses {
            let index = rng.gen_range(0..len);
            std::hint::black_box(container.get(index));
        }
    })
}
