// File: src/sort.rs
//
// Bubble sort over an integer slice, ascending or descending, with an
// early exit once a full pass makes no swaps.

use colored::*;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Classic adjacent-swap bubble sort. After the `i`-th outer pass the last
/// `i` elements are in their final positions; a pass with zero swaps means
/// the slice is already sorted and the loop exits early.
pub fn bubble_sort(values: &mut [i32], order: SortOrder) {
    let n = values.len();
    if n < 2 {
        return;
    }

    for i in 0..n - 1 {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            let out_of_order = match order {
                SortOrder::Ascending => values[j] > values[j + 1],
                SortOrder::Descending => values[j] < values[j + 1],
            };
            if out_of_order {
                values.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Overwrite every element with a uniform random value in `1..=100`.
pub fn fill_random(values: &mut [i32]) {
    let mut rng = rand::thread_rng();
    for value in values.iter_mut() {
        *value = rng.gen_range(1..=100);
    }
}

/// Comma-separated rendering of the slice, e.g. `"3, 1, 2"`.
pub fn format_values(values: &[i32]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Run the demonstration: fill a 10-element vector with random values,
/// then print it unsorted, ascending, and descending.
pub fn run_demo() {
    let mut values = vec![0; 10];
    fill_random(&mut values);

    println!("{}", "Initial Vector:".bright_white().bold());
    println!("{}", format_values(&values));

    bubble_sort(&mut values, SortOrder::Ascending);
    println!("{}", "Sorted Vector (ascending):".bright_white().bold());
    println!("{}", format_values(&values));

    bubble_sort(&mut values, SortOrder::Descending);
    println!("{}", "Sorted Vector (descending):".bright_white().bold());
    println!("{}", format_values(&values));
}
