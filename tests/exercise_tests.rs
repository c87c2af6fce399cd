// Integration tests for the seqlab exercises
//
// These tests verify the library surface end to end. Tests cover:
// - Profiler contents after back/front insertion on every shape
// - Random-access self-guards (empty container, list shape, zero accesses)
// - Clearing and re-running a phase reproduces the same contents
// - Word reversal and bubble sort behavior

use seqlab::bench::profiler::{
    profile_back_insert, profile_front_insert, profile_random_access,
};
use seqlab::bench::{Container, Shape};
use seqlab::sort::{bubble_sort, SortOrder};
use seqlab::words::reverse_words;
use std::time::Duration;

#[test]
fn back_insert_yields_ascending_contents_on_every_shape() {
    for shape in [Shape::Vector, Shape::List, Shape::Deque] {
        let mut container = Container::new(shape);
        let duration = profile_back_insert(&mut container, 5);
        assert_eq!(container.to_vec(), vec![0, 1, 2, 3, 4]);
        assert!(duration >= Duration::ZERO);
    }
}

#[test]
fn front_insert_yields_descending_contents_on_applicable_shapes() {
    for shape in [Shape::List, Shape::Deque] {
        assert!(shape.supports_front_insert());
        let mut container = Container::new(shape);
        profile_front_insert(&mut container, 5);
        assert_eq!(container.to_vec(), vec![4, 3, 2, 1, 0]);
    }
}

#[test]
fn random_access_guards_return_exactly_zero() {
    // Empty container, any number of accesses.
    let empty = Container::new(Shape::Vector);
    assert_eq!(profile_random_access(&empty, 100), Duration::ZERO);

    // Zero accesses, any container size.
    let mut populated = Container::new(Shape::Deque);
    profile_back_insert(&mut populated, 50);
    assert_eq!(profile_random_access(&populated, 0), Duration::ZERO);

    // List shape, regardless of size.
    let mut list = Container::new(Shape::List);
    profile_back_insert(&mut list, 50);
    assert_eq!(profile_random_access(&list, 100), Duration::ZERO);
}

#[test]
fn random_access_reads_do_not_mutate_the_container() {
    let mut container = Container::new(Shape::Deque);
    profile_back_insert(&mut container, 20);
    let before = container.to_vec();
    profile_random_access(&container, 1_000);
    assert_eq!(container.to_vec(), before);
}

#[test]
fn clearing_and_rerunning_a_phase_reproduces_the_contents() {
    for shape in [Shape::Vector, Shape::List, Shape::Deque] {
        let mut container = Container::new(shape);
        profile_back_insert(&mut container, 25);
        let first = container.to_vec();

        container.clear();
        assert!(container.is_empty());

        profile_back_insert(&mut container, 25);
        assert_eq!(container.to_vec(), first);
    }
}

#[test]
fn reverse_words_round_trips_sentences() {
    assert_eq!(reverse_words("the quick brown fox"), "fox brown quick the");
    assert_eq!(reverse_words(reverse_words("one two three").as_str()), "one two three");
    assert_eq!(reverse_words("solo"), "solo");
    assert_eq!(reverse_words(""), "");
}

#[test]
fn bubble_sort_orders_match_std_sort() {
    let input = vec![9, 3, 7, 3, 1, 0, 8, 2];

    let mut ascending = input.clone();
    bubble_sort(&mut ascending, SortOrder::Ascending);
    let mut expected = input.clone();
    expected.sort();
    assert_eq!(ascending, expected);

    let mut descending = input.clone();
    bubble_sort(&mut descending, SortOrder::Descending);
    expected.reverse();
    assert_eq!(descending, expected);
}
