//! mergelist - Binary Entry Point
//!
//! A short walkthrough of the list and its sorts, handy as a smoke test
//! that the crate builds and behaves.

use mergelist::OrderedList;

fn main() {
    println!("===========================================");
    println!("  mergelist - list-based merge sort");
    println!("===========================================");
    println!();

    // Build an unsorted list
    let mut list = OrderedList::with_capacity(8);
    for value in [5, 3, 1, 4, 2] {
        list.push_back(value);
    }
    println!("Input:              {}", list);

    // Sort both ways; the receiver stays untouched
    let recursive = list.merge_sort_recursive();
    let iterative = list.merge_sort_iterative();
    println!("Recursive sort:     {}", recursive);
    println!("Iterative sort:     {}", iterative);
    println!("Variants agree:     {}", recursive == iterative);
    println!("Input unchanged:    {}", list);
    println!();

    // The building blocks
    let (left, right) = list.split_halves();
    println!("Split halves:       {} / {}", left, right);

    let merged = left.merge_sort().merge(&right.merge_sort());
    println!("Merge sorted halves: {}", merged);
    println!();

    // Ordered insertion keeps a sorted list sorted
    let mut ordered = OrderedList::new();
    for value in [3, 1, 4, 1, 5] {
        ordered.insert_ordered(value);
    }
    println!("Ordered inserts:    {} (sorted: {})", ordered, ordered.is_sorted());
    println!();

    // Boundary access on an empty list is the one recoverable error
    let empty: OrderedList<i32> = OrderedList::new();
    match empty.front() {
        Ok(value) => println!("Front of empty:     {}", value),
        Err(e) => println!("Front of empty:     error: {}", e),
    }
}
