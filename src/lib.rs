//! # mergelist
//!
//! Slab-backed doubly-linked list with list-based merge sort.
//!
//! ## Architecture
//!
//! The crate consists of:
//! - **List**: `OrderedList<T>` over a slab arena, with `Option<usize>`
//!   keys instead of pointers
//! - **Sort**: splitting, stable merging, and recursive/iterative merge
//!   sort drivers built on the list
//! - **Error**: the one recoverable error, boundary access on an empty list
//!
//! ## Design Principles
//!
//! 1. **No raw pointers**: Nodes reference each other by slab key; the
//!    whole crate is safe Rust
//! 2. **Copy, don't mutate**: Split, merge, and sort take `&self` and
//!    return new lists; inputs are never changed
//! 3. **Left-preferring merges**: Ties always resolve toward the left
//!    operand, which makes the merge and the default (recursive) sort
//!    stable
//! 4. **Bugs are not errors**: Only empty-boundary access is a `Result`;
//!    broken link invariants are debug assertions
//!
//! ## Example
//!
//! ```
//! use mergelist::OrderedList;
//!
//! let mut list = OrderedList::with_capacity(8);
//! for value in [5, 3, 1, 4, 2] {
//!     list.push_back(value);
//! }
//!
//! let sorted = list.merge_sort();
//! assert_eq!(sorted.to_string(), "[(1)(2)(3)(4)(5)]");
//! assert_eq!(sorted.front(), Ok(&1));
//! assert_eq!(sorted.back(), Ok(&5));
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Error type for boundary access on an empty list
pub mod error;

/// The list: slab-backed nodes and the container itself
pub mod list;

/// Merge sort: splitting, merging, and the two sort drivers
pub mod sort;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use error::AccessError;
pub use list::{Node, OrderedList};
