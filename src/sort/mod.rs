//! List-based merge sort over [`OrderedList`].
//!
//! ## Architecture
//!
//! The sort is assembled from three small pieces, each a set of inherent
//! methods on the list:
//!
//! - **Split** (`split.rs`): `split_halves` and `explode`
//! - **Merge** (`merge.rs`): stable two-pointer `merge`
//! - **Drivers** (`driver.rs`): `merge_sort`, `merge_sort_recursive`,
//!   `merge_sort_iterative`
//!
//! All of them take `&self` and return freshly built lists; no input is
//! ever mutated.
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Split halves | O(n) |
//! | Explode | O(n) |
//! | Merge | O(n + m) |
//! | Merge sort (either) | O(n log n) |
//!
//! ## Example
//!
//! ```
//! use mergelist::OrderedList;
//!
//! let mut list = OrderedList::new();
//! for value in [5, 3, 1, 4, 2] {
//!     list.push_back(value);
//! }
//!
//! assert_eq!(list.merge_sort_recursive(), list.merge_sort_iterative());
//! assert!(list.merge_sort().is_sorted());
//! ```
//!
//! [`OrderedList`]: crate::list::OrderedList

pub mod driver;
pub mod merge;
pub mod split;
