//! Doubly-linked list over a slab arena.
//!
//! ## Architecture
//!
//! The list is implemented without raw pointers:
//!
//! - **Slab-based storage**: every node lives in a `slab::Slab` owned by its
//!   list and is addressed by `usize` key
//! - **Key links**: `next`/`prev` are `Option<usize>` keys into that slab
//! - **Cached boundaries**: head and tail keys plus a length counter
//!
//! ## Components
//!
//! - [`Node`]: Element wrapper with linked-list keys
//! - [`OrderedList`]: The list itself, with ordered insertion on top of the
//!   usual deque operations
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Push front/back | O(1) |
//! | Pop front/back | O(1) |
//! | Front/back access | O(1) |
//! | Ordered insert | O(n) |
//! | Sorted check | O(n) |
//! | Clear | O(n) |
//!
//! ## Example
//!
//! ```
//! use mergelist::OrderedList;
//!
//! let mut list = OrderedList::with_capacity(16);
//! for value in [4, 1, 3] {
//!     list.insert_ordered(value);
//! }
//!
//! assert_eq!(list.to_string(), "[(1)(3)(4)]");
//! assert_eq!(list.front(), Ok(&1));
//! ```

pub mod node;
pub mod ordered;

pub use node::Node;
pub use ordered::OrderedList;
