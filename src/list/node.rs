//! List node for slab-based storage.
//!
//! ## Design
//!
//! `Node<T>` wraps an element with doubly-linked list pointers so the
//! owning list can splice at either end in O(1). The pointers are slab
//! keys, not references, which keeps the structure free of raw pointers.
//!
//! ## Slab Integration
//!
//! Per official slab docs (https://docs.rs/slab/0.4.11):
//! - Keys are `usize` values returned by `slab.insert()`
//! - Keys may be reused after `slab.remove()`
//! - O(1) insert, remove, and lookup
//!
//! ## Linked List
//!
//! Elements form a doubly-linked chain inside their owning list's slab:
//! - `next`: Points toward the back of the list
//! - `prev`: Points toward the front of the list
//!
//! A key is only meaningful inside the slab of the list that issued it;
//! keys are never shared between lists.

/// List node stored in the slab.
///
/// Contains the element plus linked-list pointers for the chain.
/// The pointers are slab keys (`usize`), not direct references, and are
/// only writable by the owning list.
///
/// # Example
///
/// ```
/// use mergelist::OrderedList;
///
/// let mut list = OrderedList::new();
/// list.push_back(7);
/// list.push_back(8);
///
/// let head = list.node(list.head_key().unwrap()).unwrap();
/// assert_eq!(*head.value(), 7);
/// assert!(head.prev().is_none());
/// assert_eq!(head.next(), list.tail_key());
/// ```
#[derive(Debug, Clone)]
pub struct Node<T> {
    /// The element held by this node
    pub(crate) value: T,

    /// Next node toward the back (slab key)
    /// None if this is the tail
    pub(crate) next: Option<usize>,

    /// Previous node toward the front (slab key)
    /// None if this is the head
    pub(crate) prev: Option<usize>,
}

impl<T> Node<T> {
    /// Create a new node (not yet linked)
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            next: None,
            prev: None,
        }
    }

    /// Borrow the element held by this node
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Slab key of the next node toward the back, if any
    #[inline]
    pub fn next(&self) -> Option<usize> {
        self.next
    }

    /// Slab key of the previous node toward the front, if any
    #[inline]
    pub fn prev(&self) -> Option<usize> {
        self.prev
    }

    /// Check if this node is unlinked (neither neighbour set)
    #[inline]
    pub fn is_unlinked(&self) -> bool {
        self.next.is_none() && self.prev.is_none()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
