//! Doubly-linked list over slab storage.
//!
//! ## Architecture
//!
//! The list keeps every node in a pre-allocated slab and wires the nodes
//! into a chain with `Option<usize>` keys:
//!
//! - **Slab**: O(1) node insert/remove/lookup, no per-node allocation churn
//! - **Head/tail keys**: O(1) access to both ends
//! - **Length counter**: O(1) size queries
//!
//! ## Ordering
//!
//! The container itself imposes no order. `insert_ordered` maintains
//! ascending order for callers that only insert through it, and the sort
//! operations build new ascending lists from arbitrary ones.
//!
//! ## Memory Model
//!
//! Per slab docs (https://docs.rs/slab/0.4.11):
//! - `Slab::with_capacity(n)` pre-allocates n slots
//! - Keys are reused after removal
//! - Each list owns its own slab; keys never cross lists
//!
//! ## Example
//!
//! ```
//! use mergelist::OrderedList;
//!
//! let mut list = OrderedList::with_capacity(8);
//! list.push_back(3);
//! list.push_back(1);
//! list.push_front(2);
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.to_string(), "[(2)(3)(1)]");
//!
//! let sorted = list.merge_sort();
//! assert_eq!(sorted.to_string(), "[(1)(2)(3)]");
//! ```

use std::fmt;

use slab::Slab;

use crate::error::AccessError;
use crate::list::Node;

/// Doubly-linked list with slab-backed nodes.
///
/// Nodes live in a slab owned by the list and reference each other by slab
/// key, so the structure contains no raw pointers and no unsafe code. Both
/// ends support O(1) push and pop; `insert_ordered` keeps a sorted list
/// sorted.
pub struct OrderedList<T> {
    /// Node storage
    /// Key: slab index, Value: Node<T>
    nodes: Slab<Node<T>>,

    /// Front of the chain (slab key)
    /// None when the list is empty
    head: Option<usize>,

    /// Back of the chain (slab key)
    /// None when the list is empty
    tail: Option<usize>,

    /// Number of elements in the chain
    len: usize,
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OrderedList<T> {
    /// Create a new empty list
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Create a list with pre-allocated node capacity
    ///
    /// # Arguments
    ///
    /// * `capacity` - Number of nodes to pre-allocate
    ///
    /// # Example
    ///
    /// ```
    /// use mergelist::OrderedList;
    ///
    /// let list: OrderedList<u64> = OrderedList::with_capacity(1_000);
    /// assert!(list.capacity() >= 1_000);
    /// assert!(list.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: None,
            tail: None,
            len: 0,
        }
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    /// Get the current capacity (pre-allocated node slots)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Get the number of elements in the list
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the list has no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // ========================================================================
    // Boundary Access
    // ========================================================================

    /// Borrow the first element
    ///
    /// # Returns
    ///
    /// A reference to the front element, or [`AccessError::EmptyFront`] if
    /// the list is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use mergelist::OrderedList;
    ///
    /// let mut list = OrderedList::new();
    /// list.push_back(10);
    /// list.push_back(20);
    ///
    /// assert_eq!(list.front(), Ok(&10));
    /// ```
    pub fn front(&self) -> Result<&T, AccessError> {
        let key = self.head.ok_or(AccessError::EmptyFront)?;
        let node = self.nodes.get(key).expect("Invalid head key");
        Ok(&node.value)
    }

    /// Borrow the last element
    ///
    /// # Returns
    ///
    /// A reference to the back element, or [`AccessError::EmptyBack`] if
    /// the list is empty.
    pub fn back(&self) -> Result<&T, AccessError> {
        let key = self.tail.ok_or(AccessError::EmptyBack)?;
        let node = self.nodes.get(key).expect("Invalid tail key");
        Ok(&node.value)
    }

    /// Mutably borrow the first element
    pub fn front_mut(&mut self) -> Result<&mut T, AccessError> {
        let key = self.head.ok_or(AccessError::EmptyFront)?;
        let node = self.nodes.get_mut(key).expect("Invalid head key");
        Ok(&mut node.value)
    }

    /// Mutably borrow the last element
    pub fn back_mut(&mut self) -> Result<&mut T, AccessError> {
        let key = self.tail.ok_or(AccessError::EmptyBack)?;
        let node = self.nodes.get_mut(key).expect("Invalid tail key");
        Ok(&mut node.value)
    }

    // ========================================================================
    // Node Access
    // ========================================================================

    /// Get the front node's slab key
    #[inline]
    pub fn head_key(&self) -> Option<usize> {
        self.head
    }

    /// Get the back node's slab key
    #[inline]
    pub fn tail_key(&self) -> Option<usize> {
        self.tail
    }

    /// Get a node by slab key
    ///
    /// Walking the chain goes through here: start at [`head_key`], follow
    /// [`Node::next`] until `None`.
    ///
    /// [`head_key`]: OrderedList::head_key
    ///
    /// # Example
    ///
    /// ```
    /// use mergelist::OrderedList;
    ///
    /// let mut list = OrderedList::new();
    /// list.push_back('a');
    /// list.push_back('b');
    ///
    /// let mut seen = Vec::new();
    /// let mut cursor = list.head_key();
    /// while let Some(key) = cursor {
    ///     let node = list.node(key).unwrap();
    ///     seen.push(*node.value());
    ///     cursor = node.next();
    /// }
    ///
    /// assert_eq!(seen, vec!['a', 'b']);
    /// ```
    #[inline]
    pub fn node(&self, key: usize) -> Option<&Node<T>> {
        self.nodes.get(key)
    }

    /// Borrow the element stored at a slab key
    #[inline]
    pub fn get(&self, key: usize) -> Option<&T> {
        self.nodes.get(key).map(|node| &node.value)
    }

    /// Mutably borrow the element stored at a slab key
    #[inline]
    pub fn get_mut(&mut self, key: usize) -> Option<&mut T> {
        self.nodes.get_mut(key).map(|node| &mut node.value)
    }

    // ========================================================================
    // Push and Pop
    // ========================================================================

    /// Append an element at the back in O(1)
    ///
    /// # Example
    ///
    /// ```
    /// use mergelist::OrderedList;
    ///
    /// let mut list = OrderedList::new();
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// assert_eq!(list.to_string(), "[(1)(2)]");
    /// ```
    pub fn push_back(&mut self, value: T) {
        let mut node = Node::new(value);
        node.prev = self.tail;
        let key = self.nodes.insert(node);

        if let Some(tail_key) = self.tail {
            // Link the old tail to the new node
            let tail_node = self.nodes.get_mut(tail_key).expect("Invalid tail key");
            tail_node.next = Some(key);
        } else {
            // Empty list - the new node is also the head
            self.head = Some(key);
        }

        self.tail = Some(key);
        self.len += 1;
    }

    /// Prepend an element at the front in O(1)
    pub fn push_front(&mut self, value: T) {
        let mut node = Node::new(value);
        node.next = self.head;
        let key = self.nodes.insert(node);

        if let Some(head_key) = self.head {
            // Link the old head back to the new node
            let head_node = self.nodes.get_mut(head_key).expect("Invalid head key");
            head_node.prev = Some(key);
        } else {
            // Empty list - the new node is also the tail
            self.tail = Some(key);
        }

        self.head = Some(key);
        self.len += 1;
    }

    /// Remove and return the first element
    ///
    /// # Returns
    ///
    /// The front element, or `None` if the list is empty (a no-op, not an
    /// error).
    ///
    /// # Example
    ///
    /// ```
    /// use mergelist::OrderedList;
    ///
    /// let mut list = OrderedList::new();
    /// list.push_back(9);
    ///
    /// assert_eq!(list.pop_front(), Some(9));
    /// assert_eq!(list.pop_front(), None);
    /// assert!(list.is_empty());
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        let key = self.head?;
        let node = self.nodes.remove(key);

        self.head = node.next;
        match self.head {
            Some(new_head) => {
                let head_node = self.nodes.get_mut(new_head).expect("Invalid head key");
                head_node.prev = None;
            }
            None => {
                // The list is now empty
                self.tail = None;
            }
        }

        self.len -= 1;
        debug_assert_eq!(self.len == 0, self.head.is_none() && self.tail.is_none());
        Some(node.value)
    }

    /// Remove and return the last element
    ///
    /// # Returns
    ///
    /// The back element, or `None` if the list is empty (a no-op, not an
    /// error).
    pub fn pop_back(&mut self) -> Option<T> {
        let key = self.tail?;
        let node = self.nodes.remove(key);

        self.tail = node.prev;
        match self.tail {
            Some(new_tail) => {
                let tail_node = self.nodes.get_mut(new_tail).expect("Invalid tail key");
                tail_node.next = None;
            }
            None => {
                // The list is now empty
                self.head = None;
            }
        }

        self.len -= 1;
        debug_assert_eq!(self.len == 0, self.head.is_none() && self.tail.is_none());
        Some(node.value)
    }

    /// Remove every element
    ///
    /// Pops from the front until nothing remains. The slab keeps its
    /// capacity, so a cleared list can be refilled without reallocating.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}

        debug_assert!(self.is_empty() && self.head.is_none() && self.tail.is_none());
    }

    /// Splice a new node in directly before `anchor`.
    ///
    /// The anchor key must come from this list's own chain.
    fn insert_before(&mut self, anchor: usize, value: T) {
        let prev_key = self.nodes.get(anchor).expect("Invalid anchor key").prev;

        let mut node = Node::new(value);
        node.prev = prev_key;
        node.next = Some(anchor);
        let key = self.nodes.insert(node);

        match prev_key {
            Some(prev) => {
                let prev_node = self.nodes.get_mut(prev).expect("Invalid prev key");
                prev_node.next = Some(key);
            }
            None => {
                // Anchor was the head
                self.head = Some(key);
            }
        }

        let anchor_node = self.nodes.get_mut(anchor).expect("Invalid anchor key");
        anchor_node.prev = Some(key);

        self.len += 1;
    }
}

impl<T: Ord> OrderedList<T> {
    // ========================================================================
    // Ordered Operations
    // ========================================================================

    /// Insert a value into an ascending list, keeping it ascending
    ///
    /// The value lands directly before the first element it compares `<=`
    /// to, so an incoming duplicate ends up ahead of the equals already in
    /// the list. O(n). On a list that is not sorted the value still lands
    /// before the first such element, but no overall order is restored.
    ///
    /// # Example
    ///
    /// ```
    /// use mergelist::OrderedList;
    ///
    /// let mut list = OrderedList::new();
    /// for value in [3, 1, 4, 1, 5] {
    ///     list.insert_ordered(value);
    /// }
    ///
    /// assert!(list.is_sorted());
    /// assert_eq!(list.to_string(), "[(1)(1)(3)(4)(5)]");
    /// ```
    pub fn insert_ordered(&mut self, value: T) {
        let head_key = match self.head {
            Some(key) => key,
            None => {
                // Empty list: the value becomes the sole element
                debug_assert_eq!(self.len, 0);
                self.push_back(value);
                return;
            }
        };

        // `<=` (not `<`) puts the incoming value ahead of its equals
        if value <= self.nodes.get(head_key).expect("Invalid head key").value {
            self.push_front(value);
            return;
        }

        // Scan from the second node for the first element the value can
        // precede
        let mut cursor = self.nodes.get(head_key).expect("Invalid head key").next;
        while let Some(key) = cursor {
            let node = self.nodes.get(key).expect("Invalid slab key");
            let next = node.next;
            if value <= node.value {
                self.insert_before(key, value);
                return;
            }
            cursor = next;
        }

        // Larger than everything present: append at the back
        self.push_back(value);
    }

    /// Check whether the list is in ascending order
    ///
    /// Vacuously `true` for zero or one element. O(n).
    pub fn is_sorted(&self) -> bool {
        debug_assert!(self.len < 2 || self.head.is_some());

        let mut cursor = self.head;
        while let Some(key) = cursor {
            let node = self.nodes.get(key).expect("Invalid slab key");
            if let Some(next_key) = node.next {
                let next_node = self.nodes.get(next_key).expect("Invalid next key");
                if node.value > next_node.value {
                    return false;
                }
            }
            cursor = node.next;
        }
        true
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<T: Clone> Clone for OrderedList<T> {
    /// Deep copy: every element lands in a fresh slab, in the same order.
    /// No node or key is shared with the source.
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.len);
        let mut cursor = self.head;
        while let Some(key) = cursor {
            let node = self.nodes.get(key).expect("Invalid slab key");
            copy.push_back(node.value.clone());
            cursor = node.next;
        }
        copy
    }

    /// Copy-assignment: discard own elements, then deep copy the source
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        let mut cursor = source.head;
        while let Some(key) = cursor {
            let node = source.nodes.get(key).expect("Invalid slab key");
            self.push_back(node.value.clone());
            cursor = node.next;
        }
    }
}

impl<T: PartialEq> PartialEq for OrderedList<T> {
    /// Element-wise equality in list order. Slab keys and capacity do not
    /// participate; two lists holding the same sequence are equal no matter
    /// how their slabs are laid out.
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }

        let mut a = self.head;
        let mut b = other.head;
        while let (Some(a_key), Some(b_key)) = (a, b) {
            let a_node = self.nodes.get(a_key).expect("Invalid slab key");
            let b_node = other.nodes.get(b_key).expect("Invalid slab key");
            if a_node.value != b_node.value {
                return false;
            }
            a = a_node.next;
            b = b_node.next;
        }

        // Equal lengths force both walks to run out together
        debug_assert!(a.is_none() && b.is_none());
        a.is_none() && b.is_none()
    }
}

impl<T: Eq> Eq for OrderedList<T> {}

impl<T: fmt::Debug> fmt::Debug for OrderedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = f.debug_list();
        let mut cursor = self.head;
        while let Some(key) = cursor {
            let node = self.nodes.get(key).expect("Invalid slab key");
            entries.entry(&node.value);
            cursor = node.next;
        }
        entries.finish()
    }
}

impl<T: fmt::Display> fmt::Display for OrderedList<T> {
    /// Render as `[(e1)(e2)...(en)]`; an empty list renders as `[]`.
    ///
    /// # Example
    ///
    /// ```
    /// use mergelist::OrderedList;
    ///
    /// let mut list = OrderedList::new();
    /// list.push_back(1);
    /// list.push_back(2);
    /// list.push_back(3);
    ///
    /// assert_eq!(list.to_string(), "[(1)(2)(3)]");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        let mut cursor = self.head;
        while let Some(key) = cursor {
            let node = self.nodes.get(key).expect("Invalid slab key");
            write!(f, "({})", node.value)?;
            cursor = node.next;
        }
        write!(f, "]")
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn list_from(values: &[i32]) -> OrderedList<i32> {
        let mut list = OrderedList::with_capacity(values.len());
        for &value in values {
            list.push_back(value);
        }
        list
    }

    fn collect(list: &OrderedList<i32>) -> Vec<i32> {
        let mut out = Vec::with_capacity(list.len());
        let mut cursor = list.head_key();
        while let Some(key) = cursor {
            let node = list.node(key).unwrap();
            out.push(*node.value());
            cursor = node.next();
        }
        out
    }

    #[test]
    fn test_new_list_is_empty() {
        let list: OrderedList<i32> = OrderedList::new();

        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert!(list.head_key().is_none());
        assert!(list.tail_key().is_none());
    }

    #[test]
    fn test_with_capacity_preallocates() {
        let list: OrderedList<i32> = OrderedList::with_capacity(64);

        assert!(list.capacity() >= 64);
        assert!(list.is_empty());
    }

    #[test]
    fn test_push_back_single() {
        let mut list = OrderedList::new();
        list.push_back(7);

        assert_eq!(list.len(), 1);
        assert_eq!(list.head_key(), list.tail_key());

        // The only node has no links
        let node = list.node(list.head_key().unwrap()).unwrap();
        assert!(node.is_unlinked());
        assert_eq!(*node.value(), 7);
    }

    #[test]
    fn test_push_back_links_chain() {
        let list = list_from(&[1, 2, 3]);

        assert_eq!(list.len(), 3);

        // Verify linked list structure: head <-> mid <-> tail
        let head_key = list.head_key().unwrap();
        let tail_key = list.tail_key().unwrap();

        let head = list.node(head_key).unwrap();
        assert!(head.prev().is_none());
        let mid_key = head.next().unwrap();

        let mid = list.node(mid_key).unwrap();
        assert_eq!(mid.prev(), Some(head_key));
        assert_eq!(mid.next(), Some(tail_key));

        let tail = list.node(tail_key).unwrap();
        assert_eq!(tail.prev(), Some(mid_key));
        assert!(tail.next().is_none());

        assert_eq!(collect(&list), vec![1, 2, 3]);
    }

    #[test]
    fn test_push_front_prepends() {
        let mut list = OrderedList::new();
        list.push_front(3);
        list.push_front(2);
        list.push_front(1);

        assert_eq!(collect(&list), vec![1, 2, 3]);

        let head = list.node(list.head_key().unwrap()).unwrap();
        assert!(head.prev().is_none());
        assert_eq!(*head.value(), 1);
    }

    #[test]
    fn test_pop_front_in_order() {
        let mut list = list_from(&[1, 2, 3]);

        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.len(), 1);

        // Remaining node is both head and tail, unlinked
        let node = list.node(list.head_key().unwrap()).unwrap();
        assert!(node.is_unlinked());

        assert_eq!(list.pop_front(), Some(3));
        assert!(list.is_empty());
    }

    #[test]
    fn test_pop_back_in_reverse_order() {
        let mut list = list_from(&[1, 2, 3]);

        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.pop_back(), Some(2));
        assert_eq!(list.pop_back(), Some(1));
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_pop_single_element_empties_list() {
        let mut list = list_from(&[9]);

        assert_eq!(list.pop_back(), Some(9));
        assert_eq!(list.len(), 0);
        assert!(list.head_key().is_none());
        assert!(list.tail_key().is_none());
        assert_eq!(list.front(), Err(AccessError::EmptyFront));
    }

    #[test]
    fn test_pop_on_empty_is_noop() {
        let mut list: OrderedList<i32> = OrderedList::new();

        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_front_and_back() {
        let list = list_from(&[10, 20, 30]);

        assert_eq!(list.front(), Ok(&10));
        assert_eq!(list.back(), Ok(&30));
    }

    #[test]
    fn test_front_and_back_on_empty() {
        let list: OrderedList<i32> = OrderedList::new();

        assert_eq!(list.front(), Err(AccessError::EmptyFront));
        assert_eq!(list.back(), Err(AccessError::EmptyBack));
    }

    #[test]
    fn test_front_mut_and_back_mut() {
        let mut list = list_from(&[1, 2, 3]);

        *list.front_mut().unwrap() = 10;
        *list.back_mut().unwrap() = 30;

        assert_eq!(collect(&list), vec![10, 2, 30]);

        let mut empty: OrderedList<i32> = OrderedList::new();
        assert_eq!(empty.front_mut(), Err(AccessError::EmptyFront));
        assert_eq!(empty.back_mut(), Err(AccessError::EmptyBack));
    }

    #[test]
    fn test_get_and_get_mut() {
        let mut list = list_from(&[5, 6]);
        let head_key = list.head_key().unwrap();

        assert_eq!(list.get(head_key), Some(&5));

        *list.get_mut(head_key).unwrap() = 50;
        assert_eq!(list.get(head_key), Some(&50));

        // A key the list never issued
        assert_eq!(list.get(9999), None);
    }

    #[test]
    fn test_clear_empties_and_remains_usable() {
        let mut list = list_from(&[1, 2, 3, 4]);
        let old_capacity = list.capacity();

        list.clear();

        assert!(list.is_empty());
        assert!(list.head_key().is_none());
        assert!(list.tail_key().is_none());
        assert!(list.capacity() >= old_capacity);

        list.push_back(5);
        assert_eq!(collect(&list), vec![5]);
    }

    #[test]
    fn test_insert_ordered_into_empty() {
        let mut list = OrderedList::new();
        list.insert_ordered(4);

        assert_eq!(collect(&list), vec![4]);
    }

    #[test]
    fn test_insert_ordered_at_head() {
        let mut list = list_from(&[2, 5, 8]);
        list.insert_ordered(1);

        assert_eq!(collect(&list), vec![1, 2, 5, 8]);
    }

    #[test]
    fn test_insert_ordered_in_middle() {
        let mut list = list_from(&[2, 5, 8]);
        list.insert_ordered(6);

        assert_eq!(collect(&list), vec![2, 5, 6, 8]);
        assert!(list.is_sorted());
    }

    #[test]
    fn test_insert_ordered_at_tail() {
        let mut list = list_from(&[2, 5, 8]);
        list.insert_ordered(9);

        assert_eq!(collect(&list), vec![2, 5, 8, 9]);
    }

    #[test]
    fn test_insert_ordered_duplicate_goes_before_equals() {
        #[derive(Debug, Clone, Copy)]
        struct Tagged {
            rank: i32,
            tag: char,
        }

        impl PartialEq for Tagged {
            fn eq(&self, other: &Self) -> bool {
                self.rank == other.rank
            }
        }

        impl Eq for Tagged {}

        impl PartialOrd for Tagged {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for Tagged {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.rank.cmp(&other.rank)
            }
        }

        let mut list = OrderedList::new();
        list.push_back(Tagged { rank: 3, tag: 'a' });
        list.push_back(Tagged { rank: 5, tag: 'b' });
        list.push_back(Tagged { rank: 5, tag: 'c' });

        list.insert_ordered(Tagged { rank: 5, tag: 'n' });

        // The newcomer sits ahead of both existing rank-5 entries
        let mut tags = Vec::new();
        let mut cursor = list.head_key();
        while let Some(key) = cursor {
            let node = list.node(key).unwrap();
            tags.push(node.value().tag);
            cursor = node.next();
        }
        assert_eq!(tags, vec!['a', 'n', 'b', 'c']);
    }

    #[test]
    fn test_is_sorted() {
        let empty: OrderedList<i32> = OrderedList::new();
        assert!(empty.is_sorted());

        assert!(list_from(&[42]).is_sorted());
        assert!(list_from(&[1, 2, 2, 3]).is_sorted());
        assert!(!list_from(&[1, 3, 2]).is_sorted());
        assert!(!list_from(&[2, 1]).is_sorted());
    }

    #[test]
    fn test_clone_is_independent() {
        let original = list_from(&[1, 2, 3]);
        let mut copy = original.clone();

        assert_eq!(copy, original);

        copy.pop_front();
        copy.push_back(99);

        assert_eq!(collect(&original), vec![1, 2, 3]);
        assert_eq!(collect(&copy), vec![2, 3, 99]);
    }

    #[test]
    fn test_clone_from_discards_old_elements() {
        let source = list_from(&[7, 8]);
        let mut target = list_from(&[1, 2, 3, 4, 5]);

        target.clone_from(&source);

        assert_eq!(collect(&target), vec![7, 8]);
        assert_eq!(target.len(), 2);
    }

    #[test]
    fn test_equality_ignores_slab_layout() {
        // Same sequence, different insertion history
        let a = list_from(&[1, 2, 3]);
        let mut b = OrderedList::new();
        b.push_front(3);
        b.push_front(2);
        b.push_front(1);

        assert_eq!(a, b);
    }

    #[test]
    fn test_inequality() {
        assert_ne!(list_from(&[1, 2, 3]), list_from(&[1, 2]));
        assert_ne!(list_from(&[1, 2, 3]), list_from(&[1, 2, 4]));
        assert_eq!(
            OrderedList::<i32>::new(),
            OrderedList::<i32>::new()
        );
    }

    #[test]
    fn test_display_format() {
        let list = list_from(&[1, 2, 3]);
        assert_eq!(list.to_string(), "[(1)(2)(3)]");

        let empty: OrderedList<i32> = OrderedList::new();
        assert_eq!(empty.to_string(), "[]");
    }

    #[test]
    fn test_debug_format() {
        let list = list_from(&[1, 2]);
        assert_eq!(format!("{:?}", list), "[1, 2]");
    }
}
