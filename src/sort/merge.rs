//! Two-pointer merge of sorted lists.
//!
//! ## Design
//!
//! The merge walks both input chains by slab key and copies elements into a
//! fresh output list; neither input is mutated. Ties take from the left
//! operand, which is what makes the sorts built on top of this stable.

use crate::list::OrderedList;

impl<T: Ord + Clone> OrderedList<T> {
    /// Merge two ascending lists into a new ascending list
    ///
    /// Both inputs are assumed sorted; on unsorted inputs the output is
    /// merely some interleaving. When the heads compare equal the left
    /// operand's element is taken first (stable, left-preferring). An empty
    /// side degenerates to a plain copy of the other with no comparisons
    /// performed. O(n + m) comparisons and copies.
    ///
    /// # Example
    ///
    /// ```
    /// use mergelist::OrderedList;
    ///
    /// let mut a = OrderedList::new();
    /// let mut b = OrderedList::new();
    /// for value in [1, 3, 5] {
    ///     a.push_back(value);
    /// }
    /// for value in [2, 4, 6] {
    ///     b.push_back(value);
    /// }
    ///
    /// let merged = a.merge(&b);
    /// assert_eq!(merged.to_string(), "[(1)(2)(3)(4)(5)(6)]");
    /// assert_eq!(a.len(), 3);
    /// assert_eq!(b.len(), 3);
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        // An empty side degenerates to a copy of the other
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }

        let mut merged = Self::with_capacity(self.len() + other.len());
        let mut a = self.head_key();
        let mut b = other.head_key();

        while let (Some(a_key), Some(b_key)) = (a, b) {
            let a_node = self.node(a_key).expect("Invalid slab key");
            let b_node = other.node(b_key).expect("Invalid slab key");

            // `<=` takes from the left on ties
            if a_node.value() <= b_node.value() {
                merged.push_back(a_node.value().clone());
                a = a_node.next();
            } else {
                merged.push_back(b_node.value().clone());
                b = b_node.next();
            }
        }

        // Drain whichever side still has elements
        while let Some(key) = a {
            let node = self.node(key).expect("Invalid slab key");
            merged.push_back(node.value().clone());
            a = node.next();
        }
        while let Some(key) = b {
            let node = other.node(key).expect("Invalid slab key");
            merged.push_back(node.value().clone());
            b = node.next();
        }

        merged
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
