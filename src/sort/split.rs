//! List splitting for merge sort.
//!
//! ## Design
//!
//! Both operations here are non-destructive: they work on a copy and leave
//! the receiver untouched. `split_halves` feeds the top-down recursive sort,
//! `explode` seeds the bottom-up iterative sort's work queue.

use crate::list::OrderedList;

impl<T: Clone> OrderedList<T> {
    /// Split a copy of the list into front and back halves
    ///
    /// The back half receives the last `len / 2` elements (floor), so for
    /// an odd length the extra element stays in the front half. Relative
    /// order is preserved on both sides. With fewer than two elements the
    /// result is a copy of the whole list plus an empty list.
    ///
    /// # Returns
    ///
    /// `(front_half, back_half)` as two fresh lists; the receiver is not
    /// modified.
    ///
    /// # Example
    ///
    /// ```
    /// use mergelist::OrderedList;
    ///
    /// let mut list = OrderedList::new();
    /// for value in [1, 2, 3, 4, 5] {
    ///     list.push_back(value);
    /// }
    ///
    /// let (left, right) = list.split_halves();
    /// assert_eq!(left.to_string(), "[(1)(2)(3)]");
    /// assert_eq!(right.to_string(), "[(4)(5)]");
    /// assert_eq!(list.len(), 5);
    /// ```
    pub fn split_halves(&self) -> (Self, Self) {
        let mut left = self.clone();
        let mut right = Self::with_capacity(self.len() / 2);

        // Move floor(n/2) elements off the left's back; pushing each onto
        // the right's front keeps their relative order
        for _ in 0..self.len() / 2 {
            if let Some(value) = left.pop_back() {
                right.push_front(value);
            }
        }

        (left, right)
    }

    /// Decompose a copy of the list into singleton lists
    ///
    /// Produces one single-element list per element, in original order.
    /// A one-element list is trivially sorted, so the result is a queue of
    /// sorted runs ready for bottom-up merging.
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
    /// let runs = list.explode();
    /// assert_eq!(runs.len(), 2);
    /// assert_eq!(runs.front().unwrap().to_string(), "[(7)]");
    /// assert_eq!(runs.back().unwrap().to_string(), "[(8)]");
    /// ```
    pub fn explode(&self) -> OrderedList<OrderedList<T>> {
        let mut remaining = self.clone();
        let mut runs = OrderedList::with_capacity(self.len());

        while let Some(value) = remaining.pop_front() {
            let mut singleton = Self::with_capacity(1);
            singleton.push_back(value);
            runs.push_back(singleton);
        }

        runs
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
