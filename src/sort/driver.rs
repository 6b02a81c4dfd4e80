//! Merge sort drivers.
//!
//! ## Strategies
//!
//! - **Recursive** (top-down): split in half, sort each half, merge. This is
//!   the default strategy behind [`OrderedList::merge_sort`], and it is
//!   stable: equal elements keep their original relative order.
//! - **Iterative** (bottom-up): explode into singleton runs, then repeatedly
//!   merge the two oldest runs until one remains. No recursion, so the depth
//!   of the input never touches the call stack. Tie order is not guaranteed:
//!   when a pass holds an odd number of runs, the queue wraps and a
//!   later-position run can become the left (tie-winning) side of a merge.
//!
//! Both variants sort ascending without touching the receiver. On inputs
//! without duplicates they return identical lists.

use crate::list::OrderedList;

impl<T: Ord + Clone> OrderedList<T> {
    /// Sort into a new ascending list
    ///
    /// Delegates to [`merge_sort_recursive`]; the iterative variant is
    /// available separately for callers that want to avoid recursion.
    ///
    /// [`merge_sort_recursive`]: OrderedList::merge_sort_recursive
    ///
    /// # Example
    ///
    /// ```
    /// use mergelist::OrderedList;
    ///
    /// let mut list = OrderedList::new();
    /// for value in [5, 3, 1, 4, 2] {
    ///     list.push_back(value);
    /// }
    ///
    /// let sorted = list.merge_sort();
    /// assert_eq!(sorted.to_string(), "[(1)(2)(3)(4)(5)]");
    /// assert_eq!(list.to_string(), "[(5)(3)(1)(4)(2)]");
    /// ```
    pub fn merge_sort(&self) -> Self {
        self.merge_sort_recursive()
    }

    /// Top-down merge sort
    ///
    /// Splits the list in half, sorts each half recursively, then merges
    /// the sorted halves. The left half always holds the earlier positions
    /// and merging prefers the left side on ties, so the sort is stable.
    /// O(n log n) comparisons; the copy-per-level discipline costs
    /// O(n log n) auxiliary space.
    pub fn merge_sort_recursive(&self) -> Self {
        // Zero or one element is already sorted
        if self.len() < 2 {
            return self.clone();
        }

        let (left, right) = self.split_halves();
        let left_sorted = left.merge_sort_recursive();
        let right_sorted = right.merge_sort_recursive();

        left_sorted.merge(&right_sorted)
    }

    /// Bottom-up merge sort
    ///
    /// Explodes the list into a queue of singleton runs, then repeatedly
    /// pops the two oldest runs and pushes their merge at the back until a
    /// single run remains. Run lengths roughly double each
    /// pass, giving the same O(n log n) bound as the recursive variant
    /// without using the call stack. Unlike the recursive variant this is
    /// not stable; see the module docs.
    pub fn merge_sort_iterative(&self) -> Self {
        if self.len() < 2 {
            return self.clone();
        }

        let mut runs = self.explode();
        while runs.len() > 1 {
            match (runs.pop_front(), runs.pop_front()) {
                (Some(first), Some(second)) => runs.push_back(first.merge(&second)),
                // Unreachable while len > 1; bail rather than spin
                _ => break,
            }
        }

        runs.pop_front().unwrap_or_default()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
