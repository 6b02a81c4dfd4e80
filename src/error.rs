//! Error types for list access.
//!
//! ## Design
//!
//! The only recoverable failure in this crate is asking an empty list for a
//! boundary element. Everything else that could go wrong (a dangling slab
//! key, an asymmetric link) is an implementation bug, guarded by debug
//! assertions rather than surfaced through `Result`.

use thiserror::Error;

/// Error returned when a boundary accessor is called on an empty list.
///
/// `front()` and `back()` report distinct variants so callers can tell
/// which end was interrogated.
///
/// # Example
///
/// ```
/// use mergelist::{AccessError, OrderedList};
///
/// let list: OrderedList<i32> = OrderedList::new();
///
/// assert_eq!(list.front(), Err(AccessError::EmptyFront));
/// assert_eq!(list.back(), Err(AccessError::EmptyBack));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccessError {
    /// `front()` or `front_mut()` was called on a list with no elements
    #[error("front() called on an empty list")]
    EmptyFront,

    /// `back()` or `back_mut()` was called on a list with no elements
    #[error("back() called on an empty list")]
    EmptyBack,
}

// ============================================================================
// Unit Tests
// ============================================================================
