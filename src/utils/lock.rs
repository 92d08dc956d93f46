//! Lock utilities for shared caches
//!
//! Provides helpers for common lock patterns with automatic release.
//! A poisoned lock is recovered rather than propagated: the guarded data in this crate
//! (interning pools, caches) stays consistent even if a holder panicked mid-insert.

use std::sync::{PoisonError, RwLock};
use tracing::warn;

/// Execute a closure with a read lock, automatically releasing it
///
/// # Example
/// ```rust
/// use std::sync::RwLock;
/// use ivy_module_metadata::utils::with_read_lock;
///
/// let lock = RwLock::new(vec![1, 2, 3]);
/// let len = with_read_lock(&lock, |values| values.len());
/// assert_eq!(len, 3);
/// ```
pub fn with_read_lock<T, F, R>(rwlock: &RwLock<T>, f: F) -> R
where
    F: FnOnce(&T) -> R,
{
    let guard = rwlock.read().unwrap_or_else(|poisoned| {
        warn!("Recovering poisoned read lock");
        PoisonError::into_inner(poisoned)
    });
    f(&guard)
}

/// Execute a closure with a write lock, automatically releasing it
///
/// # Example
/// ```rust
/// use std::sync::RwLock;
/// use ivy_module_metadata::utils::with_write_lock;
///
/// let lock = RwLock::new(Vec::new());
/// with_write_lock(&lock, |values| values.push(1));
/// ```
pub fn with_write_lock<T, F, R>(rwlock: &RwLock<T>, f: F) -> R
where
    F: FnOnce(&mut T) -> R,
{
    let mut guard = rwlock.write().unwrap_or_else(|poisoned| {
        warn!("Recovering poisoned write lock");
        PoisonError::into_inner(poisoned)
    });
    f(&mut guard)
}
