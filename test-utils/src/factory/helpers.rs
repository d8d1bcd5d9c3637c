//! Shared helper utilities for factory methods.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for generating unique IDs in tests.
///
/// Starts high so generated ids never collide with the small literal ids tests use.
static COUNTER: AtomicU64 = AtomicU64::new(100_000_000_000_000_000);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value, usable as a Discord snowflake
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}
