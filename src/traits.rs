//! Core traits for streaming summaries
//!
//! A summary ingests a stream one item at a time, keeps a fixed amount of
//! state, and can absorb another summary of the same kind so that partitions of
//! a stream can be summarised independently and combined afterwards.

use core::fmt::Debug;

/// Core trait for mergeable streaming summaries
///
/// Merging never fails: any two summaries of the same type describe populations
/// that can be pooled.
pub trait Summary: Clone + Debug {
    /// The type of item this summary processes
    type Item;

    /// Add an item to the summary
    fn update(&mut self, item: &Self::Item);

    /// Merge another summary into this one
    fn merge(&mut self, other: &Self);

    /// Reset summary to empty state
    fn clear(&mut self);

    /// Memory usage in bytes
    fn size_bytes(&self) -> usize;

    /// Number of items processed
    fn count(&self) -> u64;

    /// Check if summary is empty
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}
