//! Observers for split notifications.
//!
//! The record count of each invocation is reported through a side channel.
//! Observers never influence splitting results, and their absence is always
//! valid.

/// Observer notified after each document split.
pub trait SplitObserver {
    /// Called once per invocation with the number of records produced.
    fn on_document_split(&self, record_count: usize);
}

/// Observer that reports the record count through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SplitObserver for TracingObserver {
    fn on_document_split(&self, record_count: usize) {
        tracing::info!(record_count, "Split document into statement records");
    }
}
