//! Types for the processor module.

use serde::{Deserialize, Serialize};

/// Outcome of one processing run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProcessSummary {
    /// Name of the strategy that produced the order.
    pub strategy: String,
    /// Tickets in the store when the run started.
    pub submitted: usize,
    /// Tickets written to the output.
    pub processed: usize,
}

impl ProcessSummary {
    /// Tickets the strategy chose not to process.
    pub fn discarded(&self) -> usize {
        self.submitted.saturating_sub(self.processed)
    }
}
