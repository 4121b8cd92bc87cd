//! Configuration for the ticket processor.

use serde::{Deserialize, Serialize};

/// How processed tickets are written to the output sink.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable blocks framed by separator lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Configuration for the ticket processor.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProcessorConfig {
    /// Output format for processed tickets.
    #[serde(default)]
    pub format: OutputFormat,
}

impl ProcessorConfig {
    /// Create a config with the given output format.
    pub fn with_format(format: OutputFormat) -> Self {
        Self { format }
    }
}
