use serde::{Deserialize, Serialize};

use crate::processor::ProcessorConfig;
use crate::strategy::StrategyKind;
use crate::ticket::CreateTicketRequest;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub queue: QueueConfig,
    #[serde(default)]
    pub output: ProcessorConfig,
    /// Tickets submitted at startup. `None` means the built-in demo tickets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tickets: Option<Vec<CreateTicketRequest>>,
}

impl Config {
    /// Tickets to submit at startup.
    pub fn startup_tickets(&self) -> Vec<CreateTicketRequest> {
        match &self.tickets {
            Some(tickets) => tickets.clone(),
            None => default_tickets(),
        }
    }
}

/// Queue configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct QueueConfig {
    /// Strategy used for the processing run.
    #[serde(default)]
    pub strategy: StrategyKind,
    /// Seed for ticket ids and shuffles. Unset means OS entropy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// The tickets submitted when none are configured.
pub fn default_tickets() -> Vec<CreateTicketRequest> {
    vec![
        CreateTicketRequest::new(
            "John Schnee",
            "Weird noises. Something like beeeeeep booo booo baaaaaaaaa.",
        ),
        CreateTicketRequest::new(
            "Robert Baratheon",
            "Am i drunk, or is this resolution too low?",
        ),
        CreateTicketRequest::new(
            "David Kasdorf",
            "I always write bug-free code. This is just a ticket for proving it.",
        ),
    ]
}
