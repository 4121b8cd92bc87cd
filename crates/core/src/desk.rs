//! Support desk: a ticket store paired with a processor.

use std::io::Write;

use crate::config::Config;
use crate::processor::{ProcessSummary, ProcessorConfig, ProcessorError, TicketProcessor};
use crate::strategy::OrderingStrategy;
use crate::ticket::{CreateTicketRequest, MemoryTicketStore, Ticket, TicketStore};

/// Owns the tickets submitted to one desk and processes them on request.
#[derive(Debug)]
pub struct SupportDesk {
    store: MemoryTicketStore,
    processor: TicketProcessor,
}

impl SupportDesk {
    /// Creates an empty desk seeded from OS entropy.
    pub fn new(config: ProcessorConfig) -> Self {
        Self {
            store: MemoryTicketStore::new(),
            processor: TicketProcessor::new(config),
        }
    }

    /// Creates an empty desk whose ids and shuffles are reproducible.
    pub fn seeded(config: ProcessorConfig, seed: u64) -> Self {
        Self {
            store: MemoryTicketStore::seeded(seed),
            processor: TicketProcessor::seeded(config, seed.wrapping_add(1)),
        }
    }

    /// Creates a desk from configuration and submits its startup tickets.
    pub fn from_config(config: &Config) -> Self {
        let mut desk = match config.queue.seed {
            Some(seed) => Self::seeded(config.output.clone(), seed),
            None => Self::new(config.output.clone()),
        };
        for request in config.startup_tickets() {
            desk.submit(request);
        }
        desk
    }

    /// Submits a new ticket.
    pub fn create_ticket(&mut self, customer: &str, issue: &str) -> &Ticket {
        self.store.create_ticket(customer, issue)
    }

    /// Submits a ticket built from a configuration request.
    pub fn submit(&mut self, request: CreateTicketRequest) -> &Ticket {
        self.store.create(request)
    }

    /// All tickets in submission order.
    pub fn tickets(&self) -> &[Ticket] {
        self.store.all()
    }

    /// Processes every submitted ticket using `strategy`, writing to `out`.
    pub fn process_all<W: Write + ?Sized>(
        &mut self,
        strategy: &dyn OrderingStrategy,
        out: &mut W,
    ) -> Result<ProcessSummary, ProcessorError> {
        self.processor.process_all(&self.store, strategy, out)
    }
}
