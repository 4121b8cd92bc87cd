//! Ticket processor implementation.

use std::io::Write;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, info};

use super::config::ProcessorConfig;
use super::report::{write_empty_notice, write_ticket};
use super::types::ProcessSummary;
use crate::strategy::OrderingStrategy;
use crate::ticket::TicketStore;

/// Error type for processing runs.
#[derive(Debug, thiserror::Error)]
pub enum ProcessorError {
    /// The output sink rejected a write.
    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

/// Applies an ordering strategy to a store and reports the result.
///
/// The processor owns the random source handed to strategies, so a seeded
/// processor produces the same order for the same input on every run.
#[derive(Debug)]
pub struct TicketProcessor<R = StdRng> {
    config: ProcessorConfig,
    rng: R,
}

impl TicketProcessor<StdRng> {
    /// Creates a processor seeded from OS entropy.
    pub fn new(config: ProcessorConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a processor with a deterministic random source.
    pub fn seeded(config: ProcessorConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> TicketProcessor<R> {
    /// Creates a processor using the given random source.
    pub fn with_rng(config: ProcessorConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Processes every ticket in `store` in the order chosen by `strategy`.
    ///
    /// Writes one report per ticket to `out`, or a single "no tickets"
    /// notice when the strategy yields nothing. The store is left untouched.
    pub fn process_all<S, W>(
        &mut self,
        store: &S,
        strategy: &dyn OrderingStrategy,
        out: &mut W,
    ) -> Result<ProcessSummary, ProcessorError>
    where
        S: TicketStore + ?Sized,
        W: Write + ?Sized,
    {
        let submitted = store.len();
        let ordered = strategy.reorder(store.all(), &mut self.rng);

        let summary = ProcessSummary {
            strategy: strategy.name().to_string(),
            submitted,
            processed: ordered.len(),
        };

        if ordered.is_empty() {
            debug!(strategy = %summary.strategy, submitted, "No tickets to process");
            write_empty_notice(out, self.config.format)?;
        } else {
            for ticket in &ordered {
                debug!(ticket_id = %ticket.id(), customer = %ticket.customer(), "Processing ticket");
                write_ticket(out, self.config.format, ticket)?;
            }
        }
        out.flush()?;

        info!(
            strategy = %summary.strategy,
            submitted = summary.submitted,
            processed = summary.processed,
            discarded = summary.discarded(),
            "Processing run complete"
        );

        Ok(summary)
    }
}
