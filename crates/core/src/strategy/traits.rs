//! Trait definitions for the strategy module.

use rand::RngCore;

use crate::ticket::Ticket;

/// Decides which tickets get processed and in what order.
///
/// Implementations read the borrowed slice and return a new vector; the
/// input is never modified. The random source is only drawn from by
/// strategies that need it.
pub trait OrderingStrategy {
    /// Name of this strategy for logging and summaries.
    fn name(&self) -> &str;

    /// Produce the processing order for `tickets`.
    fn reorder(&self, tickets: &[Ticket], rng: &mut dyn RngCore) -> Vec<Ticket>;
}
