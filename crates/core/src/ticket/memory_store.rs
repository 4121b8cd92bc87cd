//! In-memory ticket store implementation.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::debug;

use super::{CreateTicketRequest, Ticket, TicketStore};

/// In-memory ticket store.
///
/// Owns its ticket list and the random source used for id generation.
/// Separate instances never share tickets.
#[derive(Debug)]
pub struct MemoryTicketStore<R = StdRng> {
    tickets: Vec<Ticket>,
    rng: R,
}

impl MemoryTicketStore<StdRng> {
    /// Create an empty store seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create an empty store with a deterministic id sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for MemoryTicketStore<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> MemoryTicketStore<R> {
    /// Create an empty store using the given random source for ids.
    pub fn with_rng(rng: R) -> Self {
        Self {
            tickets: Vec::new(),
            rng,
        }
    }
}

impl<R: RngCore> TicketStore for MemoryTicketStore<R> {
    fn create(&mut self, request: CreateTicketRequest) -> &Ticket {
        let ticket = Ticket::from_request(request, &mut self.rng);
        debug!(ticket_id = %ticket.id(), customer = %ticket.customer(), "Ticket created");
        self.tickets.push(ticket);
        &self.tickets[self.tickets.len() - 1]
    }

    fn all(&self) -> &[Ticket] {
        &self.tickets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_empty() {
        let store = MemoryTicketStore::seeded(1);
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.all().is_empty());
    }

    #[test]
    fn test_create_preserves_submission_order() {
        let mut store = MemoryTicketStore::seeded(1);
        store.create_ticket("A", "first");
        store.create_ticket("B", "second");
        store.create_ticket("C", "third");

        let customers: Vec<&str> = store.all().iter().map(|t| t.customer()).collect();
        assert_eq!(customers, vec!["A", "B", "C"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_create_returns_stored_ticket() {
        let mut store = MemoryTicketStore::seeded(1);
        let id = store.create_ticket("A", "issue").id().to_string();
        assert_eq!(store.all()[0].id(), id);
    }

    #[test]
    fn test_stores_do_not_share_tickets() {
        let mut first = MemoryTicketStore::seeded(1);
        let second = MemoryTicketStore::seeded(2);
        first.create_ticket("A", "issue");

        assert_eq!(first.len(), 1);
        assert!(second.is_empty());
    }

    #[test]
    fn test_seeded_stores_generate_same_ids() {
        let mut a = MemoryTicketStore::seeded(99);
        let mut b = MemoryTicketStore::seeded(99);
        for _ in 0..3 {
            a.create_ticket("x", "y");
            b.create_ticket("x", "y");
        }
        let ids_a: Vec<&str> = a.all().iter().map(|t| t.id()).collect();
        let ids_b: Vec<&str> = b.all().iter().map(|t| t.id()).collect();
        assert_eq!(ids_a, ids_b);
    }

    #[test]
    fn test_create_accepts_duplicate_input() {
        let mut store = MemoryTicketStore::seeded(5);
        store.create(CreateTicketRequest::new("", ""));
        store.create(CreateTicketRequest::new("", ""));
        assert_eq!(store.len(), 2);
    }
}
