//! Ticket storage trait.

use crate::ticket::{CreateTicketRequest, Ticket};

/// Trait for ticket storage backends.
///
/// Stores are append-only: tickets are kept in submission order and no
/// operation removes or reorders them. Reordering is done by an
/// [`OrderingStrategy`](crate::strategy::OrderingStrategy) on a copy.
pub trait TicketStore {
    /// Create a new ticket and append it to the store.
    fn create(&mut self, request: CreateTicketRequest) -> &Ticket;

    /// All tickets in submission order.
    fn all(&self) -> &[Ticket];

    /// Number of stored tickets.
    fn len(&self) -> usize {
        self.all().len()
    }

    /// Whether the store holds no tickets.
    fn is_empty(&self) -> bool {
        self.all().is_empty()
    }

    /// Create a ticket from a customer and issue pair.
    fn create_ticket(&mut self, customer: &str, issue: &str) -> &Ticket {
        self.create(CreateTicketRequest::new(customer, issue))
    }
}
