//! Testing utilities: ticket fixtures and a failing output sink.

mod failing_writer;

pub use failing_writer::FailingWriter;

/// Test fixtures and helper functions.
pub mod fixtures {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::ticket::{MemoryTicketStore, Ticket, TicketStore};

    /// Seed used by every fixture.
    pub const FIXTURE_SEED: u64 = 0x5eed;

    /// Create one ticket per customer with a generated issue text.
    pub fn tickets(customers: &[&str]) -> Vec<Ticket> {
        let mut rng = StdRng::seed_from_u64(FIXTURE_SEED);
        customers
            .iter()
            .map(|customer| Ticket::create(*customer, format!("Issue from {}", customer), &mut rng))
            .collect()
    }

    /// Create a seeded store holding one ticket per customer.
    pub fn store(customers: &[&str]) -> MemoryTicketStore {
        let mut store = MemoryTicketStore::seeded(FIXTURE_SEED);
        for customer in customers {
            store.create_ticket(customer, &format!("Issue from {}", customer));
        }
        store
    }
}
