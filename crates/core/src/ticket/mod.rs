//! Ticket model and in-memory storage.

mod memory_store;
mod store;
mod types;

pub use memory_store::MemoryTicketStore;
pub use store::TicketStore;
pub use types::{
    generate_ticket_id, CreateTicketRequest, Ticket, TICKET_ID_ALPHABET, TICKET_ID_LENGTH,
};
