//! Core ticket data types.

use chrono::{DateTime, Utc};
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

/// Number of characters in a generated ticket id.
pub const TICKET_ID_LENGTH: usize = 8;

/// Characters a ticket id is drawn from.
pub const TICKET_ID_ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generate a ticket id.
///
/// Each character is an independent uniform draw from [`TICKET_ID_ALPHABET`].
/// Ids are not checked for uniqueness; collisions are possible and harmless
/// since ids are only ever displayed.
pub fn generate_ticket_id<R: RngCore + ?Sized>(rng: &mut R) -> String {
    (0..TICKET_ID_LENGTH)
        .map(|_| TICKET_ID_ALPHABET[rng.gen_range(0..TICKET_ID_ALPHABET.len())] as char)
        .collect()
}

/// Request to create a new ticket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTicketRequest {
    /// Customer submitting the ticket.
    pub customer: String,
    /// Free-text description of the problem.
    pub issue: String,
}

impl CreateTicketRequest {
    pub fn new(customer: impl Into<String>, issue: impl Into<String>) -> Self {
        Self {
            customer: customer.into(),
            issue: issue.into(),
        }
    }
}

/// A customer support ticket.
///
/// Tickets are immutable once created: fields are only readable through
/// accessors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ticket {
    id: String,
    customer: String,
    issue: String,
    created_at: DateTime<Utc>,
}

impl Ticket {
    /// Create a ticket with a freshly generated id.
    pub fn create<R: RngCore + ?Sized>(
        customer: impl Into<String>,
        issue: impl Into<String>,
        rng: &mut R,
    ) -> Self {
        Self {
            id: generate_ticket_id(rng),
            customer: customer.into(),
            issue: issue.into(),
            created_at: Utc::now(),
        }
    }

    /// Create a ticket from a submission request.
    pub fn from_request<R: RngCore + ?Sized>(request: CreateTicketRequest, rng: &mut R) -> Self {
        Self::create(request.customer, request.issue, rng)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn issue(&self) -> &str {
        &self.issue
    }

    /// When the ticket was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
