//! Ticket processor.
//!
//! The processor asks an [`OrderingStrategy`](crate::strategy::OrderingStrategy)
//! for the order of a store's tickets and writes a report for each one to an
//! output sink.
//!
//! # Example
//!
//! ```
//! use support_queue_core::processor::{ProcessorConfig, TicketProcessor};
//! use support_queue_core::strategy::FifoStrategy;
//! use support_queue_core::ticket::{MemoryTicketStore, TicketStore};
//!
//! let mut store = MemoryTicketStore::seeded(7);
//! store.create_ticket("Alice", "Printer on fire");
//!
//! let mut processor = TicketProcessor::seeded(ProcessorConfig::default(), 7);
//! let mut out = Vec::new();
//! let summary = processor.process_all(&store, &FifoStrategy, &mut out).unwrap();
//!
//! assert_eq!(summary.processed, 1);
//! assert!(String::from_utf8(out).unwrap().contains("Customer: Alice"));
//! ```

mod config;
mod report;
mod ticket_processor;
mod types;

pub use config::{OutputFormat, ProcessorConfig};
pub use report::{EMPTY_QUEUE_NOTICE, SEPARATOR};
pub use ticket_processor::{ProcessorError, TicketProcessor};
pub use types::ProcessSummary;
