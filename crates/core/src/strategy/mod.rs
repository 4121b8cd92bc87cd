//! Ticket ordering strategies.
//!
//! A strategy takes the current ticket list and returns the sequence the
//! processor should work through. Four strategies are built in:
//!
//! - `fifo`: submission order
//! - `filo`: reverse submission order
//! - `random`: uniform shuffle
//! - `black_hole`: nothing at all
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use support_queue_core::strategy::{FiloStrategy, OrderingStrategy};
//! use support_queue_core::ticket::Ticket;
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let tickets = vec![
//!     Ticket::create("A", "first", &mut rng),
//!     Ticket::create("B", "second", &mut rng),
//! ];
//!
//! let ordered = FiloStrategy.reorder(&tickets, &mut rng);
//! assert_eq!(ordered[0].customer(), "B");
//! ```

mod builtin;
mod error;
mod kind;
mod traits;

pub use builtin::{BlackHoleStrategy, FifoStrategy, FiloStrategy, RandomStrategy};
pub use error::StrategyError;
pub use kind::StrategyKind;
pub use traits::OrderingStrategy;
