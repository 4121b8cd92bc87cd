//! In-memory support ticket queue with pluggable ordering strategies.

pub mod config;
pub mod desk;
pub mod processor;
pub mod strategy;
pub mod testing;
pub mod ticket;

pub use config::{
    default_tickets, load_config, load_config_from_str, validate_config, Config, ConfigError,
    QueueConfig,
};
pub use desk::SupportDesk;
pub use processor::{
    OutputFormat, ProcessSummary, ProcessorConfig, ProcessorError, TicketProcessor,
    EMPTY_QUEUE_NOTICE,
};
pub use strategy::{
    BlackHoleStrategy, FifoStrategy, FiloStrategy, OrderingStrategy, RandomStrategy,
    StrategyError, StrategyKind,
};
pub use ticket::{CreateTicketRequest, MemoryTicketStore, Ticket, TicketStore};
