//! Selection of a built-in strategy by name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{
    BlackHoleStrategy, FifoStrategy, FiloStrategy, OrderingStrategy, RandomStrategy,
    StrategyError,
};

/// The closed set of built-in ordering strategies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum StrategyKind {
    Fifo,
    Filo,
    Random,
    #[default]
    BlackHole,
}

impl StrategyKind {
    /// All built-in strategies.
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::Fifo,
        StrategyKind::Filo,
        StrategyKind::Random,
        StrategyKind::BlackHole,
    ];

    /// Returns the canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Fifo => "fifo",
            StrategyKind::Filo => "filo",
            StrategyKind::Random => "random",
            StrategyKind::BlackHole => "black_hole",
        }
    }

    /// Instantiate the strategy.
    pub fn strategy(&self) -> Box<dyn OrderingStrategy> {
        match self {
            StrategyKind::Fifo => Box::new(FifoStrategy),
            StrategyKind::Filo => Box::new(FiloStrategy),
            StrategyKind::Random => Box::new(RandomStrategy),
            StrategyKind::BlackHole => Box::new(BlackHoleStrategy),
        }
    }

    /// Whether the output depends only on the input tickets.
    pub fn is_deterministic(&self) -> bool {
        !matches!(self, StrategyKind::Random)
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(StrategyKind::Fifo),
            "filo" | "lifo" => Ok(StrategyKind::Filo),
            "random" => Ok(StrategyKind::Random),
            "black_hole" | "blackhole" => Ok(StrategyKind::BlackHole),
            _ => Err(StrategyError::UnknownStrategy(s.to_string())),
        }
    }
}

impl TryFrom<String> for StrategyKind {
    type Error = StrategyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
