//! Execution mode (limit or market).

use std::fmt;
use std::str::FromStr;

/// How an order is executed against the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExecutionMode {
    /// Limit order - rests in the book at the given price until matched.
    Limit,
    /// Market order - filled immediately against resting orders.
    Market,
}

impl ExecutionMode {
    /// Returns true if this mode requires a price.
    #[must_use]
    pub const fn requires_price(&self) -> bool {
        matches!(self, Self::Limit)
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Limit => write!(f, "LIMIT"),
            Self::Market => write!(f, "MARKET"),
        }
    }
}

impl FromStr for ExecutionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "limit" => Ok(Self::Limit),
            "market" => Ok(Self::Market),
            other => Err(format!("unknown execution mode: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execution_mode_requires_price() {
        assert!(ExecutionMode::Limit.requires_price());
        assert!(!ExecutionMode::Market.requires_price());
    }

    #[test]
    fn execution_mode_from_str() {
        assert_eq!(" Market ".parse::<ExecutionMode>().unwrap(), ExecutionMode::Market);
        assert_eq!(ExecutionMode::Limit.to_string(), "LIMIT");
        assert!("stop".parse::<ExecutionMode>().is_err());
    }
}
