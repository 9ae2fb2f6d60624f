//! Component status types produced by check functions.

use serde::{Deserialize, Serialize};

/// Component state, ordered by severity so the worst state of a set is its
/// maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum State {
    Up,
    Warn,
    Down,
}

/// Outcome of a single probe. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Status {
    pub state: State,
    /// Optional diagnostic payload, e.g. connection pool counters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl Status {
    pub fn up() -> Self {
        Self::new(State::Up)
    }

    pub fn warn() -> Self {
        Self::new(State::Warn)
    }

    pub fn down() -> Self {
        Self::new(State::Down)
    }

    pub fn new(state: State) -> Self {
        Self {
            state,
            details: None,
        }
    }

    pub fn with_details(state: State, details: serde_json::Value) -> Self {
        Self {
            state,
            details: Some(details),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_ordering() {
        assert!(State::Up < State::Warn);
        assert!(State::Warn < State::Down);
        assert_eq!(State::Up.max(State::Down), State::Down);
    }

    #[test]
    fn states_serialize_uppercase() {
        assert_eq!(serde_json::to_string(&State::Up).unwrap(), "\"UP\"");
        assert_eq!(serde_json::to_string(&State::Warn).unwrap(), "\"WARN\"");
        assert_eq!(serde_json::to_string(&State::Down).unwrap(), "\"DOWN\"");
    }
}
