use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How multiple interest vectors are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CorrelationMode {
    /// Each vector expands independently into one shared result list.
    #[default]
    Parallel,
    /// One combined cross-vector query; falls back to `Parallel` when it
    /// finds nothing.
    Synthesis,
}

impl fmt::Display for CorrelationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parallel => write!(f, "parallel"),
            Self::Synthesis => write!(f, "synthesis"),
        }
    }
}

impl FromStr for CorrelationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "parallel" => Ok(Self::Parallel),
            "synthesis" => Ok(Self::Synthesis),
            _ => Err(format!(
                "Invalid correlation mode: '{}'. Use 'parallel' or 'synthesis'",
                s
            )),
        }
    }
}
