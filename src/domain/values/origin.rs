use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether an item echoes user input or was found by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Origin {
    UserSelected,
    AiDiscovery,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::UserSelected => write!(f, "USER_SELECTED"),
            Origin::AiDiscovery => write!(f, "AI_DISCOVERY"),
        }
    }
}
