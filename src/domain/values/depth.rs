//! Discovery depth: how a vector's result budget is split between
//! mainstream encyclopedia content and fan-wiki lore.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Depth {
    /// Mostly Wikipedia (8:2)
    Surface,
    /// Balanced (5:5)
    #[default]
    Hybrid,
    /// Mostly Fandom (2:8)
    Deep,
}

/// Per-vector request sizes for each source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceBudget {
    pub wiki_limit: usize,
    pub fandom_limit: usize,
}

impl SourceBudget {
    pub fn total(&self) -> usize {
        self.wiki_limit + self.fandom_limit
    }
}

impl Depth {
    pub fn budget(&self) -> SourceBudget {
        let (wiki_limit, fandom_limit) = match self {
            Depth::Surface => (8, 2),
            Depth::Hybrid => (5, 5),
            Depth::Deep => (2, 8),
        };
        SourceBudget {
            wiki_limit,
            fandom_limit,
        }
    }

    pub fn level(&self) -> u8 {
        match self {
            Depth::Surface => 1,
            Depth::Hybrid => 2,
            Depth::Deep => 3,
        }
    }
}

impl TryFrom<u8> for Depth {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(Depth::Surface),
            2 => Ok(Depth::Hybrid),
            3 => Ok(Depth::Deep),
            _ => Err(format!("Invalid depth: {level}. Use 1, 2 or 3")),
        }
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Depth::Surface => write!(f, "surface"),
            Depth::Hybrid => write!(f, "hybrid"),
            Depth::Deep => write!(f, "deep"),
        }
    }
}

impl FromStr for Depth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "surface" => Ok(Depth::Surface),
            "2" | "hybrid" => Ok(Depth::Hybrid),
            "3" | "deep" => Ok(Depth::Deep),
            _ => Err(format!(
                "Invalid depth: '{s}'. Use 1 (surface), 2 (hybrid) or 3 (deep)"
            )),
        }
    }
}
