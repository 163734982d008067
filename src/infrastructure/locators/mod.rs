//! Fandom wiki discovery for topics without an explicit lock.
//!
//! There is no cross-wiki directory to ask, so the default stack is a
//! URL-guessing prober backed by a static alias table.

pub mod chain;
pub mod heuristic;
pub mod static_table;
