pub mod blend;
pub mod browse;
pub mod discover;
