pub mod article;
pub mod canonical_page;
pub mod discovery_item;
pub mod interest_vector;
