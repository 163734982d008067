pub mod article_catalog;
pub mod encyclopedia;
pub mod fandom_source;
pub mod shuffler;
pub mod source_locator;
