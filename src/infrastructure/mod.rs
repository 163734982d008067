pub mod http;
pub mod locators;
pub mod mediawiki;
pub mod shuffle;
