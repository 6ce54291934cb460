// src/lib.rs

pub mod config;
pub mod error;
pub mod normalize;
pub mod page;
pub mod records;
pub mod scrape;
pub mod store;

pub use error::ScrapeError;
pub use records::{EventRecord, LinkRecord};
