// src/scrape/mod.rs
mod detail;
mod discover;
mod retry;

pub use detail::extract_event;
pub use discover::discover_links;
pub use retry::retry_with;
