// src/normalize/mod.rs
pub mod date;
pub mod excerpt;
pub mod genre;

pub use date::normalize_date;
pub use excerpt::format_excerpt;
pub use genre::classify;
