// src/error.rs

use thiserror::Error;

/// Error type for page interaction, extraction, and output failures.
///
/// Field-level extraction errors are recovered where they occur; only
/// page creation and navigation failures escalate to event level.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("could not open a new page: {0}")]
    PageCreate(String),
    #[error("navigation to '{url}' failed: {reason}")]
    Navigation { url: String, reason: String },
    #[error("selector '{selector}' evaluation failed: {reason}")]
    Evaluation { selector: String, reason: String },
    #[error("scroll failed: {0}")]
    Scroll(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ScrapeError {
    pub(crate) fn evaluation(selector: &str, reason: impl ToString) -> Self {
        Self::Evaluation {
            selector: selector.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn navigation(url: &str, reason: impl ToString) -> Self {
        Self::Navigation {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}
