// src/records.rs
//
// Output data model. Field names serialize in camelCase to match the
// events.json consumer; optional fields are omitted entirely when absent.

use serde::{Deserialize, Serialize};

/// A discovered (event URL, thumbnail URL) pair from the listing page.
///
/// Created once by link discovery, immutable, consumed exactly once to
/// seed one [`EventRecord`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRecord {
    pub link: String,
    /// `data-src` of the listing thumbnail; empty string when the
    /// enclosing article carried no image.
    pub image_url: String,
}

impl LinkRecord {
    /// Deterministic identity used to dedupe discovered pairs.
    pub fn key(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| format!("{}\u{1f}{}", self.link, self.image_url))
    }
}

/// One normalized event, fully populated before it leaves the extractor
/// and never mutated afterward.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    /// `None` only if the title element was not found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Always present: `YYYY-MM-DDT00:00:00.000+00:00`, or the literal
    /// `Invalid date` when the source text was empty or unparseable.
    pub date: String,
    /// One of the classifier's fixed set, or `"unknown"`. Never empty.
    pub genre: String,
    /// `None` if neither the primary nor the backup selector matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub location: String,
    /// `None` when the price selector did not match. No silent default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// Copied verbatim from the seeding [`LinkRecord`]; may be empty.
    pub image: String,
    /// HTML fragment; empty string permitted, never null.
    pub excerpt: String,
    /// Always false. Reserved for a future signal.
    pub is_featured: bool,
}
