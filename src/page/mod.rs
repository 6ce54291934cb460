// src/page/mod.rs
//
// Capability surface over a browsing runtime. The extraction algorithms
// only ever see these traits, so they run unchanged against the HTTP
// snapshot implementation or the scripted fake.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::ScrapeError;

pub mod fake;
pub mod snapshot;

pub use fake::{FakeContext, FakeDocument};
pub use snapshot::SnapshotContext;

/// Something that can open transient pages within a shared session.
///
/// Consumed, not owned, by the core: each detail extraction opens its own
/// page and is solely responsible for closing it.
#[async_trait]
pub trait BrowsingContext: Send + Sync {
    async fn new_page(&self) -> Result<Box<dyn PageHandle>, ScrapeError>;
}

/// One open page. All operations are awaited sequentially; nothing here
/// is cancelled once started.
#[async_trait]
pub trait PageHandle: Send {
    async fn navigate(&mut self, url: &str) -> Result<(), ScrapeError>;

    /// Evaluate a CSS selector against the current document and return
    /// owned snapshots of every match, in document order.
    async fn query(&self, selector: &str) -> Result<Vec<Element>, ScrapeError>;

    /// Scroll the viewport to the bottom of the document, then wait the
    /// settle delay so lazily-loaded content can render.
    async fn scroll_and_settle(&mut self) -> Result<(), ScrapeError>;

    async fn close(self: Box<Self>) -> Result<(), ScrapeError>;
}

/// Owned snapshot of a matched element, detached from any live DOM.
///
/// `article_image` is the `data-src` of the image inside the nearest
/// enclosing `<article>`, resolved by the implementation at query time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    text: String,
    attrs: HashMap<String, String>,
    article_image: Option<String>,
}

impl Element {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), ..Self::default() }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn with_article_image(mut self, src: impl Into<String>) -> Self {
        self.article_image = Some(src.into());
        self
    }

    /// Concatenated, whitespace-normalized text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Absolute href for anchors; implementations resolve relative hrefs
    /// against the page URL before snapshotting.
    pub fn href(&self) -> Option<&str> {
        self.attr("href")
    }

    pub fn article_image(&self) -> Option<&str> {
        self.article_image.as_deref()
    }
}
