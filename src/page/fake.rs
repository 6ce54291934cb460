// src/page/fake.rs
//
// Scripted in-memory page surface. Documents are keyed by URL; each
// document is a sequence of stages (selector -> elements maps) and
// scroll_and_settle advances the stage, which is how tests script a
// lazily-loading listing. Failure injection covers page creation and
// navigation; close calls are counted so tests can assert the
// acquire/release contract.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ScrapeError;

use super::{BrowsingContext, Element, PageHandle};

/// One scripted document: a stack of stages, each mapping a selector
/// string to the elements it yields at that point in the scroll.
#[derive(Clone, Debug, Default)]
pub struct FakeDocument {
    stages: Vec<HashMap<String, Vec<Element>>>,
}

impl FakeDocument {
    pub fn new() -> Self {
        Self { stages: vec![HashMap::new()] }
    }

    /// Add elements for `selector` to the current (last) stage.
    pub fn with_elements(mut self, selector: &str, elements: Vec<Element>) -> Self {
        if let Some(stage) = self.stages.last_mut() {
            stage.entry(selector.to_string()).or_default().extend(elements);
        }
        self
    }

    /// Begin a new stage seeded with everything the previous one had,
    /// mimicking a page that grows as it lazily loads.
    pub fn then_stage(mut self) -> Self {
        let next = self.stages.last().cloned().unwrap_or_default();
        self.stages.push(next);
        self
    }

    fn at_stage(&self, stage: usize, selector: &str) -> Vec<Element> {
        let idx = stage.min(self.stages.len().saturating_sub(1));
        self.stages
            .get(idx)
            .and_then(|s| s.get(selector))
            .cloned()
            .unwrap_or_default()
    }
}

struct Shared {
    docs: HashMap<String, FakeDocument>,
    fail_navigation: Vec<String>,
    fail_new_pages: AtomicUsize,
    opened: AtomicUsize,
    closed: AtomicUsize,
}

/// Scripted browsing context for tests and offline runs.
pub struct FakeContext {
    shared: Arc<Shared>,
}

impl FakeContext {
    pub fn builder() -> FakeContextBuilder {
        FakeContextBuilder::default()
    }

    /// Pages opened so far (successful `new_page` calls).
    pub fn opened_pages(&self) -> usize {
        self.shared.opened.load(Ordering::SeqCst)
    }

    /// Pages closed so far.
    pub fn closed_pages(&self) -> usize {
        self.shared.closed.load(Ordering::SeqCst)
    }
}

#[derive(Default)]
pub struct FakeContextBuilder {
    docs: HashMap<String, FakeDocument>,
    fail_navigation: Vec<String>,
    fail_new_pages: usize,
}

impl FakeContextBuilder {
    pub fn document(mut self, url: &str, doc: FakeDocument) -> Self {
        self.docs.insert(url.to_string(), doc);
        self
    }

    /// Make the first `n` `new_page` calls fail.
    pub fn fail_new_pages(mut self, n: usize) -> Self {
        self.fail_new_pages = n;
        self
    }

    /// Make every navigation to `url` fail.
    pub fn fail_navigation(mut self, url: &str) -> Self {
        self.fail_navigation.push(url.to_string());
        self
    }

    pub fn build(self) -> FakeContext {
        FakeContext {
            shared: Arc::new(Shared {
                docs: self.docs,
                fail_navigation: self.fail_navigation,
                fail_new_pages: AtomicUsize::new(self.fail_new_pages),
                opened: AtomicUsize::new(0),
                closed: AtomicUsize::new(0),
            }),
        }
    }
}

#[async_trait]
impl BrowsingContext for FakeContext {
    async fn new_page(&self) -> Result<Box<dyn PageHandle>, ScrapeError> {
        let remaining = self.shared.fail_new_pages.load(Ordering::SeqCst);
        if remaining > 0 {
            self.shared.fail_new_pages.store(remaining - 1, Ordering::SeqCst);
            return Err(ScrapeError::PageCreate("scripted failure".to_string()));
        }
        self.shared.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(FakePage {
            shared: Arc::clone(&self.shared),
            current: None,
            stage: 0,
        }))
    }
}

pub struct FakePage {
    shared: Arc<Shared>,
    current: Option<FakeDocument>,
    stage: usize,
}

#[async_trait]
impl PageHandle for FakePage {
    async fn navigate(&mut self, url: &str) -> Result<(), ScrapeError> {
        if self.shared.fail_navigation.iter().any(|u| u == url) {
            return Err(ScrapeError::navigation(url, "scripted failure"));
        }
        let doc = self
            .shared
            .docs
            .get(url)
            .cloned()
            .ok_or_else(|| ScrapeError::navigation(url, "no scripted document"))?;
        self.current = Some(doc);
        self.stage = 0;
        Ok(())
    }

    async fn query(&self, selector: &str) -> Result<Vec<Element>, ScrapeError> {
        let doc = self
            .current
            .as_ref()
            .ok_or_else(|| ScrapeError::evaluation(selector, "no document loaded"))?;
        Ok(doc.at_stage(self.stage, selector))
    }

    async fn scroll_and_settle(&mut self) -> Result<(), ScrapeError> {
        self.stage += 1;
        Ok(())
    }

    async fn close(self: Box<Self>) -> Result<(), ScrapeError> {
        self.shared.closed.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
