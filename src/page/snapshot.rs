// src/page/snapshot.rs
//
// HTTP snapshot implementation of the page surface: reqwest fetch plus
// scraper selector evaluation. A snapshot runs no scripts, so
// scroll_and_settle only waits out the settle delay and the document
// never grows; the discovery loop then converges after one quiet pass.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::debug;
use url::Url;

use crate::config::consts::SETTLE_MS;
use crate::error::ScrapeError;

use super::{BrowsingContext, Element, PageHandle};

const USER_AGENT: &str = concat!("showlist_scrape/", env!("CARGO_PKG_VERSION"));

/// Shared session; hands out transient [`SnapshotPage`]s over one client.
pub struct SnapshotContext {
    client: Client,
}

impl SnapshotContext {
    pub fn new() -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl BrowsingContext for SnapshotContext {
    async fn new_page(&self) -> Result<Box<dyn PageHandle>, ScrapeError> {
        Ok(Box::new(SnapshotPage {
            client: self.client.clone(),
            url: None,
            html: None,
        }))
    }
}

pub struct SnapshotPage {
    client: Client,
    url: Option<Url>,
    html: Option<String>,
}

#[async_trait]
impl PageHandle for SnapshotPage {
    async fn navigate(&mut self, url: &str) -> Result<(), ScrapeError> {
        let parsed = Url::parse(url).map_err(|e| ScrapeError::navigation(url, e))?;
        let resp = self
            .client
            .get(parsed.clone())
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| ScrapeError::navigation(url, e))?;
        let body = resp.text().await.map_err(|e| ScrapeError::navigation(url, e))?;
        debug!(url, bytes = body.len(), "fetched page snapshot");
        self.url = Some(parsed);
        self.html = Some(body);
        Ok(())
    }

    async fn query(&self, selector: &str) -> Result<Vec<Element>, ScrapeError> {
        let html = self
            .html
            .as_deref()
            .ok_or_else(|| ScrapeError::evaluation(selector, "no document loaded"))?;
        let sel = Selector::parse(selector)
            .map_err(|e| ScrapeError::evaluation(selector, format!("{e:?}")))?;
        let img_sel = Selector::parse("img")
            .map_err(|e| ScrapeError::evaluation("img", format!("{e:?}")))?;

        let doc = Html::parse_document(html);
        let mut out = Vec::new();
        for el in doc.select(&sel) {
            let mut snap = Element::new(normalize_ws(&el.text().collect::<String>()));
            for (name, value) in el.value().attrs() {
                let value = if name == "href" {
                    self.absolutize(value)
                } else {
                    value.to_string()
                };
                snap = snap.with_attr(name, value);
            }
            if let Some(src) = enclosing_article_image(&el, &img_sel) {
                snap = snap.with_article_image(src);
            }
            out.push(snap);
        }
        Ok(out)
    }

    async fn scroll_and_settle(&mut self) -> Result<(), ScrapeError> {
        // Nothing to scroll in a static snapshot; only the settle delay
        // applies.
        tokio::time::sleep(Duration::from_millis(SETTLE_MS)).await;
        Ok(())
    }

    async fn close(self: Box<Self>) -> Result<(), ScrapeError> {
        Ok(())
    }
}

impl SnapshotPage {
    fn absolutize(&self, href: &str) -> String {
        match &self.url {
            Some(base) => base
                .join(href)
                .map(|u| u.to_string())
                .unwrap_or_else(|_| href.to_string()),
            None => href.to_string(),
        }
    }
}

/// `data-src` of the first image inside the nearest enclosing `<article>`.
fn enclosing_article_image(
    el: &scraper::ElementRef<'_>,
    img_sel: &Selector,
) -> Option<String> {
    for ancestor in el.ancestors() {
        if let Some(a) = scraper::ElementRef::wrap(ancestor) {
            if a.value().name() == "article" {
                return a
                    .select(img_sel)
                    .next()
                    .and_then(|img| img.value().attr("data-src"))
                    .map(str::to_string);
            }
        }
    }
    None
}

/// Collapse whitespace runs into single spaces and trim.
fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
