// src/scrape/discover.rs

use indexmap::IndexMap;
use tracing::{debug, error, info};

use crate::error::ScrapeError;
use crate::page::PageHandle;
use crate::records::LinkRecord;

/// Accumulate deduplicated (link, imageUrl) pairs from the listing page
/// until a scroll yields nothing new.
///
/// Fixed-point loop: each pass queries `selector`, inserts serialized
/// pairs into an insertion-ordered set, and scrolls only while the set
/// keeps growing. A quiet pass terminates the loop; the settle delay
/// inside `scroll_and_settle` bounds (but cannot eliminate) the risk of
/// quitting while content is still loading.
///
/// Any failure mid-loop is logged and the pairs gathered so far are
/// returned; the caller never sees the error.
pub async fn discover_links(page: &mut dyn PageHandle, selector: &str) -> Vec<LinkRecord> {
    let mut found: IndexMap<String, LinkRecord> = IndexMap::new();

    loop {
        let before = found.len();
        if let Err(e) = collect_pass(page, selector, &mut found).await {
            error!(error = %e, "link discovery failed, keeping partial set");
            break;
        }
        if found.len() == before {
            break;
        }
        debug!(total = found.len(), "listing grew, scrolling for more");
        if let Err(e) = page.scroll_and_settle().await {
            error!(error = %e, "scroll failed, keeping partial set");
            break;
        }
    }

    info!(count = found.len(), "link discovery converged");
    found.into_values().collect()
}

async fn collect_pass(
    page: &dyn PageHandle,
    selector: &str,
    found: &mut IndexMap<String, LinkRecord>,
) -> Result<(), ScrapeError> {
    for el in page.query(selector).await? {
        // Anchors without an href identify nothing; skip them.
        let Some(href) = el.href() else { continue };
        let record = LinkRecord {
            link: href.to_string(),
            image_url: el.article_image().unwrap_or_default().to_string(),
        };
        found.entry(record.key()).or_insert(record);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{BrowsingContext, Element, FakeContext, FakeDocument};

    const LISTING: &str = "https://venue.example/shows";
    const SEL: &str = "a.view-event";

    fn anchor(href: &str, img: &str) -> Element {
        Element::new("View Event")
            .with_attr("href", href)
            .with_article_image(img)
    }

    async fn listing_page(ctx: &FakeContext) -> Box<dyn PageHandle> {
        let mut page = ctx.new_page().await.unwrap();
        page.navigate(LISTING).await.unwrap();
        page
    }

    #[tokio::test]
    async fn discovers_all_pairs_in_encounter_order() {
        let doc = FakeDocument::new().with_elements(
            SEL,
            vec![
                anchor("https://venue.example/event/a", "/img/a.jpg"),
                anchor("https://venue.example/event/b", "/img/b.jpg"),
            ],
        );
        let ctx = FakeContext::builder().document(LISTING, doc).build();
        let mut page = listing_page(&ctx).await;

        let links = discover_links(page.as_mut(), SEL).await;
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].link, "https://venue.example/event/a");
        assert_eq!(links[0].image_url, "/img/a.jpg");
        assert_eq!(links[1].link, "https://venue.example/event/b");
        assert_eq!(links[1].image_url, "/img/b.jpg");
    }

    #[tokio::test]
    async fn never_returns_duplicates() {
        let doc = FakeDocument::new()
            .with_elements(
                SEL,
                vec![
                    anchor("https://x/event/a", "/img/a.jpg"),
                    anchor("https://x/event/a", "/img/a.jpg"),
                ],
            )
            .then_stage()
            .with_elements(SEL, vec![anchor("https://x/event/a", "/img/a.jpg")]);
        let ctx = FakeContext::builder().document(LISTING, doc).build();
        let mut page = listing_page(&ctx).await;

        let links = discover_links(page.as_mut(), SEL).await;
        assert_eq!(links.len(), 1);
    }

    #[tokio::test]
    async fn keeps_scrolling_while_the_set_grows() {
        let doc = FakeDocument::new()
            .with_elements(SEL, vec![anchor("https://x/event/a", "/img/a.jpg")])
            .then_stage()
            .with_elements(SEL, vec![anchor("https://x/event/b", "/img/b.jpg")])
            .then_stage()
            .with_elements(SEL, vec![anchor("https://x/event/c", "/img/c.jpg")]);
        let ctx = FakeContext::builder().document(LISTING, doc).build();
        let mut page = listing_page(&ctx).await;

        let links = discover_links(page.as_mut(), SEL).await;
        assert_eq!(links.len(), 3);
        assert_eq!(links[2].link, "https://x/event/c");
    }

    #[tokio::test]
    async fn same_link_with_different_image_is_a_distinct_pair() {
        let doc = FakeDocument::new().with_elements(
            SEL,
            vec![
                anchor("https://x/event/a", "/img/a.jpg"),
                anchor("https://x/event/a", "/img/b.jpg"),
            ],
        );
        let ctx = FakeContext::builder().document(LISTING, doc).build();
        let mut page = listing_page(&ctx).await;

        let links = discover_links(page.as_mut(), SEL).await;
        assert_eq!(links.len(), 2);
    }

    #[tokio::test]
    async fn missing_article_image_becomes_empty_string() {
        let doc = FakeDocument::new().with_elements(
            SEL,
            vec![Element::new("View Event").with_attr("href", "https://x/event/a")],
        );
        let ctx = FakeContext::builder().document(LISTING, doc).build();
        let mut page = listing_page(&ctx).await;

        let links = discover_links(page.as_mut(), SEL).await;
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].image_url, "");
    }

    #[tokio::test]
    async fn query_failure_returns_partial_set() {
        // Page never navigated: the first query errors immediately and
        // discovery hands back the (empty) accumulated set.
        let ctx = FakeContext::builder().build();
        let mut page = ctx.new_page().await.unwrap();
        let links = discover_links(page.as_mut(), SEL).await;
        assert!(links.is_empty());
    }
}
