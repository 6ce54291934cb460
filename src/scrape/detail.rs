// src/scrape/detail.rs

use std::time::Duration;

use tracing::{debug, error, warn};

use crate::config::consts::{
    DATE_SELECTOR, EXCERPT_SELECTOR, NEW_PAGE_RETRIES, PRICE_SELECTOR, RETRY_DELAY_MS,
    TICKET_SELECTOR, TIME_BACKUP_SELECTOR, TIME_SELECTOR, TITLE_SELECTOR, VENUE_LOCATION,
};
use crate::normalize::{classify, format_excerpt, normalize_date};
use crate::page::{BrowsingContext, PageHandle};
use crate::records::{EventRecord, LinkRecord};
use crate::scrape::retry_with;

/// Visit one event page and assemble its normalized record.
///
/// Returns `None` when the event has to be skipped (page creation failed
/// after retries, or navigation failed); the run continues with the next
/// link. Individual field failures never abort the record: each field is
/// extracted independently and collapses to its absent value.
///
/// The transient page is closed before returning on every path.
pub async fn extract_event(
    ctx: &dyn BrowsingContext,
    found: &LinkRecord,
) -> Option<EventRecord> {
    let delay = Duration::from_millis(RETRY_DELAY_MS);
    let mut page = match retry_with("new page", NEW_PAGE_RETRIES, delay, || ctx.new_page()).await
    {
        Ok(p) => p,
        Err(e) => {
            error!(link = %found.link, error = %e, "could not open page, skipping event");
            return None;
        }
    };

    if let Err(e) = page.navigate(&found.link).await {
        error!(link = %found.link, error = %e, "navigation failed, skipping event");
        close_quietly(page).await;
        return None;
    }

    let record = assemble(page.as_ref(), found).await;
    close_quietly(page).await;
    Some(record)
}

/// Field extraction plus post-processing. Runs against an already
/// navigated page and cannot fail as a whole.
async fn assemble(page: &dyn PageHandle, found: &LinkRecord) -> EventRecord {
    let title = field_text(page, TITLE_SELECTOR, "title").await;
    let date_text = field_text(page, DATE_SELECTOR, "date").await;

    // Primary first, then the positional backup the primary is known to
    // miss on some layout variants.
    let time = match field_text(page, TIME_SELECTOR, "time").await {
        Some(t) => Some(t),
        None => field_text(page, TIME_BACKUP_SELECTOR, "time backup").await,
    };

    let price = field_text(page, PRICE_SELECTOR, "price").await;
    let excerpt_text = field_text(page, EXCERPT_SELECTOR, "excerpt").await;
    let ticket = field_attr(page, TICKET_SELECTOR, "href", "ticket link").await;

    let genre = classify(excerpt_text.as_deref().unwrap_or(""));
    let date = normalize_date(date_text.as_deref().unwrap_or(""));
    let excerpt = format_excerpt(excerpt_text.as_deref(), ticket.as_deref());

    EventRecord {
        title,
        date,
        genre: genre.to_string(),
        time,
        location: VENUE_LOCATION.to_string(),
        price,
        image: found.image_url.clone(),
        excerpt,
        is_featured: false,
    }
}

/// Text of the first match, or `None` when the selector misses or its
/// evaluation fails. Failures are logged and isolated to this field.
async fn field_text(page: &dyn PageHandle, selector: &str, field: &str) -> Option<String> {
    match page.query(selector).await {
        Ok(els) => match els.into_iter().next() {
            Some(el) => Some(el.text().to_string()),
            None => {
                debug!(field, selector, "no match");
                None
            }
        },
        Err(e) => {
            warn!(field, error = %e, "field extraction failed");
            None
        }
    }
}

/// Like [`field_text`] but reads an attribute of the first match.
async fn field_attr(
    page: &dyn PageHandle,
    selector: &str,
    attr: &str,
    field: &str,
) -> Option<String> {
    match page.query(selector).await {
        Ok(els) => match els.into_iter().next().and_then(|el| el.attr(attr).map(String::from)) {
            Some(v) => Some(v),
            None => {
                debug!(field, selector, "no match");
                None
            }
        },
        Err(e) => {
            warn!(field, error = %e, "field extraction failed");
            None
        }
    }
}

async fn close_quietly(page: Box<dyn PageHandle>) {
    if let Err(e) = page.close().await {
        warn!(error = %e, "failed to close transient page");
    }
}
