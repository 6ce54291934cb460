// src/main.rs
//
// Orchestrator: discover event links on the showlist, extract each event
// sequentially (deliberately no parallel visits), write events.json.
// Skipped events are logged and the run continues; if nothing was
// collected, no output file is written.

use std::path::Path;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use showlist_scrape::config::consts::{
    EVENTS_FILE, NEW_PAGE_RETRIES, RETRY_DELAY_MS, SHOWLIST_URL, VIEW_EVENT_SELECTOR,
};
use showlist_scrape::page::{BrowsingContext, SnapshotContext};
use showlist_scrape::scrape::{discover_links, extract_event, retry_with};
use showlist_scrape::store;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let ctx = SnapshotContext::new()?;
    let delay = Duration::from_millis(RETRY_DELAY_MS);

    // The listing page belongs to the orchestrator and outlives every
    // detail extraction.
    let mut listing =
        retry_with("open listing page", NEW_PAGE_RETRIES, delay, || ctx.new_page()).await?;
    listing.navigate(SHOWLIST_URL).await?;

    let links = discover_links(listing.as_mut(), VIEW_EVENT_SELECTOR).await;
    listing.close().await?;
    info!(count = links.len(), "starting detail extraction");

    let mut events = Vec::with_capacity(links.len());
    for link in &links {
        if let Some(event) = extract_event(&ctx, link).await {
            events.push(event);
        }
    }

    if events.is_empty() {
        warn!("no events collected, not writing {EVENTS_FILE}");
        return Ok(());
    }

    let path = store::write_events(Path::new(EVENTS_FILE), &events)?;
    info!(
        events = events.len(),
        skipped = links.len() - events.len(),
        path = %path.display(),
        "run complete"
    );
    Ok(())
}
