// src/config/consts.rs

// Venue
pub const VENUE_LOCATION: &str = "Substation";
pub const SHOWLIST_URL: &str = "https://www.substationseattle.com/shows";

// Discovery
pub const VIEW_EVENT_SELECTOR: &str = "article.eventlist-event a.eventlist-button";
pub const SETTLE_MS: u64 = 1500; // lazy content needs a beat after each scroll

// Detail page selectors
pub const TITLE_SELECTOR: &str = "h1.eventitem-title";
pub const DATE_SELECTOR: &str = "time.event-date";
pub const TIME_SELECTOR: &str = "time.event-time-localized-start";
// Positional fallback; the primary misses on some layout variants.
pub const TIME_BACKUP_SELECTOR: &str = "ul.eventitem-meta li:nth-child(2) time";
pub const PRICE_SELECTOR: &str = ".eventitem-column-content .event-price";
pub const EXCERPT_SELECTOR: &str = ".eventitem-column-content .sqs-block-html p";
pub const TICKET_SELECTOR: &str = "a.sqs-block-button-element";

// Retry
pub const NEW_PAGE_RETRIES: usize = 3;
pub const RETRY_DELAY_MS: u64 = 250;

// Output
pub const EVENTS_FILE: &str = "events.json";
