// src/normalize/excerpt.rs
//
// Composes the excerpt HTML fragment shown to the consumer. The literal
// 'null' href when the ticket link is missing reproduces the upstream
// output byte-for-byte; see DESIGN.md before changing it.

/// Compose the excerpt fragment from optional description text and an
/// optional ticket link.
pub fn format_excerpt(excerpt: Option<&str>, ticket: Option<&str>) -> String {
    match (excerpt, ticket) {
        (Some(text), Some(link)) => format!(
            "<p>{text}</p><br><br><ul><li><a href='{link}'>BUY TICKETS</a></li></ul>"
        ),
        (Some(text), None) => format!(
            "<p>{text}</p><br><br><ul><li><a href='null'>BUY TICKETS</a></li></ul>"
        ),
        (None, Some(link)) => {
            format!("<br><br><ul><li><a href='{link}'>BUY TICKETS</a></li></ul>")
        }
        (None, None) => String::new(),
    }
}
