// src/normalize/date.rs
//
// The showlist prints dates without a year ("Friday, August 29"). We pin
// them to the current calendar year and render UTC midnight. Events listed
// near year-end for the following year come out a year early; that is a
// known accuracy limit of the source data, left as-is.

use chrono::{Datelike, NaiveDate, Utc};

/// Rendered for empty or unparseable input. Callers never get an error.
pub const INVALID_DATE: &str = "Invalid date";

// Month-name forms observed on the site. The weekday prefix is stripped
// before parsing: chrono rejects a weekday that disagrees with the date,
// while the source formatter never guarantees agreement.
const FORMATS: &[&str] = &["%B %d %Y", "%b %d %Y"];

const WEEKDAYS: [&str; 7] = [
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
];

/// Canonicalize a year-less date string to `YYYY-MM-DDT00:00:00.000+00:00`.
pub fn normalize_date(text: &str) -> String {
    normalize_in_year(text, Utc::now().year())
}

fn normalize_in_year(text: &str, year: i32) -> String {
    let cleaned = strip_weekday(text.trim()).trim_end_matches(',').trim();
    if cleaned.is_empty() {
        return INVALID_DATE.to_string();
    }
    let with_year = format!("{cleaned} {year}");
    for fmt in FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(&with_year, fmt) {
            return format!("{}T00:00:00.000+00:00", d.format("%Y-%m-%d"));
        }
    }
    INVALID_DATE.to_string()
}

/// Drop a leading "Friday," / "Fri," style prefix, full or abbreviated.
fn strip_weekday(text: &str) -> &str {
    if let Some((head, rest)) = text.split_once(',') {
        let head = head.trim().trim_end_matches('.').to_lowercase();
        if head.len() >= 3 && WEEKDAYS.iter().any(|d| d.starts_with(&head)) {
            return rest.trim();
        }
    }
    text
}
