//! Presentation rules shared by the update view-models.

use chrono::{DateTime, Duration, Utc};

/// Updates published within this window are flagged as new.
pub const NEW_WINDOW_DAYS: i64 = 7;

pub const EXCERPT_CHARS: usize = 100;
pub const EXCERPT_PLACEHOLDER: &str = "Click to read more.";

const WORDS_PER_MINUTE: usize = 200;

/// `Nov 05`, or `Nov 05, 2024` with the year. Always English, always UTC.
pub fn display_date(at: DateTime<Utc>, with_year: bool) -> String {
    if with_year {
        at.format("%b %d, %Y").to_string()
    } else {
        at.format("%b %d").to_string()
    }
}

/// Strictly inside the trailing window: an item exactly seven days old is
/// no longer new.
pub fn is_new(published_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    published_at > now - Duration::days(NEW_WINDOW_DAYS)
}

pub fn excerpt(body: Option<&str>) -> String {
    let Some(body) = body.filter(|b| !b.trim().is_empty()) else {
        return EXCERPT_PLACEHOLDER.to_string();
    };
    match body.char_indices().nth(EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

/// Estimated reading time, never below one minute.
pub fn read_time(body: Option<&str>) -> String {
    let words = body.map(|b| b.split_whitespace().count()).unwrap_or(0);
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{minutes} min read")
}
