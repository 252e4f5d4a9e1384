//! Document statistics and date insertion

use chrono::format::{Item, StrftimeItems};
use chrono::Local;
use std::fmt::Write;

/// Format used by "Insert date/time", e.g. `2016-07-14 15:39:01`
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Number of characters in the document
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Number of whitespace-separated words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Whether `format` is strftime syntax chrono understands
pub fn is_valid_date_format(format: &str) -> bool {
    StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}

/// Current local time in `format` (chrono strftime syntax). An unusable
/// format falls back to [`DEFAULT_DATE_FORMAT`].
pub fn timestamp(format: &str) -> String {
    let now = Local::now();
    let mut stamp = String::new();
    if write!(stamp, "{}", now.format(format)).is_err() {
        tracing::warn!(format, "invalid date format, using the default");
        stamp = now.format(DEFAULT_DATE_FORMAT).to_string();
    }
    stamp
}
