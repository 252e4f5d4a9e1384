use crate::buffer::Offset;
use regex::RegexBuilder;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Search flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FindOptions {
    pub case_sensitive: bool,
}

impl Default for FindOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
        }
    }
}

/// First occurrence of `query` in `haystack` at or after `from`.
///
/// An empty query never matches.
pub fn find_forward(
    haystack: &str,
    query: &str,
    from: Offset,
    options: FindOptions,
) -> Option<Range<Offset>> {
    if query.is_empty() {
        return None;
    }
    let from = from.value().min(haystack.len());
    // `from` comes from a buffer offset, so it sits on a char boundary
    let tail = haystack.get(from..)?;

    if options.case_sensitive {
        let start = from + tail.find(query)?;
        return Some(Offset(start)..Offset(start + query.len()));
    }

    let pattern = match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => pattern,
        Err(err) => {
            tracing::warn!(%err, "could not build case-insensitive matcher");
            return None;
        }
    };
    pattern
        .find_at(haystack, from)
        .map(|m| Offset(m.start())..Offset(m.end()))
}
