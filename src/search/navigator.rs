use super::matcher::FindOptions;
use crate::buffer::Offset;
use crate::editor::TextBuffer;
use std::ops::Range;

/// Outcome of one search step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindResult {
    /// The match is now the buffer's selection
    Match(Range<Offset>),
    /// Nothing found; the buffer has no selection
    NoMatch,
}

impl FindResult {
    pub fn is_match(&self) -> bool {
        matches!(self, FindResult::Match(_))
    }
}

/// Find / find-next state for one window
///
/// The navigator borrows the buffer for each step and remembers only the
/// last query, so "find again" works without retyping it.
#[derive(Debug, Clone, Default)]
pub struct FindNavigator {
    last_query: Option<String>,
    options: FindOptions,
}

impl FindNavigator {
    pub fn new(options: FindOptions) -> Self {
        Self {
            last_query: None,
            options,
        }
    }

    pub fn last_query(&self) -> Option<&str> {
        self.last_query.as_deref()
    }

    pub fn options(&self) -> FindOptions {
        self.options
    }

    pub fn set_options(&mut self, options: FindOptions) {
        self.options = options;
    }

    /// Find the next occurrence of `query`.
    ///
    /// Without a selection the search restarts at the top of the document;
    /// with one it continues after the selection, so repeated calls walk
    /// through every occurrence.
    pub fn find_next<B: TextBuffer + ?Sized>(
        &mut self,
        query: &str,
        buffer: &mut B,
    ) -> FindResult {
        if !query.is_empty() {
            self.last_query = Some(query.to_string());
        }
        self.step(query, buffer)
    }

    /// Use the selected text as the query. No-op without a selection.
    pub fn find_next_occurrence_of_selection<B: TextBuffer + ?Sized>(
        &mut self,
        buffer: &mut B,
    ) -> FindResult {
        if !buffer.has_selection() {
            return FindResult::NoMatch;
        }
        let query = buffer.selected_text();
        self.find_next(&query, buffer)
    }

    /// Repeat the last query. No-op if nothing was searched yet.
    pub fn find_again<B: TextBuffer + ?Sized>(&mut self, buffer: &mut B) -> FindResult {
        match self.last_query.clone() {
            Some(query) => self.step(&query, buffer),
            None => FindResult::NoMatch,
        }
    }

    fn step<B: TextBuffer + ?Sized>(&self, query: &str, buffer: &mut B) -> FindResult {
        if !buffer.has_selection() {
            buffer.move_to_start();
        }

        if !query.is_empty() && buffer.find(query, self.options) {
            if let Some(range) = buffer.selection_range() {
                tracing::trace!(query, start = range.start.value(), "match");
                return FindResult::Match(range);
            }
        }

        buffer.clear_selection();
        tracing::trace!(query, "no match");
        FindResult::NoMatch
    }
}
