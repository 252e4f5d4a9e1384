use crate::buffer::Offset;
use crate::search::FindOptions;
use std::ops::Range;

/// Content and cursor/selection capability of a text-editing widget
///
/// The document session and the find navigator only ever talk to the
/// buffer through this trait, so any widget that can provide whole-text
/// access, a selection and a forward search can host them.
pub trait TextBuffer {
    /// Whole current content
    fn text(&self) -> String;

    /// Replace the whole content; the cursor returns to the start
    fn set_text(&mut self, text: &str);

    /// Collapse the selection and put the cursor at the document start
    fn move_to_start(&mut self);

    /// Select `range`, leaving the cursor at `range.end`
    fn select_range(&mut self, range: Range<Offset>);

    /// Ordered selected range, `None` when nothing is selected
    fn selection_range(&self) -> Option<Range<Offset>>;

    fn selected_text(&self) -> String;

    fn has_selection(&self) -> bool {
        self.selection_range().is_some()
    }

    /// Collapse the selection, keeping the cursor where it is
    fn clear_selection(&mut self);

    /// Search forward from the end of the selection (or the cursor).
    ///
    /// On a match the selection becomes the matched range and `true` is
    /// returned. Otherwise the selection is collapsed and `false` returned.
    fn find(&mut self, query: &str, options: FindOptions) -> bool;
}
