use super::selection::Selection;
use super::text_buffer::TextBuffer;
use crate::buffer::{Buffer, Offset, Point};
use crate::search::{self, FindOptions};
use std::ops::Range;

/// Cursor movements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
    DocumentStart,
    DocumentEnd,
}

/// Editor state - buffer + cursor/selection
#[derive(Clone, Debug, Default)]
pub struct Editor {
    buffer: Buffer,
    selection: Selection,
    /// Bumped on every content change
    version: u64,
}

impl Editor {
    /// Create empty editor
    pub fn new() -> Self {
        Self::default()
    }

    /// Create editor from text
    pub fn from_text(text: &str) -> Self {
        Self {
            buffer: Buffer::from_text(text),
            ..Self::default()
        }
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Get cursor position
    pub fn cursor(&self) -> Point {
        self.selection.end
    }

    /// Set cursor position, dropping any selection
    pub fn set_cursor(&mut self, point: Point) {
        self.selection = Selection::cursor(self.clamp_point(point));
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn cursor_offset(&self) -> Offset {
        self.buffer.point_to_offset(self.cursor())
    }

    /// Insert text at the cursor, replacing the selection if there is one
    pub fn insert(&mut self, text: &str) {
        self.delete_selection();
        let offset = self.cursor_offset();
        self.buffer.insert(offset, text);
        self.touch();
        let after = self.buffer.offset_to_point(Offset(offset.value() + text.len()));
        self.set_cursor(after);
    }

    /// Delete the selection or the character before the cursor
    pub fn backspace(&mut self) {
        if self.delete_selection() {
            return;
        }
        let cursor = self.cursor_offset();
        if let Some(start) = self.buffer.prev_char_boundary(cursor) {
            self.buffer.delete(start, cursor);
            self.touch();
            let point = self.buffer.offset_to_point(start);
            self.set_cursor(point);
        }
    }

    /// Delete the selection or the character at the cursor
    pub fn delete(&mut self) {
        if self.delete_selection() {
            return;
        }
        let cursor = self.cursor_offset();
        if let Some(end) = self.buffer.next_char_boundary(cursor) {
            self.buffer.delete(cursor, end);
            self.touch();
        }
    }

    /// Remove the selected text. Returns false when nothing was selected.
    pub fn delete_selection(&mut self) -> bool {
        let Some(range) = self.selection_range() else {
            return false;
        };
        self.buffer.delete(range.start, range.end);
        self.touch();
        let point = self.buffer.offset_to_point(range.start);
        self.set_cursor(point);
        true
    }

    pub fn select_all(&mut self) {
        let end = Offset(self.buffer.len());
        self.select_range(Offset::zero()..end);
    }

    /// Move the cursor. With `extend` the anchor stays put and the
    /// selection grows or shrinks; without it the selection is dropped.
    pub fn move_cursor(&mut self, motion: Motion, extend: bool) {
        let target = self.motion_target(motion);
        if extend {
            self.selection.extend_to(target);
        } else {
            self.selection = Selection::cursor(target);
        }
    }

    pub fn move_left(&mut self) {
        self.move_cursor(Motion::Left, false);
    }

    pub fn move_right(&mut self) {
        self.move_cursor(Motion::Right, false);
    }

    pub fn move_up(&mut self) {
        self.move_cursor(Motion::Up, false);
    }

    pub fn move_down(&mut self) {
        self.move_cursor(Motion::Down, false);
    }

    pub fn move_to_line_start(&mut self) {
        self.move_cursor(Motion::LineStart, false);
    }

    pub fn move_to_line_end(&mut self) {
        self.move_cursor(Motion::LineEnd, false);
    }

    /// Get text content
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    pub fn line_count(&self) -> usize {
        self.buffer.line_count()
    }

    fn motion_target(&self, motion: Motion) -> Point {
        let cursor = self.cursor();
        match motion {
            Motion::Left => {
                if cursor.column > 0 {
                    Point::new(cursor.row, cursor.column - 1)
                } else if cursor.row > 0 {
                    Point::new(cursor.row - 1, self.line_len(cursor.row - 1))
                } else {
                    cursor
                }
            }
            Motion::Right => {
                if cursor.column < self.line_len(cursor.row) {
                    Point::new(cursor.row, cursor.column + 1)
                } else if cursor.row + 1 < self.line_count() {
                    Point::new(cursor.row + 1, 0)
                } else {
                    cursor
                }
            }
            Motion::Up if cursor.row > 0 => {
                let row = cursor.row - 1;
                Point::new(row, cursor.column.min(self.line_len(row)))
            }
            Motion::Down if cursor.row + 1 < self.line_count() => {
                let row = cursor.row + 1;
                Point::new(row, cursor.column.min(self.line_len(row)))
            }
            Motion::Up | Motion::Down => cursor,
            Motion::LineStart => Point::new(cursor.row, 0),
            Motion::LineEnd => Point::new(cursor.row, self.line_len(cursor.row)),
            Motion::DocumentStart => Point::zero(),
            Motion::DocumentEnd => self.buffer.offset_to_point(Offset(self.buffer.len())),
        }
    }

    /// Line length in characters
    fn line_len(&self, row: usize) -> usize {
        self.buffer
            .line(row)
            .map(|line| line.chars().count())
            .unwrap_or(0)
    }

    fn clamp_point(&self, point: Point) -> Point {
        self.buffer
            .offset_to_point(self.buffer.point_to_offset(point))
    }

    fn touch(&mut self) {
        self.version += 1;
    }
}

impl TextBuffer for Editor {
    fn text(&self) -> String {
        Editor::text(self)
    }

    fn set_text(&mut self, text: &str) {
        self.buffer.set_text(text);
        self.touch();
        self.selection = Selection::default();
    }

    fn move_to_start(&mut self) {
        self.selection = Selection::default();
    }

    fn select_range(&mut self, range: Range<Offset>) {
        let start = self.buffer.offset_to_point(range.start);
        let end = self.buffer.offset_to_point(range.end);
        self.selection = Selection::new(start, end);
    }

    fn selection_range(&self) -> Option<Range<Offset>> {
        if self.selection.is_empty() {
            return None;
        }
        let (first, last) = self.selection.range();
        Some(self.buffer.point_to_offset(first)..self.buffer.point_to_offset(last))
    }

    fn selected_text(&self) -> String {
        self.selection_range()
            .map(|range| self.buffer.slice(range).to_string())
            .unwrap_or_default()
    }

    fn clear_selection(&mut self) {
        self.selection.collapse();
    }

    fn find(&mut self, query: &str, options: FindOptions) -> bool {
        let from = match self.selection_range() {
            Some(range) => range.end,
            None => self.cursor_offset(),
        };
        match search::find_forward(self.buffer.as_str(), query, from, options) {
            Some(found) => {
                self.select_range(found);
                true
            }
            None => {
                self.clear_selection();
                false
            }
        }
    }
}
