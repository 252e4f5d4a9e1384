use super::offset::Offset;
use super::point::Point;
use std::ops::Range;

/// Plain-text document storage with an eager line-start index
///
/// Offsets are byte offsets into the UTF-8 text and are always kept on
/// character boundaries. Columns in a [`Point`] count characters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Buffer {
    text: String,
    /// Byte offset of the first character of every line
    line_starts: Vec<usize>,
}

impl Buffer {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            line_starts: vec![0],
        }
    }

    pub fn from_text(text: &str) -> Self {
        let mut buffer = Self {
            text: text.to_string(),
            line_starts: Vec::new(),
        };
        buffer.reindex();
        buffer
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// An empty buffer still has one (empty) line
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Replace the whole content
    pub fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.reindex();
    }

    pub fn insert(&mut self, offset: Offset, text: &str) {
        let pos = self.clamp(offset).value();
        self.text.insert_str(pos, text);
        self.reindex();
    }

    pub fn delete(&mut self, start: Offset, end: Offset) {
        let start = self.clamp(start).value();
        let end = self.clamp(end).value();
        if start < end {
            self.text.replace_range(start..end, "");
            self.reindex();
        }
    }

    /// Line content without its trailing newline
    pub fn line(&self, line_idx: usize) -> Option<String> {
        let range = self.line_byte_range(line_idx)?;
        Some(self.text[range].to_string())
    }

    pub fn lines(&self) -> Vec<String> {
        (0..self.line_count()).filter_map(|i| self.line(i)).collect()
    }

    /// Byte range of a line, excluding the newline
    pub fn line_byte_range(&self, line_idx: usize) -> Option<Range<usize>> {
        let start = *self.line_starts.get(line_idx)?;
        let end = match self.line_starts.get(line_idx + 1) {
            Some(next) => next - 1,
            None => self.text.len(),
        };
        Some(start..end)
    }

    /// Text between two offsets (clamped)
    pub fn slice(&self, range: Range<Offset>) -> &str {
        let start = self.clamp(range.start).value();
        let end = self.clamp(range.end).value();
        if start >= end {
            return "";
        }
        &self.text[start..end]
    }

    /// Point to offset conversion, clamping rows and columns into the text
    pub fn point_to_offset(&self, point: Point) -> Offset {
        let row = point.row.min(self.line_count() - 1);
        let Some(range) = self.line_byte_range(row) else {
            return Offset(self.text.len());
        };
        let line = &self.text[range.clone()];
        let column_bytes: usize = line
            .chars()
            .take(point.column)
            .map(char::len_utf8)
            .sum();
        Offset(range.start + column_bytes)
    }

    /// Offset to point conversion
    pub fn offset_to_point(&self, offset: Offset) -> Point {
        let pos = self.clamp(offset).value();
        let row = match self.line_starts.binary_search(&pos) {
            Ok(row) => row,
            Err(next) => next - 1,
        };
        let column = self.text[self.line_starts[row]..pos].chars().count();
        Point::new(row, column)
    }

    /// Snap an offset onto the text: at most `len`, on a char boundary
    pub fn clamp(&self, offset: Offset) -> Offset {
        let mut pos = offset.value().min(self.text.len());
        while !self.text.is_char_boundary(pos) {
            pos -= 1;
        }
        Offset(pos)
    }

    /// Offset of the character before `offset`, if any
    pub fn prev_char_boundary(&self, offset: Offset) -> Option<Offset> {
        let pos = self.clamp(offset).value();
        self.text[..pos]
            .chars()
            .next_back()
            .map(|c| Offset(pos - c.len_utf8()))
    }

    /// Offset just past the character at `offset`, if any
    pub fn next_char_boundary(&self, offset: Offset) -> Option<Offset> {
        let pos = self.clamp(offset).value();
        self.text[pos..]
            .chars()
            .next()
            .map(|c| Offset(pos + c.len_utf8()))
    }

    fn reindex(&mut self) {
        self.line_starts.clear();
        self.line_starts.push(0);
        self.line_starts.extend(
            self.text
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
