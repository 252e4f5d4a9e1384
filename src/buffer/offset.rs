use std::ops::Range;

/// A byte offset into the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Offset(pub usize);

impl Offset {
    pub fn new(offset: usize) -> Self {
        Self(offset)
    }

    pub fn zero() -> Self {
        Self(0)
    }

    pub fn value(&self) -> usize {
        self.0
    }

    /// Byte range spanned by two offsets
    pub fn span(range: &Range<Offset>) -> Range<usize> {
        range.start.0..range.end.0
    }
}

impl From<usize> for Offset {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl From<Offset> for usize {
    fn from(offset: Offset) -> usize {
        offset.0
    }
}

impl std::fmt::Display for Offset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
