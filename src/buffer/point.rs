/// A position in the buffer as (row, column)
///
/// Both are 0-indexed; the column counts characters, not bytes.
/// Ordering is row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Point {
    pub row: usize,
    pub column: usize,
}

impl Point {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    pub fn zero() -> Self {
        Self::default()
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // 1-indexed, as shown in the status bar
        write!(f, "{}:{}", self.row + 1, self.column + 1)
    }
}
