use crate::buffer::Point;

/// Text selection between an anchor and the cursor (head)
///
/// `start` is where the selection was anchored, `end` is where the cursor
/// sits. `start` may come after `end` when selecting backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub start: Point,
    pub end: Point,
}

impl Selection {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Empty selection at a single point (plain cursor)
    pub fn cursor(point: Point) -> Self {
        Self {
            start: point,
            end: point,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Ordered (first, last) pair
    pub fn range(&self) -> (Point, Point) {
        if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        }
    }

    /// Move the head, keeping the anchor
    pub fn extend_to(&mut self, point: Point) {
        self.end = point;
    }

    /// Drop the anchor, leaving the cursor where the head was
    pub fn collapse(&mut self) {
        self.start = self.end;
    }
}
