//! Layout data types
//!
//! All layout coordinates are millimeters with the origin at the top-left
//! corner of the page and y growing downward. The output engine converts
//! them to its own coordinate system.

use crate::constants::{GRID_COLUMNS, PHOTOS_PER_PAGE};

/// A rectangular area in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (top edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge y coordinate
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Center x coordinate
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Center y coordinate
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Whether `other` lies entirely inside this rectangle
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// Position within the 2x2 grid (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    /// Row index (0 = top row)
    pub row: usize,
    /// Column index (0 = left column)
    pub col: usize,
}

impl GridPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Cell of the `index`-th placed photo, counting across pages
    pub fn from_index(index: usize) -> Self {
        let position = index % PHOTOS_PER_PAGE;
        Self {
            row: position / GRID_COLUMNS,
            col: position % GRID_COLUMNS,
        }
    }

    /// Index of this cell within its page (0..4, row-major)
    pub fn slot(&self) -> usize {
        self.row * GRID_COLUMNS + self.col
    }
}

/// Page holding the `index`-th placed photo
pub fn page_index(index: usize) -> usize {
    index / PHOTOS_PER_PAGE
}

/// Number of pages needed for `count` placed photos
pub fn page_count(count: usize) -> usize {
    count.div_ceil(PHOTOS_PER_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_position_from_index() {
        assert_eq!(GridPosition::from_index(0), GridPosition::new(0, 0));
        assert_eq!(GridPosition::from_index(1), GridPosition::new(0, 1));
        assert_eq!(GridPosition::from_index(2), GridPosition::new(1, 0));
        assert_eq!(GridPosition::from_index(3), GridPosition::new(1, 1));
        // Wraps on the next page
        assert_eq!(GridPosition::from_index(4), GridPosition::new(0, 0));
        assert_eq!(GridPosition::from_index(7).slot(), 3);
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0), 0);
        assert_eq!(page_count(1), 1);
        assert_eq!(page_count(4), 1);
        assert_eq!(page_count(5), 2);
        assert_eq!(page_count(8), 2);
        assert_eq!(page_index(3), 0);
        assert_eq!(page_index(4), 1);
    }

    #[test]
    fn test_rect_contains() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(outer.contains(&Rect::new(10.0, 10.0, 50.0, 50.0)));
        assert!(!outer.contains(&Rect::new(60.0, 10.0, 50.0, 50.0)));
    }
}
