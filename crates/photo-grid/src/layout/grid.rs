//! Grid layout calculation
//!
//! This module handles the geometry of the fixed 2x2 grid on a page:
//! cell dimensions from page size, outer margin and inter-cell gap.

use crate::constants::{GRID_COLUMNS, GRID_ROWS};
use crate::options::GridOptions;

use super::{GridPosition, Rect};

// =============================================================================
// Cell Calculations
// =============================================================================

/// Calculate the bounds of the cell at column `col`, row `row`.
///
/// # Arguments
/// * `page_width` - Page width in millimeters
/// * `page_height` - Page height in millimeters
/// * `outer_margin` - Distance from each page edge to the grid
/// * `gap` - Space between neighbouring cells
/// * `col` - Column (0 or 1)
/// * `row` - Row (0 or 1)
pub fn cell_rect(
    page_width: f32,
    page_height: f32,
    outer_margin: f32,
    gap: f32,
    col: usize,
    row: usize,
) -> Rect {
    // One gap per axis
    let cell_width = (page_width - 2.0 * outer_margin - gap) / GRID_COLUMNS as f32;
    let cell_height = (page_height - 2.0 * outer_margin - gap) / GRID_ROWS as f32;

    Rect::new(
        outer_margin + col as f32 * (cell_width + gap),
        outer_margin + row as f32 * (cell_height + gap),
        cell_width,
        cell_height,
    )
}

// =============================================================================
// Grid Geometry
// =============================================================================

/// Page geometry shared by all cells of a document
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub page_width: f32,
    pub page_height: f32,
    pub outer_margin: f32,
    pub gap: f32,
}

impl GridGeometry {
    pub fn new(page_width: f32, page_height: f32, outer_margin: f32, gap: f32) -> Self {
        Self {
            page_width,
            page_height,
            outer_margin,
            gap,
        }
    }

    /// Geometry for the paper and border preset in `options`
    pub fn from_options(options: &GridOptions) -> Self {
        let (page_width, page_height) = options.paper.dimensions_mm();
        let margins = options.border.margins();
        Self::new(page_width, page_height, margins.outer_mm, margins.gap_mm)
    }

    /// Bounds of the cell at `pos`
    pub fn cell(&self, pos: GridPosition) -> Rect {
        cell_rect(
            self.page_width,
            self.page_height,
            self.outer_margin,
            self.gap,
            pos.col,
            pos.row,
        )
    }

    /// Bounds of the cell holding the `index`-th placed photo
    pub fn cell_for_index(&self, index: usize) -> Rect {
        self.cell(GridPosition::from_index(index))
    }

    /// Whether cells have a usable, positive size
    pub fn is_valid(&self) -> bool {
        let cell = self.cell(GridPosition::new(0, 0));
        self.page_width > 0.0
            && self.page_height > 0.0
            && self.outer_margin >= 0.0
            && self.gap >= 0.0
            && cell.width > 0.0
            && cell.height > 0.0
    }
}

// =============================================================================
// Tests
// =============================================================================
