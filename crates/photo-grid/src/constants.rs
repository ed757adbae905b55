//! Shared constants for grid layout and editing
//!
//! This module centralizes magic numbers and constants used throughout
//! layout, editing and export.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

// =============================================================================
// Grid
// =============================================================================

/// Columns in the page grid
pub const GRID_COLUMNS: usize = 2;

/// Rows in the page grid
pub const GRID_ROWS: usize = 2;

/// Photos placed on one page
pub const PHOTOS_PER_PAGE: usize = GRID_COLUMNS * GRID_ROWS;

// =============================================================================
// Editing
// =============================================================================

/// Smallest width or height a resize may produce, in percent of the cell
pub const MIN_SIZE_PCT: f32 = 5.0;

/// Width:height ratio of a reference cell, an A4 quadrant (≈ 1/√2).
/// Used to seed the manual size of a photo entering edit mode.
pub const REFERENCE_CELL_RATIO: f32 = 0.707;

// =============================================================================
// Acquisition
// =============================================================================

/// Longest edge of an acquired image after downscaling, in pixels
pub const MAX_IMAGE_DIMENSION: u32 = 1500;

/// JPEG quality used when re-encoding acquired images
pub const JPEG_QUALITY: u8 = 80;

/// Length of generated photo ids
pub const PHOTO_ID_LEN: usize = 7;
