//! Layout calculation modules
//!
//! This module handles all the geometric calculations for the photo grid:
//! - Grid layout (cell rectangles from page size, margin and gap)
//! - Content placement (manual, stretch, aspect-fit)

mod grid;
mod placement;
mod types;

pub use grid::*;
pub use placement::*;
pub use types::*;
