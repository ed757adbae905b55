//! Photo placement within cells
//!
//! This module resolves the final rectangle of a photo inside its cell,
//! choosing between four modes (first match wins):
//! 1. Manual size and position (percentages of the cell)
//! 2. Manual size, centered
//! 3. Stretch to the cell
//! 4. Aspect-fit (contain), centered

use crate::options::GridOptions;
use crate::photo::{Photo, PixelSize, Placement, Position, Sizing};
use crate::types::{GridError, Result};

use super::Rect;

/// Resolve the rectangle of `photo` inside `cell`.
///
/// Uses the photo's recorded natural size for aspect-fit.
pub fn resolve(photo: &Photo, cell: &Rect, options: &GridOptions) -> Result<Rect> {
    resolve_placement(&photo.placement, photo.natural, cell, options.stretch)
}

/// Resolve a placement for an image of `natural` pixel size.
///
/// Percentages are not clamped: values outside 0..100 overflow the cell.
pub fn resolve_placement(
    placement: &Placement,
    natural: PixelSize,
    cell: &Rect,
    stretch: bool,
) -> Result<Rect> {
    match (placement.sizing, placement.position) {
        (Sizing::Manual { width, height }, Position::Positioned { x, y }) => Ok(Rect::new(
            cell.x + cell.width * x / 100.0,
            cell.y + cell.height * y / 100.0,
            cell.width * width / 100.0,
            cell.height * height / 100.0,
        )),
        (Sizing::Manual { width, height }, Position::Centered) => Ok(center_in(
            cell,
            cell.width * width / 100.0,
            cell.height * height / 100.0,
        )),
        (Sizing::Auto, _) if stretch => Ok(*cell),
        (Sizing::Auto, _) => {
            let scale = fit_scale(natural, cell)?;
            Ok(center_in(
                cell,
                natural.width as f32 * scale,
                natural.height as f32 * scale,
            ))
        }
    }
}

/// Scale factor that fits `natural` inside `cell`, preserving aspect ratio.
fn fit_scale(natural: PixelSize, cell: &Rect) -> Result<f32> {
    if natural.is_empty() {
        return Err(GridError::InvalidPhotoDimensions {
            width: natural.width,
            height: natural.height,
        });
    }

    let scale_w = cell.width / natural.width as f32;
    let scale_h = cell.height / natural.height as f32;
    Ok(scale_w.min(scale_h))
}

fn center_in(cell: &Rect, width: f32, height: f32) -> Rect {
    Rect::new(
        cell.x + (cell.width - width) / 2.0,
        cell.y + (cell.height - height) / 2.0,
        width,
        height,
    )
}
