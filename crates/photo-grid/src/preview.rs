//! Page layout preview
//!
//! Plans where every photo lands without decoding any image, using the
//! natural sizes recorded when the photos were acquired.

use crate::constants::PHOTOS_PER_PAGE;
use crate::layout::{GridPosition, Rect, page_index, resolve};
use crate::options::GridOptions;
use crate::photo::{Photo, PhotoId};
use crate::types::*;

/// A photo's final spot on its page
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedPhoto {
    pub photo_id: PhotoId,
    pub position: GridPosition,
    /// Bounds of the cell, in millimeters from the top-left page corner
    pub cell: Rect,
    /// Where the image is painted
    pub rect: Rect,
}

/// One output page and the photos painted on it
#[derive(Debug, Clone, PartialEq)]
pub struct PagePlan {
    pub index: usize,
    pub placements: Vec<PlannedPhoto>,
}

/// Plan every page of the exported document
pub fn plan_document(photos: &[Photo], options: &GridOptions) -> Result<Vec<PagePlan>> {
    let geometry = options.geometry();
    if !geometry.is_valid() {
        return Err(GridError::EngineUnavailable(
            "Page geometry leaves no room for photos".to_string(),
        ));
    }

    let mut pages: Vec<PagePlan> = Vec::new();
    for (placed, photo) in photos.iter().filter(|p| p.has_image()).enumerate() {
        let position = GridPosition::from_index(placed);
        let cell = geometry.cell(position);
        let rect = match resolve(photo, &cell, options) {
            Ok(rect) => rect,
            Err(GridError::InvalidPhotoDimensions { .. }) => cell,
            Err(e) => return Err(e),
        };

        if placed % PHOTOS_PER_PAGE == 0 {
            pages.push(PagePlan {
                index: page_index(placed),
                placements: Vec::with_capacity(PHOTOS_PER_PAGE),
            });
        }
        if let Some(page) = pages.last_mut() {
            page.placements.push(PlannedPhoto {
                photo_id: photo.id.clone(),
                position,
                cell,
                rect,
            });
        }
    }

    Ok(pages)
}

/// Plan a single page, or `None` past the last page
pub fn plan_page(photos: &[Photo], options: &GridOptions, page: usize) -> Result<Option<PagePlan>> {
    Ok(plan_document(photos, options)?.into_iter().nth(page))
}
