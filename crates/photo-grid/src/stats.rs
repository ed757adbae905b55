use crate::constants::PHOTOS_PER_PAGE;
use crate::layout::page_count;
use crate::photo::Photo;
use crate::types::*;

/// Calculate statistics for exporting `photos`
pub fn calculate_statistics(photos: &[Photo]) -> GridStatistics {
    let filled = photos.iter().filter(|p| p.has_image()).count();
    let pages = page_count(filled);

    // A full last page holds PHOTOS_PER_PAGE, not zero
    let last_page_photos = match filled % PHOTOS_PER_PAGE {
        0 if filled > 0 => PHOTOS_PER_PAGE,
        rest => rest,
    };

    let custom_placements = photos
        .iter()
        .filter(|p| p.has_image() && p.placement.is_custom())
        .count();

    GridStatistics {
        total_slots: photos.len(),
        photos: filled,
        empty_slots: photos.len() - filled,
        pages,
        last_page_photos,
        custom_placements,
    }
}
