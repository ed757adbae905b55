use crate::photo::{PhotoId, Placement};
use crate::store::PhotoCollection;
use crate::types::{GridError, Result};

use super::initial_fit;

/// Placement of the photo under edit before editing began
#[derive(Debug, Clone, PartialEq)]
struct EditSnapshot {
    photo_id: PhotoId,
    placement: Placement,
}

/// Edit mode for one photo at a time, with cancel and commit.
///
/// Entering edit mode seeds a manual placement so the photo looks the same
/// as before, then resizes write over it. Cancel puts back the exact
/// pre-edit placement, including automatic placement.
#[derive(Debug, Default)]
pub struct PhotoEditor {
    snapshot: Option<EditSnapshot>,
}

impl PhotoEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Photo currently in edit mode
    pub fn editing(&self) -> Option<&PhotoId> {
        self.snapshot.as_ref().map(|s| &s.photo_id)
    }

    /// Enter edit mode for `id`.
    ///
    /// An edit already running on another photo is committed first.
    /// Beginning the photo already under edit changes nothing.
    pub fn begin(&mut self, photos: &mut PhotoCollection, id: &PhotoId) -> Result<Placement> {
        if self.editing() == Some(id) {
            return photos
                .get(id)
                .map(|p| p.placement)
                .ok_or_else(|| GridError::PhotoNotFound(id.clone()));
        }

        let photo = photos
            .get_mut(id)
            .ok_or_else(|| GridError::PhotoNotFound(id.clone()))?;

        if let Some(previous) = self.snapshot.take() {
            log::debug!("Committing edit of {} to edit {}", previous.photo_id, id);
        }

        let snapshot = EditSnapshot {
            photo_id: id.clone(),
            placement: photo.placement,
        };
        photo.placement = initial_fit(&photo.placement, photo.natural);
        let seeded = photo.placement;

        self.snapshot = Some(snapshot);
        Ok(seeded)
    }

    /// Leave edit mode, restoring the pre-edit placement
    pub fn cancel(&mut self, photos: &mut PhotoCollection) -> Option<PhotoId> {
        let snapshot = self.snapshot.take()?;
        let restored = photos.update_by_id(&snapshot.photo_id, |photo| {
            photo.placement = snapshot.placement;
        });
        if !restored {
            log::warn!(
                "Photo {} disappeared during edit, nothing to restore",
                snapshot.photo_id
            );
        }
        Some(snapshot.photo_id)
    }

    /// Leave edit mode, keeping the current placement
    pub fn commit(&mut self) -> Option<PhotoId> {
        self.snapshot.take().map(|s| s.photo_id)
    }

    /// Remove any manual size and position from `id`
    pub fn reset_size(&self, photos: &mut PhotoCollection, id: &PhotoId) -> Result<()> {
        if photos.reset_placement(id) {
            Ok(())
        } else {
            Err(GridError::PhotoNotFound(id.clone()))
        }
    }
}
