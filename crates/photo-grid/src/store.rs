//! Ordered photo collection
//!
//! The collection owns every photo record of a document. Pages are never
//! stored: they are recomputed from slot order on every read.

use crate::acquire::AcquiredImage;
use crate::constants::PHOTOS_PER_PAGE;
use crate::photo::{Photo, PhotoId, Placement};

/// Direction for moving a photo one slot along the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Left,
    Right,
}

/// Ordered, mutable sequence of photo slots
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhotoCollection {
    photos: Vec<Photo>,
}

impl PhotoCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// A collection of `count` empty slots named "Photo 1".."Photo N"
    pub fn with_slots(count: usize) -> Self {
        let mut collection = Self::new();
        collection.add_slots(count);
        collection
    }

    /// Append `count` empty slots, continuing the slot numbering
    pub fn add_slots(&mut self, count: usize) {
        let start = self.photos.len();
        self.photos
            .extend((0..count).map(|i| Photo::empty(format!("Photo {}", start + i + 1))));
    }

    pub fn push(&mut self, photo: Photo) {
        self.photos.push(photo);
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Photo> {
        self.photos.iter()
    }

    pub fn as_slice(&self) -> &[Photo] {
        &self.photos
    }

    pub fn get(&self, id: &PhotoId) -> Option<&Photo> {
        self.photos.iter().find(|p| &p.id == id)
    }

    pub fn get_mut(&mut self, id: &PhotoId) -> Option<&mut Photo> {
        self.photos.iter_mut().find(|p| &p.id == id)
    }

    /// Index of the photo with `id`
    pub fn position(&self, id: &PhotoId) -> Option<usize> {
        self.photos.iter().position(|p| &p.id == id)
    }

    /// Apply `update` to the photo with `id`. Returns false if there is none.
    pub fn update_by_id(&mut self, id: &PhotoId, update: impl FnOnce(&mut Photo)) -> bool {
        match self.get_mut(id) {
            Some(photo) => {
                update(photo);
                true
            }
            None => false,
        }
    }

    /// Apply `update` to the photo at `index`. Returns false if out of range.
    pub fn update_at(&mut self, index: usize, update: impl FnOnce(&mut Photo)) -> bool {
        match self.photos.get_mut(index) {
            Some(photo) => {
                update(photo);
                true
            }
            None => false,
        }
    }

    /// Put an acquired image into the slot at `index`, or append a new slot
    /// when `index` is past the end. Any manual placement is cleared.
    ///
    /// Returns the id of the filled slot.
    pub fn assign_image(&mut self, index: usize, acquired: AcquiredImage) -> PhotoId {
        let AcquiredImage {
            name,
            image,
            natural,
        } = acquired;

        if let Some(photo) = self.photos.get_mut(index) {
            photo.name = name;
            photo.image = Some(image);
            photo.natural = natural;
            photo.placement = Placement::default();
            photo.id.clone()
        } else {
            let photo = Photo::new(name, image, natural);
            let id = photo.id.clone();
            self.photos.push(photo);
            id
        }
    }

    /// Fill consecutive slots starting at `start`, appending as needed
    pub fn assign_images(
        &mut self,
        start: usize,
        images: impl IntoIterator<Item = AcquiredImage>,
    ) -> Vec<PhotoId> {
        images
            .into_iter()
            .enumerate()
            .map(|(offset, acquired)| self.assign_image(start + offset, acquired))
            .collect()
    }

    /// Reset a slot to empty, keeping its id and position
    pub fn clear_slot(&mut self, id: &PhotoId) -> bool {
        self.update_by_id(id, |photo| {
            photo.image = None;
            photo.natural = Default::default();
            photo.placement = Placement::default();
        })
    }

    /// Remove any manual size and position from a photo
    pub fn reset_placement(&mut self, id: &PhotoId) -> bool {
        self.update_by_id(id, |photo| photo.placement = Placement::default())
    }

    /// Remove every slot
    pub fn reset_all(&mut self) {
        self.photos.clear();
    }

    /// Swap two slots. Out-of-range indices leave the collection unchanged.
    pub fn swap(&mut self, a: usize, b: usize) -> bool {
        if a < self.photos.len() && b < self.photos.len() {
            self.photos.swap(a, b);
            true
        } else {
            false
        }
    }

    /// Move the slot at `index` one position left or right
    pub fn move_item(&mut self, index: usize, direction: MoveDirection) -> bool {
        match direction {
            MoveDirection::Left if index > 0 => self.swap(index, index - 1),
            MoveDirection::Right if index + 1 < self.photos.len() => self.swap(index, index + 1),
            _ => false,
        }
    }

    /// Slots grouped by page, empty slots included
    pub fn pages(&self) -> Vec<&[Photo]> {
        self.photos.chunks(PHOTOS_PER_PAGE).collect()
    }

    /// Photos that carry an image, in order
    pub fn filled(&self) -> impl Iterator<Item = &Photo> {
        self.photos.iter().filter(|p| p.has_image())
    }
}

impl From<Vec<Photo>> for PhotoCollection {
    fn from(photos: Vec<Photo>) -> Self {
        Self { photos }
    }
}

impl<'a> IntoIterator for &'a PhotoCollection {
    type Item = &'a Photo;
    type IntoIter = std::slice::Iter<'a, Photo>;

    fn into_iter(self) -> Self::IntoIter {
        self.photos.iter()
    }
}
