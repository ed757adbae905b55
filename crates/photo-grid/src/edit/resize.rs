//! Interactive resize/reposition state machine
//!
//! Three externally delivered events drive it: `start` when a pointer goes
//! down on a handle, `drag` for every pointer move, `end` on release. At most
//! one session is live; a second `start` is rejected until `end`.

use crate::constants::MIN_SIZE_PCT;
use crate::photo::{PhotoId, Placement, Position, Sizing};
use crate::store::PhotoCollection;
use crate::types::{GridError, Result};

use super::ResizeHandle;

/// Pointer coordinates in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f32,
    pub y: f32,
}

impl PointerPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// On-screen size of the cell a photo is edited in, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerSize {
    pub width: f32,
    pub height: f32,
}

impl ContainerSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// State captured when a resize gesture starts
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeSession {
    pub photo_id: PhotoId,
    pub handle: ResizeHandle,
    pub start_pointer: PointerPosition,
    pub container: ContainerSize,
    pub start_width: f32,
    pub start_height: f32,
    pub start_x: f32,
    pub start_y: f32,
}

impl ResizeSession {
    /// Capture the start state for `placement`. Missing size defaults to
    /// 100 %, missing position to 0 %.
    pub fn new(
        photo_id: PhotoId,
        placement: &Placement,
        handle: ResizeHandle,
        start_pointer: PointerPosition,
        container: ContainerSize,
    ) -> Self {
        let (start_width, start_height) = match placement.sizing {
            Sizing::Manual { width, height } => (width, height),
            Sizing::Auto => (100.0, 100.0),
        };
        let (start_x, start_y) = match placement.position {
            Position::Positioned { x, y } => (x, y),
            Position::Centered => (0.0, 0.0),
        };

        Self {
            photo_id,
            handle,
            start_pointer,
            container,
            start_width,
            start_height,
            start_x,
            start_y,
        }
    }

    /// Placement for the pointer at `pointer`.
    ///
    /// Width and height never drop below the minimum size. When the west or
    /// north edge hits the minimum, the opposite edge stays where it started.
    pub fn placement_at(&self, pointer: PointerPosition) -> Placement {
        let dx_pct = (pointer.x - self.start_pointer.x) / self.container.width * 100.0;
        let dy_pct = (pointer.y - self.start_pointer.y) / self.container.height * 100.0;

        let mut width = self.start_width;
        let mut height = self.start_height;
        let mut x = self.start_x;
        let mut y = self.start_y;

        if self.handle.has_east() {
            width = self.start_width + dx_pct;
        } else if self.handle.has_west() {
            width = self.start_width - dx_pct;
            x = self.start_x + dx_pct;
        }

        if self.handle.has_south() {
            height = self.start_height + dy_pct;
        } else if self.handle.has_north() {
            height = self.start_height - dy_pct;
            y = self.start_y + dy_pct;
        }

        if width.is_nan() || width < MIN_SIZE_PCT {
            width = MIN_SIZE_PCT;
            if self.handle.has_west() {
                x = self.start_x + (self.start_width - MIN_SIZE_PCT);
            }
        }

        if height.is_nan() || height < MIN_SIZE_PCT {
            height = MIN_SIZE_PCT;
            if self.handle.has_north() {
                y = self.start_y + (self.start_height - MIN_SIZE_PCT);
            }
        }

        Placement::manual(width, height, x, y)
    }
}

/// Idle / dragging state machine for one photo at a time
#[derive(Debug, Default)]
pub struct ResizeController {
    session: Option<ResizeSession>,
}

impl ResizeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&ResizeSession> {
        self.session.as_ref()
    }

    /// Begin a gesture on `handle` of photo `id`. Does not modify the photo.
    pub fn start(
        &mut self,
        photos: &PhotoCollection,
        id: &PhotoId,
        handle: ResizeHandle,
        pointer: PointerPosition,
        container: ContainerSize,
    ) -> Result<()> {
        if let Some(active) = &self.session {
            return Err(GridError::SessionActive(active.photo_id.clone()));
        }

        if !(container.width > 0.0 && container.height > 0.0) {
            return Err(GridError::Config(format!(
                "Resize container must have a positive size, got {}x{}",
                container.width, container.height
            )));
        }

        let photo = photos
            .get(id)
            .ok_or_else(|| GridError::PhotoNotFound(id.clone()))?;

        log::debug!("Resize of {} started on handle {}", id, handle);
        self.session = Some(ResizeSession::new(
            id.clone(),
            &photo.placement,
            handle,
            pointer,
            container,
        ));
        Ok(())
    }

    /// Apply a pointer move and write the new placement to the target photo.
    ///
    /// Returns the written placement, or `None` when idle, when the pointer
    /// is not finite, or when the target photo no longer exists.
    pub fn drag(
        &mut self,
        photos: &mut PhotoCollection,
        pointer: PointerPosition,
    ) -> Option<Placement> {
        let session = self.session.as_ref()?;
        if !(pointer.x.is_finite() && pointer.y.is_finite()) {
            log::debug!("Ignoring pointer move to ({}, {})", pointer.x, pointer.y);
            return None;
        }
        let placement = session.placement_at(pointer);

        if photos.update_by_id(&session.photo_id, |photo| photo.placement = placement) {
            Some(placement)
        } else {
            None
        }
    }

    /// Finish the gesture. The last written placement stays committed.
    pub fn end(&mut self) -> Option<ResizeSession> {
        let session = self.session.take();
        if let Some(session) = &session {
            log::debug!("Resize of {} ended", session.photo_id);
        }
        session
    }
}
