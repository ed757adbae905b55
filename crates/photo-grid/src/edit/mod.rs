//! Interactive editing of photo size and position
//!
//! - Resize handles and the drag state machine
//! - Initial fit when a photo enters edit mode
//! - Edit sessions with cancel and commit

mod editor;
mod fit;
mod handle;
mod resize;

pub use editor::PhotoEditor;
pub use fit::{fit_size, initial_fit};
pub use handle::ResizeHandle;
pub use resize::{ContainerSize, PointerPosition, ResizeController, ResizeSession};
