pub mod acquire;
pub mod compose;
pub mod constants;
pub mod edit;
pub mod layout;
mod options;
mod photo;
mod preview;
mod stats;
mod store;
mod types;

pub use acquire::{AcquiredImage, load_photo, load_photos, process_image};
pub use compose::{OutputEngine, PdfEngine, compose, compose_to_file, compose_with};
pub use edit::{ContainerSize, PhotoEditor, PointerPosition, ResizeController, ResizeHandle};
pub use layout::{GridGeometry, GridPosition, Rect, cell_rect, resolve};
pub use options::*;
pub use photo::*;
pub use preview::{PagePlan, PlannedPhoto, plan_document, plan_page};
pub use stats::calculate_statistics;
pub use store::*;
pub use types::*;
