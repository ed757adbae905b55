use crate::layout::Rect;
use crate::types::Result;

use super::DecodedImage;

/// A paginated, fixed-size document being painted.
///
/// Rectangles are in millimeters from the top-left corner of the page.
pub trait OutputEngine {
    type Output;

    /// Start a new page; all following images go onto it
    fn begin_page(&mut self) -> Result<()>;

    /// Paint `image` into `rect` on the current page
    fn draw_image(&mut self, image: &DecodedImage, rect: &Rect) -> Result<()>;

    /// Serialize the finished document
    fn finish(self) -> Result<Self::Output>;
}
