use crate::photo::PhotoId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("Invalid photo dimensions: {width}x{height}")]
    InvalidPhotoDimensions { width: u32, height: u32 },
    #[error("Output engine unavailable: {0}")]
    EngineUnavailable(String),
    #[error("Rendering unavailable: {0}")]
    RenderingUnavailable(String),
    #[error("Failed to decode image: {0}")]
    DecodeFailure(String),
    #[error("No photo with id {0}")]
    PhotoNotFound(PhotoId),
    #[error("A resize session is already active for photo {0}")]
    SessionActive(PhotoId),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<tokio::task::JoinError> for GridError {
    fn from(err: tokio::task::JoinError) -> Self {
        GridError::RenderingUnavailable(err.to_string())
    }
}

impl From<image::ImageError> for GridError {
    fn from(err: image::ImageError) -> Self {
        GridError::DecodeFailure(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GridError>;

/// Standard paper sizes, always used in portrait orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A3,
    #[default]
    A4,
    A5,
    Letter,
    Legal,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Get portrait dimensions (width, height) in millimeters
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }
}

/// Outer margin and inter-cell gap presets for the 2x2 grid
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BorderPreset {
    /// Visible white border around the page and between photos
    #[default]
    Bordered,
    /// Photos run almost to the paper edge and touch each other
    Borderless,
    Custom { outer_mm: f32, gap_mm: f32 },
}

impl BorderPreset {
    pub fn margins(self) -> GridMargins {
        match self {
            BorderPreset::Bordered => GridMargins {
                outer_mm: 15.0,
                gap_mm: 10.0,
            },
            BorderPreset::Borderless => GridMargins {
                outer_mm: 5.0,
                gap_mm: 0.0,
            },
            BorderPreset::Custom { outer_mm, gap_mm } => GridMargins { outer_mm, gap_mm },
        }
    }
}

/// Resolved page margins for the grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMargins {
    /// Distance from every paper edge to the outer cells
    pub outer_mm: f32,
    /// Space between neighbouring cells, on both axes
    pub gap_mm: f32,
}

/// Statistics about a photo collection as it would be exported
#[derive(Debug, Clone, PartialEq)]
pub struct GridStatistics {
    /// All slots, including empty ones
    pub total_slots: usize,
    /// Slots holding an image
    pub photos: usize,
    /// Slots without an image (never exported)
    pub empty_slots: usize,
    /// Pages in the exported document
    pub pages: usize,
    /// Photos on the last page (0 when there are no pages)
    pub last_page_photos: usize,
    /// Photos with manual size or position
    pub custom_placements: usize,
}
