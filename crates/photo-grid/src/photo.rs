//! Photo records and their placement state
//!
//! A photo's manual placement is stored as two independent tagged unions
//! instead of four optional numbers: width and height are always set
//! together, and so are x and y.

use crate::constants::PHOTO_ID_LEN;
use rand::Rng;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stable identifier of a photo slot
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PhotoId(String);

impl PhotoId {
    /// Generate a random lowercase base-36 id
    pub fn generate() -> Self {
        const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
        let mut rng = rand::rng();
        let id = (0..PHOTO_ID_LEN)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect();
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PhotoId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PhotoId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Encoded image bytes (JPEG, PNG, ...), shared without copying
#[derive(Clone, PartialEq, Eq)]
pub struct EncodedImage(Arc<[u8]>);

impl EncodedImage {
    pub fn new(bytes: impl Into<Arc<[u8]>>) -> Self {
        Self(bytes.into())
    }

    pub fn bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for EncodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncodedImage({} bytes)", self.0.len())
    }
}

impl From<Vec<u8>> for EncodedImage {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

/// Pixel dimensions of an image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl PixelSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is unknown
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Width divided by height, `None` when a dimension is unknown
    pub fn aspect_ratio(&self) -> Option<f32> {
        if self.is_empty() {
            None
        } else {
            Some(self.width as f32 / self.height as f32)
        }
    }
}

/// Size of a photo in percent of its cell
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sizing {
    /// Sized by the export options (aspect-fit or stretch)
    #[default]
    Auto,
    Manual { width: f32, height: f32 },
}

/// Offset of a photo's top-left corner in percent of its cell
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Position {
    /// Centered in the cell
    #[default]
    Centered,
    Positioned { x: f32, y: f32 },
}

/// Manual placement state of a photo
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    pub sizing: Sizing,
    pub position: Position,
}

impl Placement {
    /// Manually sized and positioned placement
    pub fn manual(width: f32, height: f32, x: f32, y: f32) -> Self {
        Self {
            sizing: Sizing::Manual { width, height },
            position: Position::Positioned { x, y },
        }
    }

    /// Manually sized placement that stays centered
    pub fn sized(width: f32, height: f32) -> Self {
        Self {
            sizing: Sizing::Manual { width, height },
            position: Position::Centered,
        }
    }

    /// True when neither size nor position has been set
    pub fn is_auto(&self) -> bool {
        matches!(self.sizing, Sizing::Auto) && matches!(self.position, Position::Centered)
    }

    /// True when size or position has been set
    pub fn is_custom(&self) -> bool {
        !self.is_auto()
    }
}

/// One image slated for the document, or an empty slot
#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    pub id: PhotoId,
    pub name: String,
    pub image: Option<EncodedImage>,
    pub natural: PixelSize,
    pub placement: Placement,
}

impl Photo {
    /// An empty slot with a fresh id
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            id: PhotoId::generate(),
            name: name.into(),
            image: None,
            natural: PixelSize::default(),
            placement: Placement::default(),
        }
    }

    /// A filled slot with a fresh id and automatic placement
    pub fn new(name: impl Into<String>, image: EncodedImage, natural: PixelSize) -> Self {
        Self {
            image: Some(image),
            natural,
            ..Self::empty(name)
        }
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}
