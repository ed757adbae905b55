use crate::layout::GridGeometry;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Export configuration for a photo grid document
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridOptions {
    // Page
    pub paper: PaperSize,
    pub border: BorderPreset,

    // Photos without manual size fill their cell instead of aspect-fitting
    pub stretch: bool,

    // Document title written to the PDF metadata
    pub title: Option<String>,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            paper: PaperSize::A4,
            border: BorderPreset::Bordered,
            stretch: false,
            title: None,
        }
    }
}

impl GridOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| GridError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| GridError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Grid geometry for these options
    pub fn geometry(&self) -> GridGeometry {
        GridGeometry::from_options(self)
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        let (width, height) = self.paper.dimensions_mm();
        if !(width > 0.0 && height > 0.0) {
            return Err(GridError::Config(format!(
                "Paper size must be positive, got {}x{} mm",
                width, height
            )));
        }

        let margins = self.border.margins();
        if margins.outer_mm < 0.0 || margins.gap_mm < 0.0 {
            return Err(GridError::Config(
                "Margins and gap must not be negative".to_string(),
            ));
        }

        if !self.geometry().is_valid() {
            return Err(GridError::Config(format!(
                "Margins ({} mm) and gap ({} mm) leave no room for photos on a {}x{} mm page",
                margins.outer_mm, margins.gap_mm, width, height
            )));
        }

        Ok(())
    }
}
