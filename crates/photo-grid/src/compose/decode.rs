//! Image decoding for export
//!
//! Baseline JPEG data is passed through untouched (the PDF reader decodes
//! it); everything else is decoded to 8-bit RGB.

use crate::acquire::flatten_onto_white;
use crate::photo::{EncodedImage, PixelSize};
use crate::types::*;
use image::{ExtendedColorType, ImageDecoder, ImageFormat, ImageReader};
use std::io::Cursor;

/// Color space of embeddable image data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    Gray,
    Rgb,
}

impl ColorSpace {
    /// PDF color space name
    pub fn pdf_name(self) -> &'static str {
        match self {
            ColorSpace::Gray => "DeviceGray",
            ColorSpace::Rgb => "DeviceRGB",
        }
    }
}

/// Image data in a form the output engine can embed
#[derive(Debug, Clone, PartialEq)]
pub enum ImageData {
    /// Original JPEG stream
    Jpeg {
        data: EncodedImage,
        color_space: ColorSpace,
    },
    /// Uncompressed 8-bit RGB samples, row-major
    Rgb(Vec<u8>),
}

/// A decoded image with its natural pixel size
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    pub size: PixelSize,
    pub data: ImageData,
}

/// Decode encoded image bytes
pub fn decode_image(encoded: &EncodedImage) -> Result<DecodedImage> {
    let reader = ImageReader::new(Cursor::new(encoded.bytes()))
        .with_guessed_format()
        .map_err(|e| GridError::DecodeFailure(e.to_string()))?;

    if reader.format() == Some(ImageFormat::Jpeg) {
        let decoder = reader.into_decoder()?;
        let (width, height) = decoder.dimensions();
        // The decoder converts CMYK to RGB, so ask for the stored layout
        let color_space = match decoder.original_color_type() {
            ExtendedColorType::L8 => Some(ColorSpace::Gray),
            ExtendedColorType::Rgb8 => Some(ColorSpace::Rgb),
            _ => None,
        };

        if let Some(color_space) = color_space {
            return Ok(DecodedImage {
                size: PixelSize::new(width, height),
                data: ImageData::Jpeg {
                    data: encoded.clone(),
                    color_space,
                },
            });
        }
    }

    let image = image::load_from_memory(encoded.bytes())?;
    let rgb = flatten_onto_white(&image);
    Ok(DecodedImage {
        size: PixelSize::new(rgb.width(), rgb.height()),
        data: ImageData::Rgb(rgb.into_raw()),
    })
}

/// Run CPU-bound work on the blocking pool. A worker that panics or is
/// cancelled becomes `RenderingUnavailable`.
pub(crate) async fn run_blocking<T, F>(work: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work).await?
}

/// Decode on the blocking pool
pub(crate) async fn decode_in_background(encoded: EncodedImage) -> Result<DecodedImage> {
    run_blocking(move || decode_image(&encoded)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, GrayImage, RgbImage, RgbaImage};

    fn encode(image: DynamicImage, format: ImageFormat) -> EncodedImage {
        let mut bytes = Vec::new();
        image.write_to(&mut Cursor::new(&mut bytes), format).unwrap();
        EncodedImage::from(bytes)
    }

    #[test]
    fn test_jpeg_passes_through() {
        let encoded = encode(DynamicImage::ImageRgb8(RgbImage::new(32, 16)), ImageFormat::Jpeg);
        let decoded = decode_image(&encoded).unwrap();

        assert_eq!(decoded.size, PixelSize::new(32, 16));
        match decoded.data {
            ImageData::Jpeg { data, color_space } => {
                assert_eq!(data, encoded);
                assert_eq!(color_space, ColorSpace::Rgb);
            }
            other => panic!("Expected JPEG passthrough, got {:?}", other),
        }
    }

    #[test]
    fn test_gray_jpeg() {
        let encoded = encode(DynamicImage::ImageLuma8(GrayImage::new(8, 8)), ImageFormat::Jpeg);
        let decoded = decode_image(&encoded).unwrap();
        assert!(matches!(
            decoded.data,
            ImageData::Jpeg {
                color_space: ColorSpace::Gray,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_panicked_worker_is_rendering_unavailable() {
        let result: Result<DecodedImage> = run_blocking(|| panic!("decoder crashed")).await;
        assert!(matches!(result, Err(GridError::RenderingUnavailable(_))));
    }

    #[tokio::test]
    async fn test_worker_errors_pass_through() {
        let result: Result<DecodedImage> =
            run_blocking(|| Err(GridError::DecodeFailure("truncated".to_string()))).await;
        assert!(matches!(result, Err(GridError::DecodeFailure(_))));
    }

    #[tokio::test]
    async fn test_decode_in_background() {
        let encoded = encode(DynamicImage::ImageRgb8(RgbImage::new(4, 2)), ImageFormat::Jpeg);
        let decoded = decode_in_background(encoded).await.unwrap();
        assert_eq!(decoded.size, PixelSize::new(4, 2));
    }

    #[test]
    fn test_cmyk_jpeg_is_decoded_to_rgb() {
        let mut bytes = Vec::new();
        let cmyk = [0u8, 255, 255, 0].repeat(8 * 8);
        jpeg_encoder::Encoder::new(&mut bytes, 90)
            .encode(&cmyk, 8, 8, jpeg_encoder::ColorType::Cmyk)
            .unwrap();

        let decoded = decode_image(&EncodedImage::from(bytes)).unwrap();

        assert_eq!(decoded.size, PixelSize::new(8, 8));
        match decoded.data {
            ImageData::Rgb(samples) => assert_eq!(samples.len(), 8 * 8 * 3),
            other => panic!("Expected RGB samples, got {:?}", other),
        }
    }

    #[test]
    fn test_png_becomes_rgb() {
        let encoded = encode(DynamicImage::ImageRgba8(RgbaImage::new(5, 3)), ImageFormat::Png);
        let decoded = decode_image(&encoded).unwrap();

        assert_eq!(decoded.size, PixelSize::new(5, 3));
        match decoded.data {
            ImageData::Rgb(samples) => {
                assert_eq!(samples.len(), 5 * 3 * 3);
                // Transparent pixels are flattened onto white
                assert!(samples.iter().all(|&s| s == 255));
            }
            other => panic!("Expected RGB samples, got {:?}", other),
        }
    }

    #[test]
    fn test_garbage_fails() {
        let result = decode_image(&EncodedImage::from(b"definitely not pixels".to_vec()));
        assert!(matches!(result, Err(GridError::DecodeFailure(_))));
    }
}
