//! Image acquisition
//!
//! Turns image files into transport-friendly JPEG data: decoded, flattened
//! onto white, downscaled to at most 1500 px on the long edge and
//! re-encoded. The natural size reported is that of the original file.

use crate::constants::{JPEG_QUALITY, MAX_IMAGE_DIMENSION};
use crate::photo::{EncodedImage, PixelSize};
use crate::types::*;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, Rgb, RgbImage, Rgba};
use std::cmp::Ordering;
use std::path::{Path, PathBuf};

/// An image ready to be placed in a photo slot
#[derive(Debug, Clone, PartialEq)]
pub struct AcquiredImage {
    pub name: String,
    pub image: EncodedImage,
    pub natural: PixelSize,
}

/// Decode, downscale and re-encode image bytes
pub fn process_image(name: impl Into<String>, bytes: &[u8]) -> Result<AcquiredImage> {
    let decoded = image::load_from_memory(bytes)?;
    let natural = PixelSize::new(decoded.width(), decoded.height());

    let resized = if natural.width > MAX_IMAGE_DIMENSION || natural.height > MAX_IMAGE_DIMENSION {
        decoded.resize(MAX_IMAGE_DIMENSION, MAX_IMAGE_DIMENSION, FilterType::Lanczos3)
    } else {
        decoded
    };

    let rgb = flatten_onto_white(&resized);
    let mut encoded = Vec::new();
    JpegEncoder::new_with_quality(&mut encoded, JPEG_QUALITY).encode_image(&rgb)?;

    Ok(AcquiredImage {
        name: name.into(),
        image: EncodedImage::from(encoded),
        natural,
    })
}

/// Load and process a single image file
pub async fn load_photo(path: impl AsRef<Path>) -> Result<AcquiredImage> {
    let path = path.as_ref().to_owned();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let bytes = tokio::fs::read(&path).await?;
    let acquired = tokio::task::spawn_blocking(move || process_image(name, &bytes)).await??;
    log::debug!(
        "Loaded {} ({}x{})",
        path.display(),
        acquired.natural.width,
        acquired.natural.height
    );
    Ok(acquired)
}

/// Load several image files, one at a time, in natural file name order.
///
/// Files that cannot be read or decoded are logged and skipped.
pub async fn load_photos(paths: &[impl AsRef<Path>]) -> Vec<AcquiredImage> {
    let mut sorted: Vec<PathBuf> = paths.iter().map(|p| p.as_ref().to_owned()).collect();
    sorted.sort_by(|a, b| natural_cmp(&file_name(a), &file_name(b)));

    let mut acquired = Vec::with_capacity(sorted.len());
    for path in &sorted {
        match load_photo(path).await {
            Ok(image) => acquired.push(image),
            Err(e) => log::warn!("Skipping {}: {}", path.display(), e),
        }
    }
    acquired
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Blend any alpha channel against a white background
pub(crate) fn flatten_onto_white(image: &DynamicImage) -> RgbImage {
    if !image.color().has_alpha() {
        return image.to_rgb8();
    }

    let rgba = image.to_rgba8();
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let Rgba([r, g, b, a]) = *rgba.get_pixel(x, y);
        let alpha = a as f32 / 255.0;
        let blend = |c: u8| (c as f32 * alpha + 255.0 * (1.0 - alpha)).round() as u8;
        Rgb([blend(r), blend(g), blend(b)])
    })
}

/// Case-insensitive comparison that orders digit runs numerically
/// ("img2" < "img10").
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut a = a.chars().peekable();
    let mut b = b.chars().peekable();

    loop {
        match (a.peek().copied(), b.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(ca), Some(cb)) if ca.is_ascii_digit() && cb.is_ascii_digit() => {
                let na = take_number(&mut a);
                let nb = take_number(&mut b);
                let ord = na
                    .trim_start_matches('0')
                    .len()
                    .cmp(&nb.trim_start_matches('0').len())
                    .then_with(|| na.trim_start_matches('0').cmp(nb.trim_start_matches('0')));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(ca), Some(cb)) => {
                let ord = ca.to_lowercase().cmp(cb.to_lowercase());
                if ord != Ordering::Equal {
                    return ord;
                }
                a.next();
                b.next();
            }
        }
    }
}

fn take_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut digits = String::new();
    while let Some(c) = chars.peek().copied().filter(char::is_ascii_digit) {
        digits.push(c);
        chars.next();
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(image: DynamicImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_natural_order() {
        let mut names = vec!["img10.jpg", "IMG2.jpg", "img1.jpg", "a.jpg"];
        names.sort_by(|a, b| natural_cmp(a, b));
        assert_eq!(names, ["a.jpg", "img1.jpg", "IMG2.jpg", "img10.jpg"]);
    }

    #[test]
    fn test_downscales_long_edge() {
        let source = DynamicImage::ImageRgb8(RgbImage::new(3000, 1500));
        let acquired = process_image("big.png", &png_bytes(source)).unwrap();

        assert_eq!(acquired.natural, PixelSize::new(3000, 1500));
        let encoded = image::load_from_memory(acquired.image.bytes()).unwrap();
        assert_eq!((encoded.width(), encoded.height()), (1500, 750));
    }

    #[test]
    fn test_small_images_keep_size() {
        let source = DynamicImage::ImageRgb8(RgbImage::new(64, 48));
        let acquired = process_image("small.png", &png_bytes(source)).unwrap();

        let encoded = image::load_from_memory(acquired.image.bytes()).unwrap();
        assert_eq!((encoded.width(), encoded.height()), (64, 48));
        assert_eq!(
            image::guess_format(acquired.image.bytes()).unwrap(),
            ImageFormat::Jpeg
        );
    }

    #[test]
    fn test_transparent_pixels_become_white() {
        let source = DynamicImage::ImageRgba8(RgbaImage::new(8, 8));
        let flattened = flatten_onto_white(&source);
        assert_eq!(*flattened.get_pixel(0, 0), Rgb([255, 255, 255]));
    }

    #[test]
    fn test_invalid_bytes_fail_to_decode() {
        let result = process_image("broken.jpg", b"not an image");
        assert!(matches!(result, Err(GridError::DecodeFailure(_))));
    }
}
