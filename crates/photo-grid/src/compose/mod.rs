//! Document composition - painting photos onto grid pages
//!
//! This module orchestrates the export:
//! 1. Skip empty slots
//! 2. Decode each photo in order
//! 3. Assign it the next cell, starting a page every 4 photos
//! 4. Resolve its rectangle and paint it through an output engine

mod decode;
mod engine;
mod io;
mod pdf;

pub use decode::{ColorSpace, DecodedImage, ImageData, decode_image};
pub use engine::OutputEngine;
pub use io::write_document;
pub use pdf::PdfEngine;

use crate::constants::PHOTOS_PER_PAGE;
use crate::layout::{page_count, resolve_placement};
use crate::options::GridOptions;
use crate::photo::{EncodedImage, Photo};
use crate::types::*;
use decode::decode_in_background;
use std::future::Future;
use std::path::Path;

/// Compose `photos` into a PDF document.
///
/// Fails without output if the engine cannot be created or an image cannot
/// be decoded for lack of a worker; photos that fail to decode are skipped.
pub async fn compose(photos: &[Photo], options: &GridOptions) -> Result<Vec<u8>> {
    let engine = PdfEngine::for_options(options)?;
    compose_with(engine, photos, options).await
}

/// Compose `photos` into a PDF file, replacing `path` only on success
pub async fn compose_to_file(
    photos: &[Photo],
    options: &GridOptions,
    path: impl AsRef<Path>,
) -> Result<()> {
    let bytes = compose(photos, options).await?;
    write_document(&bytes, path).await
}

/// Compose `photos` through any output engine
pub async fn compose_with<E: OutputEngine>(
    engine: E,
    photos: &[Photo],
    options: &GridOptions,
) -> Result<E::Output> {
    paint(engine, photos, options, decode_in_background).await
}

async fn paint<E, D, F>(
    mut engine: E,
    photos: &[Photo],
    options: &GridOptions,
    mut decode: D,
) -> Result<E::Output>
where
    E: OutputEngine,
    D: FnMut(EncodedImage) -> F,
    F: Future<Output = Result<DecodedImage>>,
{
    let geometry = options.geometry();
    if !geometry.is_valid() {
        return Err(GridError::EngineUnavailable(
            "Page geometry leaves no room for photos".to_string(),
        ));
    }

    let mut placed = 0;
    for photo in photos {
        let Some(encoded) = &photo.image else {
            continue;
        };

        let decoded = match decode(encoded.clone()).await {
            Ok(decoded) => decoded,
            Err(GridError::DecodeFailure(reason)) => {
                log::warn!("Skipping {} ({}): {}", photo.name, photo.id, reason);
                continue;
            }
            Err(e) => return Err(e),
        };

        if placed % PHOTOS_PER_PAGE == 0 {
            engine.begin_page()?;
        }

        let cell = geometry.cell_for_index(placed);
        let rect = match resolve_placement(&photo.placement, decoded.size, &cell, options.stretch) {
            Ok(rect) => rect,
            Err(GridError::InvalidPhotoDimensions { width, height }) => {
                log::warn!(
                    "{} has no usable size ({}x{}), filling its cell",
                    photo.name,
                    width,
                    height
                );
                cell
            }
            Err(e) => return Err(e),
        };

        engine.draw_image(&decoded, &rect)?;
        placed += 1;
    }

    log::info!(
        "Composed {} photos on {} pages",
        placed,
        page_count(placed)
    );
    engine.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Rect;
    use crate::photo::PixelSize;
    use decode::run_blocking;

    /// Counts pages and images; the counts are its only output
    #[derive(Default)]
    struct CountingEngine {
        pages: usize,
        images: usize,
    }

    impl OutputEngine for CountingEngine {
        type Output = (usize, usize);

        fn begin_page(&mut self) -> Result<()> {
            self.pages += 1;
            Ok(())
        }

        fn draw_image(&mut self, _image: &DecodedImage, _rect: &Rect) -> Result<()> {
            self.images += 1;
            Ok(())
        }

        fn finish(self) -> Result<Self::Output> {
            Ok((self.pages, self.images))
        }
    }

    fn photos(count: usize) -> Vec<Photo> {
        (0..count)
            .map(|i| {
                Photo::new(
                    format!("{}.jpg", i),
                    EncodedImage::from(vec![0u8]),
                    PixelSize::new(1, 1),
                )
            })
            .collect()
    }

    fn gray_pixel() -> DecodedImage {
        DecodedImage {
            size: PixelSize::new(1, 1),
            data: ImageData::Rgb(vec![128, 128, 128]),
        }
    }

    #[tokio::test]
    async fn test_panicked_decode_aborts_without_output() {
        let mut calls = 0;
        let result = paint(
            CountingEngine::default(),
            &photos(3),
            &GridOptions::default(),
            |_| {
                calls += 1;
                let crash = calls == 2;
                run_blocking(move || {
                    if crash {
                        panic!("decoder crashed");
                    }
                    Ok(gray_pixel())
                })
            },
        )
        .await;

        assert!(matches!(result, Err(GridError::RenderingUnavailable(_))));
        assert_eq!(calls, 2);
    }

    #[tokio::test]
    async fn test_decode_failure_is_skipped() {
        let mut calls = 0;
        let result = paint(
            CountingEngine::default(),
            &photos(5),
            &GridOptions::default(),
            |_| {
                calls += 1;
                let broken = calls == 1;
                run_blocking(move || {
                    if broken {
                        return Err(GridError::DecodeFailure("bad header".to_string()));
                    }
                    Ok(gray_pixel())
                })
            },
        )
        .await;

        assert_eq!(result.unwrap(), (1, 4));
    }
}
