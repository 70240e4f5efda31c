//! Pure Rust backend built on the `image` crate.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode PNG | `image::ImageReader` |
//! | Scale artwork | `image::imageops::resize` with `Lanczos3` filter |
//! | Draw artwork and frame | `image::imageops::overlay` (alpha blended) |
//! | Flatten | `DynamicImage::to_rgb8` |
//! | Encode PNG | `RgbImage::save_with_format` |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::CompositeParams;
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, ImageReader, Rgba, RgbaImage};
use std::path::Path;

/// Backend using the `image` crate for decode, scale, draw and encode.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)
        .map_err(BackendError::Io)?
        .with_guessed_format()
        .map_err(BackendError::Io)?
        .decode()
        .map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
        })
}

/// Encode a flattened preview as PNG.
fn save_png(img: &DynamicImage, path: &Path) -> Result<(), BackendError> {
    let is_png = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"));
    if !is_png {
        return Err(BackendError::ProcessingFailed(format!(
            "Unsupported output format: {}",
            path.display()
        )));
    }
    img.to_rgb8()
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| match e {
            image::ImageError::IoError(io) => BackendError::Io(io),
            other => BackendError::ProcessingFailed(format!("PNG encode failed: {}", other)),
        })
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = image::image_dimensions(path).map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to read dimensions: {}", e))
        })?;
        Ok(Dimensions { width, height })
    }

    fn composite(&self, params: &CompositeParams) -> Result<(), BackendError> {
        if params.image_width == 0 || params.image_height == 0 {
            return Err(BackendError::ProcessingFailed(format!(
                "Empty target size {}x{} for {}",
                params.image_width,
                params.image_height,
                params.artwork.display()
            )));
        }

        let artwork = load_image(&params.artwork)?.to_rgba8();
        let frame = load_image(&params.frame)?.to_rgba8();

        let scaled = imageops::resize(
            &artwork,
            params.image_width,
            params.image_height,
            FilterType::Lanczos3,
        );

        let [r, g, b] = params.canvas.background;
        let mut canvas =
            RgbaImage::from_pixel(params.canvas.width, params.canvas.height, Rgba([r, g, b, 255]));
        imageops::overlay(&mut canvas, &scaled, params.offset_x, params.offset_y);
        imageops::overlay(&mut canvas, &frame, 0, 0);

        save_png(&DynamicImage::ImageRgba8(canvas), &params.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::params::Canvas;
    use image::{Rgb, RgbImage};

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

    /// Solid-color artwork.
    fn create_artwork(path: &Path, width: u32, height: u32) {
        RgbaImage::from_pixel(width, height, RED).save(path).unwrap();
    }

    /// Frame with an opaque blue border and a transparent window.
    fn create_frame(path: &Path, width: u32, height: u32, border: u32) {
        let img = RgbaImage::from_fn(width, height, |x, y| {
            let inside = x >= border && y >= border && x < width - border && y < height - border;
            if inside { Rgba([0, 0, 0, 0]) } else { BLUE }
        });
        img.save(path).unwrap();
    }

    fn params(tmp: &Path, image: (u32, u32), offset: (i64, i64)) -> CompositeParams {
        CompositeParams {
            artwork: tmp.join("piece-vertical.png"),
            frame: tmp.join("GW-24-30.png"),
            output: tmp.join("pieceGW-24-30.png"),
            canvas: Canvas {
                width: 60,
                height: 80,
                background: [0, 255, 0],
            },
            image_width: image.0,
            image_height: image.1,
            offset_x: offset.0,
            offset_y: offset.1,
        }
    }

    #[test]
    fn identify_synthetic_png() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("frame.png");
        create_frame(&path, 200, 150, 10);

        let dims = RustBackend::new().identify(&path).unwrap();
        assert_eq!(dims, Dimensions { width: 200, height: 150 });
    }

    #[test]
    fn identify_nonexistent_file_errors() {
        let result = RustBackend::new().identify(Path::new("/nonexistent/frame.png"));
        assert!(result.is_err());
    }

    #[test]
    fn composite_layers_background_artwork_and_frame() {
        let tmp = tempfile::TempDir::new().unwrap();
        create_artwork(&tmp.path().join("piece-vertical.png"), 6, 8);
        create_frame(&tmp.path().join("GW-24-30.png"), 60, 80, 5);

        // 30x40 artwork centered on a 60x80 canvas at (15, 20)
        let p = params(tmp.path(), (30, 40), (15, 20));
        RustBackend::new().composite(&p).unwrap();

        let out = image::open(&p.output).unwrap();
        assert_eq!((out.width(), out.height()), (60, 80));
        let out: RgbImage = out.to_rgb8();

        // Frame border on top
        assert_eq!(*out.get_pixel(0, 0), Rgb([0, 0, 255]));
        // Background between border and artwork
        assert_eq!(*out.get_pixel(8, 40), Rgb([0, 255, 0]));
        // Artwork at the center
        let center = out.get_pixel(30, 40);
        assert!(center[0] > 200 && center[1] < 50 && center[2] < 50, "{center:?}");
    }

    #[test]
    fn composite_clips_oversized_artwork() {
        let tmp = tempfile::TempDir::new().unwrap();
        create_artwork(&tmp.path().join("piece-vertical.png"), 4, 4);
        create_frame(&tmp.path().join("GW-24-30.png"), 60, 80, 2);

        let p = params(tmp.path(), (100, 100), (-20, -10));
        RustBackend::new().composite(&p).unwrap();

        let out = image::open(&p.output).unwrap().to_rgb8();
        assert_eq!(out.dimensions(), (60, 80));
        let inner = out.get_pixel(10, 10);
        assert!(inner[0] > 200, "{inner:?}");
    }

    #[test]
    fn composite_missing_artwork_is_io_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        create_frame(&tmp.path().join("GW-24-30.png"), 60, 80, 5);

        let p = params(tmp.path(), (30, 40), (15, 20));
        let result = RustBackend::new().composite(&p);
        assert!(matches!(result, Err(BackendError::Io(_))));
    }

    #[test]
    fn composite_corrupt_frame_is_processing_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        create_artwork(&tmp.path().join("piece-vertical.png"), 6, 8);
        std::fs::write(tmp.path().join("GW-24-30.png"), b"not a png").unwrap();

        let p = params(tmp.path(), (30, 40), (15, 20));
        let result = RustBackend::new().composite(&p);
        assert!(matches!(result, Err(BackendError::ProcessingFailed(_))));
    }

    #[test]
    fn composite_rejects_non_png_output() {
        let tmp = tempfile::TempDir::new().unwrap();
        create_artwork(&tmp.path().join("piece-vertical.png"), 6, 8);
        create_frame(&tmp.path().join("GW-24-30.png"), 60, 80, 5);

        let mut p = params(tmp.path(), (30, 40), (15, 20));
        p.output = tmp.path().join("preview.jpg");
        assert!(RustBackend::new().composite(&p).is_err());
    }

    #[test]
    fn composite_rejects_empty_target() {
        let tmp = tempfile::TempDir::new().unwrap();
        let p = params(tmp.path(), (0, 40), (15, 20));
        assert!(matches!(
            RustBackend::new().composite(&p),
            Err(BackendError::ProcessingFailed(_))
        ));
    }
}
