//! End-to-end runs of the batch pipeline with the `image`-crate backend.
//!
//! Frames and artwork are generated as real PNGs in a temp directory laid
//! out like a user's batch (`frames/` next to the working directory).

use art_preview::config::load_config;
use art_preview::process::{PairError, composite, plan};
use image::{Rgb, Rgba, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

struct Batch {
    tmp: TempDir,
}

impl Batch {
    fn new() -> Self {
        let batch = Self {
            tmp: TempDir::new().unwrap(),
        };
        fs::create_dir_all(batch.frames()).unwrap();
        fs::create_dir_all(batch.work()).unwrap();
        batch
    }

    fn frames(&self) -> PathBuf {
        self.tmp.path().join("frames")
    }

    fn work(&self) -> PathBuf {
        self.tmp.path().join("work")
    }

    fn config(&self, toml: &str) {
        fs::write(self.work().join("config.toml"), toml).unwrap();
    }

    /// Opaque border with a transparent window, the way frame mockups are drawn.
    fn frame(&self, name: &str, size: u32, border: u32) {
        let img = RgbaImage::from_fn(size, size, |x, y| {
            let inside = x >= border && y >= border && x < size - border && y < size - border;
            if inside { Rgba([0, 0, 0, 0]) } else { BLUE }
        });
        img.save(self.frames().join(name)).unwrap();
    }

    fn artwork(&self, name: &str) {
        RgbaImage::from_pixel(4, 4, RED)
            .save(self.work().join(name))
            .unwrap();
    }
}

fn assert_close(pixel: &Rgb<u8>, expected: [u8; 3]) {
    for (actual, want) in pixel.0.iter().zip(expected) {
        assert!(
            actual.abs_diff(want) <= 8,
            "pixel {:?} not close to {:?}",
            pixel,
            expected
        );
    }
}

#[test]
fn square_artwork_in_acrylic_frame() {
    let batch = Batch::new();
    // 20.25 units fit → 2025px artwork centered at 37 on a 2100px canvas
    batch.config(
        r#"
[canvas]
width = 2100
height = 2100
background = [0, 255, 0]
"#,
    );
    batch.frame("AC-20-20.png", 2100, 20);
    batch.artwork("study-square.png");

    let config = load_config(&batch.work()).unwrap();
    let result = composite(&batch.work(), &config, None).unwrap();

    let expected = batch.work().join("output/studyAC-20-20.png");
    assert!(!result.has_failures(), "{:?}", result.failures);
    assert_eq!(result.written, vec![expected.clone()]);

    let out = image::open(&expected).unwrap().to_rgb8();
    assert_eq!(out.dimensions(), (2100, 2100));
    // Frame border drawn over everything
    assert_close(out.get_pixel(0, 0), [0, 0, 255]);
    // Background between frame border and artwork
    assert_close(out.get_pixel(28, 1050), [0, 255, 0]);
    // Artwork
    assert_close(out.get_pixel(1050, 1050), [255, 0, 0]);
    assert_close(out.get_pixel(40, 40), [255, 0, 0]);
}

#[test]
fn unreadable_artwork_fails_its_pair_only() {
    let batch = Batch::new();
    batch.config("[canvas]\nwidth = 100\nheight = 100\n");
    batch.frame("AC-20-20.png", 100, 5);
    fs::write(batch.work().join("broken-square.png"), b"not a png").unwrap();
    batch.artwork("notes.png");

    let config = load_config(&batch.work()).unwrap();
    let result = composite(&batch.work(), &config, None).unwrap();

    assert!(result.written.is_empty());
    assert_eq!(result.failures.len(), 2);

    let reasons: Vec<(&Path, bool)> = result
        .failures
        .iter()
        .map(|f| (f.artwork.as_path(), f.frame.is_some()))
        .collect();
    assert!(reasons.contains(&(batch.work().join("notes.png").as_path(), false)));
    assert!(reasons.contains(&(batch.work().join("broken-square.png").as_path(), true)));

    let broken = result
        .failures
        .iter()
        .find(|f| f.frame.is_some())
        .unwrap();
    assert!(matches!(broken.error, PairError::Imaging(_)));
}

#[test]
fn plan_for_gallery_wrap_uses_configured_canvas() {
    let batch = Batch::new();
    batch.config("[canvas]\nwidth = 6000\nheight = 5000\n");
    fs::write(batch.frames().join("GW-24-30.png"), b"").unwrap();
    fs::write(batch.frames().join("GW-36-24.png"), b"").unwrap();
    batch.artwork("piece-vertical.png");

    let config = load_config(&batch.work()).unwrap();
    let plan = plan(&batch.work(), &config).unwrap();

    assert_eq!(plan.preview_count(), 1);
    let params = &plan.artwork[0].previews[0];
    assert_eq!((params.image_width, params.image_height), (2800, 3733));
    assert_eq!((params.offset_x, params.offset_y), (1600, 633));
    assert_eq!(params.output, batch.work().join("output/pieceGW-24-30.png"));
    assert!(!batch.work().join("output").exists());
}
