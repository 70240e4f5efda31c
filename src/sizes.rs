//! Measured fit sizes per frame product.
//!
//! Each entry maps a frame type and nominal size to the size the artwork is
//! scaled to before the mockup is drawn over it. The numbers come from
//! measuring the mockup art, so they are neither symmetric under rotation
//! (30×24 is not 24×30 swapped) nor derivable from each other. Sizes that
//! are not listed are rejected rather than interpolated.

use crate::frame::FrameError;
use crate::types::FrameType;
use std::collections::HashMap;
use std::sync::LazyLock;

type Entry = (FrameType, u32, u32, f64, f64);

use FrameType::{Acrylic, FloatWrap, FramedMatPrint, FramedTexturedPanel, GalleryWrap};

#[rustfmt::skip]
static ENTRIES: &[Entry] = &[
    // Acrylic: face-mounted, prints with a quarter-inch bleed.
    (Acrylic, 20, 20, 20.25, 20.25),
    (Acrylic, 24, 24, 24.25, 24.25),
    (Acrylic, 30, 30, 30.25, 30.25),
    (Acrylic, 24, 30, 24.25, 30.33),
    (Acrylic, 30, 24, 30.33, 24.25),
    (Acrylic, 24, 36, 24.25, 36.4),
    (Acrylic, 36, 24, 36.4, 24.25),
    (Acrylic, 30, 40, 30.3, 40.4),
    (Acrylic, 40, 30, 40.4, 30.3),
    (Acrylic, 40, 20, 40.4, 20.2),
    (Acrylic, 48, 20, 48.45, 20.2),
    (Acrylic, 60, 20, 60.5, 20.2),

    // Framed print with mat: visible window inside the mat.
    (FramedMatPrint, 24, 24, 16.5, 16.5),
    (FramedMatPrint, 30, 30, 21.0, 21.0),
    (FramedMatPrint, 24, 30, 16.5, 22.5),
    (FramedMatPrint, 30, 24, 22.75, 16.5),
    (FramedMatPrint, 24, 36, 16.5, 28.5),
    (FramedMatPrint, 36, 24, 28.25, 16.5),
    (FramedMatPrint, 30, 40, 22.5, 32.5),
    (FramedMatPrint, 40, 30, 32.0, 22.5),
    (FramedMatPrint, 40, 20, 32.5, 12.5),
    (FramedMatPrint, 48, 20, 40.5, 12.5),
    (FramedMatPrint, 60, 20, 52.5, 12.75),
    (FramedMatPrint, 60, 30, 52.0, 22.5),

    // Framed textured panel.
    (FramedTexturedPanel, 20, 20, 18.5, 18.5),
    (FramedTexturedPanel, 24, 24, 22.5, 22.5),
    (FramedTexturedPanel, 30, 30, 28.5, 28.5),
    (FramedTexturedPanel, 24, 30, 22.5, 28.4),
    (FramedTexturedPanel, 30, 24, 28.5, 22.4),
    (FramedTexturedPanel, 24, 36, 22.5, 34.5),
    (FramedTexturedPanel, 36, 24, 34.4, 22.5),
    (FramedTexturedPanel, 30, 40, 28.5, 38.5),
    (FramedTexturedPanel, 40, 30, 38.4, 28.5),
    (FramedTexturedPanel, 40, 20, 38.5, 18.5),
    (FramedTexturedPanel, 48, 20, 46.5, 18.4),
    (FramedTexturedPanel, 60, 30, 58.5, 28.5),

    // Gallery wrap: artwork continues around the stretcher edges.
    (GalleryWrap, 24, 24, 28.0, 28.0),
    (GalleryWrap, 30, 30, 34.67, 34.67),
    (GalleryWrap, 24, 30, 28.0, 37.33),
    (GalleryWrap, 30, 24, 36.0, 28.67),
    (GalleryWrap, 24, 36, 28.0, 43.5),
    (GalleryWrap, 36, 24, 42.67, 28.0),
    (GalleryWrap, 30, 40, 34.67, 46.0),
    (GalleryWrap, 40, 30, 46.0, 35.33),
    (GalleryWrap, 40, 20, 45.33, 24.67),
    (GalleryWrap, 48, 20, 54.0, 24.67),
    (GalleryWrap, 60, 20, 66.0, 24.5),
    (GalleryWrap, 60, 30, 66.67, 35.33),

    // Float wrap: canvas sits inside a floater frame with a gap.
    (FloatWrap, 20, 20, 19.0, 19.0),
    (FloatWrap, 24, 24, 23.0, 23.0),
    (FloatWrap, 30, 30, 29.0, 29.0),
    (FloatWrap, 24, 30, 23.0, 29.0),
    (FloatWrap, 30, 24, 29.0, 23.25),
    (FloatWrap, 24, 36, 23.0, 35.0),
    (FloatWrap, 36, 24, 35.0, 23.0),
    (FloatWrap, 30, 40, 29.0, 39.0),
    (FloatWrap, 40, 30, 39.25, 29.0),
    (FloatWrap, 40, 20, 39.0, 19.0),
    (FloatWrap, 60, 20, 59.0, 19.25),
    (FloatWrap, 60, 30, 59.0, 29.0),
];

static TABLE: LazyLock<HashMap<(FrameType, u32, u32), (f64, f64)>> = LazyLock::new(|| {
    ENTRIES
        .iter()
        .map(|&(t, w, h, fw, fh)| ((t, w, h), (fw, fh)))
        .collect()
});

/// Fit size `(width, height)` for a frame, in nominal units.
pub fn lookup(frame_type: FrameType, width: u32, height: u32) -> Result<(f64, f64), FrameError> {
    TABLE
        .get(&(frame_type, width, height))
        .copied()
        .ok_or(FrameError::UnsupportedFrameSize {
            frame_type,
            width,
            height,
        })
}

/// Every tabulated entry as `(type, width, height, fit width, fit height)`.
pub fn entries() -> &'static [(FrameType, u32, u32, f64, f64)] {
    ENTRIES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShapeGroup;
    use std::collections::HashSet;

    #[test]
    fn documented_entries() {
        assert_eq!(lookup(GalleryWrap, 24, 30).unwrap(), (28.0, 37.33));
        assert_eq!(lookup(Acrylic, 20, 20).unwrap(), (20.25, 20.25));
    }

    #[test]
    fn lookup_returns_every_entry_exactly() {
        for &(t, w, h, fw, fh) in entries() {
            assert_eq!(lookup(t, w, h).unwrap(), (fw, fh), "{t} {w}x{h}");
        }
    }

    #[test]
    fn no_duplicate_keys() {
        let keys: HashSet<_> = entries().iter().map(|&(t, w, h, _, _)| (t, w, h)).collect();
        assert_eq!(keys.len(), entries().len());
    }

    #[test]
    fn twelve_sizes_per_active_type() {
        for t in FrameType::ALL {
            let count = entries().iter().filter(|e| e.0 == t).count();
            let expected = if t.shape_group().is_some() { 12 } else { 0 };
            assert_eq!(count, expected, "{t}");
        }
    }

    #[test]
    fn fit_sizes_are_positive() {
        for &(t, w, h, fw, fh) in entries() {
            assert!(fw > 0.0 && fh > 0.0, "{t} {w}x{h}");
        }
    }

    #[test]
    fn rotated_sizes_are_tabulated_independently() {
        let (w, h) = lookup(FramedMatPrint, 24, 30).unwrap();
        let (rw, rh) = lookup(FramedMatPrint, 30, 24).unwrap();
        assert_ne!((w, h), (rh, rw));
    }

    #[test]
    fn mat_fit_stays_inside_frame() {
        for &(t, w, h, fw, fh) in entries() {
            if t.shape_group() == Some(ShapeGroup::MatFramed) {
                assert!(fw <= w as f64 && fh <= h as f64, "{t} {w}x{h}");
            }
        }
    }

    #[test]
    fn absent_combinations_fail() {
        for (t, w, h) in [
            (GalleryWrap, 20, 20),
            (Acrylic, 60, 30),
            (FramedMatPrint, 20, 20),
            (FramedTexturedPanel, 60, 20),
            (FloatWrap, 48, 20),
            (GalleryWrap, 25, 30),
            (FrameType::FramedPrint, 24, 30),
        ] {
            assert_eq!(
                lookup(t, w, h),
                Err(FrameError::UnsupportedFrameSize {
                    frame_type: t,
                    width: w,
                    height: h,
                })
            );
        }
    }
}
