//! Orientation classification for frames and artwork.
//!
//! Frames are classified from their type and nominal size; artwork declares
//! its class with a filename suffix. The two must agree for a pair to be
//! rendered.
//!
//! ## Frame classes
//!
//! | Size | Mat-framed | Panel family |
//! |---|---|---|
//! | w < h | vertical | vertical |
//! | w == h | square | square |
//! | 36×24 | horizontal 36x24 | horizontal 36x24 |
//! | 40×20, 60×30 | horizontal 48x20 | horizontal 40x20 |
//! | 48×20 | horizontal 60x20 | horizontal 48x20 |
//! | 60×20 | horizontal 60x20 | horizontal 60x20 |
//! | other w > h | horizontal | horizontal |
//!
//! The mat-framed column is offset by one class for the panoramic sizes
//! because those mockups share art with the next size up. 60×30 therefore
//! lands in a different class per group.
//!
//! ## Artwork suffixes
//!
//! Case-insensitive: `horizontal.png`, `square.png`, `vertical.png`,
//! `3624.png`, `2436.png`, `4020.png`, `4820.png`, `6020.png`.
//!
//! `2436.png` is vertical artwork cropped for 24×36 frames. It goes into
//! those frames only, and plain `vertical.png` artwork goes into every other
//! vertical frame.

use crate::frame::FrameError;
use crate::types::{FrameType, Shape, ShapeGroup};
use serde::Serialize;
use std::fmt;

/// Classify a frame by type and nominal size.
pub fn classify(frame_type: FrameType, width: u32, height: u32) -> Result<Shape, FrameError> {
    let group = frame_type
        .shape_group()
        .ok_or(FrameError::UnclassifiableFrameType(frame_type))?;

    if width < height {
        return Ok(Shape::Vertical);
    }
    if width == height {
        return Ok(Shape::Square);
    }

    let shape = match (group, width, height) {
        (_, 36, 24) => Shape::Horizontal36x24,
        (ShapeGroup::MatFramed, 40, 20) | (ShapeGroup::MatFramed, 60, 30) => {
            Shape::Horizontal48x20
        }
        (ShapeGroup::MatFramed, 48, 20) | (ShapeGroup::MatFramed, 60, 20) => {
            Shape::Horizontal60x20
        }
        (ShapeGroup::Panel, 40, 20) | (ShapeGroup::Panel, 60, 30) => Shape::Horizontal40x20,
        (ShapeGroup::Panel, 48, 20) => Shape::Horizontal48x20,
        (ShapeGroup::Panel, 60, 20) => Shape::Horizontal60x20,
        _ => Shape::Horizontal,
    };
    Ok(shape)
}

/// What an artwork filename declares: a shape, and for the sized suffixes
/// the one nominal frame size it was cropped for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArtworkClass {
    pub shape: Shape,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<(u32, u32)>,
}

impl ArtworkClass {
    /// Whether a frame of this shape and nominal size takes this artwork.
    ///
    /// Sized artwork only goes into frames of exactly that size. Plain
    /// artwork of the same shape never goes into those reserved sizes.
    pub fn accepts(self, shape: Shape, width: u32, height: u32) -> bool {
        if shape != self.shape {
            return false;
        }
        match self.size {
            Some(size) => size == (width, height),
            None => !ARTWORK_SUFFIXES
                .iter()
                .any(|&(_, s, pinned)| s == shape && pinned == Some((width, height))),
        }
    }
}

impl From<Shape> for ArtworkClass {
    fn from(shape: Shape) -> Self {
        Self { shape, size: None }
    }
}

impl fmt::Display for ArtworkClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.size {
            Some((w, h)) => write!(f, "{} {}x{}", self.shape, w, h),
            None => write!(f, "{}", self.shape),
        }
    }
}

const ARTWORK_SUFFIXES: &[(&str, Shape, Option<(u32, u32)>)] = &[
    ("horizontal.png", Shape::Horizontal, None),
    ("3624.png", Shape::Horizontal36x24, None),
    ("square.png", Shape::Square, None),
    ("vertical.png", Shape::Vertical, None),
    ("2436.png", Shape::Vertical, Some((24, 36))),
    ("4020.png", Shape::Horizontal40x20, None),
    ("4820.png", Shape::Horizontal48x20, None),
    ("6020.png", Shape::Horizontal60x20, None),
];

/// Class declared by an artwork filename suffix.
pub fn artwork_shape(file_name: &str) -> Result<ArtworkClass, FrameError> {
    let lower = file_name.to_ascii_lowercase();
    ARTWORK_SUFFIXES
        .iter()
        .find(|(suffix, _, _)| lower.ends_with(suffix))
        .map(|&(_, shape, size)| ArtworkClass { shape, size })
        .ok_or_else(|| FrameError::UnrecognizedArtworkShape(file_name.to_string()))
}
