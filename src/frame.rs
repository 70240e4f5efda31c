//! Fully resolved frame descriptors.
//!
//! A [`Frame`] is built from nothing but its file path: the filename is
//! parsed, the type/size is classified into a [`Shape`], and the fit size is
//! looked up in the [size table](crate::sizes). Construction touches no
//! pixels and no filesystem state.

use crate::naming::parse_frame_name;
use crate::shape::classify;
use crate::sizes;
use crate::types::{FrameType, Shape};
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Raster pixels per nominal frame unit.
pub const PIXELS_PER_UNIT: u32 = 100;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FrameError {
    #[error("Invalid frame filename: {0}")]
    InvalidFilename(String),
    #[error("Unknown frame type: {0}")]
    UnknownFrameType(String),
    #[error("Unsupported frame size: {frame_type} {width}x{height}")]
    UnsupportedFrameSize {
        frame_type: FrameType,
        width: u32,
        height: u32,
    },
    #[error("Frame type {0} has no shape classification")]
    UnclassifiableFrameType(FrameType),
    #[error("Artwork filename does not declare a known shape: {0}")]
    UnrecognizedArtworkShape(String),
}

/// A frame mockup image and everything derived from its filename.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub path: PathBuf,
    pub frame_type: FrameType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Nominal frame width.
    pub width: u32,
    /// Nominal frame height.
    pub height: u32,
    /// Width the artwork is scaled to, in nominal units.
    pub image_width: f64,
    /// Height the artwork is scaled to, in nominal units.
    pub image_height: f64,
    pub shape: Shape,
}

impl Frame {
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, FrameError> {
        let path = path.into();
        let parsed = parse_frame_name(&file_name_of(&path))?;

        let shape = classify(parsed.frame_type, parsed.width, parsed.height)?;
        let (image_width, image_height) =
            sizes::lookup(parsed.frame_type, parsed.width, parsed.height)?;

        Ok(Self {
            path,
            frame_type: parsed.frame_type,
            color: parsed.color,
            width: parsed.width,
            height: parsed.height,
            image_width,
            image_height,
            shape,
        })
    }

    /// Frame file name, used as the suffix of every preview rendered into it.
    pub fn file_name(&self) -> String {
        file_name_of(&self.path)
    }

    pub fn width_pixels(&self) -> u32 {
        self.width * PIXELS_PER_UNIT
    }

    pub fn height_pixels(&self) -> u32 {
        self.height * PIXELS_PER_UNIT
    }

    pub fn image_width_pixels(&self) -> u32 {
        to_pixels(self.image_width)
    }

    pub fn image_height_pixels(&self) -> u32 {
        to_pixels(self.image_height)
    }
}

fn to_pixels(units: f64) -> u32 {
    (units * PIXELS_PER_UNIT as f64).round() as u32
}

pub(crate) fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallery_wrap_vertical() {
        let frame = Frame::from_path("/frames/wraps/GW-24-30.png").unwrap();
        assert_eq!(frame.frame_type, FrameType::GalleryWrap);
        assert_eq!(frame.color, None);
        assert_eq!((frame.width, frame.height), (24, 30));
        assert_eq!(frame.shape, Shape::Vertical);
        assert_eq!(frame.image_width, 28.0);
        assert_eq!(frame.image_height, 37.33);
        assert_eq!(frame.file_name(), "GW-24-30.png");
    }

    #[test]
    fn acrylic_square() {
        let frame = Frame::from_path("AC-20-20.png").unwrap();
        assert_eq!(frame.shape, Shape::Square);
        assert_eq!(frame.image_width, 20.25);
        assert_eq!(frame.image_height, 20.25);
    }

    #[test]
    fn color_is_carried_through() {
        let frame = Frame::from_path("FMP-07-30-40.png").unwrap();
        assert_eq!(frame.color.as_deref(), Some("07"));
        assert_eq!(frame.shape, Shape::Vertical);
    }

    #[test]
    fn pixel_projections() {
        let frame = Frame::from_path("GW-24-30.png").unwrap();
        assert_eq!(frame.width_pixels(), 2400);
        assert_eq!(frame.height_pixels(), 3000);
        assert_eq!(frame.image_width_pixels(), 2800);
        assert_eq!(frame.image_height_pixels(), 3733);
    }

    #[test]
    fn pixel_projections_hold_for_every_table_entry() {
        for &(frame_type, width, height, _, _) in sizes::entries() {
            let name = format!("{}-{:02}-{:02}.png", frame_type.token(), width, height);
            let frame = Frame::from_path(&name).unwrap();
            assert_eq!(frame.width_pixels(), width * 100, "{name}");
            assert_eq!(frame.height_pixels(), height * 100, "{name}");
            assert_eq!(
                frame.image_width_pixels(),
                (frame.image_width * 100.0).round() as u32,
                "{name}"
            );
            assert_eq!(
                frame.image_height_pixels(),
                (frame.image_height * 100.0).round() as u32,
                "{name}"
            );
        }
    }

    #[test]
    fn unknown_type_fails() {
        assert!(matches!(
            Frame::from_path("ZZ-24-30.png"),
            Err(FrameError::UnknownFrameType(_))
        ));
    }

    #[test]
    fn unsupported_size_fails() {
        assert!(matches!(
            Frame::from_path("GW-20-20.png"),
            Err(FrameError::UnsupportedFrameSize {
                frame_type: FrameType::GalleryWrap,
                width: 20,
                height: 20,
            })
        ));
    }

    #[test]
    fn retired_type_is_unclassifiable() {
        assert!(matches!(
            Frame::from_path("FP-24-30.png"),
            Err(FrameError::UnclassifiableFrameType(FrameType::FramedPrint))
        ));
    }

    #[test]
    fn invalid_name_fails() {
        assert!(matches!(
            Frame::from_path("/frames/readme.png"),
            Err(FrameError::InvalidFilename(name)) if name == "readme.png"
        ));
    }
}
