//! Filesystem discovery of artwork and frame mockups.
//!
//! ## Directory Structure
//!
//! ```text
//! batch/
//! ├── frames/                       # Frame mockups, searched recursively
//! │   ├── wraps/
//! │   │   ├── GW-24-30.png
//! │   │   └── GW-36-24.png
//! │   └── acrylic/
//! │       └── AC-20-20.png
//! └── spring/                       # Working directory
//!     ├── config.toml               # Optional
//!     ├── piece-vertical.png        # Artwork (top level only)
//!     ├── study-square.png
//!     └── output/                   # Created by `generate`
//! ```
//!
//! Every `.png` under the frames directory is parsed into a [`Frame`]. Files
//! whose names do not parse are collected as [`RejectedFrame`]s instead of
//! aborting the scan, so one stray asset does not block a whole batch.

use crate::frame::{Frame, FrameError};
use serde::{Serialize, Serializer};
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Directory not found: {0}")]
    MissingDirectory(PathBuf),
}

/// A frame file that could not be turned into a [`Frame`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedFrame {
    pub path: PathBuf,
    #[serde(serialize_with = "as_display")]
    pub error: FrameError,
}

/// Every frame found under the frames directory.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FrameCatalog {
    pub frames: Vec<Frame>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rejected: Vec<RejectedFrame>,
}

pub(crate) fn as_display<S: Serializer, T: Display>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"))
}

/// Artwork files in the working directory: top-level `.png` files, sorted.
pub fn scan_artwork(working_dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if !working_dir.is_dir() {
        return Err(ScanError::MissingDirectory(working_dir.to_path_buf()));
    }

    let mut artwork: Vec<PathBuf> = fs::read_dir(working_dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && is_png(p))
        .filter(|p| {
            !p.file_name()
                .is_some_and(|n| n.to_string_lossy().starts_with('.'))
        })
        .collect();

    artwork.sort();
    Ok(artwork)
}

/// Walk the frames directory recursively and parse every `.png` into a frame.
///
/// Frames are returned in path order.
pub fn scan_frames(frames_dir: &Path) -> Result<FrameCatalog, ScanError> {
    if !frames_dir.is_dir() {
        return Err(ScanError::MissingDirectory(frames_dir.to_path_buf()));
    }

    let mut catalog = FrameCatalog::default();
    for entry in WalkDir::new(frames_dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() || !is_png(entry.path()) {
            continue;
        }
        let path = entry.into_path();
        match Frame::from_path(&path) {
            Ok(frame) => catalog.frames.push(frame),
            Err(error) => catalog.rejected.push(RejectedFrame { path, error }),
        }
    }

    Ok(catalog)
}
