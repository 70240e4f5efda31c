//! Filename conventions for frames, artwork and generated previews.
//!
//! The filename is the only source of frame identity. A frame file is named
//! `<type>[-<color>]<width><height>.png`, where the size fields are two
//! digits each and may be separated by hyphens:
//! - `GW-24-30.png` → type=GW, color=None, 24×30
//! - `FMP-02-30-40.png` → type=FMP, color=Some("02"), 30×40
//! - `AC2020.png` → type=AC, color=None, 20×20
//!
//! Artwork files carry a shape suffix instead (see
//! [`artwork_shape`](crate::shape::artwork_shape)); the part before the first
//! hyphen is the artwork's base name, and previews are named
//! `<base name><frame file name>`.

use crate::frame::FrameError;
use crate::types::FrameType;
use regex::Regex;
use std::sync::LazyLock;

static FRAME_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z-]{2,5}?)(?:-(\d{2}))??-?(\d{2})-?(\d{2})(?i:\.png)$")
        .expect("frame filename pattern must compile")
});

/// Result of parsing a frame filename like `FMP-02-30-40.png`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFrameName {
    pub frame_type: FrameType,
    /// Two-digit color/variant code, if present.
    pub color: Option<String>,
    pub width: u32,
    pub height: u32,
}

/// Parse a frame filename (no directory components).
pub fn parse_frame_name(file_name: &str) -> Result<ParsedFrameName, FrameError> {
    let caps = FRAME_NAME
        .captures(file_name)
        .ok_or_else(|| FrameError::InvalidFilename(file_name.to_string()))?;

    let token = caps[1].replace('-', "");
    let frame_type =
        FrameType::from_token(&token).ok_or(FrameError::UnknownFrameType(token.clone()))?;

    let width = caps[3].parse().unwrap_or_default();
    let height = caps[4].parse().unwrap_or_default();

    Ok(ParsedFrameName {
        frame_type,
        color: caps.get(2).map(|m| m.as_str().to_string()),
        width,
        height,
    })
}

/// Base name of an artwork file: the stem up to the first hyphen, trimmed.
///
/// - `"piece-vertical.png"` → `"piece"`
/// - `"Sunset Study - square.png"` → `"Sunset Study"`
/// - `"untitled.png"` → `"untitled"`
pub fn artwork_base_name(file_name: &str) -> &str {
    let stem = file_name
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(file_name);
    stem.split('-').next().unwrap_or(stem).trim()
}

/// Filename of the preview rendered from `artwork_file` into `frame_file`.
pub fn output_file_name(artwork_file: &str, frame_file: &str) -> String {
    format!("{}{}", artwork_base_name(artwork_file), frame_file)
}
