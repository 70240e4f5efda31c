//! Parameter types for image operations.
//!
//! These structs describe *what* to render, not *how*. They are the
//! interface between the [`operations`](super::operations) module (which
//! decides placement) and the [`backend`](super::backend) (which does the
//! pixel work), so a recording mock can stand in for the real backend.

use serde::Serialize;
use std::path::PathBuf;

/// Fixed-size preview canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
    /// RGB fill behind the artwork.
    pub background: [u8; 3],
}

impl Canvas {
    pub fn size(self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// One preview: artwork scaled to `image_width × image_height`, drawn at
/// `(offset_x, offset_y)` on the canvas, with the frame drawn over it at the
/// origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositeParams {
    pub artwork: PathBuf,
    pub frame: PathBuf,
    pub output: PathBuf,
    pub canvas: Canvas,
    pub image_width: u32,
    pub image_height: u32,
    pub offset_x: i64,
    pub offset_y: i64,
}
