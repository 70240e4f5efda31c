//! High-level image operations.
//!
//! These functions combine calculations with backend execution: they turn a
//! [`Frame`] and an artwork path into [`CompositeParams`] and hand those to
//! the backend.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::calculations::centering_offset;
use super::params::{Canvas, CompositeParams};
use crate::frame::{Frame, file_name_of};
use crate::naming::output_file_name;
use std::path::Path;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Get image dimensions using the backend.
pub fn get_dimensions(backend: &impl ImageBackend, path: &Path) -> Result<(u32, u32)> {
    let dims = backend.identify(path)?;
    Ok((dims.width, dims.height))
}

/// Plan a preview without executing it.
///
/// The artwork is scaled to the frame's fit size in pixels and centered on
/// the canvas; the output is named `<artwork base name><frame file name>`
/// inside `output_dir`.
pub fn plan_composite(
    artwork: &Path,
    frame: &Frame,
    output_dir: &Path,
    canvas: Canvas,
) -> CompositeParams {
    let image = (frame.image_width_pixels(), frame.image_height_pixels());
    let (offset_x, offset_y) = centering_offset(canvas.size(), image);
    let artwork_name = file_name_of(artwork);

    CompositeParams {
        artwork: artwork.to_path_buf(),
        frame: frame.path.clone(),
        output: output_dir.join(output_file_name(&artwork_name, &frame.file_name())),
        canvas,
        image_width: image.0,
        image_height: image.1,
        offset_x,
        offset_y,
    }
}

/// Render a planned preview.
///
/// Filesystem errors are retried once; decode and encode failures are
/// deterministic and returned immediately.
pub fn render_preview(backend: &impl ImageBackend, params: &CompositeParams) -> Result<()> {
    match backend.composite(params) {
        Err(BackendError::Io(_)) => backend.composite(params),
        other => other,
    }
}

/// Compare a frame image's pixel size with the canvas.
///
/// Returns the actual dimensions when they differ, `None` when the frame
/// covers the canvas exactly.
pub fn frame_size_mismatch(
    backend: &impl ImageBackend,
    frame: &Frame,
    canvas: Canvas,
) -> Result<Option<Dimensions>> {
    let dims = backend.identify(&frame.path)?;
    if (dims.width, dims.height) == canvas.size() {
        Ok(None)
    } else {
        Ok(Some(dims))
    }
}
