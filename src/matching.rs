//! Pairing artwork with the frames that share its shape.

use crate::frame::{Frame, FrameError};
use crate::shape::{ArtworkClass, artwork_shape};

/// Frames that take artwork of class `artwork`, in input order.
///
/// A plain [`Shape`](crate::types::Shape) matches every frame of that shape
/// except the sizes reserved for sized artwork (24×36 for vertical).
pub fn compatible_frames(artwork: impl Into<ArtworkClass>, frames: &[Frame]) -> Vec<&Frame> {
    let artwork = artwork.into();
    frames
        .iter()
        .filter(|f| artwork.accepts(f.shape, f.width, f.height))
        .collect()
}

/// Frames compatible with an artwork file, using the shape its name declares.
pub fn frames_for_artwork<'a>(
    artwork_file: &str,
    frames: &'a [Frame],
) -> Result<Vec<&'a Frame>, FrameError> {
    let class = artwork_shape(artwork_file)?;
    Ok(compatible_frames(class, frames))
}
