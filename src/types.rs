//! Closed vocabularies shared by every stage: frame product types and the
//! orientation classes used to pair artwork with frames.

use serde::Serialize;
use std::fmt;

/// Which shape-partition rule a frame type follows.
///
/// Mat-framed prints and the panel/wrap family were measured separately, and
/// the two groups disagree on how a few horizontal sizes are bucketed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeGroup {
    MatFramed,
    Panel,
}

/// Frame product category, identified by the leading token of a frame filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FrameType {
    /// `AC`: acrylic face mount.
    Acrylic,
    /// `FMP`: framed print with mat.
    FramedMatPrint,
    /// `FTP`: framed textured panel.
    FramedTexturedPanel,
    /// `GW`: gallery wrap canvas.
    GalleryWrap,
    /// `FW`: float-framed wrap.
    FloatWrap,
    /// `FP`: framed print (retired).
    FramedPrint,
    /// `CAB`: canvas board (retired).
    CanvasBoard,
    /// `FMW`: framed metal wrap (retired).
    FramedMetalWrap,
    /// `FFMW`: floating framed metal wrap (retired).
    FloatingFramedMetalWrap,
}

impl FrameType {
    pub const ALL: [FrameType; 9] = [
        FrameType::Acrylic,
        FrameType::FramedMatPrint,
        FrameType::FramedTexturedPanel,
        FrameType::GalleryWrap,
        FrameType::FloatWrap,
        FrameType::FramedPrint,
        FrameType::CanvasBoard,
        FrameType::FramedMetalWrap,
        FrameType::FloatingFramedMetalWrap,
    ];

    /// Map a filename token (hyphens already stripped) to a frame type.
    /// Matching is case-insensitive.
    pub fn from_token(token: &str) -> Option<Self> {
        let upper = token.to_ascii_uppercase();
        Self::ALL.into_iter().find(|t| t.token() == upper)
    }

    pub fn token(self) -> &'static str {
        match self {
            FrameType::Acrylic => "AC",
            FrameType::FramedMatPrint => "FMP",
            FrameType::FramedTexturedPanel => "FTP",
            FrameType::GalleryWrap => "GW",
            FrameType::FloatWrap => "FW",
            FrameType::FramedPrint => "FP",
            FrameType::CanvasBoard => "CAB",
            FrameType::FramedMetalWrap => "FMW",
            FrameType::FloatingFramedMetalWrap => "FFMW",
        }
    }

    /// Classification group, or `None` for retired product lines that no
    /// longer have measured sizes.
    pub fn shape_group(self) -> Option<ShapeGroup> {
        match self {
            FrameType::FramedMatPrint => Some(ShapeGroup::MatFramed),
            FrameType::Acrylic
            | FrameType::FramedTexturedPanel
            | FrameType::GalleryWrap
            | FrameType::FloatWrap => Some(ShapeGroup::Panel),
            FrameType::FramedPrint
            | FrameType::CanvasBoard
            | FrameType::FramedMetalWrap
            | FrameType::FloatingFramedMetalWrap => None,
        }
    }
}

impl fmt::Display for FrameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Orientation class shared by artwork and frames.
///
/// The named horizontal classes exist because those sizes use dedicated
/// mockup art; an artwork must declare one of them to be paired with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Square,
    Vertical,
    Horizontal,
    Horizontal36x24,
    Horizontal40x20,
    Horizontal48x20,
    Horizontal60x20,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Shape::Square => "square",
            Shape::Vertical => "vertical",
            Shape::Horizontal => "horizontal",
            Shape::Horizontal36x24 => "horizontal 36x24",
            Shape::Horizontal40x20 => "horizontal 40x20",
            Shape::Horizontal48x20 => "horizontal 48x20",
            Shape::Horizontal60x20 => "horizontal 60x20",
        };
        f.write_str(label)
    }
}
