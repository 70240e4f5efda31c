//! # Art Preview
//!
//! Batch previews of artwork in frame mockups. Point it at a directory of
//! artwork and it renders each piece into every frame mockup of the same
//! shape, scaled to the size that frame product shows.
//!
//! # Architecture: Plan, Then Composite
//!
//! ```text
//! 1. Scan       frames/ → FrameCatalog        (filename → Frame)
//! 2. Plan       artwork × frames → Plan      (shape match + placement math)
//! 3. Composite  Plan → output/*.png           (scale, draw, encode)
//! ```
//!
//! Everything up to the plan is derived from file names alone: a [`frame::Frame`]
//! is fully determined by its name, and an artwork's shape by its suffix. Only
//! the last step touches pixels, through the [`imaging::ImageBackend`] trait,
//! so the pipeline is tested with a recording mock and the `check` command can
//! print a plan without writing anything.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`naming`] | Frame filename grammar, artwork base names, output names |
//! | [`types`] | `FrameType` and `Shape` enumerations |
//! | [`sizes`] | Fixed table of fit sizes per frame type and nominal size |
//! | [`shape`] | Shape classification for frames and artwork |
//! | [`frame`] | `Frame` value object and `FrameError` |
//! | [`matching`] | Artwork to frame compatibility |
//! | [`scan`] | Artwork listing and recursive frame catalog |
//! | [`imaging`] | Placement math, `ImageBackend` trait, `image`-crate backend |
//! | [`process`] | Batch planning and parallel compositing |
//! | [`config`] | `config.toml` loading, validation and merging |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## A Compiled Size Table
//!
//! How large the artwork appears inside a frame depends on the product: a
//! float wrap shows less of the print than an acrylic face mount of the same
//! nominal size. Those fit sizes are measured, not computed, so they live in a
//! static table in [`sizes`] rather than in config. Tests check it for
//! duplicates and coverage.
//!
//! ## Shape Is a Frame-Type Capability
//!
//! Mat-framed and panel products put some wide sizes into different mockup
//! families, so `(60, 30)` is a different shape depending on the frame type.
//! [`types::FrameType::shape_group`] selects the rules; retired types have no
//! group and cannot be classified.
//!
//! ## One Bad File Never Stops a Batch
//!
//! Frames whose names do not parse are listed as rejected, artwork without a
//! shape suffix is skipped, and a failed render is reported for its pair only.
//! The command still exits non-zero so scripts notice.

pub mod config;
pub mod frame;
pub mod imaging;
pub mod matching;
pub mod naming;
pub mod output;
pub mod process;
pub mod scan;
pub mod shape;
pub mod sizes;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
