//! Image processing in pure Rust, built on the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Composite** | `resize` (Lanczos3) + `overlay` onto a filled canvas |
//! | **Encode** | PNG, flattened to RGB |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for placement math (unit testable)
//! - **Parameters**: Data structures describing a preview
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::{centering_offset, fits_canvas};
pub use operations::{frame_size_mismatch, get_dimensions, plan_composite, render_preview};
pub use params::{Canvas, CompositeParams};
pub use rust_backend::RustBackend;
