//! Pencil-sketch stylization of photographs.
//!
//! The crate is split into a pure transform and a thin host around it:
//!
//! 1. **Decode**: upload bytes (JPEG / PNG) -> [`ColorImage`] via [`decode_upload`]
//! 2. **Sketch**: [`ColorImage`] -> [`GrayImage`] via [`sketch`]
//! 3. **Encode**: [`GrayImage`] -> PNG [`Download`] named `artistic_pencil_sketch.png`
//!
//! [`SketchHandler::handle`] runs all three for one [`Upload`] and turns any failure into an
//! [`ErrorNotice`] instead of propagating it.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: the transform is integer/fixed-point except for the final divide, which
//!   uses one rounding rule; the same input always gives bit-identical output.
//! - **No shared state**: every call allocates its own buffers, so handlers can be shared
//!   across threads freely.
//!
//! See [`crate::guide`] for the pixel contract and the exact stage formulas.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod codec;
mod filter;
mod foundation;
mod host;
mod sketch;

/// Walkthrough of the transform and the host boundary.
pub mod guide;

pub use codec::decode::{UploadFormat, decode_upload, sniff_format};
pub use codec::encode::{DOWNLOAD_FILE_NAME, DOWNLOAD_MIME, Download, encode_png};
pub use filter::blur::{GaussianKernel, gaussian_blur, reflect_101, sigma_for_kernel_size};
pub use filter::luma::{luma_u8, to_luma};
pub use filter::point::{DODGE_SCALE, color_dodge, dodge_u8, invert};
pub use foundation::buffer::{COLOR_CHANNELS, ColorImage, GrayImage};
pub use foundation::error::{SketchError, SketchResult};
pub use host::compare::side_by_side;
pub use host::config::HostConfig;
pub use host::handler::{ErrorNotice, Response, SketchHandler, SketchView, Upload};
pub use host::page;
pub use sketch::{SKETCH_KERNEL_SIZE, sketch, sketch_raw};
