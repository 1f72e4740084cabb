//! # Pencil sketch guide
//!
//! A short tour of how a photograph becomes a sketch, and where the host boundary sits.
//!
//! ---
//!
//! ## Pixel contract
//!
//! - [`ColorImage`](crate::ColorImage): RGB8, row-major, channel-interleaved, no row padding.
//!   Pixel `(x, y)` starts at byte `(y * width + x) * 3`.
//! - [`GrayImage`](crate::GrayImage): one `u8` per pixel at `y * width + x`.
//! - Both are at least 1x1 and validated at construction. Raw input claiming any channel
//!   count other than 3 fails with [`SketchError::InvalidInputKind`](crate::SketchError).
//!
//! ---
//!
//! ## The transform
//!
//! [`sketch`](crate::sketch) runs five stages, each producing a new plane:
//!
//! | stage | formula |
//! |-------|---------|
//! | luma `G` | `(4899 R + 9617 G + 1868 B + 8192) >> 14` |
//! | invert `I` | `255 - G` |
//! | blur `B` | separable Gaussian, 21 taps, sigma `0.3 * ((21 - 1) * 0.5 - 1) + 0.8 = 3.5` |
//! | invert `IB` | `255 - B` |
//! | dodge | `round(G * 256.0 / max(IB, 1))`, ties to even, saturated to `[0, 255]` |
//!
//! The blur uses Q16 taps that sum to exactly `65536`, so flat regions pass through unchanged.
//! Borders mirror without repeating the edge sample (reflect-101); an axis of length 1 always
//! samples index 0.
//!
//! Why it looks like pencil: on a flat area `B == I`, so `IB == G` and the dodge saturates to
//! white. Near an edge the blur pulls `IB` above `G` on the dark side, leaving a gray stroke.
//! Pure black stays black because `G == 0` whatever the denominator.
//!
//! ---
//!
//! ## Host boundary
//!
//! [`SketchHandler`](crate::SketchHandler) is called once per upload:
//!
//! ```no_run
//! use pencil_sketch::{Response, SketchHandler, Upload};
//!
//! let handler = SketchHandler::default();
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! match handler.handle(&Upload::named("photo.jpg", bytes)) {
//!     Response::Sketched(view) => {
//!         std::fs::write(&view.download.file_name, &view.download.bytes).unwrap();
//!     }
//!     Response::Failed(notice) => eprintln!("{}\n{}", notice.message, notice.detail),
//! }
//! ```
//!
//! Upload limits and the comparison layout come from [`HostConfig`](crate::HostConfig). The
//! transform itself takes no parameters.
