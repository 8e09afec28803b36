//! # Wavemark Core API
//!
//! Embeds a short text invisibly into one color channel of an image and
//! reads it back, robust against moderate JPEG re-compression.
//!
//! The channel is decomposed by a one level Haar wavelet transform. A keyed
//! permutation picks the detail coefficients (or 8x8 blocks of them) that
//! carry the bits, every bit is written by quantization index modulation and
//! repeated for majority voting. See [`WatermarkOptions`] for the knobs,
//! embedding and extraction have to agree on all of them.
//!
//! The wavelet defaults are tuned for in-memory planes. Images need a larger
//! step, see [`WatermarkOptions::wavelet`].
//!
//! # Usage Examples
//!
//! ## In memory
//!
//! ```rust
//! use image::{ImageBuffer, Rgba};
//! use wavemark_core::WatermarkOptions;
//!
//! let carrier = ImageBuffer::from_fn(256, 256, |x, y| Rgba([((x + y) / 4 + 60) as u8, 90, 160, 255]));
//! let mut png = std::io::Cursor::new(Vec::new());
//! carrier.write_to(&mut png, image::ImageFormat::Png).unwrap();
//!
//! let options = WatermarkOptions::block_dct();
//! let marked = wavemark_core::embed(png.get_ref(), "wm", &options).unwrap();
//!
//! assert_eq!(wavemark_core::extract(&marked, &options).unwrap(), "wm");
//! ```
//!
//! ## Files
//!
//! ```rust,no_run
//! wavemark_core::api::embed::prepare()
//!     .with_text("Hello, World!")
//!     .with_image("carrier.png")
//!     .with_output("marked.png")
//!     .execute()
//!     .expect("Failed to embed watermark");
//!
//! let text = wavemark_core::api::extract::prepare()
//!     .from_image("marked.png")
//!     .execute()
//!     .expect("Failed to extract watermark");
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod commands;
pub mod domain;
pub mod embedder;
pub mod error;
pub mod extractor;
pub mod media;
pub mod payload;
pub mod permutation;
pub mod qim;
pub mod result;
pub mod transform;

pub use crate::embedder::{
    capacity, embed, embed_plane, embed_with_report, plane_capacity, CapacityInfo, EmbedReport,
    EmbedStats,
};
pub use crate::error::WatermarkError;
pub use crate::extractor::{extract, extract_plane, extract_with_report, ExtractReport};
pub use crate::media::{BandSelection, OutputFormat, Strategy, WatermarkOptions};
pub use crate::result::Result;
pub use crate::transform::Plane;
