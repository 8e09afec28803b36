//! Numeric transforms the watermark is written through.
//!
//! A channel [`Plane`] is split by a one level Haar decomposition
//! ([`haar`]) into four subbands. The block strategy additionally moves 8x8
//! tiles of a subband into the cosine domain ([`dct`]).

pub mod dct;
pub mod haar;
mod plane;

pub use dct::{Block, BlockTransform, BLOCK_SIZE};
pub use haar::Subbands;
pub use plane::Plane;
