//! Embedding domains.
//!
//! A domain owns the subbands of one channel plane and exposes them as a
//! flat sequence of slots, each holding exactly one coefficient. The
//! orchestration in [`crate::embedder`] and [`crate::extractor`] only talks
//! to [`EmbeddingDomain`], the two strategies differ in where a slot's
//! coefficient lives and which [`Quantizer`] writes it:
//!
//! - [`WaveletDomain`]: one slot per wavelet coefficient, [`SignedQim`](crate::qim::SignedQim)
//! - [`BlockDctDomain`]: one slot per 8x8 block, the coefficient at `(u, v)`
//!   of the block's cosine transform, [`MagnitudeSignQim`](crate::qim::MagnitudeSignQim)

mod block_dct;
mod locator;
mod wavelet;

use enum_dispatch::enum_dispatch;

pub use block_dct::BlockDctDomain;
pub use locator::{Band, BandSelection, Grid, Location, Locator};
pub use wavelet::WaveletDomain;

use crate::media::codec_options::{Strategy, WatermarkOptions};
use crate::qim::{QimCodec, Quantizer};
use crate::result::Result;
use crate::transform::Subbands;

#[enum_dispatch]
pub trait EmbeddingDomain {
    /// Number of slots
    fn capacity(&self) -> usize;

    /// The codec bits are written with
    fn quantizer(&self) -> Quantizer;

    /// Coefficient behind `slot`, `None` if the slot lies outside the grid
    fn read_coefficient(&self, slot: usize) -> Option<f64>;

    /// Replaces the coefficient behind `slot`, `false` if the slot lies outside the grid
    fn write_coefficient(&mut self, slot: usize, value: f64) -> bool;

    fn subbands(&self) -> &Subbands;

    /// QIM-writes `bit` into `slot`, `false` if the slot was skipped
    fn embed_bit(&mut self, slot: usize, bit: bool, q: f64) -> bool {
        match self.read_coefficient(slot) {
            Some(c) => {
                let value = self.quantizer().encode(c, q, bit);
                self.write_coefficient(slot, value)
            }
            None => false,
        }
    }

    /// QIM-reads the bit in `slot`, `None` if the slot was skipped
    fn extract_bit(&self, slot: usize, q: f64) -> Option<bool> {
        self.read_coefficient(slot)
            .map(|c| self.quantizer().decode(c, q))
    }
}

#[enum_dispatch(EmbeddingDomain)]
#[derive(Debug, Clone)]
pub enum Domain {
    WaveletDomain,
    BlockDctDomain,
}

impl Domain {
    /// Builds the domain the options ask for on top of `subbands`
    pub fn new(subbands: Subbands, options: &WatermarkOptions) -> Result<Self> {
        Ok(match options.strategy {
            Strategy::Wavelet => WaveletDomain::new(subbands, options.bands).into(),
            Strategy::BlockDct => BlockDctDomain::new(
                subbands,
                options.bands,
                options.block_size,
                options.dct_uv,
            )?
            .into(),
        })
    }

    pub fn into_subbands(self) -> Subbands {
        match self {
            Domain::WaveletDomain(d) => d.into_subbands(),
            Domain::BlockDctDomain(d) => d.into_subbands(),
        }
    }
}
