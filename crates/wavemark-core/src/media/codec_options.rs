use std::fmt;
use std::str::FromStr;

use crate::error::WatermarkError;
use crate::result::Result;
use crate::transform::BLOCK_SIZE;

pub use crate::domain::BandSelection;

/// Seed used when none is given explicitly
pub const DEFAULT_SEED: u32 = 1234;

/// Where bits are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Directly into wavelet detail coefficients
    #[default]
    Wavelet,
    /// Into one mid frequency cosine coefficient per 8x8 block of a detail band
    BlockDct,
}

impl FromStr for Strategy {
    type Err = WatermarkError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "wavelet" | "dwt" => Ok(Self::Wavelet),
            "block-dct" | "dwt-dct" | "dct" => Ok(Self::BlockDct),
            _ => Err(WatermarkError::Configuration(format!(
                "unknown strategy `{s}`, expected `wavelet` or `block-dct`"
            ))),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wavelet => write!(f, "wavelet"),
            Self::BlockDct => write!(f, "block-dct"),
        }
    }
}

/// Container of the watermarked image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Png,
    Jpeg,
}

impl FromStr for OutputFormat {
    type Err = WatermarkError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpeg" | "jpg" => Ok(Self::Jpeg),
            _ => Err(WatermarkError::Configuration(format!(
                "unknown output format `{s}`, expected `png` or `jpeg`"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Png => write!(f, "png"),
            Self::Jpeg => write!(f, "jpeg"),
        }
    }
}

/// Options shared by embedding and extraction.
///
/// Extraction only succeeds with the same `strategy`, `channel`, `q`, `seed`,
/// `reps`, `bands` and `dct_uv` that were used for embedding. `output` and
/// `jpeg_quality` only matter when embedding.
#[derive(Debug, Clone, PartialEq)]
pub struct WatermarkOptions {
    pub strategy: Strategy,
    /// Color channel carrying the mark, 0 red, 1 green, 2 blue
    pub channel: usize,
    /// Quantization step
    pub q: f64,
    /// Slot permutation seed, `None` keeps the natural slot order
    pub seed: Option<u32>,
    /// How often every frame bit is repeated
    pub reps: usize,
    pub bands: BandSelection,
    /// Only 8 is supported
    pub block_size: usize,
    /// Frequency position inside each block, block strategy only
    pub dct_uv: (usize, usize),
    pub output: OutputFormat,
    /// JPEG quality 1-100
    pub jpeg_quality: u8,
}

impl Default for WatermarkOptions {
    fn default() -> Self {
        Self::wavelet()
    }
}

impl WatermarkOptions {
    /// Wavelet defaults with `q = 12`.
    ///
    /// This step survives in-memory planes but is too small for image round
    /// trips: bit one sits only `0.02 * q` below the next cell, so rounding to
    /// 8-bit pixels can flip it. Use `with_q(64.0)` or more when the watermark
    /// goes through [`embed`](crate::embed) and [`extract`](crate::extract).
    pub fn wavelet() -> Self {
        Self {
            strategy: Strategy::Wavelet,
            channel: 0,
            q: 12.0,
            seed: Some(DEFAULT_SEED),
            reps: 3,
            bands: BandSelection::Hl,
            block_size: BLOCK_SIZE,
            dct_uv: (2, 3),
            output: OutputFormat::Png,
            jpeg_quality: 95,
        }
    }

    pub fn block_dct() -> Self {
        Self {
            strategy: Strategy::BlockDct,
            q: 18.0,
            reps: 5,
            jpeg_quality: 92,
            ..Self::wavelet()
        }
    }

    /// Defaults of the given strategy
    pub fn for_strategy(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Wavelet => Self::wavelet(),
            Strategy::BlockDct => Self::block_dct(),
        }
    }

    pub fn with_channel(mut self, channel: usize) -> Self {
        self.channel = channel;
        self
    }

    pub fn with_q(mut self, q: f64) -> Self {
        self.q = q;
        self
    }

    pub fn with_seed(mut self, seed: Option<u32>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_reps(mut self, reps: usize) -> Self {
        self.reps = reps;
        self
    }

    pub fn with_bands(mut self, bands: BandSelection) -> Self {
        self.bands = bands;
        self
    }

    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    pub fn with_dct_uv(mut self, u: usize, v: usize) -> Self {
        self.dct_uv = (u, v);
        self
    }

    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality;
        self
    }

    /// Rejects options no embedding or extraction can work with
    pub fn validate(&self) -> Result<()> {
        let fail = |msg: String| Err(WatermarkError::Configuration(msg));

        if self.channel > 2 {
            return fail(format!("channel {} is not one of 0, 1 or 2", self.channel));
        }
        if !self.q.is_finite() || self.q <= 0.0 {
            return fail(format!("quantization step {} must be positive", self.q));
        }
        if self.reps == 0 {
            return fail("repetition factor must be at least 1".to_string());
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return fail(format!("jpeg quality {} is not within 1-100", self.jpeg_quality));
        }
        if self.strategy == Strategy::BlockDct {
            if self.block_size != BLOCK_SIZE {
                return fail(format!(
                    "block size {} is not supported, only {BLOCK_SIZE}",
                    self.block_size
                ));
            }
            let (u, v) = self.dct_uv;
            if u >= self.block_size || v >= self.block_size {
                return fail(format!(
                    "frequency position ({u}, {v}) lies outside a {0}x{0} block",
                    self.block_size
                ));
            }
        }

        Ok(())
    }
}
