use clap::Args;
use wavemark_core::{BandSelection, Strategy, WatermarkOptions};

/// Knobs shared by all subcommands, unset ones fall back to the strategy defaults
#[derive(Args, Debug, Clone)]
pub struct WatermarkArgs {
    /// Embedding domain: `wavelet` or `block-dct`
    #[arg(long, value_name = "strategy", default_value = "wavelet")]
    pub strategy: Strategy,

    /// Color channel carrying the watermark: 0 red, 1 green, 2 blue
    #[arg(long, value_name = "index")]
    pub channel: Option<usize>,

    /// Quantization step, larger survives more distortion but is more visible
    #[arg(short = 'q', long = "step", value_name = "q")]
    pub q: Option<f64>,

    /// Secret seed of the slot order
    #[arg(long, value_name = "seed", conflicts_with = "no_seed")]
    pub seed: Option<u32>,

    /// Use the natural slot order, for testing only
    #[arg(long)]
    pub no_seed: bool,

    /// How often every bit is repeated
    #[arg(long, value_name = "count")]
    pub reps: Option<usize>,

    /// Detail bands carrying the watermark: `HL` or `HL+LH`
    #[arg(long, value_name = "bands")]
    pub bands: Option<BandSelection>,

    /// Vertical frequency inside each 8x8 block (block-dct only)
    #[arg(long = "u", value_name = "u")]
    pub u: Option<usize>,

    /// Horizontal frequency inside each 8x8 block (block-dct only)
    #[arg(long = "v", value_name = "v")]
    pub v: Option<usize>,
}

impl WatermarkArgs {
    pub fn options(&self) -> WatermarkOptions {
        let mut options = WatermarkOptions::for_strategy(self.strategy);

        if let Some(channel) = self.channel {
            options = options.with_channel(channel);
        }
        if let Some(q) = self.q {
            options = options.with_q(q);
        }
        if self.no_seed {
            options = options.with_seed(None);
        } else if let Some(seed) = self.seed {
            options = options.with_seed(Some(seed));
        }
        if let Some(reps) = self.reps {
            options = options.with_reps(reps);
        }
        if let Some(bands) = self.bands {
            options = options.with_bands(bands);
        }
        let (u, v) = options.dct_uv;
        options.with_dct_uv(self.u.unwrap_or(u), self.v.unwrap_or(v))
    }
}
