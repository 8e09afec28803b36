pub mod codec_options;
pub mod image;

pub use codec_options::{BandSelection, OutputFormat, Strategy, WatermarkOptions, DEFAULT_SEED};
