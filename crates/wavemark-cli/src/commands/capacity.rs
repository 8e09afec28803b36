use std::path::PathBuf;

use clap::Args;

use super::WatermarkArgs;
use crate::CliResult;

/// Prints how many slots an image offers and the longest text that fits
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// Carrier image
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub image: PathBuf,

    #[command(flatten)]
    pub watermark: WatermarkArgs,
}

impl CapacityArgs {
    pub fn run(self) -> CliResult<()> {
        let options = self.watermark.options();
        let info = wavemark_core::commands::capacity(&self.image, &options)?;

        println!("slots:     {}", info.slots);
        println!("max bytes: {} (reps {})", info.max_payload_bytes, options.reps);

        Ok(())
    }
}
