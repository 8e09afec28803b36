use std::path::PathBuf;

use clap::Args;
use log::info;

use super::WatermarkArgs;
use crate::CliResult;

/// Extracts a text watermark and prints it
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Watermarked image
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub image: PathBuf,

    #[command(flatten)]
    pub watermark: WatermarkArgs,
}

impl ExtractArgs {
    pub fn run(self) -> CliResult<()> {
        let report = wavemark_core::commands::extract(&self.image, &self.watermark.options())?;
        if report.skipped_slots > 0 {
            info!("{} slots were skipped", report.skipped_slots);
        }
        println!("{}", report.text);

        Ok(())
    }
}
