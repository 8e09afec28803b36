use std::path::PathBuf;

use clap::Args;
use log::info;
use wavemark_core::OutputFormat;

use super::WatermarkArgs;
use crate::CliResult;

/// Embeds a text watermark into a PNG or JPEG image
#[derive(Args, Debug)]
pub struct EmbedArgs {
    /// Carrier image, used readonly
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub image: PathBuf,

    /// Watermarked image will be stored as file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// The text to embed
    #[arg(short, long, value_name = "text", required = true)]
    pub message: String,

    /// Output format `png` or `jpeg`, by default derived from the output file extension
    #[arg(long, value_name = "format")]
    pub format: Option<OutputFormat>,

    /// JPEG quality 1-100
    #[arg(long, value_name = "quality")]
    pub quality: Option<u8>,

    #[command(flatten)]
    pub watermark: WatermarkArgs,
}

impl EmbedArgs {
    fn output_format(&self) -> OutputFormat {
        self.format
            .or_else(|| {
                self.write_to_file
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .and_then(|ext| ext.parse().ok())
            })
            .unwrap_or_default()
    }

    pub fn run(self) -> CliResult<()> {
        let mut options = self.watermark.options().with_output(self.output_format());
        if let Some(quality) = self.quality {
            options = options.with_jpeg_quality(quality);
        }

        let report = wavemark_core::commands::embed(
            &self.image,
            &self.write_to_file,
            &self.message,
            &options,
        )?;
        info!(
            "wrote {} of {} slots to {:?}",
            report.frame_bits, report.capacity, self.write_to_file
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::cli::{CliArgs, Commands};

    fn embed_args(args: &[&str]) -> super::EmbedArgs {
        let args = ["wavemark", "embed", "-i", "in.png", "-m", "hi"]
            .into_iter()
            .chain(args.iter().copied());
        match CliArgs::try_parse_from(args).unwrap().command {
            Commands::Embed(args) => args,
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn format_should_follow_the_output_extension() {
        use wavemark_core::OutputFormat::*;

        assert_eq!(embed_args(&["-o", "out.png"]).output_format(), Png);
        assert_eq!(embed_args(&["-o", "out.JPG"]).output_format(), Jpeg);
        assert_eq!(embed_args(&["-o", "out"]).output_format(), Png);
        assert_eq!(
            embed_args(&["-o", "out.png", "--format", "jpeg"]).output_format(),
            Jpeg
        );
    }
}
