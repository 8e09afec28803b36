//! File level operations behind the CLI and the builder API

use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::error;

use crate::{CapacityInfo, EmbedReport, ExtractReport, WatermarkError, WatermarkOptions};

fn read_carrier(image: &Path) -> Result<Vec<u8>, WatermarkError> {
    std::fs::read(image).map_err(|source| {
        error!("Error reading {image:?}: {source}");
        WatermarkError::ReadError { source }
    })
}

/// Embeds `text` into the image at `image` and writes the result to `output`
pub fn embed(
    image: &Path,
    output: &Path,
    text: &str,
    opts: &WatermarkOptions,
) -> Result<EmbedReport, WatermarkError> {
    let carrier = read_carrier(image)?;
    let report = crate::embed_with_report(&carrier, text, opts)?;

    let mut target =
        File::create(output).map_err(|source| WatermarkError::WriteError { source })?;
    target
        .write_all(&report.image)
        .map_err(|source| WatermarkError::WriteError { source })?;

    Ok(report)
}

pub fn extract(image: &Path, opts: &WatermarkOptions) -> Result<ExtractReport, WatermarkError> {
    crate::extract_with_report(&read_carrier(image)?, opts)
}

pub fn capacity(image: &Path, opts: &WatermarkOptions) -> Result<CapacityInfo, WatermarkError> {
    crate::capacity(&read_carrier(image)?, opts)
}
