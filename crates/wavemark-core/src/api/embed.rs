use std::path::{Path, PathBuf};

use crate::{commands, EmbedReport, WatermarkError, WatermarkOptions};

pub fn prepare() -> EmbedApi {
    EmbedApi::default()
}

#[derive(Default, Debug)]
pub struct EmbedApi {
    text: Option<String>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    options: WatermarkOptions,
}

impl EmbedApi {
    pub fn with_options(mut self, options: WatermarkOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<EmbedReport, WatermarkError> {
        let Some(text) = self.text else {
            return Err(WatermarkError::MissingMessage);
        };
        let Some(image) = self.image else {
            return Err(WatermarkError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(WatermarkError::TargetNotSet);
        };

        commands::embed(&image, &output, &text, &self.options)
    }
}
