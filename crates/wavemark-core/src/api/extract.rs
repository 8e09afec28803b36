use std::path::{Path, PathBuf};

use crate::{commands, WatermarkError, WatermarkOptions};

pub fn prepare() -> ExtractApi {
    ExtractApi::default()
}

#[derive(Default, Debug)]
pub struct ExtractApi {
    image: Option<PathBuf>,
    options: WatermarkOptions,
}

impl ExtractApi {
    pub fn with_options(mut self, options: WatermarkOptions) -> Self {
        self.options = options;
        self
    }

    pub fn from_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<String, WatermarkError> {
        let Some(image) = self.image else {
            return Err(WatermarkError::CarrierNotSet);
        };

        commands::extract(&image, &self.options).map(|report| report.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_insist_on_an_image() {
        assert!(matches!(
            prepare().execute(),
            Err(WatermarkError::CarrierNotSet)
        ));
    }
}
