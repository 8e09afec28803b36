use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatermarkError {
    /// Represents options that cannot be used for embedding or extraction,
    /// for example a block size other than 8 or a color channel beyond blue
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Represents a frame that does not fit into the slots the image offers
    #[error("Capacity error: the watermark needs {required} slots but the image only offers {available}")]
    Capacity { required: usize, available: usize },

    /// Represents a decoded length header that cannot be right for this image and these options.
    /// Usually a wrong seed, wrong options or no watermark at all
    #[error("Invalid watermark length {byte_len}: {required} slots needed, {capacity} available")]
    LengthValidation {
        byte_len: u32,
        required: usize,
        capacity: usize,
    },

    /// Represents a payload that could not be rebuilt to the declared length
    #[error("Extraction failed: expected {expected} bytes, got {actual}")]
    Reconstruction { expected: usize, actual: usize },

    /// Represents a bit sequence that cannot be packed as requested
    #[error("Framing error: {0}")]
    Framing(String),

    /// Represents an invalid carrier image. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a carrier image that is too small to be decomposed at all
    #[error("Image of {width}x{height} is too small to carry a watermark")]
    ImageTooSmall { width: u32, height: u32 },

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier image set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing watermark text")]
    MissingMessage,
}
