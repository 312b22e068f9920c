//! Error types for tone synthesis and container assembly.

use thiserror::Error;

/// Result type for forge operations.
pub type ForgeResult<T> = Result<T, ForgeError>;

/// Errors that can occur while configuring, synthesizing or packaging audio.
#[derive(Debug, Error)]
pub enum ForgeError {
    /// Amplitude does not fit the configured bit depth.
    #[error("overflow: {value} won't fit into a {bits_per_sample}-bit sample")]
    Overflow {
        /// The offending amplitude.
        value: f64,
        /// Configured bit depth.
        bits_per_sample: u16,
    },

    /// Code contains a character outside the symbol alphabet.
    #[error("invalid character {ch:?} at position {position}")]
    InvalidCharacter {
        /// The rejected character.
        ch: char,
        /// Zero-based character index inside the code.
        position: usize,
    },

    /// Channel count out of range.
    #[error("invalid channel count: {channels}")]
    InvalidChannels {
        /// The invalid channel count.
        channels: u16,
    },

    /// Sample rate out of range.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Bit depth is not a supported multiple of 8.
    #[error("invalid bits per sample: {bits} (expected 8, 16, 24 or 32)")]
    InvalidBitsPerSample {
        /// The invalid bit depth.
        bits: u16,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// Sample data exceeds what the 32-bit size fields can describe.
    #[error("data chunk of {bytes} bytes does not fit a WAVE container")]
    DataTooLarge {
        /// Size of the data chunk in bytes.
        bytes: u64,
    },

    /// Configuration document could not be parsed.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ForgeError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Returns the stable error code used in machine-readable reports.
    pub fn code(&self) -> &'static str {
        match self {
            ForgeError::Overflow { .. } => "FORGE_001",
            ForgeError::InvalidCharacter { .. } => "FORGE_002",
            ForgeError::InvalidChannels { .. } => "FORGE_003",
            ForgeError::InvalidSampleRate { .. } => "FORGE_004",
            ForgeError::InvalidBitsPerSample { .. } => "FORGE_005",
            ForgeError::InvalidParameter { .. } => "FORGE_006",
            ForgeError::DataTooLarge { .. } => "FORGE_007",
            ForgeError::ConfigParse(_) => "FORGE_008",
            ForgeError::Io(_) => "FORGE_009",
        }
    }
}
