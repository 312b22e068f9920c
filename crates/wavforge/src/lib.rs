//! WavForge
//!
//! Turns a short alphanumeric code into an audible tone sequence packaged as
//! an uncompressed PCM WAVE file.
//!
//! # Overview
//!
//! Every symbol of the code becomes a 17.8 kHz carrier tone followed by a data
//! tone between 18 kHz and ~20 kHz. Each tone is a sine with linear fade-in and
//! fade-out wings, encoded at the configured bit depth and duplicated into
//! every channel. The resulting body is prefixed with the canonical 44-byte
//! PCM header.
//!
//! # Determinism
//!
//! Rendering is pure computation: the same configuration and code always
//! produce byte-identical output.
//!
//! # Example
//!
//! ```
//! use wavforge::{generate_from_code, AudioConfig};
//!
//! let result = generate_from_code(&AudioConfig::default(), "0v").unwrap();
//! assert_eq!(&result.wav.wav_data[0..4], b"RIFF");
//! assert!(result.warnings.is_empty());
//! ```
//!
//! # Crate Structure
//!
//! - [`generate_from_code()`] - Main entry point
//! - [`config`] - Validated audio configuration
//! - [`encoder`] - Amplitude to little-endian PCM bytes
//! - [`envelope`] - Fade-in / fade-out amplitude envelope
//! - [`synth`] - Sine tone synthesis into an interleaved body
//! - [`sequence`] - Code to carrier/data tone schedule
//! - [`wav`] - WAVE header and file assembly

pub mod config;
pub mod encoder;
pub mod envelope;
pub mod error;
pub mod forge;
pub mod sequence;
pub mod synth;
pub mod wav;

// Re-export main types at crate root
pub use config::AudioConfig;
pub use encoder::SampleEncoder;
pub use error::{ForgeError, ForgeResult};
pub use forge::{generate_from_code, GenerateResult, WavForge};
pub use sequence::{SequenceGenerator, TonePair};
pub use synth::{OverflowWarning, Tone, ToneSynthesizer};
pub use wav::{WavHeader, WavResult};
