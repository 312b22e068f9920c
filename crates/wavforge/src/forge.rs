//! Top-level entry point: code in, complete WAVE file out.
//!
//! A [`WavForge`] renders into a single body for its whole lifetime. Calls to
//! [`WavForge::generate`] append; [`WavForge::finish`] consumes the forge and
//! prefixes the header computed from the final frame count.

use crate::config::AudioConfig;
use crate::error::ForgeResult;
use crate::sequence::SequenceGenerator;
use crate::synth::{OverflowWarning, ToneSynthesizer};
use crate::wav::WavResult;

/// Result of rendering a code.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// WAVE file data.
    pub wav: WavResult,
    /// Number of code symbols rendered.
    pub num_symbols: usize,
    /// Frames that overflowed and were written as silence.
    pub warnings: Vec<OverflowWarning>,
}

/// Renders codes into one WAVE file.
#[derive(Debug, Clone)]
pub struct WavForge {
    generator: SequenceGenerator,
    num_symbols: usize,
}

impl Default for WavForge {
    fn default() -> Self {
        Self::new(AudioConfig::default())
    }
}

impl WavForge {
    /// Creates a forge with an empty body.
    pub fn new(config: AudioConfig) -> Self {
        Self::with_capacity(config, 0)
    }

    /// Creates a forge with room for `frames` frames.
    pub fn with_capacity(config: AudioConfig, frames: usize) -> Self {
        Self {
            generator: SequenceGenerator::from_synthesizer(ToneSynthesizer::with_capacity(
                config, frames,
            )),
            num_symbols: 0,
        }
    }

    /// Configuration this forge renders with.
    pub fn config(&self) -> &AudioConfig {
        self.generator.synthesizer().config()
    }

    /// Frames rendered so far.
    pub fn sample_count(&self) -> usize {
        self.generator.synthesizer().sample_count()
    }

    /// Appends the tones for `code` and returns the body so far.
    ///
    /// # Errors
    /// [`crate::ForgeError::InvalidCharacter`] if `code` holds a symbol outside
    /// the alphabet. The body is unchanged in that case.
    pub fn generate(&mut self, code: &str) -> ForgeResult<&[u8]> {
        let symbols = code.chars().count();
        let body = self.generator.generate(code)?;
        self.num_symbols += symbols;
        Ok(body)
    }

    /// Consumes the forge and assembles header + body.
    pub fn finish(self) -> ForgeResult<GenerateResult> {
        let config = *self.config();
        let (body, sample_count, warnings) = self.generator.into_synthesizer().into_parts();

        Ok(GenerateResult {
            wav: WavResult::from_body(&config, &body, sample_count)?,
            num_symbols: self.num_symbols,
            warnings,
        })
    }
}

/// Renders `code` into a complete WAVE file.
///
/// # Arguments
/// * `config` - Channel layout, sample rate and bit depth
/// * `code` - Symbols from [`crate::sequence::ALPHABET`]
///
/// # Returns
/// The assembled file and its metadata
pub fn generate_from_code(config: &AudioConfig, code: &str) -> ForgeResult<GenerateResult> {
    let frames = SequenceGenerator::frame_count(code, config)?;
    let mut forge = WavForge::with_capacity(*config, frames);
    forge.generate(code)?;
    forge.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ForgeError;

    #[test]
    fn test_default_forge() {
        let forge = WavForge::default();
        assert_eq!(*forge.config(), AudioConfig::default());
        assert_eq!(forge.sample_count(), 0);
    }

    #[test]
    fn test_finish_without_generate() {
        let result = WavForge::default().finish().unwrap();
        assert_eq!(result.wav.wav_data.len(), 44);
        assert_eq!(result.num_symbols, 0);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_symbols_accumulate() {
        let mut forge = WavForge::default();
        forge.generate("abc").unwrap();
        forge.generate("d").unwrap();
        assert!(forge.generate("E").is_err());
        let result = forge.finish().unwrap();
        assert_eq!(result.num_symbols, 4);
        assert_eq!(result.wav.num_frames, 4 * 3844);
    }

    #[test]
    fn test_generate_from_code_rejects_before_rendering() {
        let err = generate_from_code(&AudioConfig::default(), "ab-c").unwrap_err();
        assert!(matches!(
            err,
            ForgeError::InvalidCharacter { ch: '-', position: 2 }
        ));
    }

    #[test]
    fn test_generate_from_code_matches_incremental() {
        let config = AudioConfig::new(1, 22050, 16).unwrap();
        let one_shot = generate_from_code(&config, "k3").unwrap();

        let mut forge = WavForge::new(config);
        forge.generate("k").unwrap();
        forge.generate("3").unwrap();
        let incremental = forge.finish().unwrap();

        assert_eq!(one_shot.wav.wav_data, incremental.wav.wav_data);
    }
}
