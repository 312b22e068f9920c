//! Audio configuration shared by every stage of the forge.
//!
//! The configuration is a validated, immutable value. It is fixed when a
//! forge is constructed, so there is no window in which the channel count or
//! bit depth can change between two synthesized tones.

use serde::{Deserialize, Serialize};

use crate::error::{ForgeError, ForgeResult};

/// Default number of interleaved channels.
pub const DEFAULT_CHANNELS: u16 = 2;
/// Default sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;
/// Default bit depth.
pub const DEFAULT_BITS_PER_SAMPLE: u16 = 16;

/// Channel layout, sample rate and bit depth of the rendered waveform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AudioConfig {
    channels: u16,
    sample_rate: u32,
    bits_per_sample: u16,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            channels: DEFAULT_CHANNELS,
            sample_rate: DEFAULT_SAMPLE_RATE,
            bits_per_sample: DEFAULT_BITS_PER_SAMPLE,
        }
    }
}

impl AudioConfig {
    /// Creates a validated configuration.
    ///
    /// # Arguments
    /// * `channels` - Number of interleaved channels (at least 1)
    /// * `sample_rate` - Sample rate in Hz (positive)
    /// * `bits_per_sample` - Bit depth: 8, 16, 24 or 32
    pub fn new(channels: u16, sample_rate: u32, bits_per_sample: u16) -> ForgeResult<Self> {
        let config = Self {
            channels,
            sample_rate,
            bits_per_sample,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parses a JSON configuration document.
    ///
    /// Missing fields fall back to the defaults; the result is validated the
    /// same way as [`AudioConfig::new`].
    pub fn from_json(json: &str) -> ForgeResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Returns a copy with a different channel count.
    pub fn with_channels(self, channels: u16) -> ForgeResult<Self> {
        Self::new(channels, self.sample_rate, self.bits_per_sample)
    }

    /// Returns a copy with a different sample rate.
    pub fn with_sample_rate(self, sample_rate: u32) -> ForgeResult<Self> {
        Self::new(self.channels, sample_rate, self.bits_per_sample)
    }

    /// Returns a copy with a different bit depth.
    pub fn with_bits_per_sample(self, bits_per_sample: u16) -> ForgeResult<Self> {
        Self::new(self.channels, self.sample_rate, bits_per_sample)
    }

    fn validate(&self) -> ForgeResult<()> {
        validate_bits_per_sample(self.bits_per_sample)?;

        let block_align = u32::from(self.channels) * u32::from(self.bits_per_sample / 8);
        if self.channels == 0 || block_align > u32::from(u16::MAX) {
            return Err(ForgeError::InvalidChannels {
                channels: self.channels,
            });
        }

        let byte_rate = u64::from(self.sample_rate) * u64::from(block_align);
        if self.sample_rate == 0 || byte_rate > u64::from(u32::MAX) {
            return Err(ForgeError::InvalidSampleRate {
                rate: self.sample_rate,
            });
        }

        Ok(())
    }

    /// Number of interleaved channels.
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Bits per sample.
    pub fn bits_per_sample(&self) -> u16 {
        self.bits_per_sample
    }

    /// Bytes per sample (per channel).
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample.div_ceil(8)
    }

    /// Bytes per multi-channel frame.
    pub fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Bytes per second of audio.
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * u32::from(self.block_align())
    }

    /// Size of the unsigned sample range, `2^bits_per_sample`.
    pub fn max_amplitude(&self) -> f64 {
        2f64.powi(i32::from(self.bits_per_sample))
    }
}

/// Checks that `bits` is one of the supported depths: 8, 16, 24 or 32.
pub(crate) fn validate_bits_per_sample(bits: u16) -> ForgeResult<()> {
    if bits == 0 || !bits.is_multiple_of(8) || bits > 32 {
        return Err(ForgeError::InvalidBitsPerSample { bits });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AudioConfig::default();
        assert_eq!(config.channels(), 2);
        assert_eq!(config.sample_rate(), 44100);
        assert_eq!(config.bits_per_sample(), 16);
        assert_eq!(config.block_align(), 4);
        assert_eq!(config.byte_rate(), 176400);
        assert_eq!(config.max_amplitude(), 65536.0);
    }

    #[test]
    fn test_new_accepts_supported_depths() {
        for bits in [8, 16, 24, 32] {
            let config = AudioConfig::new(1, 8000, bits).unwrap();
            assert_eq!(config.bytes_per_sample(), bits / 8);
        }
    }

    #[test]
    fn test_rejects_zero_channels() {
        let err = AudioConfig::new(0, 44100, 16).unwrap_err();
        assert!(matches!(err, ForgeError::InvalidChannels { channels: 0 }));
    }

    #[test]
    fn test_rejects_zero_sample_rate() {
        let err = AudioConfig::new(2, 0, 16).unwrap_err();
        assert!(matches!(err, ForgeError::InvalidSampleRate { rate: 0 }));
    }

    #[test]
    fn test_rejects_bad_bit_depths() {
        for bits in [0, 4, 12, 40, 64] {
            let err = AudioConfig::new(2, 44100, bits).unwrap_err();
            assert!(
                matches!(err, ForgeError::InvalidBitsPerSample { .. }),
                "bits {} should be rejected",
                bits
            );
        }
    }

    #[test]
    fn test_rejects_block_align_overflow() {
        let err = AudioConfig::new(u16::MAX, 44100, 32).unwrap_err();
        assert!(matches!(err, ForgeError::InvalidChannels { .. }));
    }

    #[test]
    fn test_rejects_byte_rate_overflow() {
        let err = AudioConfig::new(8, u32::MAX, 32).unwrap_err();
        assert!(matches!(err, ForgeError::InvalidSampleRate { .. }));
    }

    #[test]
    fn test_with_setters_revalidate() {
        let config = AudioConfig::default().with_channels(1).unwrap();
        assert_eq!(config.channels(), 1);
        assert!(config.with_bits_per_sample(7).is_err());
        assert_eq!(config.with_sample_rate(48000).unwrap().sample_rate(), 48000);
    }

    #[test]
    fn test_from_json_partial() {
        let config = AudioConfig::from_json(r#"{ "channels": 1 }"#).unwrap();
        assert_eq!(config.channels(), 1);
        assert_eq!(config.sample_rate(), DEFAULT_SAMPLE_RATE);
        assert_eq!(config.bits_per_sample(), DEFAULT_BITS_PER_SAMPLE);
    }

    #[test]
    fn test_from_json_validates() {
        let err = AudioConfig::from_json(r#"{ "bits_per_sample": 10 }"#).unwrap_err();
        assert!(matches!(err, ForgeError::InvalidBitsPerSample { bits: 10 }));
    }

    #[test]
    fn test_from_json_rejects_unknown_fields() {
        let err = AudioConfig::from_json(r#"{ "volume": 1 }"#).unwrap_err();
        assert!(matches!(err, ForgeError::ConfigParse(_)));
    }
}
