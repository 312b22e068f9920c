//! Per-sample amplitude to little-endian PCM encoding.
//!
//! Amplitudes are real values in the unsigned range `[0, 2^bits)`. Negative
//! amplitudes are wrapped into that range by adding `2^bits`, which yields the
//! two's-complement bit pattern of the (truncated) signed value.

use crate::config::{validate_bits_per_sample, AudioConfig};
use crate::error::{ForgeError, ForgeResult};

/// Encodes single amplitudes at a fixed bit depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleEncoder {
    bits_per_sample: u16,
}

impl SampleEncoder {
    /// Creates an encoder for the given bit depth.
    ///
    /// # Errors
    /// [`ForgeError::InvalidBitsPerSample`] unless `bits_per_sample` is 8, 16,
    /// 24 or 32.
    pub fn new(bits_per_sample: u16) -> ForgeResult<Self> {
        validate_bits_per_sample(bits_per_sample)?;
        Ok(Self { bits_per_sample })
    }

    /// Creates an encoder matching a configuration's bit depth.
    pub fn from_config(config: &AudioConfig) -> Self {
        // AudioConfig only holds validated depths.
        Self {
            bits_per_sample: config.bits_per_sample(),
        }
    }

    /// Bit depth this encoder packs to.
    pub fn bits_per_sample(&self) -> u16 {
        self.bits_per_sample
    }

    /// Length in bytes of every encoded sample, `ceil(bits / 8)`.
    pub fn width(&self) -> usize {
        usize::from(self.bits_per_sample.div_ceil(8))
    }

    /// Size of the unsigned range, `2^bits`.
    pub fn max_amplitude(&self) -> f64 {
        2f64.powi(i32::from(self.bits_per_sample))
    }

    /// Encodes one amplitude into a freshly allocated byte string.
    ///
    /// # Errors
    /// [`ForgeError::Overflow`] if the amplitude cannot be represented.
    pub fn encode(&self, amplitude: f64) -> ForgeResult<Vec<u8>> {
        let mut bytes = Vec::with_capacity(self.width());
        self.encode_into(amplitude, &mut bytes)?;
        Ok(bytes)
    }

    /// Appends the encoding of one amplitude to `out`.
    ///
    /// Exactly [`width`](Self::width) bytes are appended on success and
    /// nothing is appended on error.
    pub fn encode_into(&self, amplitude: f64, out: &mut Vec<u8>) -> ForgeResult<()> {
        let mut value = self.wrap(amplitude)?.floor() as u64;
        for _ in 0..self.width() {
            out.push((value % 256) as u8);
            value /= 256;
        }
        Ok(())
    }

    /// Maps an amplitude into `[0, 2^bits)`.
    fn wrap(&self, amplitude: f64) -> ForgeResult<f64> {
        let overflow = || ForgeError::Overflow {
            value: amplitude,
            bits_per_sample: self.bits_per_sample,
        };

        if !amplitude.is_finite() {
            return Err(overflow());
        }

        let max = self.max_amplitude();
        let mut value = amplitude;
        if value < 0.0 {
            value += max;
            // Still negative: magnitude beyond the representable range.
            if value < 0.0 {
                return Err(overflow());
            }
        }

        if value == max {
            Ok(0.0)
        } else if value > max {
            Err(overflow())
        } else {
            Ok(value)
        }
    }

    /// Reverses the little-endian packing of an encoded sample.
    ///
    /// `bytes` is expected to be one encoded sample, at most
    /// [`width`](Self::width) bytes (4 for 32-bit samples); anything beyond
    /// 8 bytes cannot be represented in the `u64` result.
    pub fn decode(&self, bytes: &[u8]) -> u64 {
        debug_assert!(
            bytes.len() <= self.width(),
            "decoding {} bytes with a {}-byte sample width",
            bytes.len(),
            self.width()
        );
        bytes
            .iter()
            .rev()
            .fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte))
    }
}
