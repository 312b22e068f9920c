//! Assembled WAVE file with its metadata.

use crate::config::AudioConfig;
use crate::error::{ForgeError, ForgeResult};

use super::header::{WavHeader, HEADER_LEN};
use super::writer::assemble;

/// BLAKE3 hex digest of a PCM body.
pub fn compute_pcm_hash(body: &[u8]) -> String {
    blake3::hash(body).to_hex().to_string()
}

/// Result of packaging a PCM body.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAVE file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the body only.
    pub pcm_hash: String,
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Number of multi-channel frames.
    pub num_frames: usize,
}

impl WavResult {
    /// Packages `body`, which holds `num_frames` frames rendered with `config`.
    pub fn from_body(config: &AudioConfig, body: &[u8], num_frames: usize) -> ForgeResult<Self> {
        let header = WavHeader::new(config, num_frames)?;
        if body.len() != header.data_size as usize {
            return Err(ForgeError::invalid_param(
                "body",
                format!(
                    "{} bytes do not hold {} frames of {} bytes",
                    body.len(),
                    num_frames,
                    header.block_align
                ),
            ));
        }

        Ok(Self {
            wav_data: assemble(&header, body),
            pcm_hash: compute_pcm_hash(body),
            channels: config.channels(),
            sample_rate: config.sample_rate(),
            bits_per_sample: config.bits_per_sample(),
            num_frames,
        })
    }

    /// The 44 header bytes.
    pub fn header_bytes(&self) -> &[u8] {
        &self.wav_data[..HEADER_LEN]
    }

    /// The PCM body.
    pub fn body(&self) -> &[u8] {
        &self.wav_data[HEADER_LEN..]
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_frames as f64 / f64::from(self.sample_rate)
    }
}
