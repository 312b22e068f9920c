//! WAVE header layout and byte packing.

use crate::config::AudioConfig;
use crate::error::{ForgeError, ForgeResult};

/// Size of the canonical PCM header in bytes.
pub const HEADER_LEN: usize = 44;

/// Bytes of header that follow the `ChunkSize` field, excluding the body.
const RIFF_OVERHEAD: u32 = 36;
/// Largest body whose `ChunkSize` still fits in 32 bits.
pub const MAX_DATA_SIZE: u32 = u32::MAX - RIFF_OVERHEAD;
/// Size of the PCM `fmt ` chunk payload.
const FMT_CHUNK_SIZE: u32 = 16;
/// `AudioFormat` tag for linear PCM.
const FORMAT_PCM: u16 = 1;

/// Field values of a canonical PCM WAVE header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    /// Number of interleaved channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bytes per second.
    pub byte_rate: u32,
    /// Bytes per frame.
    pub block_align: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Size of the sample body in bytes.
    pub data_size: u32,
}

impl WavHeader {
    /// Builds the header for `total_frames` frames rendered with `config`.
    ///
    /// # Errors
    /// [`ForgeError::DataTooLarge`] if the body size does not fit the 32-bit
    /// `ChunkSize` field.
    pub fn new(config: &AudioConfig, total_frames: usize) -> ForgeResult<Self> {
        let bytes = total_frames as u64 * u64::from(config.block_align());
        let data_size = u32::try_from(bytes)
            .ok()
            .filter(|&size| size <= MAX_DATA_SIZE)
            .ok_or(ForgeError::DataTooLarge { bytes })?;

        Ok(Self {
            channels: config.channels(),
            sample_rate: config.sample_rate(),
            byte_rate: config.byte_rate(),
            block_align: config.block_align(),
            bits_per_sample: config.bits_per_sample(),
            data_size,
        })
    }

    /// The RIFF `ChunkSize`: everything after the first 8 bytes.
    ///
    /// Saturates at `u32::MAX` for hand-built headers whose `data_size`
    /// exceeds [`MAX_DATA_SIZE`].
    pub fn chunk_size(&self) -> u32 {
        self.data_size.saturating_add(RIFF_OVERHEAD)
    }

    /// Number of frames described by `data_size`, or 0 when `block_align`
    /// is 0.
    pub fn num_frames(&self) -> usize {
        self.data_size
            .checked_div(u32::from(self.block_align))
            .unwrap_or(0) as usize
    }

    /// Packs the header into its little-endian wire form.
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut bytes = [0u8; HEADER_LEN];
        let mut pos = 0;
        let mut put = |field: &[u8]| {
            bytes[pos..pos + field.len()].copy_from_slice(field);
            pos += field.len();
        };

        // RIFF header
        put(b"RIFF");
        put(&self.chunk_size().to_le_bytes());
        put(b"WAVE");

        // fmt chunk
        put(b"fmt ");
        put(&FMT_CHUNK_SIZE.to_le_bytes());
        put(&FORMAT_PCM.to_le_bytes());
        put(&self.channels.to_le_bytes());
        put(&self.sample_rate.to_le_bytes());
        put(&self.byte_rate.to_le_bytes());
        put(&self.block_align.to_le_bytes());
        put(&self.bits_per_sample.to_le_bytes());

        // data chunk
        put(b"data");
        put(&self.data_size.to_le_bytes());

        bytes
    }
}
