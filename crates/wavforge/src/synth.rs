//! Envelope-shaped sine tone synthesis.
//!
//! [`ToneSynthesizer`] owns the growing PCM body and the running frame count.
//! Every call appends whole frames: one encoded sample, duplicated into each
//! channel. The body length is always `sample_count * block_align`.

use std::f64::consts::PI;
use std::fmt;

use serde::Serialize;

use crate::config::AudioConfig;
use crate::encoder::SampleEncoder;
use crate::envelope::FadeEnvelope;
use crate::error::{ForgeError, ForgeResult};
use crate::wav::MAX_DATA_SIZE;

/// A single sine tone request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tone {
    /// Frequency in Hz.
    pub frequency: f64,
    /// Peak volume as a fraction of half the sample range.
    pub volume: f64,
    /// Duration in seconds.
    pub duration: f64,
}

impl Tone {
    /// Creates a tone.
    pub fn new(frequency: f64, volume: f64, duration: f64) -> Self {
        Self {
            frequency,
            volume,
            duration,
        }
    }
}

/// A frame whose amplitude did not fit the bit depth and was written as silence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverflowWarning {
    /// Index of the frame within the whole body.
    pub frame: usize,
    /// Amplitude that failed to encode.
    pub value: f64,
}

impl fmt::Display for OverflowWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "frame {}: amplitude {} overflowed, written as silence",
            self.frame, self.value
        )
    }
}

/// Appends sine tones to an interleaved PCM body.
#[derive(Debug, Clone)]
pub struct ToneSynthesizer {
    config: AudioConfig,
    encoder: SampleEncoder,
    buffer: Vec<u8>,
    sample_count: usize,
    warnings: Vec<OverflowWarning>,
}

impl ToneSynthesizer {
    /// Creates an empty synthesizer.
    pub fn new(config: AudioConfig) -> Self {
        Self::with_capacity(config, 0)
    }

    /// Creates an empty synthesizer with room for `frames` frames.
    pub fn with_capacity(config: AudioConfig, frames: usize) -> Self {
        Self {
            config,
            encoder: SampleEncoder::from_config(&config),
            buffer: Vec::with_capacity(frames.saturating_mul(usize::from(config.block_align()))),
            sample_count: 0,
            warnings: Vec::new(),
        }
    }

    /// Configuration this synthesizer renders with.
    pub fn config(&self) -> &AudioConfig {
        &self.config
    }

    /// Number of frames a tone of `seconds` occupies.
    pub fn frames_for(&self, seconds: f64) -> usize {
        frames_for(&self.config, seconds)
    }

    /// Appends one tone. See [`synthesize`](Self::synthesize).
    pub fn synthesize_tone(&mut self, tone: &Tone) -> ForgeResult<()> {
        self.synthesize(tone.frequency, tone.volume, tone.duration)
    }

    /// Appends one envelope-shaped sine tone to the body.
    ///
    /// # Arguments
    /// * `frequency` - Tone frequency in Hz
    /// * `volume` - Peak volume, `1.0` reaching half the sample range
    /// * `seconds` - Tone duration
    ///
    /// # Errors
    /// [`ForgeError::InvalidParameter`] for non-finite values, a negative
    /// volume or duration, or a duration whose frames would push the body past
    /// the WAVE data limit ([`MAX_DATA_SIZE`] bytes). Nothing is appended in
    /// that case. Samples that
    /// overflow the bit depth are not errors: they are written as silence and
    /// recorded in [`warnings`](Self::warnings).
    pub fn synthesize(&mut self, frequency: f64, volume: f64, seconds: f64) -> ForgeResult<()> {
        if !frequency.is_finite() {
            return Err(ForgeError::invalid_param("frequency", "must be finite"));
        }
        if !volume.is_finite() || volume < 0.0 {
            return Err(ForgeError::invalid_param(
                "volume",
                format!("must be a non-negative finite number, got {}", volume),
            ));
        }
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(ForgeError::invalid_param(
                "duration",
                format!("must be a non-negative finite number, got {}", seconds),
            ));
        }

        let total = self.frames_for(seconds);
        let room = (MAX_DATA_SIZE as usize).saturating_sub(self.buffer.len());
        let bytes = total
            .checked_mul(usize::from(self.config.block_align()))
            .filter(|&bytes| bytes <= room)
            .ok_or_else(|| {
                ForgeError::invalid_param(
                    "duration",
                    format!(
                        "{} s at {} Hz exceeds the {} byte WAVE data limit",
                        seconds,
                        self.config.sample_rate(),
                        MAX_DATA_SIZE
                    ),
                )
            })?;

        let envelope = FadeEnvelope::new(total);
        let half_range = self.encoder.max_amplitude() / 2.0;
        let sample_rate = f64::from(self.config.sample_rate());
        let width = self.encoder.width();
        let channels = usize::from(self.config.channels());

        self.buffer.reserve(bytes);

        for i in 0..total {
            let t = i as f64;
            let amplitude = volume
                * half_range
                * envelope.ratio(i)
                * (2.0 * PI * t * frequency / sample_rate).sin();

            let start = self.buffer.len();
            if self.encoder.encode_into(amplitude, &mut self.buffer).is_err() {
                self.buffer.resize(start + width, 0);
                self.warnings.push(OverflowWarning {
                    frame: self.sample_count,
                    value: amplitude,
                });
            }
            for _ in 1..channels {
                self.buffer.extend_from_within(start..start + width);
            }

            self.sample_count += 1;
        }

        Ok(())
    }

    /// Frames emitted so far.
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Interleaved PCM body emitted so far.
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Overflowed frames recorded so far.
    pub fn warnings(&self) -> &[OverflowWarning] {
        &self.warnings
    }

    /// Consumes the synthesizer, returning `(body, sample_count, warnings)`.
    pub fn into_parts(self) -> (Vec<u8>, usize, Vec<OverflowWarning>) {
        (self.buffer, self.sample_count, self.warnings)
    }
}

/// Number of frames a tone of `seconds` occupies at the configured rate.
///
/// Durations too long for `usize` saturate at `usize::MAX`.
pub fn frames_for(config: &AudioConfig, seconds: f64) -> usize {
    (f64::from(config.sample_rate()) * seconds).floor() as usize
}
