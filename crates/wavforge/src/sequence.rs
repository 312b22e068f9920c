//! Code-to-tone-sequence mapping.
//!
//! Each symbol of a code becomes two back-to-back tones: a fixed carrier that
//! marks the start of the symbol, followed by a data tone whose frequency
//! encodes the symbol's position in a 32-entry alphabet. Data tones are spaced
//! 64 Hz apart from 18 kHz upwards so a bank of single-bin tone detectors can
//! tell them apart.

use serde::Serialize;

use crate::config::AudioConfig;
use crate::error::{ForgeError, ForgeResult};
use crate::synth::{frames_for, Tone, ToneSynthesizer};
use crate::wav::MAX_DATA_SIZE;

/// Symbols accepted in a code, in frequency order.
pub const ALPHABET: &str = "0123456789abcdefghijklmnopqrstuv";
/// Data tone frequency of the first symbol, in Hz.
pub const BASE_FREQUENCY: f64 = 18000.0;
/// Spacing between adjacent data tones, in Hz.
pub const FREQUENCY_STEP: f64 = 64.0;
/// Marker tone emitted before every data tone, in Hz.
pub const CARRIER_FREQUENCY: f64 = 17800.0;
/// Length of one carrier + data symbol slot, in seconds.
pub const SYMBOL_PERIOD: f64 = 0.0872;
/// Peak volume of every tone.
pub const TONE_VOLUME: f64 = 0.6;

/// Carrier tone length in seconds.
pub fn carrier_duration() -> f64 {
    SYMBOL_PERIOD / 2.0 * 1.4
}

/// Data tone length in seconds.
pub fn data_duration() -> f64 {
    SYMBOL_PERIOD / 2.0 * 0.6
}

/// Position of `ch` in [`ALPHABET`], if it is a valid symbol.
pub fn symbol_position(ch: char) -> Option<usize> {
    ALPHABET.chars().position(|symbol| symbol == ch)
}

/// Data tone frequency for the symbol at `position`.
pub fn data_frequency(position: usize) -> f64 {
    BASE_FREQUENCY + position as f64 * FREQUENCY_STEP
}

/// Carrier and data frequencies for one symbol of a code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TonePair {
    /// Source symbol.
    pub symbol: char,
    /// Position of the symbol in the alphabet.
    pub position: usize,
    /// Carrier frequency in Hz.
    pub carrier_frequency: f64,
    /// Data frequency in Hz.
    pub data_frequency: f64,
}

impl TonePair {
    /// Builds the pair for an alphabet symbol.
    pub fn for_symbol(symbol: char) -> Option<Self> {
        symbol_position(symbol).map(|position| Self {
            symbol,
            position,
            carrier_frequency: CARRIER_FREQUENCY,
            data_frequency: data_frequency(position),
        })
    }

    /// The carrier tone of this pair.
    pub fn carrier_tone(&self) -> Tone {
        Tone::new(self.carrier_frequency, TONE_VOLUME, carrier_duration())
    }

    /// The data tone of this pair.
    pub fn data_tone(&self) -> Tone {
        Tone::new(self.data_frequency, TONE_VOLUME, data_duration())
    }
}

/// Renders codes into a PCM body through a [`ToneSynthesizer`].
#[derive(Debug, Clone)]
pub struct SequenceGenerator {
    synth: ToneSynthesizer,
}

impl SequenceGenerator {
    /// Creates a generator with an empty body.
    pub fn new(config: AudioConfig) -> Self {
        Self::from_synthesizer(ToneSynthesizer::new(config))
    }

    /// Wraps an existing synthesizer; its body is extended, not replaced.
    pub fn from_synthesizer(synth: ToneSynthesizer) -> Self {
        Self { synth }
    }

    /// Maps a code to its ordered tone schedule.
    ///
    /// The whole code is checked before anything is returned.
    ///
    /// # Errors
    /// [`ForgeError::InvalidCharacter`] for the first symbol outside
    /// [`ALPHABET`]. Matching is case-sensitive.
    pub fn tone_pairs(code: &str) -> ForgeResult<Vec<TonePair>> {
        code.chars()
            .enumerate()
            .map(|(position, ch)| {
                TonePair::for_symbol(ch).ok_or(ForgeError::InvalidCharacter { ch, position })
            })
            .collect()
    }

    /// Number of frames `code` renders to under `config`.
    pub fn frame_count(code: &str, config: &AudioConfig) -> ForgeResult<usize> {
        let symbols = Self::tone_pairs(code)?.len();
        let per_symbol = frames_for(config, carrier_duration()) + frames_for(config, data_duration());
        Ok(symbols * per_symbol)
    }

    /// Appends the tone sequence for `code` and returns the body so far.
    ///
    /// Bodies accumulate: a second call extends the output of the first.
    ///
    /// # Errors
    /// [`ForgeError::InvalidCharacter`] if the code contains a symbol outside
    /// the alphabet, [`ForgeError::DataTooLarge`] if the extended body would
    /// not fit the WAVE size field. The body is left untouched in both cases.
    pub fn generate(&mut self, code: &str) -> ForgeResult<&[u8]> {
        let pairs = Self::tone_pairs(code)?;

        let config = self.synth.config();
        let per_symbol = frames_for(config, carrier_duration()) + frames_for(config, data_duration());
        let bytes = (pairs.len() as u64)
            .saturating_mul(per_symbol as u64)
            .saturating_mul(u64::from(config.block_align()))
            .saturating_add(self.synth.buffer().len() as u64);
        if bytes > u64::from(MAX_DATA_SIZE) {
            return Err(ForgeError::DataTooLarge { bytes });
        }

        for pair in &pairs {
            self.synth.synthesize_tone(&pair.carrier_tone())?;
            self.synth.synthesize_tone(&pair.data_tone())?;
        }

        Ok(self.synth.buffer())
    }

    /// The underlying synthesizer.
    pub fn synthesizer(&self) -> &ToneSynthesizer {
        &self.synth
    }

    /// Consumes the generator, returning the synthesizer.
    pub fn into_synthesizer(self) -> ToneSynthesizer {
        self.synth
    }
}
