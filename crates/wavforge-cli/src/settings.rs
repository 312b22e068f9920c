//! Audio configuration resolution for CLI commands.
//!
//! A JSON config file (if given) is loaded first; individual command-line
//! flags then override its fields.

use anyhow::{Context, Result};
use std::fs;
use wavforge::AudioConfig;

/// Configuration sources collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to a JSON config file.
    pub config_path: Option<String>,
    /// Channel count override.
    pub channels: Option<u16>,
    /// Sample rate override in Hz.
    pub sample_rate: Option<u32>,
    /// Bit depth override.
    pub bits_per_sample: Option<u16>,
}

impl ConfigArgs {
    /// Builds the validated audio configuration.
    pub fn resolve(&self) -> Result<AudioConfig> {
        let mut config = match &self.config_path {
            Some(path) => {
                let content = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file: {}", path))?;
                AudioConfig::from_json(&content)
                    .with_context(|| format!("Invalid config file: {}", path))?
            }
            None => AudioConfig::default(),
        };

        if let Some(channels) = self.channels {
            config = config.with_channels(channels)?;
        }
        if let Some(sample_rate) = self.sample_rate {
            config = config.with_sample_rate(sample_rate)?;
        }
        if let Some(bits) = self.bits_per_sample {
            config = config.with_bits_per_sample(bits)?;
        }

        Ok(config)
    }
}
