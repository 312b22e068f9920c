//! Generate command implementation
//!
//! Renders a code into a WAVE file on disk.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::fs;
use std::process::ExitCode;
use wavforge::{generate_from_code, GenerateResult, OverflowWarning};

use crate::settings::ConfigArgs;

/// Machine-readable summary of a generate run.
#[derive(Debug, Serialize)]
pub struct GenerateReport {
    /// Rendered code.
    pub code: String,
    /// Path the file was written to.
    pub output: String,
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Number of frames in the body.
    pub frames: usize,
    /// Total file size in bytes.
    pub bytes: usize,
    /// Duration in seconds.
    pub duration_seconds: f64,
    /// BLAKE3 hash of the PCM body.
    pub pcm_hash: String,
    /// Overflowed frames written as silence.
    pub warnings: Vec<OverflowWarning>,
}

impl GenerateReport {
    fn new(code: &str, output: &str, result: &GenerateResult) -> Self {
        Self {
            code: code.to_string(),
            output: output.to_string(),
            channels: result.wav.channels,
            sample_rate: result.wav.sample_rate,
            bits_per_sample: result.wav.bits_per_sample,
            frames: result.wav.num_frames,
            bytes: result.wav.wav_data.len(),
            duration_seconds: result.wav.duration_seconds(),
            pcm_hash: result.wav.pcm_hash.clone(),
            warnings: result.warnings.clone(),
        }
    }
}

/// Default output path for a code.
pub fn default_output(code: &str) -> String {
    format!("{}.wav", code)
}

/// Run the generate command
///
/// # Arguments
/// * `code` - Code to render
/// * `output` - Output file path (default: `<code>.wav`)
/// * `config_args` - Audio configuration sources
/// * `json_output` - Print a JSON report instead of colored status lines
///
/// # Returns
/// Exit code: 0 success
pub fn run(
    code: &str,
    output: Option<&str>,
    config_args: &ConfigArgs,
    json_output: bool,
) -> Result<ExitCode> {
    let config = config_args.resolve()?;
    let output_path = output
        .map(str::to_string)
        .unwrap_or_else(|| default_output(code));

    if !json_output {
        println!("{} {}", "Generating:".cyan().bold(), code);
    }

    let result = generate_from_code(&config, code)
        .with_context(|| format!("Failed to render code: {}", code))?;

    fs::write(&output_path, &result.wav.wav_data)
        .with_context(|| format!("Failed to write to: {}", output_path))?;

    let report = GenerateReport::new(code, &output_path, &result);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for warning in &report.warnings {
            println!("{} {}", "WARNING".yellow().bold(), warning);
        }
        println!(
            "{} {} ({} frames, {:.3}s, {} bytes)",
            "SUCCESS".green().bold(),
            report.output,
            report.frames,
            report.duration_seconds,
            report.bytes
        );
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output() {
        assert_eq!(default_output("ab12"), "ab12.wav");
    }

    #[test]
    fn test_report_fields() {
        let config = wavforge::AudioConfig::default();
        let result = generate_from_code(&config, "0").unwrap();
        let report = GenerateReport::new("0", "0.wav", &result);

        assert_eq!(report.frames, 3844);
        assert_eq!(report.bytes, 44 + 3844 * 4);
        assert_eq!(report.channels, 2);
        assert!(report.warnings.is_empty());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["sample_rate"], 44100);
        assert_eq!(json["code"], "0");
    }
}
