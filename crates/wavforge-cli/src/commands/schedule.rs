//! Schedule command implementation
//!
//! Prints the carrier/data tone schedule for a code without rendering it.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::process::ExitCode;
use wavforge::{SequenceGenerator, Tone, TonePair};

use crate::settings::ConfigArgs;

/// One symbol slot of the schedule.
#[derive(Debug, Serialize)]
pub struct ScheduleEntry {
    /// Source symbol.
    pub symbol: char,
    /// Position of the symbol in the alphabet.
    pub position: usize,
    /// Marker tone.
    pub carrier: Tone,
    /// Payload tone.
    pub data: Tone,
}

impl From<&TonePair> for ScheduleEntry {
    fn from(pair: &TonePair) -> Self {
        Self {
            symbol: pair.symbol,
            position: pair.position,
            carrier: pair.carrier_tone(),
            data: pair.data_tone(),
        }
    }
}

/// Machine-readable schedule.
#[derive(Debug, Serialize)]
pub struct ScheduleReport {
    /// Source code.
    pub code: String,
    /// Total frames the code renders to.
    pub frames: usize,
    /// Symbol slots in playback order.
    pub entries: Vec<ScheduleEntry>,
}

/// Builds the schedule report for a code.
pub fn build_report(code: &str, config_args: &ConfigArgs) -> Result<ScheduleReport> {
    let config = config_args.resolve()?;
    let pairs = SequenceGenerator::tone_pairs(code)
        .with_context(|| format!("Invalid code: {}", code))?;
    let frames = SequenceGenerator::frame_count(code, &config)?;

    Ok(ScheduleReport {
        code: code.to_string(),
        frames,
        entries: pairs.iter().map(ScheduleEntry::from).collect(),
    })
}

/// Run the schedule command
///
/// # Arguments
/// * `code` - Code to describe
/// * `config_args` - Audio configuration sources
/// * `json_output` - Print JSON instead of a table
///
/// # Returns
/// Exit code: 0 success
pub fn run(code: &str, config_args: &ConfigArgs, json_output: bool) -> Result<ExitCode> {
    let report = build_report(code, config_args)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {}", "Schedule:".cyan().bold(), report.code);
    for entry in &report.entries {
        println!(
            "  {} (#{:>2})  carrier {:>8.1} Hz {:.5}s  data {:>8.1} Hz {:.5}s",
            entry.symbol.to_string().bold(),
            entry.position,
            entry.carrier.frequency,
            entry.carrier.duration,
            entry.data.frequency,
            entry.data.duration
        );
    }
    println!("{} frames", report.frames);

    Ok(ExitCode::SUCCESS)
}
