//! WavForge CLI - renders codes into tone-sequence WAVE files

use clap::{Args, Parser, Subcommand};
use std::process::ExitCode;

use wavforge_cli::commands;
use wavforge_cli::settings::ConfigArgs;

/// WavForge - Tone-sequence WAVE generator
#[derive(Parser)]
#[command(name = "wavforge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Audio configuration flags shared by all commands.
#[derive(Args, Debug, Clone, Default)]
struct AudioArgs {
    /// JSON file with channels, sample_rate and bits_per_sample
    #[arg(long)]
    config: Option<String>,

    /// Number of channels (default: 2)
    #[arg(long)]
    channels: Option<u16>,

    /// Sample rate in Hz (default: 44100)
    #[arg(long)]
    sample_rate: Option<u32>,

    /// Bits per sample: 8, 16, 24 or 32 (default: 16)
    #[arg(long)]
    bits: Option<u16>,
}

impl From<AudioArgs> for ConfigArgs {
    fn from(args: AudioArgs) -> Self {
        Self {
            config_path: args.config,
            channels: args.channels,
            sample_rate: args.sample_rate,
            bits_per_sample: args.bits,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render a code into a WAVE file
    Generate {
        /// Code to render (symbols 0-9 and a-v)
        #[arg(short, long)]
        code: String,

        /// Output file path (default: <code>.wav)
        #[arg(short, long)]
        output: Option<String>,

        #[command(flatten)]
        audio: AudioArgs,

        /// Output a machine-readable JSON report (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the tone schedule of a code without rendering it
    Schedule {
        /// Code to describe
        #[arg(short, long)]
        code: String,

        #[command(flatten)]
        audio: AudioArgs,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            code,
            output,
            audio,
            json,
        } => commands::generate::run(&code, output.as_deref(), &audio.into(), json),
        Commands::Schedule { code, audio, json } => {
            commands::schedule::run(&code, &audio.into(), json)
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_generate() {
        let cli = Cli::try_parse_from([
            "wavforge",
            "generate",
            "--code",
            "ab12",
            "--output",
            "out.wav",
            "--channels",
            "1",
            "--bits",
            "24",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate {
                code,
                output,
                audio,
                json,
            } => {
                assert_eq!(code, "ab12");
                assert_eq!(output.as_deref(), Some("out.wav"));
                assert_eq!(audio.channels, Some(1));
                assert_eq!(audio.bits, Some(24));
                assert_eq!(audio.sample_rate, None);
                assert!(!json);
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_cli_parses_schedule_json() {
        let cli = Cli::try_parse_from(["wavforge", "schedule", "-c", "0", "--json"]).unwrap();
        match cli.command {
            Commands::Schedule { code, json, .. } => {
                assert_eq!(code, "0");
                assert!(json);
            }
            _ => panic!("expected schedule command"),
        }
    }

    #[test]
    fn test_cli_requires_code() {
        assert!(Cli::try_parse_from(["wavforge", "generate"]).is_err());
    }

    #[test]
    fn test_audio_args_convert() {
        let args = AudioArgs {
            config: Some("cfg.json".to_string()),
            sample_rate: Some(8000),
            ..Default::default()
        };
        let config_args: ConfigArgs = args.into();
        assert_eq!(config_args.config_path.as_deref(), Some("cfg.json"));
        assert_eq!(config_args.sample_rate, Some(8000));
        assert_eq!(config_args.channels, None);
    }
}
