//! Command-line parsing for the `flappy` binary.

use std::path::PathBuf;

/// Options for a normal interactive run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Fixed RNG seed for reproducible pipe gaps.
    pub seed: Option<u64>,
    /// Tuning file to load instead of `~/.flappy/config.json`.
    pub config: Option<PathBuf>,
    /// Write logs here. Without it nothing is logged.
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Run(RunOptions),
    Help,
    Version,
}

pub const USAGE: &str = "Flappy - Terminal Arcade Game

Usage: flappy [options]

Options:
  --seed <n>         Use a fixed seed for pipe placement
  --config <path>    Load tuning from a JSON file
  --log-file <path>  Append logs to a file (filter with RUST_LOG)
  --version, -v      Show version information
  --help, -h         Show this help message

Controls:
  Space / Up / Enter / Click   Flap (start, or play again after a crash)
  R                            Reset to the start screen
  Q / Esc                      Quit";

/// Parse arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<CliCommand, String> {
    let mut options = RunOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--version" | "-v" => return Ok(CliCommand::Version),
            "--seed" => {
                let value = iter.next().ok_or("--seed requires a value")?;
                let seed = value
                    .parse::<u64>()
                    .map_err(|_| format!("Invalid seed: {}", value))?;
                options.seed = Some(seed);
            }
            "--config" => {
                let value = iter.next().ok_or("--config requires a path")?;
                options.config = Some(PathBuf::from(value));
            }
            "--log-file" => {
                let value = iter.next().ok_or("--log-file requires a path")?;
                options.log_file = Some(PathBuf::from(value));
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    Ok(CliCommand::Run(options))
}
