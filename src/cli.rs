//! Command-line arguments.

use crate::config::AppConfig;
use crate::error::AppError;

pub const HELP: &str = "\
LabelX - the LabelX landing page, in your terminal

Usage: labelx [options]

Options:
  --no-loader       Skip the loading splash
  --seed <u64>      Seed the live metrics for a reproducible run
  --print-config    Print the effective configuration as JSON and exit
  --version, -v     Show version information
  --help, -h        Show this help message

Keys:
  j/k, Up/Down      Scroll
  Space, PgUp/PgDn  Scroll a page
  g/G, Home/End     Jump to top or bottom
  1-7               Jump to a section
  q, Esc            Quit
";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub no_loader: bool,
    pub seed: Option<u64>,
    pub print_config: bool,
}

impl RunOptions {
    /// Command-line flags win over the config file.
    pub fn apply(&self, config: &mut AppConfig) {
        if self.no_loader {
            config.show_loader = false;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(RunOptions),
    Version,
    Help,
}

/// Parses arguments after the program name.
pub fn parse(args: &[String]) -> Result<Command, AppError> {
    let mut options = RunOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--version" | "-v" => return Ok(Command::Version),
            "--help" | "-h" => return Ok(Command::Help),
            "--no-loader" => options.no_loader = true,
            "--print-config" => options.print_config = true,
            "--seed" => {
                let raw = iter
                    .next()
                    .ok_or_else(|| AppError::Usage("--seed needs a value".into()))?;
                let seed = raw
                    .parse::<u64>()
                    .map_err(|_| AppError::Usage(format!("invalid seed: {raw}")))?;
                options.seed = Some(seed);
            }
            other => return Err(AppError::Usage(format!("Unknown argument: {other}"))),
        }
    }

    Ok(Command::Run(options))
}
