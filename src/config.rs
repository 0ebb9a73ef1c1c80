use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Command-line options.
#[derive(Parser, Debug)]
#[command(version, about = "Fan quiz: answer correctly, earn a discount", long_about = None)]
pub struct Args {
    /// Do not ring the terminal bell when a discount is earned
    #[arg(short, long)]
    pub mute: bool,

    /// Write logs to this file (logging is off otherwise)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Minimum level written to the log file
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: LevelFilter,
}

/// Runtime settings resolved from [`Args`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub chime: bool,
    pub log_file: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chime: true,
            log_file: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            chime: !args.mute,
            log_file: args.log_file,
            log_level: args.log_level,
        }
    }
}
