use std::path::PathBuf;

use clap::Parser;

pub const ABOUT: &str = "DU Improved -- See Disk Usage Report with bar charts [program]";

#[derive(Parser, Debug)]
#[command(name = "duim", author, version, about = ABOUT, long_about = None)]
pub struct Cli {
    /// The directory to scan. Defaults to the current directory
    pub target: Option<PathBuf>,

    /// Print sizes in human readable format (e.g. 1K 23M 2G)
    #[arg(short = 'H', long)]
    pub human_readable: bool,

    /// Specify the length of the graph. Default is 20
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    pub length: Option<u16>,

    /// Log more to stderr, repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Show resident memory of running programs
#[derive(Parser, Debug)]
#[command(name = "pidmem", author, version, long_about = None)]
pub struct PidMemCli {
    /// Program names to look up
    #[arg(required = true)]
    pub programs: Vec<String>,

    /// Log more to stderr, repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Expand a leading `~` in the target; non UTF-8 paths are left alone.
pub fn expand_target(target: PathBuf) -> PathBuf {
    match target.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => target,
    }
}

/// Send `log` output from this crate and `module` to stderr; errors and
/// warnings are always shown.
pub fn init_logging(module: &str, verbose: u8) -> Result<(), log::SetLoggerError> {
    stderrlog::new()
        .module("duim")
        .module(module)
        .verbosity(1 + verbose as usize)
        .init()
}
