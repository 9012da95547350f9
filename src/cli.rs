//! CLI argument parsing for Fdtrip

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "fdtrip")]
#[command(version)]
#[command(
    about = "Write a fixed record to a file with raw syscalls, read it back, print it, delete it",
    long_about = None
)]
pub struct Cli {
    /// Enable debug tracing to stderr
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,
}
