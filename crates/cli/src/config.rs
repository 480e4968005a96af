//! Command-line configuration and entry point.

use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use crate::commands::Command;

/// Validate, compare and sort hex-encoded node ids.
#[derive(Parser, Debug)]
#[command(name = "nodeid")]
#[command(author, version, about, long_about = None)]
pub struct CliConfig {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    /// Log level implied by `--verbose`.
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    /// Run the selected command, printing its output.
    ///
    /// Fails if the command fails or any input id was invalid.
    pub fn run(&self) -> anyhow::Result<()> {
        init_logging(self.log_level());
        info!(command = ?self.command, "running");

        let result = self.command.execute()?;
        for line in &result.lines {
            println!("{}", line);
        }
        if result.invalid > 0 {
            anyhow::bail!("{} invalid node id(s)", result.invalid);
        }
        Ok(())
    }
}

// RUST_LOG wins over the --verbose default.
fn init_logging(level: Level) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
