//! Entry point for the `habit` command
//!
//! Sets up logging, parses arguments, runs one command and maps failures to
//! an exit code.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use habit_tracker::cli::{self, Cli, Output};

fn init_logging(debug: bool, verbose: bool) {
    let log_level = if verbose {
        "debug"
    } else if debug {
        "info"
    } else {
        "warn"
    };

    // RUST_LOG wins over the command-line flags when it is set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("habit_tracker={0},habit={0}", log_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr) // Keep stdout for command output
        .init();
}

fn main() -> ExitCode {
    let args = Cli::parse();
    init_logging(args.debug, args.verbose);

    let output = Output::new(args.format);

    match cli::run(args, &output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("Command failed: {:?}", e);
            output.error(&e.to_string());
            ExitCode::from(e.exit_code())
        }
    }
}
