use std::process::ExitCode;

use clap::Parser;

use maybe::{Cli, Result, run_command};

pub fn run(args: Cli) -> Result<ExitCode> {
    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match run_command(&args.command, &mut out) {
        Ok(outcome) => Ok(ExitCode::from(outcome.exit_code())),
        Err(e) => {
            eprintln!("Error: {e}");
            tracing::error!(error = %e, "execution failed");
            Ok(ExitCode::from(2))
        }
    }
}

pub fn main() -> Result<ExitCode> {
    let args = Cli::parse();
    run(args)
}
