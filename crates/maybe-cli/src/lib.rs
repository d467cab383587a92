//! maybe command-line interface.

pub mod domains;
pub mod options;
pub mod output;

use std::io::Write;

use maybe_error::{Error, Maybe};

pub use options::{Cli, Command, DescribeOptions, OpenOptions, OutputFormat, OutputOptions};

pub type DynError = Box<dyn std::error::Error + Send + Sync>;

pub type Result<T> = std::result::Result<T, DynError>;

/// How a command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command produced a value.
    Success,
    /// The command produced an error of some domain.
    Failed(Error),
}

impl Outcome {
    /// Process exit code: 0 on success, 1 on a domain error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Success => 0,
            Outcome::Failed(_) => 1,
        }
    }
}

/// Run one parsed command, writing its report to `out`.
pub fn run_command(command: &Command, out: &mut dyn Write) -> Result<Outcome> {
    match command {
        Command::Open(opts) => report(domains::open(opts.exists), out),
        Command::Parse { input } => report(domains::parse_number(input), out),
        Command::Describe(opts) => {
            let Some(category) = domains::find(&opts.domain) else {
                return Err(format!(
                    "Unknown domain: {}. Use 'maybe domains' to list them",
                    opts.domain
                )
                .into());
            };
            let error = Error::from_raw(opts.code, category);
            tracing::debug!(domain = error.name(), code = error.code(), "describe");
            if error.is_success() {
                writeln!(out, "success")?;
            } else {
                writeln!(out, "{}", error.message())?;
            }
            Ok(Outcome::Success)
        }
        Command::Domains { output: opts } => {
            let rendered = output::render_domains(&domains::all(), opts.format)?;
            write!(out, "{rendered}")?;
            Ok(Outcome::Success)
        }
    }
}

fn report<T: std::fmt::Display>(result: Maybe<T>, out: &mut dyn Write) -> Result<Outcome> {
    writeln!(out, "{}", output::render_maybe(&result))?;
    if result.is_value() {
        return Ok(Outcome::Success);
    }
    let error = result.error();
    tracing::info!(domain = error.name(), code = error.code(), "command failed");
    Ok(Outcome::Failed(error))
}
