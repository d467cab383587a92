//! Command-line options for the maybe binary.

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "maybe",
    about = "maybe: inspect error domains and value-or-error results",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Open a file that may not exist and report the outcome
    Open(OpenOptions),

    /// Parse a decimal number and report the outcome
    Parse {
        /// Text to parse
        input: String,
    },

    /// Print the message of one code of a domain
    Describe(DescribeOptions),

    /// List every known domain with its codes
    Domains {
        #[command(flatten)]
        output: OutputOptions,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct OpenOptions {
    /// Pretend the file exists
    #[arg(long, default_value_t = false)]
    pub exists: bool,
}

#[derive(Args, Debug, Clone)]
pub struct DescribeOptions {
    /// Domain name, e.g. 'file_error'
    #[arg(long, value_name = "NAME")]
    pub domain: String,

    /// Raw error code
    #[arg(long, value_name = "CODE", allow_negative_numbers = true)]
    pub code: i32,
}

/// Output format for listings.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args, Debug, Clone, Default)]
pub struct OutputOptions {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl OpenOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_exists(mut self, exists: bool) -> Self {
        self.exists = exists;
        self
    }
}
