//! Rendering of results and domain listings.

use std::fmt::Write;

use maybe_error::{Error, Maybe};

use crate::Result;
use crate::domains::DomainInfo;
use crate::options::OutputFormat;

/// One line describing an error: `error: <name> (<code>): <message>`.
pub fn render_error(error: &Error) -> String {
    let message = error.message();
    let message = if message.is_empty() { "success" } else { message };
    format!("error: {} ({}): {}", error.name(), error.code(), message)
}

/// Describe either alternative of a result.
pub fn render_maybe<T: std::fmt::Display>(result: &Maybe<T>) -> String {
    match result.as_result() {
        Ok(value) => format!("value: {value}"),
        Err(error) => render_error(&error),
    }
}

/// Render the domain listing.
pub fn render_domains(domains: &[DomainInfo], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(domains)?),
        OutputFormat::Text => {
            let mut out = String::new();
            for domain in domains {
                writeln!(out, "{}", domain.name)?;
                for info in &domain.codes {
                    let message = if info.message.is_empty() { "-" } else { info.message };
                    writeln!(out, "  {:>4}  {:<20} {}", info.code, info.label, message)?;
                }
            }
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::{self, FileError, ParseError};

    #[test]
    fn test_render_error() {
        assert_eq!(
            render_error(&Error::new(FileError::PermissionDenied)),
            "error: file_error (2): permission denied"
        );
        assert_eq!(
            render_error(&Error::new(ParseError::Ok)),
            "error: parse_error (0): success"
        );
    }

    #[test]
    fn test_render_maybe() {
        assert_eq!(render_maybe(&domains::open(true)), "value: 42");
        assert_eq!(render_maybe(&domains::open(false)), "error: file_error (1): file not found");
    }

    #[test]
    fn test_render_domains_text() {
        let text = render_domains(&domains::all(), OutputFormat::Text).unwrap();
        assert!(text.starts_with("file_error\n"));
        assert!(text.contains("not_found"));
        assert!(text.contains("number too large"));
    }

    #[test]
    fn test_render_domains_json() {
        let json = render_domains(&domains::all(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["name"], "file_error");
        assert_eq!(value[0]["codes"][1]["message"], "file not found");
        assert_eq!(value[1]["codes"][0]["message"], "");
    }
}
