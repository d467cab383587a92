//! Error domains the demo binary knows about.

use strum::{EnumMessage, IntoEnumIterator};
use strum_macros::{EnumIter, EnumMessage, FromRepr, IntoStaticStr};

use maybe_error::{
    Category, ErrorCategory, ErrorCode, ErrorDomain, Maybe, NO_ERROR, define_error_domain,
};

define_error_domain! {
    /// Failures of opening a file.
    pub enum FileError in "file_error" {
        success Ok = 0,
        NotFound = 1 => "file not found",
        PermissionDenied = 2 => "permission denied",
    }
}

/// Failures of parsing a number, written against strum derives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr, EnumIter, EnumMessage, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[repr(i32)]
pub enum ParseError {
    Ok = 0,
    #[strum(message = "empty input")]
    Empty = 1,
    #[strum(message = "invalid digit")]
    InvalidDigit = 2,
    #[strum(message = "number too large")]
    Overflow = 3,
}

impl ErrorCode for ParseError {
    fn code(self) -> i32 {
        self as i32
    }

    fn from_code(code: i32) -> Option<Self> {
        Self::from_repr(code)
    }
}

impl ErrorDomain for ParseError {
    fn category() -> &'static dyn Category {
        static CATEGORY: ErrorCategory<ParseError> =
            ErrorCategory::new("parse_error", |code| code.get_message().unwrap_or(NO_ERROR));
        &CATEGORY
    }
}

/// Open a file that may or may not exist.
pub fn open(exists: bool) -> Maybe<i32> {
    if !exists {
        return FileError::NotFound.into();
    }
    Maybe::from_value(42)
}

/// Parse a non-negative decimal number.
pub fn parse_number(input: &str) -> Maybe<u32> {
    if input.is_empty() {
        return ParseError::Empty.into();
    }
    let mut value: u32 = 0;
    for byte in input.bytes() {
        if !byte.is_ascii_digit() {
            return ParseError::InvalidDigit.into();
        }
        let digit = u32::from(byte - b'0');
        value = match value.checked_mul(10).and_then(|v| v.checked_add(digit)) {
            Some(v) => v,
            None => return ParseError::Overflow.into(),
        };
    }
    Maybe::from_value(value)
}

/// One code of a domain with its display text.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CodeInfo {
    pub code: i32,
    pub label: &'static str,
    pub message: &'static str,
}

/// A domain as listed by the binary.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DomainInfo {
    pub name: &'static str,
    pub codes: Vec<CodeInfo>,
}

/// Every known domain.
pub fn all() -> Vec<DomainInfo> {
    let file = FileError::ALL
        .iter()
        .map(|&code| CodeInfo {
            code: code.code(),
            label: file_error_label(code),
            message: FileError::category().message(code.code()),
        })
        .collect();
    let parse = ParseError::iter()
        .map(|code| CodeInfo {
            code: code.code(),
            label: code.into(),
            message: ParseError::category().message(code.code()),
        })
        .collect();

    vec![
        DomainInfo {
            name: FileError::DOMAIN,
            codes: file,
        },
        DomainInfo {
            name: ParseError::category().name(),
            codes: parse,
        },
    ]
}

fn file_error_label(code: FileError) -> &'static str {
    match code {
        FileError::Ok => "ok",
        FileError::NotFound => "not_found",
        FileError::PermissionDenied => "permission_denied",
    }
}

/// Find the category of a domain by name.
pub fn find(name: &str) -> Option<&'static dyn Category> {
    [FileError::category(), ParseError::category()]
        .into_iter()
        .find(|category| category.name() == name)
}
