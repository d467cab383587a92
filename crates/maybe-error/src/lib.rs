//! # maybe-error
//!
//! Allocation-free error reporting for function results.
//!
//! ## Design
//!
//! - **Category**: one immutable instance per error domain, translating
//!   integer codes to messages. Lives in a `static`.
//! - **Error**: a `&'static` category reference plus an `i32` code. `Copy`,
//!   owns nothing, never allocates. Success is an empty message.
//! - **Maybe<T>**: a value or an `Error`, used as the return type of
//!   fallible operations.
//! - **ErrorDomain**: the discovery function each code type implements once.
//!   Lookup is type-directed and needs no registry.
//!
//! ## Usage
//!
//! ```rust
//! use maybe_error::{define_error_domain, Maybe};
//!
//! define_error_domain! {
//!     pub enum FileError in "file_error" {
//!         success Ok = 0,
//!         NotFound = 1 => "file not found",
//!         PermissionDenied = 2 => "permission denied",
//!     }
//! }
//!
//! fn open(exists: bool) -> Maybe<i32> {
//!     if exists {
//!         Maybe::from_value(42)
//!     } else {
//!         FileError::NotFound.into()
//!     }
//! }
//!
//! let opened = open(false);
//! assert!(opened.is_error());
//! assert_eq!(opened.error().code(), 1);
//! assert_eq!(opened.error().message(), "file not found");
//! assert_eq!(opened.error().category().name(), "file_error");
//! ```
//!
//! ## Principles
//!
//! - Errors are returned, never thrown
//! - A category must outlive every error referencing it, so only `&'static`
//!   categories are accepted
//! - Every non-success code has a non-empty message, unknown codes included

mod category;
mod domain;
mod error;
mod maybe;

pub use category::{Category, ErrorCategory, LazyCategory, NO_ERROR, UNKNOWN_ERROR};
pub use domain::{ErrorCode, ErrorDomain, category};
pub use error::Error;
pub use maybe::Maybe;
