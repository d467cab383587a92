//! The Error value: a category reference plus an integer code.

use std::fmt;

use crate::category::Category;
use crate::domain::{ErrorCode, ErrorDomain};

/// A code of a specific error domain.
///
/// Holds a non-owning `&'static` reference to the domain's category and the
/// raw code; copying it is free and dropping it does nothing. There is no
/// default value: every error names a domain and a code.
///
/// An error whose message is empty denotes success.
#[derive(Clone, Copy)]
pub struct Error {
    category: &'static dyn Category,
    code: i32,
}

impl Error {
    /// Create an error from a code, resolving its category by type.
    #[inline]
    pub fn new<E: ErrorDomain>(code: E) -> Self {
        Self {
            category: E::category(),
            code: code.code(),
        }
    }

    /// Create an error from a code and an explicitly chosen category.
    #[inline]
    pub fn with_category<E: ErrorCode>(code: E, category: &'static dyn Category) -> Self {
        Self {
            category,
            code: code.code(),
        }
    }

    /// Create an error from a raw code and a category.
    #[inline]
    pub const fn from_raw(code: i32, category: &'static dyn Category) -> Self {
        Self { category, code }
    }

    /// Get the error category.
    #[inline]
    pub fn category(&self) -> &'static dyn Category {
        self.category
    }

    /// Get the raw error code.
    #[inline]
    pub fn code(&self) -> i32 {
        self.code
    }

    /// Get the category name.
    pub fn name(&self) -> &'static str {
        self.category.name()
    }

    /// Get the error message, empty for success.
    pub fn message(&self) -> &'static str {
        self.category.message(self.code)
    }

    /// Check if this error denotes success
    pub fn is_success(&self) -> bool {
        self.message().is_empty()
    }

    /// Check if this error denotes a failure
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Check if this error belongs to the domain of `E`.
    pub fn is<E: ErrorDomain>(&self) -> bool {
        std::ptr::addr_eq(self.category, E::category())
    }

    /// Recover the typed code if this error belongs to the domain of `E`.
    pub fn to_code<E: ErrorDomain>(&self) -> Option<E> {
        if self.is::<E>() {
            E::from_code(self.code)
        } else {
            None
        }
    }
}

impl<E: ErrorDomain> From<E> for Error {
    fn from(code: E) -> Self {
        Error::new(code)
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code && std::ptr::addr_eq(self.category, other.category)
    }
}

impl Eq for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = self.message();
        if message.is_empty() {
            write!(f, "{}: success", self.name())
        } else {
            write!(f, "{}: {}", self.name(), message)
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Error")
            .field("category", &self.name())
            .field("code", &self.code)
            .field("message", &self.message())
            .finish()
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorCategory, UNKNOWN_ERROR};

    crate::define_error_domain! {
        enum QueueError in "queue_error" {
            success Ok = 0,
            Empty = 1 => "queue is empty",
            Full = 2 => "queue is full",
        }
    }

    crate::define_error_domain! {
        enum PoolError in "pool_error" {
            success Ok = 0,
            Exhausted = 1 => "pool exhausted",
        }
    }

    static QUEUE_ALIAS: ErrorCategory<QueueError> =
        ErrorCategory::new("queue_alias", |code| match code {
            QueueError::Ok => "",
            QueueError::Empty => "nothing queued",
            QueueError::Full => "no room",
        });

    #[test]
    fn test_error_creation() {
        let err = Error::new(QueueError::Empty);
        assert_eq!(err.code(), 1);
        assert_eq!(err.name(), "queue_error");
        assert_eq!(err.category().name(), "queue_error");
        assert_eq!(err.message(), "queue is empty");
        assert!(err.is_failure());
    }

    #[test]
    fn test_success_truthiness() {
        assert!(Error::new(QueueError::Ok).is_success());
        assert!(!Error::new(QueueError::Full).is_success());
        assert!(Error::from(PoolError::Ok).is_success());
    }

    #[test]
    fn test_explicit_category() {
        let err = Error::with_category(QueueError::Empty, &QUEUE_ALIAS);
        assert_eq!(err.name(), "queue_alias");
        assert_eq!(err.message(), "nothing queued");
        assert!(!err.is::<QueueError>());
        assert_eq!(err.to_code::<QueueError>(), None);
    }

    #[test]
    fn test_out_of_range_code() {
        let err = Error::from_raw(99, QueueError::category());
        assert_eq!(err.code(), 99);
        assert_eq!(err.message(), UNKNOWN_ERROR);
        assert!(!err.is_success());
    }

    #[test]
    fn test_equality_and_domain_checks() {
        let a = Error::new(QueueError::Full);
        assert_eq!(a, Error::from_raw(2, QueueError::category()));
        assert_ne!(a, Error::new(QueueError::Empty));
        // Same code, different domain.
        assert_ne!(Error::new(QueueError::Empty), Error::new(PoolError::Exhausted));

        assert!(a.is::<QueueError>());
        assert!(!a.is::<PoolError>());
        assert_eq!(a.to_code::<QueueError>(), Some(QueueError::Full));
        assert_eq!(a.to_code::<PoolError>(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Error::new(QueueError::Full).to_string(), "queue_error: queue is full");
        assert_eq!(Error::new(QueueError::Ok).to_string(), "queue_error: success");

        let debug = format!("{:?}", Error::new(PoolError::Exhausted));
        assert!(debug.contains("pool_error"));
        assert!(debug.contains("code: 1"));
        assert!(debug.contains("pool exhausted"));
    }

    #[test]
    fn test_boxes_into_dyn_error() {
        let boxed: Box<dyn std::error::Error + Send + Sync> = Error::new(PoolError::Exhausted).into();
        assert_eq!(boxed.to_string(), "pool_error: pool exhausted");
        assert!(boxed.source().is_none());
    }
}
