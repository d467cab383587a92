//! Error categories: the per-domain translators from code to message.

use std::fmt;
use std::marker::PhantomData;

use once_cell::sync::OnceCell;

use crate::domain::ErrorCode;

/// Message of every success code.
pub const NO_ERROR: &str = "";

/// Message returned for codes a category does not know.
pub const UNKNOWN_ERROR: &str = "unknown error";

/// Translates the integer codes of one error domain into messages.
///
/// Exactly one instance exists per domain and every [`Error`](crate::Error)
/// of that domain holds a `&'static` reference to it, so implementations must
/// be immutable once constructed. Both methods are pure and total:
///
/// - `message(code)` is empty if and only if `code` denotes success,
/// - every other code, including codes the domain never defined, maps to a
///   non-empty string.
pub trait Category: Send + Sync + 'static {
    /// Identifying name of the domain.
    fn name(&self) -> &str;

    /// Display text for `code`, [`NO_ERROR`] for the success code.
    fn message(&self, code: i32) -> &str;
}

impl fmt::Debug for dyn Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Category").field(&self.name()).finish()
    }
}

/// A category built from a domain name and a code-to-message mapping.
///
/// `new` is a `const fn`; keep the result in a `static` and hand out
/// `&'static` references from the domain's discovery function:
///
/// ```
/// use maybe_error::{Category, ErrorCategory, ErrorCode, ErrorDomain, NO_ERROR};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// #[repr(i32)]
/// enum NetError {
///     Ok = 0,
///     Refused = 1,
/// }
///
/// impl ErrorCode for NetError {
///     fn code(self) -> i32 {
///         self as i32
///     }
///
///     fn from_code(code: i32) -> Option<Self> {
///         match code {
///             0 => Some(NetError::Ok),
///             1 => Some(NetError::Refused),
///             _ => None,
///         }
///     }
/// }
///
/// impl ErrorDomain for NetError {
///     fn category() -> &'static dyn Category {
///         static CATEGORY: ErrorCategory<NetError> =
///             ErrorCategory::new("net_error", |code| match code {
///                 NetError::Ok => NO_ERROR,
///                 NetError::Refused => "connection refused",
///             });
///         &CATEGORY
///     }
/// }
///
/// assert_eq!(NetError::category().message(1), "connection refused");
/// assert_eq!(NetError::category().message(7), "unknown error");
/// ```
pub struct ErrorCategory<E> {
    name: &'static str,
    messages: fn(E) -> &'static str,
    _code: PhantomData<fn(E)>,
}

impl<E> ErrorCategory<E> {
    /// Package a domain name and a message mapping into a category.
    pub const fn new(name: &'static str, messages: fn(E) -> &'static str) -> Self {
        Self {
            name,
            messages,
            _code: PhantomData,
        }
    }
}

impl<E: ErrorCode> Category for ErrorCategory<E> {
    fn name(&self) -> &str {
        self.name
    }

    fn message(&self, code: i32) -> &str {
        match E::from_code(code) {
            Some(code) => (self.messages)(code),
            None => UNKNOWN_ERROR,
        }
    }
}

impl<E> fmt::Debug for ErrorCategory<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorCategory")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A category initialized on first use.
///
/// For categories whose construction cannot happen in a `const` context.
/// Keep it in a `static`; the initializer runs exactly once, after which
/// every access is a plain read.
///
/// ```
/// use maybe_error::{Category, LazyCategory, NO_ERROR};
///
/// struct Table(Vec<&'static str>);
///
/// impl Category for Table {
///     fn name(&self) -> &str {
///         "table"
///     }
///
///     fn message(&self, code: i32) -> &str {
///         match usize::try_from(code) {
///             Ok(0) => NO_ERROR,
///             Ok(idx) => self.0.get(idx).copied().unwrap_or("unknown error"),
///             Err(_) => "unknown error",
///         }
///     }
/// }
///
/// static TABLE: LazyCategory<Table> = LazyCategory::new(|| Table(vec!["", "full"]));
///
/// assert_eq!(TABLE.message(1), "full");
/// ```
pub struct LazyCategory<C> {
    cell: OnceCell<C>,
    init: fn() -> C,
}

impl<C: Category> LazyCategory<C> {
    /// Wrap `init`, which runs on the first access.
    pub const fn new(init: fn() -> C) -> Self {
        Self {
            cell: OnceCell::new(),
            init,
        }
    }

    /// Whether the category has been initialized yet.
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Initialize the category if needed and return it.
    pub fn get(&self) -> &C {
        self.cell.get_or_init(|| {
            let category = (self.init)();
            tracing::debug!(category = category.name(), "error category initialized");
            category
        })
    }
}

impl<C: Category> Category for LazyCategory<C> {
    fn name(&self) -> &str {
        self.get().name()
    }

    fn message(&self, code: i32) -> &str {
        self.get().message(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[repr(i32)]
    enum DiskError {
        Ok = 0,
        Full = 1,
        ReadOnly = 5,
    }

    impl ErrorCode for DiskError {
        fn code(self) -> i32 {
            self as i32
        }

        fn from_code(code: i32) -> Option<Self> {
            match code {
                0 => Some(DiskError::Ok),
                1 => Some(DiskError::Full),
                5 => Some(DiskError::ReadOnly),
                _ => None,
            }
        }
    }

    static DISK: ErrorCategory<DiskError> = ErrorCategory::new("disk_error", |code| match code {
        DiskError::Ok => NO_ERROR,
        DiskError::Full => "disk full",
        DiskError::ReadOnly => "read-only filesystem",
    });

    #[test]
    fn test_error_category_messages() {
        assert_eq!(DISK.name(), "disk_error");
        assert_eq!(DISK.message(0), NO_ERROR);
        assert_eq!(DISK.message(1), "disk full");
        assert_eq!(DISK.message(5), "read-only filesystem");
    }

    #[test]
    fn test_unknown_codes_fall_back() {
        for code in [2, 4, 6, -1, i32::MAX, i32::MIN] {
            assert_eq!(DISK.message(code), UNKNOWN_ERROR, "code {code}");
        }
    }

    #[test]
    fn test_debug_shows_name() {
        let category: &dyn Category = &DISK;
        assert_eq!(format!("{:?}", category), "Category(\"disk_error\")");
        assert!(format!("{:?}", DISK).contains("disk_error"));
    }

    struct Counted;

    impl Category for Counted {
        fn name(&self) -> &str {
            "counted"
        }

        fn message(&self, code: i32) -> &str {
            if code == 0 { NO_ERROR } else { "counted failure" }
        }
    }

    static COUNTED: LazyCategory<Counted> = LazyCategory::new(|| Counted);

    #[test]
    fn test_lazy_category_initializes_once() {
        let first: *const Counted = COUNTED.get();
        assert!(COUNTED.is_initialized());
        let second: *const Counted = COUNTED.get();
        assert_eq!(first, second);
        assert_eq!(COUNTED.message(3), "counted failure");
        assert_eq!(COUNTED.message(0), NO_ERROR);
        assert_eq!(COUNTED.name(), "counted");
    }
}
