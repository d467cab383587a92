//! Error domains: code types and the type-directed category lookup.

use crate::category::Category;

/// An integer-backed error code of one domain.
///
/// Usually a `#[repr(i32)]` enum with exactly one success value.
pub trait ErrorCode: Copy + 'static {
    /// The raw code.
    fn code(self) -> i32;

    /// Map a raw code back to its typed value, `None` for unknown codes.
    fn from_code(code: i32) -> Option<Self>;
}

/// The discovery function of an error domain.
///
/// Each code type implements this exactly once, returning the single
/// category shared by every error of the domain. Any module can add a domain
/// this way; there is no central registry. A code type without an
/// implementation cannot be turned into an [`Error`](crate::Error) without
/// naming a category explicitly:
///
/// ```compile_fail
/// use maybe_error::{Error, ErrorCode};
///
/// #[derive(Clone, Copy)]
/// struct Orphan(i32);
///
/// impl ErrorCode for Orphan {
///     fn code(self) -> i32 {
///         self.0
///     }
///
///     fn from_code(code: i32) -> Option<Self> {
///         Some(Orphan(code))
///     }
/// }
///
/// let _ = Error::new(Orphan(1));
/// ```
pub trait ErrorDomain: ErrorCode {
    /// The domain's category. Must return the same instance on every call.
    fn category() -> &'static dyn Category;
}

/// Look up the category of the domain `E` belongs to.
#[inline]
pub fn category<E: ErrorDomain>() -> &'static dyn Category {
    E::category()
}

/// Define an error domain: the code enum, its [`ErrorCode`] and
/// [`ErrorDomain`] impls and a static [`ErrorCategory`](crate::ErrorCategory).
///
/// The success variant is introduced with `success` and maps to
/// [`NO_ERROR`](crate::NO_ERROR). Every other variant names its message;
/// empty messages are rejected at compile time.
///
/// ```
/// use maybe_error::{define_error_domain, Error};
///
/// define_error_domain! {
///     pub enum FileError in "file_error" {
///         success Ok = 0,
///         NotFound = 1 => "file not found",
///         PermissionDenied = 2 => "permission denied",
///     }
/// }
///
/// let err = Error::new(FileError::NotFound);
/// assert_eq!(err.message(), "file not found");
/// assert_eq!(err.name(), FileError::DOMAIN);
/// assert!(Error::new(FileError::Ok).is_success());
/// ```
#[macro_export]
macro_rules! define_error_domain {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident in $domain:literal {
            $(#[$success_meta:meta])*
            success $success:ident = $success_code:literal,
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $code:literal => $message:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(i32)]
        $vis enum $name {
            $(#[$success_meta])*
            $success = $success_code,
            $(
                $(#[$variant_meta])*
                $variant = $code,
            )*
        }

        $(
            const _: () = assert!(
                !<str>::is_empty($message),
                concat!("empty message for ", stringify!($name), "::", stringify!($variant)),
            );
        )*

        #[allow(dead_code)]
        impl $name {
            /// Name of the domain's category.
            pub const DOMAIN: &'static str = $domain;

            /// Every code of the domain, success first.
            pub const ALL: &'static [$name] = &[$name::$success, $($name::$variant),*];
        }

        impl $crate::ErrorCode for $name {
            #[inline]
            fn code(self) -> i32 {
                self as i32
            }

            fn from_code(code: i32) -> ::core::option::Option<Self> {
                match code {
                    $success_code => ::core::option::Option::Some($name::$success),
                    $(
                        $code => ::core::option::Option::Some($name::$variant),
                    )*
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl $crate::ErrorDomain for $name {
            fn category() -> &'static dyn $crate::Category {
                static CATEGORY: $crate::ErrorCategory<$name> =
                    $crate::ErrorCategory::new($domain, |code| match code {
                        $name::$success => $crate::NO_ERROR,
                        $(
                            $name::$variant => $message,
                        )*
                    });
                &CATEGORY
            }
        }
    };
}
