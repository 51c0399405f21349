//! Formatting shortcuts for building errors and failed outcomes.
//!
//! - [`macro@crate::rail_error`] - Formats a message into an [`Error`](crate::Error),
//!   optionally tagged with a code.
//! - [`macro@crate::rail_fail`] - Same arguments, wrapped in a failed
//!   [`Outcome`](crate::Outcome).
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{rail_error, rail_fail, Outcome};
//!
//! let field = "email";
//! let err = rail_error!(code = "REQUIRED", "field `{}` is missing", field);
//! assert_eq!(err.message(), "field `email` is missing");
//!
//! let out: Outcome<()> = rail_fail!("retry budget of {} exhausted", 3);
//! assert!(out.is_failure());
//! ```

/// Formats an [`Error`](crate::Error).
///
/// # Syntax
///
/// - `rail_error!("fmt", args...)` - error with an empty code
/// - `rail_error!(code = expr, "fmt", args...)` - error with the given code
///
/// # Examples
///
/// ```
/// use outcome_rail::rail_error;
///
/// let err = rail_error!("port {} in use", 8080);
/// assert_eq!(err.message(), "port 8080 in use");
/// assert_eq!(err.code(), "");
///
/// let coded = rail_error!(code = "NET", "port {} in use", 8080);
/// assert_eq!(coded.code(), "NET");
/// ```
#[macro_export]
macro_rules! rail_error {
    (code = $code:expr, $($arg:tt)+) => {
        $crate::Error::with_code($crate::types::alloc_type::format!($($arg)+), $code)
    };
    ($($arg:tt)+) => {
        $crate::Error::new($crate::types::alloc_type::format!($($arg)+))
    };
}

/// Formats a failed [`Outcome`](crate::Outcome) holding one error.
///
/// Accepts the same arguments as [`rail_error!`](crate::rail_error).
///
/// # Examples
///
/// ```
/// use outcome_rail::{rail_fail, Outcome};
///
/// let out: Outcome<u32> = rail_fail!(code = "LIMIT", "{} > {}", 12, 10);
/// assert_eq!(out.errors()[0].message(), "12 > 10");
/// ```
#[macro_export]
macro_rules! rail_fail {
    ($($arg:tt)+) => {
        $crate::Outcome::fail_with($crate::rail_error!($($arg)+))
    };
}
