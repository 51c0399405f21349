//! The error record carried by [`Outcome`](crate::Outcome).
//!
//! An [`Error`] is a `(message, code)` pair. The code is an opaque,
//! caller-defined tag used for filtering and removal; it is empty when the
//! caller does not supply one.

use crate::types::alloc_type::String;
use core::fmt::{self, Display, Write};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Message used when a foreign error cannot render its own description.
pub const UNPRINTABLE_MESSAGE: &str = "<unprintable error>";

/// A single failure cause: a human-readable message plus an optional code.
///
/// Serializes as `{"Message": "...", "Code": "..."}`.
///
/// # Examples
///
/// ```
/// use outcome_rail::Error;
///
/// let err = Error::with_code("bad input", "E1");
/// assert_eq!(err.message(), "bad input");
/// assert_eq!(err.code(), "E1");
///
/// let plain = Error::new("timeout");
/// assert!(plain.code().is_empty());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Error {
    message: String,
    #[cfg_attr(feature = "serde", serde(default))]
    code: String,
}

impl Error {
    /// Creates an error with an empty code.
    #[inline]
    pub fn new<M: Into<String>>(message: M) -> Self {
        Self { message: message.into(), code: String::new() }
    }

    /// Creates an error with the given code.
    #[inline]
    pub fn with_code<M, C>(message: M, code: C) -> Self
    where
        M: Into<String>,
        C: Into<String>,
    {
        Self { message: message.into(), code: code.into() }
    }

    /// Captures the description of any `core::error::Error`.
    ///
    /// The message is rendered through the source's `Display` impl. If that
    /// impl reports a formatting failure, the message becomes
    /// [`UNPRINTABLE_MESSAGE`] instead. The code is always empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Error;
    ///
    /// let parse = "x".parse::<i32>().unwrap_err();
    /// let err = Error::from_std(&parse);
    /// assert_eq!(err.message(), parse.to_string());
    /// ```
    pub fn from_std(source: &dyn core::error::Error) -> Self {
        let mut message = String::new();
        if write!(message, "{source}").is_err() {
            message.clear();
            message.push_str(UNPRINTABLE_MESSAGE);
        }
        Self::new(message)
    }

    /// Returns the human-readable message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the code, empty when none was supplied.
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns `true` when the code equals `code` exactly.
    #[inline]
    pub fn has_code(&self, code: &str) -> bool {
        self.code == code
    }

    /// Consumes the error, returning `(message, code)`.
    #[inline]
    pub fn into_parts(self) -> (String, String) {
        (self.message, self.code)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.code.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "[{}] {}", self.code, self.message)
        }
    }
}

impl core::error::Error for Error {}

impl From<&str> for Error {
    #[inline]
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Error {
    #[inline]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}
