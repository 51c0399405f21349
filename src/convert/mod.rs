//! Conversions between [`Outcome`], [`Error`] and core `Result`.
//!
//! Values never turn into outcomes implicitly; use [`Outcome::success`] or
//! [`Outcome::from_value`] at the conversion point. Errors and error lists
//! do convert, since a failing outcome is the only thing they can mean.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//! use outcome_rail::{Error, Outcome};
//!
//! let failed: Outcome<i32> = Error::with_code("denied", "AUTH").into();
//! assert!(failed.is_failure());
//!
//! let ok: Result<i32, &str> = Ok(7);
//! assert_eq!(result_to_outcome(ok).value(), Some(&7));
//! ```

use crate::outcome::core::Outcome;
use crate::types::alloc_type::Vec;
use crate::types::{EmptyErrorList, Error, ErrorVec};

/// Converts a `Result` into an `Outcome`.
///
/// `Ok(v)` becomes a valued success, `Err(e)` a single-error failure.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::result_to_outcome;
///
/// let out = result_to_outcome(Err::<i32, _>("missing"));
/// assert_eq!(out.errors()[0].message(), "missing");
/// ```
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T>
where
    E: Into<Error>,
{
    result.into()
}

/// Converts a `Result` whose error is any `core::error::Error`.
///
/// The error's message is captured with [`Error::from_std`].
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::std_result_to_outcome;
///
/// let out = std_result_to_outcome("12".parse::<u8>());
/// assert_eq!(out.value(), Some(&12));
///
/// let out = std_result_to_outcome("1200".parse::<u8>());
/// assert!(out.is_failure());
/// ```
#[inline]
pub fn std_result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T>
where
    E: core::error::Error,
{
    match result {
        Ok(value) => Outcome::success(value),
        Err(error) => Outcome::from_exception(&error),
    }
}

/// Converts an `Outcome` into a `Result`, see [`Outcome::into_result`].
#[inline]
pub fn outcome_to_result<T>(outcome: Outcome<T>) -> Result<Option<T>, ErrorVec<Error>> {
    outcome.into_result()
}

impl<T> From<Error> for Outcome<T> {
    #[inline]
    fn from(error: Error) -> Self {
        Self::fail_with(error)
    }
}

impl<T> TryFrom<Vec<Error>> for Outcome<T> {
    type Error = EmptyErrorList;

    #[inline]
    fn try_from(errors: Vec<Error>) -> Result<Self, Self::Error> {
        Self::fail_many(errors)
    }
}

impl<T> TryFrom<ErrorVec<Error>> for Outcome<T> {
    type Error = EmptyErrorList;

    #[inline]
    fn try_from(errors: ErrorVec<Error>) -> Result<Self, Self::Error> {
        if errors.is_empty() {
            return Err(EmptyErrorList);
        }
        Ok(Self::propagate(errors))
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Into<Error>,
{
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::fail_with(error.into()),
        }
    }
}
