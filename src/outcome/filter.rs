//! Partitioning batches of outcomes by success.
//!
//! The functions here accept owned outcomes as well as references, so a
//! batch can be filtered without giving it up:
//!
//! ```
//! use outcome_rail::outcome::{filter_successful, Outcome};
//!
//! let batch = vec![Outcome::success(1), Outcome::<i32>::fail("bad", "E")];
//! let ok: Vec<&Outcome<i32>> = filter_successful(&batch);
//! assert_eq!(ok.len(), 1);
//! assert_eq!(batch.len(), 2);
//! ```
use crate::outcome::core::Outcome;
use crate::types::alloc_type::Vec;

/// Anything that can report whether it holds a successful outcome.
pub trait OutcomeState {
    /// Returns `true` for a success.
    fn is_success(&self) -> bool;
}

impl<T> OutcomeState for Outcome<T> {
    #[inline]
    fn is_success(&self) -> bool {
        Outcome::is_success(self)
    }
}

impl<T> OutcomeState for &Outcome<T> {
    #[inline]
    fn is_success(&self) -> bool {
        Outcome::is_success(self)
    }
}

/// Keeps the successful entries, preserving input order.
pub fn filter_successful<R, I>(results: I) -> Vec<R>
where
    I: IntoIterator<Item = R>,
    R: OutcomeState,
{
    results.into_iter().filter(|r| r.is_success()).collect()
}

/// Keeps the failed entries, preserving input order.
pub fn filter_failed<R, I>(results: I) -> Vec<R>
where
    I: IntoIterator<Item = R>,
    R: OutcomeState,
{
    results.into_iter().filter(|r| !r.is_success()).collect()
}

/// Splits entries into `(successful, failed)` in one pass.
///
/// Both halves keep the relative order of the input.
///
/// # Examples
///
/// ```
/// use outcome_rail::outcome::{partition, Outcome};
///
/// let (ok, failed) = partition(vec![
///     Outcome::success("a"),
///     Outcome::warn("w"),
///     Outcome::success("b"),
/// ]);
/// assert_eq!(ok.len(), 2);
/// assert_eq!(failed.len(), 1);
/// ```
pub fn partition<R, I>(results: I) -> (Vec<R>, Vec<R>)
where
    I: IntoIterator<Item = R>,
    R: OutcomeState,
{
    results.into_iter().partition(|r| r.is_success())
}
