//! Value-or-errors outcomes for code that reports failures as data.
//!
//! [`Outcome<T>`] holds either a success, optionally carrying a value, or a
//! non-empty, ordered list of [`Error`]s. Each error is a message plus an
//! opaque, caller-defined code. Outcomes can be transformed, combined,
//! filtered, mutated in place and serialized, so failures stay inspectable
//! instead of being raised.
//!
//! # Examples
//!
//! ## Construction and transformation
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let doubled = Outcome::success(5).map(|x| x * 2);
//! assert_eq!(doubled, Outcome::success(10));
//!
//! let failed = Outcome::<i32>::fail("bad input", "E1");
//! assert!(failed.is_failure());
//! assert_eq!(failed.errors()[0].message(), "bad input");
//! ```
//!
//! ## Accumulating errors in place
//!
//! ```
//! use outcome_rail::{Error, Outcome};
//!
//! let mut report = Outcome::<()>::success_empty();
//! report.add_errors([Error::with_code("stale cache", "CACHE")]);
//! assert!(report.is_failure());
//!
//! report.remove_errors_with_code("CACHE");
//! assert!(report.is_success());
//! ```
//!
//! ## Combining
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let left = Outcome::<u8>::fail("left", "L");
//! let right = Outcome::<u8>::fail("right", "R");
//! let both = left.combine_with(right);
//! let codes: Vec<_> = both.iter_errors().map(|e| e.code()).collect();
//! assert_eq!(codes, ["L", "R"]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between `Outcome`, `Error` and core `Result`
pub mod convert;
/// Formatting macros for errors and failed outcomes
pub mod macros;
/// The `Outcome` type, its combinators and batch filters
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// The `Error` record and its storage
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use convert::{outcome_to_result, result_to_outcome, std_result_to_outcome};
pub use outcome::{filter_failed, filter_successful, partition, Outcome, OutcomeState};
pub use types::{EmptyErrorList, Error, ErrorVec};
