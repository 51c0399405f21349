//! The [`Outcome`] type and the helpers built around it.
//!
//! An [`Outcome`] carries either a success, with or without a value, or a
//! non-empty list of [`Error`](crate::Error)s. Failures flow through
//! [`map`](Outcome::map), [`and_then`](Outcome::and_then) and
//! [`combine_with`](Outcome::combine_with) without ever losing an error.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::outcome::{filter_failed, filter_successful, Outcome};
//!
//! let batch = vec![Outcome::success(1), Outcome::warn("skipped"), Outcome::success(3)];
//! assert_eq!(filter_successful(batch.iter()).len(), 2);
//! assert_eq!(filter_failed(batch.iter()).len(), 1);
//! ```
pub mod core;
pub mod filter;
pub mod iter;
#[cfg(feature = "serde")]
pub mod serde_impl;

pub use self::core::*;
pub use self::filter::*;
