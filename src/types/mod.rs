//! Error record and storage types.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::types::{Error, ErrorVec};
//!
//! let mut errors: ErrorVec<Error> = ErrorVec::new();
//! errors.push(Error::with_code("disk full", "IO"));
//! assert_eq!(errors[0].code(), "IO");
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod empty_error_list;
pub mod error;

pub use empty_error_list::EmptyErrorList;
pub use error::Error;

/// SmallVec-backed collection used for accumulating errors.
///
/// Uses inline storage for one element, since most failures carry a single
/// error and only aggregated outcomes spill onto the heap.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
