//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn parse_port(raw: &str) -> Outcome<u16> {
//!     match raw.parse::<u16>() {
//!         Ok(port) => Outcome::success(port),
//!         Err(e) => Outcome::from_exception(&e),
//!     }
//! }
//!
//! let ports: Vec<_> = ["80", "http", "443"].into_iter().map(parse_port).collect();
//! assert_eq!(filter_successful(&ports).len(), 2);
//! assert_eq!(filter_failed(&ports).len(), 1);
//! ```

// Macros
pub use crate::{rail_error, rail_fail};

// Core types
pub use crate::outcome::Outcome;
pub use crate::types::{EmptyErrorList, Error, ErrorVec};

// Batch helpers
pub use crate::outcome::{filter_failed, filter_successful, partition, OutcomeState};

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::OutcomeSpanExt;
