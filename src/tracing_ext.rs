//! Tracing integration for outcome-rail.
//!
//! Lets failed outcomes report their errors as `tracing` events inside a
//! span, and builds errors that remember which span produced them.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["tracing"] }
//! ```

use tracing::Span;

use crate::outcome::core::Outcome;
use crate::types::alloc_type::String;
use crate::types::Error;

/// Extension trait that reports an outcome's errors through `tracing`.
pub trait OutcomeSpanExt {
    /// Emits one `warn` event per held error inside the current span.
    ///
    /// Each event carries the error as `error_message` and `error_code`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use outcome_rail::tracing_ext::OutcomeSpanExt;
    /// use tracing::info_span;
    ///
    /// let span = info_span!("import_batch", batch = 7);
    /// let _guard = span.enter();
    /// load_rows().record_in_current_span();
    /// ```
    fn record_in_current_span(&self) -> &Self {
        self.record_in_span(&Span::current())
    }

    /// Emits one `warn` event per held error inside `span`.
    fn record_in_span(&self, span: &Span) -> &Self;
}

impl<T> OutcomeSpanExt for Outcome<T> {
    fn record_in_span(&self, span: &Span) -> &Self {
        let _entered = span.enter();
        for error in self.iter_errors() {
            tracing::warn!(
                target: "outcome_rail",
                error_message = error.message(),
                error_code = error.code(),
                "outcome failed"
            );
        }
        self
    }
}

/// Builds an [`Error`] whose message names the current span.
///
/// The message reads `in span '<name>': <message>`; outside any span the
/// name is `unknown`.
///
/// # Example
///
/// ```rust,ignore
/// use outcome_rail::tracing_ext::instrument_error;
///
/// let err = instrument_error("row rejected", "IMPORT");
/// // err.message() == "in span 'import_batch': row rejected"
/// ```
pub fn instrument_error<M, C>(message: M, code: C) -> Error
where
    M: Into<String>,
    C: Into<String>,
{
    let span = Span::current();
    Error::with_code(alloc::format!("in span '{}': {}", span_name(&span), message.into()), code)
}

fn span_name(span: &Span) -> &'static str {
    span.metadata().map(|m| m.name()).unwrap_or("unknown")
}
