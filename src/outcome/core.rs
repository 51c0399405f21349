use crate::types::alloc_type::{String, Vec};
use crate::types::{EmptyErrorList, Error, ErrorVec};
use smallvec::smallvec;

macro_rules! trace_mutation {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!(target: "outcome_rail", $($arg)*);
    };
}

/// A value-or-errors container that accumulates failures instead of raising them.
///
/// `Outcome<T>` is either a success, optionally carrying a value of type `T`,
/// or a failure carrying one or more [`Error`]s in insertion order. Success is
/// derived from the error list: an outcome is successful exactly when it holds
/// no errors.
///
/// Unlike [`Result`], an outcome is a mutable record. Long-lived outcomes can
/// gather errors in place through [`add_errors`](Self::add_errors), drop them
/// again with [`remove_errors_with_code`](Self::remove_errors_with_code) or
/// [`clear_errors`](Self::clear_errors), and forget their value with
/// [`reset_value`](Self::reset_value).
///
/// The value and the error list are independent. Adding errors to a valued
/// success turns it into a failure that still reports
/// [`has_value`](Self::has_value); callers must not assume a failure holds no
/// value.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let ok = Outcome::success(5).map(|x| x * 2);
/// assert_eq!(ok.value(), Some(&10));
///
/// let bad = Outcome::<i32>::fail("bad input", "E1");
/// assert!(bad.is_failure());
/// assert_eq!(bad.errors()[0].code(), "E1");
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Outcome<T> {
    pub(crate) value: Option<T>,
    pub(crate) errors: ErrorVec<Error>,
}

impl<T> Outcome<T> {
    /// Creates a success that carries no value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let done = Outcome::<String>::success_empty();
    /// assert!(done.is_success());
    /// assert!(!done.has_value());
    /// ```
    #[inline]
    pub fn success_empty() -> Self {
        Self { value: None, errors: ErrorVec::new() }
    }

    /// Creates a success carrying `value`.
    #[inline]
    pub fn success(value: T) -> Self {
        Self { value: Some(value), errors: ErrorVec::new() }
    }

    /// Explicit value-to-success conversion.
    ///
    /// Same as [`success`](Self::success); spelled out so conversion points
    /// stay visible at call sites.
    #[inline]
    pub fn from_value(value: T) -> Self {
        Self::success(value)
    }

    /// Creates a **failure** with a single uncoded error.
    ///
    /// Despite the name this does not produce a soft success: the outcome
    /// fails exactly like [`fail`](Self::fail) with an empty code.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let w = Outcome::<()>::warn("disk almost full");
    /// assert!(w.is_failure());
    /// assert_eq!(w.errors()[0].code(), "");
    /// ```
    #[inline]
    pub fn warn<M: Into<String>>(message: M) -> Self {
        Self::fail_with(Error::new(message))
    }

    /// Creates a failure with one error built from `message` and `code`.
    #[inline]
    pub fn fail<M, C>(message: M, code: C) -> Self
    where
        M: Into<String>,
        C: Into<String>,
    {
        Self::fail_with(Error::with_code(message, code))
    }

    /// Creates a failure holding `error`.
    #[inline]
    pub fn fail_with(error: Error) -> Self {
        Self { value: None, errors: smallvec![error] }
    }

    /// Creates a failure holding every error of `errors`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyErrorList`] when `errors` yields nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Outcome};
    ///
    /// let out = Outcome::<i32>::fail_many([Error::new("a"), Error::new("b")]).unwrap();
    /// assert_eq!(out.error_count(), 2);
    ///
    /// assert!(Outcome::<i32>::fail_many(Vec::new()).is_err());
    /// ```
    pub fn fail_many<I>(errors: I) -> Result<Self, EmptyErrorList>
    where
        I: IntoIterator<Item = Error>,
    {
        let errors: ErrorVec<Error> = errors.into_iter().collect();
        if errors.is_empty() {
            return Err(EmptyErrorList);
        }
        Ok(Self { value: None, errors })
    }

    /// Creates a failure from a native error, keeping only its message.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let parse = "abc".parse::<u8>().unwrap_err();
    /// let out = Outcome::<u8>::from_exception(&parse);
    /// assert_eq!(out.errors()[0].message(), parse.to_string());
    /// ```
    #[inline]
    pub fn from_exception(source: &dyn core::error::Error) -> Self {
        Self::fail_with(Error::from_std(source))
    }

    /// Returns `true` if no errors are held.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns `true` if at least one error is held.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns `true` if a value was supplied and not reset since.
    ///
    /// This is independent of success: see [`add_errors`](Self::add_errors).
    #[must_use]
    #[inline]
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Returns the held value, if any.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Returns the errors in insertion order.
    #[must_use]
    #[inline]
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Returns the number of held errors.
    #[must_use]
    #[inline]
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Iterates over the held errors in insertion order.
    #[inline]
    pub fn iter_errors(&self) -> core::slice::Iter<'_, Error> {
        self.errors.iter()
    }

    /// Returns every error whose code equals `code`, in stored order.
    ///
    /// Matching is exact and case-sensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Outcome};
    ///
    /// let out = Outcome::<()>::fail_many([
    ///     Error::with_code("a", "NET"),
    ///     Error::with_code("b", "IO"),
    ///     Error::with_code("c", "NET"),
    /// ])
    /// .unwrap();
    ///
    /// let net: Vec<_> = out.errors_with_code("NET").into_iter().map(Error::message).collect();
    /// assert_eq!(net, ["a", "c"]);
    /// assert!(out.errors_with_code("net").is_empty());
    /// ```
    #[must_use]
    pub fn errors_with_code(&self, code: &str) -> Vec<&Error> {
        self.errors.iter().filter(|e| e.has_code(code)).collect()
    }

    /// Returns `true` if any held error carries `code`.
    #[must_use]
    pub fn has_errors_with_code(&self, code: &str) -> bool {
        self.errors.iter().any(|e| e.has_code(code))
    }

    /// Drops every error, making the outcome a success.
    ///
    /// The value is left as is: a failure without a value becomes a
    /// valueless success, it does not regain a value reset earlier.
    pub fn clear_errors(&mut self) {
        trace_mutation!(dropped = self.errors.len(), "clearing outcome errors");
        self.errors.clear();
    }

    /// Appends `errors` after the existing ones.
    ///
    /// Any non-empty input makes the outcome a failure. The value is not
    /// touched, so a valued success becomes a failure that still reports
    /// [`has_value`](Self::has_value). An empty input changes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Outcome};
    ///
    /// let mut out = Outcome::success(1);
    /// out.add_errors([Error::with_code("late", "A")]);
    /// assert!(out.is_failure());
    /// assert!(out.has_value());
    /// ```
    pub fn add_errors<I>(&mut self, errors: I)
    where
        I: IntoIterator<Item = Error>,
    {
        self.errors.extend(errors);
        trace_mutation!(total = self.errors.len(), "added outcome errors");
    }

    /// Appends a single error.
    #[inline]
    pub fn add_error(&mut self, error: Error) {
        self.add_errors(core::iter::once(error));
    }

    /// Removes every error whose code equals `code` and returns how many went.
    ///
    /// Removing the last error turns the outcome back into a success.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Outcome};
    ///
    /// let mut out = Outcome::<()>::success_empty();
    /// out.add_errors([Error::with_code("m", "A")]);
    /// assert_eq!(out.remove_errors_with_code("A"), 1);
    /// assert!(out.is_success());
    /// ```
    pub fn remove_errors_with_code(&mut self, code: &str) -> usize {
        let before = self.errors.len();
        self.errors.retain(|e| !e.has_code(code));
        let removed = before - self.errors.len();
        trace_mutation!(code, removed, remaining = self.errors.len(), "removed outcome errors by code");
        removed
    }

    /// Forgets the held value and returns it. Errors are not touched.
    pub fn reset_value(&mut self) -> Option<T> {
        trace_mutation!(had_value = self.value.is_some(), "resetting outcome value");
        self.value.take()
    }

    /// Transforms the value of a success.
    ///
    /// A failure yields a new failure that takes over the same errors and
    /// holds no value. A success without a value stays a valueless success;
    /// `f` is only invoked when there is a value to hand it.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::success(5).map(|x| x * 2), Outcome::success(10));
    ///
    /// let failed = Outcome::<i32>::fail("oops", "E2").map(|x| x * 2);
    /// assert_eq!(failed.errors()[0].message(), "oops");
    /// ```
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        if self.is_failure() {
            return Outcome::propagate(self.errors);
        }
        Outcome { value: self.value.map(f), errors: ErrorVec::new() }
    }

    /// Chains a step that may itself fail.
    ///
    /// `f` runs only on a valued success. Failures pass their errors through
    /// and a valueless success stays one.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn half(x: i32) -> Outcome<i32> {
    ///     if x % 2 == 0 { Outcome::success(x / 2) } else { Outcome::fail("odd", "PARITY") }
    /// }
    ///
    /// assert_eq!(Outcome::success(8).and_then(half).value(), Some(&4));
    /// assert!(Outcome::success(7).and_then(half).is_failure());
    /// ```
    pub fn and_then<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        if self.is_failure() {
            return Outcome::propagate(self.errors);
        }
        match self.value {
            Some(value) => f(value),
            None => Outcome::success_empty(),
        }
    }

    /// Rewrites every error, keeping order, value and success state.
    pub fn map_errors<F>(self, f: F) -> Self
    where
        F: FnMut(Error) -> Error,
    {
        Self { value: self.value, errors: self.errors.into_iter().map(f).collect() }
    }

    /// Pairs this outcome with `other`.
    ///
    /// Two valued successes give a success of `(a, b)`. Two successes where
    /// either side has no value give a valueless success. Otherwise the result
    /// fails with this outcome's errors followed by `other`'s, whichever side
    /// failed.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let both = Outcome::success(1).combine_with(Outcome::success("a"));
    /// assert_eq!(both.value(), Some(&(1, "a")));
    ///
    /// let mixed = Outcome::success(5).combine_with(Outcome::<String>::fail("oops", "E2"));
    /// assert_eq!(mixed.error_count(), 1);
    /// assert_eq!(mixed.errors()[0].code(), "E2");
    /// ```
    pub fn combine_with<U>(self, other: Outcome<U>) -> Outcome<(T, U)> {
        if self.is_success() && other.is_success() {
            return match (self.value, other.value) {
                (Some(a), Some(b)) => Outcome::success((a, b)),
                _ => Outcome::success_empty(),
            };
        }
        let mut errors = self.errors;
        errors.extend(other.errors);
        Outcome::propagate(errors)
    }

    /// Calls `f` with the value, if any, when the outcome is a success.
    ///
    /// A valueless success still triggers `f`, with `None`.
    pub fn on_success<F>(&self, f: F) -> &Self
    where
        F: FnOnce(Option<&T>),
    {
        if self.is_success() {
            f(self.value.as_ref());
        }
        self
    }

    /// Calls `f` with every error when the outcome is a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut seen = 0;
    /// Outcome::<u8>::warn("low battery")
    ///     .on_success(|_| unreachable!())
    ///     .on_failure(|errors| seen = errors.len());
    /// assert_eq!(seen, 1);
    /// ```
    pub fn on_failure<F>(&self, f: F) -> &Self
    where
        F: FnOnce(&[Error]),
    {
        if self.is_failure() {
            f(&self.errors);
        }
        self
    }

    /// Converts into a [`Result`], dropping any stale value on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::success(3).into_result(), Ok(Some(3)));
    /// assert_eq!(Outcome::<i32>::success_empty().into_result(), Ok(None));
    /// assert!(Outcome::<i32>::warn("w").into_result().is_err());
    /// ```
    pub fn into_result(self) -> Result<Option<T>, ErrorVec<Error>> {
        if self.is_failure() {
            return Err(self.errors);
        }
        Ok(self.value)
    }

    /// Consumes the outcome, returning the held value regardless of success.
    #[inline]
    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// Consumes the outcome, returning its errors.
    #[inline]
    pub fn into_errors(self) -> ErrorVec<Error> {
        self.errors
    }

    /// Consumes the outcome, returning the value and the errors.
    #[inline]
    pub fn into_parts(self) -> (Option<T>, ErrorVec<Error>) {
        (self.value, self.errors)
    }

    #[inline]
    pub(crate) fn propagate(errors: ErrorVec<Error>) -> Self {
        Self { value: None, errors }
    }
}

impl<T> Default for Outcome<T> {
    #[inline]
    fn default() -> Self {
        Self::success_empty()
    }
}
