use core::fmt::{self, Display};

/// Returned when a failing [`Outcome`](crate::Outcome) is requested with no errors.
///
/// A failure always carries at least one [`Error`](crate::Error); an empty
/// list would describe a success, so the fallible constructors reject it.
///
/// # Examples
///
/// ```
/// use outcome_rail::{EmptyErrorList, Outcome};
///
/// let res = Outcome::<i32>::fail_many(Vec::new());
/// assert_eq!(res.unwrap_err(), EmptyErrorList);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EmptyErrorList;

impl Display for EmptyErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a failed outcome requires at least one error")
    }
}

impl core::error::Error for EmptyErrorList {}
