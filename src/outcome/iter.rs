use crate::outcome::core::Outcome;
use crate::types::alloc_type::Vec;
use crate::types::{Error, ErrorVec};

/// Collects outcomes into one, accumulating every error in order.
///
/// Values of successful outcomes are gathered into a `Vec`; a valueless
/// success contributes nothing. If any input failed, the collected outcome
/// fails with all errors and no value.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let all: Outcome<Vec<i32>> = vec![Outcome::success(1), Outcome::success(2)].into_iter().collect();
/// assert_eq!(all.value(), Some(&vec![1, 2]));
///
/// let some: Outcome<Vec<i32>> =
///     vec![Outcome::success(1), Outcome::warn("a"), Outcome::warn("b")].into_iter().collect();
/// assert_eq!(some.error_count(), 2);
/// ```
impl<T> FromIterator<Outcome<T>> for Outcome<Vec<T>> {
    fn from_iter<I: IntoIterator<Item = Outcome<T>>>(iter: I) -> Self {
        let mut values = Vec::new();
        let mut errors = ErrorVec::new();

        for outcome in iter {
            if outcome.is_failure() {
                errors.extend(outcome.errors);
            } else if let Some(value) = outcome.value {
                values.push(value);
            }
        }

        if errors.is_empty() {
            Outcome::success(values)
        } else {
            Outcome::propagate(errors)
        }
    }
}

/// Collects plain results, turning every `Err` into an accumulated error.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let parsed: Outcome<Vec<u8>> = ["1", "x", "3"].iter().map(|s| s.parse::<u8>().map_err(|e| e.to_string())).collect();
/// assert_eq!(parsed.error_count(), 1);
/// ```
impl<T, E> FromIterator<Result<T, E>> for Outcome<Vec<T>>
where
    E: Into<Error>,
{
    fn from_iter<I: IntoIterator<Item = Result<T, E>>>(iter: I) -> Self {
        iter.into_iter().map(Outcome::<T>::from).collect()
    }
}

/// Appends errors, as [`Outcome::add_errors`] does.
impl<T> Extend<Error> for Outcome<T> {
    fn extend<I: IntoIterator<Item = Error>>(&mut self, iter: I) {
        self.add_errors(iter);
    }
}

/// Yields the held value of a success, nothing otherwise.
impl<T> IntoIterator for Outcome<T> {
    type Item = T;
    type IntoIter = core::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        if self.is_failure() {
            return None.into_iter();
        }
        self.value.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Outcome<T> {
    type Item = &'a T;
    type IntoIter = core::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        if self.is_failure() {
            return None.into_iter();
        }
        self.value.as_ref().into_iter()
    }
}
