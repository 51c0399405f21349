//! Wire shape of [`Outcome`].
//!
//! An outcome is rendered as an object with exactly three fields, in this
//! order:
//!
//! ```text
//! { "IsSuccess": bool, "Value": <value or null>, "Errors": [ { "Message": "...", "Code": "..." } ] }
//! ```
//!
//! `Value` is whatever the payload serializes to, or `null` when no value is
//! held. A failure that kept a value from before [`Outcome::add_errors`]
//! still emits it.
use crate::outcome::core::Outcome;
use crate::types::{Error, ErrorVec};
use serde::de::Error as _;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const STRUCT_NAME: &str = "Outcome";
const IS_SUCCESS: &str = "IsSuccess";
const VALUE: &str = "Value";
const ERRORS: &str = "Errors";

impl<T: Serialize> Serialize for Outcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct(STRUCT_NAME, 3)?;
        state.serialize_field(IS_SUCCESS, &self.is_success())?;
        state.serialize_field(VALUE, &self.value)?;
        state.serialize_field(ERRORS, self.errors.as_slice())?;
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(rename = "Outcome")]
struct Wire<T> {
    #[serde(rename = "IsSuccess")]
    is_success: bool,
    #[serde(rename = "Value")]
    value: Option<T>,
    #[serde(rename = "Errors", default)]
    errors: ErrorVec<Error>,
}

/// Reads the shape produced by `Serialize`.
///
/// `IsSuccess` must agree with `Errors`: a success with errors, or a
/// failure without any, is rejected.
///
/// A `null` `Value` always reads back as "no value". Payloads that serialize
/// to `null` themselves, such as `()` or `None::<T>`, therefore come back
/// with [`Outcome::has_value`] returning `false`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Outcome<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = Wire::<T>::deserialize(deserializer)?;
        if wire.is_success != wire.errors.is_empty() {
            return Err(D::Error::custom(
                "`IsSuccess` must be true exactly when `Errors` is empty",
            ));
        }
        Ok(Outcome { value: wire.value, errors: wire.errors })
    }
}

#[cfg(feature = "json")]
impl<T: Serialize> Outcome<T> {
    /// Renders the outcome as compact JSON.
    ///
    /// # Errors
    ///
    /// Fails only if the payload's own `Serialize` impl fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let json = Outcome::success(42).to_json().unwrap();
    /// assert_eq!(json, r#"{"IsSuccess":true,"Value":42,"Errors":[]}"#);
    /// ```
    pub fn to_json(&self) -> Result<crate::types::alloc_type::String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
