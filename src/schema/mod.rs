//! Declarative schemas turning loosely-typed input into domain records.
//!
//! Each resource declares its own shape; shared pieces (field reader,
//! coercion rules, list-filter builder) live alongside.

use serde_json::Value;

pub mod coerce;
pub mod customer;
pub mod dashboard;
pub mod errors;
pub mod fields;
pub mod fleet;
pub mod list_filter;
pub mod vehicle;

use crate::schema::errors::{Expected, FieldError, FieldPath, ValueKind, ValidationError};

/// A record that can be read from raw JSON.
pub trait Schema: Sized {
    /// Reads `value` located at `path`, pushing every failure into `errors`.
    ///
    /// Returns `None` when the value could not be read. A `Some` result is
    /// only meaningful if no errors were recorded.
    fn read(value: &Value, path: &FieldPath, errors: &mut Vec<FieldError>) -> Option<Self>;

    /// Validates a whole input; all-or-nothing.
    fn validate(value: &Value) -> Result<Self, ValidationError> {
        let mut errors = Vec::new();
        let parsed = Self::read(value, &FieldPath::root(), &mut errors);
        match parsed {
            Some(record) if errors.is_empty() => Ok(record),
            _ => Err(ValidationError::new(errors)),
        }
    }
}

/// `null` reads as `None`; anything else must match the inner schema.
impl<T: Schema> Schema for Option<T> {
    fn read(value: &Value, path: &FieldPath, errors: &mut Vec<FieldError>) -> Option<Self> {
        match value {
            Value::Null => Some(None),
            other => T::read(other, path, errors).map(Some),
        }
    }
}

/// Arrays keep their element order; every element is checked.
impl<T: Schema> Schema for Vec<T> {
    fn read(value: &Value, path: &FieldPath, errors: &mut Vec<FieldError>) -> Option<Self> {
        let Value::Array(items) = value else {
            errors.push(FieldError::type_mismatch(
                path.clone(),
                Expected::Array,
                ValueKind::of(value),
            ));
            return None;
        };

        let mut records = Vec::with_capacity(items.len());
        let mut complete = true;
        for (index, item) in items.iter().enumerate() {
            match T::read(item, &path.index(index), errors) {
                Some(record) => records.push(record),
                None => complete = false,
            }
        }
        complete.then_some(records)
    }
}
