//! Errors reported by the filter schemas.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde_json::Value;
use thiserror::Error;

/// Kind of value a schema field expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Expected {
    Boolean,
    String,
    Integer,
    Count,
    Object,
    Array,
}

impl Display for Expected {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Expected::Boolean => "boolean",
            Expected::String => "string",
            Expected::Integer => "integer",
            Expected::Count => "non-negative integer",
            Expected::Object => "object",
            Expected::Array => "array",
        };
        f.write_str(name)
    }
}

/// Kind of value actually found in the raw input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// The key was not present at all.
    Missing,
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// Classifies a JSON value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ValueKind::Missing => "nothing",
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        };
        f.write_str(name)
    }
}

/// Reason a single field failed validation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// Value present (or required but missing) with the wrong kind.
    #[error("expected {expected}, received {actual}")]
    TypeMismatch {
        expected: Expected,
        actual: ValueKind,
    },
    /// Coercion was attempted but no rule accepted the raw value.
    #[error("cannot coerce {raw:?} to {target}")]
    CoercionFailure { target: Expected, raw: String },
}

/// One segment of a field path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum PathSegment {
    Key(String),
    Index(usize),
}

/// Location of a field inside the raw input, rendered as `$`, `$.Active`
/// or `$[1].total`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    /// Path of the input itself.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Returns a child path addressing `key`.
    pub fn key(&self, key: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Key(key.to_string()));
        Self(segments)
    }

    /// Returns a child path addressing element `index`.
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Index(index));
        Self(segments)
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("$")?;
        for segment in &self.0 {
            match segment {
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// A failing field together with its location.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{path}: {kind}")]
pub struct FieldError {
    pub path: FieldPath,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn new(path: FieldPath, kind: FieldErrorKind) -> Self {
        Self { path, kind }
    }

    pub fn type_mismatch(path: FieldPath, expected: Expected, actual: ValueKind) -> Self {
        Self::new(path, FieldErrorKind::TypeMismatch { expected, actual })
    }
}

/// Aggregated failure of a whole validation call.
///
/// Every failing field is listed; there is no partial result.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("validation failed: {}", join_errors(.errors))]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    /// All field errors in the order they were found.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Groups the messages by rendered field path for inline display.
    pub fn field_messages(&self) -> BTreeMap<String, Vec<String>> {
        let mut messages: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for error in &self.errors {
            messages
                .entry(error.path.to_string())
                .or_default()
                .push(error.kind.to_string());
        }
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_renders_keys_and_indices() {
        let path = FieldPath::root().index(1).key("total");
        assert_eq!(path.to_string(), "$[1].total");
        assert_eq!(FieldPath::root().to_string(), "$");
    }

    #[test]
    fn field_messages_group_by_path() {
        let active = FieldPath::root().key("Active");
        let error = ValidationError::new(vec![
            FieldError::type_mismatch(active, Expected::Boolean, ValueKind::Null),
            FieldError::new(
                FieldPath::root().key("SortDirection"),
                FieldErrorKind::TypeMismatch {
                    expected: Expected::String,
                    actual: ValueKind::Number,
                },
            ),
        ]);

        let messages = error.field_messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(
            messages["$.Active"],
            vec!["expected boolean, received null".to_string()]
        );
    }
}
