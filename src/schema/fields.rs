//! Field-by-field reader over a raw JSON object.

use serde_json::{Map, Value};

use crate::schema::errors::{Expected, FieldError, FieldErrorKind, FieldPath, ValueKind};

/// Reads the fields of one object, recording failures instead of stopping
/// at the first one.
///
/// Invalid fields read as `None`; the caller must check the shared error
/// list before building a record, so fallbacks never mask an error.
pub struct ObjectFields<'a> {
    map: &'a Map<String, Value>,
    path: FieldPath,
    errors: &'a mut Vec<FieldError>,
}

impl<'a> ObjectFields<'a> {
    /// Opens `value` as an object, recording a type mismatch otherwise.
    pub fn open(
        value: &'a Value,
        path: &FieldPath,
        errors: &'a mut Vec<FieldError>,
    ) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self {
                map,
                path: path.clone(),
                errors,
            }),
            other => {
                errors.push(FieldError::type_mismatch(
                    path.clone(),
                    Expected::Object,
                    ValueKind::of(other),
                ));
                None
            }
        }
    }

    /// Reads an optional field. Absent keys yield `None` without error.
    pub fn optional<T>(
        &mut self,
        key: &str,
        rule: impl Fn(&Value) -> Result<T, FieldErrorKind>,
    ) -> Option<T> {
        let map = self.map;
        let value = map.get(key)?;
        self.apply(key, value, rule)
    }

    /// Reads a field that must be present.
    pub fn required<T>(
        &mut self,
        key: &str,
        expected: Expected,
        rule: impl Fn(&Value) -> Result<T, FieldErrorKind>,
    ) -> Option<T> {
        let map = self.map;
        match map.get(key) {
            Some(value) => self.apply(key, value, rule),
            None => {
                self.errors.push(FieldError::type_mismatch(
                    self.path.key(key),
                    expected,
                    ValueKind::Missing,
                ));
                None
            }
        }
    }

    /// Reads a field whose absence or explicit `null` both map to `default`.
    pub fn nullable_or<T>(
        &mut self,
        key: &str,
        default: impl FnOnce() -> T,
        rule: impl Fn(&Value) -> Result<T, FieldErrorKind>,
    ) -> Option<T> {
        let map = self.map;
        match map.get(key) {
            None | Some(Value::Null) => Some(default()),
            Some(value) => self.apply(key, value, rule),
        }
    }

    fn apply<T>(
        &mut self,
        key: &str,
        value: &Value,
        rule: impl Fn(&Value) -> Result<T, FieldErrorKind>,
    ) -> Option<T> {
        match rule(value) {
            Ok(parsed) => Some(parsed),
            Err(kind) => {
                self.errors.push(FieldError::new(self.path.key(key), kind));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::schema::coerce::{coerce_bool, strict_string};

    #[test]
    fn collects_every_failing_field() {
        let raw = json!({"a": null, "b": 3});
        let mut errors = Vec::new();
        let mut fields = ObjectFields::open(&raw, &FieldPath::root(), &mut errors).unwrap();

        assert_eq!(fields.optional("a", coerce_bool), None);
        assert_eq!(fields.optional("b", strict_string), None);
        assert_eq!(fields.optional("c", strict_string), None);
        assert_eq!(fields.required("d", Expected::String, strict_string), None);

        let paths: Vec<String> = errors.iter().map(|e| e.path.to_string()).collect();
        assert_eq!(paths, vec!["$.a", "$.b", "$.d"]);
    }

    #[test]
    fn non_object_input_is_a_type_mismatch() {
        let raw = json!([1, 2]);
        let mut errors = Vec::new();
        assert!(ObjectFields::open(&raw, &FieldPath::root(), &mut errors).is_none());
        assert_eq!(
            errors[0].kind,
            FieldErrorKind::TypeMismatch {
                expected: Expected::Object,
                actual: ValueKind::Array,
            }
        );
    }

    #[test]
    fn nullable_or_defaults_on_null_and_absence() {
        let raw = json!({"name": null});
        let mut errors = Vec::new();
        let mut fields = ObjectFields::open(&raw, &FieldPath::root(), &mut errors).unwrap();
        let fallback = || "unset".to_string();

        assert_eq!(
            fields.nullable_or("name", fallback, strict_string),
            Some("unset".to_string())
        );
        assert_eq!(
            fields.nullable_or("other", fallback, strict_string),
            Some("unset".to_string())
        );
        assert!(errors.is_empty());
    }
}
