//! Value rules applied to individual fields.
//!
//! `coerce_*` rules accept the looser representations a URL query string
//! produces; `strict_*` rules require the declared JSON type.

use serde_json::Value;

use crate::schema::errors::{Expected, FieldErrorKind, ValueKind};

fn mismatch(expected: Expected, value: &Value) -> FieldErrorKind {
    FieldErrorKind::TypeMismatch {
        expected,
        actual: ValueKind::of(value),
    }
}

/// Booleans, numbers and strings. Never fails on a string.
///
/// Strings are trimmed and compared case-insensitively: `false`, `0`, `no`,
/// `off` and the empty string are false, numeric strings are true when
/// non-zero, and every other string is true.
pub fn coerce_bool(value: &Value) -> Result<bool, FieldErrorKind> {
    match value {
        Value::Bool(flag) => Ok(*flag),
        Value::Number(number) => Ok(number.as_f64().is_some_and(|n| n != 0.0)),
        Value::String(raw) => Ok(bool_from_str(raw)),
        other => Err(mismatch(Expected::Boolean, other)),
    }
}

fn bool_from_str(raw: &str) -> bool {
    let normalized = raw.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "false" | "0" | "no" | "off" | "" => false,
        other => other.parse::<f64>().map_or(true, |n| n != 0.0),
    }
}

/// Non-negative integers, given either as JSON numbers or digit strings.
pub fn coerce_count(value: &Value) -> Result<u64, FieldErrorKind> {
    match value {
        Value::Number(number) => number.as_u64().ok_or_else(|| FieldErrorKind::CoercionFailure {
            target: Expected::Count,
            raw: number.to_string(),
        }),
        Value::String(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|_| FieldErrorKind::CoercionFailure {
                target: Expected::Count,
                raw: raw.clone(),
            }),
        other => Err(mismatch(Expected::Count, other)),
    }
}

pub fn strict_string(value: &Value) -> Result<String, FieldErrorKind> {
    match value {
        Value::String(text) => Ok(text.clone()),
        other => Err(mismatch(Expected::String, other)),
    }
}

pub fn strict_integer(value: &Value) -> Result<i64, FieldErrorKind> {
    value
        .as_i64()
        .ok_or_else(|| mismatch(Expected::Integer, value))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn bool_accepts_query_string_literals() {
        for raw in ["true", "TRUE", " 1 ", "yes", "on", "2"] {
            assert_eq!(coerce_bool(&json!(raw)), Ok(true), "{raw}");
        }
        for raw in ["false", "0", "0.0", "no", "Off", "", "  "] {
            assert_eq!(coerce_bool(&json!(raw)), Ok(false), "{raw}");
        }
    }

    #[test]
    fn bool_treats_any_other_word_as_true() {
        for raw in ["maybe", "yes please", "n", "falsey"] {
            assert_eq!(coerce_bool(&json!(raw)), Ok(true), "{raw}");
        }
    }

    #[test]
    fn bool_accepts_numbers_and_booleans() {
        assert_eq!(coerce_bool(&json!(true)), Ok(true));
        assert_eq!(coerce_bool(&json!(0)), Ok(false));
        assert_eq!(coerce_bool(&json!(3)), Ok(true));
    }

    #[test]
    fn bool_rejects_null_and_containers() {
        assert_eq!(
            coerce_bool(&json!(["true"])),
            Err(FieldErrorKind::TypeMismatch {
                expected: Expected::Boolean,
                actual: ValueKind::Array,
            })
        );
        assert_eq!(
            coerce_bool(&Value::Null),
            Err(FieldErrorKind::TypeMismatch {
                expected: Expected::Boolean,
                actual: ValueKind::Null,
            })
        );
    }

    #[test]
    fn count_parses_digit_strings() {
        assert_eq!(coerce_count(&json!("12")), Ok(12));
        assert_eq!(coerce_count(&json!(7)), Ok(7));
        assert!(matches!(
            coerce_count(&json!(-1)),
            Err(FieldErrorKind::CoercionFailure { .. })
        ));
        assert!(matches!(
            coerce_count(&json!("many")),
            Err(FieldErrorKind::CoercionFailure { .. })
        ));
    }

    #[test]
    fn strict_rules_do_not_coerce() {
        assert!(strict_string(&json!(5)).is_err());
        assert!(strict_integer(&json!("5")).is_err());
        assert_eq!(strict_integer(&json!(5)), Ok(5));
    }
}
