//! Lifting URL query strings into the JSON shape the schemas read.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::forms::FormError;

/// Query string parameters, one value per key.
///
/// URL parameters are always strings; booleans and numbers are left to the
/// schema coercion rules. When a key repeats, its first value wins.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FilterQueryForm {
    params: BTreeMap<String, String>,
}

impl FilterQueryForm {
    /// Decodes a raw (percent-encoded) query string without the leading `?`.
    pub fn parse(query: &str) -> Result<Self, FormError> {
        let grouped: BTreeMap<String, Vec<String>> = serde_html_form::from_str(query)
            .map_err(|err| FormError::MalformedQuery(err.to_string()))?;

        let params = grouped
            .into_iter()
            .filter_map(|(key, values)| values.into_iter().next().map(|value| (key, value)))
            .collect();

        Ok(Self { params })
    }

    /// JSON object of string values.
    pub fn into_json(self) -> Value {
        let map: Map<String, Value> = self
            .params
            .into_iter()
            .map(|(key, value)| (key, Value::String(value)))
            .collect();
        Value::Object(map)
    }
}
