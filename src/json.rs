//! Forgiving JSON decoding for persisted or externally supplied state.

use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
enum DecodeError {
    #[error("no input")]
    Empty,
    #[error("malformed input {raw:?}: {source}")]
    MalformedInput {
        raw: String,
        #[source]
        source: serde_json::Error,
    },
}

fn decode<T: DeserializeOwned>(text: Option<&str>) -> Result<T, DecodeError> {
    let raw = text.map(str::trim).filter(|raw| !raw.is_empty());
    let raw = raw.ok_or(DecodeError::Empty)?;
    serde_json::from_str(raw).map_err(|source| DecodeError::MalformedInput {
        raw: raw.to_string(),
        source,
    })
}

/// Decodes `text` as JSON, returning `fallback` when the text is absent,
/// blank, or cannot be decoded into `T`.
///
/// Never fails. Callers cannot tell missing input from corrupt input, and
/// the decoded value is not checked against any schema; run one of the
/// [`crate::schema`] validators afterwards when that matters.
pub fn safe_parse_json<T: DeserializeOwned>(text: Option<&str>, fallback: T) -> T {
    match decode(text) {
        Ok(value) => value,
        Err(err) => {
            log::debug!("Using fallback value: {err}");
            fallback
        }
    }
}
