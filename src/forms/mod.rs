//! Raw request payloads accepted by the validation routes.

use thiserror::Error;

pub mod filters;

#[derive(Debug, Error)]
/// Errors that can occur when decoding raw request data.
pub enum FormError {
    #[error("malformed query string: {0}")]
    MalformedQuery(String),
}
