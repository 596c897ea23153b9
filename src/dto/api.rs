//! DTOs returned by the validation API endpoints.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::schema::errors::ValidationError;

/// Body of a `422` response: messages grouped by field path.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ValidationErrorResponse {
    pub errors: BTreeMap<String, Vec<String>>,
}

impl From<&ValidationError> for ValidationErrorResponse {
    fn from(err: &ValidationError) -> Self {
        Self {
            errors: err.field_messages(),
        }
    }
}

/// Body of a `400` response.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}
