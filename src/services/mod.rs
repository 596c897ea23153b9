//! Services coordinating validation between raw input and typed records.

use thiserror::Error;

use crate::domain::types::{ResourceKind, UnknownResourceKind};
use crate::forms::FormError;
use crate::schema::errors::ValidationError;

pub mod filters;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    UnknownResource(#[from] UnknownResourceKind),

    #[error("{0} is not read from query parameters")]
    NotAQuery(ResourceKind),

    #[error(transparent)]
    Form(#[from] FormError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
