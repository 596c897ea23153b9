//! HTTP handlers exposing the validation layer.

use actix_web::HttpResponse;

use crate::dto::api::{ErrorResponse, ValidationErrorResponse};
use crate::services::ServiceError;

pub mod api;
pub mod main;

/// Maps a service failure to the HTTP response returned to the caller.
pub fn service_error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Validation(validation) => {
            HttpResponse::UnprocessableEntity().json(ValidationErrorResponse::from(&validation))
        }
        other @ (ServiceError::UnknownResource(_)
        | ServiceError::NotAQuery(_)
        | ServiceError::Form(_)) => {
            log::warn!("Bad validation request: {other}");
            HttpResponse::BadRequest().json(ErrorResponse {
                error: other.to_string(),
            })
        }
    }
}
