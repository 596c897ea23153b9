use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use serde_json::Value;

use crate::routes::service_error_response;
use crate::services::filters::{parse_filters, parse_query, resolve_kind};

/// Validates the query string of a list or dashboard page.
#[get("/v1/filters/{kind}")]
pub async fn api_v1_filters(kind: web::Path<String>, req: HttpRequest) -> impl Responder {
    let result = resolve_kind(&kind).and_then(|kind| parse_query(kind, req.query_string()));

    match result {
        Ok(filter) => HttpResponse::Ok().json(filter),
        Err(err) => service_error_response(err),
    }
}

/// Validates a JSON body against any resource schema.
#[post("/v1/validate/{kind}")]
pub async fn api_v1_validate(
    kind: web::Path<String>,
    web::Json(body): web::Json<Value>,
) -> impl Responder {
    let result = resolve_kind(&kind)
        .and_then(|kind| parse_filters(kind, &body).map_err(Into::into));

    match result {
        Ok(filter) => HttpResponse::Ok().json(filter),
        Err(err) => service_error_response(err),
    }
}
