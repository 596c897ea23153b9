//! Validation workflows shared by the routes and local callers.

use serde_json::{Map, Value};

use crate::domain::filters::{CustomerListFilter, DashboardQuery, VehicleListFilter};
use crate::domain::fleet::{AgreementNumber, OptimalRate, VehicleStatusCount};
use crate::domain::types::ResourceKind;
use crate::dto::filters::NormalizedFilter;
use crate::forms::filters::FilterQueryForm;
use crate::json::safe_parse_json;
use crate::schema::Schema;
use crate::schema::errors::ValidationError;
use crate::services::{ServiceError, ServiceResult};

/// Resolves a resource name from a URL segment.
pub fn resolve_kind(name: &str) -> ServiceResult<ResourceKind> {
    Ok(name.parse::<ResourceKind>()?)
}

/// Validates `raw` against the schema selected by `kind`.
pub fn parse_filters(
    kind: ResourceKind,
    raw: &Value,
) -> Result<NormalizedFilter, ValidationError> {
    let parsed = match kind {
        ResourceKind::Customers => {
            CustomerListFilter::validate(raw).map(NormalizedFilter::Customers)
        }
        ResourceKind::Vehicles => VehicleListFilter::validate(raw).map(NormalizedFilter::Vehicles),
        ResourceKind::Dashboard => DashboardQuery::validate(raw).map(NormalizedFilter::Dashboard),
        ResourceKind::VehicleStatusCounts => {
            Vec::<VehicleStatusCount>::validate(raw).map(NormalizedFilter::VehicleStatusCounts)
        }
        ResourceKind::OptimalRate => {
            Option::<OptimalRate>::validate(raw).map(NormalizedFilter::OptimalRate)
        }
        ResourceKind::AgreementNumber => {
            AgreementNumber::validate(raw).map(NormalizedFilter::AgreementNumber)
        }
    };

    if let Err(err) = &parsed {
        log::debug!("Rejected {kind} input: {err}");
    }
    parsed
}

/// Validates the URL query string of a query-parameter kind.
pub fn parse_query(kind: ResourceKind, query: &str) -> ServiceResult<NormalizedFilter> {
    if !kind.is_query() {
        return Err(ServiceError::NotAQuery(kind));
    }

    let form = FilterQueryForm::parse(query)?;
    Ok(parse_filters(kind, &form.into_json())?)
}

/// Restores cached filter state, falling back to the defaults of `kind`
/// when the cache is missing, corrupt, or no longer validates.
pub fn restore_filters(
    kind: ResourceKind,
    stored: Option<&str>,
) -> ServiceResult<NormalizedFilter> {
    let defaults = NormalizedFilter::defaults(kind).ok_or(ServiceError::NotAQuery(kind))?;

    let raw = safe_parse_json(stored, Value::Object(Map::new()));
    match parse_filters(kind, &raw) {
        Ok(filter) => Ok(filter),
        Err(err) => {
            log::warn!("Discarding stale {kind} filter state: {err}");
            Ok(defaults)
        }
    }
}
