//! Normalized validation results handed back to routing and HTTP layers.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::domain::filters::{CustomerListFilter, DashboardQuery, VehicleListFilter};
use crate::domain::fleet::{AgreementNumber, OptimalRate, VehicleStatusCount};
use crate::domain::types::ResourceKind;

/// Errors raised when rendering a normalized record back to raw form.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("{0} has no query string form")]
    NotAQuery(ResourceKind),
    #[error("failed to encode query string: {0}")]
    Query(#[from] serde_html_form::ser::Error),
    #[error("failed to encode json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Typed record produced by validating one resource kind.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum NormalizedFilter {
    Customers(CustomerListFilter),
    Vehicles(VehicleListFilter),
    Dashboard(DashboardQuery),
    VehicleStatusCounts(Vec<VehicleStatusCount>),
    OptimalRate(Option<OptimalRate>),
    AgreementNumber(AgreementNumber),
}

impl NormalizedFilter {
    pub fn kind(&self) -> ResourceKind {
        match self {
            NormalizedFilter::Customers(_) => ResourceKind::Customers,
            NormalizedFilter::Vehicles(_) => ResourceKind::Vehicles,
            NormalizedFilter::Dashboard(_) => ResourceKind::Dashboard,
            NormalizedFilter::VehicleStatusCounts(_) => ResourceKind::VehicleStatusCounts,
            NormalizedFilter::OptimalRate(_) => ResourceKind::OptimalRate,
            NormalizedFilter::AgreementNumber(_) => ResourceKind::AgreementNumber,
        }
    }

    /// Record a query-parameter kind normalizes to when no parameters are
    /// given. Response kinds have no defaults.
    pub fn defaults(kind: ResourceKind) -> Option<Self> {
        match kind {
            ResourceKind::Customers => Some(Self::Customers(CustomerListFilter::default())),
            ResourceKind::Vehicles => Some(Self::Vehicles(VehicleListFilter::default())),
            ResourceKind::Dashboard => Some(Self::Dashboard(DashboardQuery::default())),
            ResourceKind::VehicleStatusCounts
            | ResourceKind::OptimalRate
            | ResourceKind::AgreementNumber => None,
        }
    }

    /// JSON form using the raw key names, suitable for re-validation.
    pub fn to_raw(&self) -> Result<Value, EncodeError> {
        Ok(serde_json::to_value(self)?)
    }

    /// URL query string form. Unset optional parameters are omitted.
    pub fn to_query_string(&self) -> Result<String, EncodeError> {
        let encoded = match self {
            NormalizedFilter::Customers(filter) => serde_html_form::to_string(filter)?,
            NormalizedFilter::Vehicles(filter) => serde_html_form::to_string(filter)?,
            NormalizedFilter::Dashboard(query) => serde_html_form::to_string(query)?,
            other => return Err(EncodeError::NotAQuery(other.kind())),
        };
        Ok(encoded)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn raw_form_uses_wire_keys() {
        let filter = NormalizedFilter::Customers(CustomerListFilter {
            active: false,
            sort_direction: Some("asc".to_string()),
        });
        assert_eq!(
            filter.to_raw().unwrap(),
            json!({"Active": false, "SortDirection": "asc"})
        );
    }

    #[test]
    fn query_string_omits_unset_parameters() {
        let filter = NormalizedFilter::Vehicles(VehicleListFilter::default());
        assert_eq!(filter.to_query_string().unwrap(), "Active=true");

        let dashboard = NormalizedFilter::Dashboard(DashboardQuery::default());
        assert_eq!(dashboard.to_query_string().unwrap(), "");
    }

    #[test]
    fn response_kinds_have_no_query_string() {
        let rate = NormalizedFilter::OptimalRate(None);
        assert!(matches!(
            rate.to_query_string(),
            Err(EncodeError::NotAQuery(ResourceKind::OptimalRate))
        ));
        assert_eq!(rate.to_raw().unwrap(), Value::Null);
    }
}
