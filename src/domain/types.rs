//! Identifiers shared across the validation layer.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a resource name does not match any known schema.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown resource kind: {0}")]
pub struct UnknownResourceKind(pub String);

/// Selects which schema applies to a validation call.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    /// Customer list query parameters.
    Customers,
    /// Vehicle list query parameters.
    Vehicles,
    /// Dashboard page query parameters.
    Dashboard,
    /// Vehicle counts per status, as returned by the fleet API.
    VehicleStatusCounts,
    /// Optimal rate for an agreement; may be `null`.
    OptimalRate,
    /// Freshly allocated agreement number.
    AgreementNumber,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::Customers,
        ResourceKind::Vehicles,
        ResourceKind::Dashboard,
        ResourceKind::VehicleStatusCounts,
        ResourceKind::OptimalRate,
        ResourceKind::AgreementNumber,
    ];

    /// Name used in URLs and logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Customers => "customers",
            ResourceKind::Vehicles => "vehicles",
            ResourceKind::Dashboard => "dashboard",
            ResourceKind::VehicleStatusCounts => "vehicle-status-counts",
            ResourceKind::OptimalRate => "optimal-rate",
            ResourceKind::AgreementNumber => "agreement-number",
        }
    }

    /// Whether the kind is fed from URL query parameters rather than JSON
    /// response bodies.
    pub const fn is_query(self) -> bool {
        matches!(
            self,
            ResourceKind::Customers | ResourceKind::Vehicles | ResourceKind::Dashboard
        )
    }
}

impl Display for ResourceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = UnknownResourceKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownResourceKind(s.to_string()))
    }
}
