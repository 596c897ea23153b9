//! Fleet API response shapes.

use serde::Serialize;

/// Placeholder stored when the server reports a rate without a name.
pub const RATE_NAME_NOT_SET: &str = "app-not-set";

/// Number of vehicles in a given status.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct VehicleStatusCount {
    pub name: String,
    pub total: u64,
}

/// Best rate suggested for an agreement.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OptimalRate {
    pub rate_id: i64,
    /// [`RATE_NAME_NOT_SET`] when the server sent no name.
    pub rate_name: String,
    pub is_optimal: bool,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AgreementNumber {
    pub agreement_no: String,
}
