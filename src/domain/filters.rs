//! Normalized list filters and page queries built from URL parameters.

use serde::Serialize;

/// Filter applied to the customer list.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct CustomerListFilter {
    /// Whether to list active customers. Defaults to `true` when absent.
    #[serde(rename = "Active")]
    pub active: bool,
    #[serde(rename = "SortDirection", skip_serializing_if = "Option::is_none")]
    pub sort_direction: Option<String>,
}

impl Default for CustomerListFilter {
    fn default() -> Self {
        Self {
            active: true,
            sort_direction: None,
        }
    }
}

/// Filter applied to the vehicle list.
///
/// Same shape as [`CustomerListFilter`] today, declared separately so the
/// two lists can grow apart.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct VehicleListFilter {
    /// Whether to list active vehicles. Defaults to `true` when absent.
    #[serde(rename = "Active")]
    pub active: bool,
    #[serde(rename = "SortDirection", skip_serializing_if = "Option::is_none")]
    pub sort_direction: Option<String>,
}

impl Default for VehicleListFilter {
    fn default() -> Self {
        Self {
            active: true,
            sort_direction: None,
        }
    }
}

/// Query accepted by the dashboard page.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct DashboardQuery {
    /// `None` means the parameter was not given, which is not the same as
    /// `Some(false)`.
    #[serde(rename = "showWidgetPicker", skip_serializing_if = "Option::is_none")]
    pub show_widget_picker: Option<bool>,
}
