//! Vehicle list query schema.

use serde_json::Value;

use crate::domain::filters::VehicleListFilter;
use crate::schema::Schema;
use crate::schema::errors::{FieldError, FieldPath};
use crate::schema::list_filter::ListFilterShape;

pub const VEHICLE_LIST_SHAPE: ListFilterShape = ListFilterShape {
    active_key: "Active",
    default_active: true,
    sort_key: "SortDirection",
};

impl Schema for VehicleListFilter {
    fn read(value: &Value, path: &FieldPath, errors: &mut Vec<FieldError>) -> Option<Self> {
        let fields = VEHICLE_LIST_SHAPE.read(value, path, errors)?;
        Some(Self {
            active: fields.active,
            sort_direction: fields.sort_direction,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_input_defaults_to_active() {
        let filter = VehicleListFilter::validate(&json!({})).unwrap();
        assert!(filter.active);
        assert_eq!(filter.sort_direction, None);
    }

    #[test]
    fn numeric_active_is_accepted() {
        assert!(VehicleListFilter::validate(&json!({"Active": 1})).unwrap().active);
        assert!(!VehicleListFilter::validate(&json!({"Active": "0"})).unwrap().active);
    }

    #[test]
    fn non_object_input_is_rejected() {
        let error = VehicleListFilter::validate(&json!("Active=true")).unwrap_err();
        assert_eq!(error.errors()[0].path, FieldPath::root());
    }
}
