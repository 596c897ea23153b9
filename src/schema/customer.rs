//! Customer list query schema.

use serde_json::Value;

use crate::domain::filters::CustomerListFilter;
use crate::schema::Schema;
use crate::schema::errors::{FieldError, FieldPath};
use crate::schema::list_filter::ListFilterShape;

pub const CUSTOMER_LIST_SHAPE: ListFilterShape = ListFilterShape {
    active_key: "Active",
    default_active: true,
    sort_key: "SortDirection",
};

impl Schema for CustomerListFilter {
    fn read(value: &Value, path: &FieldPath, errors: &mut Vec<FieldError>) -> Option<Self> {
        let fields = CUSTOMER_LIST_SHAPE.read(value, path, errors)?;
        Some(Self {
            active: fields.active,
            sort_direction: fields.sort_direction,
        })
    }
}
