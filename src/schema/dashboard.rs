//! Dashboard query schema.

use serde_json::Value;

use crate::domain::filters::DashboardQuery;
use crate::schema::Schema;
use crate::schema::coerce::coerce_bool;
use crate::schema::errors::{FieldError, FieldPath};
use crate::schema::fields::ObjectFields;

impl Schema for DashboardQuery {
    fn read(value: &Value, path: &FieldPath, errors: &mut Vec<FieldError>) -> Option<Self> {
        let mut fields = ObjectFields::open(value, path, errors)?;
        let show_widget_picker = fields.optional("showWidgetPicker", coerce_bool);
        Some(Self { show_widget_picker })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn absent_picker_stays_unset() {
        let query = DashboardQuery::validate(&json!({})).unwrap();
        assert_eq!(query.show_widget_picker, None);
    }

    #[test]
    fn picker_is_coerced() {
        let query = DashboardQuery::validate(&json!({"showWidgetPicker": "false"})).unwrap();
        assert_eq!(query.show_widget_picker, Some(false));
        let query = DashboardQuery::validate(&json!({"showWidgetPicker": "on"})).unwrap();
        assert_eq!(query.show_widget_picker, Some(true));
    }

    #[test]
    fn free_text_picker_is_true() {
        let query = DashboardQuery::validate(&json!({"showWidgetPicker": "yes please"})).unwrap();
        assert_eq!(query.show_widget_picker, Some(true));
    }

    #[test]
    fn non_scalar_picker_fails() {
        let error = DashboardQuery::validate(&json!({"showWidgetPicker": {}})).unwrap_err();
        assert_eq!(error.errors()[0].path.to_string(), "$.showWidgetPicker");
    }
}
