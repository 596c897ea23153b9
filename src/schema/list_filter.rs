//! Builder for the `Active` / `SortDirection` list filter shape.

use serde_json::Value;

use crate::schema::coerce::{coerce_bool, strict_string};
use crate::schema::errors::{FieldError, FieldPath};
use crate::schema::fields::ObjectFields;

/// Field set of a list filter. Each list declares its own instance.
#[derive(Clone, Copy, Debug)]
pub struct ListFilterShape {
    pub active_key: &'static str,
    pub default_active: bool,
    pub sort_key: &'static str,
}

/// Values read through a [`ListFilterShape`], defaults applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListFilterFields {
    pub active: bool,
    pub sort_direction: Option<String>,
}

impl ListFilterShape {
    pub fn read(
        &self,
        value: &Value,
        path: &FieldPath,
        errors: &mut Vec<FieldError>,
    ) -> Option<ListFilterFields> {
        let mut fields = ObjectFields::open(value, path, errors)?;
        let active = fields.optional(self.active_key, coerce_bool);
        let sort_direction = fields.optional(self.sort_key, strict_string);

        Some(ListFilterFields {
            active: active.unwrap_or(self.default_active),
            sort_direction,
        })
    }
}
