//! Schemas for fleet API response bodies.

use serde_json::Value;

use crate::domain::fleet::{AgreementNumber, OptimalRate, RATE_NAME_NOT_SET, VehicleStatusCount};
use crate::schema::Schema;
use crate::schema::coerce::{coerce_bool, coerce_count, strict_integer, strict_string};
use crate::schema::errors::{Expected, FieldError, FieldPath};
use crate::schema::fields::ObjectFields;

impl Schema for VehicleStatusCount {
    fn read(value: &Value, path: &FieldPath, errors: &mut Vec<FieldError>) -> Option<Self> {
        let mut fields = ObjectFields::open(value, path, errors)?;
        let name = fields.required("name", Expected::String, strict_string);
        let total = fields.required("total", Expected::Count, coerce_count);
        Some(Self {
            name: name?,
            total: total?,
        })
    }
}

impl Schema for OptimalRate {
    fn read(value: &Value, path: &FieldPath, errors: &mut Vec<FieldError>) -> Option<Self> {
        let mut fields = ObjectFields::open(value, path, errors)?;
        let rate_id = fields.required("rateId", Expected::Integer, strict_integer);
        let rate_name =
            fields.nullable_or("rateName", || RATE_NAME_NOT_SET.to_string(), strict_string);
        let is_optimal = fields.required("isOptimal", Expected::Boolean, coerce_bool);
        Some(Self {
            rate_id: rate_id?,
            rate_name: rate_name?,
            is_optimal: is_optimal?,
        })
    }
}

impl Schema for AgreementNumber {
    fn read(value: &Value, path: &FieldPath, errors: &mut Vec<FieldError>) -> Option<Self> {
        let mut fields = ObjectFields::open(value, path, errors)?;
        let agreement_no = fields.required("agreementNo", Expected::String, strict_string);
        Some(Self {
            agreement_no: agreement_no?,
        })
    }
}
