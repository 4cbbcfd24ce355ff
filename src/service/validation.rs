//! Request body checks: object shape, legacy key normalization, field presence.

use crate::error::AppError;
use crate::keys::object_keys_to_canonical;
use crate::model::{Car, CarChanges};
use serde_json::{Map, Value};

/// Fields a create body must carry, non-null.
pub const REQUIRED_FIELDS: &[&str] = &["id", "brand", "model", "year", "color", "price", "sales_count"];

pub struct RequestValidator;

impl RequestValidator {
    /// Parse a create body. All required fields must be present; types are checked by deserialization.
    pub fn new_car(body: Value) -> Result<Car, AppError> {
        let body = canonical_object(body)?;
        Self::validate_presence(&body)?;
        serde_json::from_value(Value::Object(body)).map_err(|e| AppError::Validation(e.to_string()))
    }

    /// Parse an update body. Any subset of the mutable fields is accepted, including none.
    pub fn car_changes(body: Value) -> Result<CarChanges, AppError> {
        let body = canonical_object(body)?;
        serde_json::from_value(Value::Object(body)).map_err(|e| AppError::Validation(e.to_string()))
    }

    pub fn validate_presence(body: &Map<String, Value>) -> Result<(), AppError> {
        for field in REQUIRED_FIELDS {
            match body.get(*field) {
                None | Some(Value::Null) => {
                    return Err(AppError::Validation(format!("{} is required", field)));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

fn canonical_object(value: Value) -> Result<Map<String, Value>, AppError> {
    match value {
        Value::Object(mut m) => {
            object_keys_to_canonical(&mut m);
            Ok(m)
        }
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}
