//! Shallow shape check for the submitted input/output JSON schemas.
//!
//! This is not JSON-Schema validation: only the two mandatory top-level
//! keys and the root type are checked, nested property definitions are
//! never inspected.

use serde_json::Value;

use crate::error::Error;

/// Validate that `schema` looks like a JSON schema for an object.
///
/// Checks, in order: the value is an object, it has `type` and
/// `properties` keys, `type` is the literal `"object"`, and `properties`
/// is itself an object. `field` names the request field being checked so
/// the error message points the caller at the right one.
pub fn validate_schema(field: &str, schema: &Value) -> Result<(), Error> {
    let Some(object) = schema.as_object() else {
        return Err(Error::InvalidSchema(format!(
            "{} must be a JSON object",
            field
        )));
    };

    if !object.contains_key("type") || !object.contains_key("properties") {
        return Err(Error::InvalidSchema(format!(
            "{} must contain the 'type' and 'properties' fields",
            field
        )));
    }

    match object.get("type") {
        Some(Value::String(ty)) if ty == "object" => {}
        _ => {
            return Err(Error::InvalidSchema(format!(
                "{} 'type' must be \"object\"",
                field
            )));
        }
    }

    if !object.get("properties").is_some_and(Value::is_object) {
        return Err(Error::InvalidSchema(format!(
            "{} 'properties' must be an object",
            field
        )));
    }

    Ok(())
}
