use serde_json::{Map, Value};

use crate::Route;

/// Envelope field holding a route's kind tag.
pub const KIND_FIELD: &str = "kind";
/// Envelope field holding a destination key.
pub const KEY_FIELD: &str = "key";

/// Failure to flatten a route value into snapshot fields.
#[derive(Debug, thiserror::Error)]
pub enum FieldsError {
	#[error("route serialization failed: {0}")]
	Serialize(#[from] serde_json::Error),
	#[error("route of kind `{kind}` must serialize to an object, found {found}")]
	NotAnObject { kind: &'static str, found: &'static str },
	#[error("route of kind `{kind}` uses reserved field `{field}`")]
	ReservedField { kind: &'static str, field: &'static str },
}

/// Serializes `route` into its payload fields, without the kind tag.
pub fn route_fields<R: Route>(route: &R) -> Result<Map<String, Value>, FieldsError> {
	let kind = route.kind();
	let mut map = match serde_json::to_value(route)? {
		Value::Object(map) => map,
		other => {
			return Err(FieldsError::NotAnObject {
				kind,
				found: json_type_name(&other),
			});
		}
	};

	if map.contains_key(KEY_FIELD) {
		return Err(FieldsError::ReservedField { kind, field: KEY_FIELD });
	}

	// Internally tagged enums write their own tag; it has to agree with `kind()`.
	match map.remove(KIND_FIELD) {
		None => {}
		Some(Value::String(tag)) if tag == kind => {}
		Some(_) => return Err(FieldsError::ReservedField { kind, field: KIND_FIELD }),
	}

	Ok(map)
}

/// Rebuilds a route value of type `R` from a kind tag and its payload fields.
pub fn route_from_fields<R: Route>(kind: &str, mut fields: Map<String, Value>) -> Result<R, serde_json::Error> {
	fields.insert(KIND_FIELD.to_owned(), Value::String(kind.to_owned()));
	serde_json::from_value(Value::Object(fields))
}

/// Returns a short name for the JSON type of `value`, for diagnostics.
pub fn json_type_name(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "bool",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}
