//! Form-field encoding for POST payloads.
//!
//! The API accepts POST bodies as `multipart/form-data` where every field is
//! a plain string. [`form_fields`] flattens a payload struct into
//! `(name, value)` pairs using its serde field names; the client appends the
//! pairs to the form after the mandatory credential and method fields.

use crate::{Error, Result};
use serde::Serialize;
use serde_json::Value;

/// Flattens a payload struct into string form fields.
///
/// Field names are the payload's serde names, so `#[serde(rename = "...")]`
/// controls the wire name of a member and an unannotated member contributes
/// its (snake_case) Rust name. Every member is emitted; there is no
/// member-level opt-out.
///
/// # Errors
///
/// Returns [`Error::SerializationFailed`] if the payload does not serialize
/// to an object with named fields, or at the first member whose value is not
/// a string. Nothing the API would see is produced on failure.
///
/// # Examples
///
/// ```
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct NewUser {
///     name: String,
///     #[serde(rename = "callerid")]
///     caller_id: String,
/// }
///
/// let payload = NewUser {
///     name: "bob".to_string(),
///     caller_id: "5551234567".to_string(),
/// };
///
/// let fields = voipms::form_fields(&payload).unwrap();
/// assert_eq!(fields.len(), 2);
/// assert!(fields.contains(&("name".to_string(), "bob".to_string())));
/// assert!(fields.contains(&("callerid".to_string(), "5551234567".to_string())));
/// ```
pub fn form_fields<P>(payload: &P) -> Result<Vec<(String, String)>>
where
    P: Serialize,
{
    let value =
        serde_json::to_value(payload).map_err(|e| Error::SerializationFailed(e.to_string()))?;

    let members = match value {
        Value::Object(members) => members,
        _ => {
            return Err(Error::SerializationFailed(
                "form payload must be a struct with named fields".to_string(),
            ))
        }
    };

    let mut fields = Vec::with_capacity(members.len());
    for (name, value) in members {
        match value {
            Value::String(value) => fields.push((name, value)),
            other => {
                return Err(Error::SerializationFailed(format!(
                    "form field `{}` must be a string, got {}",
                    name,
                    json_kind(&other)
                )))
            }
        }
    }

    Ok(fields)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
