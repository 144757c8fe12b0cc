// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response parsing for Lyric JSON responses.
//!
//! The entities here are passive snapshots of what the API returned. They
//! never talk to the network; fetching and updating is done by
//! [`Lyric`](crate::Lyric).
//!
//! Each entity keeps the JSON element it was built from. Nothing is checked
//! up front: a field is projected to its Rust type only when an accessor
//! reads it, so one odd value never prevents the rest of a response from
//! loading. Accessors report a value of the wrong type as
//! [`ParseError::UnexpectedFormat`] and treat `null` like an absent field.

mod device;
mod location;

pub use device::{ChangeableValues, Device, OperationStatus};
pub use location::Location;

use serde_json::Value;

use crate::error::ParseError;

/// Projects an optional field. `null` and absent both yield `None`.
fn optional<'a, T>(
    value: Option<&'a Value>,
    key: &str,
    expected: &str,
    project: impl FnOnce(&'a Value) -> Option<T>,
) -> Result<Option<T>, ParseError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(v) => project(v)
            .map(Some)
            .ok_or_else(|| wrong_type(key, expected, v)),
    }
}

/// Projects a field that must be present.
fn required<'a, T>(
    value: Option<&'a Value>,
    key: &str,
    expected: &str,
    project: impl FnOnce(&'a Value) -> Option<T>,
) -> Result<T, ParseError> {
    optional(value, key, expected, project)?.ok_or_else(|| missing(key))
}

/// Projects an optional array element by element. Absent or `null` is empty.
fn list<'a, T>(
    value: Option<&'a Value>,
    key: &str,
    item: impl Fn(&'a Value) -> Option<T>,
) -> Result<Vec<T>, ParseError> {
    let Some(items) = optional(value, key, "an array", Value::as_array)? else {
        return Ok(Vec::new());
    };
    items
        .iter()
        .map(|v| item(v).ok_or_else(|| wrong_type(key, "an array of strings", v)))
        .collect()
}

fn missing(key: &str) -> ParseError {
    ParseError::MissingField(key.to_string())
}

fn wrong_type(key: &str, expected: &str, found: &Value) -> ParseError {
    ParseError::UnexpectedFormat(format!("{key}: expected {expected}, got {}", json_kind(found)))
}

/// Describes the JSON type of `value` for error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn optional_treats_null_as_absent() {
        let value = json!(null);
        assert_eq!(optional(Some(&value), "k", "a string", Value::as_str).unwrap(), None);
        assert_eq!(optional(None, "k", "a string", Value::as_str).unwrap(), None);
    }

    #[test]
    fn wrong_type_names_key_and_kind() {
        let value = json!(55_802);
        let err = optional(Some(&value), "zipcode", "a string", Value::as_str).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unexpected response format: zipcode: expected a string, got a number"
        );
    }

    #[test]
    fn required_reports_missing() {
        assert!(matches!(
            required(None, "deviceID", "a string", Value::as_str),
            Err(ParseError::MissingField(ref f)) if f == "deviceID"
        ));
    }

    #[test]
    fn list_rejects_bad_items() {
        let value = json!(["Heat", 3]);
        assert!(matches!(
            list(Some(&value), "allowedModes", Value::as_str),
            Err(ParseError::UnexpectedFormat(_))
        ));

        let value = json!(["Heat", "Cool"]);
        assert_eq!(
            list(Some(&value), "allowedModes", Value::as_str).unwrap(),
            ["Heat", "Cool"]
        );
    }
}
