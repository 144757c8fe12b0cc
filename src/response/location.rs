// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Location parsing.

use serde::Deserialize;
use serde_json::Value;

use super::{Device, optional, required};
use crate::error::ParseError;

/// A location (home) as returned by the `locations` endpoint.
///
/// The API embeds the thermostats of each location in the response, so a
/// single `get_locations` call is enough to discover every device. Like
/// [`Device`], a location keeps its JSON element and types fields on access.
///
/// # Examples
///
/// ```
/// use lyric_lib::response::Location;
///
/// let json = r#"{
///     "locationID": 123456,
///     "name": "Home",
///     "timeZone": "Eastern",
///     "devices": [{"deviceID": "LCC-00D02DB6B1A5"}]
/// }"#;
/// let location: Location = serde_json::from_str(json).unwrap();
/// assert_eq!(location.location_id().unwrap(), 123456);
/// assert_eq!(location.devices().unwrap().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(transparent)]
pub struct Location(Value);

impl From<Value> for Location {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl Location {
    /// Wraps a decoded JSON element. Never fails.
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Returns the raw value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the JSON element this location was built from.
    #[must_use]
    pub fn as_json(&self) -> &Value {
        &self.0
    }

    /// Returns the location identifier (`locationID`).
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingField` if the field is absent, or
    /// `ParseError::UnexpectedFormat` if it is not an integer.
    pub fn location_id(&self) -> Result<i64, ParseError> {
        required(self.get("locationID"), "locationID", "an integer", Value::as_i64)
    }

    /// Returns the location name.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedFormat` if the value is not a string.
    pub fn name(&self) -> Result<Option<&str>, ParseError> {
        self.text("name")
    }

    /// Returns the street address.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedFormat` if the value is not a string.
    pub fn street_address(&self) -> Result<Option<&str>, ParseError> {
        self.text("streetAddress")
    }

    /// Returns the city.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedFormat` if the value is not a string.
    pub fn city(&self) -> Result<Option<&str>, ParseError> {
        self.text("city")
    }

    /// Returns the country.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedFormat` if the value is not a string.
    pub fn country(&self) -> Result<Option<&str>, ParseError> {
        self.text("country")
    }

    /// Returns the postal code.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedFormat` if the value is not a string.
    pub fn zipcode(&self) -> Result<Option<&str>, ParseError> {
        self.text("zipcode")
    }

    /// Returns the time zone name used for schedules.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedFormat` if the value is not a string.
    pub fn time_zone(&self) -> Result<Option<&str>, ParseError> {
        self.text("timeZone")
    }

    /// Returns the devices installed at this location. Absent or `null`
    /// yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedFormat` if `devices` is not an array.
    pub fn devices(&self) -> Result<Vec<Device>, ParseError> {
        Ok(optional(self.get("devices"), "devices", "an array", Value::as_array)?
            .map(|items| items.iter().cloned().map(Device::new).collect())
            .unwrap_or_default())
    }

    fn text(&self, key: &str) -> Result<Option<&str>, ParseError> {
        optional(self.get(key), key, "a string", Value::as_str)
    }
}
