// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermostat device parsing.

use serde::Deserialize;
use serde_json::{Map, Number, Value};

use super::{list, missing, optional, required, wrong_type};
use crate::error::ParseError;
use crate::types::{FanMode, PeriodTime, SetpointStatus, ThermostatMode};

/// A thermostat as returned by the `devices` and `locations` endpoints.
///
/// Wraps the JSON element exactly as received, unknown keys included.
/// Accessors for the fields the update operations rely on return
/// [`ParseError::MissingField`] when the field is absent; descriptive
/// accessors return `Ok(None)`. Any accessor fails with
/// [`ParseError::UnexpectedFormat`] when the field has the wrong type.
///
/// # Examples
///
/// ```
/// use lyric_lib::response::Device;
/// use lyric_lib::types::ThermostatMode;
///
/// let json = r#"{
///     "deviceID": "LCC-00D02DB6B1A5",
///     "userDefinedDeviceName": "Hallway",
///     "indoorTemperature": 69,
///     "changeableValues": {
///         "mode": "Heat",
///         "heatSetpoint": 68,
///         "coolSetpoint": 76,
///         "thermostatSetpointStatus": "NoHold"
///     },
///     "settings": {"fan": {"changeableValues": {"mode": "Auto"}}}
/// }"#;
/// let device: Device = serde_json::from_str(json).unwrap();
/// assert_eq!(device.device_id().unwrap(), "LCC-00D02DB6B1A5");
/// assert_eq!(device.operation_mode().unwrap(), ThermostatMode::Heat);
/// assert_eq!(device.heat_setpoint().unwrap(), 68.0);
/// assert_eq!(device.get("indoorTemperature"), Some(&serde_json::json!(69)));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(transparent)]
pub struct Device(Value);

impl From<Value> for Device {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl Device {
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

    /// Returns the JSON element this device was built from.
    #[must_use]
    pub fn as_json(&self) -> &Value {
        &self.0
    }

    /// Returns the device identifier (`deviceID`).
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingField` if the field is absent.
    pub fn device_id(&self) -> Result<&str, ParseError> {
        required(self.get("deviceID"), "deviceID", "a string", Value::as_str)
    }

    /// Returns the mapping of attributes the API currently lets us change.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingField` if the field is absent.
    pub fn changeable_values(&self) -> Result<ChangeableValues<'_>, ParseError> {
        required(
            self.get("changeableValues"),
            "changeableValues",
            "an object",
            Value::as_object,
        )
        .map(ChangeableValues::new)
    }

    /// Returns the current system mode (`changeableValues.mode`).
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingField` if the field is absent.
    pub fn operation_mode(&self) -> Result<ThermostatMode, ParseError> {
        self.changeable_values()?
            .mode()?
            .ok_or_else(|| missing(ChangeableValues::MODE))
    }

    /// Returns the heating setpoint (`changeableValues.heatSetpoint`).
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingField` if the field is absent.
    pub fn heat_setpoint(&self) -> Result<f64, ParseError> {
        self.changeable_values()?
            .heat_setpoint()?
            .ok_or_else(|| missing(ChangeableValues::HEAT_SETPOINT))
    }

    /// Returns the cooling setpoint (`changeableValues.coolSetpoint`).
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingField` if the field is absent.
    pub fn cool_setpoint(&self) -> Result<f64, ParseError> {
        self.changeable_values()?
            .cool_setpoint()?
            .ok_or_else(|| missing(ChangeableValues::COOL_SETPOINT))
    }

    /// Returns the setpoint hold status (`changeableValues.thermostatSetpointStatus`).
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingField` if the field is absent.
    pub fn thermostat_setpoint_status(&self) -> Result<SetpointStatus, ParseError> {
        self.changeable_values()?
            .thermostat_setpoint_status()?
            .ok_or_else(|| missing(ChangeableValues::THERMOSTAT_SETPOINT_STATUS))
    }

    /// Returns the fan mode (`settings.fan.changeableValues.mode`).
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingField` if the fan settings are absent.
    pub fn fan_mode(&self) -> Result<FanMode, ParseError> {
        let Some(fan) = self.fan_settings()? else {
            return Err(missing("fanMode"));
        };
        let values = optional(
            fan.get("changeableValues"),
            "settings.fan.changeableValues",
            "an object",
            Value::as_object,
        )?;
        required(
            values.and_then(|v| v.get("mode")),
            "fanMode",
            "a string",
            Value::as_str,
        )
        .map(|s| FanMode::from(s.to_string()))
    }

    /// Returns the fan modes the thermostat supports.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedFormat` if the list is malformed.
    pub fn allowed_fan_modes(&self) -> Result<Vec<FanMode>, ParseError> {
        let Some(fan) = self.fan_settings()? else {
            return Ok(Vec::new());
        };
        list(fan.get("allowedModes"), "settings.fan.allowedModes", |v| {
            v.as_str().map(|s| FanMode::from(s.to_string()))
        })
    }

    fn fan_settings(&self) -> Result<Option<&Map<String, Value>>, ParseError> {
        let settings = optional(self.get("settings"), "settings", "an object", Value::as_object)?;
        optional(
            settings.and_then(|s| s.get("fan")),
            "settings.fan",
            "an object",
            Value::as_object,
        )
    }

    /// Returns the end of the current hold period, if any.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedFormat` if the value is not a time.
    pub fn next_period_time(&self) -> Result<Option<PeriodTime>, ParseError> {
        optional(
            self.get("changeableValues"),
            "changeableValues",
            "an object",
            Value::as_object,
        )?
        .map_or(Ok(None), |values| ChangeableValues::new(values).next_period_time())
    }

    /// Returns the location the device belongs to, when the API includes it.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedFormat` if the value is not an integer.
    pub fn location_id(&self) -> Result<Option<i64>, ParseError> {
        optional(self.get("locationID"), "locationID", "an integer", Value::as_i64)
    }

    /// Returns the device name set by the installer.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedFormat` if the value is not a string.
    pub fn name(&self) -> Result<Option<&str>, ParseError> {
        self.text("name")
    }

    /// Returns the device name set by the user.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedFormat` if the value is not a string.
    pub fn user_defined_device_name(&self) -> Result<Option<&str>, ParseError> {
        self.text("userDefinedDeviceName")
    }

    /// Returns the best available display name. Non-string names are skipped.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.user_defined_device_name()
            .ok()
            .flatten()
            .or_else(|| self.name().ok().flatten())
    }

    /// Returns the device class, e.g. `Thermostat`.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedFormat` if the value is not a string.
    pub fn device_class(&self) -> Result<Option<&str>, ParseError> {
        self.text("deviceClass")
    }

    /// Returns the device type, e.g. `Thermostat`.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedFormat` if the value is not a string.
    pub fn device_type(&self) -> Result<Option<&str>, ParseError> {
        self.text("deviceType")
    }

    /// Returns the MAC identifier.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedFormat` if the value is not a string.
    pub fn mac_id(&self) -> Result<Option<&str>, ParseError> {
        self.text("macID")
    }

    /// Returns whether the device is reachable by the cloud service.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedFormat` if the value is not a boolean.
    pub fn is_alive(&self) -> Result<Option<bool>, ParseError> {
        optional(self.get("isAlive"), "isAlive", "a boolean", Value::as_bool)
    }

    /// Returns the temperature units, `Fahrenheit` or `Celsius`.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedFormat` if the value is not a string.
    pub fn units(&self) -> Result<Option<&str>, ParseError> {
        self.text("units")
    }

    /// Returns the indoor temperature.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedFormat` if the value is not a number.
    pub fn indoor_temperature(&self) -> Result<Option<f64>, ParseError> {
        self.number("indoorTemperature")
    }

    /// Returns the outdoor temperature.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedFormat` if the value is not a number.
    pub fn outdoor_temperature(&self) -> Result<Option<f64>, ParseError> {
        self.number("outdoorTemperature")
    }

    /// Returns the indoor relative humidity in percent.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedFormat` if the value is not a number.
    pub fn indoor_humidity(&self) -> Result<Option<f64>, ParseError> {
        self.number("indoorHumidity")
    }

    /// Returns the system modes the thermostat supports.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedFormat` if the list is malformed.
    pub fn allowed_modes(&self) -> Result<Vec<ThermostatMode>, ParseError> {
        list(self.get("allowedModes"), "allowedModes", |v| {
            v.as_str().map(|s| ThermostatMode::from(s.to_string()))
        })
    }

    /// Returns the allowed heating setpoint range `(min, max)`.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedFormat` if a bound is not a number.
    pub fn heat_setpoint_range(&self) -> Result<Option<(f64, f64)>, ParseError> {
        Ok(self
            .number("minHeatSetpoint")?
            .zip(self.number("maxHeatSetpoint")?))
    }

    /// Returns the allowed cooling setpoint range `(min, max)`.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedFormat` if a bound is not a number.
    pub fn cool_setpoint_range(&self) -> Result<Option<(f64, f64)>, ParseError> {
        Ok(self
            .number("minCoolSetpoint")?
            .zip(self.number("maxCoolSetpoint")?))
    }

    /// Returns the minimum gap between heat and cool setpoints.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedFormat` if the value is not a number.
    pub fn deadband(&self) -> Result<Option<f64>, ParseError> {
        self.number("deadband")
    }

    /// Returns what the equipment is doing right now.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedFormat` if the status or one of its
    /// fields has the wrong type.
    pub fn operation_status(&self) -> Result<Option<OperationStatus>, ParseError> {
        optional(
            self.get("operationStatus"),
            "operationStatus",
            "an object",
            Value::as_object,
        )?
        .map(OperationStatus::from_map)
        .transpose()
    }

    fn text(&self, key: &str) -> Result<Option<&str>, ParseError> {
        optional(self.get(key), key, "a string", Value::as_str)
    }

    fn number(&self, key: &str) -> Result<Option<f64>, ParseError> {
        optional(self.get(key), key, "a number", Value::as_f64)
    }
}

/// The attributes of a device that the API currently permits changing.
///
/// A borrowed view over `changeableValues`. Whether a key is present
/// matters more than its value: an update may only carry
/// `thermostatSetpointStatus` or `autoChangeoverActive` when the device
/// lists that key here. Unknown keys are kept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChangeableValues<'a>(&'a Map<String, Value>);

impl<'a> ChangeableValues<'a> {
    /// Key of the system mode.
    pub const MODE: &'static str = "mode";
    /// Key of the heating setpoint.
    pub const HEAT_SETPOINT: &'static str = "heatSetpoint";
    /// Key of the cooling setpoint.
    pub const COOL_SETPOINT: &'static str = "coolSetpoint";
    /// Key of the setpoint hold status.
    pub const THERMOSTAT_SETPOINT_STATUS: &'static str = "thermostatSetpointStatus";
    /// Key of the automatic changeover flag.
    pub const AUTO_CHANGEOVER_ACTIVE: &'static str = "autoChangeoverActive";
    /// Key of the hold end time.
    pub const NEXT_PERIOD_TIME: &'static str = "nextPeriodTime";

    /// Wraps a `changeableValues` object.
    #[must_use]
    pub fn new(values: &'a Map<String, Value>) -> Self {
        Self(values)
    }

    /// Returns whether the mapping contains `key`, whatever its value.
    #[must_use]
    pub fn contains(self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the raw value stored under `key`.
    #[must_use]
    pub fn get(self, key: &str) -> Option<&'a Value> {
        self.0.get(key)
    }

    /// Returns the keys in the order the API sent them.
    pub fn keys(self) -> impl Iterator<Item = &'a str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(self) -> usize {
        self.0.len()
    }

    /// Returns whether the mapping is empty.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    /// Returns the system mode.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedFormat` if the value is not a string.
    pub fn mode(self) -> Result<Option<ThermostatMode>, ParseError> {
        optional(self.get(Self::MODE), Self::MODE, "a string", Value::as_str)
            .map(|s| s.map(|s| ThermostatMode::from(s.to_string())))
    }

    /// Returns the raw number stored under `key`, preserving integer or
    /// float representation.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedFormat` if the value is not a number.
    pub fn number(self, key: &str) -> Result<Option<&'a Number>, ParseError> {
        optional(self.get(key), key, "a number", |v| match v {
            Value::Number(n) => Some(n),
            _ => None,
        })
    }

    /// Returns the heating setpoint.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedFormat` if the value is not a number.
    pub fn heat_setpoint(self) -> Result<Option<f64>, ParseError> {
        Ok(self.number(Self::HEAT_SETPOINT)?.and_then(Number::as_f64))
    }

    /// Returns the cooling setpoint.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedFormat` if the value is not a number.
    pub fn cool_setpoint(self) -> Result<Option<f64>, ParseError> {
        Ok(self.number(Self::COOL_SETPOINT)?.and_then(Number::as_f64))
    }

    /// Returns the setpoint hold status.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedFormat` if the value is not a string.
    pub fn thermostat_setpoint_status(self) -> Result<Option<SetpointStatus>, ParseError> {
        optional(
            self.get(Self::THERMOSTAT_SETPOINT_STATUS),
            Self::THERMOSTAT_SETPOINT_STATUS,
            "a string",
            Value::as_str,
        )
        .map(|s| s.map(|s| SetpointStatus::from(s.to_string())))
    }

    /// Returns the automatic changeover flag.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedFormat` if the value is not a boolean.
    pub fn auto_changeover_active(self) -> Result<Option<bool>, ParseError> {
        optional(
            self.get(Self::AUTO_CHANGEOVER_ACTIVE),
            Self::AUTO_CHANGEOVER_ACTIVE,
            "a boolean",
            Value::as_bool,
        )
    }

    /// Returns the hold end time.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedFormat` if the value is not an
    /// `HH:MM:SS` string.
    pub fn next_period_time(self) -> Result<Option<PeriodTime>, ParseError> {
        let Some(value) = self.get(Self::NEXT_PERIOD_TIME).filter(|v| !v.is_null()) else {
            return Ok(None);
        };
        value
            .as_str()
            .and_then(|s| s.parse().ok())
            .map(Some)
            .ok_or_else(|| wrong_type(Self::NEXT_PERIOD_TIME, "an HH:MM:SS time", value))
    }
}

/// What the HVAC equipment is currently doing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OperationStatus {
    /// Active equipment mode, e.g. `Heat` or `EquipmentOff`.
    pub mode: Option<String>,
    /// Whether the fan was requested.
    pub fan_request: Option<bool>,
    /// Whether the circulation fan was requested.
    pub circulation_fan_request: Option<bool>,
}

impl OperationStatus {
    fn from_map(status: &Map<String, Value>) -> Result<Self, ParseError> {
        Ok(Self {
            mode: optional(status.get("mode"), "operationStatus.mode", "a string", Value::as_str)?
                .map(str::to_string),
            fan_request: optional(
                status.get("fanRequest"),
                "operationStatus.fanRequest",
                "a boolean",
                Value::as_bool,
            )?,
            circulation_fan_request: optional(
                status.get("circulationFanRequest"),
                "operationStatus.circulationFanRequest",
                "a boolean",
                Value::as_bool,
            )?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_device() -> Device {
        Device::new(json!({
            "locationID": 123_456,
            "deviceID": "LCC-00D02DB6B1A5",
            "name": "THERMOSTAT",
            "userDefinedDeviceName": "Upstairs",
            "deviceClass": "Thermostat",
            "deviceType": "Thermostat",
            "macID": "00D02DB6B1A5",
            "isAlive": true,
            "units": "Fahrenheit",
            "indoorTemperature": 71.5,
            "outdoorTemperature": 45,
            "indoorHumidity": 38,
            "allowedModes": ["EmergencyHeat", "Heat", "Off", "Cool", "Auto"],
            "minHeatSetpoint": 50,
            "maxHeatSetpoint": 90,
            "minCoolSetpoint": 50,
            "maxCoolSetpoint": 99,
            "deadband": 0,
            "changeableValues": {
                "mode": "Cool",
                "autoChangeoverActive": false,
                "heatSetpoint": 62,
                "coolSetpoint": 74,
                "thermostatSetpointStatus": "HoldUntil",
                "nextPeriodTime": "22:15:00",
                "heatCoolMode": "Cool"
            },
            "operationStatus": {
                "mode": "EquipmentOff",
                "fanRequest": false,
                "circulationFanRequest": false
            },
            "settings": {
                "fan": {
                    "allowedModes": ["On", "Auto", "Circulate"],
                    "changeableValues": {"mode": "Circulate"}
                }
            }
        }))
    }

    #[test]
    fn parse_full_device() {
        let device = full_device();

        assert_eq!(device.device_id().unwrap(), "LCC-00D02DB6B1A5");
        assert_eq!(device.location_id().unwrap(), Some(123_456));
        assert_eq!(device.operation_mode().unwrap(), ThermostatMode::Cool);
        assert!((device.heat_setpoint().unwrap() - 62.0).abs() < f64::EPSILON);
        assert!((device.cool_setpoint().unwrap() - 74.0).abs() < f64::EPSILON);
        assert_eq!(
            device.thermostat_setpoint_status().unwrap(),
            SetpointStatus::HoldUntil
        );
        assert_eq!(device.fan_mode().unwrap(), FanMode::Circulate);
        assert_eq!(device.allowed_fan_modes().unwrap().len(), 3);
        assert_eq!(device.allowed_modes().unwrap().len(), 5);
        assert_eq!(
            device.next_period_time().unwrap().unwrap().to_string(),
            "22:15:00"
        );
        assert_eq!(device.display_name(), Some("Upstairs"));
        assert_eq!(device.heat_setpoint_range().unwrap(), Some((50.0, 90.0)));
        assert_eq!(device.is_alive().unwrap(), Some(true));
        assert_eq!(
            device.operation_status().unwrap().unwrap().mode.as_deref(),
            Some("EquipmentOff")
        );
    }

    #[test]
    fn empty_object_parses() {
        let device = Device::new(json!({}));
        assert!(device.allowed_modes().unwrap().is_empty());
        assert!(device.allowed_fan_modes().unwrap().is_empty());
        assert!(device.next_period_time().unwrap().is_none());
        assert!(device.operation_status().unwrap().is_none());
    }

    #[test]
    fn missing_fields_fail_on_access() {
        let device = Device::new(json!({"name": "Bare"}));

        assert!(matches!(
            device.device_id(),
            Err(ParseError::MissingField(ref f)) if f == "deviceID"
        ));
        assert!(matches!(
            device.operation_mode(),
            Err(ParseError::MissingField(ref f)) if f == "changeableValues"
        ));
        assert!(matches!(
            device.fan_mode(),
            Err(ParseError::MissingField(ref f)) if f == "fanMode"
        ));
    }

    #[test]
    fn missing_setpoint_inside_changeable_values() {
        let device = Device::new(json!({"changeableValues": {"mode": "Heat"}}));

        assert_eq!(device.operation_mode().unwrap(), ThermostatMode::Heat);
        assert!(matches!(
            device.cool_setpoint(),
            Err(ParseError::MissingField(ref f)) if f == "coolSetpoint"
        ));
    }

    #[test]
    fn wrong_types_fail_only_on_access() {
        let device = Device::new(json!({
            "deviceID": "LCC-1",
            "indoorHumidity": "n/a",
            "isAlive": "yes",
            "changeableValues": {"mode": 3, "heatSetpoint": "68", "coolSetpoint": 76},
            "settings": {"fan": {"changeableValues": {"mode": false}}}
        }));

        assert_eq!(device.device_id().unwrap(), "LCC-1");
        assert!((device.cool_setpoint().unwrap() - 76.0).abs() < f64::EPSILON);

        assert!(matches!(
            device.indoor_humidity(),
            Err(ParseError::UnexpectedFormat(_))
        ));
        assert!(matches!(device.is_alive(), Err(ParseError::UnexpectedFormat(_))));
        assert!(matches!(
            device.operation_mode(),
            Err(ParseError::UnexpectedFormat(_))
        ));
        assert!(matches!(
            device.heat_setpoint(),
            Err(ParseError::UnexpectedFormat(ref msg)) if msg.starts_with("heatSetpoint")
        ));
        assert!(matches!(device.fan_mode(), Err(ParseError::UnexpectedFormat(_))));
    }

    #[test]
    fn null_reads_as_absent() {
        let device = Device::new(json!({"deviceID": null, "name": null}));
        assert!(matches!(device.device_id(), Err(ParseError::MissingField(_))));
        assert_eq!(device.name().unwrap(), None);
    }

    #[test]
    fn unknown_keys_are_kept() {
        let device = Device::new(json!({"deviceID": "LCC-1", "vacationHold": {"enabled": false}}));
        assert_eq!(device.get("vacationHold"), Some(&json!({"enabled": false})));
        assert_eq!(device.as_json()["deviceID"], "LCC-1");
    }

    #[test]
    fn display_name_falls_back_to_name() {
        let device = Device::new(json!({"name": "THERMOSTAT"}));
        assert_eq!(device.display_name(), Some("THERMOSTAT"));

        let device = Device::new(json!({"userDefinedDeviceName": 7, "name": "THERMOSTAT"}));
        assert_eq!(device.display_name(), Some("THERMOSTAT"));
    }

    #[test]
    fn non_object_is_wrapped() {
        let device = Device::from(json!("LCC-1"));
        assert!(matches!(device.device_id(), Err(ParseError::MissingField(_))));
        assert_eq!(device.as_json(), &json!("LCC-1"));
    }

    #[test]
    fn changeable_values_key_presence() {
        let map = json!({
            "thermostatSetpointStatus": null,
            "autoChangeoverActive": false
        });
        let values = ChangeableValues::new(map.as_object().unwrap());

        assert!(values.contains(ChangeableValues::THERMOSTAT_SETPOINT_STATUS));
        assert!(values.contains(ChangeableValues::AUTO_CHANGEOVER_ACTIVE));
        assert!(!values.contains(ChangeableValues::NEXT_PERIOD_TIME));
        assert_eq!(values.thermostat_setpoint_status().unwrap(), None);
        assert_eq!(values.auto_changeover_active().unwrap(), Some(false));
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn changeable_values_preserve_order() {
        let device = Device::new(json!({
            "changeableValues": {"mode": "Heat", "heatSetpoint": 68, "coolSetpoint": 76}
        }));
        let values = device.changeable_values().unwrap();
        let keys: Vec<&str> = values.keys().collect();
        assert_eq!(keys, ["mode", "heatSetpoint", "coolSetpoint"]);
    }

    #[test]
    fn setpoint_number_keeps_representation() {
        let device = Device::new(json!({
            "changeableValues": {"heatSetpoint": 68, "coolSetpoint": 75.5}
        }));
        let values = device.changeable_values().unwrap();

        let heat = values.number(ChangeableValues::HEAT_SETPOINT).unwrap().unwrap();
        assert!(heat.is_i64());
        let cool = values.number(ChangeableValues::COOL_SETPOINT).unwrap().unwrap();
        assert_eq!(cool.as_f64(), Some(75.5));
    }

    #[test]
    fn invalid_next_period_time_is_rejected() {
        let device = Device::new(json!({"changeableValues": {"nextPeriodTime": "soon"}}));
        assert!(matches!(
            device.next_period_time(),
            Err(ParseError::UnexpectedFormat(_))
        ));
    }
}
