// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermostat setpoint and mode updates.

use serde::Serialize;
use serde_json::{Number, Value};

use crate::command::Update;
use crate::error::ParseError;
use crate::response::{ChangeableValues, Device};
use crate::types::{PeriodTime, SetpointStatus, ThermostatMode};

/// A partial thermostat update.
///
/// Fields left unset are filled from the device's current state when the
/// update is resolved. `thermostatSetpointStatus` and `autoChangeoverActive`
/// are only sent when the device lists them in its changeable values.
///
/// # Examples
///
/// ```
/// use lyric_lib::command::{ThermostatUpdate, Update};
/// use lyric_lib::response::Device;
/// use lyric_lib::types::{SetpointStatus, ThermostatMode};
///
/// let device: Device = serde_json::from_str(r#"{
///     "deviceID": "LCC-1",
///     "changeableValues": {
///         "mode": "Heat",
///         "heatSetpoint": 68,
///         "coolSetpoint": 76,
///         "thermostatSetpointStatus": "NoHold"
///     }
/// }"#).unwrap();
///
/// let payload = ThermostatUpdate::new()
///     .with_heat_setpoint(70.0)
///     .with_setpoint_status(SetpointStatus::PermanentHold)
///     .resolve(&device)
///     .unwrap();
///
/// assert_eq!(payload.mode, ThermostatMode::Heat);
/// assert_eq!(
///     serde_json::to_value(&payload).unwrap(),
///     serde_json::json!({
///         "mode": "Heat",
///         "heatSetpoint": 70.0,
///         "coolSetpoint": 76,
///         "thermostatSetpointStatus": "PermanentHold"
///     })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ThermostatUpdate {
    mode: Option<ThermostatMode>,
    heat_setpoint: Option<f64>,
    cool_setpoint: Option<f64>,
    auto_changeover_active: Option<bool>,
    thermostat_setpoint_status: Option<SetpointStatus>,
    next_period_time: Option<PeriodTime>,
}

impl ThermostatUpdate {
    /// Creates an update that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the system mode.
    #[must_use]
    pub fn with_mode(mut self, mode: ThermostatMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Sets the heating setpoint.
    #[must_use]
    pub fn with_heat_setpoint(mut self, setpoint: f64) -> Self {
        self.heat_setpoint = Some(setpoint);
        self
    }

    /// Sets the cooling setpoint.
    #[must_use]
    pub fn with_cool_setpoint(mut self, setpoint: f64) -> Self {
        self.cool_setpoint = Some(setpoint);
        self
    }

    /// Enables or disables automatic heat/cool changeover.
    ///
    /// Ignored for devices that do not list `autoChangeoverActive` as
    /// changeable.
    #[must_use]
    pub fn with_auto_changeover(mut self, active: bool) -> Self {
        self.auto_changeover_active = Some(active);
        self
    }

    /// Sets the setpoint hold status.
    ///
    /// Ignored for devices that do not list `thermostatSetpointStatus` as
    /// changeable.
    #[must_use]
    pub fn with_setpoint_status(mut self, status: SetpointStatus) -> Self {
        self.thermostat_setpoint_status = Some(status);
        self
    }

    /// Sets the time at which a `HoldUntil` hold ends. Always sent.
    #[must_use]
    pub fn with_next_period_time(mut self, time: PeriodTime) -> Self {
        self.next_period_time = Some(time);
        self
    }

    /// Returns whether no field was overridden.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Update for ThermostatUpdate {
    type Payload = ThermostatPayload;

    fn path_suffix(&self) -> &'static str {
        ""
    }

    fn resolve(&self, device: &Device) -> Result<ThermostatPayload, ParseError> {
        let mode = match &self.mode {
            Some(mode) => mode.clone(),
            None => device.operation_mode()?,
        };

        let changeable = device.changeable_values()?;
        let heat_setpoint = setpoint(changeable, ChangeableValues::HEAT_SETPOINT, self.heat_setpoint)?;
        let cool_setpoint = setpoint(changeable, ChangeableValues::COOL_SETPOINT, self.cool_setpoint)?;

        let thermostat_setpoint_status =
            gated(changeable, ChangeableValues::THERMOSTAT_SETPOINT_STATUS, || {
                self.thermostat_setpoint_status
                    .clone()
                    .map(|status| Value::String(status.into()))
            });
        let auto_changeover_active =
            gated(changeable, ChangeableValues::AUTO_CHANGEOVER_ACTIVE, || {
                self.auto_changeover_active.map(Value::Bool)
            });

        tracing::trace!(
            mode = %mode,
            heat_setpoint = %heat_setpoint,
            cool_setpoint = %cool_setpoint,
            setpoint_status = thermostat_setpoint_status.is_some(),
            auto_changeover = auto_changeover_active.is_some(),
            "Resolved thermostat update"
        );

        Ok(ThermostatPayload {
            mode,
            heat_setpoint,
            cool_setpoint,
            thermostat_setpoint_status,
            auto_changeover_active,
            next_period_time: self.next_period_time,
        })
    }
}

/// Returns the override, or the device's number under `key` as it was sent.
fn setpoint(
    changeable: ChangeableValues<'_>,
    key: &str,
    override_value: Option<f64>,
) -> Result<Number, ParseError> {
    match override_value {
        Some(value) => Number::from_f64(value).ok_or_else(|| {
            ParseError::UnexpectedFormat(format!("{key}: {value} is not a finite number"))
        }),
        None => changeable
            .number(key)?
            .cloned()
            .ok_or_else(|| ParseError::MissingField(key.to_string())),
    }
}

/// Returns the override, or the device's current value, but only when the
/// device lists `key` as changeable.
fn gated(
    changeable: ChangeableValues<'_>,
    key: &str,
    override_value: impl FnOnce() -> Option<Value>,
) -> Option<Value> {
    if !changeable.contains(key) {
        return None;
    }
    Some(override_value().unwrap_or_else(|| changeable.get(key).cloned().unwrap_or(Value::Null)))
}

/// Body of a thermostat update request.
///
/// Values taken from the device are echoed back exactly: setpoints keep
/// their integer or float form and the gated fields carry raw JSON,
/// `null` included.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThermostatPayload {
    /// System mode.
    pub mode: ThermostatMode,
    /// Heating setpoint.
    pub heat_setpoint: Number,
    /// Cooling setpoint.
    pub cool_setpoint: Number,
    /// Setpoint hold status, present only if the device allows changing it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thermostat_setpoint_status: Option<Value>,
    /// Automatic changeover flag, present only if the device allows changing it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_changeover_active: Option<Value>,
    /// End of a `HoldUntil` hold, present only if requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_period_time: Option<PeriodTime>,
}
