// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermostat system mode.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The system mode of a thermostat (`changeableValues.mode`).
///
/// Values the API documents map to named variants. Anything else is kept
/// verbatim in [`ThermostatMode::Other`] so it can be sent back unchanged.
///
/// # Examples
///
/// ```
/// use lyric_lib::types::ThermostatMode;
///
/// let mode: ThermostatMode = "Heat".parse().unwrap();
/// assert_eq!(mode, ThermostatMode::Heat);
/// assert_eq!(mode.as_str(), "Heat");
///
/// let custom: ThermostatMode = "Dehumidify".parse().unwrap();
/// assert_eq!(custom.as_str(), "Dehumidify");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ThermostatMode {
    /// System off.
    Off,
    /// Heating only.
    Heat,
    /// Cooling only.
    Cool,
    /// Automatic heat/cool changeover.
    Auto,
    /// Auxiliary (emergency) heat.
    EmergencyHeat,
    /// A mode this library does not know about.
    Other(String),
}

impl ThermostatMode {
    /// Returns the string used by the Lyric API.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Off => "Off",
            Self::Heat => "Heat",
            Self::Cool => "Cool",
            Self::Auto => "Auto",
            Self::EmergencyHeat => "EmergencyHeat",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for ThermostatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThermostatMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl From<String> for ThermostatMode {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Off" => Self::Off,
            "Heat" => Self::Heat,
            "Cool" => Self::Cool,
            "Auto" => Self::Auto,
            "EmergencyHeat" => Self::EmergencyHeat,
            _ => Self::Other(value),
        }
    }
}

impl From<ThermostatMode> for String {
    fn from(value: ThermostatMode) -> Self {
        match value {
            ThermostatMode::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}
