// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fan mode.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The fan mode of a thermostat (`settings.fan.changeableValues.mode`).
///
/// # Examples
///
/// ```
/// use lyric_lib::types::FanMode;
///
/// assert_eq!("Circulate".parse::<FanMode>().unwrap(), FanMode::Circulate);
/// assert_eq!(FanMode::On.to_string(), "On");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FanMode {
    /// Fan runs only with heating or cooling.
    Auto,
    /// Fan runs continuously.
    On,
    /// Fan runs periodically to circulate air.
    Circulate,
    /// Fan follows the thermostat schedule.
    FollowSchedule,
    /// A mode this library does not know about.
    Other(String),
}

impl FanMode {
    /// Returns the string used by the Lyric API.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Auto => "Auto",
            Self::On => "On",
            Self::Circulate => "Circulate",
            Self::FollowSchedule => "FollowSchedule",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for FanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FanMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl From<String> for FanMode {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Auto" => Self::Auto,
            "On" => Self::On,
            "Circulate" => Self::Circulate,
            "FollowSchedule" => Self::FollowSchedule,
            _ => Self::Other(value),
        }
    }
}

impl From<FanMode> for String {
    fn from(value: FanMode) -> Self {
        match value {
            FanMode::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}
