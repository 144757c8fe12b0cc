// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Setpoint hold status.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How long a manually set setpoint is held (`thermostatSetpointStatus`).
///
/// `HoldUntil` is normally paired with a `nextPeriodTime` telling the
/// thermostat when to resume its schedule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SetpointStatus {
    /// Follow the schedule.
    NoHold,
    /// Hold until the next scheduled period.
    TemporaryHold,
    /// Hold indefinitely.
    PermanentHold,
    /// Hold until `nextPeriodTime`.
    HoldUntil,
    /// Vacation hold.
    VacationHold,
    /// A status this library does not know about.
    Other(String),
}

impl SetpointStatus {
    /// Returns the string used by the Lyric API.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::NoHold => "NoHold",
            Self::TemporaryHold => "TemporaryHold",
            Self::PermanentHold => "PermanentHold",
            Self::HoldUntil => "HoldUntil",
            Self::VacationHold => "VacationHold",
            Self::Other(s) => s,
        }
    }

    /// Returns whether the thermostat is currently following its schedule.
    #[must_use]
    pub fn is_following_schedule(&self) -> bool {
        matches!(self, Self::NoHold)
    }
}

impl fmt::Display for SetpointStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SetpointStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl From<String> for SetpointStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "NoHold" => Self::NoHold,
            "TemporaryHold" => Self::TemporaryHold,
            "PermanentHold" => Self::PermanentHold,
            "HoldUntil" => Self::HoldUntil,
            "VacationHold" => Self::VacationHold,
            _ => Self::Other(value),
        }
    }
}

impl From<SetpointStatus> for String {
    fn from(value: SetpointStatus) -> Self {
        match value {
            SetpointStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}
