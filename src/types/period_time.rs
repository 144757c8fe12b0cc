// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Schedule period boundary time.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValueError;

/// A wall-clock time of day in the thermostat's local time zone.
///
/// Used as `nextPeriodTime`, the moment a `HoldUntil` setpoint ends. The API
/// exchanges it as `HH:MM:SS`.
///
/// # Examples
///
/// ```
/// use lyric_lib::types::PeriodTime;
///
/// let time: PeriodTime = "18:30".parse().unwrap();
/// assert_eq!(time.to_string(), "18:30:00");
///
/// let time = PeriodTime::from_hms(6, 0, 0).unwrap();
/// assert_eq!(time.hour(), 6);
///
/// assert!("25:00:00".parse::<PeriodTime>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PeriodTime(NaiveTime);

impl PeriodTime {
    /// Wire format used by the Lyric API.
    pub const FORMAT: &'static str = "%H:%M:%S";

    /// Creates a time from hours, minutes and seconds.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidTime` if any component is out of range.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Result<Self, ValueError> {
        NaiveTime::from_hms_opt(hour, minute, second)
            .map(Self)
            .ok_or_else(|| ValueError::InvalidTime(format!("{hour:02}:{minute:02}:{second:02}")))
    }

    /// Returns the hour (0-23).
    #[must_use]
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    #[must_use]
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Returns the underlying chrono time.
    #[must_use]
    pub fn naive(&self) -> NaiveTime {
        self.0
    }
}

impl From<NaiveTime> for PeriodTime {
    fn from(time: NaiveTime) -> Self {
        // The API has no sub-second precision.
        Self(time.with_nanosecond(0).unwrap_or(time))
    }
}

impl fmt::Display for PeriodTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

impl FromStr for PeriodTime {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        NaiveTime::parse_from_str(trimmed, Self::FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
            .map(Self)
            .map_err(|_| ValueError::InvalidTime(s.to_string()))
    }
}

impl Serialize for PeriodTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PeriodTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_time() {
        let time: PeriodTime = "07:15:30".parse().unwrap();
        assert_eq!(time.hour(), 7);
        assert_eq!(time.minute(), 15);
        assert_eq!(time.to_string(), "07:15:30");
    }

    #[test]
    fn parse_without_seconds() {
        let time: PeriodTime = "22:00".parse().unwrap();
        assert_eq!(time.to_string(), "22:00:00");
    }

    #[test]
    fn parse_invalid() {
        assert_eq!(
            "noon".parse::<PeriodTime>(),
            Err(ValueError::InvalidTime("noon".to_string()))
        );
        assert!("24:00:00".parse::<PeriodTime>().is_err());
    }

    #[test]
    fn from_hms_out_of_range() {
        assert!(PeriodTime::from_hms(12, 60, 0).is_err());
    }

    #[test]
    fn from_naive_drops_subseconds() {
        let naive = NaiveTime::from_hms_milli_opt(8, 0, 0, 500).unwrap();
        assert_eq!(PeriodTime::from(naive).to_string(), "08:00:00");
    }

    #[test]
    fn serde_as_string() {
        let time = PeriodTime::from_hms(18, 45, 0).unwrap();
        assert_eq!(serde_json::to_value(time).unwrap(), "18:45:00");

        let parsed: PeriodTime = serde_json::from_str(r#""18:45:00""#).unwrap();
        assert_eq!(parsed, time);
    }
}
