// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for Lyric thermostat control.
//!
//! The mode and status enums accept any string the API sends. Values this
//! library does not name are kept in an `Other` variant and written back
//! unchanged.
//!
//! # Types
//!
//! - [`ThermostatMode`] - System mode (Off/Heat/Cool/Auto/EmergencyHeat)
//! - [`FanMode`] - Fan mode (Auto/On/Circulate/FollowSchedule)
//! - [`SetpointStatus`] - Setpoint hold (NoHold/TemporaryHold/PermanentHold/...)
//! - [`PeriodTime`] - Time of day at which a hold ends (`HH:MM:SS`)

mod fan;
mod mode;
mod period_time;
mod setpoint;

pub use fan::FanMode;
pub use mode::ThermostatMode;
pub use period_time::PeriodTime;
pub use setpoint::SetpointStatus;
