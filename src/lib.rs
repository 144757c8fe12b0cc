// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lyric Lib - A Rust library to control Honeywell Lyric thermostats.
//!
//! This library provides an async binding for the Lyric REST API: listing
//! locations and devices, and changing thermostat and fan settings.
//!
//! # Supported Features
//!
//! - **Locations**: list locations with their embedded devices
//! - **Devices**: list the thermostats of a location
//! - **Thermostat control**: system mode, heat/cool setpoints, holds
//! - **Fan control**: fan mode
//!
//! # Authentication
//!
//! The library does not run the OAuth flow. Supply an access token to
//! [`HttpClient`](protocol::HttpClient), or implement
//! [`Transport`](protocol::Transport) yourself to refresh tokens as needed.
//!
//! # Quick Start
//!
//! ```no_run
//! use lyric_lib::{FanMode, FanUpdate, Lyric, ThermostatMode, ThermostatUpdate};
//! use lyric_lib::protocol::HttpClient;
//!
//! #[tokio::main]
//! async fn main() -> lyric_lib::Result<()> {
//!     let client = HttpClient::new("oauth-access-token")?;
//!     let lyric = Lyric::new(client, "consumer-key");
//!
//!     lyric.get_locations().await?;
//!     let location_id = lyric.locations()[0].location_id()?;
//!
//!     lyric.get_devices(location_id).await?;
//!     let devices = lyric.devices();
//!     let device = &devices[0];
//!
//!     // Unset fields keep the device's current values
//!     let update = ThermostatUpdate::new()
//!         .with_mode(ThermostatMode::Heat)
//!         .with_heat_setpoint(69.0);
//!     lyric.update_thermostat(location_id, device, &update).await?;
//!
//!     lyric.update_fan(location_id, device, &FanUpdate::new(FanMode::Circulate)).await?;
//!     Ok(())
//! }
//! ```

pub mod command;
pub mod error;
mod lyric;
pub mod protocol;
pub mod response;
pub mod types;

pub use command::{FanPayload, FanUpdate, ThermostatPayload, ThermostatUpdate, Update};
pub use error::{Error, ParseError, ProtocolError, Result, ValueError};
pub use lyric::{BASE_URL, Lyric};
pub use protocol::{ApiResponse, Transport};
pub use response::{ChangeableValues, Device, Location, OperationStatus};
pub use types::{FanMode, PeriodTime, SetpointStatus, ThermostatMode};
