// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device update definitions.
//!
//! An update is a patch: every field is an optional override, and missing
//! fields are filled from the device's last known state. Resolving a patch
//! against a [`Device`] is pure and independent of the transport, which
//! makes the outgoing request body easy to inspect and test.
//!
//! # Available Updates
//!
//! | Update | Endpoint | Body |
//! |--------|----------|------|
//! | [`ThermostatUpdate`] | `devices/thermostats/{id}` | mode, setpoints, hold |
//! | [`FanUpdate`] | `devices/thermostats/{id}/fan` | fan mode |
//!
//! # Examples
//!
//! ```
//! use lyric_lib::command::{FanUpdate, Update};
//! use lyric_lib::response::Device;
//!
//! let device: Device = serde_json::from_str(
//!     r#"{"deviceID": "LCC-1", "settings": {"fan": {"changeableValues": {"mode": "On"}}}}"#,
//! ).unwrap();
//!
//! let payload = FanUpdate::current().resolve(&device).unwrap();
//! assert_eq!(serde_json::to_string(&payload).unwrap(), r#"{"mode":"On"}"#);
//! ```

mod fan;
mod thermostat;

pub use fan::{FanPayload, FanUpdate};
pub use thermostat::{ThermostatPayload, ThermostatUpdate};

use serde::Serialize;

use crate::error::ParseError;
use crate::response::Device;

/// An update that can be sent to a thermostat.
pub trait Update {
    /// The request body produced by [`resolve`](Self::resolve).
    type Payload: Serialize;

    /// Path appended to `devices/thermostats/{deviceID}`, empty for the
    /// thermostat itself.
    fn path_suffix(&self) -> &'static str;

    /// Builds the request body, filling unset fields from `device`.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingField` if a value must be taken from the
    /// device and the device does not have it.
    fn resolve(&self, device: &Device) -> Result<Self::Payload, ParseError>;
}
