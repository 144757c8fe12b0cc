// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level entry point for the Lyric API.
//!
//! [`Lyric`] builds request URLs and bodies, hands them to a
//! [`Transport`], and keeps the last fetched devices and locations.
//!
//! # Reads
//!
//! `get_devices` and `get_locations` replace the stored collection
//! wholesale with whatever the API returned. Nothing is merged. When two
//! fetches race, the one that finishes last wins.
//!
//! # Writes
//!
//! `update_thermostat` and `update_fan` resolve an update against the
//! device passed in and return the parsed response body as is.
//!
//! ```no_run
//! use lyric_lib::{Lyric, ThermostatUpdate};
//! use lyric_lib::protocol::HttpClient;
//!
//! # async fn example() -> lyric_lib::Result<()> {
//! let lyric = Lyric::new(HttpClient::new("access-token")?, "api-key");
//!
//! lyric.get_locations().await?;
//! for location in lyric.locations() {
//!     let location_id = location.location_id()?;
//!     lyric.get_devices(location_id).await?;
//!
//!     for device in lyric.devices() {
//!         let update = ThermostatUpdate::new().with_heat_setpoint(68.0);
//!         lyric.update_thermostat(location_id, &device, &update).await?;
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod endpoints;

pub use endpoints::BASE_URL;

use std::fmt;

use parking_lot::RwLock;
use serde_json::Value;

use crate::command::{FanUpdate, ThermostatUpdate, Update};
use crate::error::{Error, ParseError};
use crate::protocol::Transport;
use crate::response::{Device, Location, json_kind};

/// Client for the Lyric API.
///
/// The type parameter is the transport that performs the HTTP requests,
/// usually [`HttpClient`](crate::protocol::HttpClient).
#[derive(Debug)]
pub struct Lyric<T: Transport> {
    transport: T,
    client_id: String,
    base_url: String,
    devices: RwLock<Vec<Device>>,
    locations: RwLock<Vec<Location>>,
}

impl<T: Transport> Lyric<T> {
    /// Creates a client using `client_id` as the API key.
    #[must_use]
    pub fn new(transport: T, client_id: impl Into<String>) -> Self {
        Self {
            transport,
            client_id: client_id.into(),
            base_url: BASE_URL.to_string(),
            devices: RwLock::new(Vec::new()),
            locations: RwLock::new(Vec::new()),
        }
    }

    /// Points the client at a different API root.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Returns the API key.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Returns the API root.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns the devices from the last [`get_devices`](Self::get_devices) call.
    #[must_use]
    pub fn devices(&self) -> Vec<Device> {
        self.devices.read().clone()
    }

    /// Returns the locations from the last [`get_locations`](Self::get_locations) call.
    #[must_use]
    pub fn locations(&self) -> Vec<Location> {
        self.locations.read().clone()
    }

    /// Looks up a stored device by its identifier.
    #[must_use]
    pub fn device(&self, device_id: &str) -> Option<Device> {
        self.devices
            .read()
            .iter()
            .find(|d| d.device_id().is_ok_and(|id| id == device_id))
            .cloned()
    }

    /// Looks up a stored location by its identifier.
    #[must_use]
    pub fn location(&self, location_id: i64) -> Option<Location> {
        self.locations
            .read()
            .iter()
            .find(|l| l.location_id().is_ok_and(|id| id == location_id))
            .cloned()
    }

    // ========== Reads ==========

    /// Fetches the devices of a location and replaces the stored devices.
    ///
    /// A `null` or empty response body leaves an empty collection.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body is not a JSON array.
    /// The stored devices are left untouched in that case. Elements are not
    /// inspected; see [`Device`].
    pub async fn get_devices(&self, location_id: impl fmt::Display) -> Result<(), Error> {
        let url = endpoints::devices_url(
            &self.base_url,
            &self.client_id,
            &location_id.to_string(),
        );
        let devices: Vec<Device> = collection(self.fetch(&url).await?, "devices")?;

        tracing::debug!(count = devices.len(), "Fetched devices");
        *self.devices.write() = devices;
        Ok(())
    }

    /// Fetches all locations and replaces the stored locations.
    ///
    /// A `null` or empty response body leaves an empty collection.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body is not a JSON array.
    /// The stored locations are left untouched in that case. Elements are
    /// not inspected; see [`Location`].
    pub async fn get_locations(&self) -> Result<(), Error> {
        let url = endpoints::locations_url(&self.base_url, &self.client_id);
        let locations: Vec<Location> = collection(self.fetch(&url).await?, "locations")?;

        tracing::debug!(count = locations.len(), "Fetched locations");
        *self.locations.write() = locations;
        Ok(())
    }

    async fn fetch(&self, url: &str) -> Result<Value, Error> {
        let response = self.transport.get(url).await?;
        let json = response.json()?;
        tracing::debug!(json = %json, "Lyric response");
        Ok(json)
    }

    // ========== Writes ==========

    /// Changes the mode, setpoints or hold of a thermostat.
    ///
    /// Fields not set in `update` are taken from `device`. Returns the
    /// response body unchanged.
    ///
    /// # Errors
    ///
    /// Returns error if a default cannot be read from `device`, the request
    /// fails, or the response is not valid JSON.
    pub async fn update_thermostat(
        &self,
        location_id: impl fmt::Display,
        device: &Device,
        update: &ThermostatUpdate,
    ) -> Result<Value, Error> {
        self.send_update(location_id, device, update).await
    }

    /// Changes the fan mode of a thermostat.
    ///
    /// Without a mode in `update`, the device's current fan mode is sent.
    ///
    /// # Errors
    ///
    /// Returns error if the fan mode cannot be read from `device`, the
    /// request fails, or the response is not valid JSON.
    pub async fn update_fan(
        &self,
        location_id: impl fmt::Display,
        device: &Device,
        update: &FanUpdate,
    ) -> Result<Value, Error> {
        self.send_update(location_id, device, update).await
    }

    async fn send_update<U: Update>(
        &self,
        location_id: impl fmt::Display,
        device: &Device,
        update: &U,
    ) -> Result<Value, Error> {
        let payload = update.resolve(device)?;
        let data = serde_json::to_value(&payload).map_err(ParseError::from)?;

        let url = endpoints::thermostat_url(&self.base_url, device.device_id()?, update.path_suffix());
        let location_id = location_id.to_string();
        let params = endpoints::update_params(&self.client_id, &location_id);

        let response = self.transport.post(&url, &params, &data).await?;
        let json = response.json()?;
        tracing::debug!(json = %json, "Lyric update response");
        Ok(json)
    }
}

/// Wraps every element of a JSON array. `null` is an empty collection.
fn collection<E: From<Value>>(json: Value, what: &str) -> Result<Vec<E>, ParseError> {
    match json {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => Ok(items.into_iter().map(E::from).collect()),
        other => Err(ParseError::UnexpectedFormat(format!(
            "expected an array of {what}, got {}",
            json_kind(&other)
        ))),
    }
}
