// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fan mode updates.

use serde::Serialize;

use crate::command::Update;
use crate::error::ParseError;
use crate::response::Device;
use crate::types::FanMode;

/// A fan mode update. Without a mode, the device's current fan mode is sent.
///
/// # Examples
///
/// ```
/// use lyric_lib::command::{FanUpdate, Update};
/// use lyric_lib::types::FanMode;
///
/// let update = FanUpdate::new(FanMode::Circulate);
/// assert_eq!(update.path_suffix(), "/fan");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FanUpdate {
    mode: Option<FanMode>,
}

impl FanUpdate {
    /// Creates an update setting the given fan mode.
    #[must_use]
    pub fn new(mode: FanMode) -> Self {
        Self { mode: Some(mode) }
    }

    /// Creates an update that re-sends the device's current fan mode.
    #[must_use]
    pub fn current() -> Self {
        Self::default()
    }
}

impl From<Option<FanMode>> for FanUpdate {
    fn from(mode: Option<FanMode>) -> Self {
        Self { mode }
    }
}

impl Update for FanUpdate {
    type Payload = FanPayload;

    fn path_suffix(&self) -> &'static str {
        "/fan"
    }

    fn resolve(&self, device: &Device) -> Result<FanPayload, ParseError> {
        let mode = match &self.mode {
            Some(mode) => mode.clone(),
            None => device.fan_mode()?,
        };
        Ok(FanPayload { mode })
    }
}

/// Body of a fan update request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FanPayload {
    /// Fan mode.
    pub mode: FanMode,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn device() -> Device {
        Device::new(json!({
            "deviceID": "LCC-1",
            "settings": {"fan": {"changeableValues": {"mode": "Auto"}}}
        }))
    }

    #[test]
    fn defaults_to_current_fan_mode() {
        let payload = FanUpdate::current().resolve(&device()).unwrap();
        assert_eq!(serde_json::to_value(&payload).unwrap(), json!({"mode": "Auto"}));
    }

    #[test]
    fn explicit_mode() {
        let payload = FanUpdate::new(FanMode::On).resolve(&device()).unwrap();
        assert_eq!(payload.mode, FanMode::On);
    }

    #[test]
    fn from_option() {
        assert_eq!(FanUpdate::from(None), FanUpdate::current());
        assert_eq!(
            FanUpdate::from(Some(FanMode::Circulate)),
            FanUpdate::new(FanMode::Circulate)
        );
    }

    #[test]
    fn missing_fan_settings() {
        let device = Device::new(json!({"deviceID": "LCC-1"}));
        assert!(matches!(
            FanUpdate::current().resolve(&device),
            Err(ParseError::MissingField(_))
        ));
        assert!(FanUpdate::new(FanMode::Auto).resolve(&device).is_ok());
    }
}
