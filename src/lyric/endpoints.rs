// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! URL construction for the Lyric REST endpoints.
//!
//! The API key travels in the `apikey` query parameter of every request.

/// Base URL of the Lyric v2 API.
pub const BASE_URL: &str = "https://api.honeywell.com/v2";

/// `GET {base}/devices?apikey=..&locationId=..`
pub(crate) fn devices_url(base_url: &str, client_id: &str, location_id: &str) -> String {
    format!(
        "{base_url}/devices?apikey={}&locationId={}",
        urlencoding::encode(client_id),
        urlencoding::encode(location_id)
    )
}

/// `GET {base}/locations?apikey=..`
pub(crate) fn locations_url(base_url: &str, client_id: &str) -> String {
    format!("{base_url}/locations?apikey={}", urlencoding::encode(client_id))
}

/// `POST {base}/devices/thermostats/{device_id}{suffix}`, query passed separately.
pub(crate) fn thermostat_url(base_url: &str, device_id: &str, suffix: &str) -> String {
    format!(
        "{base_url}/devices/thermostats/{}{suffix}",
        urlencoding::encode(device_id)
    )
}

/// Query parameters of an update request.
pub(crate) fn update_params<'a>(client_id: &'a str, location_id: &'a str) -> [(&'static str, &'a str); 2] {
    [("apikey", client_id), ("locationId", location_id)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn devices_url_format() {
        assert_eq!(
            devices_url(BASE_URL, "key123", "987"),
            "https://api.honeywell.com/v2/devices?apikey=key123&locationId=987"
        );
    }

    #[test]
    fn locations_url_format() {
        assert_eq!(
            locations_url(BASE_URL, "key123"),
            "https://api.honeywell.com/v2/locations?apikey=key123"
        );
    }

    #[test]
    fn thermostat_url_format() {
        assert_eq!(
            thermostat_url(BASE_URL, "LCC-00D02DB6B1A5", ""),
            "https://api.honeywell.com/v2/devices/thermostats/LCC-00D02DB6B1A5"
        );
        assert_eq!(
            thermostat_url("http://localhost:8080", "TCC-1", "/fan"),
            "http://localhost:8080/devices/thermostats/TCC-1/fan"
        );
    }

    #[test]
    fn query_values_are_encoded() {
        assert_eq!(
            locations_url("http://h", "a b&c"),
            "http://h/locations?apikey=a%20b%26c"
        );
    }

    #[test]
    fn update_params_order() {
        assert_eq!(
            update_params("key", "42"),
            [("apikey", "key"), ("locationId", "42")]
        );
    }
}
