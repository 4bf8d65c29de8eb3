// SPDX-License-Identifier: MPL-2.0
//! Device location lookup for the report form.
//!
//! A lookup starts out loading, then either fails outright (no position)
//! or yields a [`Location`]. When the position is known but the reverse
//! geocoder fails, the coordinates are kept under [`UNKNOWN_LOCATION`].

use super::{Coordinates, Location};
use serde::Deserialize;
use tracing::{debug, warn};

/// Name used when no place name can be resolved.
pub const UNKNOWN_LOCATION: &str = "Unknown Location";

/// Message recorded when the device has no positioning support.
pub const GEOLOCATION_UNSUPPORTED: &str = "Geolocation is not supported by your browser";

/// Message recorded when the reverse geocoder fails.
pub const NAME_LOOKUP_FAILED: &str = "Failed to get location name";

/// Address part of a reverse-geocoding response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeocodedAddress {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub town: Option<String>,
    #[serde(default)]
    pub village: Option<String>,
    #[serde(default)]
    pub suburb: Option<String>,
}

impl GeocodedAddress {
    /// Most specific populated place: city, town, village, then suburb.
    #[must_use]
    pub fn place_name(&self) -> &str {
        [&self.city, &self.town, &self.village, &self.suburb]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_LOCATION)
    }
}

/// State of one location lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationLookup {
    loading: bool,
    error: Option<String>,
    location: Option<Location>,
}

impl Default for LocationLookup {
    fn default() -> Self {
        Self::loading()
    }
}

impl LocationLookup {
    /// Lookup in flight.
    #[must_use]
    pub fn loading() -> Self {
        Self {
            loading: true,
            error: None,
            location: None,
        }
    }

    #[must_use]
    pub fn unsupported() -> Self {
        Self::position_failed(GEOLOCATION_UNSUPPORTED)
    }

    /// The device refused or failed to report a position.
    #[must_use]
    pub fn position_failed(message: impl Into<String>) -> Self {
        let message = message.into();
        warn!(%message, "location unavailable");
        Self {
            loading: false,
            error: Some(message),
            location: None,
        }
    }

    /// Position and address both resolved.
    #[must_use]
    pub fn resolved(coordinates: Coordinates, address: &GeocodedAddress) -> Self {
        let name = address.place_name().to_string();
        debug!(%name, "location resolved");
        Self {
            loading: false,
            error: None,
            location: Some(Location {
                name,
                coordinates: Some(coordinates),
            }),
        }
    }

    /// Position known, place name not.
    #[must_use]
    pub fn name_lookup_failed(coordinates: Coordinates) -> Self {
        warn!("reverse geocoding failed, keeping coordinates");
        Self {
            loading: false,
            error: Some(NAME_LOOKUP_FAILED.to_string()),
            location: Some(Location {
                name: UNKNOWN_LOCATION.to_string(),
                coordinates: Some(coordinates),
            }),
        }
    }

    /// Folds a geocoder result into a lookup for `coordinates`.
    pub fn from_geocoding<E>(coordinates: Coordinates, result: Result<GeocodedAddress, E>) -> Self {
        match result {
            Ok(address) => Self::resolved(coordinates, &address),
            Err(_) => Self::name_lookup_failed(coordinates),
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }
}
