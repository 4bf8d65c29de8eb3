// SPDX-License-Identifier: MPL-2.0
//! Air-quality readings attached to air pollution reports.

use serde::{Deserialize, Serialize};

/// Highest index value a reading may carry.
pub const MAX_AQI: u16 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AirQualityLevel {
    Good,
    Moderate,
    Unhealthy,
    #[serde(rename = "Very Unhealthy")]
    VeryUnhealthy,
    Hazardous,
}

impl AirQualityLevel {
    /// Classifies a 0..=500 index.
    ///
    /// Anything above 150 is reported as hazardous; `VeryUnhealthy` is only
    /// reachable by deserializing a stored reading.
    #[must_use]
    pub fn from_index(index: u16) -> Self {
        match index {
            0..=50 => AirQualityLevel::Good,
            51..=100 => AirQualityLevel::Moderate,
            101..=150 => AirQualityLevel::Unhealthy,
            _ => AirQualityLevel::Hazardous,
        }
    }

    /// Maps a provider's 1..=5 scale. Unknown values read as moderate.
    #[must_use]
    pub fn from_provider_scale(aqi: u8) -> Self {
        match aqi {
            1 => AirQualityLevel::Good,
            2 => AirQualityLevel::Moderate,
            3 | 4 => AirQualityLevel::Unhealthy,
            5 => AirQualityLevel::Hazardous,
            _ => AirQualityLevel::Moderate,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AirQualityLevel::Good => "Good",
            AirQualityLevel::Moderate => "Moderate",
            AirQualityLevel::Unhealthy => "Unhealthy",
            AirQualityLevel::VeryUnhealthy => "Very Unhealthy",
            AirQualityLevel::Hazardous => "Hazardous",
        }
    }

    /// Whether the level warrants a warning toast rather than an info one.
    #[must_use]
    pub fn is_harmful(self) -> bool {
        !matches!(self, AirQualityLevel::Good | AirQualityLevel::Moderate)
    }
}

/// A single air-quality sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirQuality {
    index: u16,
    level: AirQualityLevel,
    /// Fine particulate matter in µg/m³.
    pub pm25: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl AirQuality {
    /// Builds a reading, clamping `index` to [`MAX_AQI`] and deriving its level.
    #[must_use]
    pub fn new(index: u16, pm25: f32) -> Self {
        let index = index.min(MAX_AQI);
        Self {
            index,
            level: AirQualityLevel::from_index(index),
            pm25,
            humidity: None,
            temperature: None,
        }
    }

    #[must_use]
    pub fn with_humidity(mut self, humidity: f32) -> Self {
        self.humidity = Some(humidity);
        self
    }

    #[must_use]
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    #[must_use]
    pub fn index(&self) -> u16 {
        self.index
    }

    #[must_use]
    pub fn level(&self) -> AirQualityLevel {
        self.level
    }

    /// One-line summary used as a toast description.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "AQI {} ({}), PM2.5 {:.1} µg/m³",
            self.index,
            self.level.label(),
            self.pm25
        );
        if let Some(temperature) = self.temperature {
            summary.push_str(&format!(", {temperature:.0}°C"));
        }
        if let Some(humidity) = self.humidity {
            summary.push_str(&format!(", {humidity:.0}% humidity"));
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_boundaries_classify_inclusively() {
        assert_eq!(AirQualityLevel::from_index(0), AirQualityLevel::Good);
        assert_eq!(AirQualityLevel::from_index(50), AirQualityLevel::Good);
        assert_eq!(AirQualityLevel::from_index(51), AirQualityLevel::Moderate);
        assert_eq!(AirQualityLevel::from_index(100), AirQualityLevel::Moderate);
        assert_eq!(AirQualityLevel::from_index(150), AirQualityLevel::Unhealthy);
        assert_eq!(AirQualityLevel::from_index(151), AirQualityLevel::Hazardous);
        assert_eq!(AirQualityLevel::from_index(500), AirQualityLevel::Hazardous);
    }

    #[test]
    fn provider_scale_maps_to_levels() {
        assert_eq!(AirQualityLevel::from_provider_scale(1), AirQualityLevel::Good);
        assert_eq!(AirQualityLevel::from_provider_scale(2), AirQualityLevel::Moderate);
        assert_eq!(AirQualityLevel::from_provider_scale(3), AirQualityLevel::Unhealthy);
        assert_eq!(AirQualityLevel::from_provider_scale(4), AirQualityLevel::Unhealthy);
        assert_eq!(AirQualityLevel::from_provider_scale(5), AirQualityLevel::Hazardous);
        assert_eq!(AirQualityLevel::from_provider_scale(0), AirQualityLevel::Moderate);
        assert_eq!(AirQualityLevel::from_provider_scale(9), AirQualityLevel::Moderate);
    }

    #[test]
    fn reading_clamps_index_and_derives_level() {
        let reading = AirQuality::new(720, 310.0);
        assert_eq!(reading.index(), MAX_AQI);
        assert_eq!(reading.level(), AirQualityLevel::Hazardous);
        assert!(reading.level().is_harmful());
    }

    #[test]
    fn summary_includes_optional_fields() {
        let reading = AirQuality::new(42, 8.3)
            .with_temperature(21.4)
            .with_humidity(63.0);
        assert_eq!(
            reading.summary(),
            "AQI 42 (Good), PM2.5 8.3 µg/m³, 21°C, 63% humidity"
        );
        assert!(!reading.level().is_harmful());
    }
}
