//! Weather presentation tables.
//!
//! Stateless lookups mapping raw API values to display strings: WMO weather
//! codes to descriptions and icons, PM2.5 to a severity band, and the
//! Celsius/Fahrenheit display conversion. The canonical temperature stays in
//! Celsius everywhere; conversion happens at render time only.

use serde::{Deserialize, Serialize};
use strum::Display;

/// English description for a WMO weather code (0-99).
pub fn describe_wmo(code: u8) -> &'static str {
    match code {
        0 => "Clear",
        1 => "Mainly Clear",
        2 => "Partly Cloudy",
        3 => "Overcast",
        45 | 48 => "Foggy",
        51 => "Light Drizzle",
        53 => "Drizzle",
        55 => "Heavy Drizzle",
        61 => "Light Rain",
        63 => "Rain",
        65 => "Heavy Rain",
        71 => "Light Snow",
        73 => "Snow",
        75 => "Heavy Snow",
        77 => "Sleet",
        80 | 81 => "Showers",
        82 => "Heavy Showers",
        85 => "Snow",
        86 => "Heavy Snow",
        95 | 96 => "Thunderstorm",
        99 => "Heavy Thunderstorm",
        _ => "Unknown",
    }
}

/// Icon for a WMO weather code. Unknown codes get the thermometer.
pub fn wmo_icon(code: u8) -> &'static str {
    match code {
        0 => "☀️",
        1 | 2 => "⛅",
        3 => "☁️",
        45 | 48 => "🌫️",
        51 | 53 | 55 | 61 | 63 | 65 | 80 | 81 | 82 => "🌧️",
        71 | 73 | 75 | 77 | 85 | 86 => "❄️",
        95 | 96 | 99 => "⛈️",
        _ => "🌡️",
    }
}

/// PM2.5 severity band, boundary-inclusive on the lower band.
pub fn pm25_band(pm25: f64) -> &'static str {
    if pm25 <= 15.0 {
        "Good"
    } else if pm25 <= 35.0 {
        "Moderate"
    } else if pm25 <= 75.0 {
        "Unhealthy"
    } else {
        "Very Unhealthy"
    }
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Display-only temperature unit. The stored value is always Celsius.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum TempUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TempUnit {
    pub fn toggled(self) -> Self {
        match self {
            Self::Celsius => Self::Fahrenheit,
            Self::Fahrenheit => Self::Celsius,
        }
    }

    pub fn from_setting(value: &str) -> Self {
        if value == "fahrenheit" {
            Self::Fahrenheit
        } else {
            Self::Celsius
        }
    }

    pub fn as_setting(self) -> &'static str {
        match self {
            Self::Celsius => "celsius",
            Self::Fahrenheit => "fahrenheit",
        }
    }

    /// Format a canonical Celsius value in this unit.
    pub fn format(self, celsius: f64) -> String {
        match self {
            Self::Celsius => format!("{celsius:.1}°C"),
            Self::Fahrenheit => format!("{:.1}°F", celsius_to_fahrenheit(celsius)),
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Celsius => "--°C",
            Self::Fahrenheit => "--°F",
        }
    }
}
