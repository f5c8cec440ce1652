//! Open-Meteo weather and air quality client (free, no API key).

use std::time::Duration;

use color_eyre::eyre::Result;
use serde::{Deserialize, Serialize};

const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
const AIR_QUALITY_URL: &str = "https://air-quality-api.open-meteo.com/v1/air-quality";
const TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Canonical Celsius value; unit conversion is display-only.
    #[serde(rename = "temperature_2m", default)]
    pub temperature: f64,
    #[serde(rename = "relative_humidity_2m", default)]
    pub humidity: f64,
    #[serde(default)]
    pub weather_code: u8,
    #[serde(rename = "wind_speed_10m", default)]
    pub wind_speed: f64,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentWeather,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQuality {
    #[serde(rename = "pm2_5", default)]
    pub pm25: f64,
    #[serde(default)]
    pub pm10: f64,
}

#[derive(Debug, Deserialize)]
struct AirQualityResponse {
    current: AirQuality,
}

#[derive(Debug, Clone)]
pub struct WeatherService {
    client: reqwest::Client,
}

impl WeatherService {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder().timeout(TIMEOUT).build()?;
        Ok(Self { client })
    }

    pub async fn current_weather(&self, lat: f64, lon: f64) -> Option<CurrentWeather> {
        match self.fetch_weather(lat, lon).await {
            Ok(current) => Some(current),
            Err(e) => {
                tracing::warn!("weather fetch failed: {e}");
                None
            }
        }
    }

    pub async fn air_quality(&self, lat: f64, lon: f64) -> Option<AirQuality> {
        match self.fetch_air_quality(lat, lon).await {
            Ok(current) => Some(current),
            Err(e) => {
                tracing::warn!("air quality fetch failed: {e}");
                None
            }
        }
    }

    async fn fetch_weather(&self, lat: f64, lon: f64) -> Result<CurrentWeather> {
        let response = self
            .client
            .get(FORECAST_URL)
            .query(&[
                ("latitude", lat.to_string()),
                ("longitude", lon.to_string()),
                (
                    "current",
                    "temperature_2m,relative_humidity_2m,weather_code,wind_speed_10m".to_string(),
                ),
            ])
            .send()
            .await?
            .error_for_status()?;
        let payload: ForecastResponse = response.json().await?;
        Ok(payload.current)
    }

    async fn fetch_air_quality(&self, lat: f64, lon: f64) -> Result<AirQuality> {
        let response = self
            .client
            .get(AIR_QUALITY_URL)
            .query(&[
                ("latitude", lat.to_string()),
                ("longitude", lon.to_string()),
                ("current", "pm2_5,pm10".to_string()),
            ])
            .send()
            .await?
            .error_for_status()?;
        let payload: AirQualityResponse = response.json().await?;
        Ok(payload.current)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_current_weather_deserialization() {
        let raw = r#"{
            "current": {
                "temperature_2m": 21.3,
                "relative_humidity_2m": 62,
                "weather_code": 3,
                "wind_speed_10m": 8.4
            }
        }"#;
        let payload: ForecastResponse = serde_json::from_str(raw).expect("valid payload");
        assert_eq!(
            payload.current,
            CurrentWeather {
                temperature: 21.3,
                humidity: 62.0,
                weather_code: 3,
                wind_speed: 8.4,
            }
        );
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let raw = r#"{ "current": {} }"#;
        let payload: ForecastResponse = serde_json::from_str(raw).expect("valid payload");
        assert_eq!(payload.current.temperature, 0.0);
        assert_eq!(payload.current.weather_code, 0);
    }

    #[test]
    fn test_air_quality_deserialization() {
        let raw = r#"{ "current": { "pm2_5": 12.5, "pm10": 30.1 } }"#;
        let payload: AirQualityResponse = serde_json::from_str(raw).expect("valid payload");
        assert_eq!(payload.current.pm25, 12.5);
        assert_eq!(payload.current.pm10, 30.1);
    }
}
