//! IP-based location detection.
//!
//! Tries ip-api.com first, falls back to ipapi.co, and finally to a
//! hardcoded Seoul fix so the weather widget always has coordinates. The fix
//! is resolved once at startup and stays immutable afterwards.

use std::time::Duration;

use color_eyre::eyre::Result;
use serde::{Deserialize, Serialize};

const IP_API_URL: &str = "http://ip-api.com/json/";
const IPAPI_CO_URL: &str = "https://ipapi.co/json/";
const TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationFix {
    pub city: String,
    pub country: String,
    pub region: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl LocationFix {
    /// Fallback used when every lookup fails.
    pub fn fallback() -> Self {
        Self {
            city: "Seoul".to_string(),
            country: "South Korea".to_string(),
            region: "Seoul".to_string(),
            latitude: 37.5665,
            longitude: 126.978,
        }
    }
}

impl Default for LocationFix {
    fn default() -> Self {
        Self::fallback()
    }
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    #[serde(default)]
    status: String,
    city: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    country: Option<String>,
    #[serde(rename = "regionName")]
    region_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct IpapiCoResponse {
    city: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    country_name: Option<String>,
    region: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LocationService {
    client: reqwest::Client,
}

impl LocationService {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder().timeout(TIMEOUT).build()?;
        Ok(Self { client })
    }

    /// Detect the user's location, trying both providers before falling back.
    pub async fn detect(&self) -> LocationFix {
        if let Some(fix) = self.by_ip_api().await {
            return fix;
        }
        if let Some(fix) = self.by_ipapi_co().await {
            return fix;
        }
        tracing::warn!("location detection failed, using fallback (Seoul)");
        LocationFix::fallback()
    }

    async fn by_ip_api(&self) -> Option<LocationFix> {
        match self.fetch_ip_api().await {
            Ok(fix) => fix,
            Err(e) => {
                tracing::warn!("location lookup via ip-api.com failed: {e}");
                None
            }
        }
    }

    async fn by_ipapi_co(&self) -> Option<LocationFix> {
        match self.fetch_ipapi_co().await {
            Ok(fix) => fix,
            Err(e) => {
                tracing::warn!("location lookup via ipapi.co failed: {e}");
                None
            }
        }
    }

    async fn fetch_ip_api(&self) -> Result<Option<LocationFix>> {
        let response = self
            .client
            .get(IP_API_URL)
            .send()
            .await?
            .error_for_status()?;
        let payload: IpApiResponse = response.json().await?;
        if payload.status != "success" {
            return Ok(None);
        }
        let (Some(lat), Some(lon)) = (payload.lat, payload.lon) else {
            return Ok(None);
        };
        Ok(Some(LocationFix {
            city: payload.city.unwrap_or_else(|| "Unknown".to_string()),
            country: payload.country.unwrap_or_else(|| "Unknown".to_string()),
            region: payload.region_name.unwrap_or_else(|| "Unknown".to_string()),
            latitude: lat,
            longitude: lon,
        }))
    }

    async fn fetch_ipapi_co(&self) -> Result<Option<LocationFix>> {
        let response = self
            .client
            .get(IPAPI_CO_URL)
            .send()
            .await?
            .error_for_status()?;
        let payload: IpapiCoResponse = response.json().await?;
        let (Some(lat), Some(lon)) = (payload.latitude, payload.longitude) else {
            return Ok(None);
        };
        Ok(Some(LocationFix {
            city: payload.city.unwrap_or_else(|| "Unknown".to_string()),
            country: payload.country_name.unwrap_or_else(|| "Unknown".to_string()),
            region: payload.region.unwrap_or_else(|| "Unknown".to_string()),
            latitude: lat,
            longitude: lon,
        }))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_fallback_is_seoul() {
        let fix = LocationFix::fallback();
        assert_eq!(fix.city, "Seoul");
        assert_eq!(fix.latitude, 37.5665);
        assert_eq!(fix.longitude, 126.978);
    }

    #[test]
    fn test_ip_api_failure_status_means_no_fix() {
        let raw = r#"{ "status": "fail", "message": "private range" }"#;
        let payload: IpApiResponse = serde_json::from_str(raw).expect("valid payload");
        assert_eq!(payload.status, "fail");
        assert!(payload.lat.is_none());
    }

    #[test]
    fn test_ip_api_success_payload() {
        let raw = r#"{
            "status": "success",
            "city": "Busan",
            "lat": 35.1796,
            "lon": 129.0756,
            "country": "South Korea",
            "regionName": "Busan"
        }"#;
        let payload: IpApiResponse = serde_json::from_str(raw).expect("valid payload");
        assert_eq!(payload.city.as_deref(), Some("Busan"));
        assert_eq!(payload.lat, Some(35.1796));
    }
}
