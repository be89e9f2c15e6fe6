use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{
    error::{LookupError, truncate_body},
    model::WeatherSnapshot,
};

use super::WeatherProvider;

pub const DEFAULT_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    endpoint: String,
    api_key: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT.to_string(), api_key)
    }

    /// Point the provider at a different base URL (mirrors, test servers).
    pub fn with_endpoint(endpoint: String, api_key: String) -> Self {
        // No explicit timeout: the transport default applies.
        Self { endpoint, api_key, http: Client::new() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Default, Deserialize)]
struct OwSys {
    #[serde(default)]
    country: String,
}

#[derive(Debug, Default, Deserialize)]
struct OwClouds {
    all: u8,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    #[serde(default)]
    sys: OwSys,
    weather: Vec<OwWeather>,
    main: OwMain,
    wind: OwWind,
    #[serde(default)]
    visibility: u32,
    #[serde(default)]
    clouds: OwClouds,
}

impl From<OwCurrentResponse> for WeatherSnapshot {
    fn from(parsed: OwCurrentResponse) -> Self {
        let (category, description) = parsed
            .weather
            .into_iter()
            .next()
            .map(|w| (w.main, w.description))
            .unwrap_or_else(|| ("Unknown".to_string(), "Unknown".to_string()));

        WeatherSnapshot {
            location_name: parsed.name,
            country: parsed.sys.country,
            category,
            description,
            temperature_c: parsed.main.temp,
            feels_like_c: parsed.main.feels_like,
            humidity_pct: parsed.main.humidity,
            wind_speed_mps: parsed.wind.speed,
            pressure_hpa: parsed.main.pressure,
            visibility_m: parsed.visibility,
            cloudiness_pct: parsed.clouds.all,
        }
    }
}

/// Parse a success body into a snapshot.
pub fn parse_current(body: &str) -> Result<WeatherSnapshot, LookupError> {
    let parsed: OwCurrentResponse = serde_json::from_str(body).map_err(|e| {
        LookupError::upstream(format!(
            "failed to parse OpenWeather current JSON: {e}: {}",
            truncate_body(body)
        ))
    })?;
    Ok(parsed.into())
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, city: &str) -> Result<WeatherSnapshot, LookupError> {
        debug!(city, endpoint = %self.endpoint, "requesting current weather");

        // `query` percent-encodes the city name.
        let res = self
            .http
            .get(&self.endpoint)
            .query(&[("q", city), ("units", "metric"), ("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "OpenWeather request failed");
                LookupError::upstream(format!("failed to send request to OpenWeather: {e}"))
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|e| {
            LookupError::upstream(format!("failed to read OpenWeather response body: {e}"))
        })?;

        debug!(city, status = status.as_u16(), "OpenWeather responded");

        if !status.is_success() {
            return Err(LookupError::from_status(status.as_u16(), &body));
        }

        parse_current(&body)
    }
}
