use serde::{Deserialize, Serialize};

/// Last successfully retrieved weather for one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location_name: String,
    pub country: String,
    /// Coarse category string as reported upstream, e.g. "Clear" or "Rain".
    pub category: String,
    pub description: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub pressure_hpa: u32,
    pub visibility_m: u32,
    pub cloudiness_pct: u8,
}

impl WeatherSnapshot {
    pub fn condition(&self) -> Condition {
        Condition::parse(&self.category)
    }
}

/// Typed view of a condition category, used only for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    Clear,
    Clouds,
    /// Rain and drizzle share a variant.
    Rain,
    Other(String),
}

impl Condition {
    /// Case-insensitive; anything unknown lands in `Other`.
    pub fn parse(category: &str) -> Self {
        match category.trim().to_lowercase().as_str() {
            "clear" => Condition::Clear,
            "clouds" => Condition::Clouds,
            "rain" | "drizzle" => Condition::Rain,
            _ => Condition::Other(category.trim().to_string()),
        }
    }
}
