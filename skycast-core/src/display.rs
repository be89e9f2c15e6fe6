//! Presentation helpers: icon and gradient selection plus the value
//! formatting used when rendering a snapshot.
//!
//! Every function here is total and side-effect free.

use crate::model::{Condition, WeatherSnapshot};

/// Gradient shown when there is no snapshot or the category is unknown.
pub const DEFAULT_GRADIENT: &str = "from-blue-500 via-purple-500 to-indigo-600";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Sun,
    Cloud,
    CloudRain,
}

impl Icon {
    pub fn as_str(&self) -> &'static str {
        match self {
            Icon::Sun => "sun",
            Icon::Cloud => "cloud",
            Icon::CloudRain => "cloud-rain",
        }
    }

    /// Terminal glyph for the icon.
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Sun => "☀",
            Icon::Cloud => "☁",
            Icon::CloudRain => "🌧",
        }
    }
}

pub fn icon_for(condition: &Condition) -> Icon {
    match condition {
        Condition::Clear => Icon::Sun,
        Condition::Clouds => Icon::Cloud,
        Condition::Rain => Icon::CloudRain,
        Condition::Other(_) => Icon::Cloud,
    }
}

pub fn gradient_for(condition: &Condition) -> &'static str {
    match condition {
        Condition::Clear => "from-yellow-400 via-orange-400 to-pink-500",
        Condition::Clouds => "from-gray-400 via-gray-500 to-gray-600",
        Condition::Rain => "from-blue-500 via-blue-600 to-indigo-700",
        Condition::Other(_) => DEFAULT_GRADIENT,
    }
}

/// Backdrop for the whole view.
pub fn backdrop(snapshot: Option<&WeatherSnapshot>) -> &'static str {
    snapshot
        .map(|s| gradient_for(&s.condition()))
        .unwrap_or(DEFAULT_GRADIENT)
}

/// Round half up: 21.5 -> 22, -0.5 -> 0, -0.6 -> -1.
pub fn round_celsius(value: f64) -> i64 {
    // `round` goes away from zero on ties; only negative ties need moving up.
    let rounded = value.round();
    if value < 0.0 && value.fract() == -0.5 {
        (rounded + 1.0) as i64
    } else {
        rounded as i64
    }
}

pub fn format_temperature(celsius: f64) -> String {
    format!("{}°C", round_celsius(celsius))
}

/// Kilometres to one decimal, ties rounded up.
pub fn format_visibility(meters: u32) -> String {
    // `meters / 1000` sits exactly halfway between two tenths only for odd
    // multiples of 250; no other value is a tie once converted to f64.
    if meters % 250 == 0 && (meters / 250) % 2 == 1 {
        let tenths = (u64::from(meters) + 50) / 100;
        format!("{}.{} km", tenths / 10, tenths % 10)
    } else {
        format!("{:.1} km", f64::from(meters) / 1000.0)
    }
}

pub fn format_wind(speed_mps: f64) -> String {
    format!("{speed_mps} m/s")
}

pub fn format_percent(value: u8) -> String {
    format!("{value}%")
}

pub fn format_pressure(hpa: u32) -> String {
    format!("{hpa} hPa")
}

pub fn format_location(snapshot: &WeatherSnapshot) -> String {
    format!("{}, {}", snapshot.location_name, snapshot.country)
}

/// "light intensity drizzle" -> "Light Intensity Drizzle".
pub fn capitalize_words(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Labelled detail rows in display order.
pub fn detail_rows(snapshot: &WeatherSnapshot) -> Vec<(&'static str, String)> {
    vec![
        ("Feels Like", format_temperature(snapshot.feels_like_c)),
        ("Humidity", format_percent(snapshot.humidity_pct)),
        ("Wind Speed", format_wind(snapshot.wind_speed_mps)),
        ("Pressure", format_pressure(snapshot.pressure_hpa)),
        ("Visibility", format_visibility(snapshot.visibility_m)),
        ("Cloudiness", format_percent(snapshot.cloudiness_pct)),
    ]
}
