//! Plain-text rendering of the lookup state.

use chrono::{DateTime, Local, TimeZone};
use skycast_core::{LookupState, RequestStatus, WeatherSnapshot, display};
use std::fmt::Write;

/// "Friday, October 16, 2026 • 03:04 PM"
pub fn header_line<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{} • {}", now.format("%A, %B %-d, %Y"), now.format("%I:%M %p"))
}

pub fn render_snapshot(snapshot: &WeatherSnapshot) -> String {
    let condition = snapshot.condition();
    let icon = display::icon_for(&condition);

    let mut out = String::new();
    let _ = writeln!(out, "{}  {}", icon.glyph(), display::format_location(snapshot));
    let _ = writeln!(out, "   {}", display::capitalize_words(&snapshot.description));
    let _ = writeln!(out, "   {}", display::format_temperature(snapshot.temperature_c));
    let _ = writeln!(out);
    let _ = writeln!(out, "Weather Details");
    for (label, value) in display::detail_rows(snapshot) {
        let _ = writeln!(out, "  {label:<12}{value}");
    }
    out
}

/// Machine-readable view: the snapshot plus the icon and backdrop it maps to.
pub fn json_view(snapshot: &WeatherSnapshot) -> serde_json::Value {
    serde_json::json!({
        "snapshot": snapshot,
        "icon": display::icon_for(&snapshot.condition()).as_str(),
        "backdrop": display::backdrop(Some(snapshot)),
    })
}

/// Render whatever the state currently shows.
pub fn render_state(state: &LookupState) -> String {
    match state.status() {
        RequestStatus::Idle => String::new(),
        RequestStatus::Loading => "Loading weather data...\n".to_string(),
        RequestStatus::Failed(err) => {
            let mut out = format!("✖ {err}\n");
            // A blank query leaves the previous snapshot on screen.
            if let Some(snapshot) = state.snapshot() {
                out.push('\n');
                out.push_str(&render_snapshot(snapshot));
            }
            out
        }
        RequestStatus::Success => state.snapshot().map(render_snapshot).unwrap_or_default(),
    }
}

pub fn print_header() {
    println!("Weather App");
    println!("Get real-time weather information anywhere");
    println!("{}", header_line(&Local::now()));
    println!();
}
