//! Sunrise/sunset operation (sunrise-sunset.org).
//!
//! The service is queried with `formatted=0`, so sunrise, sunset and solar
//! noon arrive as ISO-8601 UTC timestamps and are converted to local
//! wall-clock time for display. `day_length` is passed through exactly as
//! reported (seconds when unformatted).

use chrono::{DateTime, Local};
use serde::Deserialize;
use serde_json::Value;

use lookout_types::{ApiError, SunTimesView};

use crate::{ProviderConfig, fetch_json, parse_payload, validate};

#[derive(Debug, Deserialize)]
struct SunTimesPayload {
    results: SunResults,
}

#[derive(Debug, Deserialize)]
struct SunResults {
    sunrise: String,
    sunset: String,
    solar_noon: String,
    day_length: Value,
}

/// Fetch today's sun times for the configured location.
pub async fn fetch_sun_times(config: &ProviderConfig) -> Result<SunTimesView, ApiError> {
    let loc = &config.location;
    let url = format!(
        "{}?lat={}&lng={}&formatted=0",
        config.endpoints.sun_times, loc.sun_latitude, loc.sun_longitude
    );

    let data = fetch_json(&url).await?;
    validate(&data, &["results"])?;
    let payload: SunTimesPayload = parse_payload(data)?;

    Ok(SunTimesView {
        city: loc.name.clone(),
        sunrise: to_local_time(&payload.results.sunrise)?,
        sunset: to_local_time(&payload.results.sunset)?,
        solar_noon: to_local_time(&payload.results.solar_noon)?,
        day_length: display_value(&payload.results.day_length),
    })
}

/// Convert an ISO-8601 timestamp to local `HH:MM:SS`.
fn to_local_time(iso: &str) -> Result<String, ApiError> {
    let parsed = DateTime::parse_from_rfc3339(iso)
        .map_err(|e| ApiError::Parse(format!("bad timestamp {iso:?}: {e}")))?;
    Ok(parsed.with_timezone(&Local).format("%H:%M:%S").to_string())
}

/// `day_length` is a number when unformatted and a string otherwise; show
/// either as-is.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
