//! Current weather and air quality operations (Open-Meteo).
//!
//! Both services share the same request shape: fixed coordinates plus a
//! `current=` selection of variables, answered with a `current` object that
//! echoes those variables and an observation time.

use serde::Deserialize;

use lookout_types::{AirQualityView, ApiError, WeatherView};

use crate::{ProviderConfig, fetch_json, parse_payload, validate};

#[derive(Debug, Deserialize)]
struct ForecastPayload {
    current: CurrentWeather,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature_2m: f64,
    apparent_temperature: f64,
    wind_speed_10m: f64,
    time: String,
}

/// Fetch current weather for the configured location, metric units.
pub async fn fetch_weather(config: &ProviderConfig) -> Result<WeatherView, ApiError> {
    let loc = &config.location;
    let url = format!(
        "{}?latitude={}&longitude={}\
         &current=temperature_2m,apparent_temperature,wind_speed_10m\
         &temperature_unit=celsius&wind_speed_unit=kmh",
        config.endpoints.weather, loc.latitude, loc.longitude
    );

    let data = fetch_json(&url).await?;
    validate(&data, &["current"])?;
    let payload: ForecastPayload = parse_payload(data)?;

    Ok(WeatherView {
        city: loc.name.clone(),
        temperature_c: payload.current.temperature_2m,
        apparent_c: payload.current.apparent_temperature,
        wind_kmh: payload.current.wind_speed_10m,
        observed_at: payload.current.time,
    })
}

#[derive(Debug, Deserialize)]
struct AirQualityPayload {
    current: CurrentAirQuality,
}

#[derive(Debug, Deserialize)]
struct CurrentAirQuality {
    us_aqi: f64,
    pm2_5: f64,
    pm10: f64,
    nitrogen_dioxide: f64,
    ozone: f64,
    time: String,
}

/// Fetch current air quality for the configured location.
pub async fn fetch_air_quality(config: &ProviderConfig) -> Result<AirQualityView, ApiError> {
    let loc = &config.location;
    let url = format!(
        "{}?latitude={}&longitude={}\
         &current=us_aqi,pm2_5,pm10,nitrogen_dioxide,ozone",
        config.endpoints.air_quality, loc.latitude, loc.longitude
    );

    let data = fetch_json(&url).await?;
    validate(&data, &["current"])?;
    let payload: AirQualityPayload = parse_payload(data)?;

    Ok(AirQualityView {
        city: loc.name.clone(),
        us_aqi: payload.current.us_aqi,
        pm2_5: payload.current.pm2_5,
        pm10: payload.current.pm10,
        nitrogen_dioxide: payload.current.nitrogen_dioxide,
        ozone: payload.current.ozone,
        observed_at: payload.current.time,
    })
}
