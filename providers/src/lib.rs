//! Public API clients for the Lookout dashboard.
//!
//! # Architecture
//!
//! The crate is organized around an operation dispatch pattern:
//!
//! - [`fetch_operation`] - Unified entry point that dispatches to
//!   operation-specific fetchers by [`OperationKind`]
//! - [`fetch_json`] - The one-shot GET helper every fetcher goes through
//! - [`validate`] - Required-field presence check applied before any field
//!   access
//!
//! Every fetcher follows the identical shape: build a URL from
//! [`ProviderConfig`], fetch, validate, format a view model. Fetchers share
//! no state beyond the read-only config and the process-wide HTTP client.
//!
//! # Error Handling
//!
//! All failures surface as [`ApiError`] and stay local to the invocation
//! that produced them: a non-success status is `RequestFailed`, a transport
//! failure is `Network`, a malformed body is `Parse`, and an absent-or-falsy
//! required field is `MissingField`.

pub mod images;
pub mod jokes;
pub mod meteo;
pub mod pokemon;
pub mod rates;
pub mod suntimes;

use std::sync::OnceLock;
use std::time::Duration;

use serde_json::Value;

use lookout_types::{ApiError, OperationKind, PanelView};

const CONNECT_TIMEOUT_SECS: u64 = 30;

/// Process-wide HTTP client. No per-request timeout is configured; slow
/// requests resolve or fail at the transport's default policy.
pub fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|e| {
                tracing::error!("Failed to build HTTP client: {e}. Falling back to defaults.");
                reqwest::Client::new()
            })
    })
}

/// Base URLs of the eight services, overridable for tests.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub dog: String,
    pub cat: String,
    pub joke: String,
    pub pokemon: String,
    pub weather: String,
    pub air_quality: String,
    pub sun_times: String,
    pub exchange_rates: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            dog: "https://dog.ceo/api/breeds/image/random".to_string(),
            cat: "https://api.thecatapi.com/v1/images/search".to_string(),
            joke: "https://v2.jokeapi.dev/joke/Any?safe-mode".to_string(),
            pokemon: "https://pokeapi.co/api/v2/pokemon".to_string(),
            weather: "https://api.open-meteo.com/v1/forecast".to_string(),
            air_quality: "https://air-quality-api.open-meteo.com/v1/air-quality".to_string(),
            sun_times: "https://api.sunrise-sunset.org/json".to_string(),
            exchange_rates: "https://open.er-api.com/v6/latest/CAD".to_string(),
        }
    }
}

/// Location the weather, air quality and sun-times operations report on.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// The sunrise-sunset service historically used slightly different
    /// coordinates for the default city; kept separate so overrides can
    /// collapse them.
    pub sun_latitude: f64,
    pub sun_longitude: f64,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            name: "Toronto, ON".to_string(),
            latitude: 43.7064,
            longitude: -79.3986,
            sun_latitude: 43.6532,
            sun_longitude: -79.3832,
        }
    }
}

/// Read-only configuration shared by every fetcher.
#[derive(Debug, Clone, Default)]
pub struct ProviderConfig {
    pub endpoints: Endpoints,
    pub location: Location,
}

/// Fetch a URL and parse the body as JSON.
///
/// Fails with `RequestFailed(status)` on a non-success HTTP status,
/// `Network` when the transport cannot complete the request, and `Parse`
/// when the body is not valid JSON.
pub async fn fetch_json(url: &str) -> Result<Value, ApiError> {
    let response = http_client()
        .get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::RequestFailed(status.as_u16()));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    serde_json::from_slice(&body).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Check that `value` has every listed top-level field present and truthy.
///
/// Fails with `MissingField` naming the first offender, in listed order.
/// Absent keys, `null`, `false`, numeric zero and the empty string count as
/// missing; arrays and objects are always present, even when empty.
pub fn validate(value: &Value, required_fields: &[&str]) -> Result<(), ApiError> {
    for &field in required_fields {
        if !is_present(value.get(field)) {
            return Err(ApiError::missing_field(field));
        }
    }
    Ok(())
}

pub(crate) fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

/// Deserialize a validated payload into its typed form.
pub(crate) fn parse_payload<T>(value: Value) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Run one operation to completion and produce its view model.
pub async fn fetch_operation(
    kind: OperationKind,
    config: &ProviderConfig,
) -> Result<PanelView, ApiError> {
    let result = match kind {
        OperationKind::Dog => images::fetch_dog(config).await.map(PanelView::Dog),
        OperationKind::Cat => images::fetch_cat(config).await.map(PanelView::Cat),
        OperationKind::Joke => jokes::fetch_joke(config).await.map(PanelView::Joke),
        OperationKind::Pokemon => pokemon::fetch_pokemon(config).await.map(PanelView::Pokemon),
        OperationKind::Weather => meteo::fetch_weather(config).await.map(PanelView::Weather),
        OperationKind::AirQuality => meteo::fetch_air_quality(config)
            .await
            .map(PanelView::AirQuality),
        OperationKind::SunTimes => suntimes::fetch_sun_times(config)
            .await
            .map(PanelView::SunTimes),
        OperationKind::Rates => rates::fetch_rates(config).await.map(PanelView::Rates),
    };

    if let Err(e) = &result {
        tracing::warn!(operation = kind.name(), error = %e, "Operation failed");
    }
    result
}
