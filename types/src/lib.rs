//! Core domain types for Lookout.
//!
//! This crate contains pure domain types with no IO, no async, and minimal
//! dependencies. Everything here can be used from any layer of the
//! application.

mod registry;
pub mod ui;
mod view;

pub use registry::{OPERATIONS, OperationDescriptor, OperationKind, descriptor};
pub use view::{
    AirQualityView, CatView, DogView, JokeView, PanelView, PokemonView, RatesView, SunTimesView,
    WeatherView,
};

use thiserror::Error;

/// Failure of a single fetch-validate-format pass.
///
/// Every variant is terminal for the invocation that produced it and never
/// propagates beyond the panel that triggered the fetch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The transport could not complete the request (DNS, connect, body read).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success HTTP status.
    #[error("request failed ({0})")]
    RequestFailed(u16),
    /// The body was not the structured payload the operation declares.
    #[error("invalid response payload: {0}")]
    Parse(String),
    /// A required top-level field was absent or falsy.
    #[error("missing required field: {0}")]
    MissingField(String),
    /// The exchange-rate payload lacked the EUR or USD rate.
    #[error("rates missing in response")]
    MissingRate,
}

impl ApiError {
    pub fn missing_field(name: impl Into<String>) -> Self {
        Self::MissingField(name.into())
    }
}

/// Display state of one dashboard panel.
///
/// Transitions: `Idle -> Loading -> Ready | Failed`, and from any state back
/// to `Loading` on re-trigger. Every transition fully replaces the panel's
/// content.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelState {
    /// Startup state; the panel shows its muted placeholder message.
    Idle,
    /// A fetch is in flight; the panel shows a spinner and a message.
    Loading,
    /// The last fetch produced a renderable view.
    Ready(PanelView),
    /// The last fetch failed; the panel shows the full error message.
    Failed(String),
}

impl PanelState {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;

    #[test]
    fn error_display_matches_user_facing_text() {
        assert_eq!(
            ApiError::RequestFailed(404).to_string(),
            "request failed (404)"
        );
        assert_eq!(
            ApiError::missing_field("message").to_string(),
            "missing required field: message"
        );
        assert_eq!(ApiError::MissingRate.to_string(), "rates missing in response");
    }

    #[test]
    fn network_error_embeds_transport_detail() {
        let err = ApiError::Network("connection refused".to_string());
        assert!(err.to_string().contains("connection refused"));
    }
}
