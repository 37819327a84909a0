//! CAD exchange rates operation (open.er-api.com).

use serde_json::Value;

use lookout_types::{ApiError, RatesView};

use crate::{ProviderConfig, fetch_json, is_present, validate};

const BASE_CURRENCY: &str = "CAD";

/// Fetch the CAD -> EUR and CAD -> USD rates.
///
/// Fails with `MissingRate` when either rate is absent or zero; a zero rate
/// is never a real quote.
pub async fn fetch_rates(config: &ProviderConfig) -> Result<RatesView, ApiError> {
    let data = fetch_json(&config.endpoints.exchange_rates).await?;
    validate(&data, &["rates"])?;
    view_from_payload(&data)
}

fn view_from_payload(data: &Value) -> Result<RatesView, ApiError> {
    let rates = &data["rates"];
    let eur = required_rate(rates, "EUR")?;
    let usd = required_rate(rates, "USD")?;

    let updated = data["time_last_update_utc"]
        .as_str()
        .unwrap_or_default()
        .to_string();

    Ok(RatesView {
        base: BASE_CURRENCY,
        eur: format!("{eur:.3}"),
        usd: format!("{usd:.3}"),
        updated,
    })
}

fn required_rate(rates: &Value, code: &str) -> Result<f64, ApiError> {
    if !is_present(rates.get(code)) {
        return Err(ApiError::MissingRate);
    }
    rates[code].as_f64().ok_or(ApiError::MissingRate)
}
