//! Random dog and cat image operations.

use lookout_types::{ApiError, CatView, DogView};

use crate::{ProviderConfig, fetch_json, is_present, validate};

/// Fetch a random dog image URL from the Dog CEO API.
pub async fn fetch_dog(config: &ProviderConfig) -> Result<DogView, ApiError> {
    let data = fetch_json(&config.endpoints.dog).await?;
    validate(&data, &["message"])?;

    let image_url = data["message"]
        .as_str()
        .ok_or_else(|| ApiError::Parse("message is not a string".to_string()))?
        .to_string();

    Ok(DogView { image_url })
}

/// Fetch a random cat image URL from TheCatAPI.
///
/// The response is a JSON array; the image URL lives at `[0].url`.
pub async fn fetch_cat(config: &ProviderConfig) -> Result<CatView, ApiError> {
    let data = fetch_json(&config.endpoints.cat).await?;

    let first = data
        .as_array()
        .and_then(|arr| arr.first())
        .ok_or_else(|| ApiError::Parse("expected a non-empty array".to_string()))?;

    if !is_present(first.get("url")) {
        return Err(ApiError::missing_field("url"));
    }
    let image_url = first["url"]
        .as_str()
        .ok_or_else(|| ApiError::Parse("url is not a string".to_string()))?
        .to_string();

    Ok(CatView { image_url })
}
