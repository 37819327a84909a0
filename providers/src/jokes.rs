//! Random joke operation (JokeAPI, safe mode).

use serde::Deserialize;

use lookout_types::{ApiError, JokeView};

use crate::{ProviderConfig, fetch_json, parse_payload, validate};

#[derive(Debug, Deserialize)]
struct JokePayload {
    #[serde(rename = "type")]
    kind: String,
    joke: Option<String>,
    setup: Option<String>,
    delivery: Option<String>,
}

/// Fetch a random joke. Single jokes carry one `joke` field; two-part jokes
/// carry `setup` and `delivery`.
pub async fn fetch_joke(config: &ProviderConfig) -> Result<JokeView, ApiError> {
    let data = fetch_json(&config.endpoints.joke).await?;
    validate(&data, &["type"])?;
    let payload: JokePayload = parse_payload(data)?;
    view_from_payload(payload)
}

fn view_from_payload(payload: JokePayload) -> Result<JokeView, ApiError> {
    if payload.kind == "single" {
        let joke = payload.joke.ok_or_else(|| ApiError::missing_field("joke"))?;
        Ok(JokeView::Single { joke })
    } else {
        let setup = payload
            .setup
            .ok_or_else(|| ApiError::missing_field("setup"))?;
        let delivery = payload
            .delivery
            .ok_or_else(|| ApiError::missing_field("delivery"))?;
        Ok(JokeView::TwoPart { setup, delivery })
    }
}

#[cfg(test)]
mod tests {
    use super::{JokePayload, view_from_payload};
    use lookout_types::{ApiError, JokeView};

    fn payload(kind: &str, joke: Option<&str>, setup: Option<&str>, delivery: Option<&str>) -> JokePayload {
        JokePayload {
            kind: kind.to_string(),
            joke: joke.map(ToString::to_string),
            setup: setup.map(ToString::to_string),
            delivery: delivery.map(ToString::to_string),
        }
    }

    #[test]
    fn single_joke_renders_the_joke_field() {
        let view = view_from_payload(payload("single", Some("X"), None, None)).unwrap();
        assert_eq!(view, JokeView::Single { joke: "X".to_string() });
    }

    #[test]
    fn twopart_joke_renders_setup_then_delivery() {
        let view = view_from_payload(payload("twopart", None, Some("A"), Some("B"))).unwrap();
        assert_eq!(
            view,
            JokeView::TwoPart {
                setup: "A".to_string(),
                delivery: "B".to_string()
            }
        );
    }

    #[test]
    fn twopart_joke_without_delivery_fails() {
        let err = view_from_payload(payload("twopart", None, Some("A"), None)).unwrap_err();
        assert_eq!(err, ApiError::missing_field("delivery"));
    }

    #[test]
    fn single_joke_without_text_fails() {
        let err = view_from_payload(payload("single", None, None, None)).unwrap_err();
        assert_eq!(err, ApiError::missing_field("joke"));
    }
}
