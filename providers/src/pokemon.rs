//! Random Pokémon operation (PokéAPI, original 151 only).

use serde::Deserialize;

use lookout_types::{ApiError, PokemonView};

use crate::{ProviderConfig, fetch_json, parse_payload, validate};

/// Highest Pokédex id the random draw can produce.
pub const MAX_POKEMON_ID: u32 = 151;

/// Uniform random id in `1..=MAX_POKEMON_ID`. Non-cryptographic.
#[must_use]
pub fn random_pokemon_id() -> u32 {
    (rand::random::<f64>() * f64::from(MAX_POKEMON_ID)).floor() as u32 + 1
}

#[derive(Debug, Deserialize)]
struct PokemonPayload {
    name: String,
    types: Vec<TypeSlot>,
    sprites: Sprites,
    height: i64,
    weight: i64,
}

#[derive(Debug, Deserialize)]
struct TypeSlot {
    #[serde(rename = "type")]
    kind: NamedResource,
}

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
}

#[derive(Debug, Deserialize)]
struct Sprites {
    front_default: Option<String>,
}

/// Fetch one randomly chosen Pokémon.
pub async fn fetch_pokemon(config: &ProviderConfig) -> Result<PokemonView, ApiError> {
    let id = random_pokemon_id();
    let url = format!("{}/{id}", config.endpoints.pokemon);

    let data = fetch_json(&url).await?;
    validate(&data, &["name", "types", "sprites", "height", "weight"])?;
    let payload: PokemonPayload = parse_payload(data)?;

    let types = payload
        .types
        .iter()
        .map(|slot| slot.kind.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    Ok(PokemonView {
        id,
        name: capitalize(&payload.name),
        types,
        sprite_url: payload.sprites.front_default,
        height: payload.height,
        weight: payload.weight,
    })
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{MAX_POKEMON_ID, capitalize, random_pokemon_id};
    use std::collections::HashSet;

    #[test]
    fn random_id_stays_in_range() {
        for _ in 0..10_000 {
            let id = random_pokemon_id();
            assert!((1..=MAX_POKEMON_ID).contains(&id), "out of range: {id}");
        }
    }

    #[test]
    fn random_id_covers_the_range_broadly() {
        // 20k draws over 151 buckets; anything close to uniform hits well
        // over 140 distinct values.
        let seen: HashSet<u32> = (0..20_000).map(|_| random_pokemon_id()).collect();
        assert!(seen.len() > 140, "only {} distinct ids", seen.len());
        assert!(!seen.contains(&0));
        assert!(!seen.contains(&(MAX_POKEMON_ID + 1)));
    }

    #[test]
    fn capitalize_uppercases_first_letter_only() {
        assert_eq!(capitalize("bulbasaur"), "Bulbasaur");
        assert_eq!(capitalize("mr-mime"), "Mr-mime");
        assert_eq!(capitalize(""), "");
    }
}
