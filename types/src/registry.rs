//! The static operation registry.
//!
//! One descriptor per supported API, constructed once and immutable
//! thereafter. Dispatch is by [`OperationKind`] enum match everywhere;
//! no string-keyed lookup exists.

use serde::{Deserialize, Serialize};

/// Identifier of one dashboard operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    Dog,
    Cat,
    Joke,
    Pokemon,
    Weather,
    AirQuality,
    SunTimes,
    Rates,
}

impl OperationKind {
    pub const ALL: [Self; 8] = [
        Self::Dog,
        Self::Cat,
        Self::Joke,
        Self::Pokemon,
        Self::Weather,
        Self::AirQuality,
        Self::SunTimes,
        Self::Rates,
    ];

    /// Stable name used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dog => "dog",
            Self::Cat => "cat",
            Self::Joke => "joke",
            Self::Pokemon => "pokemon",
            Self::Weather => "weather",
            Self::AirQuality => "air_quality",
            Self::SunTimes => "sun_times",
            Self::Rates => "rates",
        }
    }
}

/// Static description of one operation: its trigger, its panel, and the
/// messages shown around the fetch.
#[derive(Debug, Clone, Copy)]
pub struct OperationDescriptor {
    pub kind: OperationKind,
    /// Key that triggers the operation.
    pub hotkey: char,
    /// Panel title.
    pub title: &'static str,
    /// Muted message shown before the first trigger.
    pub placeholder: &'static str,
    /// Message shown next to the spinner while the fetch is in flight.
    pub loading: &'static str,
    /// Prefix of the error message; the underlying failure text is appended.
    pub failure: &'static str,
    /// Attribution line rendered under each successful result.
    pub source: &'static str,
}

pub const OPERATIONS: [OperationDescriptor; 8] = [
    OperationDescriptor {
        kind: OperationKind::Dog,
        hotkey: 'd',
        title: "Dog",
        placeholder: "Press d to load a random dog image.",
        loading: "Fetching a random dog...",
        failure: "Could not load dog image.",
        source: "Dog CEO API (https://dog.ceo/dog-api/)",
    },
    OperationDescriptor {
        kind: OperationKind::Cat,
        hotkey: 'c',
        title: "Cat",
        placeholder: "Press c to load a random cat image.",
        loading: "Fetching a random cat...",
        failure: "Could not load cat image.",
        source: "TheCatAPI (https://thecatapi.com/)",
    },
    OperationDescriptor {
        kind: OperationKind::Joke,
        hotkey: 'j',
        title: "Joke",
        placeholder: "Press j for a random joke.",
        loading: "Fetching a joke...",
        failure: "Could not load a joke.",
        source: "JokeAPI (https://jokeapi.dev/)",
    },
    OperationDescriptor {
        kind: OperationKind::Pokemon,
        hotkey: 'p',
        title: "Pokémon",
        placeholder: "Press p for a random Pokémon.",
        loading: "Fetching a random Pokémon...",
        failure: "Could not load Pokémon.",
        source: "PokéAPI (https://pokeapi.co/)",
    },
    OperationDescriptor {
        kind: OperationKind::Weather,
        hotkey: 'w',
        title: "Weather",
        placeholder: "Press w to load current weather.",
        loading: "Fetching weather...",
        failure: "Could not load current weather.",
        source: "Open-Meteo (https://open-meteo.com/en/docs)",
    },
    OperationDescriptor {
        kind: OperationKind::AirQuality,
        hotkey: 'a',
        title: "Air Quality",
        placeholder: "Press a to load current air quality.",
        loading: "Fetching air quality...",
        failure: "Could not load air quality.",
        source: "Open-Meteo Air Quality (https://open-meteo.com/en/docs/air-quality-api)",
    },
    OperationDescriptor {
        kind: OperationKind::SunTimes,
        hotkey: 's',
        title: "Sun Times",
        placeholder: "Press s to load sunrise and sunset data.",
        loading: "Fetching sun times...",
        failure: "Could not load sun data.",
        source: "Sunrise-Sunset API (https://sunrise-sunset.org/api)",
    },
    OperationDescriptor {
        kind: OperationKind::Rates,
        hotkey: 'r',
        title: "Exchange Rates",
        placeholder: "Press r to load CAD exchange rates.",
        loading: "Fetching exchange rates (CAD)...",
        failure: "Could not load currency rates.",
        source: "open.er-api.com (https://www.exchangerate-api.com/docs/free)",
    },
];

/// Look up the descriptor for an operation.
#[must_use]
pub fn descriptor(kind: OperationKind) -> &'static OperationDescriptor {
    // OPERATIONS covers every variant; the expect is unreachable.
    OPERATIONS
        .iter()
        .find(|op| op.kind == kind)
        .expect("every OperationKind has a descriptor")
}

#[cfg(test)]
mod tests {
    use super::{OPERATIONS, OperationKind, descriptor};
    use std::collections::HashSet;

    #[test]
    fn registry_covers_every_operation_once() {
        let kinds: HashSet<_> = OPERATIONS.iter().map(|op| op.kind).collect();
        assert_eq!(kinds.len(), OperationKind::ALL.len());
    }

    #[test]
    fn hotkeys_are_unique() {
        let keys: HashSet<_> = OPERATIONS.iter().map(|op| op.hotkey).collect();
        assert_eq!(keys.len(), OPERATIONS.len());
    }

    #[test]
    fn descriptor_lookup_round_trips() {
        for kind in OperationKind::ALL {
            assert_eq!(descriptor(kind).kind, kind);
        }
    }

    #[test]
    fn descriptors_have_nonempty_messages() {
        for op in &OPERATIONS {
            assert!(!op.placeholder.is_empty());
            assert!(!op.loading.is_empty());
            assert!(!op.failure.is_empty());
            assert!(!op.source.is_empty());
        }
    }
}
