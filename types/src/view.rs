//! Structured view models, one per operation.
//!
//! These are plain records of display-ready fields. The providers fill them
//! in from API responses; the TUI decides how they look on screen. No markup
//! lives here.

/// The result of one successful operation, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelView {
    Dog(DogView),
    Cat(CatView),
    Joke(JokeView),
    Pokemon(PokemonView),
    Weather(WeatherView),
    AirQuality(AirQualityView),
    SunTimes(SunTimesView),
    Rates(RatesView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DogView {
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatView {
    pub image_url: String,
}

/// A joke is either a one-liner or a setup with a punchline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JokeView {
    Single { joke: String },
    TwoPart { setup: String, delivery: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonView {
    /// Pokédex number the random draw selected.
    pub id: u32,
    /// Display name, first letter capitalized.
    pub name: String,
    /// Comma-joined type names, e.g. `grass, poison`.
    pub types: String,
    /// Front sprite URL when the API provides one.
    pub sprite_url: Option<String>,
    pub height: i64,
    pub weight: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherView {
    pub city: String,
    pub temperature_c: f64,
    pub apparent_c: f64,
    pub wind_kmh: f64,
    /// Observation time as reported by the API.
    pub observed_at: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AirQualityView {
    pub city: String,
    pub us_aqi: f64,
    pub pm2_5: f64,
    pub pm10: f64,
    pub nitrogen_dioxide: f64,
    pub ozone: f64,
    pub observed_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SunTimesView {
    pub city: String,
    /// Local wall-clock time, `HH:MM:SS`.
    pub sunrise: String,
    pub sunset: String,
    pub solar_noon: String,
    /// Day length exactly as the API reports it.
    pub day_length: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatesView {
    /// Base currency code, `CAD`.
    pub base: &'static str,
    /// CAD -> EUR, formatted to 3 decimal places.
    pub eur: String,
    /// CAD -> USD, formatted to 3 decimal places.
    pub usd: String,
    /// Last-update timestamp as reported by the API.
    pub updated: String,
}
