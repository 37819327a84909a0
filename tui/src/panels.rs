//! Panel content rendering: panel state -> styled lines.
//!
//! Formatting of display values happened in the providers; this module only
//! arranges those values into lines and applies styles.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use lookout_engine::Panel;
use lookout_types::ui::UiOptions;
use lookout_types::{
    AirQualityView, CatView, DogView, JokeView, PanelState, PanelView, PokemonView, RatesView,
    SunTimesView, WeatherView,
};

use crate::theme::{Palette, glyphs, spinner_frame};

/// Produce the full content of one panel. Every call fully replaces the
/// previous content.
#[must_use]
pub fn panel_lines(
    panel: &Panel,
    tick: usize,
    options: UiOptions,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let descriptor = panel.descriptor();
    match panel.state() {
        PanelState::Idle => vec![muted(descriptor.placeholder.to_string(), palette)],
        PanelState::Loading => {
            let spinner = spinner_frame(tick, options);
            vec![Line::from(vec![
                Span::styled(format!("{spinner} "), Style::default().fg(palette.accent)),
                Span::styled(
                    descriptor.loading.to_string(),
                    Style::default().fg(palette.text_primary),
                ),
            ])]
        }
        PanelState::Failed(message) => {
            let glyph = glyphs(options).failed;
            vec![Line::from(vec![
                Span::styled(format!("{glyph} "), Style::default().fg(palette.error)),
                Span::styled(message.clone(), Style::default().fg(palette.error)),
            ])]
        }
        PanelState::Ready(view) => {
            let mut lines = view_lines(view, palette);
            lines.push(Line::default());
            lines.push(muted(format!("Source: {}", descriptor.source), palette));
            lines
        }
    }
}

fn view_lines(view: &PanelView, palette: &Palette) -> Vec<Line<'static>> {
    match view {
        PanelView::Dog(DogView { image_url }) | PanelView::Cat(CatView { image_url }) => {
            vec![labeled("Image", image_url.clone(), palette)]
        }
        PanelView::Joke(joke) => joke_lines(joke, palette),
        PanelView::Pokemon(pokemon) => pokemon_lines(pokemon, palette),
        PanelView::Weather(weather) => weather_lines(weather, palette),
        PanelView::AirQuality(air) => air_quality_lines(air, palette),
        PanelView::SunTimes(sun) => sun_times_lines(sun, palette),
        PanelView::Rates(rates) => rates_lines(rates, palette),
    }
}

fn joke_lines(joke: &JokeView, palette: &Palette) -> Vec<Line<'static>> {
    match joke {
        JokeView::Single { joke } => vec![plain(joke.clone(), palette)],
        JokeView::TwoPart { setup, delivery } => vec![
            plain(setup.clone(), palette),
            Line::default(),
            Line::from(Span::styled(
                delivery.clone(),
                Style::default()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            )),
        ],
    }
}

fn pokemon_lines(pokemon: &PokemonView, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                pokemon.name.clone(),
                Style::default()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" (#{})", pokemon.id),
                Style::default().fg(palette.text_muted),
            ),
        ]),
        muted(format!("Type: {}", pokemon.types), palette),
        muted(
            format!("Height: {} | Weight: {}", pokemon.height, pokemon.weight),
            palette,
        ),
    ];
    if let Some(sprite) = &pokemon.sprite_url {
        lines.push(labeled("Sprite", sprite.clone(), palette));
    }
    lines
}

fn weather_lines(weather: &WeatherView, palette: &Palette) -> Vec<Line<'static>> {
    vec![
        badge("City", weather.city.clone(), palette),
        Line::from(vec![
            Span::styled(
                format!("{}°C", weather.temperature_c),
                Style::default()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" (Feels like {}°C)", weather.apparent_c),
                Style::default().fg(palette.text_muted),
            ),
        ]),
        labeled("Wind", format!("{} km/h", weather.wind_kmh), palette),
        muted(format!("Updated: {}", weather.observed_at), palette),
    ]
}

fn air_quality_lines(air: &AirQualityView, palette: &Palette) -> Vec<Line<'static>> {
    vec![
        badge("City", air.city.clone(), palette),
        labeled("US AQI", format!("{}", air.us_aqi), palette),
        labeled("PM2.5", format!("{} µg/m³", air.pm2_5), palette),
        labeled("PM10", format!("{} µg/m³", air.pm10), palette),
        labeled("NO₂", format!("{} µg/m³", air.nitrogen_dioxide), palette),
        labeled("O₃", format!("{} µg/m³", air.ozone), palette),
        muted(format!("Updated: {}", air.observed_at), palette),
    ]
}

fn sun_times_lines(sun: &SunTimesView, palette: &Palette) -> Vec<Line<'static>> {
    vec![
        badge("City", sun.city.clone(), palette),
        labeled("Sunrise", sun.sunrise.clone(), palette),
        labeled("Sunset", sun.sunset.clone(), palette),
        labeled("Solar Noon", sun.solar_noon.clone(), palette),
        labeled("Day Length", sun.day_length.clone(), palette),
    ]
}

fn rates_lines(rates: &RatesView, palette: &Palette) -> Vec<Line<'static>> {
    vec![
        badge("Base", rates.base.to_string(), palette),
        labeled(
            &format!("{} -> EUR", rates.base),
            rates.eur.clone(),
            palette,
        ),
        labeled(
            &format!("{} -> USD", rates.base),
            rates.usd.clone(),
            palette,
        ),
        muted(format!("Last Updated: {}", rates.updated), palette),
    ]
}

fn plain(text: String, palette: &Palette) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default().fg(palette.text_primary),
    ))
}

fn muted(text: String, palette: &Palette) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(palette.text_muted)))
}

fn labeled(label: &str, value: String, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(palette.text_muted)),
        Span::styled(
            value,
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

fn badge(label: &str, value: String, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {label} "),
            Style::default().fg(palette.bg_panel).bg(palette.primary),
        ),
        Span::styled(
            format!(" {value}"),
            Style::default().fg(palette.text_primary),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::{joke_lines, rates_lines, view_lines};
    use crate::theme::Palette;
    use lookout_types::{DogView, JokeView, PanelView, RatesView};

    fn text_of(lines: &[ratatui::text::Line<'_>]) -> String {
        lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn single_joke_renders_only_the_joke() {
        let palette = Palette::standard();
        let lines = joke_lines(
            &JokeView::Single {
                joke: "X".to_string(),
            },
            &palette,
        );
        assert_eq!(text_of(&lines), "X");
    }

    #[test]
    fn twopart_joke_renders_setup_then_delivery() {
        let palette = Palette::standard();
        let lines = joke_lines(
            &JokeView::TwoPart {
                setup: "A".to_string(),
                delivery: "B".to_string(),
            },
            &palette,
        );
        let text = text_of(&lines);
        let setup_pos = text.find('A').unwrap();
        let delivery_pos = text.find('B').unwrap();
        assert!(setup_pos < delivery_pos, "setup must precede the punchline");
    }

    #[test]
    fn rates_lines_show_both_formatted_rates() {
        let palette = Palette::standard();
        let lines = rates_lines(
            &RatesView {
                base: "CAD",
                eur: "0.679".to_string(),
                usd: "0.731".to_string(),
                updated: "Fri, 28 Feb 2025 00:02:31 +0000".to_string(),
            },
            &palette,
        );
        let text = text_of(&lines);
        assert!(text.contains("CAD -> EUR: 0.679"));
        assert!(text.contains("CAD -> USD: 0.731"));
        assert!(text.contains("Last Updated: Fri, 28 Feb 2025 00:02:31 +0000"));
    }

    #[test]
    fn dog_view_renders_the_image_url() {
        let palette = Palette::standard();
        let lines = view_lines(
            &PanelView::Dog(DogView {
                image_url: "https://images.dog.ceo/breeds/hound/n102.jpg".to_string(),
            }),
            &palette,
        );
        assert!(text_of(&lines).contains("https://images.dog.ceo/breeds/hound/n102.jpg"));
    }
}
