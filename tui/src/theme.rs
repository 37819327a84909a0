//! Color theme and glyphs for the Lookout TUI.
//!
//! Uses a Kanagawa-inspired palette by default with an optional
//! high-contrast override.

use ratatui::style::Color;

use lookout_types::ui::UiOptions;

mod colors {
    use super::Color;

    pub const BG_PANEL: Color = Color::Rgb(31, 31, 40);
    pub const BG_BORDER: Color = Color::Rgb(84, 84, 109);

    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186);
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105);

    pub const PRIMARY: Color = Color::Rgb(149, 127, 184);
    pub const ACCENT: Color = Color::Rgb(127, 180, 202);
    pub const SUCCESS: Color = Color::Rgb(152, 187, 108);
    pub const WARNING: Color = Color::Rgb(230, 195, 132);
    pub const ERROR: Color = Color::Rgb(255, 93, 98);
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_panel: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_panel: colors::BG_PANEL,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_muted: colors::TEXT_MUTED,
            primary: colors::PRIMARY,
            accent: colors::ACCENT,
            success: colors::SUCCESS,
            warning: colors::WARNING,
            error: colors::ERROR,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_panel: Color::Black,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_muted: Color::DarkGray,
            primary: Color::White,
            accent: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for icons and spinners.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub failed: &'static str,
    pub bullet: &'static str,
    pub spinner_frames: &'static [&'static str],
}

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_FRAMES_ASCII: &[&str] = &["|", "/", "-", "\\"];

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            failed: "X",
            bullet: "*",
            spinner_frames: SPINNER_FRAMES_ASCII,
        }
    } else {
        Glyphs {
            failed: "✗",
            bullet: "•",
            spinner_frames: SPINNER_FRAMES,
        }
    }
}

/// When `reduced_motion` is enabled, returns a static glyph instead of
/// cycling.
#[must_use]
pub fn spinner_frame(tick: usize, options: UiOptions) -> &'static str {
    let frames = glyphs(options).spinner_frames;
    if options.reduced_motion {
        frames[0]
    } else {
        frames[tick % frames.len()]
    }
}
