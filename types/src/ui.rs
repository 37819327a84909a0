//! UI options shared between the engine and the rendering layer.

/// Accessibility and rendering knobs, sourced from config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    /// Use ASCII-only glyphs for icons and spinners.
    pub ascii_only: bool,
    /// Use a high-contrast color palette.
    pub high_contrast: bool,
    /// Render a static glyph instead of an animated spinner.
    pub reduced_motion: bool,
}
