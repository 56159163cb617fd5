//! Light and dark color palettes.
//!
//! The renderer picks one per frame from the current theme preference, so a
//! toggle takes effect on the next draw.

use ratatui::style::Color;

use folio_app::ThemePreference;

/// One complete set of colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers ---
    /// Page background
    pub background: Color,
    /// Cards, header and status bar
    pub surface: Color,
    /// Modal background
    pub popup: Color,

    // --- Borders ---
    pub border_dim: Color,
    pub border_active: Color,

    // --- Accent ---
    pub accent: Color,
    /// Second accent for gradients and highlights
    pub accent_alt: Color,
    /// Text drawn on top of the accent color
    pub contrast_fg: Color,

    // --- Text ---
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // --- Status ---
    pub success: Color,
    pub error: Color,
    pub warning: Color,
}

pub const DARK: Palette = Palette {
    background: Color::Rgb(17, 24, 39),
    surface: Color::Rgb(31, 41, 55),
    popup: Color::Rgb(38, 50, 68),
    border_dim: Color::Rgb(75, 85, 99),
    border_active: Color::Rgb(96, 165, 250),
    accent: Color::Rgb(96, 165, 250),
    accent_alt: Color::Rgb(167, 139, 250),
    contrast_fg: Color::Rgb(17, 24, 39),
    text_primary: Color::Rgb(243, 244, 246),
    text_secondary: Color::Rgb(209, 213, 219),
    text_muted: Color::Rgb(156, 163, 175),
    success: Color::Rgb(52, 211, 153),
    error: Color::Rgb(248, 113, 113),
    warning: Color::Rgb(251, 191, 36),
};

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(255, 255, 255),
    surface: Color::Rgb(243, 244, 246),
    popup: Color::Rgb(249, 250, 251),
    border_dim: Color::Rgb(209, 213, 219),
    border_active: Color::Rgb(37, 99, 235),
    accent: Color::Rgb(37, 99, 235),
    accent_alt: Color::Rgb(124, 58, 237),
    contrast_fg: Color::Rgb(255, 255, 255),
    text_primary: Color::Rgb(17, 24, 39),
    text_secondary: Color::Rgb(75, 85, 99),
    text_muted: Color::Rgb(107, 114, 128),
    success: Color::Rgb(5, 150, 105),
    error: Color::Rgb(220, 38, 38),
    warning: Color::Rgb(217, 119, 6),
};

impl Palette {
    /// Palette for the given preference
    pub fn for_theme(theme: ThemePreference) -> &'static Palette {
        if theme.dark {
            &DARK
        } else {
            &LIGHT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_theme_picks_palette() {
        assert_eq!(Palette::for_theme(ThemePreference::new(true)), &DARK);
        assert_eq!(Palette::for_theme(ThemePreference::new(false)), &LIGHT);
    }

    #[test]
    fn test_palettes_differ_in_background() {
        assert_ne!(DARK.background, LIGHT.background);
        assert_ne!(DARK.text_primary, LIGHT.text_primary);
    }

    #[test]
    fn test_text_contrasts_with_background() {
        for palette in [DARK, LIGHT] {
            assert_ne!(palette.text_primary, palette.background);
            assert_ne!(palette.contrast_fg, palette.accent);
        }
    }
}
