//! Light and dark palettes
//!
//! Color palette and style helpers for the TUI. The active palette follows
//! the persisted theme preference; nothing else depends on it.

use ratatui::style::{Color, Modifier, Style};

use crate::prefs::ThemeMode;

/// Color palette for one theme mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Page background
    pub background: Color,
    /// Card and modal surface
    pub surface: Color,
    /// Body text
    pub text: Color,
    /// Muted metadata (dates, hints)
    pub dim: Color,
    /// Titles, focused borders
    pub primary: Color,
    /// Video marker
    pub secondary: Color,
    /// Selection marker, keybinds
    pub accent: Color,
    /// Error placeholder
    pub error: Color,
    /// Unfocused borders
    pub border: Color,
}

impl Theme {
    // ═══════════════════════════════════════════════════════════════════════
    // PALETTES
    // ═══════════════════════════════════════════════════════════════════════

    /// Night sky: deep navy with starlight text
    pub const DARK: Theme = Theme {
        background: Color::Rgb(0x0b, 0x0d, 0x1a),
        surface: Color::Rgb(0x16, 0x1a, 0x2e),
        text: Color::Rgb(0xe6, 0xe8, 0xf0),
        dim: Color::Rgb(0x8a, 0x90, 0xa8),
        primary: Color::Rgb(0x7f, 0xb2, 0xff),
        secondary: Color::Rgb(0xd0, 0x8c, 0xff),
        accent: Color::Rgb(0xff, 0xd1, 0x66),
        error: Color::Rgb(0xff, 0x6b, 0x6b),
        border: Color::Rgb(0x3a, 0x42, 0x66),
    };

    /// Daylight: paper white with ink text
    pub const LIGHT: Theme = Theme {
        background: Color::Rgb(0xf7, 0xf8, 0xfc),
        surface: Color::Rgb(0xff, 0xff, 0xff),
        text: Color::Rgb(0x1c, 0x1f, 0x2b),
        dim: Color::Rgb(0x5c, 0x62, 0x78),
        primary: Color::Rgb(0x1d, 0x4e, 0xd8),
        secondary: Color::Rgb(0x7e, 0x22, 0xce),
        accent: Color::Rgb(0xb4, 0x53, 0x09),
        error: Color::Rgb(0xb9, 0x1c, 0x1c),
        border: Color::Rgb(0xa0, 0xa6, 0xbd),
    };

    /// Palette for a theme mode
    pub fn for_mode(mode: ThemeMode) -> Theme {
        match mode {
            ThemeMode::Dark => Self::DARK,
            ThemeMode::Light => Self::LIGHT,
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // STYLE HELPERS
    // ═══════════════════════════════════════════════════════════════════════

    /// Page style
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    /// Card/modal surface style
    pub fn surface(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn dimmed(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn secondary(&self) -> Style {
        Style::default().fg(self.secondary)
    }

    pub fn accent(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.error)
            .add_modifier(Modifier::BOLD)
    }

    pub fn loading(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Normal/unfocused border
    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Border of the selected card
    pub fn border_focused(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Header buttons
    pub fn button(&self) -> Style {
        Style::default()
            .fg(self.surface)
            .bg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Keybinding hint style
    pub fn keybind(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Status bar style
    pub fn status_bar(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// COLOR UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Calculate relative luminance for a color (used in contrast ratio)
/// Formula: https://www.w3.org/TR/WCAG20/#relativeluminancedef
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    fn channel_luminance(c: u8) -> f64 {
        let c = c as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * channel_luminance(r) + 0.7152 * channel_luminance(g) + 0.0722 * channel_luminance(b)
}

/// Calculate contrast ratio between two colors
/// Returns a value between 1 (same color) and 21 (black/white)
pub fn contrast_ratio(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> f64 {
    let l1 = relative_luminance(fg.0, fg.1, fg.2);
    let l2 = relative_luminance(bg.0, bg.1, bg.2);

    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };

    (lighter + 0.05) / (darker + 0.05)
}

/// WCAG AA for normal text (4.5:1)
pub fn meets_wcag_aa(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> bool {
    contrast_ratio(fg, bg) >= 4.5
}

/// WCAG AA for large text (3:1)
pub fn meets_wcag_aa_large(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> bool {
    contrast_ratio(fg, bg) >= 3.0
}

/// Extract RGB tuple from ratatui Color (only works for Rgb variant)
pub fn color_to_rgb(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Rgb(r, g, b) => Some((r, g, b)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(color: Color) -> (u8, u8, u8) {
        color_to_rgb(color).expect("Theme colors should all be RGB")
    }

    fn palettes() -> [(&'static str, Theme); 2] {
        [("dark", Theme::DARK), ("light", Theme::LIGHT)]
    }

    #[test]
    fn test_for_mode() {
        assert_eq!(Theme::for_mode(ThemeMode::Dark), Theme::DARK);
        assert_eq!(Theme::for_mode(ThemeMode::Light), Theme::LIGHT);
        assert_ne!(Theme::DARK.background, Theme::LIGHT.background);
    }

    #[test]
    fn test_text_contrast() {
        for (name, theme) in palettes() {
            let ratio = contrast_ratio(rgb(theme.text), rgb(theme.background));
            assert!(
                meets_wcag_aa(rgb(theme.text), rgb(theme.background)),
                "{} text contrast {:.2}:1 below AA",
                name,
                ratio
            );
            assert!(meets_wcag_aa(rgb(theme.text), rgb(theme.surface)));
        }
    }

    #[test]
    fn test_accent_colors_readable() {
        for (name, theme) in palettes() {
            let bg = rgb(theme.background);
            for (label, color) in [
                ("primary", theme.primary),
                ("secondary", theme.secondary),
                ("accent", theme.accent),
                ("error", theme.error),
                ("dim", theme.dim),
            ] {
                assert!(
                    meets_wcag_aa_large(rgb(color), bg),
                    "{} {} contrast {:.2}:1 below 3:1",
                    name,
                    label,
                    contrast_ratio(rgb(color), bg)
                );
            }
        }
    }

    #[test]
    fn test_button_readable() {
        for (_, theme) in palettes() {
            assert!(meets_wcag_aa_large(rgb(theme.surface), rgb(theme.primary)));
        }
    }

    #[test]
    fn test_contrast_ratio_black_white() {
        let ratio = contrast_ratio((0, 0, 0), (255, 255, 255));
        assert!((ratio - 21.0).abs() < 0.1);
    }

    #[test]
    fn test_contrast_ratio_same_color() {
        let ratio = contrast_ratio((100, 100, 100), (100, 100, 100));
        assert!((ratio - 1.0).abs() < 0.001);
    }
}
