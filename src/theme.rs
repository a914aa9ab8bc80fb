// Color theme for the page chrome, cards, skeletons, and the player frame.

use ratatui::style::Color;

pub const THEME_DARK: &str = "dark";
pub const THEME_LIGHT: &str = "light";

/// Named color slots used across the UI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Brand mark in the header.
    pub brand: Color,
    /// Avatar circle behind the author initial.
    pub avatar: Color,
    /// Normal text color.
    pub text: Color,
    /// Secondary text (byline, footer, placeholders).
    pub text_dim: Color,
    /// Focused search form and links.
    pub accent: Color,
    /// Border of the highlighted card.
    pub highlight: Color,
    /// Border and divider color.
    pub border: Color,
    /// Thumbnail slot fill.
    pub thumbnail_bg: Color,
    /// Skeleton placeholder fill, alternated with `thumbnail_bg` to pulse.
    pub skeleton: Color,
    /// Player frame background.
    pub frame_bg: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            brand: Color::Red,
            avatar: Color::Rgb(234, 88, 12),
            text: Color::White,
            text_dim: Color::DarkGray,
            accent: Color::Blue,
            highlight: Color::Red,
            border: Color::DarkGray,
            thumbnail_bg: Color::Rgb(30, 30, 36),
            skeleton: Color::Rgb(48, 48, 56),
            frame_bg: Color::Black,
        }
    }

    pub fn light() -> Self {
        Self {
            brand: Color::Rgb(220, 38, 38),
            avatar: Color::Rgb(249, 115, 22),
            text: Color::Rgb(17, 24, 39),
            text_dim: Color::Rgb(107, 114, 128),
            accent: Color::Rgb(37, 99, 235),
            highlight: Color::Rgb(220, 38, 38),
            border: Color::Rgb(209, 213, 219),
            thumbnail_bg: Color::Rgb(243, 244, 246),
            skeleton: Color::Rgb(229, 231, 235),
            frame_bg: Color::Black,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            THEME_LIGHT => Self::light(),
            _ => Self::dark(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
