// Theme system for the TUI
//
// Provides color themes that can be switched at runtime with 't'.
// Each theme defines colors for all UI elements, including the two
// page accents (the left page is warm, the right page green, matching
// the product's original palette).

use ratatui::style::Color;

use crate::pager::Page;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
    Monokai,
    Nord,
}

impl ThemeKind {
    /// Get all available themes
    pub fn all() -> &'static [ThemeKind] {
        &[
            ThemeKind::Dark,
            ThemeKind::Light,
            ThemeKind::Monokai,
            ThemeKind::Nord,
        ]
    }

    /// Resolve a theme name from config (unknown names fall back to dark)
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => ThemeKind::Light,
            "monokai" => ThemeKind::Monokai,
            "nord" => ThemeKind::Nord,
            _ => ThemeKind::Dark,
        }
    }

    /// Get the next theme in the cycle
    pub fn next(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + 1) % themes.len()]
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
            ThemeKind::Monokai => "Monokai",
            ThemeKind::Nord => "Nord",
        }
    }

    /// Get the theme configuration
    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
            ThemeKind::Monokai => Theme::monokai(),
            ThemeKind::Nord => Theme::nord(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub muted: Color,

    // Chrome
    pub title: Color,
    pub status_bar: Color,

    // Tabs
    pub tab_active: Color,
    pub tab_inactive: Color,

    // Page accents (underline + page surface)
    pub left_accent: Color,
    pub right_accent: Color,

    // Log levels
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
    pub log_trace: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Accent color for one of the two pages
    pub fn accent(&self, page: Page) -> Color {
        match page {
            Page::Left => self.left_accent,
            Page::Right => self.right_accent,
        }
    }

    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::White,
            border: Color::Gray,
            muted: Color::DarkGray,
            title: Color::Cyan,
            status_bar: Color::Gray,
            tab_active: Color::White,
            tab_inactive: Color::DarkGray,
            left_accent: Color::Rgb(255, 149, 0),
            right_accent: Color::Rgb(52, 199, 89),
            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Green,
            log_debug: Color::Blue,
            log_trace: Color::Magenta,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            background: Color::White,
            foreground: Color::Black,
            border: Color::DarkGray,
            muted: Color::Gray,
            title: Color::Blue,
            status_bar: Color::DarkGray,
            tab_active: Color::Black,
            tab_inactive: Color::Gray,
            left_accent: Color::Rgb(204, 102, 0),
            right_accent: Color::Rgb(0, 128, 64),
            log_error: Color::Red,
            log_warn: Color::Rgb(153, 102, 0),
            log_info: Color::Rgb(0, 102, 0),
            log_debug: Color::Blue,
            log_trace: Color::Magenta,
        }
    }

    /// Monokai theme
    pub fn monokai() -> Self {
        Self {
            background: Color::Rgb(39, 40, 34),
            foreground: Color::Rgb(248, 248, 242),
            border: Color::Rgb(117, 113, 94),
            muted: Color::Rgb(117, 113, 94),
            title: Color::Rgb(102, 217, 239),
            status_bar: Color::Rgb(117, 113, 94),
            tab_active: Color::Rgb(248, 248, 242),
            tab_inactive: Color::Rgb(117, 113, 94),
            left_accent: Color::Rgb(253, 151, 31),
            right_accent: Color::Rgb(166, 226, 46),
            log_error: Color::Rgb(249, 38, 114),
            log_warn: Color::Rgb(230, 219, 116),
            log_info: Color::Rgb(166, 226, 46),
            log_debug: Color::Rgb(102, 217, 239),
            log_trace: Color::Rgb(174, 129, 255),
        }
    }

    /// Nord theme
    pub fn nord() -> Self {
        Self {
            background: Color::Rgb(46, 52, 64),
            foreground: Color::Rgb(216, 222, 233),
            border: Color::Rgb(76, 86, 106),
            muted: Color::Rgb(76, 86, 106),
            title: Color::Rgb(136, 192, 208),
            status_bar: Color::Rgb(76, 86, 106),
            tab_active: Color::Rgb(236, 239, 244),
            tab_inactive: Color::Rgb(76, 86, 106),
            left_accent: Color::Rgb(208, 135, 112),
            right_accent: Color::Rgb(163, 190, 140),
            log_error: Color::Rgb(191, 97, 106),
            log_warn: Color::Rgb(235, 203, 139),
            log_info: Color::Rgb(163, 190, 140),
            log_debug: Color::Rgb(129, 161, 193),
            log_trace: Color::Rgb(180, 142, 173),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_resolves_known_themes() {
        assert_eq!(ThemeKind::from_name("nord"), ThemeKind::Nord);
        assert_eq!(ThemeKind::from_name("MONOKAI"), ThemeKind::Monokai);
        assert_eq!(ThemeKind::from_name("light"), ThemeKind::Light);
        assert_eq!(ThemeKind::from_name("unknown"), ThemeKind::Dark);
    }

    #[test]
    fn next_cycles_through_all_themes() {
        let mut kind = ThemeKind::Dark;
        for _ in 0..ThemeKind::all().len() {
            kind = kind.next();
        }
        assert_eq!(kind, ThemeKind::Dark);
    }
}
