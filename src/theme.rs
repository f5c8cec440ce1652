//! Explicit theme mode and color palettes.
//!
//! Every themed component receives a [`ThemeMode`] through the action channel
//! instead of inferring dark/light from whatever happens to be behind it.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Parse the persisted `theme` setting. Anything unrecognized means dark.
    pub fn from_setting(value: &str) -> Self {
        if value == "light" {
            Self::Light
        } else {
            Self::Dark
        }
    }

    pub fn as_setting(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// Colors used by the clock face and the other widgets for a given mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub face: Color,
    pub hand: Color,
    pub second_hand: Color,
    pub text: Color,
    pub muted: Color,
    pub highlight: Color,
}

pub fn palette(mode: ThemeMode) -> Palette {
    match mode {
        ThemeMode::Dark => Palette {
            face: Color::White,
            hand: Color::White,
            second_hand: Color::Rgb(255, 100, 100),
            text: Color::White,
            muted: Color::Gray,
            highlight: Color::Yellow,
        },
        ThemeMode::Light => Palette {
            face: Color::Black,
            hand: Color::Black,
            second_hand: Color::Rgb(200, 50, 50),
            text: Color::Black,
            muted: Color::DarkGray,
            highlight: Color::Blue,
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_toggled_roundtrip() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }

    #[test]
    fn test_from_setting_defaults_to_dark() {
        assert_eq!(ThemeMode::from_setting("light"), ThemeMode::Light);
        assert_eq!(ThemeMode::from_setting("dark"), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_setting("solarized"), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_setting(""), ThemeMode::Dark);
    }

    #[test]
    fn test_palettes_differ_per_mode() {
        assert_ne!(
            palette(ThemeMode::Dark).second_hand,
            palette(ThemeMode::Light).second_hand
        );
    }
}
