// Light and dark colour palettes

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Colours used by every screen
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub highlight: Color,
    pub success: Color,
    pub danger: Color,
    pub warning: Color,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Light => Palette {
                background: Color::Rgb(245, 242, 232),
                surface: Color::Rgb(225, 220, 205),
                text: Color::Rgb(30, 30, 30),
                muted: Color::Rgb(110, 110, 110),
                accent: Color::Rgb(20, 100, 60),
                highlight: Color::Rgb(170, 90, 0),
                success: Color::Rgb(20, 130, 40),
                danger: Color::Rgb(180, 30, 30),
                warning: Color::Rgb(160, 120, 0),
            },
            Theme::Dark => Palette {
                background: Color::Rgb(0, 0, 0),
                surface: Color::Rgb(20, 20, 20),
                text: Color::White,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                highlight: Color::Yellow,
                success: Color::LightGreen,
                danger: Color::LightRed,
                warning: Color::Yellow,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn test_serialized_names() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let theme: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(theme, Theme::Light);
    }
}
