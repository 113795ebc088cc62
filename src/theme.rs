use std::fmt;
use std::str::FromStr;

use eframe::egui::{self, Color32};

use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

/// Colours the background layer is painted with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Color32,
    pub particle: Color32,
    /// Connection lines get their alpha per line, so only the RGB part is fixed.
    pub line_rgb: [u8; 3],
    pub grid: Color32,
    pub accent: Color32,
}

impl Palette {
    pub fn line(&self, alpha: f32) -> Color32 {
        let [r, g, b] = self.line_rgb;
        Color32::from_rgba_unmultiplied(r, g, b, alpha_to_u8(alpha))
    }
}

pub fn alpha_to_u8(alpha: f32) -> u8 {
    (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
}

const DARK: Palette = Palette {
    background: Color32::from_rgb(13, 17, 23),
    particle: Color32::from_rgba_premultiplied(69, 71, 73, 77),
    line_rgb: [47, 129, 247],
    grid: Color32::from_rgba_premultiplied(8, 8, 8, 8),
    accent: Color32::from_rgb(47, 129, 247),
};

const LIGHT: Palette = Palette {
    background: Color32::from_rgb(255, 255, 255),
    particle: Color32::from_rgba_premultiplied(4, 5, 7, 77),
    line_rgb: [31, 111, 235],
    grid: Color32::from_rgba_premultiplied(0, 0, 0, 8),
    accent: Color32::from_rgb(31, 111, 235),
};

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }

    pub fn visuals(self) -> egui::Visuals {
        let mut visuals = match self {
            Theme::Light => egui::Visuals::light(),
            Theme::Dark => egui::Visuals::dark(),
        };
        visuals.hyperlink_color = self.palette().accent;
        visuals.selection.bg_fill = self.palette().accent;
        visuals
    }

    /// Glyph for the toggle button: a sun while dark, a moon while light.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown theme `{0}`")]
pub struct ParseThemeError(pub String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(ParseThemeError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_between_two_values() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn palettes_differ() {
        let dark = Theme::Dark.palette();
        let light = Theme::Light.palette();
        assert_ne!(dark.particle, light.particle);
        assert_ne!(dark.line_rgb, light.line_rgb);
        assert_eq!(dark.line_rgb, [47, 129, 247]);
        assert_eq!(light.line_rgb, [31, 111, 235]);
    }

    #[test]
    fn particle_fill_is_thirty_percent() {
        assert_eq!(Theme::Dark.palette().particle.a(), 77);
        assert_eq!(Theme::Light.palette().particle.a(), 77);
    }

    #[test]
    fn line_alpha_is_clamped() {
        let palette = Theme::Dark.palette();
        assert_eq!(palette.line(1.0).a(), 255);
        assert_eq!(palette.line(0.0).a(), 0);
        assert_eq!(palette.line(2.0).a(), 255);
        assert_eq!(palette.line(-1.0).a(), 0);
    }

    #[test]
    fn parses_names() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(" Light ".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!("sepia".parse::<Theme>(), Err(ParseThemeError("sepia".to_string())));
        assert_eq!(Theme::default(), Theme::Dark);
    }
}
