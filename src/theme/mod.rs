// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Themes: named, fully populated bundles of design tokens.
//!
//! Two built-in variants exist, [`ThemeVariant::Vibrant`] and
//! [`ThemeVariant::Neutral`]. A [`Theme`] can also be loaded from JSON, in
//! which case every token must be present and [`Theme::validate`] must pass.
//! The active theme is handed to consumers through a [`ThemeContext`].

pub mod context;
pub mod tokens;

use std::fmt;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub use context::{ThemeContext, ThemeSubscription};
pub use tokens::*;

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("invalid token `{token}`: {reason}")]
    InvalidToken { token: String, reason: String },
    #[error("theme parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("theme file error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeVariant {
    #[default]
    Vibrant,
    Neutral,
}

impl ThemeVariant {
    pub const ALL: &'static [ThemeVariant] = &[ThemeVariant::Vibrant, ThemeVariant::Neutral];

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vibrant" => Some(ThemeVariant::Vibrant),
            "neutral" => Some(ThemeVariant::Neutral),
            _ => None,
        }
    }

    pub fn theme(self) -> Theme {
        match self {
            ThemeVariant::Vibrant => VIBRANT.clone(),
            ThemeVariant::Neutral => NEUTRAL.clone(),
        }
    }
}

impl fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ThemeVariant::Vibrant => "vibrant",
            ThemeVariant::Neutral => "neutral",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Theme {
    pub name: String,
    pub colors: ColorTokens,
    pub spacing: SpacingTokens,
    pub radius: RadiusTokens,
    pub typography: TypographyTokens,
    pub shadows: ShadowTokens,
}

impl Default for Theme {
    fn default() -> Self {
        ThemeVariant::default().theme()
    }
}

impl Theme {
    pub fn vibrant() -> Self {
        ThemeVariant::Vibrant.theme()
    }

    pub fn neutral() -> Self {
        ThemeVariant::Neutral.theme()
    }

    /// Parses and validates a theme. Missing or unknown fields are rejected.
    pub fn from_json_str(s: &str) -> Result<Self, ThemeError> {
        let theme: Theme = serde_json::from_str(s)?;
        theme.validate()?;
        Ok(theme)
    }

    pub fn from_file(path: &Path) -> Result<Self, ThemeError> {
        let data = fs::read_to_string(path)?;
        let theme = Self::from_json_str(&data)?;
        tracing::debug!(name = %theme.name, path = %path.display(), "loaded theme file");
        Ok(theme)
    }

    pub fn validate(&self) -> Result<(), ThemeError> {
        if self.name.trim().is_empty() {
            return Err(invalid("name", "must not be empty"));
        }
        if self.colors.chart.is_empty() {
            return Err(invalid("colors.chart", "needs at least one series color"));
        }

        let mut previous = 0.0_f32;
        for (key, value) in self.spacing.scale() {
            check_length(&format!("spacing.{key}"), value)?;
            if value < previous {
                return Err(invalid(
                    &format!("spacing.{key}"),
                    "spacing scale must not decrease",
                ));
            }
            previous = value;
        }
        for (key, value) in self.radius.scale() {
            check_length(&format!("radius.{key}"), value)?;
        }
        for (key, font) in self.typography.styles() {
            if !font.size.is_finite() || font.size <= 0.0 {
                return Err(invalid(
                    &format!("typography.{key}.size"),
                    "must be a positive number",
                ));
            }
        }
        for (key, shadow) in self.shadows.levels() {
            check_length(&format!("shadows.{key}.radius"), shadow.radius)?;
            if !shadow.x.is_finite() || !shadow.y.is_finite() {
                return Err(invalid(&format!("shadows.{key}"), "offset must be finite"));
            }
            if !(0.0..=1.0).contains(&shadow.opacity) {
                return Err(invalid(
                    &format!("shadows.{key}.opacity"),
                    "must be within 0..=1",
                ));
            }
        }
        Ok(())
    }

    /// Chart color for the `index`-th series, cycling through the palette.
    /// An empty palette falls back to `colors.primary`.
    pub fn chart_color(&self, index: usize) -> Color {
        let palette = &self.colors.chart;
        if palette.is_empty() {
            return self.colors.primary;
        }
        palette[index % palette.len()]
    }
}

fn invalid(token: &str, reason: &str) -> ThemeError {
    ThemeError::InvalidToken {
        token: token.to_string(),
        reason: reason.to_string(),
    }
}

fn check_length(token: &str, value: f32) -> Result<(), ThemeError> {
    if !value.is_finite() || value < 0.0 {
        return Err(invalid(token, "must be a non-negative number"));
    }
    Ok(())
}

fn shadow(opacity: f32, radius: f32, y: f32) -> Shadow {
    Shadow {
        color: Color::rgb(0, 0, 0),
        opacity,
        radius,
        x: 0.0,
        y,
    }
}

static VIBRANT: Lazy<Theme> = Lazy::new(|| Theme {
    name: "Vibrant".into(),
    colors: ColorTokens {
        primary: Color::rgb(0x5E, 0x5C, 0xE6),
        secondary: Color::rgb(0xBF, 0x5A, 0xF2),
        accent: Color::rgb(0xFF, 0x9F, 0x0A),
        background: Color::rgb(0xF5, 0xF5, 0xFA),
        surface: Color::rgb(0xFF, 0xFF, 0xFF),
        text_primary: Color::rgb(0x1C, 0x1C, 0x1E),
        text_secondary: Color::rgb(0x6E, 0x6E, 0x73),
        border: Color::rgb(0xE5, 0xE5, 0xEA),
        success: Color::rgb(0x30, 0xD1, 0x58),
        warning: Color::rgb(0xFF, 0xD6, 0x0A),
        error: Color::rgb(0xFF, 0x45, 0x3A),
        income: Color::rgb(0x30, 0xD1, 0x58),
        expense: Color::rgb(0xFF, 0x37, 0x5F),
        chart: vec![
            Color::rgb(0x5E, 0x5C, 0xE6),
            Color::rgb(0xFF, 0x9F, 0x0A),
            Color::rgb(0x30, 0xD1, 0x58),
            Color::rgb(0xFF, 0x37, 0x5F),
            Color::rgb(0x64, 0xD2, 0xFF),
            Color::rgb(0xBF, 0x5A, 0xF2),
        ],
    },
    spacing: SpacingTokens::default(),
    radius: RadiusTokens {
        sm: 6.0,
        md: 12.0,
        lg: 16.0,
        xl: 24.0,
        full: 999.0,
    },
    typography: TypographyTokens {
        large_title: FontSpec::new(34.0, FontWeight::Bold, FontDesign::Rounded),
        title: FontSpec::new(22.0, FontWeight::Bold, FontDesign::Rounded),
        headline: FontSpec::new(17.0, FontWeight::Semibold, FontDesign::Rounded),
        body: FontSpec::new(15.0, FontWeight::Regular, FontDesign::Default),
        callout: FontSpec::new(14.0, FontWeight::Medium, FontDesign::Default),
        caption: FontSpec::new(12.0, FontWeight::Regular, FontDesign::Default),
        numeric: FontSpec::new(17.0, FontWeight::Semibold, FontDesign::Monospaced),
    },
    shadows: ShadowTokens {
        small: shadow(0.08, 4.0, 2.0),
        medium: shadow(0.12, 10.0, 4.0),
        large: shadow(0.18, 20.0, 8.0),
    },
});

static NEUTRAL: Lazy<Theme> = Lazy::new(|| Theme {
    name: "Neutral".into(),
    colors: ColorTokens {
        primary: Color::rgb(0x3A, 0x4A, 0x5C),
        secondary: Color::rgb(0x6B, 0x7A, 0x8C),
        accent: Color::rgb(0x2F, 0x80, 0xED),
        background: Color::rgb(0xFA, 0xFA, 0xFA),
        surface: Color::rgb(0xFF, 0xFF, 0xFF),
        text_primary: Color::rgb(0x21, 0x25, 0x29),
        text_secondary: Color::rgb(0x86, 0x8E, 0x96),
        border: Color::rgb(0xDE, 0xE2, 0xE6),
        success: Color::rgb(0x2B, 0x8A, 0x3E),
        warning: Color::rgb(0xE6, 0x77, 0x00),
        error: Color::rgb(0xC9, 0x2A, 0x2A),
        income: Color::rgb(0x2B, 0x8A, 0x3E),
        expense: Color::rgb(0xC9, 0x2A, 0x2A),
        chart: vec![
            Color::rgb(0x3A, 0x4A, 0x5C),
            Color::rgb(0x6B, 0x7A, 0x8C),
            Color::rgb(0x2F, 0x80, 0xED),
            Color::rgb(0xAD, 0xB5, 0xBD),
            Color::rgb(0x49, 0x50, 0x57),
        ],
    },
    spacing: SpacingTokens::default(),
    radius: RadiusTokens::default(),
    typography: TypographyTokens {
        large_title: FontSpec::new(32.0, FontWeight::Semibold, FontDesign::Default),
        title: FontSpec::new(20.0, FontWeight::Semibold, FontDesign::Default),
        headline: FontSpec::new(16.0, FontWeight::Medium, FontDesign::Default),
        body: FontSpec::new(14.0, FontWeight::Regular, FontDesign::Default),
        callout: FontSpec::new(13.0, FontWeight::Regular, FontDesign::Default),
        caption: FontSpec::new(11.0, FontWeight::Regular, FontDesign::Default),
        numeric: FontSpec::new(16.0, FontWeight::Medium, FontDesign::Monospaced),
    },
    shadows: ShadowTokens {
        small: shadow(0.04, 2.0, 1.0),
        medium: shadow(0.06, 6.0, 2.0),
        large: shadow(0.10, 12.0, 4.0),
    },
});
