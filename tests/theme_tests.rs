// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::Write;

use finboard::theme::{Color, Theme, ThemeError, ThemeVariant};

#[test]
fn builtin_themes_are_valid_and_distinct() {
    for variant in ThemeVariant::ALL {
        let theme = variant.theme();
        theme.validate().unwrap();
        assert_eq!(theme.spacing.md, 16.0);
    }
    assert_ne!(Theme::vibrant(), Theme::neutral());
    assert_eq!(Theme::default(), Theme::vibrant());
}

#[test]
fn color_hex_parsing() {
    assert_eq!("#5E5CE6".parse::<Color>().unwrap(), Color::rgb(0x5E, 0x5C, 0xE6));
    assert_eq!(
        "00000080".parse::<Color>().unwrap(),
        Color::rgba(0, 0, 0, 0x80)
    );
    assert_eq!(Color::rgba(1, 2, 3, 4).to_hex(), "#01020304");
    assert_eq!(Color::rgb(255, 0, 16).to_hex(), "#FF0010");
    assert!("#12345".parse::<Color>().is_err());
    assert!("#GGGGGG".parse::<Color>().is_err());
}

#[test]
fn json_theme_must_be_complete() {
    let mut value = serde_json::to_value(Theme::neutral()).unwrap();
    value["radius"].as_object_mut().unwrap().remove("lg");
    let err = Theme::from_json_str(&value.to_string()).unwrap_err();
    assert!(matches!(err, ThemeError::Parse(_)), "unexpected error: {err:?}");
}

#[test]
fn json_theme_rejects_unknown_tokens() {
    let mut value = serde_json::to_value(Theme::vibrant()).unwrap();
    value["spacing"]["huge"] = serde_json::json!(96.0);
    assert!(matches!(
        Theme::from_json_str(&value.to_string()),
        Err(ThemeError::Parse(_))
    ));
}

#[test]
fn validation_rejects_negative_radius() {
    let mut theme = Theme::vibrant();
    theme.radius.md = -1.0;
    match theme.validate() {
        Err(ThemeError::InvalidToken { token, .. }) => assert_eq!(token, "radius.md"),
        other => panic!("expected invalid token, got {other:?}"),
    }
}

#[test]
fn validation_rejects_decreasing_spacing_and_bad_fonts() {
    let mut theme = Theme::neutral();
    theme.spacing.lg = 10.0;
    assert!(matches!(
        theme.validate(),
        Err(ThemeError::InvalidToken { ref token, .. }) if token == "spacing.lg"
    ));

    let mut theme = Theme::neutral();
    theme.typography.body.size = 0.0;
    assert!(theme.validate().is_err());

    let mut theme = Theme::neutral();
    theme.shadows.large.opacity = 1.5;
    assert!(theme.validate().is_err());

    let mut theme = Theme::neutral();
    theme.colors.chart.clear();
    assert!(theme.validate().is_err());

    let mut theme = Theme::neutral();
    theme.name = "  ".into();
    assert!(theme.validate().is_err());
}

#[test]
fn theme_file_loads_custom_palette() {
    let mut theme = Theme::vibrant();
    theme.name = "Midnight".into();
    theme.colors.background = Color::rgb(0x0B, 0x0B, 0x12);

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", serde_json::to_string_pretty(&theme).unwrap()).unwrap();

    let loaded = Theme::from_file(file.path()).unwrap();
    assert_eq!(loaded, theme);
    assert_eq!(loaded.colors.background.to_hex(), "#0B0B12");
}

#[test]
fn chart_colors_cycle() {
    let theme = Theme::neutral();
    let n = theme.colors.chart.len();
    assert_eq!(theme.chart_color(0), theme.chart_color(n));
    assert_eq!(theme.chart_color(1), theme.colors.chart[1]);
}

#[test]
fn variant_parsing() {
    assert_eq!(ThemeVariant::parse("Neutral"), Some(ThemeVariant::Neutral));
    assert_eq!(ThemeVariant::parse(" vibrant "), Some(ThemeVariant::Vibrant));
    assert_eq!(ThemeVariant::parse("dark"), None);
}

#[test]
fn empty_palette_falls_back_to_primary() {
    let mut theme = Theme::vibrant();
    theme.colors.chart.clear();
    assert!(theme.validate().is_err());
    assert_eq!(theme.chart_color(0), theme.colors.primary);
    assert_eq!(theme.chart_color(7), theme.colors.primary);
}
