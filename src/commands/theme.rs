// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use crate::commands::Session;
use crate::theme::{Theme, ThemeVariant};
use crate::utils::{maybe_print_json, parse_theme, pretty_table, term_color};
use anyhow::{Context, Result};
use comfy_table::Cell;

pub fn handle(session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", _)) => list(session),
        Some(("show", sub)) => show(session, sub)?,
        Some(("validate", sub)) => validate(sub)?,
        _ => {}
    }
    Ok(())
}

fn list(session: &Session) {
    let active = session.theme.current();
    let rows = ThemeVariant::ALL
        .iter()
        .map(|v| {
            let marker = if v.theme() == *active { "*" } else { "" };
            vec![v.to_string(), marker.to_string()]
        })
        .collect();
    println!("{}", pretty_table(&["Theme", "Active"], rows));
}

/// Flattened `token -> value` pairs, in declaration order.
pub fn token_rows(theme: &Theme) -> Vec<(String, String)> {
    let c = &theme.colors;
    let mut rows: Vec<(String, String)> = [
        ("primary", c.primary),
        ("secondary", c.secondary),
        ("accent", c.accent),
        ("background", c.background),
        ("surface", c.surface),
        ("text_primary", c.text_primary),
        ("text_secondary", c.text_secondary),
        ("border", c.border),
        ("success", c.success),
        ("warning", c.warning),
        ("error", c.error),
        ("income", c.income),
        ("expense", c.expense),
    ]
    .iter()
    .map(|(k, v)| (format!("colors.{k}"), v.to_hex()))
    .collect();
    for (i, color) in c.chart.iter().enumerate() {
        rows.push((format!("colors.chart[{i}]"), color.to_hex()));
    }
    for (k, v) in theme.spacing.scale() {
        rows.push((format!("spacing.{k}"), v.to_string()));
    }
    for (k, v) in theme.radius.scale() {
        rows.push((format!("radius.{k}"), v.to_string()));
    }
    for (k, f) in theme.typography.styles() {
        rows.push((
            format!("typography.{k}"),
            format!("{} {:?} {:?}", f.size, f.weight, f.design).to_lowercase(),
        ));
    }
    for (k, s) in theme.shadows.levels() {
        rows.push((
            format!("shadows.{k}"),
            format!("{} @{} r{} ({}, {})", s.color, s.opacity, s.radius, s.x, s.y),
        ));
    }
    rows
}

fn show(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let theme = match sub.get_one::<String>("name") {
        Some(name) => parse_theme(name)?.theme(),
        None => (*session.theme.current()).clone(),
    };
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &theme)? {
        return Ok(());
    }
    println!("{}", theme.name);
    let mut table = pretty_table(&["Token", "Value"], Vec::new());
    for (token, value) in token_rows(&theme) {
        let cell = match value.parse::<crate::theme::Color>() {
            Ok(color) if token.starts_with("colors.") => Cell::new(&value).fg(term_color(color)),
            _ => Cell::new(&value),
        };
        table.add_row(vec![Cell::new(token), cell]);
    }
    println!("{table}");
    Ok(())
}

fn validate(sub: &clap::ArgMatches) -> Result<()> {
    let file = sub.get_one::<String>("file").unwrap();
    let theme = Theme::from_file(Path::new(file))
        .with_context(|| format!("Theme file '{}' is not valid", file))?;
    println!("Theme '{}' is valid", theme.name);
    Ok(())
}
