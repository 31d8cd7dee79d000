// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::sync::Once;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;

use crate::aggregate::Bucketing;
use crate::filter::DateRange;
use crate::models::TransactionStatus;
use crate::theme::{Color, ThemeVariant};

static TRACING_INIT: Once = Once::new();

/// Installs the global fmt subscriber. `RUST_LOG` still applies on top.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt};

        let level = if verbose { "finboard=debug" } else { "finboard=warn" };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
        fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
    });
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_range(s: &str) -> Result<DateRange> {
    DateRange::parse(s).with_context(|| {
        format!("Invalid range '{}', expected week|month|quarter|year|all", s)
    })
}

pub fn parse_bucketing(s: &str) -> Result<Bucketing> {
    Bucketing::parse(s).with_context(|| format!("Invalid bucket '{}', expected day|week|month", s))
}

pub fn parse_theme(s: &str) -> Result<ThemeVariant> {
    ThemeVariant::parse(s).with_context(|| format!("Unknown theme '{}', expected vibrant|neutral", s))
}

pub fn parse_status(s: &str) -> Result<TransactionStatus> {
    TransactionStatus::parse(s)
        .with_context(|| format!("Invalid status '{}', expected paid|due|late", s))
}

fn currency_symbol(ccy: &str) -> Option<&'static str> {
    match ccy.to_ascii_uppercase().as_str() {
        "USD" | "CAD" | "AUD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        "INR" => Some("₹"),
        _ => None,
    }
}

/// `-$1,234.50`; unknown currency codes are used as a prefix (`CHF 12.00`).
pub fn fmt_money(d: &Decimal, ccy: &str) -> String {
    let rounded = d.round_dp(2);
    let digits = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    match currency_symbol(ccy) {
        Some(sym) => format!("{sign}{sym}{grouped}.{frac_part}"),
        None => format!("{sign}{} {grouped}.{frac_part}", ccy.to_ascii_uppercase()),
    }
}

/// Ratio in `[0, 1]` as a whole-number percentage.
pub fn fmt_percent(ratio: &Decimal) -> String {
    format!("{}%", (*ratio * Decimal::ONE_HUNDRED).round_dp(0))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

/// Table whose cells carry theme colors. `None` leaves a cell unstyled.
pub fn themed_table(
    headers: &[&str],
    header_color: Color,
    rows: Vec<Vec<(String, Option<Color>)>>,
) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h).fg(term_color(header_color))));
    for r in rows {
        t.add_row(r.into_iter().map(|(text, color)| match color {
            Some(c) => Cell::new(text).fg(term_color(c)),
            None => Cell::new(text),
        }));
    }
    t
}

pub fn term_color(c: Color) -> comfy_table::Color {
    comfy_table::Color::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
