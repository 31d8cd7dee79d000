// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::top_categories;
use crate::commands::Session;
use crate::utils::{fmt_money, fmt_percent, maybe_print_json, themed_table};
use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(session, sub)?,
        Some(("by-category", sub)) => by_category(session, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct AssetRow {
    pub name: String,
    pub category: String,
    pub institution: String,
    pub value: Decimal,
    pub last_updated: String,
}

pub fn query_rows(session: &Session) -> Vec<AssetRow> {
    let state = session.store.state();
    let mut assets: Vec<_> = state.assets.iter().collect();
    assets.sort_by(|a, b| b.value.cmp(&a.value));
    assets
        .into_iter()
        .map(|a| AssetRow {
            name: a.name.clone(),
            category: a.category.to_string(),
            institution: a.institution.clone(),
            value: a.value,
            last_updated: a.last_updated.to_string(),
        })
        .collect()
}

fn list(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let data = query_rows(session);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let theme = session.theme.current();
        let mut rows: Vec<Vec<(String, Option<_>)>> = data
            .iter()
            .map(|r| {
                vec![
                    (r.name.clone(), None),
                    (r.category.clone(), None),
                    (r.institution.clone(), None),
                    (fmt_money(&r.value, &session.currency), None),
                    (r.last_updated.clone(), None),
                ]
            })
            .collect();
        let total = session.store.state().total_assets();
        rows.push(vec![
            ("Net worth".into(), Some(theme.colors.accent)),
            (String::new(), None),
            (String::new(), None),
            (fmt_money(&total, &session.currency), Some(theme.colors.accent)),
            (String::new(), None),
        ]);
        println!(
            "{}",
            themed_table(
                &["Name", "Category", "Institution", "Value", "Updated"],
                theme.colors.primary,
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct AllocationRow {
    pub category: String,
    pub value: Decimal,
    pub share: Decimal,
}

/// Allocation per asset category, largest first, with each category's share
/// of the total.
pub fn allocation_rows(session: &Session) -> Vec<AllocationRow> {
    let state = session.store.state();
    let total = state.total_assets();
    let by_category = state.aggregated_assets();
    top_categories(&by_category, by_category.len())
        .into_iter()
        .map(|(category, value)| AllocationRow {
            category: category.to_string(),
            value,
            share: if total.is_zero() {
                Decimal::ZERO
            } else {
                (value / total).round_dp(4)
            },
        })
        .collect()
}

fn by_category(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let data = allocation_rows(session);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let theme = session.theme.current();
        let rows = data
            .iter()
            .enumerate()
            .map(|(i, r)| {
                vec![
                    (r.category.clone(), Some(theme.chart_color(i))),
                    (fmt_money(&r.value, &session.currency), None),
                    (fmt_percent(&r.share), None),
                ]
            })
            .collect();
        println!(
            "{}",
            themed_table(&["Category", "Value", "Share"], theme.colors.primary, rows)
        );
    }
    Ok(())
}
