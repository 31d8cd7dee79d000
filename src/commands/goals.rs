// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::Session;
use crate::utils::{fmt_money, fmt_percent, maybe_print_json, themed_table};
use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(session: &Session, m: &clap::ArgMatches) -> Result<()> {
    if let Some(("list", sub)) = m.subcommand() {
        list(session, sub)?;
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct GoalRow {
    pub name: String,
    pub category: String,
    pub current: Decimal,
    pub target: Decimal,
    pub progress: Decimal,
    pub completed: bool,
    pub target_date: String,
}

pub fn query_rows(session: &Session, only_completed: bool) -> Vec<GoalRow> {
    let state = session.store.state();
    let mut goals: Vec<_> = state
        .goals
        .iter()
        .filter(|g| !only_completed || g.is_completed())
        .collect();
    goals.sort_by_key(|g| g.target_date);
    goals
        .into_iter()
        .map(|g| GoalRow {
            name: g.name.clone(),
            category: g.category.to_string(),
            current: g.current_amount,
            target: g.target_amount,
            progress: g.progress().round_dp(4),
            completed: g.is_completed(),
            target_date: g.target_date.to_string(),
        })
        .collect()
}

fn list(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let data = query_rows(session, sub.get_flag("completed"));
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let theme = session.theme.current();
        let rows = data
            .iter()
            .map(|r| {
                let tone = if r.completed {
                    theme.colors.success
                } else {
                    theme.colors.warning
                };
                vec![
                    (r.name.clone(), None),
                    (r.category.clone(), None),
                    (fmt_money(&r.current, &session.currency), None),
                    (fmt_money(&r.target, &session.currency), None),
                    (fmt_percent(&r.progress), Some(tone)),
                    (r.target_date.clone(), None),
                ]
            })
            .collect();
        println!(
            "{}",
            themed_table(
                &["Goal", "Category", "Saved", "Target", "Progress", "Due"],
                theme.colors.primary,
                rows,
            )
        );
    }
    Ok(())
}
