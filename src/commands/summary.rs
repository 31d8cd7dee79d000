// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::Session;
use crate::utils::{fmt_money, fmt_percent, maybe_print_json, themed_table};
use anyhow::Result;
use rust_decimal::Decimal;

pub fn handle(session: &Session, m: &clap::ArgMatches) -> Result<()> {
    let summary = session.store.state().summary();
    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &summary)? {
        return Ok(());
    }
    let theme = session.theme.current();
    let ccy = &session.currency;
    let net_tone = if summary.net_cash_flow >= Decimal::ZERO {
        theme.colors.income
    } else {
        theme.colors.expense
    };
    let rows = vec![
        vec![
            ("Net worth".to_string(), None),
            (fmt_money(&summary.total_assets, ccy), Some(theme.colors.accent)),
        ],
        vec![
            ("Income".to_string(), None),
            (fmt_money(&summary.total_income, ccy), Some(theme.colors.income)),
        ],
        vec![
            ("Expenses".to_string(), None),
            (fmt_money(&summary.total_expenses, ccy), Some(theme.colors.expense)),
        ],
        vec![
            ("Net cash flow".to_string(), None),
            (fmt_money(&summary.net_cash_flow, ccy), Some(net_tone)),
        ],
        vec![
            ("Goals completed".to_string(), None),
            (format!("{} / {}", summary.completed_goals, summary.goals), None),
        ],
        vec![
            ("Average goal progress".to_string(), None),
            (fmt_percent(&summary.average_goal_progress), None),
        ],
    ];
    println!(
        "{}",
        themed_table(&["Metric", "Value"], theme.colors.primary, rows)
    );
    Ok(())
}
