// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{CashFlowPoint, cash_flow_series};
use crate::commands::Session;
use crate::utils::{fmt_money, maybe_print_json, parse_bucketing, themed_table};
use anyhow::Result;
use rust_decimal::Decimal;

pub fn series(session: &Session, sub: &clap::ArgMatches) -> Result<Vec<CashFlowPoint>> {
    let range = session.range_arg(sub)?;
    let bucketing = match sub.get_one::<String>("bucket") {
        Some(s) => parse_bucketing(s)?,
        None => Default::default(),
    };
    let interval = range.interval(session.today());
    let state = session.store.state();
    Ok(cash_flow_series(&state.transactions, interval, bucketing))
}

pub fn handle(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let points = series(session, sub)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &points)? {
        return Ok(());
    }
    let theme = session.theme.current();
    let ccy = &session.currency;
    let rows = points
        .iter()
        .map(|p| {
            let net = p.net();
            let net_tone = if net >= Decimal::ZERO {
                theme.colors.income
            } else {
                theme.colors.expense
            };
            vec![
                (p.date.to_string(), None),
                (fmt_money(&p.income, ccy), Some(theme.colors.income)),
                (fmt_money(&p.expenses, ccy), Some(theme.colors.expense)),
                (fmt_money(&net, ccy), Some(net_tone)),
            ]
        })
        .collect();
    println!(
        "{}",
        themed_table(
            &["Period", "Income", "Expenses", "Net"],
            theme.colors.primary,
            rows,
        )
    );
    Ok(())
}
