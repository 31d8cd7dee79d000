// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{spending_by_category, top_categories};
use crate::commands::Session;
use crate::filter::DataFilter;
use crate::models::Transaction;
use crate::utils::{fmt_money, maybe_print_json, parse_status, themed_table};
use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(session: &mut Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(session, sub)?,
        Some(("by-category", sub)) => by_category(session, sub)?,
        _ => {}
    }
    Ok(())
}

fn list(session: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(session, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let theme = session.theme.current();
        let rows = data
            .iter()
            .map(|r| {
                let tone = if r.income {
                    theme.colors.income
                } else {
                    theme.colors.expense
                };
                vec![
                    (r.date.clone(), None),
                    (r.payee.clone(), None),
                    (r.description.clone(), None),
                    (r.category.clone(), None),
                    (r.amount_display.clone(), Some(tone)),
                    (r.status.clone(), None),
                ]
            })
            .collect();
        println!(
            "{}",
            themed_table(
                &["Date", "Payee", "Description", "Category", "Amount", "Status"],
                theme.colors.primary,
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub payee: String,
    pub description: String,
    pub category: String,
    pub sub_category: String,
    pub amount: String,
    pub amount_display: String,
    pub status: String,
    pub income: bool,
}

impl TransactionRow {
    fn from_transaction(t: &Transaction, ccy: &str) -> Self {
        Self {
            id: t.id.to_string(),
            date: t.due_date.to_string(),
            payee: t.payee.clone(),
            description: t.description.clone(),
            category: t.category.to_string(),
            sub_category: t.sub_category.clone(),
            amount: t.signed_amount().to_string(),
            amount_display: fmt_money(&t.signed_amount(), ccy),
            status: t.status.to_string(),
            income: t.is_income(),
        }
    }
}

/// Sets the store filter from the arguments and returns the matching rows,
/// newest first.
pub fn query_rows(session: &mut Session, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let range = session.range_arg(sub)?;
    let search = sub.get_one::<String>("search").cloned().unwrap_or_default();
    let status = match sub.get_one::<String>("status") {
        Some(s) => Some(parse_status(s)?),
        None => None,
    };
    session.store.set_filter(DataFilter::new(range, search));

    let state = session.store.state();
    let mut matched: Vec<&Transaction> = state
        .filtered_transactions(session.today())
        .into_iter()
        .filter(|t| status.is_none_or(|s| t.status == s))
        .collect();
    matched.sort_by(|a, b| b.due_date.cmp(&a.due_date));
    if let Some(limit) = sub.get_one::<usize>("limit") {
        matched.truncate(*limit);
    }
    Ok(matched
        .into_iter()
        .map(|t| TransactionRow::from_transaction(t, &session.currency))
        .collect())
}

#[derive(Debug, Serialize)]
pub struct CategoryRow {
    pub category: String,
    pub spent: Decimal,
}

pub fn category_rows(session: &mut Session, sub: &clap::ArgMatches) -> Result<Vec<CategoryRow>> {
    let range = session.range_arg(sub)?;
    let top = *sub.get_one::<usize>("top").unwrap_or(&5);
    session.store.set_filter(DataFilter::new(range, ""));

    let state = session.store.state();
    let matched: Vec<Transaction> = state
        .filtered_transactions(session.today())
        .into_iter()
        .cloned()
        .collect();
    Ok(top_categories(&spending_by_category(&matched), top)
        .into_iter()
        .map(|(category, spent)| CategoryRow {
            category: category.to_string(),
            spent: spent.round_dp(2),
        })
        .collect())
}

fn by_category(session: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = category_rows(session, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let theme = session.theme.current();
        let rows = data
            .iter()
            .enumerate()
            .map(|(i, r)| {
                vec![
                    (r.category.clone(), Some(theme.chart_color(i))),
                    (fmt_money(&r.spent, &session.currency), None),
                ]
            })
            .collect();
        println!(
            "{}",
            themed_table(&["Category", "Spent"], theme.colors.primary, rows)
        );
    }
    Ok(())
}
