// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashSet;

use crate::commands::Session;
use crate::models::TransactionStatus;
use crate::store::FinanceState;
use crate::utils::pretty_table;
use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Returns `(issue, detail)` pairs; empty when the data is consistent.
pub fn check(state: &FinanceState, today: NaiveDate) -> Vec<Vec<String>> {
    let mut rows = Vec::new();

    // 1) Duplicate ids across all record kinds
    let mut seen = HashSet::new();
    let ids = state
        .transactions
        .iter()
        .map(|t| t.id)
        .chain(state.assets.iter().map(|a| a.id))
        .chain(state.goals.iter().map(|g| g.id));
    for id in ids {
        if !seen.insert(id) {
            rows.push(vec!["duplicate_id".into(), id.to_string()]);
        }
    }

    // 2) Status vs. due date
    for t in &state.transactions {
        let inconsistent = match t.status {
            TransactionStatus::Paid => false,
            TransactionStatus::Due => t.due_date < today,
            TransactionStatus::Late => t.due_date >= today,
        };
        if inconsistent {
            rows.push(vec![
                "status_date_mismatch".into(),
                format!("{} {} {}", t.due_date, t.status, t.payee),
            ]);
        }
        if t.amount < Decimal::ZERO {
            rows.push(vec!["negative_amount".into(), t.id.to_string()]);
        }
    }

    // 3) Goals outside the progress bounds or with no target
    for g in &state.goals {
        let p = g.progress();
        if p < Decimal::ZERO || p > Decimal::ONE {
            rows.push(vec!["progress_out_of_range".into(), g.name.clone()]);
        }
        if g.target_amount <= Decimal::ZERO {
            rows.push(vec!["goal_without_target".into(), g.name.clone()]);
        }
    }

    rows
}

pub fn handle(session: &Session) -> Result<()> {
    let rows = check(&session.store.state(), session.today());
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
