// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure derived figures over domain records.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::filter::DateInterval;
use crate::models::{Amounted, Categorized, Goal, Transaction};

pub fn total_of<R, F>(records: &[R], selector: F) -> Decimal
where
    F: Fn(&R) -> Decimal,
{
    records.iter().map(selector).sum()
}

/// Sums amounts per category. Categories with no records are left out.
pub fn sum_by_category<R>(records: &[R]) -> BTreeMap<R::Category, Decimal>
where
    R: Amounted + Categorized,
{
    sum_by_category_iter(records.iter())
}

fn sum_by_category_iter<'a, R, I>(records: I) -> BTreeMap<R::Category, Decimal>
where
    R: Amounted + Categorized + 'a,
    I: Iterator<Item = &'a R>,
{
    let mut map = BTreeMap::new();
    for r in records {
        *map.entry(r.category()).or_insert(Decimal::ZERO) += r.amount();
    }
    map
}

/// Largest entries first; ties keep category order.
pub fn top_categories<C: Copy + Ord>(map: &BTreeMap<C, Decimal>, n: usize) -> Vec<(C, Decimal)> {
    let mut items: Vec<(C, Decimal)> = map.iter().map(|(c, v)| (*c, *v)).collect();
    items.sort_by(|a, b| b.1.cmp(&a.1));
    items.truncate(n);
    items
}

pub fn spending_by_category(
    transactions: &[Transaction],
) -> BTreeMap<crate::models::TransactionCategory, Decimal> {
    sum_by_category_iter(transactions.iter().filter(|t| !t.is_income()))
}

pub fn total_income(transactions: &[Transaction]) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.is_income())
        .map(|t| t.amount)
        .sum()
}

pub fn total_expenses(transactions: &[Transaction]) -> Decimal {
    transactions
        .iter()
        .filter(|t| !t.is_income())
        .map(|t| t.amount)
        .sum()
}

/// Income minus expenses.
pub fn net_cash_flow(transactions: &[Transaction]) -> Decimal {
    total_of(transactions, Transaction::signed_amount)
}

pub fn goal_progress(goal: &Goal) -> Decimal {
    goal.progress()
}

pub fn average_goal_progress(goals: &[Goal]) -> Decimal {
    if goals.is_empty() {
        return Decimal::ZERO;
    }
    total_of(goals, Goal::progress) / Decimal::from(goals.len())
}

pub fn completed_goals(goals: &[Goal]) -> usize {
    goals.iter().filter(|g| g.is_completed()).count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucketing {
    #[default]
    Day,
    /// Seven-day buckets anchored at the interval start.
    Week,
    /// Calendar months, keyed by the first of the month. The first bucket
    /// starts at the interval start.
    Month,
}

impl Bucketing {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" | "daily" => Some(Bucketing::Day),
            "week" | "weekly" => Some(Bucketing::Week),
            "month" | "monthly" => Some(Bucketing::Month),
            _ => None,
        }
    }

    fn bucket_start(self, date: NaiveDate, interval: &DateInterval) -> NaiveDate {
        match self {
            Bucketing::Day => date,
            Bucketing::Week => {
                let offset = (date - interval.start).num_days().max(0) as u64;
                interval
                    .start
                    .checked_add_days(Days::new(offset - offset % 7))
                    .unwrap_or(date)
            }
            // the first month is keyed at the interval start, not before it
            Bucketing::Month => date.with_day(1).unwrap_or(date).max(interval.start),
        }
    }

    /// Every bucket key covering the interval, in order.
    fn bucket_starts(self, interval: &DateInterval) -> Vec<NaiveDate> {
        let mut keys: Vec<NaiveDate> = interval
            .days()
            .map(|d| self.bucket_start(d, interval))
            .collect();
        keys.dedup();
        keys
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: Decimal,
}

/// Buckets `records` over `interval`, emitting a zero point for empty buckets.
pub fn time_series<R, D, V>(
    records: &[R],
    date_of: D,
    value_of: V,
    interval: DateInterval,
    bucketing: Bucketing,
) -> Vec<SeriesPoint>
where
    D: Fn(&R) -> NaiveDate,
    V: Fn(&R) -> Decimal,
{
    let mut buckets: BTreeMap<NaiveDate, Decimal> = bucketing
        .bucket_starts(&interval)
        .into_iter()
        .map(|d| (d, Decimal::ZERO))
        .collect();
    for r in records {
        let date = date_of(r);
        if !interval.contains(date) {
            continue;
        }
        *buckets
            .entry(bucketing.bucket_start(date, &interval))
            .or_insert(Decimal::ZERO) += value_of(r);
    }
    buckets
        .into_iter()
        .map(|(date, value)| SeriesPoint { date, value })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowPoint {
    pub date: NaiveDate,
    pub income: Decimal,
    pub expenses: Decimal,
}

impl CashFlowPoint {
    pub fn net(&self) -> Decimal {
        self.income - self.expenses
    }
}

/// Income and expense totals per bucket, for the income/expense chart.
pub fn cash_flow_series(
    transactions: &[Transaction],
    interval: DateInterval,
    bucketing: Bucketing,
) -> Vec<CashFlowPoint> {
    let income = time_series(
        transactions,
        |t| t.due_date,
        |t| if t.is_income() { t.amount } else { Decimal::ZERO },
        interval,
        bucketing,
    );
    let expenses = time_series(
        transactions,
        |t| t.due_date,
        |t| if t.is_income() { Decimal::ZERO } else { t.amount },
        interval,
        bucketing,
    );
    income
        .into_iter()
        .zip(expenses)
        .map(|(i, e)| CashFlowPoint {
            date: i.date,
            income: i.value,
            expenses: e.value,
        })
        .collect()
}
