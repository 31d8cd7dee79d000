// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use finboard::aggregate::{
    self, Bucketing, average_goal_progress, cash_flow_series, net_cash_flow, sum_by_category,
    time_series, top_categories, total_of,
};
use finboard::filter::DateInterval;
use finboard::models::{
    Asset, AssetCategory, Goal, GoalCategory, Transaction, TransactionCategory,
};
use rust_decimal::Decimal;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn usd(units: i64) -> Decimal {
    Decimal::new(units, 0)
}

fn tx(category: TransactionCategory, amount: i64, date: NaiveDate) -> Transaction {
    Transaction::new(category, usd(amount), date, "Payee")
}

fn goal(target: i64, current: i64) -> Goal {
    Goal::new("Goal", GoalCategory::Other, usd(target), usd(current), d(2030, 1, 1))
}

#[test]
fn total_matches_plain_sum() {
    let txs = vec![
        tx(TransactionCategory::Food, 12, d(2025, 1, 1)),
        tx(TransactionCategory::Housing, 1500, d(2025, 1, 2)),
        tx(TransactionCategory::Income, 4000, d(2025, 1, 3)),
    ];
    let expected: Decimal = txs.iter().map(|t| t.amount).sum();
    assert_eq!(total_of(&txs, |t| t.amount), expected);
    assert_eq!(expected, usd(5512));
}

#[test]
fn assets_group_by_category_without_zero_fill() {
    let today = d(2025, 3, 1);
    let assets = vec![
        Asset::new("A", AssetCategory::Stocks, usd(100), today),
        Asset::new("B", AssetCategory::Stocks, usd(50), today),
        Asset::new("C", AssetCategory::Bonds, usd(25), today),
    ];
    let by_cat = sum_by_category(&assets);
    assert_eq!(by_cat.len(), 2);
    assert_eq!(by_cat[&AssetCategory::Stocks], usd(150));
    assert_eq!(by_cat[&AssetCategory::Bonds], usd(25));
    assert!(!by_cat.contains_key(&AssetCategory::Cash));
}

#[test]
fn top_categories_sorts_descending_and_truncates() {
    let today = d(2025, 3, 1);
    let txs = vec![
        tx(TransactionCategory::Food, 40, today),
        tx(TransactionCategory::Housing, 900, today),
        tx(TransactionCategory::Shopping, 120, today),
        tx(TransactionCategory::Food, 30, today),
        tx(TransactionCategory::Income, 5000, today),
    ];
    let spending = aggregate::spending_by_category(&txs);
    assert!(!spending.contains_key(&TransactionCategory::Income));

    let top = top_categories(&spending, 2);
    assert_eq!(
        top,
        vec![
            (TransactionCategory::Housing, usd(900)),
            (TransactionCategory::Shopping, usd(120)),
        ]
    );
}

#[test]
fn net_cash_flow_is_income_minus_expenses() {
    let today = d(2025, 3, 1);
    let txs = vec![
        tx(TransactionCategory::Income, 3000, today),
        tx(TransactionCategory::Housing, 1200, today),
        tx(TransactionCategory::Food, 300, today),
    ];
    assert_eq!(aggregate::total_income(&txs), usd(3000));
    assert_eq!(aggregate::total_expenses(&txs), usd(1500));
    assert_eq!(net_cash_flow(&txs), usd(1500));
}

#[test]
fn negative_input_amounts_are_stored_as_magnitudes() {
    let t = tx(TransactionCategory::Food, -25, d(2025, 1, 1));
    assert_eq!(t.amount, usd(25));
    assert_eq!(t.signed_amount(), usd(-25));
}

#[test]
fn goal_progress_quarter_and_complete() {
    let quarter = goal(1000, 250);
    assert_eq!(aggregate::goal_progress(&quarter), Decimal::new(25, 2));
    assert!(!quarter.is_completed());

    let done = goal(500, 500);
    assert_eq!(aggregate::goal_progress(&done), Decimal::ONE);
    assert!(done.is_completed());
}

#[test]
fn goal_progress_is_clamped_and_guards_zero_target() {
    assert_eq!(goal(0, 100).progress(), Decimal::ZERO);
    assert_eq!(goal(-10, 100).progress(), Decimal::ZERO);
    assert_eq!(goal(100, 250).progress(), Decimal::ONE);
    assert_eq!(goal(100, -20).progress(), Decimal::ZERO);
    assert_eq!(goal(100, 250).remaining(), Decimal::ZERO);
    assert_eq!(goal(100, 40).remaining(), usd(60));
}

#[test]
fn huge_balance_over_tiny_target_counts_as_complete() {
    let tiny = Decimal::new(1, 28);
    let rich = Goal::new("Moonshot", GoalCategory::Other, tiny, Decimal::MAX, d(2030, 1, 1));
    assert_eq!(rich.progress(), Decimal::ONE);
    assert!(rich.is_completed());

    let owing = Goal::new("Hole", GoalCategory::Other, tiny, Decimal::MIN, d(2030, 1, 1));
    assert_eq!(owing.progress(), Decimal::ZERO);
}

#[test]
fn average_progress_handles_empty_list() {
    assert_eq!(average_goal_progress(&[]), Decimal::ZERO);
    let goals = vec![goal(100, 50), goal(100, 100)];
    assert_eq!(average_goal_progress(&goals), Decimal::new(75, 2));
    assert_eq!(aggregate::completed_goals(&goals), 1);
}

#[test]
fn daily_series_zero_fills_missing_days() {
    let interval = DateInterval::new(d(2025, 1, 1), d(2025, 1, 5));
    let txs = vec![
        tx(TransactionCategory::Food, 10, d(2025, 1, 2)),
        tx(TransactionCategory::Food, 5, d(2025, 1, 2)),
        tx(TransactionCategory::Food, 7, d(2025, 1, 4)),
        // outside the interval
        tx(TransactionCategory::Food, 99, d(2025, 1, 9)),
    ];
    let series = time_series(&txs, |t| t.due_date, |t| t.amount, interval, Bucketing::Day);
    let values: Vec<Decimal> = series.iter().map(|p| p.value).collect();
    assert_eq!(
        values,
        vec![usd(0), usd(15), usd(0), usd(7), usd(0)]
    );
    assert_eq!(series[0].date, d(2025, 1, 1));
    assert_eq!(series[4].date, d(2025, 1, 5));
}

#[test]
fn weekly_buckets_anchor_at_interval_start() {
    let interval = DateInterval::new(d(2025, 1, 1), d(2025, 1, 14));
    let txs = vec![
        tx(TransactionCategory::Food, 10, d(2025, 1, 7)),
        tx(TransactionCategory::Food, 20, d(2025, 1, 8)),
    ];
    let series = time_series(&txs, |t| t.due_date, |t| t.amount, interval, Bucketing::Week);
    assert_eq!(series.len(), 2);
    assert_eq!((series[0].date, series[0].value), (d(2025, 1, 1), usd(10)));
    assert_eq!((series[1].date, series[1].value), (d(2025, 1, 8), usd(20)));
}

#[test]
fn monthly_buckets_cover_every_month() {
    let interval = DateInterval::new(d(2025, 1, 15), d(2025, 3, 10));
    let series = time_series::<Transaction, _, _>(
        &[],
        |t| t.due_date,
        |t| t.amount,
        interval,
        Bucketing::Month,
    );
    let dates: Vec<NaiveDate> = series.iter().map(|p| p.date).collect();
    assert_eq!(dates, vec![d(2025, 1, 15), d(2025, 2, 1), d(2025, 3, 1)]);
    assert!(series.iter().all(|p| p.value.is_zero()));
}

#[test]
fn cash_flow_series_splits_income_and_expenses() {
    let interval = DateInterval::new(d(2025, 2, 1), d(2025, 2, 3));
    let txs = vec![
        tx(TransactionCategory::Income, 1000, d(2025, 2, 1)),
        tx(TransactionCategory::Utilities, 80, d(2025, 2, 1)),
        tx(TransactionCategory::Food, 20, d(2025, 2, 3)),
    ];
    let points = cash_flow_series(&txs, interval, Bucketing::Day);
    assert_eq!(points.len(), 3);
    assert_eq!(points[0].income, usd(1000));
    assert_eq!(points[0].expenses, usd(80));
    assert_eq!(points[0].net(), usd(920));
    assert_eq!(points[1].income, usd(0));
    assert_eq!(points[2].expenses, usd(20));
}
