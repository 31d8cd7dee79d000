// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Days, NaiveDate};
use finboard::filter::{ALL_TIME_YEARS, DataFilter, DateInterval, DateRange};
use finboard::models::{Asset, AssetCategory, Transaction, TransactionCategory};
use rust_decimal::Decimal;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

fn days_ago(n: u64) -> NaiveDate {
    today().checked_sub_days(Days::new(n)).unwrap()
}

fn tx(payee: &str, date: NaiveDate) -> Transaction {
    Transaction::new(TransactionCategory::Food, Decimal::new(10, 0), date, payee)
}

#[test]
fn ranges_select_expected_records() {
    let txs = vec![
        tx("Today", today()),
        tx("Ten days", days_ago(10)),
        tx("Forty days", days_ago(40)),
    ];
    let payees = |range: DateRange| -> Vec<String> {
        DataFilter::new(range, "")
            .apply(&txs, today())
            .into_iter()
            .map(|t| t.payee.clone())
            .collect()
    };
    assert_eq!(payees(DateRange::Week), vec!["Today"]);
    assert_eq!(payees(DateRange::Month), vec!["Today", "Ten days"]);
    assert_eq!(
        payees(DateRange::Quarter),
        vec!["Today", "Ten days", "Forty days"]
    );
}

#[test]
fn interval_bounds_are_inclusive() {
    let week = DateRange::Week.interval(today());
    assert_eq!(week.end, today());
    assert_eq!(week.start, days_ago(7));
    assert!(week.contains(days_ago(7)));
    assert!(!week.contains(days_ago(8)));
    assert_eq!(DateRange::Year.interval(today()).start, days_ago(365));
}

#[test]
fn all_time_is_a_five_year_window() {
    assert_eq!(ALL_TIME_YEARS, 5);
    let interval = DateRange::AllTime.interval(today());
    let boundary = NaiveDate::from_ymd_opt(2020, 6, 15).unwrap();
    assert_eq!(interval.start, boundary);

    let txs = vec![
        tx("Recent", days_ago(3)),
        tx("Boundary", boundary),
        tx("Too old", boundary.pred_opt().unwrap()),
    ];
    let kept: Vec<&str> = DataFilter::new(DateRange::AllTime, "")
        .apply(&txs, today())
        .into_iter()
        .map(|t| t.payee.as_str())
        .collect();
    assert_eq!(kept, vec!["Recent", "Boundary"]);
}

#[test]
fn future_records_fall_outside_every_range() {
    let txs = vec![tx("Next week", today().checked_add_days(Days::new(7)).unwrap())];
    for range in DateRange::ALL {
        assert!(DataFilter::new(*range, "").apply(&txs, today()).is_empty());
    }
}

#[test]
fn search_is_case_insensitive_across_fields() {
    let txs = vec![
        tx("Blue Bottle Coffee", days_ago(1)).with_description("Morning coffee"),
        tx("Whole Foods", days_ago(2)).with_description("Weekly groceries"),
        tx("Shell", days_ago(3)).with_sub_category("Fuel"),
    ];
    let filter = DataFilter::new(DateRange::Month, "COFFEE");
    let hits = filter.apply(&txs, today());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].payee, "Blue Bottle Coffee");

    let by_sub_category = DataFilter::new(DateRange::Month, "fuel").apply(&txs, today());
    assert_eq!(by_sub_category.len(), 1);

    // category label is searchable too
    let by_category = DataFilter::new(DateRange::Month, "food").apply(&txs, today());
    assert_eq!(by_category.len(), 3);
}

#[test]
fn blank_query_matches_everything_in_range() {
    let txs = vec![tx("A", days_ago(1)), tx("B", days_ago(2))];
    let hits = DataFilter::new(DateRange::Week, "   ").apply(&txs, today());
    assert_eq!(hits.len(), 2);
}

#[test]
fn result_is_an_order_preserving_subsequence() {
    let txs: Vec<Transaction> = (0..20)
        .map(|i| {
            let payee = if i % 3 == 0 { "Match" } else { "Other" };
            tx(&format!("{payee} {i}"), days_ago((i * 7) as u64))
        })
        .collect();
    let filter = DataFilter::new(DateRange::Quarter, "match");
    let hits = filter.apply(&txs, today());

    let mut cursor = 0;
    for hit in &hits {
        let pos = txs[cursor..]
            .iter()
            .position(|t| t.id == hit.id)
            .expect("hit must come from the input after the previous hit");
        cursor += pos + 1;
    }
    assert!(hits.iter().all(|t| t.payee.starts_with("Match")));
    assert!(hits.iter().all(|t| filter.matches(*t, today())));
}

#[test]
fn assets_filter_on_last_updated_and_institution() {
    let assets = vec![
        Asset::new("Brokerage", AssetCategory::Stocks, Decimal::new(100, 0), days_ago(2))
            .with_institution("Fidelity"),
        Asset::new("Savings", AssetCategory::Cash, Decimal::new(50, 0), days_ago(200))
            .with_institution("Ally Bank"),
    ];
    let hits = DataFilter::new(DateRange::Year, "fidelity").apply(&assets, today());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Brokerage");
}

#[test]
fn interval_new_orders_its_bounds() {
    let a = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
    let b = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let interval = DateInterval::new(a, b);
    assert_eq!(interval.start, b);
    assert_eq!(interval.days().count(), 10);
}

#[test]
fn range_parsing_accepts_aliases() {
    assert_eq!(DateRange::parse("Week"), Some(DateRange::Week));
    assert_eq!(DateRange::parse("all-time"), Some(DateRange::AllTime));
    assert_eq!(DateRange::parse("90d"), Some(DateRange::Quarter));
    assert_eq!(DateRange::parse("fortnight"), None);
}
