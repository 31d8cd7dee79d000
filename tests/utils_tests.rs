// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::str::FromStr;

use chrono::NaiveDate;
use finboard::aggregate::Bucketing;
use finboard::filter::DateRange;
use finboard::models::TransactionStatus;
use finboard::theme::ThemeVariant;
use finboard::utils::*;
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[test]
fn money_formatting() {
    assert_eq!(fmt_money(&dec("1234.5"), "USD"), "$1,234.50");
    assert_eq!(fmt_money(&dec("-12"), "usd"), "-$12.00");
    assert_eq!(fmt_money(&Decimal::ZERO, "USD"), "$0.00");
    assert_eq!(fmt_money(&dec("1234567.891"), "USD"), "$1,234,567.89");
    assert_eq!(fmt_money(&dec("999.999"), "GBP"), "£1,000.00");
    assert_eq!(fmt_money(&dec("12"), "CHF"), "CHF 12.00");
    assert_eq!(fmt_money(&dec("-0.001"), "EUR"), "€0.00");
}

#[test]
fn percent_formatting() {
    assert_eq!(fmt_percent(&dec("0.25")), "25%");
    assert_eq!(fmt_percent(&Decimal::ONE), "100%");
    assert_eq!(fmt_percent(&Decimal::ZERO), "0%");
}

#[test]
fn argument_parsers() {
    assert_eq!(
        parse_date("2025-02-01").unwrap(),
        NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()
    );
    assert!(parse_date("02/01/2025").is_err());
    assert_eq!(parse_range("all").unwrap(), DateRange::AllTime);
    assert!(parse_range("decade").is_err());
    assert_eq!(parse_bucketing("week").unwrap(), Bucketing::Week);
    assert_eq!(parse_theme("NEUTRAL").unwrap(), ThemeVariant::Neutral);
    assert_eq!(parse_status("late").unwrap(), TransactionStatus::Late);
    assert!(parse_status("overdue").is_err());
}
