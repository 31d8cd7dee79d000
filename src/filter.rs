// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::Filterable;

/// "All time" is a rolling window, not an unbounded range.
pub const ALL_TIME_YEARS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateRange {
    Week,
    #[default]
    Month,
    Quarter,
    Year,
    AllTime,
}

impl DateRange {
    pub const ALL: &'static [DateRange] = &[
        DateRange::Week,
        DateRange::Month,
        DateRange::Quarter,
        DateRange::Year,
        DateRange::AllTime,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DateRange::Week => "week",
            DateRange::Month => "month",
            DateRange::Quarter => "quarter",
            DateRange::Year => "year",
            DateRange::AllTime => "all",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "week" | "7d" => Some(DateRange::Week),
            "month" | "30d" => Some(DateRange::Month),
            "quarter" | "90d" => Some(DateRange::Quarter),
            "year" | "365d" => Some(DateRange::Year),
            "all" | "alltime" | "all-time" | "all_time" => Some(DateRange::AllTime),
            _ => None,
        }
    }

    /// Inclusive interval ending at `today`.
    ///
    /// Falls back to a single-day interval if the start date is not representable.
    pub fn interval(self, today: NaiveDate) -> DateInterval {
        let start = match self {
            DateRange::Week => today.checked_sub_days(Days::new(7)),
            DateRange::Month => today.checked_sub_days(Days::new(30)),
            DateRange::Quarter => today.checked_sub_days(Days::new(90)),
            DateRange::Year => today.checked_sub_days(Days::new(365)),
            DateRange::AllTime => today.checked_sub_months(Months::new(ALL_TIME_YEARS * 12)),
        };
        DateInterval {
            start: start.unwrap_or(today),
            end: today,
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateInterval {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateInterval {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DataFilter {
    pub date_range: DateRange,
    pub search_query: String,
}

impl DataFilter {
    pub fn new(date_range: DateRange, search_query: impl Into<String>) -> Self {
        Self {
            date_range,
            search_query: search_query.into(),
        }
    }

    pub fn matches<R: Filterable>(&self, record: &R, today: NaiveDate) -> bool {
        let interval = self.date_range.interval(today);
        self.matches_in(record, &interval, &self.normalized_query())
    }

    /// Records inside the date window that match the search query, in input order.
    pub fn apply<'a, R: Filterable>(&self, records: &'a [R], today: NaiveDate) -> Vec<&'a R> {
        let interval = self.date_range.interval(today);
        let query = self.normalized_query();
        records
            .iter()
            .filter(|r| self.matches_in(*r, &interval, &query))
            .collect()
    }

    fn normalized_query(&self) -> String {
        self.search_query.trim().to_lowercase()
    }

    fn matches_in<R: Filterable>(&self, record: &R, interval: &DateInterval, query: &str) -> bool {
        if !interval.contains(record.record_date()) {
            return false;
        }
        query.is_empty()
            || record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(query))
    }
}
