// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Records that carry a monetary amount.
pub trait Amounted {
    fn amount(&self) -> Decimal;
}

/// Records grouped by a closed category enum.
pub trait Categorized {
    type Category: Copy + Ord;
    fn category(&self) -> Self::Category;
}

/// Records the data filter can match on.
pub trait Filterable {
    /// Date checked against the filter's interval.
    fn record_date(&self) -> NaiveDate;
    /// Text fields matched by the search query.
    fn search_fields(&self) -> Vec<&str>;
}

macro_rules! labelled_enum {
    ($name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Case-insensitive lookup by label, ignoring spaces, dashes and underscores.
            pub fn parse(s: &str) -> Option<Self> {
                let wanted = normalize_label(s);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| normalize_label(v.label()) == wanted)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

fn normalize_label(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionCategory {
    Housing,
    Transportation,
    Food,
    Utilities,
    Healthcare,
    Entertainment,
    Shopping,
    Income,
    Savings,
    Other,
}

labelled_enum!(TransactionCategory {
    Housing => "Housing",
    Transportation => "Transportation",
    Food => "Food",
    Utilities => "Utilities",
    Healthcare => "Healthcare",
    Entertainment => "Entertainment",
    Shopping => "Shopping",
    Income => "Income",
    Savings => "Savings",
    Other => "Other",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Paid,
    Due,
    Late,
}

labelled_enum!(TransactionStatus {
    Paid => "Paid",
    Due => "Due",
    Late => "Late",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetCategory {
    Stocks,
    Bonds,
    Cash,
    RealEstate,
    Crypto,
    Retirement,
    Other,
}

labelled_enum!(AssetCategory {
    Stocks => "Stocks",
    Bonds => "Bonds",
    Cash => "Cash",
    RealEstate => "Real Estate",
    Crypto => "Crypto",
    Retirement => "Retirement",
    Other => "Other",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalCategory {
    EmergencyFund,
    Retirement,
    Home,
    Vehicle,
    Education,
    Vacation,
    Other,
}

labelled_enum!(GoalCategory {
    EmergencyFund => "Emergency Fund",
    Retirement => "Retirement",
    Home => "Home",
    Vehicle => "Vehicle",
    Education => "Education",
    Vacation => "Vacation",
    Other => "Other",
});

/// A single bill, purchase or paycheck.
///
/// `amount` is always a magnitude; whether it is money in or out is decided by
/// the category (`Income` flows in, everything else flows out).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub category: TransactionCategory,
    pub sub_category: String,
    pub amount: Decimal,
    pub due_date: NaiveDate,
    pub status: TransactionStatus,
    pub description: String,
    pub payee: String,
}

impl Transaction {
    pub fn new(
        category: TransactionCategory,
        amount: Decimal,
        due_date: NaiveDate,
        payee: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            category,
            sub_category: String::new(),
            amount: amount.abs(),
            due_date,
            status: TransactionStatus::Paid,
            description: String::new(),
            payee: payee.into(),
        }
    }

    pub fn with_status(mut self, status: TransactionStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_sub_category(mut self, sub_category: impl Into<String>) -> Self {
        self.sub_category = sub_category.into();
        self
    }

    pub fn is_income(&self) -> bool {
        self.category == TransactionCategory::Income
    }

    /// Positive for money in, negative for money out.
    pub fn signed_amount(&self) -> Decimal {
        if self.is_income() {
            self.amount
        } else {
            -self.amount
        }
    }
}

impl Amounted for Transaction {
    fn amount(&self) -> Decimal {
        self.amount
    }
}

impl Categorized for Transaction {
    type Category = TransactionCategory;
    fn category(&self) -> TransactionCategory {
        self.category
    }
}

impl Filterable for Transaction {
    fn record_date(&self) -> NaiveDate {
        self.due_date
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.description.as_str(),
            self.payee.as_str(),
            self.sub_category.as_str(),
            self.category.label(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: Uuid,
    pub name: String,
    pub category: AssetCategory,
    pub value: Decimal,
    pub institution: String,
    pub last_updated: NaiveDate,
}

impl Asset {
    pub fn new(
        name: impl Into<String>,
        category: AssetCategory,
        value: Decimal,
        last_updated: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category,
            value,
            institution: String::new(),
            last_updated,
        }
    }

    pub fn with_institution(mut self, institution: impl Into<String>) -> Self {
        self.institution = institution.into();
        self
    }
}

impl Amounted for Asset {
    fn amount(&self) -> Decimal {
        self.value
    }
}

impl Categorized for Asset {
    type Category = AssetCategory;
    fn category(&self) -> AssetCategory {
        self.category
    }
}

impl Filterable for Asset {
    fn record_date(&self) -> NaiveDate {
        self.last_updated
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.institution.as_str(),
            self.category.label(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: Uuid,
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub target_date: NaiveDate,
    pub category: GoalCategory,
}

impl Goal {
    pub fn new(
        name: impl Into<String>,
        category: GoalCategory,
        target_amount: Decimal,
        current_amount: Decimal,
        target_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            target_amount,
            current_amount,
            target_date,
            category,
        }
    }

    /// Share of the target reached, clamped to `[0, 1]`.
    ///
    /// A zero or negative target counts as no progress.
    pub fn progress(&self) -> Decimal {
        if self.target_amount <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        match self.current_amount.checked_div(self.target_amount) {
            Some(ratio) => ratio.clamp(Decimal::ZERO, Decimal::ONE),
            // overflow only happens for a huge positive balance over a tiny target
            None if self.current_amount > Decimal::ZERO => Decimal::ONE,
            None => Decimal::ZERO,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.progress() >= Decimal::ONE
    }

    pub fn remaining(&self) -> Decimal {
        (self.target_amount - self.current_amount).max(Decimal::ZERO)
    }
}

impl Amounted for Goal {
    fn amount(&self) -> Decimal {
        self.current_amount
    }
}

impl Categorized for Goal {
    type Category = GoalCategory;
    fn category(&self) -> GoalCategory {
        self.category
    }
}
