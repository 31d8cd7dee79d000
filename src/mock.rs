// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Randomized demo data.
//!
//! Seeded generators are reproducible down to record ids, which is what the
//! tests and the `--seed` flag rely on.

use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use uuid::{Builder, Uuid};

use crate::models::{
    Asset, AssetCategory, Goal, GoalCategory, Transaction, TransactionCategory, TransactionStatus,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockSizes {
    pub transactions: usize,
    pub assets: usize,
    pub goals: usize,
}

impl Default for MockSizes {
    fn default() -> Self {
        Self {
            transactions: 60,
            assets: 8,
            goals: 5,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MockData {
    pub transactions: Vec<Transaction>,
    pub assets: Vec<Asset>,
    pub goals: Vec<Goal>,
}

struct TxTemplate {
    category: TransactionCategory,
    sub_categories: &'static [&'static str],
    payees: &'static [&'static str],
    descriptions: &'static [&'static str],
    /// Amount range in cents.
    cents: (i64, i64),
    weight: u32,
}

const TX_TEMPLATES: &[TxTemplate] = &[
    TxTemplate {
        category: TransactionCategory::Housing,
        sub_categories: &["Rent", "Mortgage", "Repairs"],
        payees: &["Parkview Apartments", "First Home Lending", "HandyPro Services"],
        descriptions: &["Monthly rent", "Mortgage payment", "Plumbing repair"],
        cents: (80_000, 250_000),
        weight: 2,
    },
    TxTemplate {
        category: TransactionCategory::Transportation,
        sub_categories: &["Fuel", "Transit", "Car Insurance"],
        payees: &["Shell", "Metro Transit", "SafeDrive Insurance"],
        descriptions: &["Fuel fill-up", "Monthly transit pass", "Auto insurance premium"],
        cents: (2_500, 25_000),
        weight: 4,
    },
    TxTemplate {
        category: TransactionCategory::Food,
        sub_categories: &["Groceries", "Restaurants", "Coffee"],
        payees: &["Whole Foods", "Trader Joe's", "Blue Bottle Coffee", "Chipotle"],
        descriptions: &["Weekly groceries", "Dinner out", "Morning coffee"],
        cents: (450, 18_000),
        weight: 8,
    },
    TxTemplate {
        category: TransactionCategory::Utilities,
        sub_categories: &["Electricity", "Water", "Internet", "Phone"],
        payees: &["City Power & Light", "Municipal Water", "Comcast", "Verizon"],
        descriptions: &["Electric bill", "Water bill", "Internet service", "Phone plan"],
        cents: (3_000, 22_000),
        weight: 4,
    },
    TxTemplate {
        category: TransactionCategory::Healthcare,
        sub_categories: &["Pharmacy", "Doctor", "Dental"],
        payees: &["CVS Pharmacy", "Bay Medical Group", "Bright Smiles Dental"],
        descriptions: &["Prescription refill", "Doctor visit copay", "Dental cleaning"],
        cents: (1_500, 30_000),
        weight: 2,
    },
    TxTemplate {
        category: TransactionCategory::Entertainment,
        sub_categories: &["Streaming", "Movies", "Concerts"],
        payees: &["Netflix", "Spotify", "AMC Theatres", "Ticketmaster"],
        descriptions: &["Streaming subscription", "Movie night", "Concert tickets"],
        cents: (999, 25_000),
        weight: 4,
    },
    TxTemplate {
        category: TransactionCategory::Shopping,
        sub_categories: &["Clothing", "Electronics", "Home Goods"],
        payees: &["Amazon", "Target", "Apple Store", "IKEA"],
        descriptions: &["Online order", "Household supplies", "New headphones"],
        cents: (1_500, 60_000),
        weight: 5,
    },
    TxTemplate {
        category: TransactionCategory::Income,
        sub_categories: &["Salary", "Freelance", "Dividends"],
        payees: &["Acme Corp Payroll", "Upwork", "Vanguard"],
        descriptions: &["Paycheck", "Freelance project", "Quarterly dividend"],
        cents: (50_000, 650_000),
        weight: 4,
    },
    TxTemplate {
        category: TransactionCategory::Savings,
        sub_categories: &["Emergency Fund", "Brokerage", "Retirement"],
        payees: &["Ally Bank", "Fidelity", "Vanguard"],
        descriptions: &["Savings transfer", "Brokerage deposit", "IRA contribution"],
        cents: (10_000, 100_000),
        weight: 2,
    },
    TxTemplate {
        category: TransactionCategory::Other,
        sub_categories: &["Gifts", "Charity", "Fees"],
        payees: &["Red Cross", "Etsy", "Bank Service Fee"],
        descriptions: &["Charitable donation", "Birthday gift", "Account fee"],
        cents: (500, 20_000),
        weight: 1,
    },
];

struct AssetTemplate {
    category: AssetCategory,
    names: &'static [&'static str],
    institutions: &'static [&'static str],
    cents: (i64, i64),
}

const ASSET_TEMPLATES: &[AssetTemplate] = &[
    AssetTemplate {
        category: AssetCategory::Stocks,
        names: &["Total Market Index", "Tech Growth Portfolio", "Dividend Stocks"],
        institutions: &["Vanguard", "Fidelity", "Charles Schwab"],
        cents: (500_000, 12_000_000),
    },
    AssetTemplate {
        category: AssetCategory::Bonds,
        names: &["Treasury Bonds", "Municipal Bond Fund", "Corporate Bond ETF"],
        institutions: &["TreasuryDirect", "Vanguard", "iShares"],
        cents: (200_000, 5_000_000),
    },
    AssetTemplate {
        category: AssetCategory::Cash,
        names: &["Checking Account", "High-Yield Savings", "Money Market"],
        institutions: &["Chase", "Ally Bank", "Marcus"],
        cents: (50_000, 3_000_000),
    },
    AssetTemplate {
        category: AssetCategory::RealEstate,
        names: &["Primary Residence", "Rental Property", "REIT Holdings"],
        institutions: &["Zillow Estimate", "Redfin Estimate", "Fundrise"],
        cents: (5_000_000, 90_000_000),
    },
    AssetTemplate {
        category: AssetCategory::Crypto,
        names: &["Bitcoin", "Ethereum"],
        institutions: &["Coinbase", "Kraken"],
        cents: (10_000, 2_500_000),
    },
    AssetTemplate {
        category: AssetCategory::Retirement,
        names: &["401(k)", "Roth IRA", "Traditional IRA"],
        institutions: &["Fidelity", "Vanguard", "T. Rowe Price"],
        cents: (1_000_000, 40_000_000),
    },
];

struct GoalTemplate {
    category: GoalCategory,
    names: &'static [&'static str],
    cents: (i64, i64),
}

const GOAL_TEMPLATES: &[GoalTemplate] = &[
    GoalTemplate {
        category: GoalCategory::EmergencyFund,
        names: &["Emergency Fund", "Rainy Day Fund"],
        cents: (500_000, 3_000_000),
    },
    GoalTemplate {
        category: GoalCategory::Retirement,
        names: &["Retire Early", "Retirement Nest Egg"],
        cents: (10_000_000, 100_000_000),
    },
    GoalTemplate {
        category: GoalCategory::Home,
        names: &["House Down Payment", "Kitchen Remodel"],
        cents: (2_000_000, 12_000_000),
    },
    GoalTemplate {
        category: GoalCategory::Vehicle,
        names: &["New Car", "Electric Bike"],
        cents: (200_000, 4_500_000),
    },
    GoalTemplate {
        category: GoalCategory::Education,
        names: &["College Fund", "Coding Bootcamp"],
        cents: (500_000, 8_000_000),
    },
    GoalTemplate {
        category: GoalCategory::Vacation,
        names: &["Japan Trip", "Summer Vacation"],
        cents: (150_000, 1_500_000),
    },
];

/// Days of history covered by generated transactions.
const HISTORY_DAYS: u64 = 120;
/// Transactions may be scheduled up to this many days ahead.
const LOOKAHEAD_DAYS: u64 = 30;

pub struct MockGenerator {
    rng: StdRng,
    today: NaiveDate,
    sizes: MockSizes,
}

impl MockGenerator {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            today,
            sizes: MockSizes::default(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_sizes(mut self, sizes: MockSizes) -> Self {
        self.sizes = sizes;
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn generate(&mut self) -> MockData {
        let data = MockData {
            transactions: (0..self.sizes.transactions)
                .map(|_| self.transaction())
                .collect(),
            assets: (0..self.sizes.assets).map(|_| self.asset()).collect(),
            goals: (0..self.sizes.goals).map(|_| self.goal()).collect(),
        };
        tracing::debug!(
            transactions = data.transactions.len(),
            assets = data.assets.len(),
            goals = data.goals.len(),
            "generated mock data"
        );
        data
    }

    pub fn transaction(&mut self) -> Transaction {
        let template = self.pick_transaction_template();
        let offset = self.rng.random_range(0..=HISTORY_DAYS + LOOKAHEAD_DAYS) as i64
            - LOOKAHEAD_DAYS as i64;
        let due_date = self.shift(offset);
        let status = if due_date > self.today {
            TransactionStatus::Due
        } else if (1..=14).contains(&offset) && self.rng.random_bool(0.25) {
            TransactionStatus::Late
        } else {
            TransactionStatus::Paid
        };
        Transaction {
            id: self.uuid(),
            category: template.category,
            sub_category: self.pick(template.sub_categories).to_string(),
            amount: self.cents(template.cents),
            due_date,
            status,
            description: self.pick(template.descriptions).to_string(),
            payee: self.pick(template.payees).to_string(),
        }
    }

    pub fn asset(&mut self) -> Asset {
        let template = ASSET_TEMPLATES
            .choose(&mut self.rng)
            .unwrap_or(&ASSET_TEMPLATES[0]);
        let offset = self.rng.random_range(0..=30);
        Asset {
            id: self.uuid(),
            name: self.pick(template.names).to_string(),
            category: template.category,
            value: self.cents(template.cents),
            institution: self.pick(template.institutions).to_string(),
            last_updated: self.shift(offset),
        }
    }

    pub fn goal(&mut self) -> Goal {
        let template = GOAL_TEMPLATES
            .choose(&mut self.rng)
            .unwrap_or(&GOAL_TEMPLATES[0]);
        let target = self.cents(template.cents);
        // roughly one goal in five is already met
        let current = if self.rng.random_bool(0.2) {
            target
        } else {
            let pct = self.rng.random_range(0..100);
            (target * Decimal::new(pct, 2)).round_dp(2)
        };
        let months_ahead = self.rng.random_range(3..=60) as i64;
        Goal {
            id: self.uuid(),
            name: self.pick(template.names).to_string(),
            target_amount: target,
            current_amount: current,
            target_date: self.shift(-months_ahead * 30),
            category: template.category,
        }
    }

    fn pick_transaction_template(&mut self) -> &'static TxTemplate {
        let total: u32 = TX_TEMPLATES.iter().map(|t| t.weight).sum();
        let mut roll = self.rng.random_range(0..total);
        for template in TX_TEMPLATES {
            if roll < template.weight {
                return template;
            }
            roll -= template.weight;
        }
        &TX_TEMPLATES[0]
    }

    fn pick(&mut self, options: &'static [&'static str]) -> &'static str {
        options.choose(&mut self.rng).copied().unwrap_or_default()
    }

    fn cents(&mut self, (lo, hi): (i64, i64)) -> Decimal {
        Decimal::new(self.rng.random_range(lo..=hi), 2)
    }

    /// `today - offset` days; negative offsets move into the future.
    fn shift(&self, offset: i64) -> NaiveDate {
        let moved = if offset >= 0 {
            self.today.checked_sub_days(Days::new(offset as u64))
        } else {
            self.today.checked_add_days(Days::new(offset.unsigned_abs()))
        };
        moved.unwrap_or(self.today)
    }

    fn uuid(&mut self) -> Uuid {
        Builder::from_random_bytes(self.rng.random()).into_uuid()
    }
}
