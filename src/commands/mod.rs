// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod assets;
pub mod chart;
pub mod config;
pub mod doctor;
pub mod goals;
pub mod summary;
pub mod theme;
pub mod transactions;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::config::Config;
use crate::filter::DateRange;
use crate::mock::MockGenerator;
use crate::store::FinanceStore;
use crate::theme::ThemeContext;
use crate::utils::{parse_date, parse_range, parse_theme};

/// Everything a command handler needs: data, theme and display settings.
pub struct Session {
    pub store: FinanceStore,
    pub theme: ThemeContext,
    pub currency: String,
    pub default_range: DateRange,
}

impl Session {
    /// Applies global CLI overrides on top of `config` and generates the data.
    pub fn from_matches(mut config: Config, m: &clap::ArgMatches) -> Result<Self> {
        if let Some(seed) = m.get_one::<u64>("seed") {
            config.seed = Some(*seed);
        }
        if let Some(name) = m.get_one::<String>("theme") {
            config.theme = parse_theme(name)?;
            config.theme_file = None;
        }
        if let Some(path) = m.get_one::<String>("theme-file") {
            config.theme_file = Some(path.into());
        }
        if let Some(ccy) = m.get_one::<String>("currency") {
            config.currency = ccy.trim().to_uppercase();
        }
        let today = match m.get_one::<String>("today") {
            Some(s) => parse_date(s)?,
            None => chrono::Local::now().date_naive(),
        };
        Self::new(&config, today)
    }

    pub fn new(config: &Config, today: NaiveDate) -> Result<Self> {
        let theme = config
            .resolve_theme()
            .context("Failed to load theme")?;
        let mut generator = MockGenerator::new(today).with_sizes(config.mock_sizes());
        if let Some(seed) = config.seed {
            generator = generator.with_seed(seed);
        }
        tracing::info!(theme = %theme.name, seed = ?config.seed, %today, "session ready");
        Ok(Self {
            store: FinanceStore::new(generator),
            theme: ThemeContext::new(theme),
            currency: config.currency.clone(),
            default_range: config.default_range,
        })
    }

    pub fn today(&self) -> NaiveDate {
        self.store.today()
    }

    /// `--range` when given, else the configured default.
    pub fn range_arg(&self, sub: &clap::ArgMatches) -> Result<DateRange> {
        match sub.get_one::<String>("range") {
            Some(s) => parse_range(s),
            None => Ok(self.default_range),
        }
    }
}
