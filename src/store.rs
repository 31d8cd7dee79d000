// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! In-memory finance state with an update-and-notify contract.
//!
//! Every action produces a fresh [`FinanceState`] that replaces the previous
//! snapshot wholesale, so a reader holding an `Arc<FinanceState>` never sees a
//! partially applied change.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::aggregate;
use crate::filter::DataFilter;
use crate::mock::{MockData, MockGenerator};
use crate::models::{Asset, AssetCategory, Goal, Transaction};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinanceState {
    pub transactions: Vec<Transaction>,
    pub assets: Vec<Asset>,
    pub goals: Vec<Goal>,
    pub filter: DataFilter,
}

impl From<MockData> for FinanceState {
    fn from(data: MockData) -> Self {
        Self {
            transactions: data.transactions,
            assets: data.assets,
            goals: data.goals,
            filter: DataFilter::default(),
        }
    }
}

impl FinanceState {
    pub fn total_assets(&self) -> Decimal {
        aggregate::total_of(&self.assets, |a| a.value)
    }

    pub fn total_income(&self) -> Decimal {
        aggregate::total_income(&self.transactions)
    }

    pub fn total_expenses(&self) -> Decimal {
        aggregate::total_expenses(&self.transactions)
    }

    pub fn net_cash_flow(&self) -> Decimal {
        aggregate::net_cash_flow(&self.transactions)
    }

    pub fn completed_goals(&self) -> usize {
        aggregate::completed_goals(&self.goals)
    }

    pub fn average_goal_progress(&self) -> Decimal {
        aggregate::average_goal_progress(&self.goals)
    }

    pub fn aggregated_assets(&self) -> BTreeMap<AssetCategory, Decimal> {
        aggregate::sum_by_category(&self.assets)
    }

    pub fn filtered_transactions(&self, today: NaiveDate) -> Vec<&Transaction> {
        self.filter.apply(&self.transactions, today)
    }

    pub fn filtered_assets(&self, today: NaiveDate) -> Vec<&Asset> {
        self.filter.apply(&self.assets, today)
    }

    pub fn summary(&self) -> Summary {
        Summary {
            total_assets: self.total_assets(),
            total_income: self.total_income(),
            total_expenses: self.total_expenses(),
            net_cash_flow: self.net_cash_flow(),
            goals: self.goals.len(),
            completed_goals: self.completed_goals(),
            average_goal_progress: self.average_goal_progress().round_dp(4),
        }
    }
}

/// Dashboard headline figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_assets: Decimal,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub net_cash_flow: Decimal,
    pub goals: usize,
    pub completed_goals: usize,
    pub average_goal_progress: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddTransaction(Transaction),
    UpdateTransaction(Transaction),
    DeleteTransaction(Uuid),
    AddAsset(Asset),
    UpdateAsset(Asset),
    DeleteAsset(Uuid),
    AddGoal(Goal),
    UpdateGoal(Goal),
    UpdateGoalProgress { id: Uuid, current_amount: Decimal },
    DeleteGoal(Uuid),
    SetFilter(DataFilter),
    /// Replace all records with freshly generated demo data.
    Refresh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&FinanceState)>;

pub struct FinanceStore {
    state: Arc<FinanceState>,
    generator: MockGenerator,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_listener: u64,
}

impl FinanceStore {
    /// Store seeded with one batch of generated data.
    pub fn new(mut generator: MockGenerator) -> Self {
        let state = FinanceState::from(generator.generate());
        Self::with_state(generator, state)
    }

    pub fn with_state(generator: MockGenerator, state: FinanceState) -> Self {
        Self {
            state: Arc::new(state),
            generator,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Current snapshot. Cheap to clone and safe to hold across dispatches.
    pub fn state(&self) -> Arc<FinanceState> {
        Arc::clone(&self.state)
    }

    pub fn today(&self) -> NaiveDate {
        self.generator.today()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&FinanceState) + 'static,
    {
        let id = SubscriptionId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(sid, _)| *sid != id);
    }

    /// Applies `action`. Listeners run only if the state changed; actions
    /// naming an unknown id are ignored.
    pub fn dispatch(&mut self, action: Action) {
        let next = match self.reduce(action) {
            Some(next) => next,
            None => return,
        };
        self.state = Arc::new(next);
        for (_, listener) in &self.listeners {
            listener(&self.state);
        }
    }

    fn reduce(&mut self, action: Action) -> Option<FinanceState> {
        tracing::debug!(?action, "dispatch");
        let mut next = (*self.state).clone();
        match action {
            Action::AddTransaction(t) => next.transactions.push(magnitude(t)),
            Action::UpdateTransaction(t) => {
                let t = magnitude(t);
                let id = t.id;
                replace_by_id(&mut next.transactions, id, |r| r.id, t)?
            }
            Action::DeleteTransaction(id) => remove_by_id(&mut next.transactions, id, |r| r.id)?,
            Action::AddAsset(a) => next.assets.push(a),
            Action::UpdateAsset(a) => {
                let id = a.id;
                replace_by_id(&mut next.assets, id, |r| r.id, a)?
            }
            Action::DeleteAsset(id) => remove_by_id(&mut next.assets, id, |r| r.id)?,
            Action::AddGoal(g) => next.goals.push(g),
            Action::UpdateGoal(g) => {
                let id = g.id;
                replace_by_id(&mut next.goals, id, |r| r.id, g)?
            }
            Action::UpdateGoalProgress { id, current_amount } => {
                let Some(goal) = next.goals.iter_mut().find(|g| g.id == id) else {
                    tracing::debug!(%id, "goal not found, progress update ignored");
                    return None;
                };
                goal.current_amount = current_amount.max(Decimal::ZERO);
            }
            Action::DeleteGoal(id) => remove_by_id(&mut next.goals, id, |r| r.id)?,
            Action::SetFilter(filter) => {
                if next.filter == filter {
                    return None;
                }
                next.filter = filter;
            }
            Action::Refresh => {
                let data = self.generator.generate();
                next.transactions = data.transactions;
                next.assets = data.assets;
                next.goals = data.goals;
            }
        }
        Some(next)
    }

    pub fn add_transaction(&mut self, transaction: Transaction) {
        self.dispatch(Action::AddTransaction(transaction));
    }

    pub fn update_transaction(&mut self, transaction: Transaction) {
        self.dispatch(Action::UpdateTransaction(transaction));
    }

    pub fn delete_transaction(&mut self, id: Uuid) {
        self.dispatch(Action::DeleteTransaction(id));
    }

    pub fn add_asset(&mut self, asset: Asset) {
        self.dispatch(Action::AddAsset(asset));
    }

    pub fn update_asset(&mut self, asset: Asset) {
        self.dispatch(Action::UpdateAsset(asset));
    }

    pub fn delete_asset(&mut self, id: Uuid) {
        self.dispatch(Action::DeleteAsset(id));
    }

    pub fn add_goal(&mut self, goal: Goal) {
        self.dispatch(Action::AddGoal(goal));
    }

    pub fn update_goal(&mut self, goal: Goal) {
        self.dispatch(Action::UpdateGoal(goal));
    }

    pub fn update_goal_progress(&mut self, id: Uuid, current_amount: Decimal) {
        self.dispatch(Action::UpdateGoalProgress { id, current_amount });
    }

    pub fn delete_goal(&mut self, id: Uuid) {
        self.dispatch(Action::DeleteGoal(id));
    }

    pub fn set_filter(&mut self, filter: DataFilter) {
        self.dispatch(Action::SetFilter(filter));
    }

    pub fn refresh(&mut self) {
        self.dispatch(Action::Refresh);
    }
}

/// Direction comes from the category, so stored amounts never carry a sign.
fn magnitude(mut t: Transaction) -> Transaction {
    t.amount = t.amount.abs();
    t
}

fn replace_by_id<R>(records: &mut [R], id: Uuid, id_of: fn(&R) -> Uuid, record: R) -> Option<()> {
    match records.iter_mut().find(|r| id_of(r) == id) {
        Some(slot) => {
            *slot = record;
            Some(())
        }
        None => {
            tracing::debug!(%id, "record not found, update ignored");
            None
        }
    }
}

fn remove_by_id<R>(records: &mut Vec<R>, id: Uuid, id_of: fn(&R) -> Uuid) -> Option<()> {
    let before = records.len();
    records.retain(|r| id_of(r) != id);
    if records.len() == before {
        tracing::debug!(%id, "record not found, delete ignored");
        return None;
    }
    Some(())
}
