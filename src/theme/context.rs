// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Scoped theme propagation.
//!
//! A [`ThemeContext`] is a handle to one scope in a tree of scopes. The root
//! always holds a theme; nested scopes either override it ([`ThemeContext::provide`])
//! or inherit from their parent ([`ThemeContext::inherit`]). Changing a scope's
//! theme notifies its subscribers, and those of every inheriting descendant,
//! before `set_theme` returns.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, Weak};

use super::Theme;

type Listener = Arc<dyn Fn(&Theme) + Send + Sync>;

struct Scope {
    parent: Option<Arc<Scope>>,
    theme: RwLock<Option<Arc<Theme>>>,
    listeners: Mutex<Vec<(u64, Listener)>>,
    children: Mutex<Vec<Weak<Scope>>>,
    next_listener: AtomicU64,
}

impl Scope {
    fn new(parent: Option<Arc<Scope>>, theme: Option<Theme>) -> Arc<Self> {
        Arc::new(Self {
            parent,
            theme: RwLock::new(theme.map(Arc::new)),
            listeners: Mutex::new(Vec::new()),
            children: Mutex::new(Vec::new()),
            next_listener: AtomicU64::new(0),
        })
    }

    fn overrides(&self) -> bool {
        self.theme
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    fn effective(&self) -> Arc<Theme> {
        if let Some(theme) = self
            .theme
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            return Arc::clone(theme);
        }
        match &self.parent {
            Some(parent) => parent.effective(),
            None => Arc::new(Theme::default()),
        }
    }

    /// Calls this scope's listeners, then recurses into children that inherit.
    fn notify(&self) {
        let theme = self.effective();
        let listeners: Vec<Listener> = lock(&self.listeners)
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();
        for listener in listeners {
            listener(&theme);
        }

        let children: Vec<Arc<Scope>> = {
            let mut children = lock(&self.children);
            children.retain(|c| c.strong_count() > 0);
            children.iter().filter_map(Weak::upgrade).collect()
        };
        for child in children {
            if !child.overrides() {
                child.notify();
            }
        }
    }
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Clone)]
pub struct ThemeContext {
    scope: Arc<Scope>,
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl std::fmt::Debug for ThemeContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeContext")
            .field("theme", &self.current().name)
            .field("overrides", &self.scope.overrides())
            .finish()
    }
}

impl ThemeContext {
    /// Creates a root scope.
    pub fn new(theme: Theme) -> Self {
        Self {
            scope: Scope::new(None, Some(theme)),
        }
    }

    pub fn current(&self) -> Arc<Theme> {
        self.scope.effective()
    }

    /// Replaces this scope's theme. Subscribers are notified only if the
    /// effective theme actually changed.
    pub fn set_theme(&self, theme: Theme) {
        let changed = *self.current() != theme;
        *self
            .scope
            .theme
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(theme));
        if changed {
            tracing::debug!(theme = %self.current().name, "theme switched");
            self.scope.notify();
        }
    }

    /// Drops this scope's own theme so it follows its parent again.
    /// No-op on the root scope.
    pub fn clear_override(&self) {
        if self.scope.parent.is_none() {
            return;
        }
        let before = self.current();
        self.scope
            .theme
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if *before != *self.current() {
            self.scope.notify();
        }
    }

    /// Nested scope with its own theme. The parent keeps its value.
    pub fn provide(&self, theme: Theme) -> ThemeContext {
        self.child(Some(theme))
    }

    /// Nested scope that follows this one until it sets its own theme.
    pub fn inherit(&self) -> ThemeContext {
        self.child(None)
    }

    fn child(&self, theme: Option<Theme>) -> ThemeContext {
        let scope = Scope::new(Some(Arc::clone(&self.scope)), theme);
        lock(&self.scope.children).push(Arc::downgrade(&scope));
        ThemeContext { scope }
    }

    /// Registers `listener` for theme changes visible from this scope.
    /// Observation stops when the returned handle is dropped.
    pub fn subscribe<F>(&self, listener: F) -> ThemeSubscription
    where
        F: Fn(&Theme) + Send + Sync + 'static,
    {
        let id = self.scope.next_listener.fetch_add(1, Ordering::Relaxed);
        lock(&self.scope.listeners).push((id, Arc::new(listener)));
        ThemeSubscription {
            scope: Arc::downgrade(&self.scope),
            id,
        }
    }
}

/// Keeps a theme listener registered while alive.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct ThemeSubscription {
    scope: Weak<Scope>,
    id: u64,
}

impl Drop for ThemeSubscription {
    fn drop(&mut self) {
        if let Some(scope) = self.scope.upgrade() {
            lock(&scope.listeners).retain(|(id, _)| *id != self.id);
        }
    }
}
