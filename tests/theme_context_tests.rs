// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use finboard::theme::{Theme, ThemeContext};

fn recorder(ctx: &ThemeContext) -> (Arc<Mutex<Vec<String>>>, finboard::theme::ThemeSubscription) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let sub = ctx.subscribe(move |theme| sink.lock().unwrap().push(theme.name.clone()));
    (seen, sub)
}

#[test]
fn default_context_uses_vibrant() {
    let ctx = ThemeContext::default();
    assert_eq!(*ctx.current(), Theme::vibrant());
}

#[test]
fn switching_back_and_forth_is_idempotent() {
    let ctx = ThemeContext::new(Theme::vibrant());
    let initial = (*ctx.current()).clone();

    ctx.set_theme(Theme::neutral());
    assert_eq!(ctx.current().name, "Neutral");
    ctx.set_theme(Theme::vibrant());

    assert_eq!(*ctx.current(), initial);
}

#[test]
fn subscribers_are_notified_synchronously() {
    let ctx = ThemeContext::new(Theme::vibrant());
    let (seen, _sub) = recorder(&ctx);

    ctx.set_theme(Theme::neutral());
    assert_eq!(*seen.lock().unwrap(), vec!["Neutral"]);

    // same theme again: nothing to repaint
    ctx.set_theme(Theme::neutral());
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[test]
fn nested_provider_overrides_only_its_subtree() {
    let root = ThemeContext::new(Theme::vibrant());
    let panel = root.provide(Theme::neutral());

    assert_eq!(root.current().name, "Vibrant");
    assert_eq!(panel.current().name, "Neutral");

    let (panel_seen, _sub) = recorder(&panel);
    root.set_theme(Theme::neutral());
    root.set_theme(Theme::vibrant());
    // the override shields the panel from its parent's switches
    assert!(panel_seen.lock().unwrap().is_empty());
    assert_eq!(panel.current().name, "Neutral");
}

#[test]
fn inheriting_scopes_follow_their_parent() {
    let root = ThemeContext::new(Theme::vibrant());
    let sidebar = root.inherit();
    let row = sidebar.inherit();
    let (row_seen, _sub) = recorder(&row);

    root.set_theme(Theme::neutral());
    assert_eq!(sidebar.current().name, "Neutral");
    assert_eq!(*row_seen.lock().unwrap(), vec!["Neutral"]);

    sidebar.set_theme(Theme::vibrant());
    assert_eq!(root.current().name, "Neutral");
    assert_eq!(row.current().name, "Vibrant");

    sidebar.clear_override();
    assert_eq!(row.current().name, "Neutral");
    assert_eq!(*row_seen.lock().unwrap(), vec!["Neutral", "Vibrant", "Neutral"]);
}

#[test]
fn dropping_subscription_stops_observation() {
    let ctx = ThemeContext::new(Theme::vibrant());
    let hits = Arc::new(AtomicUsize::new(0));
    let h = Arc::clone(&hits);
    let sub = ctx.subscribe(move |_| {
        h.fetch_add(1, Ordering::SeqCst);
    });

    ctx.set_theme(Theme::neutral());
    drop(sub);
    ctx.set_theme(Theme::vibrant());
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn clear_override_on_root_keeps_theme() {
    let root = ThemeContext::new(Theme::neutral());
    root.clear_override();
    assert_eq!(root.current().name, "Neutral");
}

#[test]
fn dropped_child_scopes_do_not_break_propagation() {
    let root = ThemeContext::new(Theme::vibrant());
    {
        let _transient = root.inherit();
    }
    let (seen, _sub) = recorder(&root);
    root.set_theme(Theme::neutral());
    assert_eq!(*seen.lock().unwrap(), vec!["Neutral"]);
}

#[test]
fn context_with_empty_palette_still_renders_charts() {
    let ctx = ThemeContext::new(Theme::vibrant());
    let mut bare = Theme::neutral();
    bare.colors.chart.clear();
    ctx.set_theme(bare);
    let current = ctx.current();
    assert_eq!(current.chart_color(0), current.colors.primary);
}
