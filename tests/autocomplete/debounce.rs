//! Keystrokes collapse into one trailing lookup.

use super::common::{advance, person_controller, DelayedStore};
use costar::FieldEvent;
use std::sync::Arc;

#[tokio::test(start_paused = true)]
async fn test_rapid_typing_issues_one_lookup() {
    let store = Arc::new(DelayedStore::new());
    let ac = person_controller(store.clone(), 200);

    ac.handle(FieldEvent::Input("to".into()));
    advance(50).await;
    ac.handle(FieldEvent::Input("tom".into()));
    advance(70).await;
    ac.handle(FieldEvent::Input("tom h".into()));

    // t=120: nothing sent yet
    assert!(store.terms().is_empty());

    // t=319: still quiet
    advance(199).await;
    assert!(store.terms().is_empty());

    // t=324: the last keystroke's lookup fired at t=320
    advance(5).await;
    assert_eq!(store.terms(), vec!["tom h"]);
    assert!(ac.state().is_open());
}

#[tokio::test(start_paused = true)]
async fn test_lookup_uses_text_at_fire_time() {
    let store = Arc::new(DelayedStore::new());
    let ac = person_controller(store.clone(), 200);

    ac.handle(FieldEvent::Input("meg".into()));
    advance(100).await;
    // Edited outside the controller before the timer fires.
    ac.field().set_text("  meg ryan  ");
    advance(200).await;

    assert_eq!(store.terms(), vec!["meg ryan"]);
}

#[tokio::test(start_paused = true)]
async fn test_short_input_cancels_pending_lookup() {
    let store = Arc::new(DelayedStore::new());
    let ac = person_controller(store.clone(), 200);

    ac.handle(FieldEvent::Input("tom".into()));
    advance(100).await;
    ac.handle(FieldEvent::Input("t".into()));
    advance(500).await;

    assert!(store.terms().is_empty());
    assert!(!ac.state().is_open());
}

#[tokio::test(start_paused = true)]
async fn test_whitespace_only_input_is_short() {
    let store = Arc::new(DelayedStore::new());
    let ac = person_controller(store.clone(), 200);

    ac.handle(FieldEvent::Input("  t   ".into()));
    advance(500).await;
    assert!(store.terms().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_text_shortened_before_fire_closes_list() {
    let store = Arc::new(DelayedStore::new());
    let ac = person_controller(store.clone(), 200);

    ac.handle(FieldEvent::Input("tom".into()));
    advance(250).await;
    assert!(ac.state().is_open());

    ac.handle(FieldEvent::Input("tom h".into()));
    advance(50).await;
    ac.field().set_text("t");
    advance(200).await;

    assert_eq!(store.terms(), vec!["tom"]);
    assert!(!ac.state().is_open());
    assert!(!ac.render_list().open);
}
