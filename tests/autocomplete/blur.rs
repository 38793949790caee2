//! Blur closes after a grace period that still allows a pointer selection.

use super::common::{advance, person_controller, DelayedStore};
use costar::FieldEvent;
use std::sync::Arc;

async fn open_on_tom() -> costar::Autocomplete {
    let ac = person_controller(Arc::new(DelayedStore::new()), 0);
    ac.handle(FieldEvent::Input("tom".into()));
    advance(10).await;
    ac
}

#[tokio::test(start_paused = true)]
async fn test_blur_closes_after_grace() {
    let ac = open_on_tom().await;
    ac.handle(FieldEvent::Blur);

    advance(100).await;
    assert!(ac.state().is_open());

    advance(60).await;
    assert!(!ac.state().is_open());
}

#[tokio::test(start_paused = true)]
async fn test_click_during_grace_still_commits() {
    let ac = open_on_tom().await;
    ac.handle(FieldEvent::Blur);
    advance(50).await;

    assert!(ac.handle(FieldEvent::PointerDown(0)).is_handled());
    assert_eq!(ac.field().stable_id(), Some("nm0000158".into()));
}

#[tokio::test(start_paused = true)]
async fn test_refocus_cancels_blur() {
    let ac = open_on_tom().await;
    ac.handle(FieldEvent::Blur);
    advance(50).await;
    ac.handle(FieldEvent::Focus);
    advance(500).await;

    assert!(ac.state().is_open());
}
