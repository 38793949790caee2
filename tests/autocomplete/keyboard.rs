//! Keyboard and pointer navigation.

use super::common::{advance, person_controller, DelayedStore};
use costar::{EventOutcome, FieldEvent, Key};
use std::sync::Arc;

async fn open_on_tom() -> costar::Autocomplete {
    let ac = person_controller(Arc::new(DelayedStore::new()), 0);
    ac.handle(FieldEvent::Input("tom".into()));
    advance(10).await;
    assert_eq!(ac.state().items().len(), 2);
    ac
}

#[tokio::test(start_paused = true)]
async fn test_arrows_cycle_through_items() {
    let ac = open_on_tom().await;

    ac.handle(FieldEvent::Key(Key::ArrowDown));
    assert_eq!(ac.state().active(), Some(0));
    ac.handle(FieldEvent::Key(Key::ArrowDown));
    assert_eq!(ac.state().active(), Some(1));
    ac.handle(FieldEvent::Key(Key::ArrowDown));
    assert_eq!(ac.state().active(), Some(0));
    ac.handle(FieldEvent::Key(Key::ArrowUp));
    assert_eq!(ac.state().active(), Some(1));
}

#[tokio::test(start_paused = true)]
async fn test_arrow_up_from_nothing_selects_last() {
    let ac = open_on_tom().await;
    ac.handle(FieldEvent::Key(Key::ArrowUp));
    assert_eq!(ac.state().active(), Some(1));
}

#[tokio::test(start_paused = true)]
async fn test_arrows_ignored_while_closed() {
    let ac = person_controller(Arc::new(DelayedStore::new()), 0);
    assert_eq!(ac.handle(FieldEvent::Key(Key::ArrowDown)), EventOutcome::Ignored);
    assert_eq!(ac.state().active(), None);
}

#[tokio::test(start_paused = true)]
async fn test_render_list_marks_active_item() {
    let ac = open_on_tom().await;
    let mut updates = ac.subscribe();

    ac.handle(FieldEvent::PointerMove(1));
    assert!(updates.has_changed().unwrap());
    let list = updates.borrow_and_update().clone();
    assert!(list.open);
    assert_eq!(
        list.items.iter().map(|i| i.active).collect::<Vec<_>>(),
        vec![false, true]
    );
    assert_eq!(list.items[1].markup, "Tom Hardy");
}

#[tokio::test(start_paused = true)]
async fn test_pointer_move_out_of_range_is_ignored() {
    let ac = open_on_tom().await;
    assert_eq!(ac.handle(FieldEvent::PointerMove(7)), EventOutcome::Ignored);
    assert_eq!(ac.state().active(), None);
}

#[tokio::test(start_paused = true)]
async fn test_other_keys_pass_through() {
    let ac = open_on_tom().await;
    assert_eq!(ac.handle(FieldEvent::Key(Key::Other)), EventOutcome::Ignored);
    assert!(ac.state().is_open());
}
