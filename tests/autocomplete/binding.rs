//! Selection binds the identifier; manual edits drop it.

use super::common::{advance, person_controller, DelayedStore};
use costar::{BoundSelection, EventOutcome, FieldEvent, Key};
use parking_lot::Mutex;
use std::sync::Arc;

#[tokio::test(start_paused = true)]
async fn test_enter_binds_and_next_keystroke_unbinds() {
    let ac = person_controller(Arc::new(DelayedStore::new()), 200);

    ac.handle(FieldEvent::Input("Tom Han".into()));
    advance(50).await;
    ac.handle(FieldEvent::Input("Tom Hanks".into()));
    advance(250).await;
    assert!(ac.state().is_open());
    assert_eq!(ac.state().items()[0].display_text, "Tom Hanks");

    ac.handle(FieldEvent::Key(Key::ArrowDown));
    let outcome = ac.handle(FieldEvent::Key(Key::Enter));
    assert_eq!(outcome, EventOutcome::Handled);
    assert_eq!(
        ac.field().selection(),
        BoundSelection::selected("Tom Hanks", "nm0000158")
    );
    assert!(!ac.state().is_open());

    ac.handle(FieldEvent::Input("Tom Hanks ".into()));
    assert_eq!(ac.field().text(), "Tom Hanks ");
    assert_eq!(ac.field().stable_id(), None);
}

#[tokio::test(start_paused = true)]
async fn test_pointer_down_commits_immediately() {
    let ac = person_controller(Arc::new(DelayedStore::new()), 0);
    ac.handle(FieldEvent::Input("tom".into()));
    advance(10).await;

    assert!(ac.handle(FieldEvent::PointerDown(1)).is_handled());
    assert_eq!(ac.field().text(), "Tom Hardy");
    assert_eq!(ac.field().stable_id(), Some("nm0362766".into()));
}

#[tokio::test(start_paused = true)]
async fn test_commit_hook_sees_candidate() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let hook_seen = seen.clone();
    let ac = costar::AutocompleteBuilder::new("actor2", costar::HostField::new())
        .debounce(std::time::Duration::ZERO)
        .fetch_fn(costar::suggest::people_source(super::common::memory_store(), 50))
        .on_commit(move |c| hook_seen.lock().push(c.stable_id.to_string()))
        .build()
        .unwrap();

    ac.handle(FieldEvent::Input("meg".into()));
    advance(10).await;
    ac.handle(FieldEvent::PointerDown(0));

    assert_eq!(*seen.lock(), vec!["nm0000212".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn test_external_edit_also_unbinds() {
    let ac = person_controller(Arc::new(DelayedStore::new()), 0);
    ac.handle(FieldEvent::Input("meg".into()));
    advance(10).await;
    ac.handle(FieldEvent::PointerDown(0));
    assert!(ac.field().stable_id().is_some());

    ac.field().set_text("Meg Ryan");
    assert_eq!(ac.field().stable_id(), None);
}
