//! Out-of-order resolutions never overwrite newer results.

use super::common::{advance, person_controller, shown, DelayedStore};
use costar::{AutocompleteBuilder, FieldEvent, HostField, Key};
use std::sync::Arc;

#[tokio::test(start_paused = true)]
async fn test_newest_lookup_wins() {
    // "tom" is sent at t=0 and resolves at t=300; "meg" is sent at t=100
    // and resolves at t=150.
    let store = Arc::new(DelayedStore::new().delay("tom", 300).delay("meg", 50));
    let ac = person_controller(store.clone(), 0);

    ac.handle(FieldEvent::Input("tom".into()));
    advance(100).await;
    ac.handle(FieldEvent::Input("meg".into()));

    advance(60).await; // t=160
    assert_eq!(shown(&ac), vec!["Meg Ryan"]);

    advance(140).await; // t=300
    assert_eq!(shown(&ac), vec!["Meg Ryan"]);

    advance(10).await; // t=310, "tom" has resolved and been dropped
    assert_eq!(store.terms(), vec!["tom", "meg"]);
    assert_eq!(shown(&ac), vec!["Meg Ryan"]);
}

#[tokio::test(start_paused = true)]
async fn test_escape_discards_in_flight_lookup() {
    let store = Arc::new(DelayedStore::new().delay("tom", 300));
    let ac = person_controller(store.clone(), 0);

    ac.handle(FieldEvent::Input("tom".into()));
    advance(100).await;
    ac.handle(FieldEvent::Key(Key::Escape));
    advance(500).await;

    assert_eq!(store.terms(), vec!["tom"]);
    assert!(!ac.state().is_open());
}

#[tokio::test(start_paused = true)]
async fn test_failure_is_contained_per_field() {
    let broken = AutocompleteBuilder::new("actor1", HostField::new())
        .debounce(std::time::Duration::ZERO)
        .fetch_fn(costar::suggest::people_source(
            Arc::new(DelayedStore::new().failing()),
            50,
        ))
        .build()
        .unwrap();
    let healthy = person_controller(Arc::new(DelayedStore::new()), 0);

    broken.handle(FieldEvent::Input("tom".into()));
    healthy.handle(FieldEvent::Input("tom".into()));
    advance(50).await;

    assert!(!broken.state().is_open());
    assert!(!broken.render_list().open);
    assert_eq!(shown(&healthy), vec!["Tom Hanks", "Tom Hardy"]);
}

#[tokio::test(start_paused = true)]
async fn test_empty_result_closes_list() {
    let ac = person_controller(Arc::new(DelayedStore::new()), 0);

    ac.handle(FieldEvent::Input("tom".into()));
    advance(10).await;
    assert!(ac.state().is_open());

    ac.handle(FieldEvent::Input("tomx".into()));
    advance(10).await;
    assert!(!ac.state().is_open());
    assert!(ac.state().items().is_empty());
}
