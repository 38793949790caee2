//! Submitting the lookup form with bound and free-text fields.

use super::common::{advance, memory_store, DelayedStore};
use costar::suggest::LookupForm;
use costar::{AutocompleteSettings, CostarError, FieldEvent, ValidationError};
use std::sync::Arc;

fn form() -> LookupForm {
    LookupForm::new(memory_store(), &AutocompleteSettings::default()).unwrap()
}

#[tokio::test(start_paused = true)]
async fn test_selected_and_typed_actors() {
    let form = form();

    form.actor1.handle(FieldEvent::Input("tom han".into()));
    advance(300).await;
    assert!(form.actor1.handle(FieldEvent::PointerDown(0)).is_handled());
    assert_eq!(form.actor1.field().stable_id(), Some("nm0000158".into()));

    // Never picked from the list: matched by name.
    form.actor2.field().set_text("meg ryan");

    let titles = form.submit_actors().await.unwrap();
    let ids: Vec<&str> = titles.iter().map(|t| t.title_id.as_str()).collect();
    assert_eq!(ids, vec!["tt0128853", "tt0108160", "tt0099892"]);
}

#[tokio::test(start_paused = true)]
async fn test_selected_and_typed_films() {
    let form = form();

    form.film1.handle(FieldEvent::Input("seattle".into()));
    advance(300).await;
    form.film1.handle(FieldEvent::PointerDown(0));
    assert_eq!(form.film1.field().stable_id(), Some("tt0108160".into()));

    form.film2.field().set_text("You've Got Mail");

    let people = form.submit_films().await.unwrap();
    let named: Vec<(&str, &str)> = people
        .iter()
        .map(|p| (p.name.as_str(), p.category.as_str()))
        .collect();
    assert_eq!(
        named,
        vec![
            ("Meg Ryan", "actress"),
            ("Nora Ephron", "director"),
            ("Tom Hanks", "actor"),
        ]
    );
}

#[tokio::test]
async fn test_same_person_twice_shares_nothing() {
    let form = form();
    form.actor1.field().set_text("Tom Hanks");
    form.actor2.field().set_text("tom hanks");

    assert!(form.submit_actors().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_short_field_stops_submission() {
    let store = Arc::new(DelayedStore::new());
    let form = LookupForm::new(store.clone(), &AutocompleteSettings::default()).unwrap();
    form.film1.field().set_text("Inception");
    form.film2.field().set_text(" x ");

    let err = form.submit_films().await.unwrap_err();
    match err {
        CostarError::Validation(ValidationError::TooShort { field, min_chars }) => {
            assert_eq!(field, "film2");
            assert_eq!(min_chars, 2);
        }
        other => panic!("expected validation error, got {other}"),
    }
    assert!(store.log.lock().is_empty());
}

#[tokio::test]
async fn test_store_failure_surfaces_to_caller() {
    let store = Arc::new(DelayedStore::new().failing());
    let form = LookupForm::new(store, &AutocompleteSettings::default()).unwrap();
    form.actor1.field().set_text("Tom Hanks");
    form.actor2.field().set_text("Meg Ryan");

    assert!(matches!(
        form.submit_actors().await,
        Err(CostarError::Dispatch(_))
    ));
}
