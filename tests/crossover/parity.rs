//! The SQLite and in-memory stores answer every query shape identically.

use super::common::sample_dataset;
use costar::dispatch::schema;
use costar::dispatch::{MemoryStore, Predicate, Query, SqliteStore};
use costar::Dataset;

fn stores_for(dataset: Dataset) -> (tempfile::TempDir, MemoryStore, SqliteStore) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("costar.db");
    schema::import(&dataset, &path).unwrap();
    let sqlite = SqliteStore::open(&path).unwrap();
    (dir, MemoryStore::new(dataset), sqlite)
}

fn stores() -> (tempfile::TempDir, MemoryStore, SqliteStore) {
    stores_for(sample_dataset())
}

fn text(s: &str) -> Predicate {
    Predicate::TextContains(s.to_string())
}

fn id(s: &str) -> Predicate {
    Predicate::IdEquals(s.into())
}

#[test]
fn test_every_query_shape_agrees() {
    let (_dir, memory, sqlite) = stores();

    let queries = vec![
        Query::PeopleByName { term: "tom".into(), limit: 50 },
        Query::PeopleByName { term: "TOM".into(), limit: 50 },
        Query::PeopleByName { term: "r".into(), limit: 3 },
        Query::PeopleByName { term: "50_cent".into(), limit: 50 },
        Query::TitlesByTitle { term: "volcano".into(), limit: 50 },
        Query::TitlesByTitle { term: "e".into(), limit: 50 },
        Query::TitlesByTitle { term: "%".into(), limit: 50 },
        Query::SharedTitles { left: id("nm0000158"), right: id("nm0000212") },
        Query::SharedTitles { left: id("nm0000158"), right: text("meg") },
        Query::SharedTitles { left: text("tom"), right: text("tom") },
        Query::SharedTitles { left: text("Tom Hanks"), right: text("Tom Hanks") },
        Query::SharedPeople { left: text("seattle"), right: text("mail") },
        Query::SharedPeople { left: id("tt0099892"), right: text("e") },
        Query::SharedPeople { left: id("tt1375666"), right: id("tt0306414") },
        Query::Stats,
    ];

    for query in &queries {
        let expected = memory.execute(query);
        let actual = sqlite.execute(query).unwrap();
        assert_eq!(actual, expected, "{} {:?}", query.shape(), query.params());
    }
}

#[test]
fn test_repeated_credit_counts_agree() {
    let mut dataset = sample_dataset();
    let listed = dataset.crew.len() as u64;
    dataset.crew.push(dataset.crew[0].clone());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("costar.db");
    let imported = schema::import(&dataset, &path).unwrap();
    assert_eq!(imported.credits, listed);

    let (_dir, memory, sqlite) = stores_for(dataset);
    let shared = Query::SharedTitles { left: id("nm0000158"), right: id("nm0000212") };
    for query in [Query::Stats, shared] {
        assert_eq!(sqlite.execute(&query).unwrap(), memory.execute(&query), "{}", query.shape());
    }
}

#[test]
fn test_open_picks_store_by_extension() {
    let (dir, _, _) = stores();
    let store = costar::dispatch::open(&dir.path().join("costar.db"));
    assert!(store.is_ok());

    let missing = costar::dispatch::open(&dir.path().join("nope.json"));
    assert!(missing.is_err());
}
