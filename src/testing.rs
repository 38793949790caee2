//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

use crate::types::{Candidate, Credit, Dataset, Person, Title, TitleType};

fn title(id: &str, name: &str, title_type: TitleType, premiered: Option<i32>) -> Title {
    Title {
        title_id: id.to_string(),
        original_title: name.to_string(),
        title_type,
        premiered,
    }
}

fn person(id: &str, name: &str) -> Person {
    Person {
        person_id: id.to_string(),
        name: name.to_string(),
    }
}

fn credit(title_id: &str, person_id: &str, category: &str) -> Credit {
    Credit {
        title_id: title_id.to_string(),
        person_id: person_id.to_string(),
        category: category.to_string(),
    }
}

/// A small, hand-checked slice of the compact dataset.
///
/// Tom Hanks and Meg Ryan share three films; Nora Ephron directed two of them.
/// Tom Hanks and Tom Hardy both match "tom", and one title has no premiere year.
pub fn sample_dataset() -> Dataset {
    Dataset {
        titles: vec![
            title("tt0099892", "Joe Versus the Volcano", TitleType::Movie, Some(1990)),
            title("tt0108160", "Sleepless in Seattle", TitleType::Movie, Some(1993)),
            title("tt0128853", "You've Got Mail", TitleType::Movie, Some(1998)),
            title("tt0162222", "Cast Away", TitleType::Movie, Some(2000)),
            title("tt0185906", "Band of Brothers", TitleType::TvMiniSeries, Some(2001)),
            title("tt1375666", "Inception", TitleType::Movie, Some(2010)),
            title("tt0306414", "The Wire", TitleType::TvSeries, Some(2002)),
            title("tt9999999", "Untitled Volcano Project", TitleType::Movie, None),
        ],
        people: vec![
            person("nm0000158", "Tom Hanks"),
            person("nm0000212", "Meg Ryan"),
            person("nm0001188", "Nora Ephron"),
            person("nm0362766", "Tom Hardy"),
            person("nm0634240", "Christopher Nolan"),
            person("nm0000288", "Christian Bale"),
            person("nm0005212", "Idris Elba"),
        ],
        crew: vec![
            credit("tt0099892", "nm0000158", "actor"),
            credit("tt0099892", "nm0000212", "actress"),
            credit("tt0108160", "nm0000158", "actor"),
            credit("tt0108160", "nm0000212", "actress"),
            credit("tt0108160", "nm0001188", "director"),
            credit("tt0128853", "nm0000158", "actor"),
            credit("tt0128853", "nm0000212", "actress"),
            credit("tt0128853", "nm0001188", "director"),
            credit("tt0162222", "nm0000158", "actor"),
            credit("tt0185906", "nm0000158", "producer"),
            credit("tt1375666", "nm0362766", "actor"),
            credit("tt1375666", "nm0634240", "director"),
            credit("tt0306414", "nm0005212", "actor"),
        ],
    }
}

/// Person candidate with no metadata.
pub fn make_candidate(id: &str, name: &str) -> Candidate {
    Candidate::new(name, id)
}

/// Candidates from a list of display texts, with ids `c0`, `c1`, ...
pub fn make_candidates(names: &[&str]) -> Vec<Candidate> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Candidate::new(*name, format!("c{}", i)))
        .collect()
}
