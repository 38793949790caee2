// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory store: the whole dataset downloaded once and queried directly.
//!
//! Answers the same query shapes as the SQLite store, with the same columns
//! and ordering, so either can sit behind a controller. The dataset is never
//! mutated after construction, so concurrent reads need no locking.
//!
//! Substring matching uses Unicode lowercase; SQLite's `LIKE` only folds
//! ASCII. The two agree on ASCII data.

use super::query::{Predicate, Query};
use super::{QueryDispatcher, Row};
use crate::error::{DispatchError, Result};
use crate::types::{Credit, Dataset, Person, Title};
use crate::utils::fold_case;
use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

/// Read-only dataset with id lookups.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    dataset: Arc<Dataset>,
    title_index: HashMap<String, usize>,
    person_index: HashMap<String, usize>,
}

impl MemoryStore {
    /// Index a dataset. Repeated credits collapse to one, as the crew table's
    /// primary key would collapse them.
    pub fn new(mut dataset: Dataset) -> Self {
        let mut seen = HashSet::new();
        dataset.crew.retain(|c| {
            seen.insert((c.title_id.clone(), c.person_id.clone(), c.category.clone()))
        });

        let title_index = dataset
            .titles
            .iter()
            .enumerate()
            .map(|(i, t)| (t.title_id.clone(), i))
            .collect();
        let person_index = dataset
            .people
            .iter()
            .enumerate()
            .map(|(i, p)| (p.person_id.clone(), i))
            .collect();
        Self {
            dataset: Arc::new(dataset),
            title_index,
            person_index,
        }
    }

    /// Load a JSON dataset export.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let dataset: Dataset = serde_json::from_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            titles = dataset.titles.len(),
            people = dataset.people.len(),
            credits = dataset.crew.len(),
            "loaded in-memory dataset"
        );
        Ok(Self::new(dataset))
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Answer a query synchronously.
    pub fn execute(&self, query: &Query) -> Vec<Row> {
        match query {
            Query::PeopleByName { term, limit } => self.people_by_name(term, *limit),
            Query::TitlesByTitle { term, limit } => self.titles_by_title(term, *limit),
            Query::SharedTitles { left, right } => self.shared_titles(left, right),
            Query::SharedPeople { left, right } => self.shared_people(left, right),
            Query::Stats => vec![self.stats()],
        }
    }

    fn people_by_name(&self, term: &str, limit: usize) -> Vec<Row> {
        let needle = fold_case(term);
        let mut people: Vec<&Person> = self
            .dataset
            .people
            .iter()
            .filter(|p| fold_case(&p.name).contains(&needle))
            .collect();
        people.sort_by(|a, b| by_name(a, b));
        people.into_iter().take(limit).map(person_row).collect()
    }

    fn titles_by_title(&self, term: &str, limit: usize) -> Vec<Row> {
        let needle = fold_case(term);
        let mut titles: Vec<&Title> = self
            .dataset
            .titles
            .iter()
            .filter(|t| fold_case(&t.original_title).contains(&needle))
            .collect();
        titles.sort_by(|a, b| most_recent_first(a, b));
        titles
            .into_iter()
            .take(limit)
            .map(|t| title_row(t).with("type", t.title_type.code()))
            .collect()
    }

    fn shared_titles(&self, left: &Predicate, right: &Predicate) -> Vec<Row> {
        let left_people = self.matching_people(left);
        let right_people = self.matching_people(right);

        // title_id -> (left-side people credited, right-side people credited)
        let mut sides: HashMap<&str, (Vec<&str>, Vec<&str>)> = HashMap::new();
        for credit in &self.dataset.crew {
            let person = credit.person_id.as_str();
            if left_people.contains(person) {
                sides.entry(credit.title_id.as_str()).or_default().0.push(person);
            }
            if right_people.contains(person) {
                sides.entry(credit.title_id.as_str()).or_default().1.push(person);
            }
        }

        let mut titles: Vec<&Title> = sides
            .into_iter()
            .filter(|(_, (l, r))| l.iter().any(|a| r.iter().any(|b| a != b)))
            .filter_map(|(title_id, _)| self.title_index.get(title_id))
            .map(|&i| &self.dataset.titles[i])
            .collect();
        titles.sort_by(|a, b| most_recent_first(a, b));
        titles
            .into_iter()
            .map(|t| title_row(t).with("type", t.title_type.code()))
            .collect()
    }

    fn shared_people(&self, left: &Predicate, right: &Predicate) -> Vec<Row> {
        let left_titles = self.matching_titles(left);
        let right_titles = self.matching_titles(right);

        let mut by_person: HashMap<&str, Vec<&Credit>> = HashMap::new();
        for credit in &self.dataset.crew {
            by_person.entry(credit.person_id.as_str()).or_default().push(credit);
        }

        // DISTINCT (person, category-on-first-title)
        let mut found: BTreeSet<(&str, &str)> = BTreeSet::new();
        for (person, credits) in &by_person {
            let second: Vec<&str> = credits
                .iter()
                .filter(|c| right_titles.contains(c.title_id.as_str()))
                .map(|c| c.title_id.as_str())
                .collect();
            if second.is_empty() {
                continue;
            }
            for first in credits
                .iter()
                .filter(|c| left_titles.contains(c.title_id.as_str()))
            {
                if second.iter().any(|t2| *t2 != first.title_id) {
                    found.insert((*person, first.category.as_str()));
                }
            }
        }

        let mut rows: Vec<(&Person, &str)> = found
            .into_iter()
            .filter_map(|(person_id, category)| {
                self.person_index
                    .get(person_id)
                    .map(|&i| (&self.dataset.people[i], category))
            })
            .collect();
        rows.sort_by(|(a, ca), (b, cb)| by_name(a, b).then_with(|| ca.cmp(cb)));
        rows.into_iter()
            .map(|(p, category)| person_row(p).with("category", category))
            .collect()
    }

    fn stats(&self) -> Row {
        let count = |n: usize| i64::try_from(n).unwrap_or(i64::MAX);
        Row::new()
            .with("titles", count(self.dataset.titles.len()))
            .with("people", count(self.dataset.people.len()))
            .with("credits", count(self.dataset.crew.len()))
    }

    fn matching_people(&self, predicate: &Predicate) -> HashSet<&str> {
        match predicate {
            Predicate::IdEquals(id) => {
                let id = id.as_text();
                self.person_index
                    .get_key_value(id.as_str())
                    .map(|(k, _)| k.as_str())
                    .into_iter()
                    .collect()
            }
            Predicate::TextContains(text) => {
                let needle = fold_case(text);
                self.dataset
                    .people
                    .iter()
                    .filter(|p| fold_case(&p.name).contains(&needle))
                    .map(|p| p.person_id.as_str())
                    .collect()
            }
        }
    }

    fn matching_titles(&self, predicate: &Predicate) -> HashSet<&str> {
        match predicate {
            Predicate::IdEquals(id) => {
                let id = id.as_text();
                self.title_index
                    .get_key_value(id.as_str())
                    .map(|(k, _)| k.as_str())
                    .into_iter()
                    .collect()
            }
            Predicate::TextContains(text) => {
                let needle = fold_case(text);
                self.dataset
                    .titles
                    .iter()
                    .filter(|t| fold_case(&t.original_title).contains(&needle))
                    .map(|t| t.title_id.as_str())
                    .collect()
            }
        }
    }
}

#[async_trait]
impl QueryDispatcher for MemoryStore {
    async fn query(&self, query: &Query) -> std::result::Result<Vec<Row>, DispatchError> {
        Ok(self.execute(query))
    }
}

fn person_row(p: &Person) -> Row {
    Row::new()
        .with("person_id", p.person_id.as_str())
        .with("name", p.name.as_str())
}

fn title_row(t: &Title) -> Row {
    Row::new()
        .with("title_id", t.title_id.as_str())
        .with("original_title", t.original_title.as_str())
        .with("premiered", t.premiered.map(i64::from))
}

fn by_name(a: &Person, b: &Person) -> Ordering {
    a.name
        .cmp(&b.name)
        .then_with(|| a.person_id.cmp(&b.person_id))
}

/// `ORDER BY premiered DESC, title_id`: NULL premieres sort last, as in SQLite.
fn most_recent_first(a: &Title, b: &Title) -> Ordering {
    match (a.premiered, b.premiered) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then_with(|| a.title_id.cmp(&b.title_id))
}
