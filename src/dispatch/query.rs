// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query shapes and the SQL they compile to.
//!
//! User text only ever reaches SQL as a bound parameter. Substring searches
//! escape `%`, `_` and `\` so a name like "50_Cent" is matched literally.

use super::Value;
use crate::types::StableId;

/// How one side of a crossover identifies its entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Exact path: equality on the stable identifier.
    IdEquals(StableId),
    /// Fuzzy path: case-insensitive substring of the display text.
    TextContains(String),
}

impl Predicate {
    pub fn is_exact(&self) -> bool {
        matches!(self, Predicate::IdEquals(_))
    }

    fn sql(&self, id_column: &str, text_column: &str) -> String {
        match self {
            Predicate::IdEquals(_) => format!("{} = ?", id_column),
            Predicate::TextContains(_) => format!("{} LIKE ? ESCAPE '\\'", text_column),
        }
    }

    fn param(&self) -> Value {
        match self {
            Predicate::IdEquals(id) => Value::Text(id.as_text()),
            Predicate::TextContains(text) => Value::Text(like_pattern(text)),
        }
    }
}

/// Everything the stores know how to answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Autocomplete source for person fields, ordered by name.
    PeopleByName { term: String, limit: usize },
    /// Autocomplete source for title fields, most recent first.
    TitlesByTitle { term: String, limit: usize },
    /// Titles both people are credited on.
    SharedTitles { left: Predicate, right: Predicate },
    /// People credited on both titles.
    SharedPeople { left: Predicate, right: Predicate },
    /// Row counts.
    Stats,
}

impl Query {
    /// Short name for logs.
    pub fn shape(&self) -> &'static str {
        match self {
            Query::PeopleByName { .. } => "people_by_name",
            Query::TitlesByTitle { .. } => "titles_by_title",
            Query::SharedTitles { .. } => "shared_titles",
            Query::SharedPeople { .. } => "shared_people",
            Query::Stats => "stats",
        }
    }

    pub fn sql(&self) -> String {
        match self {
            Query::PeopleByName { .. } => "SELECT person_id, name FROM people \
                 WHERE name LIKE ? ESCAPE '\\' \
                 ORDER BY name, person_id LIMIT ?"
                .to_string(),
            Query::TitlesByTitle { .. } => "SELECT title_id, original_title, premiered, type FROM titles \
                 WHERE original_title LIKE ? ESCAPE '\\' \
                 ORDER BY premiered DESC, title_id LIMIT ?"
                .to_string(),
            Query::SharedTitles { left, right } => format!(
                "SELECT DISTINCT t.title_id, t.original_title, t.type, t.premiered \
                 FROM titles t \
                 JOIN crew c1 ON t.title_id = c1.title_id \
                 JOIN people p1 ON c1.person_id = p1.person_id \
                 JOIN crew c2 ON t.title_id = c2.title_id \
                 JOIN people p2 ON c2.person_id = p2.person_id \
                 WHERE {} AND {} AND p1.person_id != p2.person_id \
                 ORDER BY t.premiered DESC, t.title_id",
                left.sql("p1.person_id", "p1.name"),
                right.sql("p2.person_id", "p2.name"),
            ),
            Query::SharedPeople { left, right } => format!(
                "SELECT DISTINCT p.person_id, p.name, c1.category \
                 FROM people p \
                 JOIN crew c1 ON p.person_id = c1.person_id \
                 JOIN titles t1 ON c1.title_id = t1.title_id \
                 JOIN crew c2 ON p.person_id = c2.person_id \
                 JOIN titles t2 ON c2.title_id = t2.title_id \
                 WHERE {} AND {} AND t1.title_id != t2.title_id \
                 ORDER BY p.name, p.person_id, c1.category",
                left.sql("t1.title_id", "t1.original_title"),
                right.sql("t2.title_id", "t2.original_title"),
            ),
            Query::Stats => "SELECT \
                 (SELECT COUNT(*) FROM titles) AS titles, \
                 (SELECT COUNT(*) FROM people) AS people, \
                 (SELECT COUNT(*) FROM crew) AS credits"
                .to_string(),
        }
    }

    /// Positional parameters, in placeholder order.
    pub fn params(&self) -> Vec<Value> {
        match self {
            Query::PeopleByName { term, limit } | Query::TitlesByTitle { term, limit } => vec![
                Value::Text(like_pattern(term)),
                Value::Integer(i64::try_from(*limit).unwrap_or(i64::MAX)),
            ],
            Query::SharedTitles { left, right } | Query::SharedPeople { left, right } => {
                vec![left.param(), right.param()]
            }
            Query::Stats => Vec::new(),
        }
    }
}

/// `%term%` with LIKE metacharacters escaped by `\`.
pub fn like_pattern(term: &str) -> String {
    let mut out = String::with_capacity(term.len() + 2);
    out.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('%');
    out
}
