// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HTML fragments for suggestions and crossover results.
//!
//! All dataset text is escaped. Class names match the page stylesheet
//! (`autocomplete-meta`, `result-item`, `result-title`, `result-meta`).

use crate::types::{Candidate, CreditedPerson, Title, TitleType};
use crate::utils::escape_html;

const IMDB_TITLE_URL: &str = "https://www.imdb.com/title/";
const IMDB_NAME_URL: &str = "https://www.imdb.com/name/";

/// Person suggestion: the name alone.
pub fn person_suggestion(candidate: &Candidate) -> String {
    escape_html(&candidate.display_text)
}

/// Title suggestion: name plus ` (year) • Type` when known.
pub fn title_suggestion(candidate: &Candidate) -> String {
    format!(
        "{}<div class=\"autocomplete-meta\">{}</div>",
        escape_html(&candidate.display_text),
        title_meta(candidate.meta.year, candidate.meta.title_type)
    )
}

fn title_meta(year: Option<i32>, title_type: Option<TitleType>) -> String {
    let mut meta = String::new();
    if let Some(year) = year {
        meta.push_str(&format!(" ({})", year));
    }
    if let Some(t) = title_type {
        meta.push_str(" • ");
        meta.push_str(t.label());
    }
    meta
}

/// "actress" -> "Actress".
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn title_url(title_id: &str) -> String {
    format!("{}{}/", IMDB_TITLE_URL, title_id)
}

pub fn person_url(person_id: &str) -> String {
    format!("{}{}/", IMDB_NAME_URL, person_id)
}

/// One shared-titles result.
pub fn title_result(title: &Title) -> String {
    let year = title
        .premiered
        .map(|y| format!(" • {}", y))
        .unwrap_or_default();
    format!(
        "<div class=\"result-item\"><div class=\"result-title\">{}</div>\
         <div class=\"result-meta\">{}{} • <a href=\"{}\" target=\"_blank\">View on IMDb</a></div></div>",
        escape_html(&title.original_title),
        title.title_type.label(),
        year,
        escape_html(&title_url(&title.title_id)),
    )
}

/// One shared-people result.
pub fn person_result(person: &CreditedPerson) -> String {
    format!(
        "<div class=\"result-item\"><div class=\"result-title\">{}</div>\
         <div class=\"result-meta\">{} • <a href=\"{}\" target=\"_blank\">View on IMDb</a></div></div>",
        escape_html(&person.name),
        escape_html(&capitalize(&person.category)),
        escape_html(&person_url(&person.person_id)),
    )
}

/// Heading plus items, or the empty-state message.
pub fn result_block(items: &[String], noun: &str, empty_message: &str) -> String {
    if items.is_empty() {
        return format!("<div class=\"no-results\">{}</div>", escape_html(empty_message));
    }
    format!("<h3>Found {} {}(s):</h3>{}", items.len(), noun, items.concat())
}
