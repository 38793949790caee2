//! WebAssembly bindings for the costar scorer and query builder.
//!
//! The page keeps its own SQLite build and DOM handling; what it borrows from
//! Rust is the ranking and the crossover statement, so browser results order
//! and filter exactly like the CLI's.
//!
//! ```js
//! const ranked = rank(rows, "tom han", 8);
//! const { sql, params } = crossoverStatement("sharedTitles",
//!     { displayValue: "Tom Hanks", stableId: "nm0000158" },
//!     { displayValue: "Meg Ryan" }, 2);
//! ```

use crate::crossover::{build_query, CrossoverKind};
use crate::dispatch::Value;
use crate::render;
use crate::scoring::ranking::rank_scored;
use crate::types::{BoundSelection, Candidate};
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// Statement handed back to JavaScript.
#[derive(Serialize)]
struct StatementOutput {
    sql: String,
    params: Vec<Value>,
}

fn js_error(message: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&message.to_string())
}

/// Score one candidate string against a query. Zero means no match.
#[wasm_bindgen]
pub fn score(candidate: &str, query: &str) -> f64 {
    crate::scoring::score(candidate, query)
}

/// Rank `Candidate[]` for a query; returns `{candidate, score}[]`.
#[wasm_bindgen]
pub fn rank(candidates: JsValue, query: &str, limit: usize) -> Result<JsValue, JsValue> {
    let candidates: Vec<Candidate> = from_value(candidates).map_err(js_error)?;
    let ranked = rank_scored(&candidates, query, limit);
    to_value(&ranked).map_err(js_error)
}

/// Build the crossover statement for two field selections.
///
/// `kind` is `"sharedTitles"` or `"sharedPeople"`. Throws the validation
/// message (e.g. "actor2: enter at least 2 characters") on short input.
#[wasm_bindgen(js_name = crossoverStatement)]
pub fn crossover_statement(
    kind: &str,
    first: JsValue,
    second: JsValue,
    min_chars: usize,
) -> Result<JsValue, JsValue> {
    let kind = match kind {
        "sharedTitles" => CrossoverKind::SharedTitles,
        "sharedPeople" => CrossoverKind::SharedPeople,
        other => return Err(js_error(format!("unknown crossover kind: {}", other))),
    };
    let first: BoundSelection = from_value(first).map_err(js_error)?;
    let second: BoundSelection = from_value(second).map_err(js_error)?;
    let query = build_query(kind, &first, &second, min_chars).map_err(js_error)?;
    to_value(&StatementOutput {
        sql: query.sql(),
        params: query.params(),
    })
    .map_err(js_error)
}

/// Suggestion markup, matching the CLI's `--html` output.
#[wasm_bindgen(js_name = renderSuggestion)]
pub fn render_suggestion(candidate: JsValue) -> Result<String, JsValue> {
    let candidate: Candidate = from_value(candidate).map_err(js_error)?;
    Ok(if candidate.meta.title_type.is_some() {
        render::title_suggestion(&candidate)
    } else {
        render::person_suggestion(&candidate)
    })
}
