//! Fuzzy lookup and crossover search over a movie/TV credits dataset.
//!
//! Two people in, the titles they share out; two titles in, the people they
//! share out. Each input is an autocomplete field that ranks what the store
//! returns with a deterministic tiered string scorer and, on selection, binds
//! the dataset identifier behind the chosen name so the search can match it
//! exactly instead of by substring.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────────┐
//! │  scoring    │────▶│   ranking    │────▶│     autocomplete     │
//! │ (score,     │     │ (rank,       │     │ (debounce, list      │
//! │  classify)  │     │  rank_scored)│     │  state, HostField)   │
//! └─────────────┘     └──────────────┘     └──────────────────────┘
//!                                                     │ fetch
//!                                                     ▼
//! ┌─────────────┐     ┌───────────────────────────────────────────┐
//! │  crossover  │────▶│                 dispatch                  │
//! │ (exact or   │     │  Query ─▶ QueryDispatcher ─▶ Row          │
//! │  fuzzy side)│     │  (SqliteStore, MemoryStore)               │
//! └─────────────┘     └───────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use costar::{dispatch, suggest::LookupForm, AutocompleteSettings, FieldEvent};
//!
//! let store = dispatch::open("imdb.db".as_ref())?;
//! let form = LookupForm::new(store, &AutocompleteSettings::default())?;
//!
//! form.actor1.handle(FieldEvent::Input("tom han".into()));
//! // ... user picks "Tom Hanks"; actor1 now carries nm0000158
//! form.actor2.handle(FieldEvent::Input("Meg Ryan".into()));
//!
//! let titles = form.submit_actors().await?;
//! ```

pub mod autocomplete;
pub mod config;
pub mod crossover;
pub mod debounce;
pub mod dispatch;
pub mod error;
pub mod render;
pub mod scoring;
pub mod suggest;
pub mod testing;
pub mod types;
pub mod utils;

#[cfg(feature = "wasm")]
mod wasm;

pub use autocomplete::{
    Autocomplete, AutocompleteBuilder, EventOutcome, FieldEvent, HostField, Key, RenderItem,
    RenderList, SuggestionList,
};
pub use config::{AutocompleteSettings, Config};
pub use crossover::{build_query, predicate_for, CrossoverKind, CrossoverSearch};
pub use debounce::Debouncer;
pub use dispatch::{Predicate, Query, QueryDispatcher, Row, Value};
pub use error::{CostarError, DispatchError, Result, ValidationError};
pub use scoring::ranking::{rank, rank_scored, DEFAULT_DISPLAY_LIMIT};
pub use scoring::{classify, score, MatchTier};
pub use types::{
    BoundSelection, Candidate, CandidateMeta, Credit, CreditedPerson, Dataset, DatasetStats,
    Person, ScoredCandidate, StableId, Title, TitleType,
};
