// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Suggestion sources and the four lookup fields.
//!
//! People fields (`actor1`, `actor2`) search names; title fields (`film1`,
//! `film2`) search original titles. Each source fetches a wider batch than
//! it shows so the ranker has something to reorder.

use crate::autocomplete::{Autocomplete, AutocompleteBuilder, FetchFn, HostField};
use crate::config::AutocompleteSettings;
use crate::crossover::CrossoverSearch;
use crate::dispatch::{rows, Query, QueryDispatcher};
use crate::error::Result;
use crate::render;
use crate::types::{CreditedPerson, Title};
use futures::FutureExt;
use std::sync::Arc;

/// Candidates whose name contains the term, ordered by name.
pub fn people_source(dispatcher: Arc<dyn QueryDispatcher>, fetch_limit: usize) -> FetchFn {
    Arc::new(move |term: String| {
        let dispatcher = dispatcher.clone();
        async move {
            let query = Query::PeopleByName {
                term,
                limit: fetch_limit,
            };
            let found = dispatcher.query(&query).await?;
            rows::decode_all(&found, rows::person_candidate)
        }
        .boxed()
    })
}

/// Candidates whose title contains the term, most recent first.
pub fn titles_source(dispatcher: Arc<dyn QueryDispatcher>, fetch_limit: usize) -> FetchFn {
    Arc::new(move |term: String| {
        let dispatcher = dispatcher.clone();
        async move {
            let query = Query::TitlesByTitle {
                term,
                limit: fetch_limit,
            };
            let found = dispatcher.query(&query).await?;
            rows::decode_all(&found, rows::title_candidate)
        }
        .boxed()
    })
}

/// A person-name field.
pub fn person_field(
    field_id: &str,
    dispatcher: Arc<dyn QueryDispatcher>,
    settings: &AutocompleteSettings,
) -> Result<Autocomplete> {
    AutocompleteBuilder::new(field_id, HostField::new())
        .settings(settings)
        .fetch_fn(people_source(dispatcher, settings.fetch_limit))
        .render(render::person_suggestion)
        .build()
}

/// A title field, rendered with year and type.
pub fn title_field(
    field_id: &str,
    dispatcher: Arc<dyn QueryDispatcher>,
    settings: &AutocompleteSettings,
) -> Result<Autocomplete> {
    AutocompleteBuilder::new(field_id, HostField::new())
        .settings(settings)
        .fetch_fn(titles_source(dispatcher, settings.fetch_limit))
        .render(render::title_suggestion)
        .build()
}

/// The lookup page: two person fields, two title fields, one store.
pub struct LookupForm {
    pub actor1: Autocomplete,
    pub actor2: Autocomplete,
    pub film1: Autocomplete,
    pub film2: Autocomplete,
    search: CrossoverSearch,
}

impl LookupForm {
    pub fn new(dispatcher: Arc<dyn QueryDispatcher>, settings: &AutocompleteSettings) -> Result<Self> {
        Ok(Self {
            actor1: person_field("actor1", dispatcher.clone(), settings)?,
            actor2: person_field("actor2", dispatcher.clone(), settings)?,
            film1: title_field("film1", dispatcher.clone(), settings)?,
            film2: title_field("film2", dispatcher.clone(), settings)?,
            search: CrossoverSearch::new(dispatcher, settings.min_chars),
        })
    }

    /// Submit the actor form.
    pub async fn submit_actors(&self) -> Result<Vec<Title>> {
        let first = self.actor1.field().selection();
        let second = self.actor2.field().selection();
        self.search.shared_titles(&first, &second).await
    }

    /// Submit the film form.
    pub async fn submit_films(&self) -> Result<Vec<CreditedPerson>> {
        let first = self.film1.field().selection();
        let second = self.film2.field().selection();
        self.search.shared_people(&first, &second).await
    }
}
