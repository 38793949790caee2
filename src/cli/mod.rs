// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the costar command-line interface.
//!
//! `score` explains how one candidate scores against a query. `suggest` runs
//! a lookup the way an autocomplete field would. `shared-titles` and
//! `shared-people` run the crossover searches, taking `--id1`/`--id2` to
//! pin a side to an exact identifier. `stats` and `import` deal with the
//! dataset file itself.

pub mod display;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "costar",
    about = "Fuzzy lookup and crossover search over a movie/TV credits dataset",
    version
)]
pub struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Dataset file (.json loads into memory, anything else is SQLite).
    /// Overrides the config file and COSTAR_DB.
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args)]
pub struct CrossoverArgs {
    /// First field's text
    pub first: String,

    /// Second field's text
    pub second: String,

    /// Identifier bound to the first field (exact match)
    #[arg(long)]
    pub id1: Option<String>,

    /// Identifier bound to the second field (exact match)
    #[arg(long)]
    pub id2: Option<String>,

    /// Print JSON instead of a table
    #[arg(long, conflicts_with = "html")]
    pub json: bool,

    /// Print the HTML result fragment
    #[arg(long)]
    pub html: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score one candidate against a query and show the matching tier
    Score {
        candidate: String,
        query: String,
    },

    /// Ranked suggestions for a partial name or title
    Suggest {
        /// Partial text, as typed into a field
        term: String,

        /// Search titles instead of people
        #[arg(long)]
        titles: bool,

        /// Maximum suggestions (defaults to the configured display limit)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Titles two people are both credited on
    SharedTitles(CrossoverArgs),

    /// People credited on both of two titles
    SharedPeople(CrossoverArgs),

    /// Row counts of the dataset
    Stats {
        #[arg(long)]
        json: bool,
    },

    /// Write a JSON dataset into a compact SQLite file
    Import {
        /// JSON dataset with `titles`, `people` and `crew`
        #[arg(short, long)]
        input: PathBuf,

        /// SQLite file to create (must not exist)
        #[arg(short, long)]
        output: PathBuf,
    },
}
