// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{bail, Context};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use costar::config::Config;
use costar::crossover::CrossoverSearch;
use costar::dispatch::{self, rows, Query, QueryDispatcher};
use costar::render;
use costar::scoring::{classify, ranking::rank_scored};
use costar::suggest::{people_source, titles_source};
use costar::types::BoundSelection;
#[cfg(feature = "sqlite")]
use costar::types::Dataset;

mod cli;
use cli::display::{self, themed};
use cli::{Cli, Commands, CrossoverArgs};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::from_env(),
    };
    if let Some(db) = cli.db.clone() {
        config.database = Some(db);
    }

    match cli.command {
        Commands::Score { candidate, query } => run_score(&candidate, &query),
        Commands::Suggest {
            term,
            titles,
            limit,
            json,
        } => run_suggest(&config, &term, titles, limit, json).await,
        Commands::SharedTitles(args) => run_shared_titles(&config, &args).await,
        Commands::SharedPeople(args) => run_shared_people(&config, &args).await,
        Commands::Stats { json } => run_stats(&config, json).await,
        Commands::Import { input, output } => run_import(&input, &output),
    }
}

fn open_store(config: &Config) -> anyhow::Result<Arc<dyn QueryDispatcher>> {
    let Some(path) = &config.database else {
        bail!(
            "no dataset configured; pass --db, set {}, or add `database` to the config file",
            costar::config::DATABASE_ENV
        );
    };
    dispatch::open(path).with_context(|| format!("opening dataset {}", path.display()))
}

fn run_score(candidate: &str, query: &str) -> anyhow::Result<()> {
    let (tier, score) = classify(candidate, query);
    println!(
        "{}  {}  {}",
        display::score_value(score),
        display::pad_right(&display::tier_label(tier), 12),
        candidate
    );
    Ok(())
}

async fn run_suggest(
    config: &Config,
    term: &str,
    titles: bool,
    limit: Option<usize>,
    json: bool,
) -> anyhow::Result<()> {
    let settings = &config.autocomplete;
    let term = term.trim();
    if costar::utils::trimmed_len(term) < settings.min_chars {
        bail!("enter at least {} characters", settings.min_chars);
    }

    let store = open_store(config)?;
    let fetch = if titles {
        titles_source(store, settings.fetch_limit)
    } else {
        people_source(store, settings.fetch_limit)
    };
    let candidates = fetch(term.to_string()).await?;
    let ranked = rank_scored(&candidates, term, limit.unwrap_or(settings.display_limit));

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    if ranked.is_empty() {
        println!("{}", themed(display::GRAY, &[], "No suggestions."));
        return Ok(());
    }
    for scored in &ranked {
        let (tier, _) = classify(&scored.candidate.display_text, term);
        println!(
            "{}  {}  {}{}  {}",
            display::score_value(scored.score),
            display::pad_right(&display::tier_label(tier), 12),
            scored.candidate.display_text,
            display::candidate_meta(&scored.candidate),
            themed(display::GRAY, &[], &scored.candidate.stable_id.to_string()),
        );
    }
    Ok(())
}

fn selections(args: &CrossoverArgs) -> (BoundSelection, BoundSelection) {
    let side = |text: &str, id: &Option<String>| match id {
        Some(id) => BoundSelection::selected(text, id.as_str()),
        None => BoundSelection::typed(text),
    };
    (side(&args.first, &args.id1), side(&args.second, &args.id2))
}

async fn run_shared_titles(config: &Config, args: &CrossoverArgs) -> anyhow::Result<()> {
    let search = CrossoverSearch::new(open_store(config)?, config.autocomplete.min_chars);
    let (first, second) = selections(args);
    let titles = search.shared_titles(&first, &second).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&titles)?);
    } else if args.html {
        let items: Vec<String> = titles.iter().map(render::title_result).collect();
        println!(
            "{}",
            render::result_block(
                &items,
                "title",
                "No common titles found. Try partial names or check spelling."
            )
        );
    } else {
        display::section_top(&format!("{} + {}", args.first.trim(), args.second.trim()));
        for title in &titles {
            display::row(&display::title_line(title));
        }
        display::row(&themed(
            display::GRAY,
            &[],
            &format!(" {}", display::plural(titles.len(), "title", "titles")),
        ));
        display::section_bot();
    }
    Ok(())
}

async fn run_shared_people(config: &Config, args: &CrossoverArgs) -> anyhow::Result<()> {
    let search = CrossoverSearch::new(open_store(config)?, config.autocomplete.min_chars);
    let (first, second) = selections(args);
    let people = search.shared_people(&first, &second).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&people)?);
    } else if args.html {
        let items: Vec<String> = people.iter().map(render::person_result).collect();
        println!(
            "{}",
            render::result_block(
                &items,
                "person",
                "No common actors found. Try partial titles or check spelling."
            )
        );
    } else {
        display::section_top(&format!("{} + {}", args.first.trim(), args.second.trim()));
        for person in &people {
            display::row(&display::person_line(person));
        }
        display::row(&themed(
            display::GRAY,
            &[],
            &format!(" {}", display::plural(people.len(), "person", "people")),
        ));
        display::section_bot();
    }
    Ok(())
}

async fn run_stats(config: &Config, json: bool) -> anyhow::Result<()> {
    let store = open_store(config)?;
    let found = store.query(&Query::Stats).await?;
    let row = found.first().context("stats query returned no rows")?;
    let stats = rows::stats(row)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }
    display::section_top("DATASET");
    display::row(&format!(" Titles   {}", display::pad_left(&stats.titles.to_string(), 12)));
    display::row(&format!(" People   {}", display::pad_left(&stats.people.to_string(), 12)));
    display::row(&format!(" Credits  {}", display::pad_left(&stats.credits.to_string(), 12)));
    display::section_bot();
    Ok(())
}

#[cfg(feature = "sqlite")]
fn run_import(input: &Path, output: &Path) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let dataset: Dataset =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", input.display()))?;
    let stats = dispatch::schema::import(&dataset, output)?;
    println!(
        "Wrote {}, {}, {} to {}",
        display::plural(stats.titles as usize, "title", "titles"),
        display::plural(stats.people as usize, "person", "people"),
        display::plural(stats.credits as usize, "credit", "credits"),
        output.display()
    );
    Ok(())
}

#[cfg(not(feature = "sqlite"))]
fn run_import(_input: &Path, output: &Path) -> anyhow::Result<()> {
    bail!("{}: SQLite support is not compiled in", output.display())
}
