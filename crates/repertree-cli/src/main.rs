mod cli;

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use env_logger::Env;
use log::info;
use repertree_corpus::{Ingestor, RepertoireConfig, create_output, open_corpus, prune_and_export};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    info!("{config:?}");

    let reader = open_corpus(&cli.corpus)
        .with_context(|| format!("failed to open corpus {}", cli.corpus.display()))?;
    let mut ingestor = Ingestor::new(config.clone());
    let ingest = ingestor
        .ingest_reader(reader)
        .context("failed to read corpus")?;
    info!(
        "ingested {} of {} games ({} skipped for rating, {} malformed, {} truncated, {} early exits)",
        ingest.games_accepted,
        ingest.games_read,
        ingest.skipped_rating,
        ingest.skipped_malformed,
        ingest.games_truncated,
        ingest.early_exits
    );

    let mut tree = ingestor.into_tree();
    let writer = create_output(&cli.output)
        .with_context(|| format!("failed to create {}", cli.output.display()))?;
    let report = prune_and_export(&mut tree, &config, writer, ingest)?;

    if let Some(path) = &cli.report {
        fs::write(path, report.to_json()?)
            .with_context(|| format!("failed to write report {}", path.display()))?;
    }

    if let Some(path) = &cli.dump_tree {
        let snapshot = tree.snapshot()?;
        fs::write(path, snapshot.to_json()?)
            .with_context(|| format!("failed to write tree snapshot {}", path.display()))?;
    }

    Ok(())
}

/// Start from the config file (or the bundled defaults) and apply flags on top.
fn load_config(cli: &Cli) -> Result<RepertoireConfig> {
    let mut config = match &cli.config {
        Some(path) => RepertoireConfig::from_yaml_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => RepertoireConfig::from_default_yaml()?,
    };

    if let Some(max_depth) = cli.max_depth {
        config.max_depth = max_depth;
    }
    if let Some(min_time) = cli.min_time {
        config.min_time = min_time;
    }
    if let Some(min_probability) = cli.min_probability {
        config.min_probability = min_probability;
    }
    if let Some(opponent) = cli.opponent {
        config.opponent = opponent.into();
    }
    if let Some(range) = cli.white_elo {
        config.white_elo = range;
    }
    if let Some(range) = cli.black_elo {
        config.black_elo = range;
    }
    if let Some(visits) = cli.early_exit_min_visits {
        config.early_exit_min_visits = Some(visits);
    }

    config.validate()?;
    Ok(config)
}
