use std::io::{BufRead, Write};

use log::info;
use repertree_core::Tree;
use serde::Serialize;

use crate::{CorpusError, IngestStats, Ingestor, RepertoireConfig, export::export_variants};

/// Totals reported after each phase of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub ingest: IngestStats,
    pub positions_before: usize,
    pub positions_after_unevaluated: usize,
    pub positions_after_probability: usize,
    pub variants_saved: usize,
}

impl RunReport {
    pub fn to_json(&self) -> Result<String, CorpusError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Ingest a JSON Lines corpus, prune the tree and write the repertoire.
pub fn run_pipeline<R: BufRead, W: Write>(
    config: &RepertoireConfig,
    reader: R,
    writer: W,
) -> Result<RunReport, CorpusError> {
    let mut ingestor = Ingestor::new(config.clone());
    let ingest = ingestor.ingest_reader(reader)?;
    info!(
        "ingested {} of {} games ({} moves)",
        ingest.games_accepted, ingest.games_read, ingest.moves_recorded
    );

    let mut tree = ingestor.into_tree();
    prune_and_export(&mut tree, config, writer, ingest)
}

/// Run the pruning passes in order and export what survives.
pub fn prune_and_export<W: Write>(
    tree: &mut Tree,
    config: &RepertoireConfig,
    writer: W,
    ingest: IngestStats,
) -> Result<RunReport, CorpusError> {
    let positions_before = tree.total();
    info!("total positions before: {positions_before}");

    tree.remove_unevaluated();
    let positions_after_unevaluated = tree.total();
    info!("total positions after removing unevaluated: {positions_after_unevaluated}");

    let root = tree.root_key().clone();
    tree.correct_probabilities(&root, 1.0)?;
    let positions_after_probability = tree.total();
    info!("total positions after removing low probability: {positions_after_probability}");

    let variants_saved = export_variants(tree, writer, config.player())?;
    info!("total variants saved: {variants_saved}");

    Ok(RunReport {
        ingest,
        positions_before,
        positions_after_unevaluated,
        positions_after_probability,
        variants_saved,
    })
}
