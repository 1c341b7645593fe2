use std::io::BufRead;

use log::{debug, warn};
use repertree_core::{Evaluation, PositionKey, Tree};
use serde::Serialize;

use crate::{CorpusError, GameRecord, RatingFilter, RepertoireConfig};

/// Counters collected while feeding games into the tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestStats {
    pub games_read: usize,
    pub games_accepted: usize,
    pub skipped_rating: usize,
    pub skipped_start: usize,
    /// Games dropped because of unreadable lines, headers or moves.
    pub skipped_malformed: usize,
    /// Accepted games cut short by a tree error; their earlier moves are kept.
    pub games_truncated: usize,
    pub moves_recorded: usize,
    pub early_exits: usize,
}

/// What happened to a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Ingested { moves: usize, stopped_early: bool },
    RatingRejected,
    WrongStart,
}

/// Feeds games into a position tree rooted at the standard start position.
#[derive(Debug, Clone)]
pub struct Ingestor {
    config: RepertoireConfig,
    filter: RatingFilter,
    tree: Tree,
    stats: IngestStats,
}

impl Ingestor {
    pub fn new(config: RepertoireConfig) -> Self {
        let tree = Tree::with_config(PositionKey::startpos(), config.tree_config());
        Self::with_tree(config, tree)
    }

    /// Ingest into an existing tree, e.g. one rooted somewhere else.
    pub fn with_tree(config: RepertoireConfig, tree: Tree) -> Self {
        Ingestor {
            filter: RatingFilter::from_config(&config),
            config,
            tree,
            stats: IngestStats::default(),
        }
    }

    pub fn stats(&self) -> &IngestStats {
        &self.stats
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn into_tree(self) -> Tree {
        self.tree
    }

    /// Record one game's main line.
    ///
    /// Recording stops at the first move made with less than `min_time`
    /// on the clock, at the first move deeper than `max_depth`, or when the
    /// tree reports the line has become too rare.
    ///
    /// A tree error ends the game with its earlier moves kept; the game
    /// still counts as accepted and is also counted in `games_truncated`.
    pub fn ingest_game(&mut self, game: &GameRecord) -> Result<GameOutcome, CorpusError> {
        self.stats.games_read += 1;

        if !self.filter.accepts(game)? {
            self.stats.skipped_rating += 1;
            return Ok(GameOutcome::RatingRejected);
        }
        if &game.start != self.tree.root_key() {
            self.stats.skipped_start += 1;
            return Ok(GameOutcome::WrongStart);
        }
        self.stats.games_accepted += 1;

        let mut previous = game.start.clone();
        let mut moves = Vec::with_capacity(game.moves.len());
        let mut stopped_early = false;

        for event in &game.moves {
            if event.clock.is_some_and(|clock| clock < self.config.min_time) {
                break;
            }
            if event.ply > self.config.max_depth {
                break;
            }

            moves.push(event.san.clone());
            // events score for the mover, the tree stores the side to move
            let added = self.tree.add(
                event.key.clone(),
                &previous,
                &moves,
                event.ply,
                event.evaluation.map(Evaluation::negate),
            );
            let keep = match added {
                Ok(keep) => keep,
                Err(err) => {
                    self.stats.games_truncated += 1;
                    return Err(err.into());
                }
            };
            self.stats.moves_recorded += 1;

            if !keep {
                stopped_early = true;
                self.stats.early_exits += 1;
                break;
            }
            previous = event.key.clone();
        }

        Ok(GameOutcome::Ingested {
            moves: moves.len(),
            stopped_early,
        })
    }

    /// Read one JSON game per line until the reader is exhausted.
    ///
    /// A bad line or a bad game is logged and skipped; only I/O failures
    /// abort the read.
    pub fn ingest_reader<R: BufRead>(&mut self, reader: R) -> Result<IngestStats, CorpusError> {
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = idx + 1;
            if line.trim().is_empty() {
                continue;
            }

            let game: GameRecord = match serde_json::from_str(&line) {
                Ok(game) => game,
                Err(source) => {
                    let err = CorpusError::Json {
                        line: line_number,
                        source,
                    };
                    warn!("skipping game: {err}");
                    self.stats.games_read += 1;
                    self.stats.skipped_malformed += 1;
                    continue;
                }
            };

            match self.ingest_game(&game) {
                Ok(outcome) => debug!("line {line_number}: {outcome:?}"),
                Err(CorpusError::Tree(err)) => {
                    warn!("game on line {line_number} stopped early: {err}");
                }
                Err(err) => {
                    warn!("skipping game on line {line_number}: {err}");
                    self.stats.skipped_malformed += 1;
                }
            }
        }

        Ok(self.stats)
    }
}
