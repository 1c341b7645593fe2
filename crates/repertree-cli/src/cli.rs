use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use repertree_core::Side;
use repertree_corpus::EloRange;

#[derive(Parser, Debug)]
#[command(name = "repertree")]
#[command(about = "Build an opening repertoire from annotated games")]
pub struct Cli {
    /// Corpus of parsed games, one JSON object per line (`-` for stdin)
    pub corpus: PathBuf,

    /// Where to write the repertoire PGN (`-` for stdout)
    #[arg(short, long, default_value = "repertoire.pgn")]
    pub output: PathBuf,

    /// YAML config; the bundled defaults are used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Ply ceiling for ingested moves
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Stop ingesting a game once the mover has fewer seconds left
    #[arg(long)]
    pub min_time: Option<f64>,

    /// Prune positions reached less often than this
    #[arg(short = 'p', long)]
    pub min_probability: Option<f64>,

    /// Side whose replies are predicted
    #[arg(long, value_enum)]
    pub opponent: Option<Opponent>,

    /// Accepted white ratings, e.g. 1800-2500
    #[arg(long, value_parser = parse_elo_range)]
    pub white_elo: Option<EloRange>,

    /// Accepted black ratings, e.g. 1600-2200
    #[arg(long, value_parser = parse_elo_range)]
    pub black_elo: Option<EloRange>,

    /// Let a rare move end a game early once its position has this many visits
    #[arg(long)]
    pub early_exit_min_visits: Option<u64>,

    /// Write the run report as JSON
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Write the pruned tree as JSON
    #[arg(long)]
    pub dump_tree: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Opponent {
    White,
    Black,
}

impl From<Opponent> for Side {
    fn from(value: Opponent) -> Self {
        match value {
            Opponent::White => Side::White,
            Opponent::Black => Side::Black,
        }
    }
}

fn parse_elo_range(raw: &str) -> Result<EloRange, String> {
    let (min, max) = raw
        .split_once('-')
        .ok_or_else(|| format!("expected MIN-MAX, got '{raw}'"))?;
    let min = min
        .trim()
        .parse()
        .map_err(|_| format!("invalid minimum rating '{min}'"))?;
    let max = max
        .trim()
        .parse()
        .map_err(|_| format!("invalid maximum rating '{max}'"))?;
    Ok(EloRange::new(min, max))
}
