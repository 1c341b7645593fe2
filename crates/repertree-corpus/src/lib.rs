mod config;
mod error;
mod export;
mod filter;
mod game;
mod ingest;
mod io;
mod pipeline;

pub use config::{EloRange, RepertoireConfig};
pub use error::CorpusError;
pub use export::{PgnExporter, export_variants, movetext};
pub use filter::RatingFilter;
pub use game::{GameRecord, MoveEvent};
pub use ingest::{GameOutcome, IngestStats, Ingestor};
pub use io::{create_output, open_corpus};
pub use pipeline::{RunReport, prune_and_export, run_pipeline};
