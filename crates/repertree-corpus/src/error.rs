use repertree_core::{Side, TreeError};
use thiserror::Error;

#[derive(Debug, Error)]
/// Error type for corpus loading, configuration, ingestion and export.
pub enum CorpusError {
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to parse game on line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),

    #[error("invalid repertoire config: {0}")]
    InvalidConfig(String),

    #[error("game has no {side} rating")]
    MissingRating { side: Side },

    #[error("game has an unreadable {side} rating '{value}'")]
    InvalidRating { side: Side, value: String },

    #[error(transparent)]
    Tree(#[from] TreeError),
}
