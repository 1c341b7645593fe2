use std::collections::BTreeMap;

use repertree_core::{Evaluation, PositionKey, Side};
use serde::{Deserialize, Serialize};

use crate::CorpusError;

/// One parsed game as handed over by the PGN reader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// PGN tag pairs, e.g. `WhiteElo`.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    /// Position before the first move; the standard start when omitted.
    #[serde(default = "PositionKey::startpos")]
    pub start: PositionKey,
    /// Main line in playing order.
    #[serde(default)]
    pub moves: Vec<MoveEvent>,
}

/// A move applied to the board, annotated with what the PGN carried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveEvent {
    /// Move as written in the game, e.g. `Nf3`.
    pub san: String,
    /// Canonical key of the position after the move.
    pub key: PositionKey,
    /// Half-move count after the move.
    pub ply: u32,
    /// Engine score from the mover's point of view.
    #[serde(default, rename = "eval", skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<Evaluation>,
    /// Seconds left on the mover's clock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clock: Option<f64>,
}

impl GameRecord {
    /// Rating of `side` from the `WhiteElo`/`BlackElo` header.
    pub fn rating(&self, side: Side) -> Result<u32, CorpusError> {
        let header = match side {
            Side::White => "WhiteElo",
            Side::Black => "BlackElo",
        };
        let value = self
            .headers
            .get(header)
            .ok_or(CorpusError::MissingRating { side })?;
        value
            .trim()
            .parse()
            .map_err(|_| CorpusError::InvalidRating {
                side,
                value: value.clone(),
            })
    }
}
