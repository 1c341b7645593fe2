use std::fmt;

use serde::{Deserialize, Serialize};

/// Engine score attached to a position.
///
/// The perspective is decided by whoever stores it: the tree keeps scores
/// from the point of view of the side to move.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Evaluation {
    /// Score in hundredths of a pawn.
    #[serde(rename = "cp")]
    Centipawns(i32),
    /// Forced mate in the given number of moves; negative means being mated.
    #[serde(rename = "mate")]
    Mate(i32),
}

impl Evaluation {
    /// The same score seen from the other side of the board.
    ///
    /// Saturates, so `i32::MIN` flips to `i32::MAX`.
    pub fn negate(self) -> Evaluation {
        match self {
            Evaluation::Centipawns(cp) => Evaluation::Centipawns(cp.saturating_neg()),
            Evaluation::Mate(moves) => Evaluation::Mate(moves.saturating_neg()),
        }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evaluation::Centipawns(cp) => {
                let sign = if *cp < 0 { "-" } else { "+" };
                let abs = cp.unsigned_abs();
                write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
            }
            Evaluation::Mate(moves) if *moves < 0 => write!(f, "-M{}", moves.unsigned_abs()),
            Evaluation::Mate(moves) => write!(f, "+M{moves}"),
        }
    }
}
