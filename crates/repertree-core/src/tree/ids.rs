use std::fmt;

use serde::{Deserialize, Serialize};

/// A wrapper for an integer index used to address positions in the arena
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Get the raw arena slot of this node
    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for NodeId {
    /// Allow for explicit conversion from usize to NodeId
    fn from(value: usize) -> Self {
        NodeId(value)
    }
}

/// Canonical position key: board layout, side to move, castling rights and
/// en-passant target, without move counters (EPD).
///
/// Two move orders that reach the same key are the same node.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PositionKey(String);

impl PositionKey {
    /// Key of the standard initial position.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -";

    /// Key of the standard initial position.
    pub fn startpos() -> Self {
        PositionKey(Self::STARTPOS.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Side to move, read from the second field of the key.
    /// Returns `None` when the key does not follow the EPD layout.
    pub fn side_to_move(&self) -> Option<Side> {
        match self.0.split_whitespace().nth(1)? {
            "w" => Some(Side::White),
            "b" => Some(Side::Black),
            _ => None,
        }
    }
}

impl From<String> for PositionKey {
    fn from(value: String) -> Self {
        PositionKey(value)
    }
}

impl From<&str> for PositionKey {
    fn from(value: &str) -> Self {
        PositionKey(value.to_string())
    }
}

impl fmt::Display for PositionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One of the two players.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Side to move after `ply` half-moves from the initial position.
    pub fn to_move_at(ply: u32) -> Side {
        if ply % 2 == 0 { Side::White } else { Side::Black }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => f.write_str("white"),
            Side::Black => f.write_str("black"),
        }
    }
}
