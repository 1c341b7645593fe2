use std::fmt;

use crate::tree::ids::{NodeId, PositionKey};

/// Error type for position tree construction and pruning operations.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeError {
    /// Attempted to access a node id that is not live in the arena.
    MissingNode { node_id: NodeId },
    /// A move was added from a position the tree has never seen.
    UnknownPosition { key: PositionKey },
    /// A position pruned earlier in the run was named again.
    RemovedPosition { key: PositionKey },
    /// `add` was called without any move to record.
    EmptyMoveSequence { key: PositionKey },
    /// The same move from the same position led to two different positions.
    ConflictingMove {
        key: PositionKey,
        mv: String,
        expected: PositionKey,
        found: PositionKey,
    },
    /// Root probability outside `[0, 1]`.
    InvalidProbability { value: f64 },
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::MissingNode { node_id } => {
                write!(f, "missing node with id {}", node_id.index())
            }
            TreeError::UnknownPosition { key } => write!(f, "unknown position {key}"),
            TreeError::RemovedPosition { key } => {
                write!(f, "position {key} was removed earlier in this run")
            }
            TreeError::EmptyMoveSequence { key } => {
                write!(f, "no move recorded for position {key}")
            }
            TreeError::ConflictingMove {
                key,
                mv,
                expected,
                found,
            } => write!(
                f,
                "move {mv} from {key} leads to {expected} but was reported as {found}"
            ),
            TreeError::InvalidProbability { value } => {
                write!(f, "probability {value} is outside [0, 1]")
            }
        }
    }
}

impl std::error::Error for TreeError {}
