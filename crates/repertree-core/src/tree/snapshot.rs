use serde::Serialize;

use crate::tree::{error::TreeError, evaluation::Evaluation, position_tree::Tree};

#[derive(Debug, Clone, Serialize)]
pub struct TreeSnapshot {
    pub schema_version: u32,
    pub root_key: String,
    pub node_count: usize,
    pub nodes: Vec<NodeSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NodeSnapshot {
    pub node_id: usize,
    pub key: String,
    pub occurrences: u64,
    pub min_ply: Option<u32>,
    pub evaluation: Option<Evaluation>,
    pub probability: Option<f64>,
    pub moves: Vec<MoveSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MoveSnapshot {
    pub mv: String,
    pub count: u64,
    pub child_key: String,
}

impl Tree {
    /// Capture every live position and its outgoing moves.
    pub fn snapshot(&self) -> Result<TreeSnapshot, TreeError> {
        let mut nodes = Vec::with_capacity(self.total());
        for (id, position) in self.arena.iter() {
            let mut moves = Vec::with_capacity(position.possible_moves().len());
            for (mv, edge) in position.possible_moves() {
                moves.push(MoveSnapshot {
                    mv: mv.clone(),
                    count: edge.count(),
                    child_key: self.node(edge.child())?.key().to_string(),
                });
            }
            nodes.push(NodeSnapshot {
                node_id: id.index(),
                key: position.key().to_string(),
                occurrences: position.occurrences(),
                min_ply: position.min_ply(),
                evaluation: position.evaluation(),
                probability: position.probability(),
                moves,
            });
        }

        Ok(TreeSnapshot {
            schema_version: 1,
            root_key: self.root_key().to_string(),
            node_count: nodes.len(),
            nodes,
        })
    }
}

impl TreeSnapshot {
    /// Render the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
