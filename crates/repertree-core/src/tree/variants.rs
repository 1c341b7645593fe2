use serde::Serialize;

use crate::tree::{
    evaluation::Evaluation,
    ids::{NodeId, PositionKey},
    node::Position,
    position_tree::Tree,
};

/// One surviving line from the root to a leaf.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Variant {
    pub moves: Vec<String>,
    pub key: PositionKey,
    pub occurrences: u64,
    pub probability: Option<f64>,
    pub evaluation: Option<Evaluation>,
}

impl Variant {
    /// Moves joined with single spaces, e.g. `e4 e5 Nf3`.
    pub fn line(&self) -> String {
        self.moves.join(" ")
    }
}

impl Tree {
    /// Hand every live leaf other than the root to `save`, in creation order.
    ///
    /// After `correct_probabilities` the line is the one the leaf's
    /// probability was computed along; before that, the most frequent move
    /// sequence that reached the leaf. Returns how many lines were saved.
    ///
    /// An unevaluated position whose children were all pruned by probability
    /// is a leaf by then and is saved without an evaluation.
    pub fn save_variants<F, E>(&self, mut save: F) -> Result<usize, E>
    where
        F: FnMut(Variant) -> Result<(), E>,
    {
        let mut saved = 0;
        for (id, position) in self.arena.iter() {
            if id == self.root_id() || !position.is_leaf() {
                continue;
            }

            save(Variant {
                moves: self.line_to(id, position),
                key: position.key().clone(),
                occurrences: position.occurrences(),
                probability: position.probability(),
                evaluation: position.evaluation(),
            })?;
            saved += 1;
        }
        Ok(saved)
    }

    /// Collect the lines `save_variants` would produce.
    pub fn variants(&self) -> Vec<Variant> {
        let mut variants = Vec::new();
        let saved = self.save_variants(|variant| {
            variants.push(variant);
            Ok::<(), std::convert::Infallible>(())
        });
        match saved {
            Ok(_) => variants,
            Err(never) => match never {},
        }
    }

    fn line_to(&self, id: NodeId, position: &Position) -> Vec<String> {
        self.best_line(id).unwrap_or_else(|| {
            position
                .most_frequent_variant()
                .map(|variant| variant.split_whitespace().map(str::to_string).collect())
                .unwrap_or_default()
        })
    }

    /// Follow best-parent links back to the root.
    /// `None` if probabilities are missing or a link no longer resolves.
    fn best_line(&self, id: NodeId) -> Option<Vec<String>> {
        let mut moves = Vec::new();
        let mut current = id;

        while current != self.root_id() {
            if moves.len() > self.total() {
                return None;
            }
            let position = self.arena.get(current)?;
            let parent = position.best_parent()?;
            let live_edge = self
                .arena
                .get(parent.parent)?
                .edge(&parent.mv)
                .is_some_and(|edge| edge.child() == current);
            if !live_edge {
                return None;
            }
            moves.push(parent.mv.clone());
            current = parent.parent;
        }

        moves.reverse();
        Some(moves)
    }
}
