use std::collections::{BTreeMap, BTreeSet};

use crate::tree::{
    edges::{IncomingEdge, MoveEdge},
    evaluation::Evaluation,
    ids::{NodeId, PositionKey},
};

#[derive(Debug, Clone)]
/// Aggregated statistics for one position across every ingested game.
pub struct Position {
    key: PositionKey,
    occurrences: u64,
    variants: BTreeMap<String, u64>,
    possible_moves: BTreeMap<String, MoveEdge>,
    incoming: BTreeSet<IncomingEdge>,
    min_ply: Option<u32>,
    evaluation: Option<Evaluation>,
    probability: Option<f64>,
    best_parent: Option<IncomingEdge>,
    running_probability: f64,
}

impl Position {
    /// Create a position that has not been visited yet
    pub fn new(key: PositionKey) -> Self {
        Position {
            key,
            occurrences: 0,
            variants: BTreeMap::new(),
            possible_moves: BTreeMap::new(),
            incoming: BTreeSet::new(),
            min_ply: None,
            evaluation: None,
            probability: None,
            best_parent: None,
            running_probability: 1.0,
        }
    }

    /// Count one more game reaching this position through `move_sequence`.
    /// The first evaluation ever seen sticks.
    pub fn record_visit(&mut self, move_sequence: &str, ply: u32, evaluation: Option<Evaluation>) {
        self.occurrences += 1;
        *self.variants.entry(move_sequence.to_string()).or_insert(0) += 1;
        self.min_ply = Some(self.min_ply.map_or(ply, |current| current.min(ply)));
        if self.evaluation.is_none() {
            self.evaluation = evaluation;
        }
    }

    /// Count one more game leaving this position with `mv`.
    pub fn record_outgoing_move(&mut self, mv: &str, child: NodeId) {
        self.possible_moves
            .entry(mv.to_string())
            .or_insert_with(|| MoveEdge::new(child))
            .record();
    }

    /// Fraction of the visits to this position that continued with `mv`.
    /// Unvisited positions and unknown moves give 0.0.
    pub fn move_probability(&self, mv: &str) -> f64 {
        if self.occurrences == 0 {
            return 0.0;
        }
        self.possible_moves
            .get(mv)
            .map_or(0.0, |edge| edge.count() as f64 / self.occurrences as f64)
    }

    pub fn is_leaf(&self) -> bool {
        self.possible_moves.is_empty()
    }

    pub fn is_evaluated(&self) -> bool {
        self.evaluation.is_some()
    }

    pub fn key(&self) -> &PositionKey {
        &self.key
    }

    pub fn occurrences(&self) -> u64 {
        self.occurrences
    }

    /// Move sequences that reached this position and how often
    pub fn variants(&self) -> &BTreeMap<String, u64> {
        &self.variants
    }

    /// Most played move sequence; ties go to the lexicographically smallest.
    pub fn most_frequent_variant(&self) -> Option<&str> {
        let mut best: Option<(&str, u64)> = None;
        for (variant, count) in &self.variants {
            if best.is_none_or(|(_, best_count)| *count > best_count) {
                best = Some((variant.as_str(), *count));
            }
        }
        best.map(|(variant, _)| variant)
    }

    /// Outgoing edges keyed by move
    pub fn possible_moves(&self) -> &BTreeMap<String, MoveEdge> {
        &self.possible_moves
    }

    pub fn edge(&self, mv: &str) -> Option<&MoveEdge> {
        self.possible_moves.get(mv)
    }

    pub fn min_ply(&self) -> Option<u32> {
        self.min_ply
    }

    pub fn evaluation(&self) -> Option<Evaluation> {
        self.evaluation
    }

    /// Probability of reaching this position along its most likely line.
    /// `None` until probabilities have been corrected.
    pub fn probability(&self) -> Option<f64> {
        self.probability
    }

    /// Edge the finalized probability came through
    pub fn best_parent(&self) -> Option<&IncomingEdge> {
        self.best_parent.as_ref()
    }

    /// Ingestion-time estimate used for early exits
    pub fn running_probability(&self) -> f64 {
        self.running_probability
    }

    pub(crate) fn incoming(&self) -> &BTreeSet<IncomingEdge> {
        &self.incoming
    }

    pub(crate) fn add_incoming(&mut self, parent: NodeId, mv: &str) {
        self.incoming.insert(IncomingEdge {
            parent,
            mv: mv.to_string(),
        });
    }

    pub(crate) fn remove_incoming(&mut self, parent: NodeId, mv: &str) {
        self.incoming.remove(&IncomingEdge {
            parent,
            mv: mv.to_string(),
        });
    }

    pub(crate) fn remove_move(&mut self, mv: &str) -> Option<MoveEdge> {
        self.possible_moves.remove(mv)
    }

    pub(crate) fn set_running_probability(&mut self, probability: f64) {
        self.running_probability = probability;
    }

    pub(crate) fn set_probability(&mut self, probability: Option<f64>, best_parent: Option<IncomingEdge>) {
        self.probability = probability;
        self.best_parent = best_parent;
    }
}
