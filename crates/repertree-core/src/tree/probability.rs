use std::{
    cmp::Ordering,
    collections::{BinaryHeap, HashMap},
};

use log::debug;

use crate::tree::{
    edges::IncomingEdge,
    error::TreeError,
    ids::{NodeId, PositionKey},
    position_tree::Tree,
};

/// Heap entry: most probable first, then shallower, then older.
#[derive(Debug, Clone, Copy)]
struct Frontier {
    probability: f64,
    min_ply: u32,
    node: NodeId,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.probability
            .total_cmp(&other.probability)
            .then_with(|| other.min_ply.cmp(&self.min_ply))
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl Tree {
    /// Assign every position the probability of its most likely line from
    /// `root_key`, then prune positions below `min_probability`.
    ///
    /// Edge weights are move frequencies in `[0, 1]`, so the best-first
    /// order finalizes each position once, after every position that could
    /// still improve it. Repeated positions (cycles through the same key)
    /// cannot raise a probability and are handled by the same search.
    ///
    /// Positions that cannot be reached from `root_key` are pruned as well.
    /// Returns the number of pruned positions.
    pub fn correct_probabilities(
        &mut self,
        root_key: &PositionKey,
        root_probability: f64,
    ) -> Result<usize, TreeError> {
        if !(0.0..=1.0).contains(&root_probability) {
            return Err(TreeError::InvalidProbability {
                value: root_probability,
            });
        }
        let start = self.live_id(root_key)?;

        let mut tentative: HashMap<NodeId, (f64, Option<IncomingEdge>)> = HashMap::new();
        let mut finalized: HashMap<NodeId, (f64, Option<IncomingEdge>)> = HashMap::new();
        let mut heap = BinaryHeap::new();

        tentative.insert(start, (root_probability, None));
        heap.push(Frontier {
            probability: root_probability,
            min_ply: self.node(start)?.min_ply().unwrap_or(0),
            node: start,
        });

        while let Some(Frontier { node, .. }) = heap.pop() {
            if finalized.contains_key(&node) {
                continue;
            }
            let Some((probability, best_parent)) = tentative.remove(&node) else {
                continue;
            };
            finalized.insert(node, (probability, best_parent));

            let position = self.node(node)?;
            for (mv, edge) in position.possible_moves() {
                let child = edge.child();
                if finalized.contains_key(&child) {
                    continue;
                }

                let candidate = probability * position.move_probability(mv).min(1.0);
                let improves = tentative
                    .get(&child)
                    .is_none_or(|(current, _)| candidate > *current);
                if improves {
                    tentative.insert(
                        child,
                        (
                            candidate,
                            Some(IncomingEdge {
                                parent: node,
                                mv: mv.clone(),
                            }),
                        ),
                    );
                    heap.push(Frontier {
                        probability: candidate,
                        min_ply: self.node(child)?.min_ply().unwrap_or(u32::MAX),
                        node: child,
                    });
                }
            }
        }

        for id in self.arena.ids() {
            let (probability, best_parent) = match finalized.remove(&id) {
                Some((probability, best_parent)) => (Some(probability), best_parent),
                None => (None, None),
            };
            self.node_mut(id)?.set_probability(probability, best_parent);
        }

        let min_probability = self.config().min_probability;
        let root = self.root_id();
        let doomed: Vec<NodeId> = self
            .arena
            .iter()
            .filter(|(id, position)| {
                *id != root
                    && position
                        .probability()
                        .is_none_or(|probability| probability < min_probability)
            })
            .map(|(id, _)| id)
            .collect();

        for id in &doomed {
            self.detach(*id);
        }

        debug!(
            "pruned {} positions below probability {min_probability}, {} left",
            doomed.len(),
            self.total()
        );
        Ok(doomed.len())
    }
}
