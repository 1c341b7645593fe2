use std::collections::VecDeque;

use log::debug;

use crate::tree::{ids::NodeId, position_tree::Tree};

impl Tree {
    /// Remove every unevaluated leaf, then every position that became an
    /// unevaluated leaf because of it, until none is left.
    ///
    /// Candidates are processed in ascending id order. The root is kept.
    /// Returns the number of removed positions; calling it again right away
    /// returns 0.
    pub fn remove_unevaluated(&mut self) -> usize {
        let mut queue: VecDeque<NodeId> = self
            .arena
            .iter()
            .filter(|(_, position)| position.is_leaf() && !position.is_evaluated())
            .map(|(id, _)| id)
            .collect();
        let mut removed = 0;

        while let Some(id) = queue.pop_front() {
            if !self.is_unevaluated_leaf(id) {
                continue;
            }

            for parent in self.detach(id) {
                if self.is_unevaluated_leaf(parent) {
                    queue.push_back(parent);
                }
            }
            removed += 1;
        }

        debug!(
            "removed {removed} unevaluated positions, {} left",
            self.total()
        );
        removed
    }

    fn is_unevaluated_leaf(&self, id: NodeId) -> bool {
        id != self.root_id()
            && self
                .arena
                .get(id)
                .is_some_and(|position| position.is_leaf() && !position.is_evaluated())
    }

    /// Remove a position together with every edge touching it.
    /// Returns the parents that lost an outgoing move.
    pub(crate) fn detach(&mut self, id: NodeId) -> Vec<NodeId> {
        let Some(position) = self.arena.remove(id) else {
            return Vec::new();
        };

        let mut parents = Vec::with_capacity(position.incoming().len());
        for incoming in position.incoming() {
            if let Some(parent) = self.arena.get_mut(incoming.parent) {
                parent.remove_move(&incoming.mv);
                parents.push(incoming.parent);
            }
        }

        for (mv, edge) in position.possible_moves() {
            if let Some(child) = self.arena.get_mut(edge.child()) {
                child.remove_incoming(id, mv);
            }
        }

        parents
    }
}
