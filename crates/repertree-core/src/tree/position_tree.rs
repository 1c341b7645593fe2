use crate::tree::{
    arena::Arena,
    config::TreeConfig,
    error::TreeError,
    evaluation::Evaluation,
    ids::{NodeId, PositionKey},
    node::Position,
};

#[derive(Debug, Clone)]
/// Owns every position seen in the corpus, merged by key.
/// The root is created with the tree and is never removed.
pub struct Tree {
    pub(crate) arena: Arena<PositionKey, Position>,
    root: NodeId,
    root_key: PositionKey,
    config: TreeConfig,
}

impl Tree {
    /// Create a tree holding only the root, with default thresholds.
    pub fn new(root_key: PositionKey) -> Self {
        Self::with_config(root_key, TreeConfig::default())
    }

    /// Create a tree holding only the root.
    pub fn with_config(root_key: PositionKey, config: TreeConfig) -> Self {
        let mut arena = Arena::new();
        let root = arena.allocate(root_key.clone(), Position::new(root_key.clone()));
        Tree {
            arena,
            root,
            root_key,
            config,
        }
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    pub fn root_id(&self) -> NodeId {
        self.root
    }

    pub fn root_key(&self) -> &PositionKey {
        &self.root_key
    }

    pub fn root(&self) -> Result<&Position, TreeError> {
        self.node(self.root)
    }

    /// Number of live positions.
    pub fn total(&self) -> usize {
        self.arena.len()
    }

    /// Look up a live position by key.
    pub fn position(&self, key: &PositionKey) -> Option<&Position> {
        self.arena.get(self.arena.id_of(key)?)
    }

    /// Live positions in creation order.
    pub fn positions(&self) -> impl Iterator<Item = &Position> {
        self.arena.iter().map(|(_, position)| position)
    }

    /// Return an immutable node handle.
    pub(crate) fn node(&self, node_id: NodeId) -> Result<&Position, TreeError> {
        self.arena
            .get(node_id)
            .ok_or(TreeError::MissingNode { node_id })
    }

    /// Return a mutable node handle.
    pub(crate) fn node_mut(&mut self, node_id: NodeId) -> Result<&mut Position, TreeError> {
        self.arena
            .get_mut(node_id)
            .ok_or(TreeError::MissingNode { node_id })
    }

    /// Resolve a key that must name a live position.
    pub(crate) fn live_id(&self, key: &PositionKey) -> Result<NodeId, TreeError> {
        match self.arena.slot_of(key) {
            Some(id) if self.arena.is_live(id) => Ok(id),
            Some(_) => Err(TreeError::RemovedPosition { key: key.clone() }),
            None => Err(TreeError::UnknownPosition { key: key.clone() }),
        }
    }

    /// Record that a game reached `current` by playing the last of `moves`
    /// from `previous`.
    ///
    /// `moves` is the whole line from the root, `ply` the half-move count at
    /// `current`. A game's first move from the root also counts as a visit
    /// to the root, so the root's occurrences equal the number of games.
    ///
    /// Returns `Ok(false)` when the caller should stop recording this game:
    /// early exit is enabled, the running probability of `current` fell
    /// below `min_probability` and `previous` has enough visits for that
    /// estimate to be trusted.
    pub fn add(
        &mut self,
        current: PositionKey,
        previous: &PositionKey,
        moves: &[String],
        ply: u32,
        evaluation: Option<Evaluation>,
    ) -> Result<bool, TreeError> {
        let mv = moves.last().ok_or_else(|| TreeError::EmptyMoveSequence {
            key: current.clone(),
        })?;
        let previous_id = self.live_id(previous)?;

        // A move from a position always leads to the same position.
        if let Some(edge) = self.node(previous_id)?.edge(mv) {
            if self.arena.slot_of(&current) != Some(edge.child()) {
                return Err(TreeError::ConflictingMove {
                    key: previous.clone(),
                    mv: mv.clone(),
                    expected: self.node(edge.child())?.key().clone(),
                    found: current,
                });
            }
        }

        let current_id = match self.arena.slot_of(&current) {
            Some(id) if self.arena.is_live(id) => id,
            Some(_) => return Err(TreeError::RemovedPosition { key: current }),
            None => self.arena.allocate(current.clone(), Position::new(current)),
        };

        if previous_id == self.root && moves.len() == 1 {
            self.node_mut(previous_id)?.record_visit("", 0, None);
        }

        let variant = moves.join(" ");
        self.node_mut(current_id)?
            .record_visit(&variant, ply, evaluation);

        let (running, previous_visits) = {
            let node = self.node_mut(previous_id)?;
            node.record_outgoing_move(mv, current_id);
            let running = node.running_probability() * node.move_probability(mv).min(1.0);
            (running, node.occurrences())
        };

        let node = self.node_mut(current_id)?;
        node.add_incoming(previous_id, mv);
        node.set_running_probability(running);

        let trusted = self
            .config
            .early_exit_min_visits
            .is_some_and(|min_visits| previous_visits >= min_visits);
        Ok(!trusted || running >= self.config.min_probability)
    }
}
