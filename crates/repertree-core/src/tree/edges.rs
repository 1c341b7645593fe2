use crate::tree::ids::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// represents "playing a particular move from this position."
/// Holds how many games took the move and the position it leads to.
pub struct MoveEdge {
    child: NodeId,
    count: u64,
}

impl MoveEdge {
    /// Create a new edge.
    /// The count starts at 0; `record` is called for every traversal.
    pub fn new(child: NodeId) -> Self {
        MoveEdge { child, count: 0 }
    }

    /// Position reached by this move
    pub fn child(&self) -> NodeId {
        self.child
    }

    /// Number of games that played this move
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Increase the traversal counter by 1.
    pub fn record(&mut self) {
        self.count += 1;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
/// Back-link from a position to one edge that leads into it.
pub struct IncomingEdge {
    pub parent: NodeId,
    pub mv: String,
}
