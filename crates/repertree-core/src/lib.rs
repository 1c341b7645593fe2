mod tree;

pub use tree::config::TreeConfig;
pub use tree::error::TreeError;
pub use tree::evaluation::Evaluation;
pub use tree::ids::{NodeId, PositionKey, Side};
pub use tree::node::Position;
pub use tree::position_tree::Tree;
pub use tree::snapshot::{MoveSnapshot, NodeSnapshot, TreeSnapshot};
pub use tree::variants::Variant;
pub use tree::{IncomingEdge, MoveEdge};
