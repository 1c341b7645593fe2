mod arena;
pub mod config;
mod edges;
pub mod error;
pub mod evaluation;
pub mod ids;
pub mod node;
pub mod position_tree;
mod probability;
mod prune;
pub mod snapshot;
pub mod variants;

pub use edges::{IncomingEdge, MoveEdge};

#[cfg(test)]
mod tests;
