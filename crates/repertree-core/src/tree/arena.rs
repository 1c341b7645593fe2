use std::{collections::HashMap, hash::Hash};

use crate::tree::ids::NodeId;

/// Holds all items in dense slots and resolves them by key.
/// Removing an item leaves a tombstone so its id is never handed out again
/// and its key keeps resolving to the dead slot.
#[derive(Debug, Clone)]
pub(crate) struct Arena<K, T> {
    storage: Vec<Option<T>>,
    index: HashMap<K, NodeId>,
    live: usize,
}

impl<K, T> Arena<K, T>
where
    K: Clone + Eq + Hash,
{
    /// Create a new empty storage
    pub fn new() -> Self {
        Arena {
            storage: Vec::new(),
            index: HashMap::new(),
            live: 0,
        }
    }

    /// Allocate a new item under `key` and return the associated NodeId.
    /// The caller must check `slot_of` first; keys are not overwritten.
    pub fn allocate(&mut self, key: K, item: T) -> NodeId {
        let id = NodeId::from(self.storage.len());
        self.storage.push(Some(item));
        self.index.insert(key, id);
        self.live += 1;
        id
    }

    /// Resolve a key to its slot, live or removed.
    pub fn slot_of(&self, key: &K) -> Option<NodeId> {
        self.index.get(key).copied()
    }

    /// Resolve a key to a live item id.
    pub fn id_of(&self, key: &K) -> Option<NodeId> {
        self.slot_of(key).filter(|id| self.is_live(*id))
    }

    pub fn is_live(&self, node_id: NodeId) -> bool {
        matches!(self.storage.get(node_id.index()), Some(Some(_)))
    }

    /// Retrieve an associated item from the Arena
    pub fn get(&self, node_id: NodeId) -> Option<&T> {
        self.storage.get(node_id.index())?.as_ref()
    }

    /// Retrieve an associated item from the Arena as a mutable borrow
    pub fn get_mut(&mut self, node_id: NodeId) -> Option<&mut T> {
        self.storage.get_mut(node_id.index())?.as_mut()
    }

    /// Take an item out of the Arena, leaving a tombstone behind.
    pub fn remove(&mut self, node_id: NodeId) -> Option<T> {
        let item = self.storage.get_mut(node_id.index())?.take();
        if item.is_some() {
            self.live -= 1;
        }
        item
    }

    /// Number of live items
    pub fn len(&self) -> usize {
        self.live
    }

    /// Live items in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &T)> {
        self.storage
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|item| (NodeId::from(i), item)))
    }

    /// Live ids in ascending order
    pub fn ids(&self) -> Vec<NodeId> {
        self.iter().map(|(id, _)| id).collect()
    }
}
