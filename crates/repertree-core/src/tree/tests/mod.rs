mod probability_tests;
mod prune_tests;

use crate::{Evaluation, PositionKey, Tree};

/// Play one game into the tree. Each step is `(move, resulting key, centipawns)`.
/// Returns whether the tree asked to keep recording after the last move.
pub(crate) fn play(tree: &mut Tree, line: &[(&str, &str, Option<i32>)]) -> bool {
    let mut previous = tree.root_key().clone();
    let mut moves = Vec::new();

    for (idx, (mv, key, cp)) in line.iter().enumerate() {
        moves.push(mv.to_string());
        let current = PositionKey::from(*key);
        let keep = tree
            .add(
                current.clone(),
                &previous,
                &moves,
                idx as u32 + 1,
                cp.map(Evaluation::Centipawns),
            )
            .expect("add should succeed");
        if !keep {
            return false;
        }
        previous = current;
    }
    true
}

pub(crate) fn key(raw: &str) -> PositionKey {
    PositionKey::from(raw)
}
