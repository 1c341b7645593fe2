use super::{key, play};
use crate::Tree;

#[test]
fn unevaluated_final_position_is_removed_once() {
    let mut tree = Tree::new(key("start"));
    play(
        &mut tree,
        &[("e4", "a", Some(30)), ("e5", "b", Some(-25)), ("Nf3", "c", None)],
    );
    assert_eq!(tree.total(), 4);

    assert_eq!(tree.remove_unevaluated(), 1);
    assert_eq!(tree.total(), 3);
    assert_eq!(tree.remove_unevaluated(), 0);
    assert_eq!(tree.total(), 3);
}

#[test]
fn removal_cascades_through_exposed_parents() {
    let mut tree = Tree::new(key("start"));
    play(
        &mut tree,
        &[("e4", "a", Some(30)), ("e5", "b", None), ("Nf3", "c", None)],
    );

    assert_eq!(tree.remove_unevaluated(), 2);
    assert_eq!(tree.total(), 2);
    let a = tree.position(&key("a")).expect("evaluated parent survives");
    assert!(a.is_leaf());
    assert!(a.edge("e5").is_none());
}

#[test]
fn removal_stops_at_parents_with_other_children() {
    let mut tree = Tree::new(key("start"));
    play(&mut tree, &[("e4", "a", None), ("e5", "b", None)]);
    play(&mut tree, &[("e4", "a", None), ("c5", "c", Some(40))]);

    assert_eq!(tree.remove_unevaluated(), 1);
    let a = tree.position(&key("a")).expect("a keeps its evaluated child");
    assert!(a.edge("e5").is_none());
    assert_eq!(a.edge("c5").map(|edge| edge.count()), Some(1));
    assert_eq!(a.possible_moves().len(), 1);
}

#[test]
fn root_is_never_removed() {
    let mut tree = Tree::new(key("start"));
    play(&mut tree, &[("e4", "a", None), ("e5", "b", None)]);

    assert_eq!(tree.remove_unevaluated(), 2);
    assert_eq!(tree.total(), 1);
    assert!(tree.root().expect("root survives").is_leaf());
    assert_eq!(tree.remove_unevaluated(), 0);
}

#[test]
fn removed_transposition_is_detached_from_every_parent() {
    let mut tree = Tree::new(key("start"));
    play(
        &mut tree,
        &[("e4", "e4", Some(20)), ("Nf6", "x1", Some(-10)), ("d4", "both", None)],
    );
    play(
        &mut tree,
        &[("d4", "d4", Some(20)), ("Nf6", "x2", Some(-10)), ("e4", "both", None)],
    );

    assert_eq!(tree.remove_unevaluated(), 1);
    assert!(tree.position(&key("both")).is_none());
    assert!(tree.position(&key("x1")).is_some_and(|p| p.is_leaf()));
    assert!(tree.position(&key("x2")).is_some_and(|p| p.is_leaf()));
}
