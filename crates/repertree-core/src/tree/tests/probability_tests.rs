use super::{key, play};
use crate::{Tree, TreeConfig, TreeError};

fn tree_with_min(min_probability: f64) -> Tree {
    Tree::with_config(
        key("start"),
        TreeConfig {
            min_probability,
            early_exit_min_visits: None,
        },
    )
}

fn probability(tree: &Tree, raw: &str) -> Option<f64> {
    tree.position(&key(raw)).and_then(|p| p.probability())
}

#[test]
fn single_line_keeps_probability_one() {
    let mut tree = tree_with_min(0.1);
    play(
        &mut tree,
        &[("e4", "a", Some(30)), ("e5", "b", Some(-30)), ("Nf3", "c", Some(25))],
    );

    let pruned = tree
        .correct_probabilities(&key("start"), 1.0)
        .expect("propagation should succeed");

    assert_eq!(pruned, 0);
    for raw in ["start", "a", "b", "c"] {
        assert_eq!(probability(&tree, raw), Some(1.0));
    }
}

#[test]
fn rare_branch_and_its_subtree_are_pruned() {
    let mut tree = tree_with_min(0.3);
    for _ in 0..3 {
        play(&mut tree, &[("e4", "a", Some(30)), ("e5", "b", Some(-30))]);
    }
    play(&mut tree, &[("d4", "c", Some(20)), ("d5", "d", Some(-20))]);

    let pruned = tree
        .correct_probabilities(&key("start"), 1.0)
        .expect("propagation should succeed");

    assert_eq!(pruned, 2);
    assert_eq!(tree.total(), 3);
    assert_eq!(probability(&tree, "a"), Some(0.75));
    assert_eq!(probability(&tree, "b"), Some(0.75));
    assert!(tree.position(&key("c")).is_none());
    assert!(tree.position(&key("d")).is_none());
    assert!(tree.root().expect("root").edge("d4").is_none());
}

#[test]
fn transposition_takes_the_most_probable_path() {
    let mut tree = tree_with_min(0.1);
    play(&mut tree, &[("x", "X", Some(0)), ("y", "T", Some(0))]);
    play(&mut tree, &[("x", "X", Some(0)), ("z", "Z", Some(0))]);
    play(&mut tree, &[("w", "W", Some(0)), ("v", "T", Some(0))]);
    play(&mut tree, &[("w", "W", Some(0)), ("v", "T", Some(0))]);

    tree.correct_probabilities(&key("start"), 1.0)
        .expect("propagation should succeed");

    assert_eq!(probability(&tree, "X"), Some(0.5));
    assert_eq!(probability(&tree, "Z"), Some(0.25));
    assert_eq!(probability(&tree, "T"), Some(0.5));
    let best = tree
        .position(&key("T"))
        .and_then(|p| p.best_parent())
        .expect("T has a best parent");
    assert_eq!(best.mv, "v");
}

#[test]
fn root_probability_is_exact_and_propagation_is_idempotent() {
    let mut tree = tree_with_min(0.25);
    for line in [
        [("e4", "a", Some(1)), ("e5", "b", Some(1))],
        [("e4", "a", Some(1)), ("c5", "c", Some(1))],
        [("d4", "d", Some(1)), ("d5", "e", Some(1))],
        [("c4", "f", Some(1)), ("e5", "g", Some(1))],
        [("e4", "a", Some(1)), ("e5", "b", Some(1))],
    ] {
        play(&mut tree, &line);
    }

    let first = tree
        .correct_probabilities(&key("start"), 1.0)
        .expect("first pass");
    let total = tree.total();
    let second = tree
        .correct_probabilities(&key("start"), 1.0)
        .expect("second pass");

    assert!(first > 0);
    assert_eq!(second, 0);
    assert_eq!(tree.total(), total);
    assert_eq!(probability(&tree, "start"), Some(1.0));
    for position in tree.positions() {
        let p = position.probability().expect("survivors have a probability");
        assert!(p >= 0.25, "{} survived with {p}", position.key());
    }
}

#[test]
fn repeated_position_does_not_hang_propagation() {
    let mut tree = tree_with_min(0.01);
    play(
        &mut tree,
        &[
            ("Nf3", "a", Some(0)),
            ("Nf6", "b", Some(0)),
            ("Ng1", "c", Some(0)),
            ("Ng8", "start", Some(0)),
        ],
    );

    tree.correct_probabilities(&key("start"), 1.0)
        .expect("propagation should terminate");

    assert_eq!(probability(&tree, "start"), Some(1.0));
    assert_eq!(tree.total(), 4);
    assert!(probability(&tree, "c").is_some_and(|p| p <= 1.0));
}

#[test]
fn invalid_arguments_are_rejected() {
    let mut tree = tree_with_min(0.1);
    play(&mut tree, &[("e4", "a", Some(30))]);

    assert_eq!(
        tree.correct_probabilities(&key("start"), 1.5),
        Err(TreeError::InvalidProbability { value: 1.5 })
    );
    assert!(matches!(
        tree.correct_probabilities(&key("start"), f64::NAN),
        Err(TreeError::InvalidProbability { .. })
    ));
    assert_eq!(
        tree.correct_probabilities(&key("missing"), 1.0),
        Err(TreeError::UnknownPosition { key: key("missing") })
    );
    assert_eq!(tree.total(), 2);
}
