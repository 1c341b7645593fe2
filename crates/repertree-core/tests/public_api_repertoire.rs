use repertree_core::{Evaluation, PositionKey, Tree, TreeConfig};

const AFTER_E4: &str = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq -";
const AFTER_E5: &str = "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq -";
const AFTER_NF3: &str = "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq -";

fn ingest_open_game(tree: &mut Tree, last_evaluation: Option<Evaluation>) {
    let steps = [
        ("e4", AFTER_E4, Some(Evaluation::Centipawns(-30))),
        ("e5", AFTER_E5, Some(Evaluation::Centipawns(25))),
        ("Nf3", AFTER_NF3, last_evaluation),
    ];

    let mut previous = PositionKey::startpos();
    let mut moves = Vec::new();
    for (ply, (mv, key, evaluation)) in steps.into_iter().enumerate() {
        moves.push(mv.to_string());
        let current = PositionKey::from(key);
        let keep = tree
            .add(current.clone(), &previous, &moves, ply as u32 + 1, evaluation)
            .expect("add should succeed");
        assert!(keep);
        previous = current;
    }
}

#[test]
fn public_fully_evaluated_line_is_exported_whole() {
    let mut tree = Tree::with_config(PositionKey::startpos(), TreeConfig::default());
    ingest_open_game(&mut tree, Some(Evaluation::Centipawns(-20)));

    assert_eq!(tree.total(), 4);
    assert_eq!(tree.remove_unevaluated(), 0);
    assert_eq!(
        tree.correct_probabilities(&PositionKey::startpos(), 1.0)
            .expect("propagation should succeed"),
        0
    );
    for position in tree.positions() {
        assert_eq!(position.probability(), Some(1.0));
    }

    let mut lines = Vec::new();
    let saved = tree
        .save_variants(|variant| {
            lines.push(variant.line());
            Ok::<(), std::io::Error>(())
        })
        .expect("export should succeed");
    assert_eq!(saved, 1);
    assert_eq!(lines, vec!["e4 e5 Nf3".to_string()]);
}

#[test]
fn public_unevaluated_tail_is_cut_before_export() {
    let mut tree = Tree::new(PositionKey::startpos());
    ingest_open_game(&mut tree, None);

    let before = tree.total();
    tree.remove_unevaluated();
    assert_eq!(tree.total(), before - 1);

    tree.correct_probabilities(&PositionKey::startpos(), 1.0)
        .expect("propagation should succeed");
    let variants = tree.variants();
    assert_eq!(variants.len(), 1);
    assert_eq!(variants[0].line(), "e4 e5");
    assert_eq!(variants[0].key, PositionKey::from(AFTER_E5));
}

#[test]
fn public_snapshot_lists_live_positions() {
    let mut tree = Tree::new(PositionKey::startpos());
    ingest_open_game(&mut tree, Some(Evaluation::Mate(4)));

    let snapshot = tree.snapshot().expect("snapshot should succeed");
    assert_eq!(snapshot.node_count, 4);
    assert_eq!(snapshot.root_key, PositionKey::STARTPOS);
    assert_eq!(snapshot.nodes[0].moves[0].mv, "e4");
    assert_eq!(snapshot.nodes[0].moves[0].child_key, AFTER_E4);

    let json = snapshot.to_json().expect("snapshot serializes");
    assert!(json.contains("\"mate\": 4"));
}
