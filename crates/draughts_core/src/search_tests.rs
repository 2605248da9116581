use super::*;
use crate::types::Pos;

fn p(row: u8, col: u8) -> Pos {
    Pos::new(row, col)
}

fn board(diagram: &str) -> Board {
    Board::from_diagram(diagram).expect("test diagram")
}

#[test]
fn test_depth_zero_is_a_leaf() {
    let mut nodes = 0;
    let out = best_move(&Board::initial(), Side::Dark, 0, &mut nodes);
    assert_eq!(out.score, 0);
    assert!(out.best_move.is_none());
    assert_eq!(nodes, 0);
}

#[test]
fn test_side_without_moves_is_terminal_at_any_depth() {
    let b = Board::empty().with_cell(p(5, 2), Some(crate::types::Piece::man(Side::Light)));
    for depth in 1..=4 {
        let mut nodes = 0;
        let out = best_move(&b, Side::Dark, depth, &mut nodes);
        assert_eq!(out, SearchOutcome { score: -1, best_move: None });
        assert_eq!(nodes, 0);
    }
}

#[test]
fn test_dark_maximizes_material() {
    let b = board(
        "
        ........
        ........
        .d...d..
        ..l...L.
        ........
        ........
        ........
        ........
        ",
    );
    let mut nodes = 0;
    let out = best_move(&b, Side::Dark, 1, &mut nodes);
    assert_eq!(out.best_move, Some(Move::single(p(2, 5), p(4, 7))));
    assert_eq!(out.score, 1);
    assert_eq!(nodes, 2);
}

#[test]
fn test_light_minimizes_material() {
    let b = board(
        "
        ........
        ........
        ........
        ........
        .d...D..
        ..l...l.
        ........
        ........
        ",
    );
    let mut nodes = 0;
    let out = best_move(&b, Side::Light, 1, &mut nodes);
    assert_eq!(out.best_move, Some(Move::single(p(5, 6), p(3, 4))));
    assert_eq!(out.score, -1);
}

#[test]
fn test_prefers_double_jump_over_earlier_single() {
    let b = board(
        "
        .....d..
        .d....l.
        ..l.....
        ........
        ....l...
        ........
        ........
        ........
        ",
    );
    let moves = moves_for_side(&b, Side::Dark);
    assert_eq!(moves.len(), 2);
    assert_eq!(moves[0], Move::single(p(0, 5), p(2, 7)));

    let mut nodes = 0;
    let out = best_move(&b, Side::Dark, 1, &mut nodes);
    assert_eq!(
        out.best_move,
        Some(Move::new(vec![p(1, 1), p(3, 3), p(5, 5)]))
    );
    assert_eq!(out.score, 1);
}

#[test]
fn test_first_move_wins_ties() {
    let b = Board::initial();
    for depth in 1..=2 {
        let mut nodes = 0;
        let out = best_move(&b, Side::Dark, depth, &mut nodes);
        assert_eq!(out.score, 0);
        assert_eq!(out.best_move, Some(moves_for_side(&b, Side::Dark)[0].clone()));
    }
}

#[test]
fn test_search_is_deterministic() {
    let b = Board::initial();
    let mut n1 = 0;
    let mut n2 = 0;
    let first = best_move(&b, Side::Light, 4, &mut n1);
    let second = best_move(&b, Side::Light, 4, &mut n2);
    assert_eq!(first, second);
    assert_eq!(n1, n2);
}

#[test]
fn test_pruning_matches_full_minimax() {
    let positions = [
        Board::initial(),
        board(
            "
            .d.d.d..
            d...d...
            ...d.d.d
            ..d.....
            .l.l.l..
            l.....l.
            ...l.l.l
            l.l.....
            ",
        ),
        board(
            "
            ........
            ..d.d...
            .....D..
            ..l.....
            ...d....
            L.......
            .....l..
            ........
            ",
        ),
    ];

    for b in &positions {
        for side in Side::ALL {
            for depth in 1..=5 {
                let mut pruned_nodes = 0;
                let mut full_nodes = 0;
                let pruned = best_move(b, side, depth, &mut pruned_nodes);
                let full = minimax(b, side, depth, &mut full_nodes);
                assert_eq!(
                    pruned, full,
                    "alpha-beta disagrees with minimax for {side} at depth {depth}\n{b}"
                );
                assert!(pruned_nodes <= full_nodes);
            }
        }
    }
}

#[test]
fn test_pruning_visits_fewer_nodes_at_depth() {
    let b = Board::initial();
    let mut pruned_nodes = 0;
    let mut full_nodes = 0;
    best_move(&b, Side::Light, 5, &mut pruned_nodes);
    minimax(&b, Side::Light, 5, &mut full_nodes);
    assert_eq!(full_nodes, 7 + 49 + 302 + 1469 + 7361);
    assert!(pruned_nodes < full_nodes);
}
