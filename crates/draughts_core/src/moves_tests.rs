use super::*;

fn p(row: u8, col: u8) -> Pos {
    Pos::new(row, col)
}

#[test]
fn test_simple_move_is_not_capture() {
    let mv = Move::single(p(5, 0), p(4, 1));
    assert!(!mv.is_capture());
    assert_eq!(mv.captured().count(), 0);
    assert_eq!(mv.to_string(), "(5,0)-(4,1)");
}

#[test]
fn test_chain_reports_captured_squares() {
    let mv = Move::new(vec![p(5, 2), p(3, 4), p(1, 2)]);
    assert!(mv.is_capture());
    assert_eq!(mv.from(), p(5, 2));
    assert_eq!(mv.to(), p(1, 2));
    assert_eq!(mv.captured().collect::<Vec<_>>(), vec![p(4, 3), p(2, 3)]);
    assert_eq!(mv.to_string(), "(5,2)x(3,4)x(1,2)");
}

#[test]
fn test_king_chain_returning_to_same_row_is_not_capture() {
    // Every leg is a jump, but the move ends on its starting row.
    let mv = Move::new(vec![p(4, 1), p(2, 3), p(4, 5)]);
    assert_eq!(mv.captured().count(), 2);
    assert!(mv.is_jump());
    assert!(!mv.is_capture());
    assert_eq!(mv.to_string(), "(4,1)x(2,3)x(4,5)");
}

#[test]
fn test_capture_is_decided_by_endpoint_rows() {
    assert!(Move::single(p(5, 2), p(3, 4)).is_capture());
    assert!(Move::new(vec![p(6, 1), p(4, 3), p(2, 1)]).is_capture());
    assert!(!Move::single(p(5, 2), p(4, 3)).is_capture());
    assert!(!Move::single(p(5, 2), p(4, 3)).is_jump());
}

#[test]
fn test_parse_both_notations() {
    let long: Move = "(5,2)x(3,4)x(1,2)".parse().unwrap();
    let compact: Move = "52x34x12".parse().unwrap();
    assert_eq!(long, compact);

    let step: Move = " (5,0) - (4,1) ".parse().unwrap();
    assert_eq!(step, Move::single(p(5, 0), p(4, 1)));
}

#[test]
fn test_parse_display_round_trip() {
    let mv = Move::new(vec![p(2, 1), p(4, 3), p(6, 5)]);
    assert_eq!(mv.to_string().parse::<Move>(), Ok(mv));
}

#[test]
fn test_parse_rejects_bad_shapes() {
    assert_eq!("52".parse::<Move>(), Err(ParseError::TooShort(1)));
    assert_eq!(
        "58-41".parse::<Move>(),
        Err(ParseError::InvalidSquare("58".to_string()))
    );
    assert_eq!(
        "50-40".parse::<Move>(),
        Err(ParseError::BadStep {
            from: "(5,0)".to_string(),
            to: "(4,0)".to_string()
        })
    );
    assert!("ab-cd".parse::<Move>().is_err());
}

#[test]
fn test_serde_as_position_list() {
    let mv = Move::single(p(2, 1), p(3, 0));
    let json = serde_json::to_string(&mv).unwrap();
    assert_eq!(json, r#"[{"row":2,"col":1},{"row":3,"col":0}]"#);
    let back: Move = serde_json::from_str(&json).unwrap();
    assert_eq!(back, mv);
}

#[test]
fn test_deserialize_rejects_bad_paths() {
    let one_square = serde_json::from_str::<Move>(r#"[{"row":1,"col":2}]"#);
    assert!(one_square.is_err());

    let empty = serde_json::from_str::<Move>("[]");
    assert!(empty.is_err());

    let sideways = serde_json::from_str::<Move>(r#"[{"row":5,"col":0},{"row":5,"col":2}]"#);
    assert!(sideways.is_err());

    let off_board = serde_json::from_str::<Move>(r#"[{"row":9,"col":2},{"row":8,"col":3}]"#);
    assert!(off_board.is_err());
}

#[test]
fn test_try_from_path() {
    assert_eq!(Move::try_from(vec![p(1, 2)]), Err(ParseError::TooShort(1)));
    assert_eq!(
        Move::try_from(vec![p(5, 2), p(3, 4), p(1, 2)]),
        Ok(Move::new(vec![p(5, 2), p(3, 4), p(1, 2)]))
    );
    assert_eq!(
        Move::try_from(vec![p(5, 0), p(2, 3)]),
        Err(ParseError::BadStep {
            from: "(5,0)".to_string(),
            to: "(2,3)".to_string()
        })
    );
}
