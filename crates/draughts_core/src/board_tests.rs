use super::*;

#[test]
fn test_initial_layout() {
    let b = Board::initial();
    assert_eq!(b.count(Side::Dark), 12);
    assert_eq!(b.count(Side::Light), 12);

    for (p, pc) in b.occupied() {
        assert!(p.is_dark_square(), "piece on light square {p}");
        assert_eq!(pc.rank, Rank::Man);
        match pc.side {
            Side::Dark => assert!(p.row <= 2),
            Side::Light => assert!(p.row >= 5),
        }
    }
    assert_eq!(b.cell_at(Pos::new(0, 1)), Some(Piece::man(Side::Dark)));
    assert_eq!(b.cell_at(Pos::new(0, 0)), None);
    assert_eq!(b.cell_at(Pos::new(7, 0)), Some(Piece::man(Side::Light)));
    assert!(b.is_empty(Pos::new(3, 2)));
    assert!(b.is_empty(Pos::new(4, 1)));
}

#[test]
fn test_with_cell_leaves_original_untouched() {
    let original = Board::initial();
    let changed = original.with_cell(Pos::new(4, 1), Some(Piece::king(Side::Light)));

    assert!(original.is_empty(Pos::new(4, 1)));
    assert_eq!(
        changed.cell_at(Pos::new(4, 1)),
        Some(Piece::king(Side::Light))
    );
}

#[test]
fn test_pieces_scan_order_is_row_major() {
    let b = Board::initial();
    let squares: Vec<Pos> = b.pieces(Side::Dark).map(|(p, _)| p).collect();
    let mut sorted = squares.clone();
    sorted.sort();
    assert_eq!(squares, sorted);
    assert_eq!(squares[0], Pos::new(0, 1));
    assert_eq!(squares[4], Pos::new(1, 0));
}

#[test]
fn test_diagram_matches_initial() {
    let b = Board::from_diagram(
        "
        . d . d . d . d
        d . d . d . d .
        . d . d . d . d
        . . . . . . . .
        . . . . . . . .
        l . l . l . l .
        . l . l . l . l
        l . l . l . l .
        ",
    )
    .unwrap();
    assert_eq!(b, Board::initial());
}

#[test]
fn test_diagram_errors() {
    assert_eq!(
        Board::from_diagram("........\n........"),
        Err(ParseError::RowCount(2))
    );

    let short_row = "........\n".repeat(7) + ".......";
    assert_eq!(
        Board::from_diagram(&short_row),
        Err(ParseError::RowLength { row: 7, len: 7 })
    );

    let bad_symbol = "........\n".repeat(7) + "...x....";
    assert_eq!(
        bad_symbol.parse::<Board>(),
        Err(ParseError::UnknownSymbol('x'))
    );
}

#[test]
fn test_display_renders_indexed_grid() {
    let text = Board::initial().to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "   0 1 2 3 4 5 6 7");
    assert_eq!(lines[1], "0  . d . d . d . d");
    assert_eq!(lines[8], "7  l . l . l . l .");
}

#[test]
fn test_display_output_parses_back_without_header() {
    let b = Board::empty()
        .with_cell(Pos::new(3, 2), Some(Piece::king(Side::Dark)))
        .with_cell(Pos::new(6, 5), Some(Piece::man(Side::Light)));
    let body: String = b
        .to_string()
        .lines()
        .skip(1)
        .map(|line| format!("{}\n", &line[2..]))
        .collect();
    assert_eq!(Board::from_diagram(&body), Ok(b));
}
