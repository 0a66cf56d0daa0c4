use super::*;

fn sq(row: usize, col: usize) -> Square {
    Square::new(row, col).unwrap()
}

#[test]
fn test_square_names() {
    assert_eq!(square_name(sq(7, 0)), "a1");
    assert_eq!(square_name(sq(0, 7)), "h8");
    assert_eq!(square_name(sq(6, 4)), "e2");
    assert_eq!(sq(4, 4).to_string(), "e4");
}

#[test]
fn test_parse_square() {
    assert_eq!(parse_square("a1"), Some(sq(7, 0)));
    assert_eq!(parse_square("H8"), Some(sq(0, 7)));
    assert_eq!("e2".parse::<Square>(), Ok(sq(6, 4)));
    assert_eq!(parse_square("i1"), None);
    assert_eq!(parse_square("a9"), None);
    assert_eq!(parse_square("a"), None);
    assert!("e22".parse::<Square>().is_err());
}

#[test]
fn test_move_text() {
    let mv: Move = "e2e4".parse().unwrap();
    assert_eq!(mv, Move::new(sq(6, 4), sq(4, 4)));
    assert_eq!(mv.to_string(), "e2e4");

    assert!("e2e".parse::<Move>().is_err());
    assert!("e2e2".parse::<Move>().is_err());
    assert!("z2e4".parse::<Move>().is_err());
    // promotion suffixes are not part of this rule set
    assert!("e7e8q".parse::<Move>().is_err());
}

#[test]
fn test_parse_move_checks_legality() {
    let board = Board::startpos();
    assert_eq!(
        parse_move(&board, Color::White, "g1f3"),
        Some(Move::new(sq(7, 6), sq(5, 5)))
    );
    assert_eq!(parse_move(&board, Color::White, "e2e5"), None);
    assert_eq!(parse_move(&board, Color::Black, "e2e4"), None);
    assert_eq!(parse_move(&board, Color::Black, "e7e5"), Some(Move::new(sq(1, 4), sq(3, 4))));
}
