use super::*;

#[test]
fn test_color_helpers() {
    assert_eq!(Color::White.other(), Color::Black);
    assert_eq!(Color::Black.other(), Color::White);
    assert_eq!(Color::White.forward(), -1);
    assert_eq!(Color::Black.forward(), 1);
    assert_eq!(Color::White.pawn_row(), 6);
    assert_eq!(Color::Black.pawn_row(), 1);
}

#[test]
fn test_square_bounds() {
    assert!(Square::new(7, 7).is_some());
    assert!(Square::new(8, 0).is_none());
    assert!(Square::new(0, 8).is_none());
    assert_eq!(Square::from_index(63), Square::new(7, 7));
    assert_eq!(Square::from_index(64), None);

    let a8 = Square::new(0, 0).unwrap();
    assert_eq!(a8.offset(-1, 0), None);
    assert_eq!(a8.offset(1, 2), Square::new(1, 2));
    assert_eq!(Square::all().count(), 64);
}

#[test]
fn test_piece_letters() {
    let wk = Piece::new(Color::White, PieceKind::King);
    let bp = Piece::new(Color::Black, PieceKind::Pawn);
    assert_eq!(wk.letter(), 'K');
    assert_eq!(bp.letter(), 'p');
    assert_eq!(Piece::from_letter('K'), Some(wk));
    assert_eq!(Piece::from_letter('p'), Some(bp));
    assert_eq!(Piece::from_letter('x'), None);
    assert_eq!(wk.to_string(), "White-King");
}

#[test]
fn test_occupant_serializes_as_color_and_kind() {
    let piece = Piece::new(Color::Black, PieceKind::Knight);
    let json = serde_json::to_string(&piece).unwrap();
    assert_eq!(json, r#"{"color":"Black","kind":"Knight"}"#);
    assert_eq!(serde_json::from_str::<Piece>(&json).unwrap(), piece);
}

#[test]
fn test_square_serializes_as_pair() {
    let sq = Square::new(6, 4).unwrap();
    assert_eq!(serde_json::to_string(&sq).unwrap(), "[6,4]");
    assert!(serde_json::from_str::<Square>("[8,0]").is_err());

    let mv = Move::new(sq, Square::new(4, 4).unwrap());
    let json = serde_json::to_string(&mv).unwrap();
    assert_eq!(json, r#"{"from":[6,4],"to":[4,4]}"#);
}
