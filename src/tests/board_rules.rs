use super::*;

#[test]
fn test_empty_board_everything_legal() {
    let b = Board::standard();
    assert_eq!(81, b.cell_count());
    assert_eq!(81, legal_cells(&b, Color::Black).len());
    assert_eq!(81, legal_cells(&b, Color::White).len());
}

#[test]
fn test_place_and_get() {
    let mut b = Board::new(5).unwrap();
    assert_eq!(Ok(()), b.place(7, Color::Black));
    assert_eq!(Some(Color::Black), b.get(7));
    assert_eq!(None, b.get(8));
    assert_eq!(1, b.stone_count());
    assert_eq!((2, 1), b.coordinate(7));
}

#[test]
fn test_occupied_and_out_of_bounds() {
    let mut b = Board::new(3).unwrap();
    b.place(4, Color::White).unwrap();
    assert_eq!(Err(PlaceError::Occupied(4)), b.place(4, Color::Black));
    assert_eq!(Err(PlaceError::OutOfBounds(9)), b.place(9, Color::Black));
}

#[test]
fn test_suicide_is_illegal() {
    let mut b = board(&[
        ".O.", //
        "O..", //
        "...",
    ]);
    let before = b;
    assert_eq!(Err(PlaceError::Suicide(0)), b.place(0, Color::Black));
    assert_eq!(before, b);
    // White filling its own eye still has liberties through the group.
    assert_eq!(Ok(()), b.place(0, Color::White));
}

#[test]
fn test_capture_is_illegal() {
    let mut b = board(&[
        "OX.", //
        "...", //
        "...",
    ]);
    let before = b;
    assert_eq!(Err(PlaceError::Capture(3)), b.place(3, Color::Black));
    assert_eq!(before, b);
    assert_eq!(Ok(()), b.place(4, Color::Black));
}

#[test]
fn test_capture_of_larger_group_is_illegal() {
    let mut b = board(&[
        "OO..", //
        "XX..", //
        "....", //
        "....",
    ]);
    assert_eq!(Err(PlaceError::Capture(2)), b.place(2, Color::Black));
    b.place(2, Color::White).unwrap();
    b.place(3, Color::Black).unwrap();
    assert_eq!(Err(PlaceError::Capture(6)), b.place(6, Color::Black));
}

#[test]
fn test_filling_own_last_liberty_is_legal_when_merged_group_breathes() {
    let mut b = board(&[
        "X..", //
        "O..", //
        "...",
    ]);
    assert_eq!(Ok(()), b.place(1, Color::Black));
    assert_eq!(Some(Color::Black), b.get(1));
}

#[test]
fn test_from_rows_errors() {
    assert_eq!(Err(BoardError::UnsupportedSize(1)), Board::from_rows(&["."]));
    assert_eq!(
        Err(BoardError::RaggedRow {
            row: 1,
            len: 1,
            expected: 2
        }),
        Board::from_rows(&["..", "."])
    );
    assert_eq!(Err(BoardError::InvalidCell('?')), Board::from_rows(&["..", ".?"]));
    assert_eq!(Err(BoardError::UnsupportedSize(12)), Board::new(12));
}

#[test]
fn test_display() {
    let b = board(&[
        "X.", //
        ".O",
    ]);
    assert_eq!("   A B\n 1 X .\n 2 . O\n", b.to_string());
    assert_eq!("W@B2", Place::new(3, Color::White).describe(2));
}

#[test]
fn test_two_by_two_positions() {
    let b = board(&[
        "O.", //
        ".X",
    ]);
    assert_eq!(vec![1, 2], legal_cells(&b, Color::Black));
    let after = b.advanced(Place::new(2, Color::Black)).unwrap();
    assert!(legal_cells(&after, Color::White).is_empty());

    let b = board(&[
        "OX", //
        "..",
    ]);
    assert_eq!(vec![3], legal_cells(&b, Color::Black));

    let b = board(&[
        "XX", //
        "O.",
    ]);
    assert!(legal_cells(&b, Color::Black).is_empty());
    assert!(!b.has_legal_action(&b.action_space(Color::Black)));
}

#[test]
fn test_random_move_picks_only_legal_move() {
    let b = board(&[
        "OX", //
        "..",
    ]);
    for seed in 0..8 {
        let mut rng = RngState::from_seed_u64(seed);
        let (action, next) = b.random_move(Color::Black, &mut rng).unwrap();
        assert_eq!(Place::new(3, Color::Black), action);
        assert_eq!(b.advanced(action), Some(next));
    }

    let b = board(&[
        "XX", //
        "O.",
    ]);
    let mut rng = RngState::from_seed_u64(0);
    assert_eq!(None, b.random_move(Color::Black, &mut rng));
}
