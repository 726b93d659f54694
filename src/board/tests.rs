use super::*;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::X.opponent(), Player::O);
    assert_eq!(Player::O.opponent(), Player::X);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 3);
    assert_eq!(SLOT_COUNT, 9);
}

#[test]
fn test_cell_default_is_empty() {
    assert_eq!(Cell::default(), Cell::Empty);
    assert!(Cell::Empty.is_empty());
    assert!(!Cell::Mark(Player::X).is_empty());
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert!(board.is_board_empty());
    assert!(!board.is_full());
    assert_eq!(board.mark_count(), 0);
    for slot in 0..SLOT_COUNT {
        assert_eq!(board.get(slot), Cell::Empty);
    }
}

#[test]
fn test_set_and_clear() {
    let mut board = Board::new();
    board.set(4, Player::X);
    assert_eq!(board.get(4), Cell::Mark(Player::X));
    assert_eq!(board.mark_count(), 1);

    board.clear(4);
    assert_eq!(board.get(4), Cell::Empty);
    assert!(board.is_board_empty());
}

#[test]
fn test_in_range() {
    assert!(Board::in_range(0));
    assert!(Board::in_range(8));
    assert!(!Board::in_range(9));
    assert!(!Board::in_range(usize::MAX));
}

#[test]
fn test_is_empty_slot() {
    let mut board = Board::new();
    board.set(0, Player::O);
    assert!(!board.is_empty_slot(0));
    assert!(board.is_empty_slot(1));
    assert!(!board.is_empty_slot(9));
}

#[test]
fn test_available_slots_ascending() {
    let mut board = Board::new();
    board.set(3, Player::X);
    board.set(7, Player::O);
    board.set(0, Player::X);

    let open = board.available_slots();
    assert_eq!(open, vec![1, 2, 4, 5, 6, 8]);
    assert!(open.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_available_plus_marks_is_nine() {
    let mut board = Board::new();
    assert_eq!(board.available_slots().len() + board.mark_count(), SLOT_COUNT);

    board.set(2, Player::X);
    board.set(6, Player::O);
    assert_eq!(board.available_slots().len() + board.mark_count(), SLOT_COUNT);
}

#[test]
fn test_full_board() {
    let mut board = Board::new();
    for slot in 0..SLOT_COUNT {
        board.set(slot, if slot % 2 == 0 { Player::X } else { Player::O });
    }
    assert!(board.is_full());
    assert!(board.available_slots().is_empty());
}

#[test]
fn test_reset() {
    let mut board = Board::new();
    board.set(0, Player::X);
    board.set(8, Player::O);

    board.reset();
    assert!(board.is_board_empty());
    assert_eq!(board.available_slots().len(), SLOT_COUNT);
}

#[test]
fn test_display_grid() {
    let mut board = Board::new();
    board.set(0, Player::X);
    board.set(4, Player::O);

    let text = board.to_string();
    assert!(text.starts_with("X| |"));
    assert!(text.contains("|O|"));
}
