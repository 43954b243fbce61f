use crate::OmokError;

use super::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(7, 3);
    assert_eq!(pos.x, 7);
    assert_eq!(pos.y, 3);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0, 15));
    assert!(Pos::is_valid(14, 14, 15));
    assert!(Pos::is_valid(7, 7, 15));
    assert!(!Pos::is_valid(-1, 0, 15));
    assert!(!Pos::is_valid(0, -1, 15));
    assert!(!Pos::is_valid(15, 0, 15));
    assert!(!Pos::is_valid(0, 15, 15));
}

#[test]
fn test_board_constants() {
    assert_eq!(DEFAULT_BOARD_SIZE, 15);
    assert_eq!(MIN_BOARD_SIZE, 5);
    assert!(Board::new(DEFAULT_BOARD_SIZE).is_ok());
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new(15).unwrap();
    assert_eq!(board.size(), 15);
    assert_eq!(board.stone_count(), 0);
    assert!(!board.is_full());
    assert_eq!(board.get(Pos::new(7, 7)), Ok(Stone::Empty));
}

#[test]
fn test_board_too_small() {
    assert_eq!(Board::new(4), Err(OmokError::BoardTooSmall(4)));
    assert_eq!(Board::new(0), Err(OmokError::BoardTooSmall(0)));
    assert!(Board::new(5).is_ok());
}

#[test]
fn test_board_too_large() {
    assert_eq!(Board::new(256), Err(OmokError::BoardTooLarge(256)));
    assert!(Board::new(255).is_ok());
}

#[test]
fn test_place_and_get() {
    let mut board = Board::new(15).unwrap();
    board.place(Pos::new(3, 4), Stone::Black).unwrap();
    assert_eq!(board.get(Pos::new(3, 4)), Ok(Stone::Black));
    assert_eq!(board.stone_count(), 1);
}

#[test]
fn test_place_occupied_fails_unchanged() {
    let mut board = Board::new(15).unwrap();
    board.place(Pos::new(3, 4), Stone::Black).unwrap();

    let before = board.clone();
    assert_eq!(
        board.place(Pos::new(3, 4), Stone::White),
        Err(OmokError::CellOccupied)
    );
    assert_eq!(board, before);
    assert_eq!(board.get(Pos::new(3, 4)), Ok(Stone::Black));
}

#[test]
fn test_place_out_of_bounds_fails_unchanged() {
    let mut board = Board::new(15).unwrap();
    let before = board.clone();
    assert_eq!(
        board.place(Pos::new(15, 0), Stone::Black),
        Err(OmokError::OutOfBounds)
    );
    assert_eq!(
        board.place(Pos::new(0, 200), Stone::Black),
        Err(OmokError::OutOfBounds)
    );
    assert_eq!(board, before);
}

#[test]
fn test_get_out_of_bounds() {
    let board = Board::new(15).unwrap();
    assert_eq!(board.get(Pos::new(15, 15)), Err(OmokError::OutOfBounds));
}

#[test]
fn test_speculative_place_and_rollback() {
    let mut board = Board::new(15).unwrap();
    let before = board.clone();

    let pos = Pos::new(9, 9);
    board.place_stone(pos, Stone::White);
    assert_eq!(board.get(pos), Ok(Stone::White));
    board.remove_stone(pos);
    assert_eq!(board, before);
}

#[test]
fn test_place_stone_empty_is_noop() {
    let mut board = Board::new(15).unwrap();
    board.place(Pos::new(2, 2), Stone::Black).unwrap();
    board.place_stone(Pos::new(2, 2), Stone::Empty);
    assert_eq!(board.get(Pos::new(2, 2)), Ok(Stone::Black));
}

#[test]
fn test_is_full_on_min_board() {
    let mut board = Board::new(5).unwrap();
    for y in 0..5u8 {
        for x in 0..5u8 {
            assert!(!board.is_full());
            board.place_stone(Pos::new(x, y), Stone::Black);
        }
    }
    assert!(board.is_full());
    assert_eq!(board.stone_count(), 25);
}

#[test]
fn test_clear() {
    let mut board = Board::new(15).unwrap();
    board.place(Pos::new(5, 5), Stone::Black).unwrap();
    board.place(Pos::new(6, 6), Stone::White).unwrap();
    board.clear();
    assert_eq!(board.size(), 15);
    assert_eq!(board.stone_count(), 0);
}

#[test]
fn test_center() {
    assert_eq!(Board::new(15).unwrap().center(), Pos::new(7, 7));
    assert_eq!(Board::new(5).unwrap().center(), Pos::new(2, 2));
    assert_eq!(Board::new(19).unwrap().center(), Pos::new(9, 9));
}

#[test]
fn test_is_empty() {
    let mut board = Board::new(15).unwrap();
    assert!(board.is_empty(Pos::new(0, 0)));
    board.place(Pos::new(0, 0), Stone::White).unwrap();
    assert!(!board.is_empty(Pos::new(0, 0)));
    // Out of bounds is never "empty"
    assert!(!board.is_empty(Pos::new(15, 0)));
}
