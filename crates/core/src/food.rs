//! Food placement
//!
//! Rejection sampling is cheap while the board is mostly empty. Once it misses
//! `FOOD_SAMPLE_ATTEMPTS` times in a row the board is crowded, so we pick
//! uniformly among the free cells directly. A full board yields `None`.

use crate::board::Board;
use crate::rng::SimpleRng;
use crate::types::{Cell, FOOD_SAMPLE_ATTEMPTS};

/// Pick a uniformly random free cell, or `None` when the board is full.
pub fn place_food(board: &Board, rng: &mut SimpleRng) -> Option<Cell> {
    let free = board.free();
    if free == 0 {
        return None;
    }

    for _ in 0..FOOD_SAMPLE_ATTEMPTS {
        let x = rng.next_range(board.width() as u32) as i32;
        let y = rng.next_range(board.height() as u32) as i32;
        let cell = Cell::new(x, y);
        if board.is_free(cell) {
            return Some(cell);
        }
    }

    let n = rng.next_range(free as u32) as usize;
    board.nth_free(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_never_on_occupied_cell() {
        let mut board = Board::new(5, 5);
        for x in 0..5 {
            board.occupy(Cell::new(x, 2));
        }
        let mut rng = SimpleRng::new(3);
        for _ in 0..500 {
            let food = place_food(&board, &mut rng).unwrap();
            assert!(board.is_free(food), "food placed on snake at {:?}", food);
        }
    }

    #[test]
    fn test_single_free_cell_is_found() {
        // Only (2, 1) is free: sampling will almost surely miss, the scan must not.
        let mut board = Board::new(3, 3);
        for y in 0..3 {
            for x in 0..3 {
                if (x, y) != (2, 1) {
                    board.occupy(Cell::new(x, y));
                }
            }
        }
        let mut rng = SimpleRng::new(11);
        for _ in 0..20 {
            assert_eq!(place_food(&board, &mut rng), Some(Cell::new(2, 1)));
        }
    }

    #[test]
    fn test_full_board_has_no_food() {
        let mut board = Board::new(2, 1);
        board.occupy(Cell::new(0, 0));
        board.occupy(Cell::new(1, 0));
        let mut rng = SimpleRng::new(1);
        assert_eq!(place_food(&board, &mut rng), None);
    }

    #[test]
    fn test_same_seed_same_food() {
        let board = Board::new(20, 20);
        let mut a = SimpleRng::new(2024);
        let mut b = SimpleRng::new(2024);
        for _ in 0..50 {
            assert_eq!(place_food(&board, &mut a), place_food(&board, &mut b));
        }
    }
}
