//! Snake body - ordered cells (head first) mirrored into an occupancy board.

use std::collections::VecDeque;

use crate::board::Board;
use crate::types::Cell;

/// The snake, head at index 0, tail at the back.
///
/// Every body cell is also marked on `board`, so "is this cell part of the
/// snake" never walks the body. The two are only mutated together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
    board: Board,
}

impl Snake {
    /// Create a one-cell snake on an empty `width x height` board
    pub fn new(head: Cell, width: u16, height: u16) -> Self {
        let mut board = Board::new(width, height);
        board.occupy(head);
        let mut body = VecDeque::with_capacity(board.capacity());
        body.push_back(head);
        Self { body, board }
    }

    /// Build a snake from explicit segments (head first).
    ///
    /// Returns `None` if the list is empty, leaves the board, or repeats a cell.
    pub fn from_cells(cells: &[Cell], width: u16, height: u16) -> Option<Self> {
        if cells.is_empty() {
            return None;
        }
        let mut board = Board::new(width, height);
        for &c in cells {
            if !board.occupy(c) {
                return None;
            }
        }
        Some(Self {
            body: cells.iter().copied().collect(),
            board,
        })
    }

    pub fn head(&self) -> Cell {
        // Length >= 1 is an invariant: nothing pops the last segment.
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.board.is_occupied(cell)
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Push a new head. Returns false (and changes nothing) if the cell is
    /// off the board or already covered.
    pub fn push_head(&mut self, cell: Cell) -> bool {
        if !self.board.occupy(cell) {
            return false;
        }
        self.body.push_front(cell);
        true
    }

    /// Drop the tail segment, never the last remaining one.
    pub fn pop_tail(&mut self) -> Option<Cell> {
        if self.body.len() <= 1 {
            return None;
        }
        let tail = self.body.pop_back()?;
        self.board.release(tail);
        Some(tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_snake_single_cell() {
        let snake = Snake::new(Cell::new(10, 10), 20, 20);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Cell::new(10, 10));
        assert_eq!(snake.tail(), Cell::new(10, 10));
        assert!(snake.contains(Cell::new(10, 10)));
        assert_eq!(snake.board().occupied(), 1);
    }

    #[test]
    fn test_push_and_pop_keep_board_in_sync() {
        let mut snake = Snake::new(Cell::new(1, 1), 5, 5);
        assert!(snake.push_head(Cell::new(2, 1)));
        assert_eq!(snake.head(), Cell::new(2, 1));
        assert_eq!(snake.len(), 2);

        assert_eq!(snake.pop_tail(), Some(Cell::new(1, 1)));
        assert!(!snake.contains(Cell::new(1, 1)));
        assert_eq!(snake.board().occupied(), 1);
    }

    #[test]
    fn test_push_head_rejects_body_and_walls() {
        let mut snake = Snake::from_cells(&[Cell::new(1, 0), Cell::new(0, 0)], 3, 3).unwrap();
        assert!(!snake.push_head(Cell::new(0, 0)));
        assert!(!snake.push_head(Cell::new(1, -1)));
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn test_pop_tail_keeps_last_segment() {
        let mut snake = Snake::new(Cell::new(0, 0), 3, 3);
        assert_eq!(snake.pop_tail(), None);
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn test_from_cells_rejects_bad_bodies() {
        assert!(Snake::from_cells(&[], 3, 3).is_none());
        assert!(Snake::from_cells(&[Cell::new(0, 0), Cell::new(0, 0)], 3, 3).is_none());
        assert!(Snake::from_cells(&[Cell::new(3, 0)], 3, 3).is_none());
    }

    #[test]
    fn test_cells_order_is_head_first() {
        let cells = [Cell::new(2, 0), Cell::new(1, 0), Cell::new(0, 0)];
        let snake = Snake::from_cells(&cells, 3, 1).unwrap();
        assert_eq!(snake.cells().collect::<Vec<_>>(), cells.to_vec());
    }
}
