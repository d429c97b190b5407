//! Board module - occupancy grid for the snake body
//!
//! The board is a `width x height` grid where each cell is either free or
//! covered by a snake segment. Uses a flat row-major vector so membership tests
//! during a tick are O(1) instead of a walk over the body.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.

use crate::types::Cell;

/// Occupancy grid, row-major order (y * width + x)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u16,
    height: u16,
    cells: Vec<bool>,
    occupied: usize,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width as usize * height as usize],
            occupied: 0,
        }
    }

    /// Calculate flat index from a cell, `None` when out of bounds
    #[inline(always)]
    fn index(&self, cell: Cell) -> Option<usize> {
        if !cell.in_bounds(self.width, self.height) {
            return None;
        }
        Some((cell.y as usize) * (self.width as usize) + (cell.x as usize))
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Total number of cells on the board
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.occupied
    }

    pub fn free(&self) -> usize {
        self.capacity() - self.occupied
    }

    pub fn is_full(&self) -> bool {
        self.occupied == self.capacity()
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.in_bounds(self.width, self.height)
    }

    /// Check if the cell is inside the board and covered
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.index(cell).map(|i| self.cells[i]).unwrap_or(false)
    }

    /// Check if the cell is inside the board and uncovered
    pub fn is_free(&self, cell: Cell) -> bool {
        self.index(cell).map(|i| !self.cells[i]).unwrap_or(false)
    }

    /// Mark a cell as covered
    /// Returns false if out of bounds or already covered
    pub fn occupy(&mut self, cell: Cell) -> bool {
        match self.index(cell) {
            Some(i) if !self.cells[i] => {
                self.cells[i] = true;
                self.occupied += 1;
                true
            }
            _ => false,
        }
    }

    /// Mark a cell as free
    /// Returns false if out of bounds or not covered
    pub fn release(&mut self, cell: Cell) -> bool {
        match self.index(cell) {
            Some(i) if self.cells[i] => {
                self.cells[i] = false;
                self.occupied -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
        self.occupied = 0;
    }

    /// The `n`-th free cell in row-major order
    pub fn nth_free(&self, n: usize) -> Option<Cell> {
        let w = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &covered)| !covered)
            .nth(n)
            .map(|(i, _)| Cell::new((i % w) as i32, (i / w) as i32))
    }
}
