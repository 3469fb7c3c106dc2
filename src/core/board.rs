//! Board module - the playfield grid
//!
//! The board is a 10x20 grid where each cell is empty or filled with a piece kind.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates are (row, col): row 0..19 top to bottom, col 0..9 left to right.

use arrayvec::ArrayVec;

use crate::core::piece::Piece;
use crate::types::{Cell, PieceKind, Position, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = BOARD_WIDTH * BOARD_HEIGHT;

/// The playfield - 20 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from a position
    #[inline(always)]
    fn index(pos: Position) -> Option<usize> {
        if pos.row < 0
            || pos.row >= BOARD_HEIGHT as i8
            || pos.col < 0
            || pos.col >= BOARD_WIDTH as i8
        {
            return None;
        }
        Some((pos.row as usize) * BOARD_WIDTH + (pos.col as usize))
    }

    /// Check if a position is on the board
    pub fn is_valid(&self, pos: Position) -> bool {
        Self::index(pos).is_some()
    }

    /// Get the cell at a position
    /// Returns None if out of bounds
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        Self::index(pos).map(|idx| self.cells[idx])
    }

    /// Set the cell at a position
    /// Returns false if out of bounds
    pub fn set_cell(&mut self, pos: Position, cell: Cell) -> bool {
        match Self::index(pos) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check whether every cell of the piece is on the board and empty.
    ///
    /// The single collision predicate used for movement, rotation, and
    /// spawn validation.
    pub fn can_place(&self, piece: &Piece) -> bool {
        piece
            .cells()
            .iter()
            .all(|&pos| matches!(self.cell(pos), Some(None)))
    }

    /// Write the piece's kind into its cells.
    ///
    /// The caller must have verified `can_place` first.
    pub fn place(&mut self, piece: &Piece) {
        debug_assert!(
            self.can_place(piece),
            "piece placed on occupied or out-of-bounds cells: {:?}",
            piece
        );
        for pos in piece.cells() {
            if let Some(idx) = Self::index(pos) {
                self.cells[idx] = Some(piece.kind);
            }
        }
    }

    /// Check if a row is completely filled
    fn is_row_full(&self, row: usize) -> bool {
        let start = row * BOARD_WIDTH;
        self.cells[start..start + BOARD_WIDTH]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Row indices that are completely filled, in ascending order
    pub fn full_lines(&self) -> ArrayVec<usize, BOARD_HEIGHT> {
        let mut full = ArrayVec::new();
        for row in 0..BOARD_HEIGHT {
            if self.is_row_full(row) {
                full.push(row);
            }
        }
        full
    }

    /// Remove the given rows and prepend as many empty rows at the top.
    ///
    /// Single compaction pass from the bottom, so the row set may be in any
    /// order and surviving rows keep their relative order. Uses `copy_within`
    /// with no allocation.
    pub fn clear_lines(&mut self, rows: &[usize]) {
        if rows.is_empty() {
            return;
        }

        let mut write_row = BOARD_HEIGHT;
        for read_row in (0..BOARD_HEIGHT).rev() {
            if rows.contains(&read_row) {
                continue;
            }
            write_row -= 1;
            if write_row != read_row {
                let src = read_row * BOARD_WIDTH;
                let dst = write_row * BOARD_WIDTH;
                self.cells.copy_within(src..src + BOARD_WIDTH, dst);
            }
        }

        for cell in &mut self.cells[..write_row * BOARD_WIDTH] {
            *cell = None;
        }
    }

    /// A stack reaching the top row ends the session
    pub fn is_game_over(&self) -> bool {
        self.cells[..BOARD_WIDTH].iter().any(|cell| cell.is_some())
    }

    /// Set every cell to empty
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Iterate over all filled cells as (position, kind)
    pub fn occupied_cells(&self) -> impl Iterator<Item = (Position, PieceKind)> + '_ {
        self.cells.iter().enumerate().filter_map(|(idx, cell)| {
            cell.map(|kind| {
                let pos = Position::new((idx / BOARD_WIDTH) as i8, (idx % BOARD_WIDTH) as i8);
                (pos, kind)
            })
        })
    }

    /// Copy of the grid as rows of cells (for snapshots)
    pub fn grid(&self) -> [[Cell; BOARD_WIDTH]; BOARD_HEIGHT] {
        let mut grid = [[None; BOARD_WIDTH]; BOARD_HEIGHT];
        for (row, out) in grid.iter_mut().enumerate() {
            let start = row * BOARD_WIDTH;
            out.copy_from_slice(&self.cells[start..start + BOARD_WIDTH]);
        }
        grid
    }

    /// Create from rows of cells for testing
    #[cfg(test)]
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        assert_eq!(rows.len(), BOARD_HEIGHT);
        assert!(rows.iter().all(|row| row.len() == BOARD_WIDTH));

        let mut flat = [None; BOARD_SIZE];
        for (row, cells) in rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                flat[row * BOARD_WIDTH + col] = *cell;
            }
        }
        Self { cells: flat }
    }

    /// Convert to rows of cells for testing
    #[cfg(test)]
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        (0..BOARD_HEIGHT)
            .map(|row| {
                let start = row * BOARD_WIDTH;
                self.cells[start..start + BOARD_WIDTH].to_vec()
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
