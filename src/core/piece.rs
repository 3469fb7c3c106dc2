//! Piece module - tetromino shapes and rotation math
//!
//! Shapes are defined once at rotation 0; other orientations are derived by
//! rotating each cell 90 degrees clockwise about the origin, (row, col) -> (col, -row).
//! Pieces are immutable values: every move or rotation produces a candidate
//! that the board validates before it becomes the current piece.

use serde::{Deserialize, Serialize};

use crate::types::{PieceKind, Position, SPAWN_COL, SPAWN_ROW};

/// Cell offsets for a kind at rotation 0, relative to the piece origin
pub fn base_cells(kind: PieceKind) -> [Position; 4] {
    match kind {
        PieceKind::I => [
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(0, 2),
            Position::new(0, 3),
        ],
        PieceKind::O => [
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(1, 0),
            Position::new(1, 1),
        ],
        PieceKind::T => [
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(0, 2),
            Position::new(1, 1),
        ],
        PieceKind::S => [
            Position::new(0, 1),
            Position::new(0, 2),
            Position::new(1, 0),
            Position::new(1, 1),
        ],
        PieceKind::Z => [
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(1, 1),
            Position::new(1, 2),
        ],
        PieceKind::J => [
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(1, 1),
            Position::new(1, 2),
        ],
        PieceKind::L => [
            Position::new(0, 2),
            Position::new(1, 0),
            Position::new(1, 1),
            Position::new(1, 2),
        ],
    }
}

/// Wall-kick offsets (row, col), tried in order after a failed in-place rotation
pub const KICK_OFFSETS: [Position; 7] = [
    Position::new(0, -1),
    Position::new(0, 1),
    Position::new(0, -2),
    Position::new(0, 2),
    Position::new(-1, 0),
    Position::new(-1, -1),
    Position::new(-1, 1),
];

/// A falling piece: kind, board position of its origin, and rotation index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub origin: Position,
    pub rotation: u8,
}

impl Piece {
    pub fn new(kind: PieceKind, origin: Position, rotation: u8) -> Self {
        Self {
            kind,
            origin,
            rotation: rotation % 4,
        }
    }

    /// Piece at the spawn origin, unrotated
    pub fn spawn(kind: PieceKind) -> Self {
        Self::new(kind, Position::new(SPAWN_ROW, SPAWN_COL), 0)
    }

    /// Absolute board cells occupied by this piece.
    ///
    /// O is rotation-invariant, so its rotation index is ignored here
    /// (it still advances on rotation for interface uniformity).
    pub fn cells(&self) -> [Position; 4] {
        let mut cells = base_cells(self.kind);
        if self.kind != PieceKind::O {
            for cell in &mut cells {
                for _ in 0..self.rotation {
                    *cell = Position::new(cell.col, -cell.row);
                }
            }
        }
        for cell in &mut cells {
            *cell = cell.translated(self.origin);
        }
        cells
    }

    /// Copy rotated one step clockwise (not validated against any board)
    pub fn rotated_cw(&self) -> Self {
        Self {
            rotation: (self.rotation + 1) % 4,
            ..*self
        }
    }

    /// Copy shifted by an offset
    pub fn translated(&self, offset: Position) -> Self {
        Self {
            origin: self.origin.translated(offset),
            ..*self
        }
    }

    pub fn moved_left(&self) -> Self {
        Self {
            origin: self.origin.left(),
            ..*self
        }
    }

    pub fn moved_right(&self) -> Self {
        Self {
            origin: self.origin.right(),
            ..*self
        }
    }

    pub fn moved_down(&self) -> Self {
        Self {
            origin: self.origin.down(),
            ..*self
        }
    }
}
