//! Core types shared across the engine
//! This module contains pure data types and tuning constants with no external dependencies

use serde::{Deserialize, Serialize};

/// Board dimensions
pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;

/// Spawn origin for new pieces (row, col)
pub const SPAWN_ROW: i8 = 0;
pub const SPAWN_COL: i8 = 3;

/// Number of upcoming pieces shown to the player
pub const PREVIEW_LEN: usize = 5;

/// Points per simultaneously cleared line count (index = lines cleared)
pub const LINE_SCORES: [u64; 5] = [0, 100, 300, 500, 800];

/// Drop points per cell descended
pub const SOFT_DROP_POINTS_PER_CELL: u64 = 1;
pub const HARD_DROP_POINTS_PER_CELL: u64 = 2;

/// Grid coordinate. Row 0 is the top of the board, rows grow downward;
/// column 0 is the left edge, columns grow rightward. Also used as an offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Copy shifted by the given offset
    pub fn translated(self, offset: Position) -> Self {
        Self {
            row: self.row + offset.row,
            col: self.col + offset.col,
        }
    }

    /// Copy one row down
    pub fn down(self) -> Self {
        Self {
            row: self.row + 1,
            col: self.col,
        }
    }

    /// Copy one column left
    pub fn left(self) -> Self {
        Self {
            row: self.row,
            col: self.col - 1,
        }
    }

    /// Copy one column right
    pub fn right(self) -> Self {
        Self {
            row: self.row,
            col: self.col + 1,
        }
    }
}

/// The seven piece shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in canonical order (one bag's worth)
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;

/// Session lifecycle. GameOver is terminal until the next start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GameState {
    #[default]
    Idle,
    Playing,
    Paused,
    GameOver,
}

/// Player-facing commands, one per engine entry point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameCommand {
    Start,
    Pause,
    Resume,
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    RotateCw,
    Hold,
    Tick,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_translated() {
        let pos = Position::new(5, 3);
        assert_eq!(pos.translated(Position::new(1, -2)), Position::new(6, 1));
        assert_eq!(pos.down(), Position::new(6, 3));
        assert_eq!(pos.left(), Position::new(5, 2));
        assert_eq!(pos.right(), Position::new(5, 4));
    }

    #[test]
    fn test_all_kinds_distinct() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            for b in &PieceKind::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
