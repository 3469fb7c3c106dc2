use serde::{Deserialize, Serialize};

use crate::core::piece::Piece;
use crate::types::{Cell, GameState, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Read-only view of the whole session, plain data for rendering and
/// persistence. Serializable; field names are part of the save format.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH]; BOARD_HEIGHT],
    pub current: Option<Piece>,
    pub ghost: Option<Piece>,
    pub held: Option<PieceKind>,
    pub preview: Vec<PieceKind>,
    pub state: GameState,
    pub score: u64,
    pub lines_cleared: u32,
    pub tetris_count: u32,
    pub can_hold: bool,
    pub pending_clear: Vec<usize>,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.state == GameState::Playing
    }
}
