//! Events emitted by the engine for feedback layers (audio, haptics, stats)
//!
//! Events cover discrete player-visible moments; renderers should read
//! snapshots instead. Drained with `GameEngine::take_events`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The current piece moved by player input (shift or drop)
    PieceMoved,
    /// The current piece rotated, possibly via a wall kick
    PieceRotated,
    /// A piece entered or swapped with the hold slot
    PieceHeld,
    /// The current piece locked into the board
    PieceLocked,
    /// Rows completed by a lock; count of 4 is a Tetris
    LinesCleared { count: u32 },
    /// The session ended
    GameOver,
}
