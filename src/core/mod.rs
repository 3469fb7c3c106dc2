//! Core module - pure game logic with no external I/O
//!
//! This module contains all the game rules and state management.
//! It has zero dependencies on UI, timers, or persistence.

pub mod board;
pub mod engine;
pub mod events;
pub mod piece;
pub mod queue;
pub mod scoring;
pub mod snapshot;

// Re-export commonly used types
pub use board::Board;
pub use engine::GameEngine;
pub use events::GameEvent;
pub use piece::{base_cells, Piece, KICK_OFFSETS};
pub use queue::{PieceQueue, SimpleRng};
pub use snapshot::GameSnapshot;
