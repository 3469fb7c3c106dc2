//! Deterministic falling-block puzzle engine
//!
//! The crate is a headless game-logic state machine with no dependency on any
//! UI framework, timer, or storage. A driver feeds it commands and gravity
//! ticks; presentation layers consume [`core::GameSnapshot`] views and the
//! drained [`core::GameEvent`] stream.
//!
//! - **Deterministic**: the same seed produces the identical piece sequence
//! - **7-bag randomizer**: every run of seven pieces contains each kind once
//! - **Wall kicks**: a failed rotation is retried through a fixed offset list
//! - **Scoring**: 100/300/500/800 per 1/2/3/4 lines, plus drop points
//! - **Hold and preview**: one hold slot per spawn, five-piece look-ahead
//!
//! # Module Structure
//!
//! - [`core::board`]: 10x20 playfield with collision and line clearing
//! - [`core::piece`]: shapes, rotation math, and kick offsets
//! - [`core::queue`]: seeded 7-bag piece generation with look-ahead
//! - [`core::engine`]: the session state machine tying it all together
//! - [`core::scoring`]: line and drop point tables
//! - [`core::snapshot`] / [`core::events`]: the observation surface
//!
//! # Example
//!
//! ```
//! use blockfall::core::GameEngine;
//! use blockfall::types::GameState;
//!
//! let mut game = GameEngine::new(12345);
//! game.start();
//! assert_eq!(game.state(), GameState::Playing);
//!
//! game.move_left();
//! game.rotate_cw();
//! game.tick();
//!
//! let snapshot = game.snapshot();
//! assert!(snapshot.playable());
//! for event in game.take_events() {
//!     println!("{:?}", event);
//! }
//! ```

pub mod core;
pub mod types;

pub use crate::core::{Board, GameEngine, GameEvent, GameSnapshot, Piece, PieceQueue};
pub use crate::types::{GameCommand, GameState, PieceKind, Position};
