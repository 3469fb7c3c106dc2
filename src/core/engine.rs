//! Engine module - the complete session state machine
//!
//! Ties together board, pieces, queue, and scoring: spawn, player input,
//! gravity tick, lock, line-clear cascade, game-over check, respawn.
//! Gravity is injected externally; one `tick` is one gravity step.

use arrayvec::ArrayVec;

use crate::core::board::Board;
use crate::core::events::GameEvent;
use crate::core::piece::{Piece, KICK_OFFSETS};
use crate::core::queue::PieceQueue;
use crate::core::scoring::{is_tetris, score_for_drop, score_for_lines};
use crate::core::snapshot::GameSnapshot;
use crate::types::{GameCommand, GameState, PieceKind, BOARD_HEIGHT};

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    current: Option<Piece>,
    held: Option<PieceKind>,
    queue: PieceQueue,
    state: GameState,
    score: u64,
    lines_cleared: u32,
    tetris_count: u32,
    can_hold: bool,
    /// Rows committed by the latest lock, kept until the next lock so
    /// consumers can animate the clear after the respawn.
    pending_clear: ArrayVec<usize, BOARD_HEIGHT>,
    seed: u32,
    events: Vec<GameEvent>,
}

impl GameEngine {
    /// Create an idle session with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            current: None,
            held: None,
            queue: PieceQueue::new(seed),
            state: GameState::Idle,
            score: 0,
            lines_cleared: 0,
            tetris_count: 0,
            can_hold: true,
            pending_clear: ArrayVec::new(),
            seed,
            events: Vec::new(),
        }
    }

    /// Reset everything and begin playing, spawning the first piece.
    ///
    /// Valid in every state; this is the only way out of GameOver.
    pub fn start(&mut self) {
        self.board.reset();
        self.queue.reset();
        self.current = None;
        self.held = None;
        self.score = 0;
        self.lines_cleared = 0;
        self.tetris_count = 0;
        self.can_hold = true;
        self.pending_clear.clear();
        self.events.clear();
        self.state = GameState::Playing;
        self.spawn_piece();
    }

    /// No-op unless playing
    pub fn pause(&mut self) {
        if self.state == GameState::Playing {
            self.state = GameState::Paused;
        }
    }

    /// No-op unless paused
    pub fn resume(&mut self) {
        if self.state == GameState::Paused {
            self.state = GameState::Playing;
        }
    }

    /// One gravity step: descend the current piece, locking it when it rests
    pub fn tick(&mut self) {
        let Some(piece) = self.playing_piece() else {
            return;
        };
        let candidate = piece.moved_down();
        if self.board.can_place(&candidate) {
            self.current = Some(candidate);
        } else {
            self.lock_current_piece();
        }
    }

    pub fn move_left(&mut self) {
        if let Some(piece) = self.playing_piece() {
            self.try_move(piece.moved_left());
        }
    }

    pub fn move_right(&mut self) {
        if let Some(piece) = self.playing_piece() {
            self.try_move(piece.moved_right());
        }
    }

    /// Descend the current piece as far as it fits, scoring 1 point per cell.
    ///
    /// Never locks; a soft drop that lands on the stack leaves locking to the
    /// next tick.
    pub fn soft_drop(&mut self) {
        let Some(piece) = self.playing_piece() else {
            return;
        };
        let target = self.drop_target(piece);
        let cells = (target.origin.row - piece.origin.row) as u32;
        if cells == 0 {
            return;
        }
        self.current = Some(target);
        self.score += score_for_drop(cells, false);
        self.events.push(GameEvent::PieceMoved);
    }

    /// Descend the current piece as far as it fits, scoring 2 points per
    /// cell, then lock unconditionally
    pub fn hard_drop(&mut self) {
        let Some(piece) = self.playing_piece() else {
            return;
        };
        let target = self.drop_target(piece);
        let cells = (target.origin.row - piece.origin.row) as u32;
        self.current = Some(target);
        self.score += score_for_drop(cells, true);
        self.lock_current_piece();
    }

    /// Rotate the current piece clockwise, resolving wall kicks.
    ///
    /// The rotated candidate is tried in place first, then shifted by each
    /// kick offset in order; the first fit wins. If none fit the rotation
    /// silently fails. O rotates in place (same cells, index advances).
    pub fn rotate_cw(&mut self) {
        let Some(piece) = self.playing_piece() else {
            return;
        };
        let rotated = piece.rotated_cw();
        if self.board.can_place(&rotated) {
            self.current = Some(rotated);
            self.events.push(GameEvent::PieceRotated);
            return;
        }
        for offset in KICK_OFFSETS {
            let kicked = rotated.translated(offset);
            if self.board.can_place(&kicked) {
                self.current = Some(kicked);
                self.events.push(GameEvent::PieceRotated);
                return;
            }
        }
    }

    /// Stash the current piece, once per spawn.
    ///
    /// With an empty hold slot the current kind is stored and the next queue
    /// piece spawns. Otherwise the held kind re-enters at the spawn position;
    /// if it does not fit there the swap is rejected with no state change.
    pub fn hold(&mut self) {
        if !self.can_hold {
            return;
        }
        let Some(piece) = self.playing_piece() else {
            return;
        };
        match self.held {
            Some(held_kind) => {
                let swapped = Piece::spawn(held_kind);
                if !self.board.can_place(&swapped) {
                    return;
                }
                self.held = Some(piece.kind);
                self.current = Some(swapped);
                self.can_hold = false;
                self.events.push(GameEvent::PieceHeld);
            }
            None => {
                self.held = Some(piece.kind);
                self.events.push(GameEvent::PieceHeld);
                self.spawn_piece();
                self.can_hold = false;
            }
        }
    }

    /// Dispatch a command to the matching entry point
    pub fn apply(&mut self, command: GameCommand) {
        match command {
            GameCommand::Start => self.start(),
            GameCommand::Pause => self.pause(),
            GameCommand::Resume => self.resume(),
            GameCommand::MoveLeft => self.move_left(),
            GameCommand::MoveRight => self.move_right(),
            GameCommand::SoftDrop => self.soft_drop(),
            GameCommand::HardDrop => self.hard_drop(),
            GameCommand::RotateCw => self.rotate_cw(),
            GameCommand::Hold => self.hold(),
            GameCommand::Tick => self.tick(),
        }
    }

    /// Where the current piece would rest, for rendering
    pub fn ghost_piece(&self) -> Option<Piece> {
        self.current.map(|piece| self.drop_target(piece))
    }

    /// Plain-data view of the whole session
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.grid(),
            current: self.current,
            ghost: self.ghost_piece(),
            held: self.held,
            preview: self.queue.preview().to_vec(),
            state: self.state,
            score: self.score,
            lines_cleared: self.lines_cleared,
            tetris_count: self.tetris_count,
            can_hold: self.can_hold,
            pending_clear: self.pending_clear.to_vec(),
        }
    }

    /// Drain the pending events, in emission order
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn tetris_count(&self) -> u32 {
        self.tetris_count
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn current_piece(&self) -> Option<Piece> {
        self.current
    }

    pub fn held_piece(&self) -> Option<PieceKind> {
        self.held
    }

    pub fn preview(&self) -> &[PieceKind] {
        self.queue.preview()
    }

    pub fn pending_clear(&self) -> &[usize] {
        &self.pending_clear
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// The current piece, but only while input is accepted
    fn playing_piece(&self) -> Option<Piece> {
        if self.state != GameState::Playing {
            return None;
        }
        self.current
    }

    /// Commit a movement candidate if the board accepts it
    fn try_move(&mut self, candidate: Piece) -> bool {
        if self.board.can_place(&candidate) {
            self.current = Some(candidate);
            self.events.push(GameEvent::PieceMoved);
            return true;
        }
        false
    }

    /// The piece descended straight down as far as it fits
    fn drop_target(&self, piece: Piece) -> Piece {
        let mut target = piece;
        loop {
            let next = target.moved_down();
            if self.board.can_place(&next) {
                target = next;
            } else {
                return target;
            }
        }
    }

    /// Draw the next kind and place it at the spawn position.
    ///
    /// A blocked spawn ends the session without placing the piece.
    fn spawn_piece(&mut self) {
        let kind = self.queue.next();
        let piece = Piece::spawn(kind);
        if !self.board.can_place(&piece) {
            self.current = None;
            self.state = GameState::GameOver;
            self.events.push(GameEvent::GameOver);
            return;
        }
        self.current = Some(piece);
        self.can_hold = true;
    }

    /// Lock the current piece and run the line-clear cascade.
    ///
    /// Each pass scores and removes the full rows, then re-checks the
    /// collapsed board. Afterwards a stack reaching the top row ends the
    /// session, otherwise the next piece spawns.
    fn lock_current_piece(&mut self) {
        let Some(piece) = self.current.take() else {
            return;
        };
        self.board.place(&piece);
        self.pending_clear.clear();
        self.events.push(GameEvent::PieceLocked);

        loop {
            let full = self.board.full_lines();
            if full.is_empty() {
                break;
            }
            let count = full.len();
            for &row in &full {
                if !self.pending_clear.contains(&row) {
                    self.pending_clear.push(row);
                }
            }
            self.score += score_for_lines(count);
            self.lines_cleared += count as u32;
            if is_tetris(count) {
                self.tetris_count += 1;
            }
            self.events.push(GameEvent::LinesCleared {
                count: count as u32,
            });
            self.board.clear_lines(&full);
        }

        if self.board.is_game_over() {
            self.state = GameState::GameOver;
            self.events.push(GameEvent::GameOver);
            return;
        }
        self.spawn_piece();
    }

    #[cfg(test)]
    fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    fn set_current_piece(&mut self, piece: Piece) {
        debug_assert!(self.board.can_place(&piece));
        self.current = Some(piece);
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(1)
    }
}
