//! Scoring module - line clear and drop points
//!
//! Flat per-clear scoring: 100/300/500/800 for 1/2/3/4 simultaneous lines,
//! plus 1 point per cell soft dropped and 2 per cell hard dropped.

use crate::types::{HARD_DROP_POINTS_PER_CELL, LINE_SCORES, SOFT_DROP_POINTS_PER_CELL};

/// Points for clearing `lines` rows at once
pub fn score_for_lines(lines: usize) -> u64 {
    if lines == 0 || lines >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[lines]
}

/// Points for dropping `cells` rows
/// soft drop: 1 per cell, hard drop: 2 per cell
pub fn score_for_drop(cells: u32, is_hard_drop: bool) -> u64 {
    let per_cell = if is_hard_drop {
        HARD_DROP_POINTS_PER_CELL
    } else {
        SOFT_DROP_POINTS_PER_CELL
    };
    u64::from(cells) * per_cell
}

/// A four-line clear
pub fn is_tetris(lines: usize) -> bool {
    lines == 4
}
