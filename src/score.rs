//! Positional heuristic for non-terminal boards
//!
//! Minimax alone cannot search a 42-cell game to the end at these
//! depths, so leaves are scored by terminal state, center-column
//! control and every 4-cell window on the board.

use crate::board::{Board, Player};
use crate::rules::winner;
use crate::{CONNECT, HEIGHT, WIDTH};

/// Score of a decided board, dominating every positional term
pub const WIN_SCORE: i32 = 100_000;

// center cells participate in more winning lines
const CENTER_COLUMN: usize = WIDTH / 2;
const CENTER_BONUS: i32 = 6;

// window bonuses for the maximizer, by occupancy
const FOUR_IN_WINDOW: i32 = 1_000;
const THREE_IN_WINDOW: i32 = 16;
const TWO_IN_WINDOW: i32 = 5;
// opponent penalties; the 3-window penalty outweighs the symmetric
// bonus so that blocking an imminent loss beats an equal offensive gain
const OPPONENT_FOUR: i32 = -1_000;
const OPPONENT_THREE: i32 = -18;
const OPPONENT_TWO: i32 = -6;

/// Scores `board` from the perspective of `ai` as the maximizer
///
/// Deterministic and side-effect free.
pub fn score(board: &Board, ai: Player) -> i32 {
    match winner(board) {
        Some(player) if player == ai => return WIN_SCORE,
        Some(_) => return -WIN_SCORE,
        None => {}
    }

    let mut total = 0;

    for row in 0..HEIGHT {
        match board.cell(row, CENTER_COLUMN) {
            Some(player) if player == ai => total += CENTER_BONUS,
            Some(_) => total -= CENTER_BONUS,
            None => {}
        }
    }

    // horizontal windows
    for row in 0..HEIGHT {
        for column in 0..=WIDTH - CONNECT {
            total += score_window(board, ai, row, column, 0, 1);
        }
    }
    // vertical windows
    for column in 0..WIDTH {
        for row in 0..=HEIGHT - CONNECT {
            total += score_window(board, ai, row, column, 1, 0);
        }
    }
    // diagonal down-right windows
    for row in 0..=HEIGHT - CONNECT {
        for column in 0..=WIDTH - CONNECT {
            total += score_window(board, ai, row, column, 1, 1);
        }
    }
    // diagonal up-right windows
    for row in CONNECT - 1..HEIGHT {
        for column in 0..=WIDTH - CONNECT {
            total += score_window(board, ai, row, column, -1, 1);
        }
    }

    total
}

// a window holding discs of both players can never be completed and
// contributes nothing
fn score_window(
    board: &Board,
    ai: Player,
    row: usize,
    column: usize,
    dr: isize,
    dc: isize,
) -> i32 {
    let mut ai_count = 0;
    let mut opponent_count = 0;
    let mut empty_count = 0;

    for step in 0..CONNECT as isize {
        let r = (row as isize + dr * step) as usize;
        let c = (column as isize + dc * step) as usize;
        match board.cell(r, c) {
            Some(player) if player == ai => ai_count += 1,
            Some(_) => opponent_count += 1,
            None => empty_count += 1,
        }
    }

    match (ai_count, opponent_count, empty_count) {
        (4, 0, 0) => FOUR_IN_WINDOW,
        (3, 0, 1) => THREE_IN_WINDOW,
        (2, 0, 2) => TWO_IN_WINDOW,
        (0, 4, 0) => OPPONENT_FOUR,
        (0, 3, 1) => OPPONENT_THREE,
        (0, 2, 2) => OPPONENT_TWO,
        _ => 0,
    }
}
