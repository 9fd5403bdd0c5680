//! Minimax game tree search with alpha-beta pruning
//!
//! The AI is the maximizer, its opponent the minimizer. Every recursive
//! step clones the board before playing into it, so search never touches
//! the caller's board and no two frames share mutable state. Stack depth
//! equals ply depth, at most the configured search depth.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Player};
use crate::rules::winner;
use crate::score::{score, WIN_SCORE};
use crate::WIDTH;

/// Outcome of a root search
#[derive(Copy, Clone, Debug)]
pub struct SearchResult {
    /// Best attainable score assuming optimal play by both sides
    pub score: i32,
    /// The column producing that score, if any child was evaluated
    pub column: Option<usize>,
    /// Number of nodes visited (for diagnostics only)
    pub nodes: usize,
}

/// Sorts columns from the middle outwards, as central columns are more
/// often the better moves; ascending column breaks distance ties
pub fn center_out(columns: &mut Vec<usize>) {
    let center = (WIDTH / 2) as isize;
    columns.sort_by_key(|&column| (column as isize - center).abs());
}

/// Best attainable score from `board` for the remaining `depth` plies
///
/// Wins found closer to the root score strictly higher than deeper ones,
/// and losses strictly lower, so the search prefers the quickest win and
/// the slowest loss. At depth 0 without a terminal state, the positional
/// heuristic decides.
pub fn minimax(
    board: &Board,
    depth: u32,
    alpha: i32,
    beta: i32,
    maximizing: bool,
    ai: Player,
    ordering: bool,
) -> i32 {
    let mut nodes = 0;
    alphabeta(board, depth, alpha, beta, maximizing, ai, ordering, &mut nodes)
}

#[allow(clippy::too_many_arguments)]
fn alphabeta(
    board: &Board,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    ai: Player,
    ordering: bool,
    nodes: &mut usize,
) -> i32 {
    *nodes += 1;

    // terminal wins carry a depth bonus for the tie-break
    match winner(board) {
        Some(player) if player == ai => return WIN_SCORE + depth as i32,
        Some(_) => return -(WIN_SCORE + depth as i32),
        None => {}
    }

    let mut columns = board.legal_columns();
    if depth == 0 || columns.is_empty() {
        return score(board, ai);
    }
    if ordering {
        center_out(&mut columns);
    }

    let to_move = if maximizing { ai } else { ai.other() };

    if maximizing {
        let mut value = i32::MIN;
        for &column in columns.iter() {
            let mut child = *board;
            // placement cannot fail: the column came from legal_columns
            let _ = child.place(column, to_move);
            value = value.max(alphabeta(
                &child,
                depth - 1,
                alpha,
                beta,
                false,
                ai,
                ordering,
                nodes,
            ));
            alpha = alpha.max(value);
            if alpha >= beta {
                // a perfect opponent will not allow this branch
                break;
            }
        }
        value
    } else {
        let mut value = i32::MAX;
        for &column in columns.iter() {
            let mut child = *board;
            let _ = child.place(column, to_move);
            value = value.min(alphabeta(
                &child,
                depth - 1,
                alpha,
                beta,
                true,
                ai,
                ordering,
                nodes,
            ));
            beta = beta.min(value);
            if alpha >= beta {
                break;
            }
        }
        value
    }
}

/// Performs a top-level search, additionally tracking which column
/// produced the best value
///
/// Ties are resolved by first-encountered order, which is a function of
/// the move ordering: center-out when `ordering` is set, a uniform
/// shuffle of the root columns otherwise. The shuffle varies play
/// between games without changing the minimax value.
///
/// Precondition: at least one legal column remains.
pub fn search_root<R: Rng>(
    board: &Board,
    depth: u32,
    ai: Player,
    ordering: bool,
    rng: &mut R,
) -> SearchResult {
    let mut columns = board.legal_columns();
    debug_assert!(!columns.is_empty(), "search_root called on a full board");

    if ordering {
        center_out(&mut columns);
    } else {
        columns.shuffle(rng);
    }

    let mut nodes = 1;
    let mut alpha = i32::MIN;
    let beta = i32::MAX;
    let mut best_score = i32::MIN;
    let mut best_column = None;

    for &column in columns.iter() {
        let mut child = *board;
        let _ = child.place(column, ai);
        let value = alphabeta(
            &child,
            depth.saturating_sub(1),
            alpha,
            beta,
            false,
            ai,
            ordering,
            &mut nodes,
        );
        if value > best_score {
            best_score = value;
            best_column = Some(column);
        }
        alpha = alpha.max(best_score);
        if alpha >= beta {
            break;
        }
    }

    SearchResult {
        score: best_score,
        column: best_column,
        nodes,
    }
}
