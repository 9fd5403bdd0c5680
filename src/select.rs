//! Difficulty tiers and the AI move policy

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Player};
use crate::rules::winner;
use crate::search::search_root;

/// AI strength, a fixed static configuration selected per game
///
/// The tier-to-search mapping is the behavioral contract of the engine:
/// Easy plays uniformly at random with no search, Medium searches 3
/// plies, Hard 5, and Extreme 7 with center-out move ordering.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Extreme,
}

impl Difficulty {
    /// Search depth in plies, or `None` for the random tier
    pub fn search_depth(self) -> Option<u32> {
        match self {
            Difficulty::Easy => None,
            Difficulty::Medium => Some(3),
            Difficulty::Hard => Some(5),
            Difficulty::Extreme => Some(7),
        }
    }

    /// Whether sibling columns are explored center-out
    ///
    /// Only the strongest tier orders moves, maximizing pruning there;
    /// the other searched tiers shuffle the root order to vary play.
    pub fn move_ordering(self) -> bool {
        self == Difficulty::Extreme
    }
}

/// Picks one legal column for `ai` to play
///
/// Policy, in strict order: random choice on the Easy tier; any column
/// completing four-in-a-row for the AI; any column the opponent would
/// win with next turn (blocked now); otherwise the tree search at the
/// tier's depth, falling back to the first legal column should the
/// search produce none.
///
/// Returns `None` only when the board has no legal columns, which
/// callers are expected to rule out beforehand.
pub fn choose_move<R: Rng>(
    board: &Board,
    ai: Player,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<usize> {
    let columns = board.legal_columns();
    if columns.is_empty() {
        return None;
    }

    let depth = match difficulty.search_depth() {
        Some(depth) => depth,
        None => return columns.choose(rng).copied(),
    };

    // a forced win is taken immediately, without the cost of a search
    for &column in columns.iter() {
        let mut child = *board;
        let _ = child.place(column, ai);
        if winner(&child) == Some(ai) {
            return Some(column);
        }
    }

    // block the opponent's next-turn win
    let opponent = ai.other();
    for &column in columns.iter() {
        let mut child = *board;
        let _ = child.place(column, opponent);
        if winner(&child) == Some(opponent) {
            return Some(column);
        }
    }

    let result = search_root(board, depth, ai, difficulty.move_ordering(), rng);
    result.column.or_else(|| columns.first().copied())
}
