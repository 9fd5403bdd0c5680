//! Win and draw detection
//!
//! Both checks scan the whole board on every call: they are invoked on
//! arbitrary hypothetical positions during search, so no incremental
//! state is kept.

use crate::board::{Board, Player};
use crate::{CONNECT, HEIGHT, WIDTH};

// the four line orientations as (row delta, column delta):
// horizontal, vertical, diagonal down-right, diagonal up-right
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Returns the player with four aligned discs, if any
pub fn winner(board: &Board) -> Option<Player> {
    for row in 0..HEIGHT {
        for column in 0..WIDTH {
            let player = match board.cell(row, column) {
                Some(player) => player,
                None => continue,
            };
            for &(dr, dc) in DIRECTIONS.iter() {
                let end_row = row as isize + dr * (CONNECT - 1) as isize;
                let end_column = column as isize + dc * (CONNECT - 1) as isize;
                if end_row < 0
                    || end_row >= HEIGHT as isize
                    || end_column >= WIDTH as isize
                {
                    continue;
                }
                let aligned = (1..CONNECT as isize).all(|step| {
                    let r = (row as isize + dr * step) as usize;
                    let c = (column as isize + dc * step) as usize;
                    board.cell(r, c) == Some(player)
                });
                if aligned {
                    return Some(player);
                }
            }
        }
    }
    None
}

/// True iff the board is full and nobody has won
///
/// A board with a winner is never reported as a draw.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winner(board).is_none()
}
