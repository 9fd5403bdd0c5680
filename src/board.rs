use thiserror::Error;

use crate::{HEIGHT, WIDTH};

/// One of the two sides of the game
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// A rejected placement
#[derive(Copy, Clone, Eq, PartialEq, Debug, Error)]
pub enum PlaceError {
    #[error("Invalid move, column {0} full")]
    ColumnFull(usize),
    #[error("Invalid move, column {0} out of range")]
    OutOfBounds(usize),
}

/// A disc placement that has landed, identifying exactly which cell it filled
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Move {
    pub column: usize,
    pub row: usize,
    pub player: Player,
}

/// A 6x7 gravity-drop grid
///
/// Rows are indexed 0 (top) to 5 (bottom). The board is a plain value:
/// search copies it freely to explore hypothetical futures without
/// touching the live game board.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Board {
    // cells are stored row-major, top row first
    cells: [[Option<Player>; WIDTH]; HEIGHT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[None; WIDTH]; HEIGHT],
        }
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<Player> {
        self.cells[row][column]
    }

    /// Returns the row a disc dropped in `column` would land in, scanning
    /// from the bottom, or `None` if the column is full
    pub fn lowest_open_row(&self, column: usize) -> Option<usize> {
        (0..HEIGHT).rev().find(|&row| self.cells[row][column].is_none())
    }

    /// Drops a disc for `player` into `column`
    ///
    /// This is the only mutating placement operation; it never overwrites
    /// an occupied cell.
    pub fn place(&mut self, column: usize, player: Player) -> Result<Move, PlaceError> {
        if column >= WIDTH {
            return Err(PlaceError::OutOfBounds(column));
        }
        let row = self
            .lowest_open_row(column)
            .ok_or(PlaceError::ColumnFull(column))?;
        self.cells[row][column] = Some(player);
        Ok(Move {
            column,
            row,
            player,
        })
    }

    /// Removes the most recently dropped disc in `column`, returning it
    ///
    /// A no-op on an empty or out-of-range column, so undo stays safe
    /// under inconsistent history bookkeeping.
    pub fn remove_top(&mut self, column: usize) -> Option<Move> {
        if column >= WIDTH {
            return None;
        }
        for row in 0..HEIGHT {
            if let Some(player) = self.cells[row][column] {
                self.cells[row][column] = None;
                return Some(Move {
                    column,
                    row,
                    player,
                });
            }
        }
        None
    }

    pub fn playable(&self, column: usize) -> bool {
        column < WIDTH && self.cells[0][column].is_none()
    }

    /// Columns still open for play, in ascending order; empty means the
    /// board is full
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..WIDTH).filter(|&column| self.playable(column)).collect()
    }

    pub fn is_full(&self) -> bool {
        (0..WIDTH).all(|column| !self.playable(column))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
