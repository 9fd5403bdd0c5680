//! An owned game session: live board, turn, history and terminal state
//!
//! All game state lives in the session value rather than in any shared
//! global, so multiple independent games can run side by side and tests
//! stay deterministic.

use anyhow::{anyhow, Result};

use crate::board::{Board, Move, Player};
use crate::rules::{is_draw, winner};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    Won(Player),
    Draw,
}

pub struct GameSession {
    board: Board,
    current: Player,
    history: Vec<Move>,
    state: GameState,
}

impl GameSession {
    pub fn new(first: Player) -> Self {
        Self {
            board: Board::new(),
            current: first,
            history: Vec::new(),
            state: GameState::Playing,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn moves_played(&self) -> usize {
        self.history.len()
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Plays the current player's disc into `column`
    ///
    /// Rejects the move if the game is over or the column cannot take a
    /// disc; a rejected move leaves the session untouched and the same
    /// player to act. A successful move is recorded in the history,
    /// re-evaluates the game state and passes the turn.
    pub fn play(&mut self, column: usize) -> Result<GameState> {
        if self.state != GameState::Playing {
            return Err(anyhow!("Invalid move, the game is over"));
        }
        let placed = self.board.place(column, self.current)?;
        self.history.push(placed);

        // win detection takes precedence over draw detection
        self.state = match winner(&self.board) {
            Some(player) => GameState::Won(player),
            None if is_draw(&self.board) => GameState::Draw,
            None => GameState::Playing,
        };
        self.current = self.current.other();

        Ok(self.state)
    }

    /// Takes back the most recent move, returning it
    ///
    /// The mover becomes the current player again and any terminal state
    /// is cleared. A no-op on an empty history.
    pub fn undo(&mut self) -> Option<Move> {
        let last = self.history.pop()?;
        self.board.remove_top(last.column);
        self.current = last.player;
        self.state = GameState::Playing;
        Some(last)
    }

    /// Starts the session over with a fresh board
    pub fn reset(&mut self, first: Player) {
        self.board = Board::new();
        self.current = first;
        self.history.clear();
        self.state = GameState::Playing;
    }
}
