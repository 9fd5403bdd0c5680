//! A depth-limited AI opponent for the board game 'Connect 4'
//!
//! This engine uses minimax search with alpha-beta pruning and a
//! positional heuristic, offered at four difficulty tiers from
//! random play up to a depth-7 search with move ordering.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_engine::{Board, Player, Difficulty, choose_move};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut board = Board::new();
//! board.place(3, Player::One)?;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let column = choose_move(&board, Player::Two, Difficulty::Hard, &mut rng);
//!
//! assert!(column.unwrap() < 7);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod rules;

pub mod score;

pub mod search;

pub mod select;

pub mod session;


pub use board::{Board, Move, PlaceError, Player};
pub use rules::{is_draw, winner};
pub use search::{minimax, search_root, SearchResult};
pub use select::{choose_move, Difficulty};
pub use session::{GameSession, GameState};

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of aligned tiles needed to win
pub const CONNECT: usize = 4;

// ensure that a winning line fits on the board in every orientation
const_assert!(CONNECT <= WIDTH);
const_assert!(CONNECT <= HEIGHT);
