use anyhow::Result;
use rand::{rngs::StdRng, SeedableRng};

use std::io::{stdin, stdout, Write};

use connect4_engine::*;

mod display;
use display::draw;

fn main() -> Result<()> {
    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    // choose the game mode
    let mut vs_ai = false;
    loop {
        let mut buffer = String::new();
        print!("Play against the AI? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => {
                vs_ai = true;
                break;
            }
            Some(_letter @ 'n') => break,
            _ => println!("Unknown answer given"),
        }
    }

    // choose the AI difficulty
    let mut difficulty = Difficulty::Medium;
    if vs_ai {
        loop {
            let mut buffer = String::new();
            print!("AI difficulty? 1 (easy) to 4 (extreme): ");
            stdout().flush().expect("failed to flush to stdout!");
            stdin.read_line(&mut buffer)?;
            match buffer.trim().parse::<usize>() {
                Ok(1) => {
                    difficulty = Difficulty::Easy;
                    break;
                }
                Ok(2) => {
                    difficulty = Difficulty::Medium;
                    break;
                }
                Ok(3) => {
                    difficulty = Difficulty::Hard;
                    break;
                }
                Ok(4) => {
                    difficulty = Difficulty::Extreme;
                    break;
                }
                _ => println!("Unknown answer given"),
            }
        }
    }

    // choose the starting player; the AI always plays the yellow discs
    let mut first = Player::One;
    loop {
        let mut buffer = String::new();
        if vs_ai {
            print!("Does the AI move first? y/n: ");
        } else {
            print!("Does player 2 move first? y/n: ");
        }
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => {
                first = Player::Two;
                break;
            }
            Some(_letter @ 'n') => break,
            _ => println!("Unknown answer given"),
        }
    }

    let mut session = GameSession::new(first);
    let mut rng = StdRng::from_entropy();

    // game loop
    loop {
        draw(session.board()).expect("Failed to draw board!");

        match session.state() {
            GameState::Playing => {
                let next_move =
                    // AI player
                    if vs_ai && session.current_player() == Player::Two {
                        println!("AI is thinking...");
                        stdout().flush().expect("Failed to flush to stdout!");

                        let column = choose_move(
                            session.board(),
                            Player::Two,
                            difficulty,
                            &mut rng,
                        )
                        .expect("no legal columns in a live game");

                        println!("AI plays column {}", column + 1);
                        column

                    // human player
                    } else {
                        print!("Move input (1-7, u undo, n new game, q quit) > ");
                        stdout().flush().expect("Failed to flush to stdout!");
                        let mut input_str = String::new();
                        stdin.read_line(&mut input_str)?;

                        match input_str.trim() {
                            "u" => {
                                // against the AI, take back its reply and the
                                // human move that provoked it together
                                let undone = session.undo();
                                if vs_ai {
                                    if let Some(last) = undone {
                                        if last.player == Player::Two {
                                            session.undo();
                                        }
                                    }
                                }
                                continue;
                            }
                            "n" => {
                                session.reset(first);
                                continue;
                            }
                            "q" => break,
                            input => match input.parse::<usize>() {
                                Ok(column @ 1..=WIDTH) => column - 1,
                                _ => {
                                    println!("Invalid move: {}", input);
                                    continue;
                                }
                            },
                        }
                    };

                if let Err(err) = session.play(next_move) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }

            // end states
            GameState::Won(Player::One) => {
                println!("Player 1 wins!");
                break;
            }
            GameState::Won(Player::Two) => {
                if vs_ai {
                    println!("The AI wins!");
                } else {
                    println!("Player 2 wins!");
                }
                break;
            }
            GameState::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    Ok(())
}
