// Terminal chess: you play White, a random opponent plays Black
//
// Usage: rust-chess-game [--seed <n>]
// A fixed seed makes the opponent's play reproducible.

use std::env;
use std::io::{self, BufRead, Write};

use rust_chess_game::board::Color;
use rust_chess_game::coords;
use rust_chess_game::game::GameState;
use rust_chess_game::selector::{MoveSelector, RandomSelector};

/// Pull the value after "--seed" out of the argument list, if present
fn parse_seed(args: &[String]) -> Option<u64> {
    let idx = args.iter().position(|a| a == "--seed")?;
    args.get(idx + 1)?.parse().ok()
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut opponent = match parse_seed(&args) {
        Some(seed) => RandomSelector::new(seed),
        None => RandomSelector::from_entropy(),
    };

    println!("=== Rust Chess ===");
    println!("You are White. Enter moves as two squares (e.g. e2 e4), or quit.");
    println!();

    let mut game = GameState::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("{}", game.board());

        if let Some(winner) = game.winner() {
            println!(
                "{} wins! The {} king is gone from the board.",
                winner,
                winner.opposite()
            );
            break;
        }

        match game.turn() {
            Color::White => {
                print!("Your move: ");
                io::stdout().flush().unwrap();

                let line = match lines.next() {
                    Some(Ok(line)) => line,
                    _ => break, // stdin closed
                };
                let parts: Vec<&str> = line.split_whitespace().collect();

                if parts.first() == Some(&"quit") {
                    println!("White resigns. Black wins!");
                    break;
                }
                if parts.len() != 2 {
                    println!("Please enter two squares, e.g. e2 e4");
                    continue;
                }

                let from = match coords::parse_square(parts[0]) {
                    Some(square) => square,
                    None => {
                        println!("'{}' is not a square on the board", parts[0]);
                        continue;
                    }
                };
                let to = match coords::parse_square(parts[1]) {
                    Some(square) => square,
                    None => {
                        println!("'{}' is not a square on the board", parts[1]);
                        continue;
                    }
                };

                if let Err(err) = game.try_move(from, to) {
                    println!("Rejected: {}", err);
                }
            }

            Color::Black => match opponent.select_move(game.board(), Color::Black) {
                Some((from, to)) => {
                    game.try_move(from, to)
                        .expect("selected moves are always legal");
                    println!(
                        "Black plays {} {}",
                        coords::square_name(from),
                        coords::square_name(to)
                    );
                }
                None => {
                    println!("Black has no legal moves. The game is a draw.");
                    break;
                }
            },
        }
    }

    if !game.history().is_empty() {
        println!();
        println!("Moves played:");
        for (number, (from, to)) in game.history().iter().enumerate() {
            println!("{:3}. {} {}", number + 1, from, to);
        }
    }
}
