// Move selection for the computer-controlled side
// Enumerates every legal move for a color; the choice among them is a
// pluggable strategy, with uniform random choice as the concrete one

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::{Board, Color, Square};
use crate::pieces;

// =============================================================================
// Candidate Enumeration
// =============================================================================

/// Every (from, to) pair the given color could play right now.
///
/// A pair qualifies when the source holds a piece of that color, the piece's
/// rule accepts the move, and playing it out on a snapshot still leaves the
/// color's king somewhere on the board.
pub fn legal_moves_for(board: &Board, color: Color) -> Vec<(Square, Square)> {
    let mut candidates = Vec::new();

    for from_row in 0..8u8 {
        for from_col in 0..8u8 {
            let from = (from_row, from_col);
            let piece = board.piece(from);
            if piece.is_empty() || piece.color != color {
                continue;
            }

            for to_row in 0..8u8 {
                for to_col in 0..8u8 {
                    let to = (to_row, to_col);
                    if !pieces::is_legal(from, to, board) {
                        continue;
                    }

                    // Probe the move on a throwaway copy of the board
                    let mut probe = board.snapshot();
                    if probe.apply_move(from, to).is_ok() && probe.locate_king(color).is_some() {
                        candidates.push((from, to));
                    }
                }
            }
        }
    }

    candidates
}

// =============================================================================
// Selection Strategies
// =============================================================================

/// Strategy seam: pick one move for `color`, or None when nothing is playable
pub trait MoveSelector {
    fn select_move(&mut self, board: &Board, color: Color) -> Option<(Square, Square)>;
}

/// Picks uniformly at random among the legal candidates.
///
/// The generator is injected, not global: seed it for reproducible games,
/// or build from entropy for casual play.
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    pub fn new(seed: u64) -> Self {
        RandomSelector {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        RandomSelector {
            rng: StdRng::from_entropy(),
        }
    }
}

impl MoveSelector for RandomSelector {
    fn select_move(&mut self, board: &Board, color: Color) -> Option<(Square, Square)> {
        let candidates = legal_moves_for(board, color);
        candidates.choose(&mut self.rng).copied()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
