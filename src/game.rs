// Turn sequencing and game-end detection
// GameState owns the board, the side to move and the move history

use crate::board::{Board, Color, MoveError, Square};
use crate::coords;

// =============================================================================
// Game State
// =============================================================================

/// The running state of a two-player game: one board, whose turn it is,
/// and every move applied so far
pub struct GameState {
    board: Board,
    turn: Color,
    /// Applied moves as ("e2", "e4")-style pairs, in the order they were played
    history: Vec<(String, String)>,
}

impl GameState {
    /// A fresh game: standard starting position, White to move
    pub fn new() -> Self {
        GameState {
            board: Board::starting_position(),
            turn: Color::White,
            history: Vec::new(),
        }
    }

    /// Start from an arbitrary position (endgame studies, tests)
    pub fn from_position(board: Board, turn: Color) -> Self {
        GameState {
            board,
            turn,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The color whose turn it is
    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn history(&self) -> &[(String, String)] {
        &self.history
    }

    /// Handle a move request for the side to move.
    ///
    /// The source must hold a piece of the current player's color; the move
    /// itself is then judged by the piece's rule. Any rejection leaves the
    /// board, the turn and the history exactly as they were. On success the
    /// move is recorded and the turn passes to the other color.
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<(), MoveError> {
        let mover = self.board.piece_at(from)?;
        self.board.piece_at(to)?;

        if mover.is_empty() {
            return Err(MoveError::EmptySource);
        }
        if mover.color != self.turn {
            return Err(MoveError::WrongColor);
        }

        self.board.apply_move(from, to)?;

        self.history
            .push((coords::square_name(from), coords::square_name(to)));
        self.turn = self.turn.opposite();
        Ok(())
    }

    /// Game-end check, run before every turn: if the side to move has no
    /// king left on the board, the other color has won. Nothing subtler than
    /// king presence is tested.
    pub fn winner(&self) -> Option<Color> {
        match self.board.locate_king(self.turn) {
            Some(_) => None,
            None => Some(self.turn.opposite()),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
