// Per-piece movement rules
// One module per rule family, tied together by a single exhaustive dispatch

mod king;
mod knight;
mod pawn;
mod sliders;

use crate::board::{Board, PieceType, Square};

/// Decide whether moving the piece on `from` to `to` is allowed.
///
/// Pure read of the board: nothing is mutated. Both squares must already be
/// on the board; `Board::apply_move` and the move selector validate them
/// before calling in here. An Empty source can never move.
pub fn is_legal(from: Square, to: Square, board: &Board) -> bool {
    let mover = board.piece(from);

    match mover.piece_type {
        PieceType::King => king::is_legal(mover.color, from, to, board),
        PieceType::Queen => sliders::queen_legal(mover.color, from, to, board),
        PieceType::Rook => sliders::rook_legal(mover.color, from, to, board),
        PieceType::Bishop => sliders::bishop_legal(mover.color, from, to, board),
        PieceType::Knight => knight::is_legal(mover.color, from, to, board),
        PieceType::Pawn => pawn::is_legal(mover.color, from, to, board),
        PieceType::Empty => false,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
