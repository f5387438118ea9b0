/// Movement rule for the Knight
/// Jumps in an L shape, landing square permitting.
use crate::board::{Board, Color, Square};

/// Legal when the move is an L-jump, (2,1) or (1,2), onto a square that
/// does not hold a friendly piece. Occupancy along the way never matters.
pub fn is_legal(color: Color, from: Square, to: Square, board: &Board) -> bool {
    if board.piece(to).blocks(color) {
        return false;
    }

    let dr = (from.0 as i8 - to.0 as i8).abs();
    let dc = (from.1 as i8 - to.1 as i8).abs();

    (dr == 2 && dc == 1) || (dr == 1 && dc == 2)
}

// =============================================================================
// Unit Tests
// =============================================================================
