/// Movement rule for the almighty King !!
/// One step in any of the 8 directions.
use crate::board::{Board, Color, Square};

/// A king step is legal when it covers at most one row and one column,
/// actually goes somewhere, and does not land on a friendly piece.
pub fn is_legal(color: Color, from: Square, to: Square, board: &Board) -> bool {
    if board.piece(to).blocks(color) {
        return false;
    }

    let dr = (from.0 as i8 - to.0 as i8).abs();
    let dc = (from.1 as i8 - to.1 as i8).abs();

    dr <= 1 && dc <= 1 && (dr != 0 || dc != 0)
}

// =============================================================================
// Unit Tests
// =============================================================================
