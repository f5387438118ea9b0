/// Movement rules for the sliding pieces: Queen, Rook and Bishop
///
/// Sliders here are pure line geometry: same row, same column, or same
/// diagonal, at any distance. Squares between `from` and `to` are not
/// examined, so a slider passes over occupants; only the landing square's
/// occupancy is checked.
use crate::board::{Board, Color, Square};

/// Queen: any distance along a row, column or diagonal
pub fn queen_legal(color: Color, from: Square, to: Square, board: &Board) -> bool {
    if board.piece(to).blocks(color) {
        return false;
    }
    same_line(from, to) || same_diagonal(from, to)
}

/// Rook: any distance along a row or column
pub fn rook_legal(color: Color, from: Square, to: Square, board: &Board) -> bool {
    if board.piece(to).blocks(color) {
        return false;
    }
    same_line(from, to)
}

/// Bishop: any distance along a diagonal
pub fn bishop_legal(color: Color, from: Square, to: Square, board: &Board) -> bool {
    if board.piece(to).blocks(color) {
        return false;
    }
    same_diagonal(from, to)
}

/// Same row or same column
fn same_line(from: Square, to: Square) -> bool {
    from.0 == to.0 || from.1 == to.1
}

/// Equal absolute row and column deltas
fn same_diagonal(from: Square, to: Square) -> bool {
    let dr = (from.0 as i8 - to.0 as i8).abs();
    let dc = (from.1 as i8 - to.1 as i8).abs();
    dr == dc
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, PieceType};

    fn board_with(piece_type: PieceType, square: Square) -> Board {
        let mut board = Board::new();
        board.place(square, Piece::new(piece_type, Color::White));
        board
    }

    #[test]
    fn test_rook_moves_along_lines() {
        let board = board_with(PieceType::Rook, (4, 3));

        assert!(rook_legal(Color::White, (4, 3), (4, 0), &board));
        assert!(rook_legal(Color::White, (4, 3), (4, 7), &board));
        assert!(rook_legal(Color::White, (4, 3), (0, 3), &board));
        assert!(rook_legal(Color::White, (4, 3), (7, 3), &board));
    }

    #[test]
    fn test_rook_rejects_diagonals_and_jumps() {
        let board = board_with(PieceType::Rook, (4, 3));

        assert!(!rook_legal(Color::White, (4, 3), (3, 2), &board));
        assert!(!rook_legal(Color::White, (4, 3), (2, 5), &board));
    }

    #[test]
    fn test_bishop_moves_along_diagonals() {
        let board = board_with(PieceType::Bishop, (4, 3));

        assert!(bishop_legal(Color::White, (4, 3), (1, 0), &board));
        assert!(bishop_legal(Color::White, (4, 3), (0, 7), &board));
        assert!(bishop_legal(Color::White, (4, 3), (7, 0), &board));
        assert!(bishop_legal(Color::White, (4, 3), (7, 6), &board));
    }

    #[test]
    fn test_bishop_rejects_lines() {
        let board = board_with(PieceType::Bishop, (4, 3));

        assert!(!bishop_legal(Color::White, (4, 3), (4, 6), &board));
        assert!(!bishop_legal(Color::White, (4, 3), (0, 3), &board));
        assert!(!bishop_legal(Color::White, (4, 3), (2, 4), &board));
    }

    #[test]
    fn test_queen_combines_both() {
        let board = board_with(PieceType::Queen, (4, 3));

        assert!(queen_legal(Color::White, (4, 3), (4, 7), &board));
        assert!(queen_legal(Color::White, (4, 3), (0, 3), &board));
        assert!(queen_legal(Color::White, (4, 3), (1, 0), &board));
        assert!(!queen_legal(Color::White, (4, 3), (2, 4), &board)); // knight-shaped
    }

    #[test]
    fn test_sliders_pass_over_occupants() {
        let mut board = board_with(PieceType::Rook, (4, 3));
        board.place((4, 5), Piece::new(PieceType::Pawn, Color::White));

        // The pawn on f4 sits between the rook and h4, and does not block
        assert!(rook_legal(Color::White, (4, 3), (4, 7), &board));

        let mut board = board_with(PieceType::Bishop, (7, 5));
        board.place((6, 4), Piece::new(PieceType::Pawn, Color::White));

        // f1 bishop reaches c4 straight over the e2 pawn
        assert!(bishop_legal(Color::White, (7, 5), (4, 2), &board));
    }

    #[test]
    fn test_sliders_blocked_on_landing_square_only() {
        let mut board = board_with(PieceType::Queen, (4, 3));
        board.place((4, 7), Piece::new(PieceType::Pawn, Color::White));
        board.place((0, 3), Piece::new(PieceType::Pawn, Color::Black));

        assert!(!queen_legal(Color::White, (4, 3), (4, 7), &board)); // own piece
        assert!(queen_legal(Color::White, (4, 3), (0, 3), &board)); // capture
    }
}
