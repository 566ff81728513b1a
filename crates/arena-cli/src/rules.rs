//! Host-side match rules
//!
//! The runner keeps the authoritative board as the same raw byte buffer it
//! hands across the player boundary: values 0-7 are unclaimed colors, 8 is
//! the moving player's territory, 9 the opponent's. Rules enforcement is the
//! host's job; the player crates never see these functions.

use arena_core::Board;
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Wire value for the moving player's territory
pub const MINE: u8 = 8;
/// Wire value for the opponent's territory
pub const THEIRS: u8 = 9;

/// Deterministic starting board: colors everywhere, our territory in the
/// top-left corner, the opponent's in the bottom-right.
pub fn starting_board(seed: u64) -> [u8; Board::BYTE_LEN] {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = [0u8; Board::BYTE_LEN];
    for cell in board.iter_mut() {
        *cell = rng.random_range(0..8);
    }
    board[0] = MINE;
    board[Board::BYTE_LEN - 1] = THEIRS;
    board
}

/// Apply a move for the player anchored at the top-left corner: flood-fill
/// outward from the origin, claiming every cell of the chosen color connected
/// to the existing territory.
///
/// `color` must be a color wire value in [0, 7].
pub fn apply_move(board: &mut [u8; Board::BYTE_LEN], color: u8) {
    let mut seen = [[false; Board::SIZE]; Board::SIZE];
    let mut stack = vec![(0usize, 0usize)];
    seen[0][0] = true;

    while let Some((row, col)) = stack.pop() {
        board[Board::SIZE * row + col] = MINE;
        for (r, c) in neighbors(row, col) {
            let value = board[Board::SIZE * r + c];
            if !seen[r][c] && (value == color || value == MINE) {
                seen[r][c] = true;
                stack.push((r, c));
            }
        }
    }
}

fn neighbors(row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
    [
        (row.wrapping_sub(1), col),
        (row + 1, col),
        (row, col.wrapping_sub(1)),
        (row, col + 1),
    ]
    .into_iter()
    .filter(|&(r, c)| r < Board::SIZE && c < Board::SIZE)
}

/// The opponent's view of the board: a 180-degree rotation with own and
/// opponent territory swapped.
pub fn invert(board: &[u8; Board::BYTE_LEN]) -> [u8; Board::BYTE_LEN] {
    let mut inverted = [0u8; Board::BYTE_LEN];
    for (index, &value) in board.iter().enumerate() {
        let flipped = match value {
            MINE => THEIRS,
            THEIRS => MINE,
            color => color,
        };
        inverted[Board::BYTE_LEN - 1 - index] = flipped;
    }
    inverted
}

/// The game ends when no unclaimed color cells remain
pub fn is_over(board: &[u8; Board::BYTE_LEN]) -> bool {
    board.iter().all(|&value| value >= MINE)
}

/// Territory split as (own, opponent) cell counts
pub fn territory(board: &[u8; Board::BYTE_LEN]) -> (usize, usize) {
    let mine = board.iter().filter(|&&value| value == MINE).count();
    let theirs = board.iter().filter(|&&value| value == THEIRS).count();
    (mine, theirs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_board() -> [u8; Board::BYTE_LEN] {
        // Color 2 everywhere, our corner claimed, opponent in the far corner
        let mut board = [2u8; Board::BYTE_LEN];
        board[0] = MINE;
        board[Board::BYTE_LEN - 1] = THEIRS;
        board
    }

    #[test]
    fn test_starting_board_is_deterministic() {
        let first = starting_board(7);
        let second = starting_board(7);
        assert_eq!(first, second);

        assert_eq!(first[0], MINE);
        assert_eq!(first[Board::BYTE_LEN - 1], THEIRS);
        assert!(
            first[1..Board::BYTE_LEN - 1]
                .iter()
                .all(|&value| value < MINE)
        );
    }

    #[test]
    fn test_apply_move_claims_connected_color() {
        let mut board = base_board();
        board[1] = 4; // (0, 1)
        board[2] = 4; // (0, 2)
        board[18] = 4; // (1, 2), connected through (0, 2)
        board[100] = 4; // (6, 4), isolated from the origin region

        apply_move(&mut board, 4);

        assert_eq!(board[1], MINE);
        assert_eq!(board[2], MINE);
        assert_eq!(board[18], MINE);
        // Not connected to the claimed region
        assert_eq!(board[100], 4);
        // Other colors untouched
        assert_eq!(board[16], 2);
    }

    #[test]
    fn test_apply_move_without_adjacent_color_claims_nothing() {
        let mut board = base_board();
        let before = board;
        apply_move(&mut board, 5);
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_move_traverses_existing_territory() {
        let mut board = base_board();
        board[16] = MINE; // (1, 0)
        board[32] = MINE; // (2, 0)
        board[48] = 6; // (3, 0), only reachable through the territory arm

        apply_move(&mut board, 6);

        assert_eq!(board[48], MINE);
    }

    #[test]
    fn test_invert_flips_positions_and_territory() {
        let board = base_board();
        let inverted = invert(&board);

        assert_eq!(inverted[0], MINE);
        assert_eq!(inverted[Board::BYTE_LEN - 1], THEIRS);
        assert_eq!(inverted[5], 2);
    }

    #[test]
    fn test_invert_is_an_involution() {
        let board = starting_board(42);
        assert_eq!(invert(&invert(&board)), board);
    }

    #[test]
    fn test_invert_maps_linear_index() {
        let mut board = base_board();
        board[16 * 3 + 7] = 5;

        let inverted = invert(&board);
        assert_eq!(inverted[Board::BYTE_LEN - 1 - (16 * 3 + 7)], 5);
        assert_eq!(inverted[16 * (15 - 3) + (15 - 7)], 5);
    }

    #[test]
    fn test_is_over_and_territory() {
        let mut board = [MINE; Board::BYTE_LEN];
        board[10] = THEIRS;
        board[11] = THEIRS;
        assert!(is_over(&board));
        assert_eq!(territory(&board), (Board::BYTE_LEN - 2, 2));

        board[12] = 3;
        assert!(!is_over(&board));
    }
}
