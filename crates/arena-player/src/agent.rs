//! Player agents

use arena_core::{Board, Color};

/// A move-selection strategy driven through the plugin boundary.
///
/// The host constructs exactly one agent from the initial board, then asks it
/// for a color on every turn. Implementations are free to retain and analyze
/// the board; the contract only requires a color back.
pub trait Player {
    /// Build an agent observing the initial board
    fn from_board(board: &Board) -> Self;

    /// Choose the color to play for the observed board
    fn play(&mut self, board: &Board) -> Color;
}

/// The reference agent: cycles through the colors by move number, ignoring
/// board content entirely.
///
/// The move counter wraps at `u32::MAX`; the wire values returned for
/// successive calls are exactly `1, 2, 3, 4, 5, 6, 7, 0, 1, ...`
#[derive(Debug, Default)]
pub struct RoundRobinPlayer {
    moves: u32,
}

impl Player for RoundRobinPlayer {
    fn from_board(_board: &Board) -> Self {
        Self { moves: 0 }
    }

    fn play(&mut self, _board: &Board) -> Color {
        self.moves = self.moves.wrapping_add(1);
        Color::ALL[(self.moves % 8) as usize]
    }
}
