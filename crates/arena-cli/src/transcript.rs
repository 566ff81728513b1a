//! Match transcript
//!
//! Serializable record of a local match, plus the board state hash the
//! runner logs after every move for determinism checks.

use arena_core::Color;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// One applied move
#[derive(Debug, Clone, Serialize)]
pub struct MoveRecord {
    pub move_number: u32,
    /// 1 or 2
    pub player: u8,
    pub color: Color,
    /// Board hash after the move, from player 1's perspective
    pub state_hash: String,
}

/// Full record of a local match
#[derive(Debug, Serialize)]
pub struct MatchTranscript {
    pub seed: u64,
    pub moves: Vec<MoveRecord>,
    pub player1_territory: usize,
    pub player2_territory: usize,
}

/// Hex-encoded SHA-256 over the raw board bytes
pub fn state_hash(board: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(board);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_hash_is_stable() {
        let board = [3u8; 256];
        assert_eq!(state_hash(&board), state_hash(&board));

        let mut other = board;
        other[0] = 4;
        assert_ne!(state_hash(&board), state_hash(&other));
    }

    #[test]
    fn test_transcript_serializes_color_names() {
        let record = MatchTranscript {
            seed: 9,
            moves: vec![MoveRecord {
                move_number: 1,
                player: 1,
                color: Color::Orange,
                state_hash: "abc".into(),
            }],
            player1_territory: 200,
            player2_territory: 56,
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"color\":\"orange\""));
        assert!(json.contains("\"player1_territory\":200"));
    }
}
