//! Local arena match runner
//!
//! Hosts two players in-process and drives a full match: alternates turns,
//! applies the capture rule, renders the board to stdout, and optionally
//! writes a JSON transcript.
//!
//! Usage: `arena-match [seed] [transcript.json]`

mod rules;
mod transcript;

use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use arena_core::{Board, Color};
use arena_player::PlayerController;
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

use transcript::{MatchTranscript, MoveRecord};

/// Runner configuration
#[derive(Debug, Clone)]
struct MatchConfig {
    /// Seed for the starting board
    seed: u64,
    /// Safety cap on total moves; round-robin players can leave enclosed
    /// colors unreachable forever
    max_moves: u32,
    /// Optional JSON transcript output path
    transcript_path: Option<PathBuf>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: 0x5eed_ab1e,
            max_moves: 512,
            transcript_path: None,
        }
    }
}

impl MatchConfig {
    fn from_args() -> Result<Self> {
        let mut config = Self::default();
        if let Some(seed) = std::env::args().nth(1) {
            config.seed = seed
                .parse()
                .with_context(|| format!("invalid seed: {seed}"))?;
        }
        config.transcript_path = std::env::args().nth(2).map(PathBuf::from);
        Ok(config)
    }
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = MatchConfig::from_args()?;
    info!("starting local match, seed {}", config.seed);

    let mut board = rules::starting_board(config.seed);
    let mut player1 = PlayerController::new();
    let mut player2 = PlayerController::new();
    let handle1 = player1.construct(&board)?;
    let handle2 = player2.construct(&rules::invert(&board))?;

    println!("Initial board:");
    print_board(&board);

    let mut moves: Vec<MoveRecord> = Vec::new();
    while !rules::is_over(&board) {
        if moves.len() >= config.max_moves as usize {
            warn!("move cap {} reached, stopping early", config.max_moves);
            break;
        }

        let move_number = moves.len() as u32 + 1;
        let started = Instant::now();

        // Odd moves belong to player 1; player 2 sees the inverted board
        let (player, value) = if move_number % 2 == 1 {
            (1u8, player1.play(handle1, &board)?)
        } else {
            (2u8, player2.play(handle2, &rules::invert(&board))?)
        };
        let color = u8::try_from(value)
            .ok()
            .and_then(Color::from_u8)
            .context("player returned an out-of-range move")?;

        if player == 1 {
            rules::apply_move(&mut board, color.to_u8());
        } else {
            let mut inverted = rules::invert(&board);
            rules::apply_move(&mut inverted, color.to_u8());
            board = rules::invert(&inverted);
        }

        info!(
            "player {} played {} after {:?}",
            player,
            color,
            started.elapsed()
        );
        moves.push(MoveRecord {
            move_number,
            player,
            color,
            state_hash: transcript::state_hash(&board),
        });
        print_board(&board);
    }

    let (player1_territory, player2_territory) = rules::territory(&board);
    info!(
        "final territory: player 1 = {}, player 2 = {}",
        player1_territory, player2_territory
    );

    if let Some(path) = &config.transcript_path {
        let record = MatchTranscript {
            seed: config.seed,
            moves,
            player1_territory,
            player2_territory,
        };
        let file = File::create(path)
            .with_context(|| format!("creating transcript file {}", path.display()))?;
        serde_json::to_writer_pretty(file, &record)?;
        info!("transcript written to {}", path.display());
    }

    Ok(())
}

fn cell_style(value: u8) -> &'static str {
    match value {
        0 => "\x1b[41m",       // red
        1 => "\x1b[48;5;208m", // orange
        2 => "\x1b[43m",       // yellow
        3 => "\x1b[42m",       // green
        4 => "\x1b[46m",       // cyan
        5 => "\x1b[44m",       // blue
        6 => "\x1b[45m",       // purple
        7 => "\x1b[48;5;13m",  // pink
        8 => "\x1b[47m",       // our territory
        _ => "\x1b[100m",      // opponent territory
    }
}

fn print_board(board: &[u8; Board::BYTE_LEN]) {
    for row in 0..Board::SIZE {
        for col in 0..Board::SIZE {
            print!("{}  \x1b[0m", cell_style(board[Board::SIZE * row + col]));
        }
        println!();
    }
    println!();
}
