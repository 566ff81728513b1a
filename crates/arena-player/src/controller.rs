//! Player resource lifecycle
//!
//! The host drives a player through three boundary operations: construct,
//! play, destroy. A controller owns at most one player for its whole
//! lifetime; the state machine is the explicit `Slot` enum, so a second
//! construction or an early play is a typed error instead of a crash.

use std::sync::atomic::{AtomicU32, Ordering};

use arena_core::{Board, DecodeError};
use thiserror::Error;
use tracing::{debug, info};

use crate::agent::{Player, RoundRobinPlayer};

/// Opaque identifier for a constructed player resource.
///
/// Handles are minted from a process-wide counter, so every controller
/// issues a distinct value and a handle presented to the wrong controller
/// is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerHandle(u32);

static NEXT_HANDLE: AtomicU32 = AtomicU32::new(1);

impl PlayerHandle {
    fn mint() -> Self {
        Self(NEXT_HANDLE.fetch_add(1, Ordering::Relaxed))
    }
}

/// Lifecycle and input errors surfaced across the plugin boundary
#[derive(Debug, Error)]
pub enum ControllerError {
    /// Construct called on an already-constructed controller
    #[error("player already constructed")]
    AlreadyConstructed,

    /// Play called before a successful construct
    #[error("player not constructed")]
    NotConstructed,

    /// Handle does not match the one issued at construction
    #[error("unknown player handle {0}")]
    UnknownHandle(u32),

    /// Board buffer rejected by the decoder
    #[error("invalid input: {0}")]
    InvalidInput(#[from] DecodeError),
}

enum Slot<P> {
    Unconstructed,
    Constructed { handle: PlayerHandle, player: P },
}

/// Controller owning the single live player instance
pub struct PlayerController<P: Player = RoundRobinPlayer> {
    slot: Slot<P>,
}

impl PlayerController<RoundRobinPlayer> {
    /// Controller for the reference round-robin agent
    pub fn new() -> Self {
        Self::with_player()
    }
}

impl Default for PlayerController<RoundRobinPlayer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Player> PlayerController<P> {
    /// Controller for a caller-chosen agent type
    pub fn with_player() -> Self {
        Self {
            slot: Slot::Unconstructed,
        }
    }

    /// Construct the player from the initial board buffer and hand back its
    /// handle.
    ///
    /// Fails with [`ControllerError::AlreadyConstructed`] on a second call
    /// and with [`ControllerError::InvalidInput`] on a malformed buffer; a
    /// failed call leaves the controller eligible for a later construct.
    pub fn construct(&mut self, bytes: &[u8]) -> Result<PlayerHandle, ControllerError> {
        if let Slot::Constructed { .. } = self.slot {
            return Err(ControllerError::AlreadyConstructed);
        }

        let board = Board::decode(bytes)?;
        let player = P::from_board(&board);
        let handle = PlayerHandle::mint();
        self.slot = Slot::Constructed { handle, player };

        info!("player constructed, handle {}", handle.0);
        Ok(handle)
    }

    /// Ask the player for a move on the observed board.
    ///
    /// The returned value is the chosen color widened to `i64`, always in
    /// [0, 7]. A failed call leaves the player untouched: the board is
    /// decoded before the agent is consulted.
    pub fn play(&mut self, handle: PlayerHandle, bytes: &[u8]) -> Result<i64, ControllerError> {
        let Slot::Constructed {
            handle: issued,
            player,
        } = &mut self.slot
        else {
            return Err(ControllerError::NotConstructed);
        };
        if handle != *issued {
            return Err(ControllerError::UnknownHandle(handle.0));
        }

        let board = Board::decode(bytes)?;
        let color = player.play(&board);

        debug!("player {} move: {}", handle.0, color);
        Ok(i64::from(color.to_u8()))
    }

    /// Release the handle.
    ///
    /// The player instance lives for the controller's lifetime, so this
    /// never fails, never transitions state, and later plays keep working.
    pub fn destroy(&mut self, handle: PlayerHandle) {
        debug!("destroy for handle {} ignored", handle.0);
    }
}
