//! # arena-player
//!
//! The arena player agent and its resource lifecycle:
//! - `Player` trait and the reference round-robin agent
//! - `PlayerController` guarding the construct-once contract and the
//!   opaque handle handed back to the host

pub mod agent;
pub mod controller;

pub use agent::{Player, RoundRobinPlayer};
pub use controller::{ControllerError, PlayerController, PlayerHandle};
