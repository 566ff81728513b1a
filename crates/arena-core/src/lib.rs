//! # arena-core
//!
//! Core types for the arena player plugin:
//! - Cell and color model for the 16x16 territory board
//! - Board decoding from the host's raw byte buffers
//! - Decode error taxonomy

pub mod board;
pub mod cell;
pub mod error;

pub use board::Board;
pub use cell::{Cell, Color};
pub use error::{DecodeError, Result};
