//! Cell and color model
//!
//! A board square holds one of ten values: the eight playable colors (0-7),
//! the player's own territory (8), or the opponent's territory (9).

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eight playable colors, wire values 0-7
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Color {
    Red = 0,
    Orange = 1,
    Yellow = 2,
    Green = 3,
    Cyan = 4,
    Blue = 5,
    Purple = 6,
    Pink = 7,
}

impl Color {
    /// All colors in wire-value order
    pub const ALL: [Color; 8] = [
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Cyan,
        Self::Blue,
        Self::Purple,
        Self::Pink,
    ];

    /// Color for a wire value in [0, 7]
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    /// Wire value of this color
    pub fn to_u8(self) -> u8 {
        self as u8
    }

    /// Lowercase human-readable name
    pub fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Cyan => "cyan",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Pink => "pink",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One board square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// An unclaimed colored square
    Color(Color),
    /// Our territory (wire value 8)
    Mine,
    /// Opponent territory (wire value 9)
    Theirs,
}

impl Cell {
    /// Cell for a wire value in [0, 9]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0..=7 => Color::from_u8(value).map(Self::Color),
            8 => Some(Self::Mine),
            9 => Some(Self::Theirs),
            _ => None,
        }
    }

    /// Wire value of this cell
    pub fn to_u8(self) -> u8 {
        match self {
            Self::Color(color) => color.to_u8(),
            Self::Mine => 8,
            Self::Theirs => 9,
        }
    }

    /// The color of an unclaimed square, if this cell is one
    pub fn as_color(self) -> Option<Color> {
        match self {
            Self::Color(color) => Some(color),
            _ => None,
        }
    }
}
