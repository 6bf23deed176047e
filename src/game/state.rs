//! Board and input types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::card::Card;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 4;

/// A board cell: a face card and its orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldCard {
    /// The card in the cell.
    pub card: Card,
    /// Whether the card is face up.
    pub face_up: bool,
}

impl FieldCard {
    /// Creates a face-down cell.
    #[must_use]
    pub const fn face_down(card: Card) -> Self {
        Self {
            card,
            face_up: false,
        }
    }

    /// Turns the card over.
    pub const fn flip(&mut self) {
        self.face_up = !self.face_up;
    }
}

/// The 4x4 board, indexed as `board[y][x]`.
pub type Board = [[FieldCard; BOARD_SIZE]; BOARD_SIZE];

/// A player action: play `card` from the hand centered on `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Input {
    /// Acting player (0 or 1).
    pub player: u8,
    /// Card to play.
    pub card: Card,
    /// Target column (0..4).
    pub x: u8,
    /// Target row (0..4).
    pub y: u8,
}

impl Input {
    /// Creates a new input.
    #[must_use]
    pub const fn new(player: u8, card: Card, x: u8, y: u8) -> Self {
        Self { player, card, x, y }
    }
}
