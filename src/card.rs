//! Card, suit, and color types.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Suit {
    /// Hearts.
    Heart,
    /// Spades.
    Spade,
    /// Diamonds.
    Diamond,
    /// Clovers (clubs).
    Clover,
}

impl Suit {
    /// All suits in board order.
    pub const ALL: [Self; 4] = [Self::Heart, Self::Spade, Self::Diamond, Self::Clover];

    /// Returns the color of the suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Heart | Self::Diamond => Color::Red,
            Self::Spade | Self::Clover => Color::Black,
        }
    }

    const fn letter(self) -> char {
        match self {
            Self::Heart => 'h',
            Self::Spade => 's',
            Self::Diamond => 'd',
            Self::Clover => 'c',
        }
    }
}

/// Card color, also used to tell the two players apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Color {
    /// Hearts and diamonds.
    Red,
    /// Spades and clovers.
    Black,
}

/// Ranks dealt onto the board (A, J, Q, K).
pub const FACE_RANKS: [u8; 4] = [1, 11, 12, 13];

/// Ranks that make up the deck, the hands, and the cemetery.
pub const NUMBER_RANKS: [u8; 4] = [2, 3, 4, 5];

/// Number of cards on the board.
pub const BOARD_CARDS: usize = Suit::ALL.len() * FACE_RANKS.len();

/// Number of cards shared between the deck, the cemetery, and both hands.
pub const DECK_SIZE: usize = Suit::ALL.len() * NUMBER_RANKS.len();

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub number: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// The rank is not checked here; see [`crate::validate_card`].
    #[must_use]
    pub const fn new(suit: Suit, number: u8) -> Self {
        Self { suit, number }
    }

    /// Returns the color of the card.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    /// Returns whether the rank belongs on the board.
    #[must_use]
    pub const fn is_face(&self) -> bool {
        matches!(self.number, 1 | 11..=13)
    }

    /// Returns whether the rank belongs in the deck, a hand, or the cemetery.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self.number, 2..=5)
    }
}

impl fmt::Display for Card {
    /// Formats the card as a two-character code such as `hA`, `s5`, or `dK`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self.number {
            1 => 'A',
            n @ 2..=9 => char::from(b'0' + n),
            10 => '0',
            11 => 'J',
            12 => 'Q',
            13 => 'K',
            _ => '?',
        };
        write!(f, "{}{rank}", self.suit.letter())
    }
}
