//! Error types for validation, setup, and transitions.

use thiserror::Error;

use crate::card::{Card, Color};

/// Errors found when checking a single card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank outside 1..=13 or in the unused 6..=10 range.
    #[error("invalid number {0}")]
    Number(u8),
}

/// Where a card sits inside a [`crate::State`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// Board cell at `(x, y)`.
    Board {
        /// Column.
        x: usize,
        /// Row.
        y: usize,
    },
    /// Deck position (the last index is the top).
    Deck(usize),
    /// Cemetery position (the last index is the most recent play).
    Cemetery(usize),
    /// Position in a player's hand.
    Hand {
        /// Owner of the hand.
        player: usize,
        /// Position within the hand.
        index: usize,
    },
}

impl core::fmt::Display for Zone {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Board { x, y } => write!(f, "board[{x}, {y}]"),
            Self::Deck(index) => write!(f, "deck[{index}]"),
            Self::Cemetery(index) => write!(f, "cemetery[{index}]"),
            Self::Hand { player, index } => write!(f, "hands[{player}][{index}]"),
        }
    }
}

/// Errors found when checking a player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// Player index is not 0 or 1.
    #[error("invalid player {0}")]
    Player(u8),
    /// The card itself is malformed.
    #[error("invalid card: {0}")]
    Card(#[source] CardError),
    /// The card cannot be played (rank outside 2..=5).
    #[error("card {0} cannot be played")]
    Unplayable(Card),
    /// Target lies outside the board.
    #[error("invalid coordinate ({x}, {y})")]
    Coordinate {
        /// Column.
        x: u8,
        /// Row.
        y: u8,
    },
}

/// Errors found when checking a whole game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
    /// A card is malformed.
    #[error("invalid {zone}'s card: {source}")]
    Card {
        /// Position of the card.
        zone: Zone,
        /// What is wrong with it.
        #[source]
        source: CardError,
    },
    /// A card has a rank that does not belong in its zone.
    #[error("card {card} does not belong in {zone}")]
    Rank {
        /// Position of the card.
        zone: Zone,
        /// The misplaced card.
        card: Card,
    },
    /// The same card appears twice.
    #[error("duplicate card {card} at {zone}")]
    Duplicate {
        /// Position of the second copy.
        zone: Zone,
        /// The duplicated card.
        card: Card,
    },
    /// A hand holds the wrong number of cards for the current turn.
    #[error("invalid number of cards in hands[{player}]: {len}")]
    HandSize {
        /// Owner of the hand.
        player: usize,
        /// Cards actually held.
        len: usize,
    },
    /// Deck, cemetery, and hands together do not hold every number card.
    #[error("invalid number of cards: {0}")]
    CardCount(usize),
    /// Turn is not 0 or 1.
    #[error("invalid turn {0}")]
    Turn(u8),
    /// Both players share a color.
    #[error("invalid colors {0:?}")]
    Colors([Color; 2]),
}

/// Errors that can occur while setting up a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InitError {
    /// First player is not 0 or 1.
    #[error("invalid first player {0}")]
    FirstPlayer(u8),
    /// Colors are not one red and one black.
    #[error("invalid colors {0:?}")]
    Colors([Color; 2]),
}

/// Errors that can occur when applying an input to a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// The current state is malformed.
    #[error("invalid state: {0}")]
    InvalidState(#[from] StateError),
    /// The input is malformed.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
    /// Not this player's turn.
    #[error("it's not player {0}'s turn")]
    NotYourTurn(u8),
    /// The player does not hold the card.
    #[error("player {player} does not have {card}")]
    CardNotInHand {
        /// Acting player.
        player: u8,
        /// Card that was asked for.
        card: Card,
    },
}
