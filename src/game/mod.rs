//! Game state and the operations that produce new states.

use alloc::vec::Vec;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::card::{Card, Color};
use crate::error::{InitError, StateError, TransitionError};
use crate::options::GameOptions;
use crate::validate::validate_state;

mod setup;
pub mod state;
mod transition;

pub use state::{BOARD_SIZE, Board, FieldCard, Input};

/// A full snapshot of a game.
///
/// States are plain values: [`State::transition`] never touches `self` and
/// returns a fresh state instead. `Clone` is a deep copy; no storage is
/// shared between a state and its clone.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct State {
    /// Face cards on the board, indexed as `board[y][x]`.
    pub board: Board,
    /// Draw pile. The last card is the top.
    pub deck: Vec<Card>,
    /// Played cards, oldest first.
    pub cemetery: Vec<Card>,
    /// Each player's hand.
    pub hands: [Vec<Card>; 2],
    /// Player whose turn it is (0 or 1).
    pub turn: u8,
    /// Color of each player.
    pub colors: [Color; 2],
}

impl State {
    /// Creates a new game shuffled with the given seed.
    ///
    /// The same options and seed always produce the same opening.
    ///
    /// # Errors
    ///
    /// Returns an error if the options name an invalid first player or colors.
    ///
    /// # Example
    ///
    /// ```
    /// use flipdeck::{GameOptions, State};
    ///
    /// let state = State::new(&GameOptions::default(), 42).unwrap();
    /// assert_eq!(state.hands[0].len(), 2);
    /// assert_eq!(state.hands[1].len(), 1);
    /// ```
    pub fn new(options: &GameOptions, seed: u64) -> Result<Self, InitError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::init(options, &mut rng)
    }

    /// Checks every structural and game invariant of the state.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), StateError> {
        validate_state(self)
    }

    /// Returns the board cell at `(x, y)`.
    #[must_use]
    pub fn board_cell(&self, x: usize, y: usize) -> Option<&FieldCard> {
        self.board.get(y).and_then(|row| row.get(x))
    }

    /// Returns the hand of the player whose turn it is.
    #[must_use]
    pub fn active_hand(&self) -> &[Card] {
        self.hands
            .get(usize::from(self.turn))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns whether the deck has run out.
    ///
    /// Once it has, the next transition cannot refill the new active hand.
    #[must_use]
    pub fn is_deck_exhausted(&self) -> bool {
        self.deck.is_empty()
    }

    /// Draws the top card of the deck.
    fn draw(&mut self) -> Option<Card> {
        self.deck.pop()
    }
}

/// Creates a new game, shuffling with `rng`.
///
/// # Errors
///
/// Returns an error if `first_player` is not 0 or 1, or if `colors` are not
/// one red and one black.
pub fn init<R: Rng + ?Sized>(
    first_player: u8,
    colors: [Color; 2],
    rng: &mut R,
) -> Result<State, InitError> {
    let options = GameOptions::default()
        .with_first_player(first_player)
        .with_colors(colors);
    State::init(&options, rng)
}

/// Applies `input` to `state` and returns the next state.
///
/// # Errors
///
/// See [`State::transition`].
pub fn transition(state: &State, input: &Input) -> Result<State, TransitionError> {
    state.transition(input)
}
