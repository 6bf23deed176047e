//! Structural checks for cards, inputs, and states.
//!
//! None of these functions modify their argument. Each returns the first
//! problem it finds, naming the offending position.

use alloc::vec::Vec;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::{Card, Color, DECK_SIZE};
use crate::error::{CardError, InputError, StateError, Zone};
use crate::game::{BOARD_SIZE, Input, State};

/// Checks that a card has a rank used by the game (1..=5 or 11..=13).
///
/// # Errors
///
/// Returns [`CardError::Number`] for any other rank.
pub const fn validate_card(card: &Card) -> Result<(), CardError> {
    match card.number {
        1..=5 | 11..=13 => Ok(()),
        n => Err(CardError::Number(n)),
    }
}

/// Checks that an input names a player, a playable card, and a board cell.
///
/// # Errors
///
/// Returns the first invalid field.
pub fn validate_input(input: &Input) -> Result<(), InputError> {
    if input.player > 1 {
        return Err(InputError::Player(input.player));
    }

    validate_card(&input.card).map_err(InputError::Card)?;
    if !input.card.is_number() {
        return Err(InputError::Unplayable(input.card));
    }

    if usize::from(input.x) >= BOARD_SIZE || usize::from(input.y) >= BOARD_SIZE {
        return Err(InputError::Coordinate {
            x: input.x,
            y: input.y,
        });
    }

    Ok(())
}

/// Returns whether the players hold one red and one black.
pub(crate) fn distinct_colors(colors: [Color; 2]) -> bool {
    colors[0] != colors[1]
}

/// Tracks every card seen so far to catch duplicates.
struct Seen(HashSet<Card>);

impl Seen {
    fn new() -> Self {
        Self(HashSet::with_capacity(2 * DECK_SIZE))
    }

    /// Checks a card's validity, zone rank, and uniqueness.
    fn check(&mut self, zone: Zone, card: &Card, face: bool) -> Result<(), StateError> {
        validate_card(card).map_err(|source| StateError::Card { zone, source })?;

        let belongs = if face {
            card.is_face()
        } else {
            card.is_number()
        };
        if !belongs {
            return Err(StateError::Rank { zone, card: *card });
        }

        if !self.0.insert(*card) {
            return Err(StateError::Duplicate { zone, card: *card });
        }

        Ok(())
    }
}

/// Checks every invariant of a game state.
///
/// The board must hold face cards only, the other zones number cards only,
/// with no card repeated and all sixteen number cards accounted for. The
/// active player holds two cards, the other player one.
///
/// # Errors
///
/// Returns the first violation found.
pub fn validate_state(state: &State) -> Result<(), StateError> {
    let mut seen = Seen::new();

    for (y, row) in state.board.iter().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            seen.check(Zone::Board { x, y }, &cell.card, true)?;
        }
    }

    for (index, card) in state.deck.iter().enumerate() {
        seen.check(Zone::Deck(index), card, false)?;
    }

    for (index, card) in state.cemetery.iter().enumerate() {
        seen.check(Zone::Cemetery(index), card, false)?;
    }

    for (player, hand) in state.hands.iter().enumerate() {
        let expected = if usize::from(state.turn) == player { 2 } else { 1 };
        if hand.len() != expected {
            return Err(StateError::HandSize {
                player,
                len: hand.len(),
            });
        }

        for (index, card) in hand.iter().enumerate() {
            seen.check(Zone::Hand { player, index }, card, false)?;
        }
    }

    let total = state.deck.len()
        + state.cemetery.len()
        + state.hands.iter().map(Vec::len).sum::<usize>();
    if total != DECK_SIZE {
        return Err(StateError::CardCount(total));
    }

    if state.turn > 1 {
        return Err(StateError::Turn(state.turn));
    }

    if !distinct_colors(state.colors) {
        return Err(StateError::Colors(state.colors));
    }

    Ok(())
}
