use crate::error::TransitionError;
use crate::shape::{offsets, shape};
use crate::validate::{validate_input, validate_state};

use super::{BOARD_SIZE, Input, State};

impl State {
    /// Plays a card and returns the resulting state.
    ///
    /// Every board cell under the card's shape centered on `(x, y)` is turned
    /// over; cells that fall off the board are skipped. The card moves to the
    /// cemetery, the turn passes, and the new active player draws if the deck
    /// is not empty. `self` is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the state or the input is invalid, if it is not
    /// the player's turn, or if the player does not hold the card.
    pub fn transition(&self, input: &Input) -> Result<Self, TransitionError> {
        validate_state(self)?;
        validate_input(input)?;

        if input.player != self.turn {
            return Err(TransitionError::NotYourTurn(input.player));
        }

        let player = usize::from(input.player);
        let index = self.hands[player]
            .iter()
            .position(|card| *card == input.card)
            .ok_or(TransitionError::CardNotInHand {
                player: input.player,
                card: input.card,
            })?;

        let mut next = self.clone();

        let footprint = shape(&input.card);
        for (dx, dy) in offsets(&footprint) {
            let x = i16::from(input.x) + i16::from(dx);
            let y = i16::from(input.y) + i16::from(dy);
            let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
                continue;
            };
            if x >= BOARD_SIZE || y >= BOARD_SIZE {
                continue;
            }
            next.board[y][x].flip();
        }

        let card = next.hands[player].remove(index);
        next.cemetery.push(card);

        next.turn = (next.turn + 1) % 2;

        let drawn = next.draw();
        if let Some(drawn) = drawn {
            next.hands[usize::from(next.turn)].push(drawn);
        } else {
            tracing::warn!(
                player = next.turn,
                "deck exhausted, active hand not refilled"
            );
        }

        tracing::debug!(
            player = input.player,
            %card,
            x = input.x,
            y = input.y,
            drew = drawn.is_some(),
            "applied transition"
        );

        Ok(next)
    }
}
