use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{BOARD_CARDS, Card, DECK_SIZE, FACE_RANKS, NUMBER_RANKS, Suit};
use crate::error::InitError;
use crate::options::GameOptions;
use crate::validate::distinct_colors;

use super::{BOARD_SIZE, Board, FieldCard, State};

impl State {
    /// Creates a new game, shuffling the board and the deck with `rng`.
    ///
    /// The board is shuffled first, then the deck; nothing else consumes
    /// randomness. The player who does not move first is dealt one card,
    /// then the first player is dealt two.
    ///
    /// # Errors
    ///
    /// Returns an error if the first player is not 0 or 1, or if the colors
    /// are not one red and one black.
    #[expect(
        clippy::missing_panics_doc,
        reason = "a freshly built deck always holds enough cards to deal"
    )]
    pub fn init<R: Rng + ?Sized>(options: &GameOptions, rng: &mut R) -> Result<Self, InitError> {
        let first = options.first_player;
        if first > 1 {
            return Err(InitError::FirstPlayer(first));
        }
        if !distinct_colors(options.colors) {
            return Err(InitError::Colors(options.colors));
        }

        let mut state = Self {
            board: Self::create_board(rng),
            deck: Self::create_deck(rng),
            cemetery: Vec::new(),
            hands: [Vec::new(), Vec::new()],
            turn: first,
            colors: options.colors,
        };

        let first = usize::from(first);
        for player in [1 - first, first, first] {
            let card = state
                .draw()
                .expect("a freshly built deck holds more than three cards");
            state.hands[player].push(card);
        }

        tracing::debug!(
            first_player = first,
            deck = state.deck.len(),
            "initialized game"
        );

        Ok(state)
    }

    /// Lays out every face card face down in random order.
    fn create_board<R: Rng + ?Sized>(rng: &mut R) -> Board {
        let mut cells: [FieldCard; BOARD_CARDS] = core::array::from_fn(|index| {
            let suit = Suit::ALL[index / FACE_RANKS.len()];
            let rank = FACE_RANKS[index % FACE_RANKS.len()];
            FieldCard::face_down(Card::new(suit, rank))
        });

        cells.shuffle(rng);

        core::array::from_fn(|y| core::array::from_fn(|x| cells[y * BOARD_SIZE + x]))
    }

    /// Creates and shuffles the sixteen number cards.
    fn create_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in NUMBER_RANKS {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        cards
    }
}
