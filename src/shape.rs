//! Board footprints of playable cards.
//!
//! A played card flips every board cell covered by its shape. Shapes are
//! 3x3 grids indexed as `shape[dy][dx]`; the center `[1][1]` sits on the
//! target cell and row 0 is the row above it.

use crate::card::{Card, Suit};
use crate::validate::validate_card;

/// A 3x3 footprint centered on the target cell.
pub type Shape = [[bool; 3]; 3];

const X: bool = true;
const O: bool = false;

/// The empty footprint returned for cards that have no shape.
pub const EMPTY_SHAPE: Shape = [[O; 3]; 3];

/// Footprints per suit, then per rank parity (even first).
const SHAPES: [[Shape; 2]; 4] = [
    // Heart
    [
        [[X, O, X], [X, X, X], [O, O, O]],
        [[O, O, O], [X, X, X], [X, O, X]],
    ],
    // Spade
    [
        [[O, X, O], [O, X, O], [O, X, O]],
        [[O, O, O], [X, X, X], [O, O, O]],
    ],
    // Diamond
    [
        [[O, X, O], [X, X, X], [O, X, O]],
        [[X, O, X], [O, X, O], [X, O, X]],
    ],
    // Clover
    [
        [[O, X, O], [X, X, X], [O, O, O]],
        [[O, O, O], [X, X, X], [O, X, O]],
    ],
];

const fn suit_index(suit: Suit) -> usize {
    match suit {
        Suit::Heart => 0,
        Suit::Spade => 1,
        Suit::Diamond => 2,
        Suit::Clover => 3,
    }
}

/// Returns the footprint a card flips when played.
///
/// Ranks 2 and 4 share one pattern per suit, ranks 3 and 5 another. Any
/// card that is invalid or outside 2..=5 yields [`EMPTY_SHAPE`].
///
/// # Example
///
/// ```
/// use flipdeck::{Card, Suit, shape};
///
/// let cross = shape(&Card::new(Suit::Diamond, 2));
/// assert_eq!(cross[1], [true, true, true]);
/// assert!(!cross[0][0]);
/// ```
#[must_use]
pub fn shape(card: &Card) -> Shape {
    if validate_card(card).is_err() || !card.is_number() {
        return EMPTY_SHAPE;
    }

    SHAPES[suit_index(card.suit)][usize::from(card.number % 2)]
}

/// Iterates over the board offsets `(dx, dy)` covered by a footprint.
#[expect(clippy::cast_possible_wrap, reason = "shape indices are at most 2")]
pub fn offsets(shape: &Shape) -> impl Iterator<Item = (i8, i8)> + '_ {
    shape.iter().enumerate().flat_map(|(dy, row)| {
        row.iter()
            .enumerate()
            .filter(|(_, covered)| **covered)
            .map(move |(dx, _)| (dx as i8 - 1, dy as i8 - 1))
    })
}
