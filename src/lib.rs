//! Rules engine for a two-player card game on a 4x4 board, with optional
//! `no_std` support.
//!
//! The sixteen face cards (A, J, Q, K of each suit) lie face down on the
//! board. Players take turns playing a number card (2 to 5) from their hand;
//! the card turns over every board cell under its [`shape`]. The crate
//! computes the next [`State`] from a state and an [`Input`], and validates
//! states, inputs, and cards.
//!
//! # Example
//!
//! ```
//! use flipdeck::{GameOptions, Input, State};
//!
//! let state = State::new(&GameOptions::default(), 42).unwrap();
//! let card = state.hands[0][0];
//! let next = state.transition(&Input::new(0, card, 1, 2)).unwrap();
//! assert_eq!(next.turn, 1);
//! assert_eq!(next.cemetery, vec![card]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod options;
pub mod shape;
pub mod validate;

// Re-export main types
pub use card::{BOARD_CARDS, Card, Color, DECK_SIZE, FACE_RANKS, NUMBER_RANKS, Suit};
pub use error::{CardError, InitError, InputError, StateError, TransitionError, Zone};
pub use game::{BOARD_SIZE, Board, FieldCard, Input, State, init, transition};
pub use options::GameOptions;
pub use shape::{EMPTY_SHAPE, Shape, shape};
pub use validate::{validate_card, validate_input, validate_state};
