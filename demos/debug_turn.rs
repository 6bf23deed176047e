//! Plays one sample turn and prints the full state before and after.

#![allow(clippy::missing_docs_in_private_items)]

use std::time::{SystemTime, UNIX_EPOCH};

use flipdeck::{Card, Color, GameOptions, Input, State};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default().with_colors([Color::Red, Color::Black]);

    let state = match State::new(&options, seed) {
        Ok(state) => state,
        Err(err) => {
            eprintln!("Init error: {err}");
            std::process::exit(1);
        }
    };

    print_state(&state);
    println!();

    let input = Input::new(0, state.hands[0][0], 1, 2);
    let next = match state.transition(&input) {
        Ok(next) => next,
        Err(err) => {
            eprintln!("Transition error: {err}");
            std::process::exit(1);
        }
    };

    print_state(&next);
}

/// Prints everything regardless of orientation or ownership.
fn print_state(state: &State) {
    for (y, row) in state.board.iter().enumerate() {
        let label = if y == 0 { "Board: " } else { "       " };
        let cells: Vec<String> = row
            .iter()
            .map(|cell| {
                if cell.face_up {
                    format!(" {} ", cell.card)
                } else {
                    format!("[{}]", cell.card)
                }
            })
            .collect();
        println!("{label}{}", cells.join(" "));
    }

    println!("Deck (top first): {}", format_cards(state.deck.iter().rev()));

    for (player, hand) in state.hands.iter().enumerate() {
        let color = match state.colors[player] {
            Color::Red => "red",
            Color::Black => "black",
        };
        let marker = if usize::from(state.turn) == player {
            " (turn)"
        } else {
            ""
        };
        println!(
            "Player {} ({color}){marker}: {}",
            player + 1,
            format_cards(hand.iter())
        );
    }
}

fn format_cards<'a>(cards: impl Iterator<Item = &'a Card>) -> String {
    cards
        .map(|card| format!("[{card}]"))
        .collect::<Vec<_>>()
        .join(" ")
}
