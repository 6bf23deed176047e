//! Game setup options.

use crate::card::Color;

/// Configuration for a new game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use flipdeck::{Color, GameOptions};
///
/// let options = GameOptions::default()
///     .with_first_player(1)
///     .with_colors([Color::Black, Color::Red]);
/// assert_eq!(options.first_player, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Player who takes the first turn (0 or 1).
    pub first_player: u8,
    /// Color of each player, indexed by player.
    pub colors: [Color; 2],
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            first_player: 0,
            colors: [Color::Red, Color::Black],
        }
    }
}

impl GameOptions {
    /// Sets the player who moves first.
    ///
    /// # Example
    ///
    /// ```
    /// use flipdeck::GameOptions;
    ///
    /// let options = GameOptions::default().with_first_player(1);
    /// assert_eq!(options.first_player, 1);
    /// ```
    #[must_use]
    pub const fn with_first_player(mut self, player: u8) -> Self {
        self.first_player = player;
        self
    }

    /// Sets the color of each player.
    ///
    /// # Example
    ///
    /// ```
    /// use flipdeck::{Color, GameOptions};
    ///
    /// let options = GameOptions::default().with_colors([Color::Black, Color::Red]);
    /// assert_eq!(options.colors, [Color::Black, Color::Red]);
    /// ```
    #[must_use]
    pub const fn with_colors(mut self, colors: [Color; 2]) -> Self {
        self.colors = colors;
        self
    }
}
