//! Game configuration options.

/// Rounding mode for fractional payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a blackjack round.
///
/// The defaults reproduce the classic table rules: blackjack pays 3:2 and
/// fractional payouts round down.
///
/// ```
/// use bjround::{GameOptions, RoundingMode};
///
/// let options = GameOptions::default()
///     .with_blackjack_pays(1.2)
///     .with_rounding(RoundingMode::Nearest);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Blackjack payout multiplier (typically 1.5).
    pub blackjack_pays: f64,
    /// Rounding mode for fractional payouts.
    pub rounding: RoundingMode,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            blackjack_pays: 1.5,
            rounding: RoundingMode::Down,
        }
    }
}

impl GameOptions {
    /// Sets the blackjack payout multiplier.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_blackjack_pays(1.2);
    /// assert_eq!(options.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the rounding mode for fractional payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{GameOptions, RoundingMode};
    ///
    /// let options = GameOptions::default().with_rounding(RoundingMode::Up);
    /// assert_eq!(options.rounding, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding(mut self, mode: RoundingMode) -> Self {
        self.rounding = mode;
        self
    }
}
