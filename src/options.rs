//! Table configuration options.

/// Configuration options for a table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use twentyone::TableOptions;
///
/// let options = TableOptions::default().with_min_bet(5).with_max_bet(500);
/// assert!(options.allows(5));
/// assert!(!options.allows(501));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Minimum accepted bet.
    pub min_bet: u64,
    /// Maximum accepted bet. `None` means no ceiling.
    pub max_bet: Option<u64>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            min_bet: 1,
            max_bet: None,
        }
    }
}

impl TableOptions {
    /// Sets the minimum accepted bet.
    #[must_use]
    pub const fn with_min_bet(mut self, min_bet: u64) -> Self {
        self.min_bet = min_bet;
        self
    }

    /// Sets the maximum accepted bet.
    #[must_use]
    pub const fn with_max_bet(mut self, max_bet: u64) -> Self {
        self.max_bet = Some(max_bet);
        self
    }

    /// Returns whether a bet falls within the table limits.
    #[must_use]
    pub fn allows(&self, bet: u64) -> bool {
        bet >= self.min_bet && self.max_bet.is_none_or(|max| bet <= max)
    }
}
