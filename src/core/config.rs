//! Rule constants and per-session options.
//!
//! The rules themselves are fixed. `MatchConfig` only carries what changes
//! between runs: display names and the RNG seed.

use serde::{Deserialize, Serialize};

/// Points needed to win the match.
pub const POINTS_TO_WIN: u32 = 5;

/// VP each side starts with.
pub const INITIAL_VP: i64 = 50;

/// Divisor turning the player's VP into the chance of returning a smash
/// with a clear.
pub const CLEAR_CHANCE_SCALE: f64 = 100.0;

/// Name used when the player leaves the name prompt blank.
pub const DEFAULT_PLAYER_NAME: &str = "Player";

/// The scripted opponent.
pub const DEFAULT_OPPONENT_NAME: &str = "Lee Chong Wei";

/// Options for a single match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Display name for the human side.
    pub player_name: String,

    /// Display name for the scripted side.
    pub opponent_name: String,

    /// RNG seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            opponent_name: DEFAULT_OPPONENT_NAME.to_string(),
            seed: None,
        }
    }
}

impl MatchConfig {
    /// Set the player's name. Blank names fall back to the default.
    #[must_use]
    pub fn with_player_name(mut self, name: &str) -> Self {
        self.player_name = normalize_name(name);
        self
    }

    /// Set the opponent's name.
    #[must_use]
    pub fn with_opponent_name(mut self, name: impl Into<String>) -> Self {
        self.opponent_name = name.into();
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Trim a typed name, substituting the default for blank input.
#[must_use]
pub fn normalize_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_PLAYER_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}
