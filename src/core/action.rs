//! Rally actions: the catalog of shots, their VP costs, and the win-cycle.
//!
//! Every action has a fixed VP cost. The win-cycle defines exactly one
//! direction per pair of distinct actions:
//!
//! - Smash beats Drop
//! - Drop beats Clear
//! - Clear beats Smash
//!
//! The reverse of each pair ("loses to") is never stored; callers check
//! both directions with [`Action::beats`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the three shots a side can play in a rally.
///
/// ## Example
///
/// ```
/// use badminton_rally::core::Action;
///
/// let shot: Action = " SMASH ".parse().unwrap();
/// assert_eq!(shot, Action::Smash);
/// assert_eq!(shot.cost(), 5);
/// assert!(shot.beats(Action::Drop));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Expensive attacking shot.
    Smash,
    /// Soft shot just over the net.
    Drop,
    /// High defensive shot to the back of the court.
    Clear,
}

/// Ordered pairs `(winner, loser)` of the win-cycle.
const WIN_CYCLE: [(Action, Action); 3] = [
    (Action::Smash, Action::Drop),
    (Action::Drop, Action::Clear),
    (Action::Clear, Action::Smash),
];

impl Action {
    /// All actions in catalog order.
    pub const ALL: [Action; 3] = [Action::Smash, Action::Drop, Action::Clear];

    /// VP cost of playing this action.
    #[must_use]
    pub const fn cost(self) -> i64 {
        match self {
            Action::Smash => 5,
            Action::Drop => 3,
            Action::Clear => 2,
        }
    }

    /// Lowercase name, as typed at the prompt.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Action::Smash => "smash",
            Action::Drop => "drop",
            Action::Clear => "clear",
        }
    }

    /// Whether `self` beats `other` by an explicit win-cycle entry.
    ///
    /// Returns `false` for equal actions and for the reverse direction.
    #[must_use]
    pub fn beats(self, other: Action) -> bool {
        WIN_CYCLE.contains(&(self, other))
    }

    /// Whether a balance of `vp` can pay for this action.
    #[must_use]
    pub const fn is_affordable(self, vp: i64) -> bool {
        vp >= self.cost()
    }

    /// Actions payable with `vp`, in catalog order.
    #[must_use]
    pub fn affordable(vp: i64) -> Vec<Action> {
        Self::ALL.into_iter().filter(|a| a.is_affordable(vp)).collect()
    }

    /// The cheapest action in the catalog.
    #[must_use]
    pub fn cheapest() -> Action {
        Self::ALL
            .into_iter()
            .min_by_key(|a| a.cost())
            .unwrap_or(Action::Clear)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An action name that is not in the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown action '{0}', expected smash, drop, or clear")]
pub struct ParseActionError(pub String);

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|a| a.name() == token)
            .ok_or_else(|| ParseActionError(s.trim().to_string()))
    }
}
