//! Sides of the court and their per-match resources.
//!
//! ## Side
//!
//! Identifies the human player or the scripted opponent.
//!
//! ## Participant
//!
//! VP balance and score for one side. VP is only ever paid when the balance
//! covers the cost, so a paid action never drives it below zero.

use serde::{Deserialize, Serialize};

use super::action::Action;
use super::config::INITIAL_VP;

/// One side of the rally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The human at the keyboard.
    Player,
    /// The scripted opponent.
    Opponent,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Opponent => write!(f, "Opponent"),
        }
    }
}

/// VP balance and score for one side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Remaining VP.
    pub vp: i64,
    /// Rallies won.
    pub score: u32,
}

impl Default for Participant {
    fn default() -> Self {
        Self::new(INITIAL_VP)
    }
}

impl Participant {
    /// Create a participant with the given VP and no points.
    #[must_use]
    pub const fn new(vp: i64) -> Self {
        Self { vp, score: 0 }
    }

    /// Whether this side has to play a forced Clear.
    ///
    /// True when VP is spent (≤ 0) or too low for the cheapest action.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.vp <= 0 || !Action::cheapest().is_affordable(self.vp)
    }

    /// Pay for `action` if the balance covers it.
    ///
    /// Returns whether VP was deducted.
    pub fn spend(&mut self, action: Action) -> bool {
        if action.is_affordable(self.vp) {
            self.vp -= action.cost();
            true
        } else {
            false
        }
    }

    /// Award one rally point.
    pub fn award_point(&mut self) {
        self.score += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_display() {
        assert_eq!(format!("{}", Side::Player), "Player");
        assert_eq!(format!("{}", Side::Opponent), "Opponent");
    }

    #[test]
    fn test_default_participant() {
        let p = Participant::default();
        assert_eq!(p.vp, 50);
        assert_eq!(p.score, 0);
        assert!(!p.is_exhausted());
    }

    #[test]
    fn test_spend() {
        let mut p = Participant::new(7);
        assert!(p.spend(Action::Smash));
        assert_eq!(p.vp, 2);

        assert!(!p.spend(Action::Drop));
        assert_eq!(p.vp, 2);

        assert!(p.spend(Action::Clear));
        assert_eq!(p.vp, 0);

        assert!(!p.spend(Action::Clear));
        assert_eq!(p.vp, 0);

        let mut low = Participant::new(1);
        assert!(!low.spend(Action::Clear));
        assert_eq!(low.vp, 1);
    }

    #[test]
    fn test_exhausted() {
        assert!(Participant::new(0).is_exhausted());
        assert!(Participant::new(-1).is_exhausted());
        assert!(Participant::new(1).is_exhausted());
        assert!(!Participant::new(2).is_exhausted());
    }

    #[test]
    fn test_award_point() {
        let mut p = Participant::default();
        p.award_point();
        p.award_point();
        assert_eq!(p.score, 2);
    }
}
