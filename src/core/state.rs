//! Match state: both participants, the round counter, and rally history.
//!
//! A `Match` is created once per session and mutated only by the match
//! loop. Once it is over no further rallies are accepted.
//!
//! A match ends when a side reaches [`POINTS_TO_WIN`], or in a stalemate
//! when both sides are exhausted: from then on every rally would be a free
//! clear against a free clear, a tie forever. A stalemate goes to the side
//! ahead on points, or ends level.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::action::Action;
use super::config::POINTS_TO_WIN;
use super::player::{Participant, Side};

/// Result of a single rally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    PlayerWins,
    OpponentWins,
    Tie,
}

impl Outcome {
    /// The side that scores from this outcome, if any.
    #[must_use]
    pub const fn scorer(self) -> Option<Side> {
        match self {
            Outcome::PlayerWins => Some(Side::Player),
            Outcome::OpponentWins => Some(Side::Opponent),
            Outcome::Tie => None,
        }
    }
}

/// One side's shot in a rally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shot {
    pub action: Action,
    /// Played as a forced Clear, without paying VP.
    pub forced: bool,
    /// VP left after paying for this shot.
    pub vp_after: i64,
}

/// A completed rally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RallyRecord {
    pub round: u32,
    pub player: Shot,
    pub opponent: Shot,
    pub outcome: Outcome,
}

/// State of one match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub player: Participant,
    pub opponent: Participant,
    /// Number of the next round to be played (starts at 1).
    pub round: u32,
    /// Set once either side reaches [`POINTS_TO_WIN`]. Stays unset in a
    /// stalemate; see [`Match::victor`].
    pub winner: Option<Side>,
    /// Both sides ran out of VP before the threshold was reached.
    pub stalemate: bool,
    /// Rallies in play order.
    pub history: Vec<RallyRecord>,
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}

impl Match {
    /// Fresh match: both sides at full VP, no points, round 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            player: Participant::default(),
            opponent: Participant::default(),
            round: 1,
            winner: None,
            stalemate: false,
            history: Vec::new(),
        }
    }

    pub fn participant_mut(&mut self, side: Side) -> &mut Participant {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }

    /// Check the score threshold, setting `winner` when it is reached.
    ///
    /// The player is checked first, matching the order scores are shown.
    pub fn check_winner(&mut self) -> Option<Side> {
        if self.winner.is_none() {
            if self.player.score >= POINTS_TO_WIN {
                self.winner = Some(Side::Player);
            } else if self.opponent.score >= POINTS_TO_WIN {
                self.winner = Some(Side::Opponent);
            }
        }
        self.winner
    }

    /// Check every end condition, recording the result.
    ///
    /// Returns whether the match is over.
    pub fn check_end(&mut self) -> bool {
        if self.check_winner().is_some() || self.stalemate {
            return true;
        }
        if self.player.is_exhausted() && self.opponent.is_exhausted() {
            self.stalemate = true;
            return true;
        }
        false
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.stalemate
    }

    /// The side that took the match: the threshold winner, or the side
    /// ahead on points when a stalemate ended it. `None` while the match
    /// runs and after a level stalemate.
    #[must_use]
    pub fn victor(&self) -> Option<Side> {
        if self.winner.is_some() || !self.stalemate {
            return self.winner;
        }
        match self.player.score.cmp(&self.opponent.score) {
            Ordering::Greater => Some(Side::Player),
            Ordering::Less => Some(Side::Opponent),
            Ordering::Equal => None,
        }
    }

    /// Start a round, returning its number and advancing the counter.
    pub fn begin_round(&mut self) -> u32 {
        let round = self.round;
        self.round += 1;
        round
    }

    /// Apply a resolved rally: award the point and append it to history.
    ///
    /// Ignored once the match is over.
    pub fn record_rally(&mut self, record: RallyRecord) {
        if self.is_over() {
            log::warn!("rally recorded after match end ignored");
            return;
        }
        if let Some(side) = record.outcome.scorer() {
            self.participant_mut(side).award_point();
        }
        self.history.push(record);
    }

    /// Number of rallies that awarded a point.
    #[must_use]
    pub fn decisive_rallies(&self) -> usize {
        self.history
            .iter()
            .filter(|r| r.outcome != Outcome::Tie)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shot(action: Action) -> Shot {
        Shot {
            action,
            forced: false,
            vp_after: 40,
        }
    }

    fn rally(round: u32, outcome: Outcome) -> RallyRecord {
        RallyRecord {
            round,
            player: shot(Action::Drop),
            opponent: shot(Action::Clear),
            outcome,
        }
    }

    #[test]
    fn test_new_match() {
        let m = Match::new();
        assert_eq!(m.player.vp, 50);
        assert_eq!(m.opponent.vp, 50);
        assert_eq!(m.round, 1);
        assert!(m.winner.is_none());
        assert!(m.history.is_empty());
    }

    #[test]
    fn test_begin_round() {
        let mut m = Match::new();
        assert_eq!(m.begin_round(), 1);
        assert_eq!(m.begin_round(), 2);
        assert_eq!(m.round, 3);
    }

    #[test]
    fn test_record_rally_scores() {
        let mut m = Match::new();
        m.record_rally(rally(1, Outcome::PlayerWins));
        m.record_rally(rally(2, Outcome::Tie));
        m.record_rally(rally(3, Outcome::OpponentWins));

        assert_eq!(m.player.score, 1);
        assert_eq!(m.opponent.score, 1);
        assert_eq!(m.history.len(), 3);
        assert_eq!(m.decisive_rallies(), 2);
    }

    #[test]
    fn test_winner_at_threshold() {
        let mut m = Match::new();
        for round in 1..POINTS_TO_WIN {
            m.record_rally(rally(round, Outcome::OpponentWins));
            assert_eq!(m.check_winner(), None);
        }
        m.record_rally(rally(POINTS_TO_WIN, Outcome::OpponentWins));
        assert_eq!(m.check_winner(), Some(Side::Opponent));
        assert_eq!(m.victor(), Some(Side::Opponent));
        assert!(m.is_over());
    }

    #[test]
    fn test_no_mutation_after_game_over() {
        let mut m = Match::new();
        m.player.score = POINTS_TO_WIN;
        assert_eq!(m.check_winner(), Some(Side::Player));

        m.record_rally(rally(9, Outcome::OpponentWins));
        assert_eq!(m.opponent.score, 0);
        assert!(m.history.is_empty());
    }

    #[test]
    fn test_stalemate_goes_to_leader() {
        let mut m = Match::new();
        m.player.vp = 1;
        m.opponent.vp = 0;
        m.player.score = 3;
        m.opponent.score = 2;

        assert!(m.check_end());
        assert!(m.stalemate);
        assert_eq!(m.winner, None);
        assert_eq!(m.victor(), Some(Side::Player));
        assert!(m.is_over());
    }

    #[test]
    fn test_level_stalemate_has_no_winner() {
        let mut m = Match::new();
        m.player.vp = 0;
        m.opponent.vp = 0;
        m.player.score = 4;
        m.opponent.score = 4;

        assert!(m.check_end());
        assert_eq!(m.winner, None);
        assert_eq!(m.victor(), None);
        assert!(m.is_over());
    }

    #[test]
    fn test_one_exhausted_side_plays_on() {
        let mut m = Match::new();
        m.player.vp = 0;
        m.player.score = 2;
        assert!(!m.check_end());
        assert!(!m.is_over());
        assert_eq!(m.victor(), None);
    }

    #[test]
    fn test_outcome_scorer() {
        assert_eq!(Outcome::PlayerWins.scorer(), Some(Side::Player));
        assert_eq!(Outcome::OpponentWins.scorer(), Some(Side::Opponent));
        assert_eq!(Outcome::Tie.scorer(), None);
    }
}
