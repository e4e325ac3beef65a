//! Rally resolution.
//!
//! A rally is decided in this order:
//!
//! 1. Equal actions tie.
//! 2. If the player's action beats the opponent's, the player scores.
//! 3. If the opponent's action beats the player's, the opponent scores,
//!    except when the opponent smashed and the player cleared: then the
//!    player returns the smash with probability `player_vp / 100`
//!    (clamped to `[0, 1]`, using the balance left after this round's
//!    payment).
//! 4. Anything else ties.
//!
//! With the current win-cycle a clear already beats a smash at step 2, so
//! the smash-return draw and the final tie only fire if the cycle changes.

use crate::core::{Action, Outcome, RandomSource, CLEAR_CHANCE_SCALE};

/// Chance that a clear returns an opponent's smash, given the player's VP
/// after paying for the clear.
#[must_use]
pub fn clear_return_chance(player_vp_after: i64) -> f64 {
    (player_vp_after as f64 / CLEAR_CHANCE_SCALE).clamp(0.0, 1.0)
}

/// Draw whether the player's clear survives an opponent's smash.
pub fn smash_return<R: RandomSource + ?Sized>(player_vp_after: i64, rng: &mut R) -> Outcome {
    let chance = clear_return_chance(player_vp_after);
    let draw = rng.unit();
    log::debug!("clear against smash: chance {chance:.2}, draw {draw:.3}");
    if draw < chance {
        Outcome::PlayerWins
    } else {
        Outcome::OpponentWins
    }
}

/// Decide a rally.
///
/// `player_vp_after` and `opponent_vp_after` are the balances after both
/// sides have paid for this round's shots. `rng` is only consulted for the
/// smash-return case.
pub fn resolve<R: RandomSource + ?Sized>(
    player: Action,
    opponent: Action,
    player_vp_after: i64,
    opponent_vp_after: i64,
    rng: &mut R,
) -> Outcome {
    log::trace!("resolving {player} ({player_vp_after} vp) vs {opponent} ({opponent_vp_after} vp)");

    if player == opponent {
        return Outcome::Tie;
    }
    if player.beats(opponent) {
        return Outcome::PlayerWins;
    }
    if opponent.beats(player) {
        if opponent == Action::Smash && player == Action::Clear {
            return smash_return(player_vp_after, rng);
        }
        return Outcome::OpponentWins;
    }
    Outcome::Tie
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Returns the same draw every time and counts how often it was asked.
    struct FixedDraw {
        value: f64,
        calls: usize,
    }

    impl FixedDraw {
        fn new(value: f64) -> Self {
            Self { value, calls: 0 }
        }
    }

    impl RandomSource for FixedDraw {
        fn unit(&mut self) -> f64 {
            self.calls += 1;
            self.value
        }

        fn index(&mut self, _len: usize) -> usize {
            0
        }
    }

    #[test]
    fn test_same_action_ties() {
        let mut rng = FixedDraw::new(0.0);
        for a in Action::ALL {
            assert_eq!(resolve(a, a, 10, 10, &mut rng), Outcome::Tie);
        }
        assert_eq!(rng.calls, 0);
    }

    #[test]
    fn test_player_wins_by_cycle_regardless_of_vp() {
        let mut rng = FixedDraw::new(0.99);
        let pairs = [
            (Action::Smash, Action::Drop),
            (Action::Drop, Action::Clear),
            (Action::Clear, Action::Smash),
        ];
        for vp in [-5, 0, 1, 48, 100, 200] {
            for (player, opponent) in pairs {
                assert_eq!(resolve(player, opponent, vp, vp, &mut rng), Outcome::PlayerWins);
            }
        }
        assert_eq!(rng.calls, 0);
    }

    #[test]
    fn test_opponent_wins_by_cycle() {
        let mut rng = FixedDraw::new(0.0);
        let pairs = [
            (Action::Drop, Action::Smash),
            (Action::Clear, Action::Drop),
            (Action::Smash, Action::Clear),
        ];
        for vp in [0, 25, 100] {
            for (player, opponent) in pairs {
                assert_eq!(resolve(player, opponent, vp, vp, &mut rng), Outcome::OpponentWins);
            }
        }
        assert_eq!(rng.calls, 0);
    }

    #[test]
    fn test_smash_return_full_vp_always_succeeds() {
        // p = 1.0 and every draw is below 1.
        let mut rng = FixedDraw::new(0.999_999);
        assert_eq!(smash_return(100, &mut rng), Outcome::PlayerWins);
        assert_eq!(smash_return(150, &mut rng), Outcome::PlayerWins);
    }

    #[test]
    fn test_smash_return_zero_vp_always_fails() {
        // p = 0.0 and no draw is below 0.
        let mut rng = FixedDraw::new(0.0);
        assert_eq!(smash_return(0, &mut rng), Outcome::OpponentWins);
        assert_eq!(smash_return(-4, &mut rng), Outcome::OpponentWins);
    }

    #[test]
    fn test_smash_return_threshold_is_strict() {
        let mut rng = FixedDraw::new(0.4);
        assert_eq!(smash_return(40, &mut rng), Outcome::OpponentWins);
        assert_eq!(smash_return(41, &mut rng), Outcome::PlayerWins);
        assert_eq!(rng.calls, 2);
    }

    #[test]
    fn test_clear_return_chance() {
        assert_eq!(clear_return_chance(0), 0.0);
        assert_eq!(clear_return_chance(-10), 0.0);
        assert!((clear_return_chance(48) - 0.48).abs() < 1e-12);
        assert_eq!(clear_return_chance(100), 1.0);
        assert_eq!(clear_return_chance(250), 1.0);
    }
}
