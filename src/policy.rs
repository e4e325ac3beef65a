//! Opponent action selection.
//!
//! Policies are trait-based so the match loop can be driven by any
//! opponent model:
//! - `OpponentPolicy`: picks the opponent's action from its remaining VP
//! - `UniformAffordable`: uniform choice among the actions it can pay for
//!
//! A policy only selects. Paying for the choice is the caller's job, and
//! an exhausted opponent's forced Clear is never paid for.

use crate::core::{choose, Action, RandomSource};

/// Policy for choosing the scripted opponent's action.
pub trait OpponentPolicy {
    /// Choose an action given the opponent's current VP.
    fn choose_action(&self, opponent_vp: i64, rng: &mut dyn RandomSource) -> Action;
}

/// Uniform random opponent.
///
/// Spent out (VP ≤ 0) it always clears; otherwise it picks uniformly from
/// the affordable actions, falling back to Clear when none are affordable.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformAffordable;

impl OpponentPolicy for UniformAffordable {
    fn choose_action(&self, opponent_vp: i64, rng: &mut dyn RandomSource) -> Action {
        if opponent_vp <= 0 {
            return Action::Clear;
        }

        let affordable = Action::affordable(opponent_vp);
        match choose(rng, &affordable) {
            Some(&action) => {
                log::debug!("opponent picks {action} from {affordable:?} with {opponent_vp} vp");
                action
            }
            None => Action::Clear,
        }
    }
}
