//! The match loop.
//!
//! Each round runs RoundStart → PlayerChoice → OpponentChoice → Resolve,
//! then loops until one side reaches [`POINTS_TO_WIN`] or both are
//! exhausted:
//!
//! - **RoundStart**: stop if the match is over, otherwise print the round
//!   header, scores and VP, and advance the round counter.
//! - **PlayerChoice**: an exhausted player plays a free Clear; otherwise
//!   prompt until a known, affordable action is typed, then pay for it.
//! - **OpponentChoice**: an exhausted opponent plays a free Clear;
//!   otherwise ask the [`OpponentPolicy`] and pay for its choice.
//! - **Resolve**: decide the rally from post-payment balances and award
//!   at most one point.
//!
//! Input, output, randomness and the opponent are all injected, so a whole
//! match can be scripted in a test.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::core::{
    Action, GameRng, Match, MatchConfig, Outcome, RallyRecord, RandomSource, Shot, Side,
    POINTS_TO_WIN,
};
use crate::error::{validate_choice, GameError};
use crate::policy::{OpponentPolicy, UniformAffordable};
use crate::rules;

use super::input::PlayerInput;

/// Final result of a match, suitable for JSON output.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub player_name: String,
    pub opponent_name: String,
    pub seed: Option<u64>,
    pub player_score: u32,
    pub opponent_score: u32,
    /// Threshold winner, or the leader when a stalemate ended the match.
    pub winner: Option<Side>,
    pub stalemate: bool,
    pub rallies: Vec<RallyRecord>,
}

/// A single match against the scripted opponent.
pub struct Session<R = GameRng, P = UniformAffordable> {
    config: MatchConfig,
    state: Match,
    rng: R,
    policy: P,
}

impl Session {
    /// Session with the uniform opponent and a ChaCha8 RNG.
    ///
    /// Without a configured seed one is drawn from entropy and written back
    /// into the config, so the summary can replay the match.
    pub fn new(mut config: MatchConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        config.seed = Some(rng.seed());
        log::info!("match seed {}", rng.seed());
        Self::with_parts(config, rng, UniformAffordable)
    }
}

impl<R: RandomSource, P: OpponentPolicy> Session<R, P> {
    /// Session with an explicit RNG and opponent policy.
    pub fn with_parts(config: MatchConfig, rng: R, policy: P) -> Self {
        Self {
            config,
            state: Match::new(),
            rng,
            policy,
        }
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &Match {
        &self.state
    }

    /// Mutable match state, for setting up scenarios.
    pub fn state_mut(&mut self) -> &mut Match {
        &mut self.state
    }

    /// Play rounds until the match ends, then print the result.
    ///
    /// Fails with [`GameError::InputClosed`] if input runs out while the
    /// player still has to choose.
    pub fn run<I, W>(&mut self, input: &mut I, out: &mut W) -> Result<MatchSummary, GameError>
    where
        I: PlayerInput + ?Sized,
        W: Write + ?Sized,
    {
        while !self.state.check_end() {
            self.play_round(input, out)?;
        }
        self.game_over(out)?;
        Ok(self.summary())
    }

    /// Play one round. Returns `None` without doing anything once the match
    /// is over.
    pub fn play_round<I, W>(
        &mut self,
        input: &mut I,
        out: &mut W,
    ) -> Result<Option<RallyRecord>, GameError>
    where
        I: PlayerInput + ?Sized,
        W: Write + ?Sized,
    {
        if self.state.check_end() {
            return Ok(None);
        }

        let round = self.state.begin_round();
        self.print_status(round, out)?;

        let player = self.player_choice(input, out)?;
        let opponent = self.opponent_choice(out)?;

        let (me, them) = (&self.config.player_name, &self.config.opponent_name);
        writeln!(out, "\n▶ {me}: {}   |   {them}: {}", player.action, opponent.action)?;

        let outcome = rules::resolve(
            player.action,
            opponent.action,
            player.vp_after,
            opponent.vp_after,
            &mut self.rng,
        );
        match outcome {
            Outcome::Tie => writeln!(out, "  → Tie rally. No points awarded.")?,
            Outcome::PlayerWins => writeln!(out, "  → {me} wins this rally! +1 point.")?,
            Outcome::OpponentWins => writeln!(out, "  → {them} wins this rally. +1 point.")?,
        }
        log::info!(
            "round {round}: {} vs {} -> {outcome:?}",
            player.action,
            opponent.action
        );

        let record = RallyRecord {
            round,
            player,
            opponent,
            outcome,
        };
        self.state.record_rally(record);
        Ok(Some(record))
    }

    /// Snapshot of the match so far.
    #[must_use]
    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            player_name: self.config.player_name.clone(),
            opponent_name: self.config.opponent_name.clone(),
            seed: self.config.seed,
            player_score: self.state.player.score,
            opponent_score: self.state.opponent.score,
            winner: self.state.victor(),
            stalemate: self.state.stalemate,
            rallies: self.state.history.clone(),
        }
    }

    fn print_status<W: Write + ?Sized>(&self, round: u32, out: &mut W) -> Result<(), GameError> {
        let (me, them) = (&self.config.player_name, &self.config.opponent_name);
        let (p, o) = (&self.state.player, &self.state.opponent);
        writeln!(out, "\n        ==== Round {round} ====")?;
        writeln!(out, "Score → {me}: {}  |  {them}: {}", p.score, o.score)?;
        writeln!(out, "{me} VP: {}    {them} VP: {}", p.vp, o.vp)?;
        Ok(())
    }

    fn player_choice<I, W>(&mut self, input: &mut I, out: &mut W) -> Result<Shot, GameError>
    where
        I: PlayerInput + ?Sized,
        W: Write + ?Sized,
    {
        let vp = self.state.player.vp;
        if self.state.player.is_exhausted() {
            writeln!(
                out,
                "● {}, your VP is {vp}, so you are forced to 'clear'.",
                self.config.player_name
            )?;
            return Ok(Shot {
                action: Action::Clear,
                forced: true,
                vp_after: vp,
            });
        }

        let action = loop {
            write!(out, "Choose action (smash/drop/clear): ")?;
            out.flush()?;
            let line = input.next_line()?.ok_or(GameError::InputClosed)?;
            match validate_choice(&line, vp) {
                Ok(action) => break action,
                Err(rejection) => {
                    log::debug!("rejected player input {line:?}: {rejection:?}");
                    writeln!(out, "  ↪ {rejection}")?;
                }
            }
        };

        self.state.player.spend(action);
        Ok(Shot {
            action,
            forced: false,
            vp_after: self.state.player.vp,
        })
    }

    fn opponent_choice<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<Shot, GameError> {
        let vp = self.state.opponent.vp;
        let shot = if self.state.opponent.is_exhausted() {
            log::debug!("opponent plays a forced clear with {vp} vp");
            Shot {
                action: Action::Clear,
                forced: true,
                vp_after: vp,
            }
        } else {
            let mut action = self.policy.choose_action(vp, &mut self.rng);
            if !self.state.opponent.spend(action) {
                log::warn!("opponent policy chose unaffordable {action} with {vp} vp, clearing");
                action = Action::Clear;
                self.state.opponent.spend(action);
            }
            Shot {
                action,
                forced: false,
                vp_after: self.state.opponent.vp,
            }
        };
        writeln!(out, "🏸 {} action: '{}'", self.config.opponent_name, shot.action)?;
        Ok(shot)
    }

    fn game_over<W: Write + ?Sized>(&self, out: &mut W) -> Result<(), GameError> {
        let (me, them) = (&self.config.player_name, &self.config.opponent_name);
        writeln!(out, "\n        ── Game Over ──")?;
        writeln!(
            out,
            "Final Score  {me}: {}  |  {them}: {}",
            self.state.player.score, self.state.opponent.score
        )?;
        if self.state.stalemate {
            writeln!(out, "Both players are out of VP. No more rallies can be won.")?;
        }
        match self.state.victor() {
            Some(Side::Player) if self.state.stalemate => {
                writeln!(out, "🏆 {me} was ahead when the energy ran out and beat {them}!")?
            }
            Some(Side::Player) => writeln!(
                out,
                "🏆 Congratulations! {me} reached {POINTS_TO_WIN} points first and beat {them}!"
            )?,
            None => writeln!(out, "The match ends level between {me} and {them}.")?,
            Some(Side::Opponent) => writeln!(
                out,
                "Unfortunately, {me} lost to {them}, but don't be discouraged. Keep pushing forward! 💪"
            )?,
        }
        out.flush()?;
        log::info!(
            "match over after {} rallies: {:?}",
            self.state.history.len(),
            self.state.victor()
        );
        Ok(())
    }
}
