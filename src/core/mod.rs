//! Core game types: actions, sides, match state, RNG, configuration.
//!
//! Everything here is free of I/O. The match loop in `game` drives these
//! types; `policy` and `rules` make the per-round decisions.

pub mod action;
pub mod player;
pub mod rng;
pub mod config;
pub mod state;

pub use action::{Action, ParseActionError};
pub use player::{Participant, Side};
pub use rng::{choose, GameRng, RandomSource};
pub use config::{
    MatchConfig, CLEAR_CHANCE_SCALE, DEFAULT_OPPONENT_NAME, DEFAULT_PLAYER_NAME, INITIAL_VP,
    POINTS_TO_WIN,
};
pub use state::{Match, Outcome, RallyRecord, Shot};
