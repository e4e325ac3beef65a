//! # badminton-rally
//!
//! A console badminton rally game against a scripted opponent.
//!
//! ## Rules
//!
//! 1. **VP**: both sides start with 50 VP. Smash costs 5, drop 3, clear 2.
//!
//! 2. **Win-cycle**: smash beats drop, drop beats clear, clear beats smash.
//!    Equal shots tie and nobody scores.
//!
//! 3. **Exhaustion**: a side that cannot pay for any shot plays a free,
//!    forced clear.
//!
//! 4. **Match**: the first side to 5 points wins.
//!
//! ## Modules
//!
//! - `core`: actions, sides, match state, RNG, configuration
//! - `policy`: how the opponent picks its shot
//! - `rules`: rally resolution
//! - `game`: the interactive match loop
//! - `error`: input rejections and session errors

pub mod core;
pub mod error;
pub mod game;
pub mod policy;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, ParseActionError,
    Participant, Side,
    GameRng, RandomSource,
    MatchConfig, POINTS_TO_WIN, INITIAL_VP,
    Match, Outcome, RallyRecord, Shot,
};

pub use crate::error::{GameError, InputRejection};

pub use crate::game::{LineReader, MatchSummary, PlayerInput, Session};

pub use crate::policy::{OpponentPolicy, UniformAffordable};
