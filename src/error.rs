//! Error types.
//!
//! Bad player input is never fatal: it surfaces as an [`InputRejection`],
//! gets shown to the player, and the prompt repeats. [`GameError`] covers
//! the cases where the session cannot continue at all.

use thiserror::Error;

use crate::core::{Action, ParseActionError};

/// Errors that end a session.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("input closed before the match finished")]
    InputClosed,
}

/// Why a typed action was refused. Shown to the player, then re-prompted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputRejection {
    #[error("Invalid. Type smash, drop, or clear.")]
    Unrecognized(String),
    #[error("You have {vp} VP but '{action}' costs {cost}.")]
    Unaffordable { action: Action, cost: i64, vp: i64 },
}

impl From<ParseActionError> for InputRejection {
    fn from(err: ParseActionError) -> Self {
        InputRejection::Unrecognized(err.0)
    }
}

/// Parse a typed action and check it against the player's VP.
pub fn validate_choice(line: &str, vp: i64) -> Result<Action, InputRejection> {
    let action: Action = line.parse()?;
    if !action.is_affordable(vp) {
        return Err(InputRejection::Unaffordable {
            action,
            cost: action.cost(),
            vp,
        });
    }
    Ok(action)
}
