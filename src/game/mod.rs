//! Interactive console match against Lee Chong Wei.
//!
//! - Each side starts with 50 VP and no points
//! - Each round both sides play smash, drop, or clear, paying its VP cost
//! - A side that cannot pay is forced to clear for free
//! - First to 5 points wins

mod input;
mod session;

pub use input::{LineReader, PlayerInput};
pub use session::{MatchSummary, Session};
