//! Rally rules.
//!
//! Turns a pair of shots (plus, for one case, a random draw) into an
//! [`Outcome`](crate::core::Outcome). The match loop calls into this module
//! but never compares actions itself.

pub mod rally;

pub use rally::{clear_return_chance, resolve, smash_return};
