//! Game primitives for penny drop.
//!
//! - `State`: (out tokens, active player, first action of turn)
//! - `Action`: Roll or Pass
//! - `Outcome`: one probabilistic branch of an action
//! - `Codec`: bit-packed bijection between states and table addresses
//! - `Model`: allowed actions and transition outcomes
mod action;
mod codec;
mod model;
mod outcome;
mod state;

pub use action::*;
pub use codec::*;
pub use model::*;
pub use outcome::*;
pub use state::*;
