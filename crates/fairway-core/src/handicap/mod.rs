//! Handicap calculation and stroke allocation.
//!
//! This module contains:
//! - `HandicapPolicy` - how strokes are given in a game
//! - `HandicapProfile` - course and playing handicap of one player
//! - `StrokeAllocation` - strokes received on every hole
//! - `GhostRound`, `GhostSource` - frozen historical rounds for ghost play

mod allocation;
mod calc;
mod ghost;
mod policy;

pub use allocation::*;
pub use calc::*;
pub use ghost::*;
pub use policy::*;
