//! CLI command implementations.

pub mod allocate;
pub mod estimate;
pub mod handicap;
pub mod rules;
pub mod score;
