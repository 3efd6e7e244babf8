//! Course data.
//!
//! This module contains the per-course inputs to handicap and scoring:
//! - `TeeBoxRating` - slope, course rating and par of one tee box
//! - `StrokeIndexTable` - hole difficulty ranking used for stroke allocation
//! - `ParTable` - par of every hole
//! - `Course` - the above bundled with hole rows as read from a round file

mod hole;
mod stroke_index;
mod tee_box;

pub use hole::*;
pub use stroke_index::*;
pub use tee_box::*;
