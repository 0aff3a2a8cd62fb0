//! Collision detection between the bee and pipe pairs
//!
//! The bee is tested by its bounding box (`pos ± radius`). A pipe pair is a
//! vertical band `x ± pipe_width / 2` that is solid everywhere except the gap.

use super::state::{Bee, PipePair};

/// Bee's horizontal extent overlaps the pipe band
pub fn overlaps_band(bee: &Bee, pipe: &PipePair, pipe_width: f32) -> bool {
    let half_width = pipe_width / 2.0;
    bee.right() > pipe.x - half_width && bee.left() < pipe.x + half_width
}

/// Bee's vertical extent is strictly inside the gap
pub fn fits_in_gap(bee: &Bee, pipe: &PipePair) -> bool {
    bee.top() > pipe.gap_top() && bee.bottom() < pipe.gap_bottom()
}

/// Bee touches a solid segment of the pipe pair
pub fn is_collision(bee: &Bee, pipe: &PipePair, pipe_width: f32) -> bool {
    overlaps_band(bee, pipe, pipe_width) && !fits_in_gap(bee, pipe)
}

/// Bee center is past the pipe band
pub fn has_passed(bee: &Bee, pipe: &PipePair, pipe_width: f32) -> bool {
    bee.pos.x > pipe.x + pipe_width / 2.0
}
