//! Return cut point and forehand/backhand classification
//!
//! The receiver's icon is projected onto the ball's outgoing ray to
//! find the exact cut point; which side of the body that point falls
//! on decides forehand vs backhand.

use crate::geometry::vector::{add, dot, normalize, scale, sub};
use crate::models::{PixelPoint, ShotSide, Side};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReturnResolution {
    pub return_at: PixelPoint,
    pub shot_side: ShotSide,
}

/// Project the receiver's icon onto the ray from the bounce along the
/// incoming direction, clamped to t >= 0 (the cut point may not fall
/// behind the bounce), then classify the stroke.
///
/// Handedness policy (not a physical deduction): the bottom receiver
/// plays forehand when the cut point is at or right of the body, the
/// top receiver when it is at or left of it.
pub fn resolve_return(
    hit_from: PixelPoint,
    bounce: PixelPoint,
    icon: PixelPoint,
    active_side: Side,
) -> ReturnResolution {
    let return_at = match normalize(sub(bounce, hit_from)) {
        Some(dir) => {
            let t = dot(sub(icon, bounce), dir).max(0.0);
            add(bounce, scale(dir, t))
        }
        // degenerate incoming direction: the icon itself is the cut point
        None => icon,
    };

    let forehand = match active_side {
        Side::Bottom => return_at.x >= icon.x,
        Side::Top => return_at.x <= icon.x,
    };
    let shot_side = if forehand { ShotSide::Forehand } else { ShotSide::Backhand };

    ReturnResolution { return_at, shot_side }
}
