//! Shot record: one ball trajectory from hit point to return cut point

use serde::{Deserialize, Serialize};

use super::coords::{Bounce, PixelPoint, Side};

/// Symmetric bound on `curve_level`; deltas clamp into [-10, 10]
pub const CURVE_LEVEL_BOUND: i8 = 10;

pub type ShotId = String;

/// Mint a fresh shot/scene/star id
///
/// Uniqueness is the only contract; ids are never parsed.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Closed set of shot types; adding one is a data change in
/// [`crate::engine::profile`], not a control-flow change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "lowercase")]
pub enum ShotType {
    Flat,
    Topspin,
    Slice,
    Lob,
    Drop,
    Jump,
    Dive,
    Slide,
}

impl Default for ShotType {
    fn default() -> Self {
        ShotType::Flat
    }
}

/// Which side of the receiver's body the return cut point falls on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShotSide {
    Forehand,
    Backhand,
}

/// One finalized ball trajectory.
///
/// `prev_p1`/`prev_p2` record both icon positions as they were before
/// this shot was committed, so undo can restore them exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shot {
    pub id: ShotId,
    /// Where the ball was struck: the previous return point on this
    /// side, or the hitter's icon position for the rally's first shot
    pub hit_from: PixelPoint,
    /// Court cell the ball bounced in (grid indices + pixel center)
    pub bounce: Bounce,
    /// Cut point where the receiver's icon meets the outgoing ray
    pub return_at: PixelPoint,
    /// Receiver icon position at finalize time
    pub player_at: PixelPoint,
    pub shot_side: ShotSide,
    pub shot_type: ShotType,
    /// Bend adjustment on top of the type's base curvature
    pub curve_level: i8,
    /// Optional highlight marker tied to this shot's bounce
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub star_pos: Option<PixelPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_p1: Option<PixelPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_p2: Option<PixelPoint>,
}

impl Shot {
    /// Deep copy with a fresh id; never shares identity with the source
    pub fn duplicate(&self) -> Self {
        Shot { id: new_id(), ..self.clone() }
    }

    /// Which half receives this shot (the half the ball bounced into)
    pub fn receiving_side(&self) -> Side {
        self.bounce.side()
    }
}

/// Clamp a curve level into the declared symmetric bound
pub fn clamp_curve(level: i32) -> i8 {
    level.clamp(-(CURVE_LEVEL_BOUND as i32), CURVE_LEVEL_BOUND as i32) as i8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_curve_bounds() {
        assert_eq!(clamp_curve(0), 0);
        assert_eq!(clamp_curve(3), 3);
        assert_eq!(clamp_curve(100), CURVE_LEVEL_BOUND);
        assert_eq!(clamp_curve(-100), -CURVE_LEVEL_BOUND);
    }

    #[test]
    fn test_duplicate_gets_fresh_id() {
        let shot = Shot {
            id: new_id(),
            hit_from: PixelPoint::new(0.0, 0.0),
            bounce: Bounce::new(2, 3, 200.0, 150.0),
            return_at: PixelPoint::new(210.0, 90.0),
            player_at: PixelPoint::new(210.0, 90.0),
            shot_side: ShotSide::Forehand,
            shot_type: ShotType::Flat,
            curve_level: 0,
            star_pos: None,
            prev_p1: None,
            prev_p2: None,
        };
        let copy = shot.duplicate();
        assert_ne!(copy.id, shot.id);
        assert_eq!(copy.bounce, shot.bounce);
    }

    #[test]
    fn test_shot_type_serde_names() {
        let json = serde_json::to_string(&ShotType::Topspin).unwrap();
        assert_eq!(json, "\"topspin\"");
        let back: ShotType = serde_json::from_str("\"drop\"").unwrap();
        assert_eq!(back, ShotType::Drop);
    }
}
