//! Rally-history queries
//!
//! Pure folds over the ordered scene list; no iteration state leaks
//! into the state machine.

use crate::models::{PixelPoint, Scene, Side};

/// Where the next shot is struck from.
///
/// When the ball is heading into `active_side`, the hitter stands on
/// the opposite half; their strike point is the most recent return cut
/// point recorded on that half. Falls back to the hitter's icon
/// position, then to the origin.
pub fn hit_from(
    scenes: &[Scene],
    active_side: Side,
    p1_icon: Option<PixelPoint>,
    p2_icon: Option<PixelPoint>,
) -> PixelPoint {
    // ball bouncing top -> the bottom player (P1) is hitting
    let hitter_side = active_side.opposite();

    let last_return = scenes
        .iter()
        .rev()
        .flat_map(|scene| scene.shots.iter().rev())
        .find(|shot| shot.bounce.side() == hitter_side)
        .map(|shot| shot.return_at);

    if let Some(at) = last_return {
        return at;
    }

    let fallback = match hitter_side {
        Side::Bottom => p1_icon,
        Side::Top => p2_icon,
    };
    fallback.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::shot::{new_id, Shot, ShotSide, ShotType};
    use crate::models::Bounce;

    fn scene(shots: Vec<Shot>) -> Scene {
        Scene {
            id: new_id(),
            p1_pos: PixelPoint::new(150.0, 520.0),
            p2_pos: PixelPoint::new(150.0, 80.0),
            subtitle: String::new(),
            star_pos: None,
            shots,
        }
    }

    fn shot(r: u8, return_at: PixelPoint) -> Shot {
        Shot {
            id: new_id(),
            hit_from: PixelPoint::new(0.0, 0.0),
            bounce: Bounce::new(r, 3, 150.0, 300.0),
            return_at,
            player_at: return_at,
            shot_side: ShotSide::Forehand,
            shot_type: ShotType::Flat,
            curve_level: 0,
            star_pos: None,
            prev_p1: None,
            prev_p2: None,
        }
    }

    #[test]
    fn test_finds_most_recent_return_on_hitter_side() {
        // next ball heads top -> the bottom player hits, so the most
        // recent bottom-half bounce's return point is the strike point
        let scenes = vec![
            scene(vec![shot(7, PixelPoint::new(1.0, 1.0))]),
            scene(vec![shot(2, PixelPoint::new(2.0, 2.0))]),
            scene(vec![shot(8, PixelPoint::new(3.0, 3.0))]),
        ];
        let at = hit_from(&scenes, Side::Top, None, None);
        assert_eq!(at, PixelPoint::new(3.0, 3.0));
    }

    #[test]
    fn test_falls_back_to_hitter_icon() {
        let p1 = PixelPoint::new(140.0, 510.0);
        let p2 = PixelPoint::new(160.0, 90.0);
        // only top-half bounces recorded, ball heading top again
        let scenes = vec![scene(vec![shot(2, PixelPoint::new(9.0, 9.0))])];
        let at = hit_from(&scenes, Side::Top, Some(p1), Some(p2));
        assert_eq!(at, p1);

        // ball heading bottom -> top player (P2) hits
        let at = hit_from(&[], Side::Bottom, Some(p1), Some(p2));
        assert_eq!(at, p2);
    }

    #[test]
    fn test_empty_history_without_icons_is_origin() {
        assert_eq!(hit_from(&[], Side::Top, None, None), PixelPoint::default());
    }
}
