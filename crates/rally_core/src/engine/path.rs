//! Shot path resolver
//!
//! Turns a shot's three key points (hit, bounce, return) plus its type
//! and curve level into a piecewise quadratic trajectory and bounce
//! markers. Geometry only; how the segments are painted is a consumer
//! concern.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::geometry::intersection::{extend_ray, ray_to_circle_edge};
use crate::geometry::vector::{add, midpoint, normalize, perpendicular, scale, sub, Vec2};
use crate::models::{PixelPoint, ShotType, GRID_COLS};

use super::profile::{
    Behavior, DEFAULT_CELL_PX, ICON_RADIUS_PX, SECOND_BOUNCE_FRACTION,
};

/// Bends below this many pixels render as straight lines
const STRAIGHT_BEND_EPSILON: f32 = 0.01;

/// Return and bounce within this distance mean "no return chosen yet"
const PREVIEW_EPSILON_PX: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathParams {
    pub hit_from: PixelPoint,
    pub bounce: PixelPoint,
    pub return_at: PixelPoint,
    pub shot_type: ShotType,
    pub curve_level: i8,
    /// Surface size in pixels; extension falls back to a fixed large
    /// distance when absent
    pub container: Option<(f32, f32)>,
}

/// One trajectory piece; straight when `ctrl` is `None`, otherwise a
/// quadratic curve through the control point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathSegment {
    pub start: PixelPoint,
    pub ctrl: Option<PixelPoint>,
    pub end: PixelPoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    /// The tapped bounce cell
    Bounce1,
    /// Visual second bounce of a short-extension shot
    Bounce2,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BounceMarker {
    pub kind: MarkerKind,
    pub at: PixelPoint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub segments: Vec<PathSegment>,
    pub markers: Vec<BounceMarker>,
}

/// Resolve the full trajectory for one shot.
///
/// Segment one runs hit -> bounce; segment two continues past the
/// bounce to an endpoint that depends on the type's behavior family
/// and on whether a return point has been committed yet (a return
/// coinciding with the bounce means "directional preview only").
pub fn resolve_path(params: &PathParams) -> Trajectory {
    let profile = params.shot_type.profile();
    let signed = params.shot_type.signed_curve(params.curve_level);
    let bend = signed.abs();
    let bend_dir = if signed >= 0.0 { 1.0 } else { -1.0 };

    let cell_px = params
        .container
        .map(|(w, _)| w / GRID_COLS as f32)
        .unwrap_or(DEFAULT_CELL_PX);

    let seg1 = make_segment(params.hit_from, params.bounce, bend, bend_dir);

    let preview = (params.return_at.x - params.bounce.x).abs() < PREVIEW_EPSILON_PX
        && (params.return_at.y - params.bounce.y).abs() < PREVIEW_EPSILON_PX;

    let out_dir = outgoing_direction(params, &seg1, preview);

    let mut markers = vec![BounceMarker { kind: MarkerKind::Bounce1, at: params.bounce }];

    let end = match profile.behavior {
        Behavior::Standard => {
            let edge = extend_ray(params.bounce, out_dir, params.container);
            if preview {
                edge
            } else {
                // stop at the receiver icon's boundary when the ray
                // reaches it before the container edge
                ray_to_circle_edge(params.bounce, out_dir, params.return_at, ICON_RADIUS_PX)
                    .unwrap_or(edge)
            }
        }
        Behavior::ShortExtension { cells } => {
            let short = cell_px * cells;
            if !preview {
                markers.push(BounceMarker {
                    kind: MarkerKind::Bounce2,
                    at: add(params.bounce, scale(out_dir, short * SECOND_BOUNCE_FRACTION)),
                });
            }
            add(params.bounce, scale(out_dir, short))
        }
    };

    let seg2 = make_segment(params.bounce, end, bend, bend_dir);

    trace!(
        ?params.shot_type,
        curve = signed,
        preview,
        "resolved shot path"
    );

    Trajectory { segments: vec![seg1, seg2], markers }
}

/// Unit direction the ball travels past the bounce.
///
/// Committed shots head toward the return cut point. Previews continue
/// along the arrival tangent of the first segment (the tangent of the
/// bent quadratic, not simply hit -> bounce). A fully degenerate shot
/// falls back to +x.
fn outgoing_direction(params: &PathParams, seg1: &PathSegment, preview: bool) -> Vec2 {
    if !preview {
        if let Some(dir) = normalize(sub(params.return_at, params.bounce)) {
            return dir;
        }
    }
    let tangent = match seg1.ctrl {
        Some(ctrl) => normalize(sub(params.bounce, ctrl)),
        None => normalize(sub(params.bounce, params.hit_from)),
    };
    tangent.unwrap_or((1.0, 0.0))
}

/// Straight segment, or a quadratic whose control point is offset from
/// the midpoint along the perpendicular by `bend` pixels.
fn make_segment(start: PixelPoint, end: PixelPoint, bend: f32, bend_dir: f32) -> PathSegment {
    let ctrl = match normalize(sub(end, start)) {
        Some(dir) if bend >= STRAIGHT_BEND_EPSILON => {
            let perp = perpendicular(dir);
            Some(add(midpoint(start, end), scale(perp, bend * bend_dir)))
        }
        _ => None,
    };
    PathSegment { start, ctrl, end }
}

/// Format a trajectory as SVG path commands (M/L/Q) for consumers
/// that render or export the document.
pub fn to_svg_path_d(trajectory: &Trajectory) -> String {
    let mut d = String::new();
    for (i, seg) in trajectory.segments.iter().enumerate() {
        if i == 0 {
            d.push_str(&format!("M {} {}", seg.start.x, seg.start.y));
        }
        match seg.ctrl {
            Some(c) => d.push_str(&format!(" Q {} {} {} {}", c.x, c.y, seg.end.x, seg.end.y)),
            None => d.push_str(&format!(" L {} {}", seg.end.x, seg.end.y)),
        }
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_params() -> PathParams {
        PathParams {
            hit_from: PixelPoint::new(0.0, 0.0),
            bounce: PixelPoint::new(10.0, 0.0),
            return_at: PixelPoint::new(10.0, 0.0),
            shot_type: ShotType::Flat,
            curve_level: 0,
            container: None,
        }
    }

    #[test]
    fn test_coincident_return_is_directional_preview() {
        // first segment is the straight hit->bounce line; the second
        // continues in the same direction instead of collapsing
        let t = resolve_path(&flat_params());
        assert_eq!(t.segments.len(), 2);
        let s1 = t.segments[0];
        assert_eq!(s1.start, PixelPoint::new(0.0, 0.0));
        assert_eq!(s1.end, PixelPoint::new(10.0, 0.0));
        assert_eq!(s1.ctrl, None);
        let s2 = t.segments[1];
        assert!(s2.end.x > 10.0 + 1.0, "preview must extend, got {:?}", s2.end);
        assert!((s2.end.y - 0.0).abs() < 1e-3);
    }

    #[test]
    fn test_zero_curve_segments_are_straight() {
        let mut p = flat_params();
        p.return_at = PixelPoint::new(20.0, 40.0);
        let t = resolve_path(&p);
        assert!(t.segments.iter().all(|s| s.ctrl.is_none()));
    }

    #[test]
    fn test_curved_control_point_is_perpendicular_offset() {
        let p = PathParams {
            hit_from: PixelPoint::new(0.0, 0.0),
            bounce: PixelPoint::new(100.0, 0.0),
            return_at: PixelPoint::new(100.0, 0.0),
            shot_type: ShotType::Flat,
            curve_level: 2,
            container: None,
        };
        let t = resolve_path(&p);
        let ctrl = t.segments[0].ctrl.expect("bent segment has a control point");
        // midpoint (50,0), unit dir (1,0), perp (0,1), bend 32
        assert!((ctrl.x - 50.0).abs() < 1e-3);
        assert!((ctrl.y - 32.0).abs() < 1e-3);
    }

    #[test]
    fn test_negative_curve_bends_the_other_way() {
        let mut p = flat_params();
        p.bounce = PixelPoint::new(100.0, 0.0);
        p.return_at = PixelPoint::new(100.0, 0.0);
        p.curve_level = -2;
        let t = resolve_path(&p);
        let ctrl = t.segments[0].ctrl.unwrap();
        assert!((ctrl.y + 32.0).abs() < 1e-3);
    }

    #[test]
    fn test_drop_stops_one_cell_past_bounce() {
        let p = PathParams {
            hit_from: PixelPoint::new(150.0, 550.0),
            bounce: PixelPoint::new(150.0, 250.0),
            return_at: PixelPoint::new(150.0, 100.0),
            shot_type: ShotType::Drop,
            curve_level: 0,
            container: Some((300.0, 600.0)),
        };
        let t = resolve_path(&p);
        // cell width 50, drop = 1 cell toward the return point
        let end = t.segments[1].end;
        assert!((end.x - 150.0).abs() < 1e-3);
        assert!((end.y - 200.0).abs() < 1e-3);
    }

    #[test]
    fn test_committed_short_shot_emits_second_bounce_marker() {
        let p = PathParams {
            hit_from: PixelPoint::new(150.0, 550.0),
            bounce: PixelPoint::new(150.0, 250.0),
            return_at: PixelPoint::new(150.0, 100.0),
            shot_type: ShotType::Drop,
            curve_level: 0,
            container: Some((300.0, 600.0)),
        };
        let t = resolve_path(&p);
        let second = t
            .markers
            .iter()
            .find(|m| m.kind == MarkerKind::Bounce2)
            .expect("committed drop has a second bounce");
        // 0.6 of the 50px short distance
        assert!((second.at.y - 220.0).abs() < 1e-3);
    }

    #[test]
    fn test_preview_short_shot_has_no_second_bounce_marker() {
        let p = PathParams {
            hit_from: PixelPoint::new(150.0, 550.0),
            bounce: PixelPoint::new(150.0, 250.0),
            return_at: PixelPoint::new(150.0, 250.0),
            shot_type: ShotType::Drop,
            curve_level: 0,
            container: Some((300.0, 600.0)),
        };
        let t = resolve_path(&p);
        assert!(t.markers.iter().all(|m| m.kind != MarkerKind::Bounce2));
    }

    #[test]
    fn test_standard_committed_stops_at_icon_edge() {
        let p = PathParams {
            hit_from: PixelPoint::new(150.0, 550.0),
            bounce: PixelPoint::new(150.0, 250.0),
            return_at: PixelPoint::new(150.0, 100.0),
            shot_type: ShotType::Flat,
            curve_level: 0,
            container: Some((300.0, 600.0)),
        };
        let t = resolve_path(&p);
        let end = t.segments[1].end;
        // stops ICON_RADIUS_PX short of the return cut point
        assert!((end.y - (100.0 + ICON_RADIUS_PX)).abs() < 1e-3);
    }

    #[test]
    fn test_standard_preview_extends_to_container_edge() {
        let p = PathParams {
            hit_from: PixelPoint::new(150.0, 550.0),
            bounce: PixelPoint::new(150.0, 250.0),
            return_at: PixelPoint::new(150.0, 250.0),
            shot_type: ShotType::Flat,
            curve_level: 0,
            container: Some((300.0, 600.0)),
        };
        let t = resolve_path(&p);
        assert!((t.segments[1].end.y - 0.0).abs() < 1e-3);
    }

    #[test]
    fn test_svg_path_formatting() {
        let t = Trajectory {
            segments: vec![
                PathSegment {
                    start: PixelPoint::new(0.0, 0.0),
                    ctrl: None,
                    end: PixelPoint::new(10.0, 0.0),
                },
                PathSegment {
                    start: PixelPoint::new(10.0, 0.0),
                    ctrl: Some(PixelPoint::new(15.0, 5.0)),
                    end: PixelPoint::new(20.0, 0.0),
                },
            ],
            markers: vec![],
        };
        assert_eq!(to_svg_path_d(&t), "M 0 0 L 10 0 Q 15 5 20 0");
    }
}
