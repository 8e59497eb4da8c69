//! Ray intersections used to terminate trajectory extension lines
//!
//! Extension lines past the bounce stop at the container edge, or at
//! the receiving icon's circular boundary when the ray meets it first.
//! All failures are sentinels; callers substitute fallbacks.

use crate::models::{CourtRect, PixelPoint};

use super::vector::{add, scale, sub, Vec2};

/// Extension distance used when no container rect is supplied; the
/// resulting overlong path is clipped by the rendering viewport.
pub const FALLBACK_EXTENSION_PX: f32 = 1000.0;

/// Extend a ray from `origin` toward `toward` until it exits `rect`.
///
/// Takes the smallest positive parametric hit against the four edges;
/// a degenerate ray (toward == origin) stays at `toward`.
pub fn ray_to_rect_edge(origin: PixelPoint, toward: PixelPoint, rect: &CourtRect) -> PixelPoint {
    let dx = toward.x - origin.x;
    let dy = toward.y - origin.y;

    let mut best: Option<f32> = None;
    let mut consider = |t: f32| {
        if t > 0.0 && best.map_or(true, |b| t < b) {
            best = Some(t);
        }
    };

    if dx != 0.0 {
        consider((rect.left - origin.x) / dx);
        consider((rect.left + rect.width - origin.x) / dx);
    }
    if dy != 0.0 {
        consider((rect.top - origin.y) / dy);
        consider((rect.top + rect.height - origin.y) / dy);
    }

    let t = best.unwrap_or(1.0);
    let hit = PixelPoint { x: origin.x + dx * t, y: origin.y + dy * t };
    PixelPoint {
        x: hit.x.clamp(rect.left, rect.left + rect.width),
        y: hit.y.clamp(rect.top, rect.top + rect.height),
    }
}

/// Extend a unit ray to the container edge, or a large fixed distance
/// when the container size is unknown.
pub fn extend_ray(origin: PixelPoint, dir: Vec2, container: Option<(f32, f32)>) -> PixelPoint {
    match container {
        Some((w, h)) => {
            let rect = CourtRect { left: 0.0, top: 0.0, width: w, height: h };
            ray_to_rect_edge(origin, add(origin, dir), &rect)
        }
        None => add(origin, scale(dir, FALLBACK_EXTENSION_PX)),
    }
}

/// First point where a unit ray leaves a circle.
///
/// When the origin sits inside the circle the exit root is used.
/// Returns `None` when the ray misses or the hit lies behind the
/// origin.
pub fn ray_to_circle_edge(
    origin: PixelPoint,
    dir: Vec2,
    center: PixelPoint,
    radius: f32,
) -> Option<PixelPoint> {
    let oc = sub(origin, center);
    // a = 1 because dir is unit length
    let b = 2.0 * (oc.0 * dir.0 + oc.1 * dir.1);
    let c = oc.0 * oc.0 + oc.1 * oc.1 - radius * radius;
    let disc = b * b - 4.0 * c;
    if disc < 0.0 {
        return None;
    }
    let sqrt_disc = disc.sqrt();
    let t1 = (-b - sqrt_disc) / 2.0;
    let t2 = (-b + sqrt_disc) / 2.0;
    let t = if t1 > 0.0 { t1 } else { t2 };
    if t <= 0.0 {
        return None;
    }
    Some(add(origin, scale(dir, t)))
}
