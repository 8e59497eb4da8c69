//! 2D vector helpers over pixel-space points
//!
//! Vectors are plain `(f32, f32)` tuples; points are `PixelPoint`.
//! `normalize` signals a degenerate direction with `None` — callers
//! substitute a documented fallback instead of propagating NaN.

use crate::models::PixelPoint;

pub type Vec2 = (f32, f32);

/// Vectors shorter than this have no defined direction
pub const DIRECTION_EPSILON: f32 = 1e-6;

#[inline]
pub fn sub(a: PixelPoint, b: PixelPoint) -> Vec2 {
    (a.x - b.x, a.y - b.y)
}

#[inline]
pub fn add(p: PixelPoint, v: Vec2) -> PixelPoint {
    PixelPoint { x: p.x + v.0, y: p.y + v.1 }
}

#[inline]
pub fn scale(v: Vec2, s: f32) -> Vec2 {
    (v.0 * s, v.1 * s)
}

#[inline]
pub fn dot(a: Vec2, b: Vec2) -> f32 {
    a.0 * b.0 + a.1 * b.1
}

#[inline]
pub fn length(v: Vec2) -> f32 {
    (v.0 * v.0 + v.1 * v.1).sqrt()
}

/// Unit vector, or `None` when the input is below [`DIRECTION_EPSILON`]
#[inline]
pub fn normalize(v: Vec2) -> Option<Vec2> {
    let len = length(v);
    if len < DIRECTION_EPSILON {
        None
    } else {
        Some((v.0 / len, v.1 / len))
    }
}

/// Left-hand perpendicular of a unit vector
#[inline]
pub fn perpendicular(v: Vec2) -> Vec2 {
    (-v.1, v.0)
}

/// Midpoint of a segment
#[inline]
pub fn midpoint(a: PixelPoint, b: PixelPoint) -> PixelPoint {
    PixelPoint { x: (a.x + b.x) / 2.0, y: (a.y + b.y) / 2.0 }
}

/// Point at `dist` from `from` toward `toward`, or `None` when the
/// two points coincide
pub fn point_at_distance(from: PixelPoint, toward: PixelPoint, dist: f32) -> Option<PixelPoint> {
    let dir = normalize(sub(toward, from))?;
    Some(add(from, scale(dir, dist)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_unit_length() {
        let n = normalize((3.0, 4.0)).unwrap();
        assert!((length(n) - 1.0).abs() < 1e-6);
        assert!((n.0 - 0.6).abs() < 1e-6);
        assert!((n.1 - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_degenerate_is_none() {
        assert_eq!(normalize((0.0, 0.0)), None);
        assert_eq!(normalize((1e-9, -1e-9)), None);
    }

    #[test]
    fn test_point_at_distance() {
        let p = point_at_distance(
            PixelPoint::new(10.0, 10.0),
            PixelPoint::new(10.0, 50.0),
            5.0,
        )
        .unwrap();
        assert!((p.x - 10.0).abs() < 1e-6);
        assert!((p.y - 15.0).abs() < 1e-6);
    }

    #[test]
    fn test_point_at_distance_coincident_is_none() {
        let at = PixelPoint::new(7.0, 7.0);
        assert_eq!(point_at_distance(at, at, 5.0), None);
    }

    #[test]
    fn test_perpendicular_is_orthogonal() {
        let n = normalize((2.0, 5.0)).unwrap();
        assert!(dot(n, perpendicular(n)).abs() < 1e-6);
    }
}
