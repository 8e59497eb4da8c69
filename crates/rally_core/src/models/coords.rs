//! Coordinate types for the three spaces the engine works in
//!
//! **Grid coordinates** (cell indices over the court grid):
//! - r: 0 = far baseline (top half), 9 = near baseline (bottom half)
//! - c: 0 = left sideline, 5 = right sideline
//! - the net sits between r=4 and r=5
//!
//! **Pixel coordinates** (rendering-surface relative):
//! - x grows rightward, y grows downward, origin at the surface's
//!   top-left corner
//!
//! **Court coordinates** (normalized, scale independent):
//! - (u, v) in [0,1]^2, convertible to pixels through a `CourtRect`

use serde::{Deserialize, Serialize};

/// Number of grid columns across the court
pub const GRID_COLS: u8 = 6;
/// Number of grid rows along the court (both halves)
pub const GRID_ROWS: u8 = 10;
/// First row of the bottom half; rows below `NET_ROW` belong to the top half
pub const NET_ROW: u8 = 5;

/// Court half, keyed off the bounce row
///
/// Top is the opponent's half, bottom is the near player's half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Bottom,
}

impl Side {
    /// Which half a grid row belongs to
    pub fn of_row(r: u8) -> Self {
        if r < NET_ROW {
            Side::Top
        } else {
            Side::Bottom
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
        }
    }
}

/// Pixel offset relative to the court rendering surface origin
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f32,
    pub y: f32,
}

impl PixelPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Normalized court position, both axes in [0,1]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CourtPoint {
    pub u: f32,
    pub v: f32,
}

impl CourtPoint {
    pub fn new(u: f32, v: f32) -> Self {
        Self { u, v }
    }

    /// Clamp both components into [0,1]
    ///
    /// Out-of-surface input degrades to the nearest edge instead of
    /// erroring; clamping is idempotent.
    pub fn clamped(self) -> Self {
        Self { u: self.u.clamp(0.0, 1.0), v: self.v.clamp(0.0, 1.0) }
    }
}

/// Placement of the court inside a rendering surface, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CourtRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// A bounce location: grid cell indices plus the cell's pixel center
///
/// The cell indices decide which half is active (and therefore who
/// receives); the pixel center anchors all trajectory geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounce {
    pub r: u8,
    pub c: u8,
    pub x: f32,
    pub y: f32,
}

impl Bounce {
    pub fn new(r: u8, c: u8, x: f32, y: f32) -> Self {
        Self { r, c, x, y }
    }

    pub fn pixel(&self) -> PixelPoint {
        PixelPoint { x: self.x, y: self.y }
    }

    /// The half this bounce landed in
    pub fn side(&self) -> Side {
        Side::of_row(self.r)
    }
}
