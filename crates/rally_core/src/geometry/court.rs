//! Coordinate layer: grid cells, pixels, and normalized court space
//!
//! All functions are pure over explicit geometry arguments; there is
//! no implicit surface state.

use crate::models::{Bounce, CourtPoint, CourtRect, PixelPoint, GRID_COLS, GRID_ROWS};

/// Maps between normalized court coordinates and surface pixels.
///
/// Both directions clamp the normalized side to [0,1], so
/// out-of-surface input degrades to the nearest edge.
#[derive(Debug, Clone, Copy)]
pub struct CourtMapper {
    rect: CourtRect,
}

impl CourtMapper {
    pub fn new(rect: CourtRect) -> Self {
        Self { rect }
    }

    pub fn court_to_pixel(&self, point: CourtPoint) -> PixelPoint {
        let p = point.clamped();
        PixelPoint {
            x: self.rect.left + p.u * self.rect.width,
            y: self.rect.top + p.v * self.rect.height,
        }
    }

    pub fn pixel_to_court(&self, px: PixelPoint) -> CourtPoint {
        CourtPoint {
            u: (px.x - self.rect.left) / self.rect.width,
            v: (px.y - self.rect.top) / self.rect.height,
        }
        .clamped()
    }
}

/// Pixel center of a grid cell, relative to the surface's top-left
/// origin, paired with the cell's row/column.
pub fn cell_center(container_w: f32, container_h: f32, r: u8, c: u8) -> Bounce {
    let cell_w = container_w / GRID_COLS as f32;
    let cell_h = container_h / GRID_ROWS as f32;
    Bounce {
        r,
        c,
        x: (c as f32 + 0.5) * cell_w,
        y: (r as f32 + 0.5) * cell_h,
    }
}
