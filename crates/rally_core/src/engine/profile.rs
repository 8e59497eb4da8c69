//! Per-type shot profiles
//!
//! Everything type-specific — stroke weight, dash style, base
//! curvature, and the short-extension behavior of drop/jump-like
//! shots — lives in this table. Adding a shot type is a data change
//! here, never a control-flow change in the resolver.

use crate::models::ShotType;

/// Pixels of bend contributed per curve level step
pub const CURVE_STEP_PX: f32 = 16.0;

/// Character icons render at 44x44; extension lines stop at this radius
pub const ICON_RADIUS_PX: f32 = 22.0;

/// Secondary bounce marker sits at this fraction of the short distance
pub const SECOND_BOUNCE_FRACTION: f32 = 0.6;

/// Cell width assumed when the container size is unknown
pub const DEFAULT_CELL_PX: f32 = 60.0;

/// How the trajectory continues past the bounce
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Behavior {
    /// Extend to the container edge (or the receiver icon's boundary)
    Standard,
    /// Stop after a fixed distance, expressed in grid-cell widths,
    /// with a visual second bounce along the way
    ShortExtension { cells: f32 },
}

/// Visual and behavioral parameters for one shot type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotProfile {
    pub color: &'static str,
    pub line_weight: f32,
    pub dashed: bool,
    /// Curvature applied before the user's curve level
    pub base_curve: f32,
    pub behavior: Behavior,
}

impl ShotType {
    pub fn profile(self) -> ShotProfile {
        match self {
            ShotType::Flat => ShotProfile {
                color: "#9370DB",
                line_weight: 7.0,
                dashed: false,
                base_curve: 0.0,
                behavior: Behavior::Standard,
            },
            ShotType::Topspin => ShotProfile {
                color: "#FFA500",
                line_weight: 7.0,
                dashed: false,
                base_curve: 0.0,
                behavior: Behavior::Standard,
            },
            ShotType::Slice => ShotProfile {
                color: "#6495ED",
                line_weight: 7.0,
                dashed: false,
                base_curve: 0.0,
                behavior: Behavior::Standard,
            },
            ShotType::Lob => ShotProfile {
                color: "#F0E68C",
                line_weight: 4.0,
                dashed: true,
                base_curve: 0.0,
                behavior: Behavior::Standard,
            },
            ShotType::Drop => ShotProfile {
                color: "#d4d4d4",
                line_weight: 7.0,
                dashed: false,
                base_curve: 0.0,
                behavior: Behavior::ShortExtension { cells: 1.0 },
            },
            ShotType::Jump => ShotProfile {
                color: "#aaaaaa",
                line_weight: 2.0,
                dashed: true,
                base_curve: 0.0,
                behavior: Behavior::ShortExtension { cells: 3.0 },
            },
            ShotType::Dive => ShotProfile {
                color: "#aaaaaa",
                line_weight: 3.0,
                dashed: true,
                base_curve: 0.0,
                behavior: Behavior::ShortExtension { cells: 3.0 },
            },
            ShotType::Slide => ShotProfile {
                color: "#6495ED",
                line_weight: 3.0,
                dashed: true,
                base_curve: 0.0,
                behavior: Behavior::ShortExtension { cells: 3.0 },
            },
        }
    }

    /// Effective signed curvature in pixels for a given curve level
    pub fn signed_curve(self, curve_level: i8) -> f32 {
        self.profile().base_curve + curve_level as f32 * CURVE_STEP_PX
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_profile_is_well_formed() {
        for ty in ShotType::iter() {
            let p = ty.profile();
            assert!(p.line_weight > 0.0);
            assert!(!p.color.is_empty());
            if let Behavior::ShortExtension { cells } = p.behavior {
                assert!(cells > 0.0);
            }
        }
    }

    #[test]
    fn test_short_extension_distances() {
        assert_eq!(ShotType::Drop.profile().behavior, Behavior::ShortExtension { cells: 1.0 });
        assert_eq!(ShotType::Dive.profile().behavior, Behavior::ShortExtension { cells: 3.0 });
    }

    #[test]
    fn test_signed_curve_steps() {
        assert_eq!(ShotType::Flat.signed_curve(0), 0.0);
        assert_eq!(ShotType::Flat.signed_curve(2), 32.0);
        assert_eq!(ShotType::Flat.signed_curve(-3), -48.0);
    }
}
