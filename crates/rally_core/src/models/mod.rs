pub mod coords;
pub mod document;
pub mod scene;
pub mod shot;

pub use coords::{Bounce, CourtPoint, CourtRect, PixelPoint, Side, GRID_COLS, GRID_ROWS, NET_ROW};
pub use document::Document;
pub use scene::{Scene, SceneId};
pub use shot::{clamp_curve, new_id, Shot, ShotId, ShotSide, ShotType, CURVE_LEVEL_BOUND};
