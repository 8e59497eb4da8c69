pub mod court;
pub mod intersection;
pub mod vector;

pub use court::{cell_center, CourtMapper};
pub use intersection::{
    extend_ray, ray_to_circle_edge, ray_to_rect_edge, FALLBACK_EXTENSION_PX,
};
pub use vector::{normalize, point_at_distance, DIRECTION_EPSILON};
