pub mod history;
pub mod path;
pub mod profile;
pub mod returns;

pub use history::hit_from;
pub use path::{
    resolve_path, to_svg_path_d, BounceMarker, MarkerKind, PathParams, PathSegment, Trajectory,
};
pub use profile::{
    Behavior, ShotProfile, CURVE_STEP_PX, DEFAULT_CELL_PX, ICON_RADIUS_PX, SECOND_BOUNCE_FRACTION,
};
pub use returns::{resolve_return, ReturnResolution};
