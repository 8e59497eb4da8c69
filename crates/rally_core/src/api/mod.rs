pub mod json_api;

pub use json_api::{
    dispatch_json, new_session_json, trajectory_json, SessionEnvelope, TrajectoryResponse,
    SCHEMA_VERSION,
};
