//! JSON boundary for host integrations
//!
//! Hosts keep the whole editor state as an opaque JSON blob and drive
//! it action by action; each call hands back the successor state.
//! Nothing here holds state between calls.

use serde::{Deserialize, Serialize};

use crate::engine::{resolve_path, to_svg_path_d, PathParams, Trajectory};
use crate::error::{RallyError, Result};
use crate::state::{Action, EditorState};

/// Version stamped into every envelope; bumped on breaking changes
pub const SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionEnvelope {
    pub schema_version: u8,
    pub state: EditorState,
}

#[derive(Debug, Serialize)]
pub struct TrajectoryResponse {
    pub schema_version: u8,
    pub shot_id: String,
    /// SVG path `d` string for the whole trajectory
    pub path_d: String,
    pub trajectory: Trajectory,
}

#[derive(Debug, Deserialize)]
struct VersionProbe {
    schema_version: u8,
}

/// Version is checked before the state body is touched, so a version
/// mismatch reports as such rather than as a shape error.
fn parse_envelope(state_json: &str) -> Result<SessionEnvelope> {
    let probe: VersionProbe = serde_json::from_str(state_json)?;
    if probe.schema_version != SCHEMA_VERSION {
        return Err(RallyError::SchemaVersion {
            expected: SCHEMA_VERSION,
            found: probe.schema_version,
        });
    }
    Ok(serde_json::from_str(state_json)?)
}

/// A fresh session with an empty document.
pub fn new_session_json() -> String {
    let envelope = SessionEnvelope { schema_version: SCHEMA_VERSION, state: EditorState::new() };
    // a fresh state contains nothing that can fail to serialize
    serde_json::to_string(&envelope).unwrap_or_else(|_| String::from("{}"))
}

/// Apply one action to a serialized session, returning the successor.
pub fn dispatch_json(state_json: &str, action_json: &str) -> Result<String> {
    let envelope = parse_envelope(state_json)?;
    let action: Action = serde_json::from_str(action_json)?;
    let next = envelope.state.dispatch(&action);
    let out = SessionEnvelope { schema_version: SCHEMA_VERSION, state: next };
    Ok(serde_json::to_string(&out)?)
}

/// Resolve the trajectory of one finalized shot.
///
/// `container` is the rendering-surface size in pixels; without it the
/// extension endpoint falls back to a fixed long ray.
pub fn trajectory_json(
    state_json: &str,
    shot_id: &str,
    container: Option<(f32, f32)>,
) -> Result<String> {
    let envelope = parse_envelope(state_json)?;
    let (si, ti) = envelope
        .state
        .document
        .find_shot(shot_id)
        .ok_or_else(|| RallyError::NotFound(format!("shot {shot_id}")))?;
    let shot = &envelope.state.document.scenes[si].shots[ti];

    let trajectory = resolve_path(&PathParams {
        hit_from: shot.hit_from,
        bounce: shot.bounce.pixel(),
        return_at: shot.return_at,
        shot_type: shot.shot_type,
        curve_level: shot.curve_level,
        container,
    });

    let response = TrajectoryResponse {
        schema_version: SCHEMA_VERSION,
        shot_id: shot_id.to_string(),
        path_d: to_svg_path_d(&trajectory),
        trajectory,
    };
    Ok(serde_json::to_string(&response)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn dispatch(state: &str, action: Value) -> String {
        dispatch_json(state, &action.to_string()).unwrap()
    }

    #[test]
    fn test_new_session_is_versioned_and_idle() {
        let session = new_session_json();
        let value: Value = serde_json::from_str(&session).unwrap();
        assert_eq!(value["schema_version"], 1);
        assert_eq!(value["state"]["phase"]["status"], "idle");
    }

    #[test]
    fn test_dispatch_round_trip() {
        let session = new_session_json();
        let session = dispatch(
            &session,
            json!({"type": "cell_tapped", "r": 2, "c": 3, "x": 210.0, "y": 150.0}),
        );
        let session = dispatch(&session, json!({"type": "finalize_return", "x": 210.0, "y": 70.0}));

        let value: Value = serde_json::from_str(&session).unwrap();
        assert_eq!(value["state"]["document"]["scenes"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_schema_version_mismatch_is_rejected() {
        let bad = r#"{"schema_version": 9, "state": {}}"#;
        let err = dispatch_json(bad, r#"{"type": "reset"}"#).unwrap_err();
        assert!(matches!(err, RallyError::SchemaVersion { found: 9, .. }));
    }

    #[test]
    fn test_malformed_action_is_deserialization_error() {
        let session = new_session_json();
        let err = dispatch_json(&session, r#"{"type": "warp"}"#).unwrap_err();
        assert!(matches!(err, RallyError::Deserialization(_)));
    }

    #[test]
    fn test_trajectory_json_for_finalized_shot() {
        let session = new_session_json();
        let session = dispatch(
            &session,
            json!({"type": "cell_tapped", "r": 2, "c": 3, "x": 210.0, "y": 150.0}),
        );
        let session = dispatch(&session, json!({"type": "finalize_return", "x": 210.0, "y": 70.0}));

        let value: Value = serde_json::from_str(&session).unwrap();
        let shot_id =
            value["state"]["document"]["scenes"][0]["shots"][0]["id"].as_str().unwrap();

        let out = trajectory_json(&session, shot_id, Some((360.0, 600.0))).unwrap();
        let out: Value = serde_json::from_str(&out).unwrap();
        assert!(out["path_d"].as_str().unwrap().starts_with("M "));
        assert!(!out["trajectory"]["segments"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_trajectory_json_missing_shot() {
        let session = new_session_json();
        let err = trajectory_json(&session, "nope", None).unwrap_err();
        assert!(matches!(err, RallyError::NotFound(_)));
    }
}
