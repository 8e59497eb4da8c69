//! Closed action set consumed by the rally editor state machine

use serde::{Deserialize, Serialize};

use crate::models::{PixelPoint, SceneId, ShotId, ShotType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerId {
    P1,
    P2,
}

/// Every mutation of the editor state enters through one of these.
///
/// UI-driven events arrive pre-translated into surface-relative pixel
/// coordinates; the engine never reads raw screen geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    SetShotType { shot_type: ShotType },
    SetCurve { delta: i32 },
    SetPlayerPos { player: PlayerId, x: f32, y: f32 },
    SetDefaultPositions { p1: PixelPoint, p2: PixelPoint },
    SetCharacters { p1: String, p2: String },
    /// A court cell was tapped: place (or re-place) a bounce
    CellTapped { r: u8, c: u8, x: f32, y: f32 },
    /// Transient drag position for the receiver icon; never durable
    PreviewReturn { x: f32, y: f32 },
    /// Receiver icon dropped: commit the pending or edited return
    FinalizeReturn { x: f32, y: f32 },
    SelectScene { id: Option<SceneId> },
    SelectShot { id: Option<ShotId> },
    AddScene,
    DeleteScene,
    MoveScene { id: SceneId, delta: i32 },
    AddShot,
    DeleteShot,
    SetSubtitle { id: SceneId, text: String },
    SetSubtitleDraft { text: String },
    SetStar { id: SceneId, pos: Option<PixelPoint> },
    SetPendingStar { pos: Option<PixelPoint> },
    Undo,
    Reset,
}
