//! Scene: one rally beat — player placements plus its shots

use serde::{Deserialize, Serialize};

use super::coords::PixelPoint;
use super::shot::{new_id, Shot, ShotId};

pub type SceneId = String;

/// Ordered container for one rally beat.
///
/// `p1_pos`/`p2_pos` are the icon positions at this point in the
/// rally; the next shot's hit point derives from them when the rally
/// history holds no earlier return on the relevant side. Subtitle and
/// star live on the scene, not on individual shots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub id: SceneId,
    pub p1_pos: PixelPoint,
    pub p2_pos: PixelPoint,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub star_pos: Option<PixelPoint>,
    pub shots: Vec<Shot>,
}

impl Scene {
    pub fn last_shot(&self) -> Option<&Shot> {
        self.shots.last()
    }

    pub fn shot(&self, id: &str) -> Option<&Shot> {
        self.shots.iter().find(|s| s.id == id)
    }

    pub fn shot_mut(&mut self, id: &str) -> Option<&mut Shot> {
        self.shots.iter_mut().find(|s| s.id == id)
    }

    /// Deep clone with fresh ids for the scene and every nested shot.
    ///
    /// The clone shares no identity with the source; mutating a shot
    /// in the clone leaves the source untouched.
    pub fn duplicate(&self) -> Self {
        Scene {
            id: new_id(),
            p1_pos: self.p1_pos,
            p2_pos: self.p2_pos,
            subtitle: self.subtitle.clone(),
            star_pos: self.star_pos,
            shots: self.shots.iter().map(Shot::duplicate).collect(),
        }
    }

    pub fn contains_shot(&self, id: &ShotId) -> bool {
        self.shots.iter().any(|s| &s.id == id)
    }
}
