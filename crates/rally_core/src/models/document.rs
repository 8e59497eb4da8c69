//! Rally document: the ordered scene list plus selection

use serde::{Deserialize, Serialize};

use super::scene::{Scene, SceneId};
use super::shot::{Shot, ShotId};

/// The durable rally document.
///
/// Scene order is rally order. Selection ids are nullable; `None`
/// means "operate on the most recent scene/shot". A selection id that
/// no longer resolves is treated as no selection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    pub scenes: Vec<Scene>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_scene_id: Option<SceneId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_shot_id: Option<ShotId>,
}

impl Document {
    pub fn last_scene(&self) -> Option<&Scene> {
        self.scenes.last()
    }

    pub fn scene(&self, id: &str) -> Option<&Scene> {
        self.scenes.iter().find(|s| s.id == id)
    }

    pub fn scene_mut(&mut self, id: &str) -> Option<&mut Scene> {
        self.scenes.iter_mut().find(|s| s.id == id)
    }

    /// Selected scene, falling back to the most recent one
    pub fn selected_scene(&self) -> Option<&Scene> {
        match &self.selected_scene_id {
            Some(id) => self.scene(id).or_else(|| self.last_scene()),
            None => self.last_scene(),
        }
    }

    /// Selected shot, falling back to the last shot of the selected scene
    pub fn selected_shot(&self) -> Option<&Shot> {
        if let Some(id) = &self.selected_shot_id {
            if let Some(shot) = self.find_shot(id).map(|(s, i)| &self.scenes[s].shots[i]) {
                return Some(shot);
            }
        }
        self.selected_scene().and_then(Scene::last_shot)
    }

    /// Locate a shot by id as (scene index, shot index)
    pub fn find_shot(&self, id: &str) -> Option<(usize, usize)> {
        for (si, scene) in self.scenes.iter().enumerate() {
            if let Some(ti) = scene.shots.iter().position(|s| s.id == id) {
                return Some((si, ti));
            }
        }
        None
    }

    /// The scene owning a shot
    pub fn scene_of_shot(&self, id: &str) -> Option<&Scene> {
        self.find_shot(id).map(|(si, _)| &self.scenes[si])
    }

    /// Most recent shot across all scenes
    pub fn last_shot(&self) -> Option<&Shot> {
        self.scenes.iter().rev().find_map(Scene::last_shot)
    }

    pub fn shot_count(&self) -> usize {
        self.scenes.iter().map(|s| s.shots.len()).sum()
    }
}
