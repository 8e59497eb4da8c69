//! Pure reducer for the editor state machine
//!
//! Every arm returns a fresh successor state; the input is never
//! mutated. Any action whose target is missing is a no-op that
//! returns a clone of the input.

use tracing::debug;

use crate::engine::{hit_from, resolve_return};
use crate::models::{
    clamp_curve, new_id, Bounce, PixelPoint, Scene, Shot, ShotType, Side, GRID_COLS, GRID_ROWS,
};

use super::actions::{Action, PlayerId};
use super::{EditorState, PendingShot, Phase};

pub fn reduce(state: &EditorState, action: &Action) -> EditorState {
    match action {
        Action::SetShotType { shot_type } => set_shot_type(state, *shot_type),
        Action::SetCurve { delta } => set_curve(state, *delta),
        Action::SetPlayerPos { player, x, y } => {
            set_player_pos(state, *player, PixelPoint::new(*x, *y))
        }
        Action::SetDefaultPositions { p1, p2 } => {
            let mut next = state.clone();
            next.p1_default = Some(*p1);
            next.p2_default = Some(*p2);
            // seed icons that have never been placed
            next.p1_icon = next.p1_icon.or(Some(*p1));
            next.p2_icon = next.p2_icon.or(Some(*p2));
            next
        }
        Action::SetCharacters { p1, p2 } => {
            let mut next = state.clone();
            next.p1_character = p1.clone();
            next.p2_character = p2.clone();
            next
        }
        Action::CellTapped { r, c, x, y } => cell_tapped(state, *r, *c, *x, *y),
        Action::PreviewReturn { x, y } => preview_return(state, PixelPoint::new(*x, *y)),
        Action::FinalizeReturn { x, y } => finalize_return(state, PixelPoint::new(*x, *y)),
        Action::SelectScene { id } => select_scene(state, id.as_deref()),
        Action::SelectShot { id } => select_shot(state, id.as_deref()),
        Action::AddScene => add_scene(state),
        Action::DeleteScene => delete_scene(state),
        Action::MoveScene { id, delta } => move_scene(state, id, *delta),
        Action::AddShot => add_shot(state),
        Action::DeleteShot => delete_shot(state),
        Action::SetSubtitle { id, text } => set_subtitle(state, id, text),
        Action::SetSubtitleDraft { text } => {
            let mut next = state.clone();
            next.subtitle_draft = text.clone();
            next
        }
        Action::SetStar { id, pos } => set_star(state, id, *pos),
        Action::SetPendingStar { pos } => set_pending_star(state, *pos),
        Action::Undo => undo(state),
        Action::Reset => reset(state),
    }
}

/// Commit the pending shot using the receiver's last-known icon
/// position, so starting a new bounce never drops placed work.
fn auto_finalize(state: &EditorState) -> EditorState {
    match &state.phase {
        Phase::Awaiting { pending } => {
            let drop_at = state
                .icon_of(state.receiver())
                .unwrap_or_else(|| pending.bounce.pixel());
            commit_pending(state, drop_at)
        }
        _ => state.clone(),
    }
}

/// Turn the pending shot into a finalized shot inside a new scene.
fn commit_pending(state: &EditorState, drop_at: PixelPoint) -> EditorState {
    let Phase::Awaiting { pending } = &state.phase else {
        return state.clone();
    };

    let resolution = resolve_return(
        pending.hit_from,
        pending.bounce.pixel(),
        drop_at,
        state.active_side,
    );

    let shot = Shot {
        id: new_id(),
        hit_from: pending.hit_from,
        bounce: pending.bounce,
        return_at: resolution.return_at,
        player_at: drop_at,
        shot_side: resolution.shot_side,
        shot_type: pending.shot_type,
        curve_level: pending.curve_level,
        star_pos: pending.star_pos,
        prev_p1: state.p1_icon,
        prev_p2: state.p2_icon,
    };

    let mut next = state.clone();
    match next.receiver() {
        PlayerId::P1 => next.p1_icon = Some(drop_at),
        PlayerId::P2 => next.p2_icon = Some(drop_at),
    }
    let p1_pos = next.p1_icon.or(next.p1_default).unwrap_or_default();
    let p2_pos = next.p2_icon.or(next.p2_default).unwrap_or_default();

    let scene = Scene {
        id: new_id(),
        p1_pos,
        p2_pos,
        subtitle: next.subtitle_draft.clone(),
        star_pos: pending.star_pos,
        shots: vec![shot],
    };

    debug!(scene = %scene.id, side = ?resolution.shot_side, "shot finalized");

    next.document.selected_scene_id = Some(scene.id.clone());
    next.document.selected_shot_id = Some(scene.shots[0].id.clone());
    next.document.scenes.push(scene);
    next.phase = Phase::Idle;
    next.drag_preview = None;
    next
}

fn cell_tapped(state: &EditorState, r: u8, c: u8, x: f32, y: f32) -> EditorState {
    if r >= GRID_ROWS || c >= GRID_COLS {
        return state.clone();
    }

    let mut next = auto_finalize(state);
    let side = Side::of_row(r);
    let strike = hit_from(&next.document.scenes, side, next.p1_icon, next.p2_icon);

    debug!(r, c, ?side, "bounce placed");

    next.active_side = side;
    next.phase = Phase::Awaiting {
        pending: PendingShot {
            hit_from: strike,
            bounce: Bounce::new(r, c, x, y),
            shot_type: next.default_shot_type,
            curve_level: next.default_curve_level,
            star_pos: None,
        },
    };
    next.document.selected_scene_id = None;
    next.document.selected_shot_id = None;
    next.drag_preview = None;
    next
}

fn preview_return(state: &EditorState, at: PixelPoint) -> EditorState {
    match state.phase {
        Phase::Awaiting { .. } | Phase::Editing => {
            let mut next = state.clone();
            next.drag_preview = Some(at);
            next
        }
        Phase::Idle => state.clone(),
    }
}

fn finalize_return(state: &EditorState, at: PixelPoint) -> EditorState {
    match &state.phase {
        Phase::Awaiting { .. } => commit_pending(state, at),
        Phase::Editing => update_selected_return(state, at),
        Phase::Idle => state.clone(),
    }
}

/// Re-resolve the selected shot's return after the receiver icon moved.
fn update_selected_return(state: &EditorState, at: PixelPoint) -> EditorState {
    let Some(shot) = state.document.selected_shot() else {
        return state.clone();
    };
    let shot_id = shot.id.clone();
    // the receiver for classification is fixed by where the ball bounced
    let side = shot.bounce.side();
    let resolution = resolve_return(shot.hit_from, shot.bounce.pixel(), at, side);

    let mut next = state.clone();
    if let Some((si, ti)) = next.document.find_shot(&shot_id) {
        let shot = &mut next.document.scenes[si].shots[ti];
        shot.return_at = resolution.return_at;
        shot.player_at = at;
        shot.shot_side = resolution.shot_side;
        match side {
            Side::Bottom => {
                next.document.scenes[si].p1_pos = at;
                next.p1_icon = Some(at);
            }
            Side::Top => {
                next.document.scenes[si].p2_pos = at;
                next.p2_icon = Some(at);
            }
        }
    }
    next.drag_preview = None;
    next
}

fn set_shot_type(state: &EditorState, shot_type: ShotType) -> EditorState {
    let mut next = state.clone();
    next.default_shot_type = shot_type;
    match &mut next.phase {
        Phase::Awaiting { pending } => pending.shot_type = shot_type,
        _ => {
            if let Some(id) = next.document.selected_shot().map(|s| s.id.clone()) {
                if let Some((si, ti)) = next.document.find_shot(&id) {
                    next.document.scenes[si].shots[ti].shot_type = shot_type;
                }
            }
        }
    }
    next
}

fn set_curve(state: &EditorState, delta: i32) -> EditorState {
    let mut next = state.clone();
    match &mut next.phase {
        Phase::Awaiting { pending } => {
            pending.curve_level = clamp_curve((pending.curve_level as i32).saturating_add(delta));
        }
        _ => {
            if let Some(id) = next.document.selected_shot().map(|s| s.id.clone()) {
                if let Some((si, ti)) = next.document.find_shot(&id) {
                    let shot = &mut next.document.scenes[si].shots[ti];
                    shot.curve_level = clamp_curve((shot.curve_level as i32).saturating_add(delta));
                }
            } else {
                next.default_curve_level =
                    clamp_curve((next.default_curve_level as i32).saturating_add(delta));
            }
        }
    }
    next
}

fn set_player_pos(state: &EditorState, player: PlayerId, at: PixelPoint) -> EditorState {
    if !state.can_reposition(player) {
        return state.clone();
    }

    let mut next = state.clone();
    match player {
        PlayerId::P1 => next.p1_icon = Some(at),
        PlayerId::P2 => next.p2_icon = Some(at),
    }
    next.drag_preview = None;

    if matches!(next.phase, Phase::Editing) {
        if let Some(scene_id) = next.document.selected_scene().map(|s| s.id.clone()) {
            if let Some(scene) = next.document.scene_mut(&scene_id) {
                match player {
                    PlayerId::P1 => scene.p1_pos = at,
                    PlayerId::P2 => scene.p2_pos = at,
                }
            }
        }
        // when the hitter moves, the shot's strike point follows
        if let Some(id) = next.document.selected_shot().map(|s| s.id.clone()) {
            if let Some((si, ti)) = next.document.find_shot(&id) {
                let shot = &mut next.document.scenes[si].shots[ti];
                let hitter = match shot.bounce.side() {
                    Side::Top => PlayerId::P1,
                    Side::Bottom => PlayerId::P2,
                };
                if player == hitter {
                    shot.hit_from = at;
                }
            }
        }
    }
    next
}

fn select_scene(state: &EditorState, id: Option<&str>) -> EditorState {
    let Some(id) = id else {
        let mut next = state.clone();
        next.document.selected_scene_id = None;
        next.document.selected_shot_id = None;
        if matches!(next.phase, Phase::Editing) {
            next.phase = Phase::Idle;
        }
        return next;
    };

    let mut next = auto_finalize(state);
    let Some(scene) = next.document.scene(id).cloned() else {
        return next;
    };

    next.document.selected_scene_id = Some(scene.id.clone());
    next.document.selected_shot_id = None;
    next.p1_icon = Some(scene.p1_pos);
    next.p2_icon = Some(scene.p2_pos);
    next.subtitle_draft = scene.subtitle.clone();
    if let Some(shot) = scene.last_shot() {
        next.active_side = shot.bounce.side();
        next.default_shot_type = shot.shot_type;
        next.phase = Phase::Editing;
    } else {
        next.phase = Phase::Idle;
    }
    next.drag_preview = None;
    next
}

fn select_shot(state: &EditorState, id: Option<&str>) -> EditorState {
    let Some(id) = id else {
        let mut next = state.clone();
        next.document.selected_shot_id = None;
        if matches!(next.phase, Phase::Editing) {
            next.phase = Phase::Idle;
        }
        return next;
    };

    let mut next = auto_finalize(state);
    let Some((si, ti)) = next.document.find_shot(id) else {
        return next;
    };

    let scene = &next.document.scenes[si];
    let shot = &scene.shots[ti];
    next.active_side = shot.bounce.side();
    next.default_shot_type = shot.shot_type;
    next.p1_icon = Some(scene.p1_pos);
    next.p2_icon = Some(scene.p2_pos);
    next.subtitle_draft = scene.subtitle.clone();
    next.document.selected_scene_id = Some(scene.id.clone());
    next.document.selected_shot_id = Some(shot.id.clone());
    next.phase = Phase::Editing;
    next.drag_preview = None;
    next
}

fn add_scene(state: &EditorState) -> EditorState {
    let mut next = auto_finalize(state);
    let Some(source) = next.document.selected_scene().cloned() else {
        return next;
    };

    let clone = source.duplicate();
    next.document.selected_scene_id = Some(clone.id.clone());
    next.document.selected_shot_id = clone.last_shot().map(|s| s.id.clone());
    next.p1_icon = Some(clone.p1_pos);
    next.p2_icon = Some(clone.p2_pos);
    next.subtitle_draft = clone.subtitle.clone();
    if let Some(shot) = clone.last_shot() {
        next.active_side = shot.bounce.side();
        next.phase = Phase::Editing;
    } else {
        next.phase = Phase::Idle;
    }
    next.document.scenes.push(clone);
    next.drag_preview = None;
    next
}

fn delete_scene(state: &EditorState) -> EditorState {
    // a pending shot blocks structural deletes
    if state.is_awaiting_return() {
        return state.clone();
    }
    // the document keeps at least one scene once the rally has begun
    if state.document.scenes.len() <= 1 {
        return state.clone();
    }
    let Some(target) = state.document.selected_scene().map(|s| s.id.clone()) else {
        return state.clone();
    };

    let mut next = state.clone();
    next.document.scenes.retain(|s| s.id != target);

    let last = next.document.scenes.last().cloned();
    next.document.selected_shot_id = None;
    match last {
        Some(scene) => {
            next.document.selected_scene_id = Some(scene.id.clone());
            next.p1_icon = Some(scene.p1_pos);
            next.p2_icon = Some(scene.p2_pos);
            next.subtitle_draft = scene.subtitle.clone();
            if let Some(shot) = scene.last_shot() {
                next.active_side = shot.bounce.side();
                next.phase = Phase::Editing;
            } else {
                next.phase = Phase::Idle;
            }
        }
        None => {
            next.document.selected_scene_id = None;
            next.phase = Phase::Idle;
        }
    }
    next.drag_preview = None;
    next
}

fn move_scene(state: &EditorState, id: &str, delta: i32) -> EditorState {
    let Some(from) = state.document.scenes.iter().position(|s| s.id == id) else {
        return state.clone();
    };
    let to = from as i64 + delta as i64;
    if to < 0 || to >= state.document.scenes.len() as i64 {
        return state.clone();
    }

    let mut next = state.clone();
    let scene = next.document.scenes.remove(from);
    next.document.scenes.insert(to as usize, scene);
    next
}

fn add_shot(state: &EditorState) -> EditorState {
    let mut next = auto_finalize(state);
    let Some(source) = next.document.selected_shot().cloned() else {
        return next;
    };
    let Some((si, _)) = next.document.find_shot(&source.id) else {
        return next;
    };

    let copy = source.duplicate();
    next.document.selected_scene_id = Some(next.document.scenes[si].id.clone());
    next.document.selected_shot_id = Some(copy.id.clone());
    next.active_side = copy.bounce.side();
    next.document.scenes[si].shots.push(copy);
    next.phase = Phase::Editing;
    next.drag_preview = None;
    next
}

fn delete_shot(state: &EditorState) -> EditorState {
    if state.is_awaiting_return() {
        return state.clone();
    }
    let Some(id) = state.document.selected_shot().map(|s| s.id.clone()) else {
        return state.clone();
    };

    let mut next = state.clone();
    let Some((si, ti)) = next.document.find_shot(&id) else {
        return next;
    };
    next.document.scenes[si].shots.remove(ti);
    // drop the scene if it emptied, unless it is the last one, which
    // stays as an empty placeholder
    let scene_id = next.document.scenes[si].id.clone();
    if next.document.scenes[si].shots.is_empty() && next.document.scenes.len() > 1 {
        next.document.scenes.remove(si);
        next.document.selected_scene_id = None;
    } else {
        next.document.selected_scene_id = Some(scene_id);
    }
    next.document.selected_shot_id = None;
    next.phase = if next.document.shot_count() == 0 {
        Phase::Idle
    } else {
        Phase::Editing
    };
    next.drag_preview = None;
    next
}

fn set_subtitle(state: &EditorState, id: &str, text: &str) -> EditorState {
    let mut next = state.clone();
    let Some(scene) = next.document.scene_mut(id) else {
        return state.clone();
    };
    scene.subtitle = text.to_string();
    if next.document.selected_scene().map(|s| s.id.as_str()) == Some(id) {
        next.subtitle_draft = text.to_string();
    }
    next
}

fn set_star(state: &EditorState, id: &str, pos: Option<PixelPoint>) -> EditorState {
    let mut next = state.clone();
    let Some(scene) = next.document.scene_mut(id) else {
        return state.clone();
    };
    scene.star_pos = pos;
    next
}

fn set_pending_star(state: &EditorState, pos: Option<PixelPoint>) -> EditorState {
    let mut next = state.clone();
    match &mut next.phase {
        Phase::Awaiting { pending } => {
            pending.star_pos = pos;
            next
        }
        _ => state.clone(),
    }
}

fn undo(state: &EditorState) -> EditorState {
    if state.is_awaiting_return() {
        debug!("pending shot discarded");
        let mut next = state.clone();
        next.phase = Phase::Idle;
        next.drag_preview = None;
        return next;
    }

    let Some(shot) = state.document.last_shot().cloned() else {
        return state.clone();
    };

    let mut next = state.clone();
    if let Some((si, ti)) = next.document.find_shot(&shot.id) {
        next.document.scenes[si].shots.remove(ti);
        if next.document.scenes[si].shots.is_empty() {
            next.document.scenes.remove(si);
        }
    }
    debug!(shot = %shot.id, "shot undone");
    // both icons roll back to where they stood before the shot
    next.p1_icon = shot.prev_p1;
    next.p2_icon = shot.prev_p2;
    next.document.selected_scene_id = None;
    next.document.selected_shot_id = None;
    next.phase = Phase::Idle;
    next.drag_preview = None;
    next
}

fn reset(state: &EditorState) -> EditorState {
    debug!("session reset");
    let mut next = EditorState::new();
    next.p1_default = state.p1_default;
    next.p2_default = state.p2_default;
    next.p1_icon = state.p1_default;
    next.p2_icon = state.p2_default;
    next.p1_character = state.p1_character.clone();
    next.p2_character = state.p2_character.clone();
    next.default_shot_type = state.default_shot_type;
    next.default_curve_level = state.default_curve_level;
    next
}
