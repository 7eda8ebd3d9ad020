//! Text overlay drawn on top of labelled bodies.
//!
//! Each drawable label gets its own `Text2d` entity. After Rapier writes body poses back to
//! `Transform` and before transforms propagate, every overlay copies its body's live pose, so
//! the rendered text is centred on the body in the frame that shows it.
use bevy::asset::LoadState;
use bevy::prelude::*;
use bevy::sprite::Anchor;

use crate::app::listeners::{host_listener_active, HostEventKind};
use crate::core::components::{BodyLabel, SceneEntity};
use crate::core::config::LabConfig;
use crate::core::system::system_order::OverlaySet;
use crate::physics::factory::SceneBodies;

const LOG_TARGET: &str = "labels";

/// In front of every body.
pub const LABEL_Z: f32 = 20.0;
pub const LABEL_Z_STEP: f32 = 0.01;

/// Overlay text bound to one body.
#[derive(Component, Debug, Clone, Copy)]
pub struct LabelOverlay {
    pub body: Entity,
}

pub struct LabelOverlayPlugin;

impl Plugin for LabelOverlayPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            PostUpdate,
            sync_label_overlays
                .in_set(OverlaySet)
                .run_if(host_listener_active(HostEventKind::FrameRendered)),
        )
        .add_systems(Update, fall_back_on_missing_font);
    }
}

/// One overlay per drawable label, in scene order (later entries stack on top).
pub fn spawn_label_overlays(
    mut commands: Commands,
    cfg: Res<LabConfig>,
    bodies: Option<Res<SceneBodies>>,
    labels: Query<(&BodyLabel, &Transform)>,
    asset_server: Option<Res<AssetServer>>,
) {
    let Some(bodies) = bodies else {
        return;
    };
    let font = match (&cfg.labels.font, asset_server) {
        (Some(path), Some(server)) => server.load(path.clone()),
        _ => Handle::default(),
    };
    let mut spawned = 0usize;
    for &body in &bodies.0 {
        let Ok((label, body_tf)) = labels.get(body) else {
            continue;
        };
        if !label.is_drawable() {
            continue;
        }
        let z = LABEL_Z + spawned as f32 * LABEL_Z_STEP;
        commands.spawn((
            Name::new(format!("Label:{}", label.0)),
            SceneEntity,
            LabelOverlay { body },
            Text2d::new(label.0.clone()),
            TextFont {
                font: font.clone(),
                font_size: cfg.labels.font_size,
                ..default()
            },
            TextColor(cfg.labels.color.color()),
            TextLayout::new_with_justify(JustifyText::Center),
            Anchor::Center,
            Transform {
                translation: body_tf.translation.truncate().extend(z),
                rotation: body_tf.rotation,
                scale: Vec3::ONE,
            },
        ));
        spawned += 1;
    }
    debug!(target: LOG_TARGET, "{spawned} label overlays");
}

/// Copies each body's live pose onto its overlay; overlays of vanished bodies are removed.
pub fn sync_label_overlays(
    mut commands: Commands,
    mut overlays: Query<(Entity, &LabelOverlay, &mut Transform)>,
    bodies: Query<&Transform, Without<LabelOverlay>>,
) {
    for (entity, overlay, mut tf) in &mut overlays {
        let Ok(body_tf) = bodies.get(overlay.body) else {
            commands.entity(entity).despawn();
            continue;
        };
        tf.translation.x = body_tf.translation.x;
        tf.translation.y = body_tf.translation.y;
        tf.rotation = body_tf.rotation;
    }
}

/// A configured font that fails to load is swapped for the built-in one so labels still render.
pub fn fall_back_on_missing_font(
    asset_server: Option<Res<AssetServer>>,
    mut fonts: Query<&mut TextFont, With<LabelOverlay>>,
) {
    let Some(server) = asset_server else {
        return;
    };
    let mut swapped = 0usize;
    for mut text_font in &mut fonts {
        if text_font.font == Handle::default() {
            continue;
        }
        if let Some(LoadState::Failed(err)) = server.get_load_state(text_font.font.id()) {
            if swapped == 0 {
                warn!(target: LOG_TARGET, "label font failed to load ({err}); using the built-in font");
            }
            text_font.font = Handle::default();
            swapped += 1;
        }
    }
}
