use bevy::input::mouse::MouseButtonInput;
use bevy::input::touch::TouchInput;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::window::{PrimaryWindow, WindowEvent, WindowFocused, WindowResized};
use bevy_rapier2d::plugin::PhysicsSet;

use super::listeners::{
    host_listener_active, subscribe_host_listeners, unsubscribe_host_listeners, HostEventKind,
    HostListeners,
};
use super::state::SceneState;
use crate::core::components::SceneEntity;
use crate::core::config::LabConfig;
use crate::core::system::system_order::{OverlaySet, PointerInputSet, PrePhysicsSet};
use crate::core::viewport::Viewport;
use crate::interaction::{attach_pointer_controls, detach_pointer_controls, InteractionPlugin};
use crate::physics::boundary::walls::{reposition_walls_on_resize, spawn_boundary_walls};
use crate::physics::boundary::BoundaryWalls;
use crate::physics::factory::{spawn_scene_bodies, SceneBodies};
use crate::physics::rapier::rapier_physics::{pause_physics, resume_physics};
use crate::rendering::camera::{align_scene_camera, spawn_scene_camera};
use crate::rendering::labels::{spawn_label_overlays, LabelOverlayPlugin};

const LOG_TARGET: &str = "lifecycle";

/// Request to build the scene into the primary window.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct MountScene;

/// Request to tear the running scene down.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct UnmountScene;

/// Mount/unmount state machine plus everything a mounted scene runs.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<StatesPlugin>() {
            app.add_plugins(StatesPlugin);
        }
        // Host events the scene listens to. Registering twice is harmless, and headless apps
        // (no window/input plugins) still get the queues.
        app.add_event::<WindowResized>()
            .add_event::<WindowFocused>()
            .add_event::<WindowEvent>()
            .add_event::<MouseButtonInput>()
            .add_event::<TouchInput>();
        app.init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<ColorMaterial>>();
        if !app.world().contains_resource::<LabConfig>() {
            app.insert_resource(LabConfig::default());
        }

        app.init_state::<SceneState>()
            .init_resource::<HostListeners>()
            .add_event::<MountScene>()
            .add_event::<UnmountScene>()
            .configure_sets(Update, (PointerInputSet, PrePhysicsSet.after(PointerInputSet)))
            .configure_sets(
                PostUpdate,
                OverlaySet
                    .after(PhysicsSet::Writeback)
                    .before(TransformSystem::TransformPropagate),
            )
            .add_plugins((InteractionPlugin, LabelOverlayPlugin))
            .add_systems(Startup, request_initial_mount)
            .add_systems(PreUpdate, process_scene_requests)
            .add_systems(
                OnEnter(SceneState::Running),
                (
                    capture_viewport,
                    subscribe_host_listeners,
                    spawn_scene_camera,
                    spawn_boundary_walls,
                    spawn_scene_bodies,
                    spawn_label_overlays,
                    attach_pointer_controls,
                    resume_physics,
                    log_mounted,
                )
                    .chain(),
            )
            .add_systems(
                OnExit(SceneState::Running),
                (
                    unsubscribe_host_listeners,
                    detach_pointer_controls,
                    despawn_scene,
                    pause_physics,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    reposition_walls_on_resize
                        .run_if(host_listener_active(HostEventKind::Resize))
                        .before(PointerInputSet),
                    align_scene_camera,
                )
                    .chain()
                    .run_if(in_state(SceneState::Running)),
            );
    }
}

fn request_initial_mount(cfg: Res<LabConfig>, mut mounts: EventWriter<MountScene>) {
    if cfg.auto_mount {
        mounts.write(MountScene);
    }
}

/// Applies pending mount/unmount requests. An unmount wins over a mount sent in the same frame.
pub fn process_scene_requests(
    mut mounts: EventReader<MountScene>,
    mut unmounts: EventReader<UnmountScene>,
    state: Res<State<SceneState>>,
    mut next: ResMut<NextState<SceneState>>,
    primary: Query<(), With<PrimaryWindow>>,
) {
    let mount = mounts.read().count() > 0;
    let unmount = unmounts.read().count() > 0;
    let current = *state.get();
    if unmount {
        if current == SceneState::Running {
            next.set(SceneState::Stopped);
        } else {
            debug!(target: LOG_TARGET, "unmount ignored in {current:?}");
        }
        return;
    }
    if !mount {
        return;
    }
    if !current.accepts_mount() {
        debug!(target: LOG_TARGET, "mount ignored in {current:?}");
        return;
    }
    if primary.is_empty() {
        // the surface may legitimately not exist yet
        debug!(target: LOG_TARGET, "mount ignored: no primary window");
        return;
    }
    next.set(SceneState::Running);
}

fn capture_viewport(
    mut commands: Commands,
    cfg: Res<LabConfig>,
    primary: Query<(Entity, &Window), With<PrimaryWindow>>,
) {
    let Ok((surface, window)) = primary.single() else {
        warn!(target: LOG_TARGET, "primary window vanished during mount");
        return;
    };
    let viewport = Viewport::new(surface, window.width().max(1.0), cfg.viewport.height);
    info!(
        target: LOG_TARGET,
        "mounting into {surface:?} ({}x{})", viewport.width, viewport.height
    );
    commands.insert_resource(viewport);
}

fn log_mounted(listeners: Res<HostListeners>, bodies: Option<Res<SceneBodies>>) {
    info!(
        target: LOG_TARGET,
        "scene running: {} bodies, {} host listeners",
        bodies.map_or(0, |b| b.0.len()),
        listeners.active_count()
    );
}

/// Unmount: every entity the mount created goes, and so do the per-mount resources.
pub fn despawn_scene(mut commands: Commands, scene: Query<Entity, With<SceneEntity>>) {
    let mut count = 0usize;
    for entity in &scene {
        commands.entity(entity).despawn();
        count += 1;
    }
    commands.remove_resource::<SceneBodies>();
    commands.remove_resource::<BoundaryWalls>();
    commands.remove_resource::<Viewport>();
    info!(target: LOG_TARGET, "scene stopped, {count} entities despawned");
}
