use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResolution};
use physics_lab::app::listeners::{HostEventKind, HostListeners};
use physics_lab::core::components::{LabBody, SceneEntity};
use physics_lab::physics::factory::SceneBodies;
use physics_lab::{LabConfig, MountScene, SceneState, ScenePlugin, UnmountScene};

fn test_app() -> App {
    let cfg = LabConfig {
        auto_mount: false,
        ..Default::default()
    };
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(cfg);
    // No Rapier: lifecycle and placement only
    app.add_plugins(ScenePlugin);
    app.update();
    app
}

fn spawn_surface(app: &mut App, width: f32, height: f32) -> Entity {
    app.world_mut()
        .spawn((
            Window {
                resolution: WindowResolution::new(width, height),
                ..default()
            },
            PrimaryWindow,
        ))
        .id()
}

fn state(app: &App) -> SceneState {
    *app.world().resource::<State<SceneState>>().get()
}

fn listener_count(app: &App) -> usize {
    app.world().resource::<HostListeners>().active_count()
}

fn scene_entity_count(app: &mut App) -> usize {
    let world = app.world_mut();
    world.query_filtered::<Entity, With<SceneEntity>>().iter(world).count()
}

fn mount(app: &mut App) {
    app.world_mut().send_event(MountScene);
    app.update();
}

fn unmount(app: &mut App) {
    app.world_mut().send_event(UnmountScene);
    app.update();
}

#[test]
fn unmount_returns_listeners_to_baseline() {
    let mut app = test_app();
    spawn_surface(&mut app, 1000.0, 600.0);
    let baseline = listener_count(&app);

    mount(&mut app);
    assert_eq!(state(&app), SceneState::Running);
    assert_eq!(listener_count(&app), baseline + HostEventKind::ALL.len());
    for kind in HostEventKind::ALL {
        assert!(app.world().resource::<HostListeners>().is_subscribed(kind));
    }

    unmount(&mut app);
    assert_eq!(state(&app), SceneState::Stopped);
    assert_eq!(listener_count(&app), baseline);
    assert_eq!(scene_entity_count(&mut app), 0);
    assert!(!app.world().contains_resource::<SceneBodies>());
}

#[test]
fn remount_builds_an_equivalent_fresh_scene() {
    let mut app = test_app();
    spawn_surface(&mut app, 1000.0, 600.0);

    mount(&mut app);
    let first_entities = scene_entity_count(&mut app);
    let first_bodies = app.world().resource::<SceneBodies>().0.len();
    let first_listeners = listener_count(&app);
    unmount(&mut app);

    mount(&mut app);
    assert_eq!(state(&app), SceneState::Running);
    assert_eq!(scene_entity_count(&mut app), first_entities);
    assert_eq!(app.world().resource::<SceneBodies>().0.len(), first_bodies);
    assert_eq!(listener_count(&app), first_listeners);
}

#[test]
fn repeated_mount_does_not_stack_listeners() {
    let mut app = test_app();
    spawn_surface(&mut app, 1000.0, 600.0);
    mount(&mut app);
    let count = listener_count(&app);
    mount(&mut app);
    assert_eq!(listener_count(&app), count);
}

#[test]
fn mount_without_surface_is_a_no_op() {
    let mut app = test_app();
    mount(&mut app);
    assert_eq!(state(&app), SceneState::Uninitialized);
    assert_eq!(listener_count(&app), 0);
    assert_eq!(scene_entity_count(&mut app), 0);
}

#[test]
fn unmount_before_mount_is_ignored() {
    let mut app = test_app();
    spawn_surface(&mut app, 1000.0, 600.0);
    unmount(&mut app);
    assert_eq!(state(&app), SceneState::Uninitialized);
}

#[test]
fn first_body_sits_at_scaled_x_before_any_step() {
    let mut app = test_app();
    spawn_surface(&mut app, 1000.0, 600.0);
    mount(&mut app);

    let world = app.world_mut();
    let (tf, _) = world
        .query::<(&Transform, &LabBody)>()
        .iter(world)
        .find(|(_, body)| body.index == 0)
        .expect("first scene body spawned");
    assert!((tf.translation.x - 160.0).abs() < 1e-3, "x={}", tf.translation.x);
    // viewport y=400 is world y=-400
    assert!((tf.translation.y + 400.0).abs() < 1e-3, "y={}", tf.translation.y);
}

#[test]
fn narrow_surface_scales_positions() {
    let mut app = test_app();
    spawn_surface(&mut app, 500.0, 600.0);
    mount(&mut app);

    let world = app.world_mut();
    let xs: Vec<(usize, f32)> = world
        .query::<(&Transform, &LabBody)>()
        .iter(world)
        .map(|(tf, body)| (body.index, tf.translation.x))
        .collect();
    let x0 = xs.iter().find(|(i, _)| *i == 0).map(|(_, x)| *x);
    assert_eq!(xs.len(), 10);
    assert!(x0.is_some_and(|x| (x - 80.0).abs() < 1e-3));
}
