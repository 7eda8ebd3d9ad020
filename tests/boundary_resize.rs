use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized, WindowResolution};
use physics_lab::core::components::WallSide;
use physics_lab::core::viewport::Viewport;
use physics_lab::physics::boundary::{BoundaryWalls, WallLayout};
use physics_lab::{LabConfig, ScenePlugin};

fn mounted_app() -> (App, Entity) {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(LabConfig::default());
    app.add_plugins(ScenePlugin);
    let surface = app
        .world_mut()
        .spawn((
            Window {
                resolution: WindowResolution::new(1000.0, 600.0),
                ..default()
            },
            PrimaryWindow,
        ))
        .id();
    app.update();
    (app, surface)
}

fn wall_positions(app: &App) -> Vec<(Entity, Vec3)> {
    let walls = *app.world().resource::<BoundaryWalls>();
    WallSide::ALL
        .iter()
        .map(|&side| {
            let e = walls.entity(side);
            let tf = app.world().get::<Transform>(e).expect("wall transform");
            (e, tf.translation)
        })
        .collect()
}

fn resize(app: &mut App, window: Entity, width: f32) {
    app.world_mut().send_event(WindowResized {
        window,
        width,
        height: 600.0,
    });
    app.update();
}

#[test]
fn resize_round_trip_restores_walls() {
    let (mut app, surface) = mounted_app();
    let original = wall_positions(&app);

    resize(&mut app, surface, 1600.0);
    let wide = wall_positions(&app);
    assert_eq!(app.world().resource::<Viewport>().width, 1600.0);
    let walls = *app.world().resource::<BoundaryWalls>();
    let right = app.world().get::<Transform>(walls.right).expect("right wall");
    assert_eq!(right.translation.x, 1600.0 + 500.0);
    // left wall does not depend on width
    assert_eq!(wide[2].1, original[2].1);

    resize(&mut app, surface, 1000.0);
    let back = wall_positions(&app);
    assert_eq!(back, original, "walls keep identity and return to the original layout");
}

#[test]
fn repeated_resize_is_idempotent() {
    let (mut app, surface) = mounted_app();
    resize(&mut app, surface, 1200.0);
    let once = wall_positions(&app);
    resize(&mut app, surface, 1200.0);
    assert_eq!(wall_positions(&app), once);
}

#[test]
fn resize_of_another_window_is_ignored() {
    let (mut app, _) = mounted_app();
    let original = wall_positions(&app);
    let other = app.world_mut().spawn(Window::default()).id();
    resize(&mut app, other, 300.0);
    assert_eq!(wall_positions(&app), original);
    assert_eq!(app.world().resource::<Viewport>().width, 1000.0);
}

#[test]
fn minimised_window_keeps_the_layout() {
    let (mut app, surface) = mounted_app();
    let original = wall_positions(&app);
    app.world_mut().send_event(WindowResized {
        window: surface,
        width: 0.0,
        height: 0.0,
    });
    app.update();
    assert_eq!(wall_positions(&app), original);
    assert_eq!(app.world().resource::<Viewport>().width, 1000.0);

    // restoring afterwards still lays the walls out for the new width
    resize(&mut app, surface, 1200.0);
    let walls = *app.world().resource::<BoundaryWalls>();
    let right = app.world().get::<Transform>(walls.right).expect("right wall");
    assert_eq!(right.translation.x, 1200.0 + 500.0);
}

#[test]
fn walls_hold_fast_bodies_for_one_step() {
    let cfg = LabConfig::default();
    let dt = 1.0 / cfg.physics.timestep_hz;
    // well past anything gravity produces inside a 600 unit tall box
    let terminal = cfg.drag.max_speed;
    for width in [320.0, 1000.0, 2560.0] {
        let layout = WallLayout::new(width, cfg.viewport.height, cfg.boundary.thickness);
        assert!(layout.max_safe_speed(dt) > terminal);
        let edges = [
            (Vec2::new(width * 0.5, 0.0), Vec2::new(0.0, -terminal)),
            (Vec2::new(width * 0.5, cfg.viewport.height), Vec2::new(0.0, terminal)),
            (Vec2::new(0.0, 300.0), Vec2::new(-terminal, 0.0)),
            (Vec2::new(width, 300.0), Vec2::new(terminal, 0.0)),
            (Vec2::new(width, cfg.viewport.height), Vec2::splat(terminal * 0.7)),
        ];
        for (pos, vel) in edges {
            assert!(
                layout.contains_step(pos, vel, dt),
                "width {width}: {pos} + {vel}*dt escapes"
            );
        }
    }
}

#[test]
fn thin_walls_would_leak() {
    let layout = WallLayout::new(1000.0, 600.0, 20.0);
    let dt = 1.0 / 60.0;
    assert!(!layout.contains_step(Vec2::new(1000.0, 300.0), Vec2::new(20_000.0, 0.0), dt));
}
