#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use bevy_rapier2d::prelude::Velocity;

#[cfg(feature = "debug")]
use crate::app::listeners::HostListeners;
#[cfg(feature = "debug")]
use crate::core::components::LabBody;
#[cfg(feature = "debug")]
use crate::interaction::drag::DragConstraint;

#[cfg(feature = "debug")]
#[derive(Resource, Debug)]
pub struct DebugLogState {
    pub time_accum: f32,
    pub log_interval: f32,
    pub frame_counter: u64,
}

#[cfg(feature = "debug")]
impl Default for DebugLogState {
    fn default() -> Self {
        Self {
            time_accum: 0.0,
            log_interval: 1.0,
            frame_counter: 0,
        }
    }
}

#[cfg(feature = "debug")]
pub fn debug_logging_system(
    time: Res<Time>,
    mut state: ResMut<DebugLogState>,
    listeners: Res<HostListeners>,
    drag: Option<Res<DragConstraint>>,
    bodies: Query<&Velocity, With<LabBody>>,
) {
    state.frame_counter += 1;
    state.time_accum += time.delta_secs();
    if state.time_accum < state.log_interval {
        return;
    }
    state.time_accum = 0.0;
    let (count, max_speed) = bodies
        .iter()
        .fold((0usize, 0.0_f32), |(n, m), v| (n + 1, m.max(v.linvel.length())));
    info!(
        target: "sim",
        "SIM frame={} t={:.3}s bodies={} max_speed={:.1} dragging={} listeners={}",
        state.frame_counter,
        time.elapsed_secs(),
        count,
        max_speed,
        drag.and_then(|d| d.body()).is_some(),
        listeners.active_count()
    );
}
