use bevy::prelude::*;

/// Scene lifecycle.
/// Uninitialized -> Running <-> Stopped
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum SceneState {
    /// Nothing built yet.
    #[default]
    Uninitialized,
    /// World populated, physics stepping, listeners attached.
    Running,
    /// Torn down; a new mount rebuilds everything from scratch.
    Stopped,
}

impl SceneState {
    pub fn accepts_mount(self) -> bool {
        matches!(self, Self::Uninitialized | Self::Stopped)
    }
}
