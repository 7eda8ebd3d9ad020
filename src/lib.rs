pub mod app;
pub mod core;
pub mod debug;
pub mod interaction;
pub mod physics;
pub mod rendering;

// Curated re-exports
pub use app::lab::PhysicsLabPlugin;
pub use app::lifecycle::{MountScene, ScenePlugin, UnmountScene};
pub use app::state::SceneState;
pub use core::config::{config::WindowConfig, ConfigError, LabConfig};
pub use core::scene::{ShapeDescriptor, ShapeKind};
