pub mod camera;

pub use camera::{align_scene_camera, spawn_scene_camera, SceneCamera};
