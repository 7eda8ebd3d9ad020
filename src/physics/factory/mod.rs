//! Scene descriptors -> rigid bodies.
pub mod body_factory;
pub mod geometry;
pub mod spawn;

pub use body_factory::{build_body, BodyShape, BodySpec, GeometryRecipe, Primitive};
pub use spawn::{spawn_scene_bodies, SceneBodies};
