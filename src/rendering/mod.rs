pub mod bodies;
pub mod camera;
pub mod labels;
