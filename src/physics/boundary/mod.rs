pub mod walls;

pub use walls::{create_walls, reposition_walls, BoundaryWalls, WallLayout, WallPlacement};
