use bevy::prelude::*;

use crate::core::scene::ShapeKind;

/// Everything created by a mount carries this marker; unmount despawns all of it.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct SceneEntity;

/// A dynamic body built from one scene descriptor.
#[derive(Component, Debug, Clone)]
pub struct LabBody {
    pub kind: ShapeKind,
    /// Index of the source descriptor in the scene table.
    pub index: usize,
}

/// Label tag attached to every body. Empty (or the engine default) means no overlay.
#[derive(Component, Debug, Clone, Default, Deref, PartialEq, Eq)]
pub struct BodyLabel(pub String);

impl BodyLabel {
    /// Label a rigid body gets when nobody names it.
    pub const ENGINE_DEFAULT: &'static str = "Body";

    pub fn is_drawable(&self) -> bool {
        !self.0.is_empty() && self.0 != Self::ENGINE_DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallSide {
    Ground,
    Ceiling,
    Left,
    Right,
}

impl WallSide {
    pub const ALL: [WallSide; 4] = [Self::Ground, Self::Ceiling, Self::Left, Self::Right];

    pub fn name(self) -> &'static str {
        match self {
            Self::Ground => "WallGround",
            Self::Ceiling => "WallCeiling",
            Self::Left => "WallLeft",
            Self::Right => "WallRight",
        }
    }
}

/// One of the four static, invisible boundary walls.
#[derive(Component, Debug, Clone, Copy)]
pub struct BoundaryWall {
    pub side: WallSide,
}
