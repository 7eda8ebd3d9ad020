use std::fmt;

use bevy::color::{Color, Srgba};
use serde::Deserialize;

use crate::core::config::ConfigError;

/// Kind of body a descriptor asks for.
///
/// Configuration text that names no known kind deserialises into [`ShapeKind::Unrecognized`];
/// the body factory produces nothing for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum ShapeKind {
    Capsule,
    Circle,
    Squiggle,
    Flower,
    Hexagon,
    Unrecognized(String),
}

impl ShapeKind {
    pub const KNOWN: [ShapeKind; 5] = [
        ShapeKind::Capsule,
        ShapeKind::Circle,
        ShapeKind::Squiggle,
        ShapeKind::Flower,
        ShapeKind::Hexagon,
    ];

    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "capsule" => Self::Capsule,
            "circle" => Self::Circle,
            "squiggle" => Self::Squiggle,
            "flower" => Self::Flower,
            "hexagon" => Self::Hexagon,
            _ => Self::Unrecognized(name.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Capsule => "capsule",
            Self::Circle => "circle",
            Self::Squiggle => "squiggle",
            Self::Flower => "flower",
            Self::Hexagon => "hexagon",
            Self::Unrecognized(name) => name,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl From<String> for ShapeKind {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `#RRGGBB` style colour as written in the scene table.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct HexColor(pub Srgba);

impl HexColor {
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Srgba::hex(text)
            .map(HexColor)
            .map_err(|e| ConfigError::Color {
                value: text.to_string(),
                reason: e.to_string(),
            })
    }

    pub fn color(&self) -> Color {
        Color::Srgba(self.0)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

/// One entry of the declarative scene table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShapeDescriptor {
    /// Overlay label; empty means no text is drawn.
    #[serde(default)]
    pub text: String,
    pub color: HexColor,
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    /// Horizontal position on a 0..1000 scale of the current viewport width.
    #[serde(rename = "x")]
    pub x_fraction: f32,
    /// Absolute vertical position in viewport units.
    pub y: f32,
    /// Initial rotation in radians.
    #[serde(default)]
    pub rotate: Option<f32>,
    #[serde(default)]
    pub radius: Option<f32>,
    #[serde(default)]
    pub sides: Option<u32>,
}

impl ShapeDescriptor {
    pub fn new(kind: ShapeKind, color: &str, x_fraction: f32, y: f32) -> Self {
        Self {
            text: String::new(),
            color: HexColor::parse(color).unwrap_or(HexColor(Srgba::WHITE)),
            kind,
            x_fraction,
            y,
            rotate: None,
            radius: None,
            sides: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_rotation(mut self, radians: f32) -> Self {
        self.rotate = Some(radians);
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn with_sides(mut self, sides: u32) -> Self {
        self.sides = Some(sides);
        self
    }
}
