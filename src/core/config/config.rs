use bevy::color::Srgba;
use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

use super::ConfigError;
use crate::core::scene::{default_scene, HexColor, ShapeDescriptor};

/// Fixed playground height the scene table is laid out against.
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 600.0;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    pub resizable: bool,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: DEFAULT_VIEWPORT_HEIGHT,
            title: "Physics Lab".into(),
            resizable: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ViewportConfig {
    pub height: f32,
}
impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BoundaryConfig {
    /// Wall thickness; large enough that no body crosses a wall within one step.
    pub thickness: f32,
}
impl Default for BoundaryConfig {
    fn default() -> Self {
        Self { thickness: 1000.0 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Downward acceleration in viewport units per second squared.
    pub gravity: f32,
    pub pixels_per_meter: f32,
    pub friction: f32,
    pub restitution: f32,
    /// Fixed step the stability checks assume.
    pub timestep_hz: f32,
}
impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 1000.0,
            pixels_per_meter: 100.0,
            friction: 0.1,
            restitution: 0.0,
            timestep_hz: 60.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DragConfig {
    pub enabled: bool,
    pub stiffness: f32,
    pub max_speed: f32,
}
impl Default for DragConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            stiffness: 0.2,
            max_speed: 20_000.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LabelConfig {
    pub font_size: f32,
    pub color: HexColor,
    /// Bold font asset path. The embedded fallback only covers ASCII, so CJK labels need this.
    pub font: Option<String>,
}
/// Bold sans with CJK coverage, relative to the asset root.
pub const DEFAULT_LABEL_FONT: &str = "fonts/NotoSansSC-Bold.otf";
impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            font_size: 15.0,
            color: HexColor(Srgba::BLACK),
            font: Some(DEFAULT_LABEL_FONT.to_string()),
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct LabConfig {
    pub window: WindowConfig,
    pub viewport: ViewportConfig,
    pub boundary: BoundaryConfig,
    pub physics: PhysicsConfig,
    pub drag: DragConfig,
    pub labels: LabelConfig,
    pub background: HexColor,
    pub auto_mount: bool,
    pub rapier_debug: bool,
    pub scene: Vec<ShapeDescriptor>,
}
impl Default for LabConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            viewport: Default::default(),
            boundary: Default::default(),
            physics: Default::default(),
            drag: Default::default(),
            labels: Default::default(),
            background: HexColor(Srgba::WHITE),
            auto_mount: true,
            rapier_debug: false,
            scene: default_scene(DEFAULT_VIEWPORT_HEIGHT),
        }
    }
}

impl LabConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<ConfigError>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Loads each layer in order, deep-merging RON maps so later files override earlier ones.
    /// Returns the config, the layers actually used and every problem met along the way.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<ConfigError>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut Value, overlay: Value) {
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let existing = bm.iter_mut().find(|(ek, _)| **ek == k).map(|(_, ev)| ev);
                        if let Some(ev) = existing {
                            merge_value(ev, v);
                        } else {
                            bm.insert(k, v);
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.display().to_string());
                    }
                    Err(source) => errors.push(ConfigError::Parse {
                        path: path_ref.to_path_buf(),
                        source,
                    }),
                },
                Err(source) => errors.push(ConfigError::Read {
                    path: path_ref.to_path_buf(),
                    source,
                }),
            }
        }
        let Some(val) = merged else {
            return (LabConfig::default(), used, errors);
        };
        match val.into_rust::<LabConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(source) => {
                errors.push(ConfigError::Merge(source));
                (LabConfig::default(), used, errors)
            }
        }
    }

    /// Non-fatal sanity checks; each entry is a human readable warning.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.viewport.height <= 0.0 {
            w.push(format!("viewport.height {} must be > 0", self.viewport.height));
        }
        if self.boundary.thickness <= 0.0 {
            w.push("boundary.thickness must be > 0".into());
        }
        let dt = 1.0 / self.physics.timestep_hz.max(1.0);
        if self.drag.max_speed * dt >= self.boundary.thickness {
            w.push(format!(
                "drag.max_speed {} covers {:.0} units per step, not less than boundary.thickness {}; fast throws may tunnel",
                self.drag.max_speed,
                self.drag.max_speed * dt,
                self.boundary.thickness
            ));
        }
        if self.physics.gravity < 0.0 {
            w.push(format!(
                "physics.gravity is negative ({}); bodies will fall upwards",
                self.physics.gravity
            ));
        }
        if self.physics.pixels_per_meter <= 0.0 {
            w.push("physics.pixels_per_meter must be > 0".into());
        }
        if self.drag.enabled && !(0.0..=1.0).contains(&self.drag.stiffness) {
            w.push(format!(
                "drag.stiffness {} outside 0..1",
                self.drag.stiffness
            ));
        }
        if self.labels.font_size <= 0.0 {
            w.push("labels.font_size must be > 0".into());
        }
        if self.labels.font.is_none() {
            if let Some((i, d)) = self
                .scene
                .iter()
                .enumerate()
                .find(|(_, d)| !d.text.is_ascii())
            {
                w.push(format!(
                    "scene[{i}] label '{}' is not ASCII but labels.font is unset; the built-in font will draw blanks",
                    d.text
                ));
            }
        }
        for (i, d) in self.scene.iter().enumerate() {
            if !d.kind.is_recognized() {
                w.push(format!(
                    "scene[{i}] has unrecognized type '{}'; it will be skipped",
                    d.kind
                ));
            }
            if !(0.0..=1000.0).contains(&d.x_fraction) {
                w.push(format!(
                    "scene[{i}].x {} outside the 0..1000 width scale",
                    d.x_fraction
                ));
            }
            if matches!(d.sides, Some(s) if s < 3) {
                w.push(format!("scene[{i}].sides < 3; drawn as a circle"));
            }
        }
        if self.scene.is_empty() {
            w.push("scene is empty; nothing will spawn".into());
        }
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scene::ShapeKind;

    #[test]
    fn defaults_validate_clean() {
        let cfg = LabConfig::default();
        assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
        assert_eq!(cfg.viewport.height, 600.0);
        assert_eq!(cfg.boundary.thickness, 1000.0);
        assert!((cfg.drag.stiffness - 0.2).abs() < f32::EPSILON);
    }

    #[test]
    fn slow_walls_are_flagged() {
        let mut cfg = LabConfig::default();
        cfg.boundary.thickness = 50.0;
        let warns = cfg.validate().join("\n");
        assert!(warns.contains("tunnel"), "{warns}");
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let cfg: LabConfig = ron::from_str("(boundary: (thickness: 1500.0))").unwrap();
        assert_eq!(cfg.boundary.thickness, 1500.0);
        assert_eq!(cfg.window, WindowConfig::default());
        assert_eq!(cfg.scene.len(), 10);
    }

    #[test]
    fn default_labels_name_a_cjk_font() {
        let cfg = LabConfig::default();
        assert_eq!(cfg.labels.font.as_deref(), Some(DEFAULT_LABEL_FONT));
        // omitting the field keeps it
        let partial: LabConfig = ron::from_str("(labels: (font_size: 18.0))").unwrap();
        assert_eq!(partial.labels.font.as_deref(), Some(DEFAULT_LABEL_FONT));
    }

    #[test]
    fn non_ascii_labels_without_font_warn() {
        let mut cfg = LabConfig::default();
        cfg.labels.font = None;
        let warns = cfg.validate().join("\n");
        assert!(warns.contains("labels.font is unset"), "{warns}");

        for d in &mut cfg.scene {
            if !d.text.is_empty() {
                d.text = "Join us".into();
            }
        }
        assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
    }

    #[test]
    fn unknown_scene_kind_warns() {
        let mut cfg = LabConfig::default();
        cfg.scene[0].kind = ShapeKind::parse("blob");
        assert!(cfg.validate().iter().any(|w| w.contains("blob")));
    }
}
