use std::io::Write;

use physics_lab::core::scene::ShapeKind;
use physics_lab::{ConfigError, LabConfig};

fn write_layer(dir: &tempfile::TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut f = std::fs::File::create(&path).expect("create layer");
    f.write_all(body.as_bytes()).expect("write layer");
    path
}

#[test]
fn later_layers_override_earlier_ones() {
    let dir = tempfile::tempdir().expect("tempdir");
    let base = write_layer(
        &dir,
        "lab.ron",
        "(window: (width: 1200.0, title: \"Base\"), drag: (stiffness: 0.3))",
    );
    let local = write_layer(&dir, "lab.local.ron", "(window: (width: 800.0))");

    let (cfg, used, errors) = LabConfig::load_layered([&base, &local]);
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(used.len(), 2);
    assert_eq!(cfg.window.width, 800.0);
    // nested fields from the base layer survive the merge
    assert_eq!(cfg.window.title, "Base");
    assert!((cfg.drag.stiffness - 0.3).abs() < f32::EPSILON);
    assert_eq!(cfg.boundary.thickness, 1000.0);
}

#[test]
fn missing_layer_is_reported_not_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let base = write_layer(&dir, "lab.ron", "(auto_mount: false)");
    let missing = dir.path().join("nope.ron");

    let (cfg, used, errors) = LabConfig::load_layered([base, missing]);
    assert!(!cfg.auto_mount);
    assert_eq!(used.len(), 1);
    assert!(matches!(errors.as_slice(), [ConfigError::Read { .. }]));
}

#[test]
fn broken_layer_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let bad = write_layer(&dir, "lab.ron", "(window: (width: ");
    let (cfg, used, errors) = LabConfig::load_layered([bad]);
    assert!(used.is_empty());
    assert!(matches!(errors.as_slice(), [ConfigError::Parse { .. }]));
    assert_eq!(cfg, LabConfig::default());
}

#[test]
fn bad_colour_is_a_config_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_layer(&dir, "lab.ron", "(background: \"#GGHHII\")");
    assert!(LabConfig::load_from_file(&path).is_err());
    let (cfg, _, errors) = LabConfig::load_layered([path]);
    assert!(matches!(errors.as_slice(), [ConfigError::Merge(_)]));
    assert_eq!(cfg.background, LabConfig::default().background);
}

#[test]
fn scene_override_replaces_table_and_keeps_unknown_kinds() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_layer(
        &dir,
        "lab.ron",
        r##"(scene: [
            (color: "#9797FF", type: "circle", x: 500.0, y: 100.0),
            (color: "#9797FF", type: "cloud", x: 500.0, y: 100.0),
        ])"##,
    );
    let cfg = LabConfig::load_from_file(&path).expect("valid file");
    assert_eq!(cfg.scene.len(), 2);
    assert_eq!(cfg.scene[1].kind, ShapeKind::Unrecognized("cloud".into()));
    assert!(cfg.validate().iter().any(|w| w.contains("cloud")));
}

#[test]
fn shipped_config_parses() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/config/lab.ron");
    let cfg = LabConfig::load_from_file(path).expect("shipped config parses");
    assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
    assert_eq!(cfg.scene.len(), 10);
}
