pub mod label_overlay;

pub use label_overlay::{spawn_label_overlays, LabelOverlay, LabelOverlayPlugin};
