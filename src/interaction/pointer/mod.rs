pub mod global_release;
pub mod tracker;

pub use global_release::GlobalPointerRelease;
pub use tracker::{PointerButton, PointerStream, PointerTracker};
