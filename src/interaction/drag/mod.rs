pub mod drag_constraint;

pub use drag_constraint::{apply_drag_constraint, update_drag_constraint, DragConstraint};
