//! Central system ordering labels to make update sequence explicit.
//! Stages (high-level):
//! 1. PointerInput (window input -> pointer tracker, global release correction)
//! 2. PrePhysics (drag constraint edits velocities before Rapier)
//! 3. Rapier (handled by plugin, PostUpdate)
//! 4. Overlay (label transforms follow bodies after writeback, before propagation)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PointerInputSet; // pointer state is final for the frame after this

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PrePhysicsSet; // velocity edits applied before physics simulation step

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct OverlaySet; // per-frame reaction to the completed physics/draw state
