//! Registry of host-level (window-wide) listeners.
//!
//! Window-scoped reactions (resize, global release, post-frame overlay) only run while a
//! listener of their kind is subscribed here. Every subscription taken at mount is recorded in
//! [`MountedListeners`] and handed back on unmount, so the active count always returns to its
//! pre-mount baseline.
use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostEventKind {
    Resize,
    PointerRelease,
    /// Fires once per completed frame, after the bodies are drawn.
    FrameRendered,
}

impl HostEventKind {
    pub const ALL: [HostEventKind; 3] = [Self::Resize, Self::PointerRelease, Self::FrameRendered];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerHandle {
    pub kind: HostEventKind,
    id: u64,
}

#[derive(Resource, Debug, Default)]
pub struct HostListeners {
    next_id: u64,
    active: Vec<ListenerHandle>,
}

impl HostListeners {
    pub fn subscribe(&mut self, kind: HostEventKind) -> ListenerHandle {
        let handle = ListenerHandle {
            kind,
            id: self.next_id,
        };
        self.next_id += 1;
        self.active.push(handle);
        handle
    }

    /// Returns false for a handle that was never subscribed or is already gone.
    pub fn unsubscribe(&mut self, handle: ListenerHandle) -> bool {
        let Some(pos) = self.active.iter().position(|h| *h == handle) else {
            return false;
        };
        self.active.swap_remove(pos);
        true
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn count(&self, kind: HostEventKind) -> usize {
        self.active.iter().filter(|h| h.kind == kind).count()
    }

    pub fn is_subscribed(&self, kind: HostEventKind) -> bool {
        self.active.iter().any(|h| h.kind == kind)
    }
}

/// Handles acquired by the current mount.
#[derive(Resource, Debug, Default)]
pub struct MountedListeners(pub Vec<ListenerHandle>);

/// Run condition: true while at least one listener of `kind` is subscribed.
pub fn host_listener_active(kind: HostEventKind) -> impl FnMut(Option<Res<HostListeners>>) -> bool + Clone {
    move |listeners: Option<Res<HostListeners>>| {
        listeners.is_some_and(|l| l.is_subscribed(kind))
    }
}

pub fn subscribe_host_listeners(mut commands: Commands, mut listeners: ResMut<HostListeners>) {
    let handles = HostEventKind::ALL
        .iter()
        .map(|&kind| listeners.subscribe(kind))
        .collect::<Vec<_>>();
    commands.insert_resource(MountedListeners(handles));
}

pub fn unsubscribe_host_listeners(
    mut commands: Commands,
    mut listeners: ResMut<HostListeners>,
    mounted: Option<Res<MountedListeners>>,
) {
    if let Some(mounted) = mounted {
        for handle in &mounted.0 {
            if !listeners.unsubscribe(*handle) {
                warn!(target: "lifecycle", "listener {:?} was already gone", handle.kind);
            }
        }
    }
    commands.remove_resource::<MountedListeners>();
}
