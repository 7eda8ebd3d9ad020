//! Pointer tracking bound to the render surface.
//!
//! The tracker mirrors what a canvas-scoped mouse abstraction sees: cursor position, the held
//! button and at most one buffered down/up sample per frame. Presses and releases are only
//! recorded while the cursor is over the surface, which is exactly why a release outside the
//! surface needs the window-level correction in `global_release`.
use bevy::input::touch::TouchPhase;
use bevy::input::ButtonState;
use bevy::prelude::*;
use bevy::window::WindowEvent;

const LOG_TARGET: &str = "pointer";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerButton {
    /// Nothing held (also the state before any input arrived).
    #[default]
    Released,
    Primary,
    Secondary,
}

/// Input streams the tracker can subscribe to on its surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerStream {
    Move,
    Button,
    Wheel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Subscriptions {
    moves: bool,
    buttons: bool,
    wheel: bool,
}

#[derive(Resource, Debug, Clone)]
pub struct PointerTracker {
    surface: Entity,
    subscriptions: Subscriptions,
    position: Option<Vec2>,
    inside: bool,
    button: PointerButton,
    pending_down: Option<Vec2>,
    pending_up: Option<Vec2>,
    wheel_delta: f32,
}

impl PointerTracker {
    /// Tracker bound to `surface`, subscribed to every stream.
    pub fn bind(surface: Entity) -> Self {
        Self {
            surface,
            subscriptions: Subscriptions {
                moves: true,
                buttons: true,
                wheel: true,
            },
            position: None,
            inside: false,
            button: PointerButton::Released,
            pending_down: None,
            pending_up: None,
            wheel_delta: 0.0,
        }
    }

    pub fn surface(&self) -> Entity {
        self.surface
    }

    pub fn is_subscribed(&self, stream: PointerStream) -> bool {
        match stream {
            PointerStream::Move => self.subscriptions.moves,
            PointerStream::Button => self.subscriptions.buttons,
            PointerStream::Wheel => self.subscriptions.wheel,
        }
    }

    pub fn unsubscribe(&mut self, stream: PointerStream) {
        match stream {
            PointerStream::Move => self.subscriptions.moves = false,
            PointerStream::Button => self.subscriptions.buttons = false,
            PointerStream::Wheel => {
                self.subscriptions.wheel = false;
                self.wheel_delta = 0.0;
            }
        }
    }

    /// Last known pointer position, viewport space.
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    pub fn is_inside(&self) -> bool {
        self.inside
    }

    pub fn button(&self) -> PointerButton {
        self.button
    }

    pub fn pending_down(&self) -> Option<Vec2> {
        self.pending_down
    }

    pub fn pending_up(&self) -> Option<Vec2> {
        self.pending_up
    }

    /// Accumulated wheel delta; stays zero once the wheel stream is dropped.
    pub fn wheel_delta(&self) -> f32 {
        self.wheel_delta
    }

    pub fn take_down(&mut self) -> Option<Vec2> {
        self.pending_down.take()
    }

    pub fn clear_source_events(&mut self) {
        self.pending_down = None;
        self.pending_up = None;
        self.wheel_delta = 0.0;
    }

    /// Ends whatever interaction the tracker believes is going on.
    ///
    /// Only acts when the primary button is held or nothing is (a secondary-button gesture is
    /// left alone). Returns whether the state was coerced.
    pub fn force_release(&mut self) -> bool {
        if !matches!(self.button, PointerButton::Primary | PointerButton::Released) {
            return false;
        }
        self.button = PointerButton::Released;
        self.pending_down = None;
        self.pending_up = None;
        true
    }

    pub fn move_to(&mut self, position: Vec2) {
        if self.subscriptions.moves {
            self.position = Some(position);
        }
    }

    pub fn enter(&mut self) {
        self.inside = true;
    }

    pub fn leave(&mut self) {
        self.inside = false;
    }

    pub fn press(&mut self, button: PointerButton, position: Vec2) {
        if !self.subscriptions.buttons || !self.inside {
            return;
        }
        self.position = Some(position);
        self.button = button;
        self.pending_down = Some(position);
    }

    pub fn release(&mut self, position: Vec2) {
        if !self.subscriptions.buttons || !self.inside {
            return;
        }
        self.position = Some(position);
        self.button = PointerButton::Released;
        self.pending_up = Some(position);
    }

    pub fn scroll(&mut self, delta: f32) {
        if self.subscriptions.wheel {
            self.wheel_delta += delta;
        }
    }
}

fn map_button(button: MouseButton) -> Option<PointerButton> {
    match button {
        MouseButton::Left => Some(PointerButton::Primary),
        MouseButton::Right => Some(PointerButton::Secondary),
        _ => None,
    }
}

/// Feeds surface window input into the tracker, in the order the host delivered it.
pub fn track_pointer(tracker: Option<ResMut<PointerTracker>>, mut events: EventReader<WindowEvent>) {
    let Some(mut tracker) = tracker else {
        events.clear();
        return;
    };
    let surface = tracker.surface();
    for event in events.read() {
        match event {
            WindowEvent::CursorEntered(ev) if ev.window == surface => tracker.enter(),
            WindowEvent::CursorLeft(ev) if ev.window == surface => tracker.leave(),
            WindowEvent::CursorMoved(ev) if ev.window == surface => {
                tracker.enter();
                tracker.move_to(ev.position);
            }
            WindowEvent::MouseButtonInput(ev) if ev.window == surface => {
                let (Some(button), Some(position)) = (map_button(ev.button), tracker.position())
                else {
                    continue;
                };
                match ev.state {
                    ButtonState::Pressed => tracker.press(button, position),
                    ButtonState::Released => tracker.release(position),
                }
            }
            WindowEvent::TouchInput(ev) if ev.window == surface => match ev.phase {
                TouchPhase::Started => {
                    tracker.enter();
                    tracker.move_to(ev.position);
                    tracker.press(PointerButton::Primary, ev.position);
                }
                TouchPhase::Moved => tracker.move_to(ev.position),
                TouchPhase::Ended | TouchPhase::Canceled => tracker.release(ev.position),
            },
            // dropped stream: the host page keeps the scroll
            WindowEvent::MouseWheel(ev) if ev.window == surface => tracker.scroll(ev.y),
            _ => {}
        }
    }
    if let Some(down) = tracker.pending_down() {
        trace!(target: LOG_TARGET, "pointer down at {down}");
    }
}
