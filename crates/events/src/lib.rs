//! Synthetic page events and a single-threaded subscription bus.
//!
//! Handlers are plain closures over `(&Event, &mut Node)`, so behaviors can
//! be driven in tests by direct invocation with synthetic events instead of
//! living inside anonymous listeners on ambient document state.

use dom::{Id, Node};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    Click,
    Scroll,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    Click {
        target: Id,
    },
    /// Vertical page scroll offset in px from the top; never negative.
    Scroll {
        offset_y: f32,
    },
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Click { .. } => EventKind::Click,
            Event::Scroll { .. } => EventKind::Scroll,
        }
    }
}

pub type Handler = Box<dyn FnMut(&Event, &mut Node)>;

/// Synchronous event bus. One registration per handler; dispatch runs every
/// matching handler in registration order on the calling thread. Scroll
/// events are delivered as-is, one handler run per event, no coalescing.
pub struct EventBus {
    handlers: Vec<(EventKind, Handler)>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, kind: EventKind, handler: Handler) {
        self.handlers.push((kind, handler));
    }

    pub fn dispatch(&mut self, event: &Event, dom: &mut Node) {
        log::trace!(target: "events.bus", "dispatch {event:?}");
        for (kind, handler) in self.handlers.iter_mut() {
            if *kind == event.kind() {
                handler(event, dom);
            }
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
