//! Buffered input events and first-responder dispatch.
//!
//! Controls read the live [`Input`](crate::Input) fields directly. Events are
//! an opt-in layer on top: every input call also appends an [`Event`], and
//! at the end of the frame each buffered event is offered once to the
//! handlers registered during that frame.
//!
//! Pointer events travel along the containers under the mouse, keyboard
//! events along the scopes that enclosed the focused control when it got
//! focus. Global handlers go first, then scoped ones; within each group the
//! most recently registered handler is asked first. A handler that returns
//! `true` consumes the event.

use std::fmt;
use std::rc::Rc;

use bitflags::bitflags;

use crate::{Id, Key, MouseButton, Vec2};

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct EventKind: u16 {
        const MOUSE_MOVE = 1;
        const MOUSE_DOWN = 1 << 1;
        const MOUSE_UP = 1 << 2;
        const KEY_DOWN = 1 << 3;
        const KEY_UP = 1 << 4;
        const SCROLL = 1 << 5;
        const TEXT = 1 << 6;

        const POINTER = Self::MOUSE_MOVE.bits()
            | Self::MOUSE_DOWN.bits()
            | Self::MOUSE_UP.bits()
            | Self::SCROLL.bits();
        const KEYBOARD = Self::KEY_DOWN.bits() | Self::KEY_UP.bits() | Self::TEXT.bits();
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    MouseMove { pos: Vec2, delta: Vec2 },
    MouseDown { pos: Vec2, button: MouseButton },
    MouseUp { pos: Vec2, button: MouseButton },
    KeyDown { key: Key },
    KeyUp { key: Key },
    Scroll { delta: Vec2 },
    Text(String),
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::MouseMove { .. } => EventKind::MOUSE_MOVE,
            Event::MouseDown { .. } => EventKind::MOUSE_DOWN,
            Event::MouseUp { .. } => EventKind::MOUSE_UP,
            Event::KeyDown { .. } => EventKind::KEY_DOWN,
            Event::KeyUp { .. } => EventKind::KEY_UP,
            Event::Scroll { .. } => EventKind::SCROLL,
            Event::Text(_) => EventKind::TEXT,
        }
    }

    pub fn is_pointer(&self) -> bool {
        EventKind::POINTER.contains(self.kind())
    }
}

pub type EventCallback = Rc<dyn Fn(&Event) -> bool>;

#[derive(Clone)]
pub struct Handler {
    /// Owning scope; `Id::NONE` matches every target.
    pub scope: Id,
    pub kinds: EventKind,
    pub callback: EventCallback,
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("scope", &self.scope)
            .field("kinds", &self.kinds)
            .field("callback", &"<callback>")
            .finish()
    }
}

impl Handler {
    fn applies(&self, event: &Event, path: &[Id], target: Id) -> bool {
        if !self.kinds.intersects(event.kind()) {
            return false;
        }
        self.scope == target || self.scope.is_none() || path.contains(&self.scope)
    }
}

/// Handlers registered during the current frame.
#[derive(Clone, Debug, Default)]
pub struct Handlers {
    scoped: Vec<Handler>,
    global: Vec<Handler>,
}

impl Handlers {
    pub fn register(&mut self, scope: Id, kinds: EventKind, callback: EventCallback) {
        self.scoped.push(Handler {
            scope,
            kinds,
            callback,
        });
    }

    pub fn register_global(&mut self, kinds: EventKind, callback: EventCallback) {
        self.global.push(Handler {
            scope: Id::NONE,
            kinds,
            callback,
        });
    }

    pub fn clear(&mut self) {
        self.scoped.clear();
        self.global.clear();
    }

    pub fn len(&self) -> usize {
        self.scoped.len() + self.global.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Offers `event` along `path` towards `target`. Returns whether a
    /// handler consumed it.
    pub fn dispatch(&self, event: &Event, path: &[Id], target: Id) -> bool {
        let chain = self.global.iter().rev().chain(self.scoped.iter().rev());
        for handler in chain {
            if handler.applies(event, path, target) && (handler.callback)(event) {
                log::trace!("event {:?} consumed by handler scoped to {}", event.kind(), handler.scope);
                return true;
            }
        }
        false
    }
}

/// Where the frame's events are routed.
#[derive(Clone, Copy, Debug)]
pub struct Routes<'a> {
    /// Containers under the pointer, outermost first.
    pub hovered: &'a [Id],
    /// Scopes enclosing the focused control when it took focus.
    pub focus_path: &'a [Id],
    pub focus: Id,
}

pub fn dispatch_all(handlers: &Handlers, events: &[Event], routes: Routes<'_>) {
    if events.is_empty() || handlers.is_empty() {
        return;
    }
    let hover_target = routes.hovered.last().copied().unwrap_or(Id::NONE);
    for event in events {
        if event.is_pointer() {
            handlers.dispatch(event, routes.hovered, hover_target);
        } else {
            handlers.dispatch(event, routes.focus_path, routes.focus);
        }
    }
}
