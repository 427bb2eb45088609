//! Raw input state and the option/result flag sets shared by all controls.

use bitflags::bitflags;

use crate::error::{UsageError, fatal};
use crate::Vec2;

/// Bytes of typed text buffered per frame, terminator slot included.
pub const INPUT_TEXT_SIZE: usize = 32;

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MouseButton: u8 {
        const LEFT = 1;
        const RIGHT = 1 << 1;
        const MIDDLE = 1 << 2;
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Key: u8 {
        const SHIFT = 1;
        const CTRL = 1 << 1;
        const ALT = 1 << 2;
        const BACKSPACE = 1 << 3;
        const RETURN = 1 << 4;
        const TAB = 1 << 5;
    }
}

bitflags! {
    /// Behaviour switches for controls and containers.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Options: u32 {
        const ALIGN_CENTER = 1;
        const ALIGN_RIGHT = 1 << 1;
        const NO_INTERACT = 1 << 2;
        const NO_FRAME = 1 << 3;
        const NO_RESIZE = 1 << 4;
        const NO_SCROLL = 1 << 5;
        const NO_CLOSE = 1 << 6;
        const NO_TITLE = 1 << 7;
        /// Keep focus after the mouse button is released (drag controls,
        /// text boxes).
        const HOLD_FOCUS = 1 << 8;
        const AUTO_SIZE = 1 << 9;
        const POPUP = 1 << 10;
        /// Look the container up without creating it.
        const CLOSED = 1 << 11;
        /// Header/tree node starts expanded.
        const EXPANDED = 1 << 12;
        /// Re-apply the caller's rectangle every frame.
        const FIXED_SIZE = 1 << 13;
    }
}

bitflags! {
    /// What happened to a control this frame.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Response: u8 {
        const ACTIVE = 1;
        const SUBMIT = 1 << 1;
        const CHANGE = 1 << 2;
    }
}

/// Input as seen by controls: current levels plus this frame's edges.
#[derive(Clone, Debug, Default)]
pub struct Input {
    pub mouse_pos: Vec2,
    pub last_mouse_pos: Vec2,
    pub mouse_delta: Vec2,
    pub scroll_delta: Vec2,
    pub mouse_down: MouseButton,
    pub mouse_pressed: MouseButton,
    pub mouse_released: MouseButton,
    pub key_down: Key,
    pub key_pressed: Key,
    text: String,
}

impl Input {
    pub fn text(&self) -> &str {
        &self.text
    }

    #[track_caller]
    pub fn push_text(&mut self, text: &str) {
        let len = self.text.len() + text.len();
        if len >= INPUT_TEXT_SIZE {
            fatal(UsageError::TextOverflow {
                len,
                capacity: INPUT_TEXT_SIZE - 1,
            });
        }
        self.text.push_str(text);
    }

    /// Runs at frame start: derives the mouse delta.
    pub(crate) fn prelude(&mut self) {
        self.mouse_delta = Vec2::new(
            self.mouse_pos.x - self.last_mouse_pos.x,
            self.mouse_pos.y - self.last_mouse_pos.y,
        );
    }

    /// Runs at frame end: drops every edge-triggered field.
    pub(crate) fn epilogue(&mut self) {
        self.key_pressed = Key::empty();
        self.text.clear();
        self.mouse_pressed = MouseButton::empty();
        self.mouse_released = MouseButton::empty();
        self.scroll_delta = Vec2::ZERO;
        self.last_mouse_pos = self.mouse_pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epilogue_clears_edges_not_levels() {
        let mut i = Input::default();
        i.mouse_down = MouseButton::LEFT;
        i.mouse_pressed = MouseButton::LEFT;
        i.key_down = Key::SHIFT;
        i.key_pressed = Key::SHIFT | Key::TAB;
        i.mouse_pos = Vec2::new(4, 5);
        i.push_text("ab");
        i.epilogue();
        assert_eq!(i.mouse_down, MouseButton::LEFT);
        assert!(i.mouse_pressed.is_empty());
        assert_eq!(i.key_down, Key::SHIFT);
        assert!(i.key_pressed.is_empty());
        assert_eq!(i.text(), "");
        assert_eq!(i.last_mouse_pos, Vec2::new(4, 5));
    }

    #[test]
    fn prelude_computes_delta() {
        let mut i = Input::default();
        i.last_mouse_pos = Vec2::new(10, 10);
        i.mouse_pos = Vec2::new(13, 8);
        i.prelude();
        assert_eq!(i.mouse_delta, Vec2::new(3, -2));
    }

    #[test]
    #[should_panic(expected = "text input overflow")]
    fn text_accumulator_is_bounded() {
        let mut i = Input::default();
        i.push_text(&"x".repeat(20));
        i.push_text(&"y".repeat(12));
    }
}
