use crate::error::{UsageError, fatal};
use crate::stack::FixedStack;
use crate::Rect;

pub const CLIP_STACK_SIZE: usize = 32;

/// How a rectangle relates to the active clip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Clip {
    /// Entirely visible; draw without clipping.
    None,
    /// Straddles an edge; the backend has to scissor this draw.
    Part,
    /// Entirely outside; skip it.
    All,
}

/// Nested clip rectangles. Each push is intersected with the current top, so
/// the visible area only ever shrinks while nesting.
#[derive(Clone, Debug)]
pub struct ClipStack {
    stack: FixedStack<Rect, CLIP_STACK_SIZE>,
}

impl Default for ClipStack {
    fn default() -> Self {
        Self {
            stack: FixedStack::new("clip"),
        }
    }
}

impl ClipStack {
    /// Intersects with the current top. With nothing pushed yet the rect is
    /// taken as is.
    pub fn push(&mut self, rect: Rect) {
        let r = match self.stack.last() {
            Some(top) => rect.intersect(top),
            None => rect,
        };
        self.stack.push(r);
    }

    /// Pushes without intersecting. Root containers use this so a window
    /// begun inside another window is not clipped to it.
    pub fn push_unclipped(&mut self) {
        self.stack.push(Rect::UNCLIPPED);
    }

    pub fn pop(&mut self) -> Rect {
        self.stack.pop()
    }

    #[track_caller]
    pub fn current(&self) -> Rect {
        match self.stack.last() {
            Some(r) => *r,
            None => fatal(UsageError::Missing {
                what: "clip rectangle",
            }),
        }
    }

    /// Classifies `r` against the current clip. Touching an edge counts as
    /// overlapping.
    pub fn check(&self, r: Rect) -> Clip {
        let cr = self.current();
        if r.x > cr.right() || r.right() < cr.x || r.y > cr.bottom() || r.bottom() < cr.y {
            return Clip::All;
        }
        if r.x >= cr.x && r.right() <= cr.right() && r.y >= cr.y && r.bottom() <= cr.bottom() {
            return Clip::None;
        }
        Clip::Part
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn expect_empty(&self) {
        self.stack.expect_empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack_with(r: Rect) -> ClipStack {
        let mut s = ClipStack::default();
        s.push_unclipped();
        s.push(r);
        s
    }

    #[test]
    fn straddling_right_edge_is_partial() {
        let s = stack_with(Rect::new(0, 0, 100, 50));
        assert_eq!(s.check(Rect::new(80, 10, 40, 12)), Clip::Part);
    }

    #[test]
    fn inside_and_outside() {
        let s = stack_with(Rect::new(0, 0, 100, 50));
        assert_eq!(s.check(Rect::new(10, 10, 20, 20)), Clip::None);
        assert_eq!(s.check(Rect::new(200, 10, 20, 20)), Clip::All);
        assert_eq!(s.check(Rect::new(10, -40, 20, 20)), Clip::All);
    }

    #[test]
    fn nested_pushes_only_shrink() {
        let mut s = stack_with(Rect::new(0, 0, 100, 100));
        s.push(Rect::new(50, 50, 500, 500));
        assert_eq!(s.current(), Rect::new(50, 50, 50, 50));
        s.pop();
        assert_eq!(s.current(), Rect::new(0, 0, 100, 100));
    }

    #[test]
    #[should_panic(expected = "no current clip rectangle")]
    fn check_without_clip_is_fatal() {
        ClipStack::default().check(Rect::new(0, 0, 1, 1));
    }
}
