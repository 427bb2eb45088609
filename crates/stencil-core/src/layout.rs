//! Row/column layout.
//!
//! Each container owns a stack of [`Layout`] frames. A frame hands out cells
//! left to right along the current row; when the row runs out of items it
//! wraps onto a new row with the same configuration. Columns are nested
//! frames anchored at one cell of their parent whose cursor and extents fold
//! back into the parent when they end.
//!
//! Margins belong to the cell: a cell's outer size is resolved first and the
//! margin is subtracted afterwards, so neighbouring borders line up without
//! doubling the gap.

use crate::error::{UsageError, fatal};
use crate::stack::FixedStack;
use crate::{Rect, Style, Vec2};

pub const MAX_WIDTHS: usize = 16;
pub const LAYOUT_STACK_SIZE: usize = 16;

/// Far enough below any real coordinate that the first cell always wins.
const MAX_SENTINEL: i32 = -0x100_0000;

pub type LayoutStack = FixedStack<Layout, LAYOUT_STACK_SIZE>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NextPlacement {
    /// Screen-space rectangle, returned as is.
    Absolute,
    /// Offset by the frame's body origin.
    Relative,
}

#[derive(Clone, Debug)]
pub struct Layout {
    /// Body rectangle, already shifted by the container's scroll offset.
    pub body: Rect,
    pub position: Vec2,
    /// `x` is the repeating cell width for rows without explicit widths,
    /// `y` the row height.
    pub size: Vec2,
    /// Furthest right/bottom edge handed out so far.
    pub max: Vec2,
    pub next_row: i32,
    pub indent: i32,
    widths: [i32; MAX_WIDTHS],
    items: usize,
    item_index: usize,
    next: Option<(Rect, NextPlacement)>,
    next_size: Option<Vec2>,
}

impl Layout {
    pub fn new(body: Rect, scroll: Vec2) -> Self {
        let mut layout = Layout {
            body: Rect::new(body.x - scroll.x, body.y - scroll.y, body.w, body.h),
            position: Vec2::ZERO,
            size: Vec2::ZERO,
            max: Vec2::new(MAX_SENTINEL, MAX_SENTINEL),
            next_row: 0,
            indent: 0,
            widths: [0; MAX_WIDTHS],
            items: 0,
            item_index: 0,
            next: None,
            next_size: None,
        };
        layout.row(&[0], 0);
        layout
    }

    /// Starts a row of `widths.len()` cells. Width `0` means the style's
    /// default cell width, a negative width is relative to the space left in
    /// the body. An empty slice makes every cell `size.x` wide.
    #[track_caller]
    pub fn row(&mut self, widths: &[i32], height: i32) {
        if widths.len() > MAX_WIDTHS {
            fatal(UsageError::TooManyWidths {
                items: widths.len(),
                max: MAX_WIDTHS,
            });
        }
        self.widths[..widths.len()].copy_from_slice(widths);
        self.start_row(widths.len(), height);
    }

    fn start_row(&mut self, items: usize, height: i32) {
        self.items = items;
        self.position = Vec2::new(self.indent, self.next_row);
        self.size.y = height;
        self.item_index = 0;
    }

    pub fn items(&self) -> usize {
        self.items
    }

    pub fn widths(&self) -> &[i32] {
        &self.widths[..self.items]
    }

    pub fn set_width(&mut self, width: i32) {
        self.size.x = width;
    }

    pub fn set_height(&mut self, height: i32) {
        self.size.y = height;
    }

    pub fn set_next(&mut self, rect: Rect, placement: NextPlacement) {
        self.next = Some((rect, placement));
    }

    pub fn set_next_size(&mut self, size: Vec2) {
        self.next_size = Some(size);
    }

    /// Hands out the next cell in screen space.
    pub fn next(&mut self, style: &Style) -> Rect {
        let margin = style.margin;
        let mut res;

        if let Some((rect, placement)) = self.next.take() {
            res = rect;
            if placement == NextPlacement::Absolute {
                return res;
            }
        } else {
            if self.item_index == self.items {
                self.start_row(self.items, self.size.y);
            }

            res = Rect::new(self.position.x + margin.x, self.position.y + margin.y, 0, 0);

            match self.next_size.take() {
                Some(size) => {
                    res.w = size.x;
                    res.h = size.y;
                }
                None => {
                    res.w = if self.items > 0 {
                        self.widths[self.item_index]
                    } else {
                        self.size.x
                    };
                    res.h = self.size.y;
                }
            }
            if res.w == 0 {
                res.w = style.size.x + style.padding.horizontal();
            }
            if res.h == 0 {
                res.h = style.size.y + style.padding.vertical();
            }
            if res.w < 0 {
                res.w += self.body.w - res.x + 1;
            }
            if res.h < 0 {
                res.h += self.body.h - res.y + 1;
            }
            res.w -= margin.x * 2;
            res.h -= margin.y * 2;

            self.item_index += 1;
        }

        self.position.x += res.w + margin.x * 2;
        self.next_row = self.next_row.max(res.y + res.h + margin.y);

        res.x += self.body.x;
        res.y += self.body.y;

        self.max.x = self.max.x.max(res.right());
        self.max.y = self.max.y.max(res.bottom());

        res
    }

    /// Takes over the child's cursor and extents where they reach further.
    pub fn fold_column(&mut self, child: &Layout) {
        self.position.x = self
            .position
            .x
            .max(child.position.x + child.body.x - self.body.x);
        self.next_row = self
            .next_row
            .max(child.next_row + child.body.y - self.body.y);
        self.max.x = self.max.x.max(child.max.x);
        self.max.y = self.max.y.max(child.max.y);
    }

    /// Content extent measured from the body origin, margin included.
    pub fn content_size(&self, style: &Style) -> Vec2 {
        Vec2::new(
            self.max.x - self.body.x + style.margin.x,
            self.max.y - self.body.y + style.margin.y,
        )
    }
}
