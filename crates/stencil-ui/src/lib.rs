//! Controls built on the Stencil engine.
//!
//! Every control follows the same shape: hash an id, take a cell from the
//! layout, run the cell through `update_control`, work out the [`Response`]
//! and draw. The controls are extension traits on [`Context`], so bring the
//! [`prelude`] into scope and call them on the context directly:
//!
//! ```rust
//! use stencil_core::*;
//! use stencil_ui::prelude::*;
//!
//! struct Mono;
//! impl TextMetrics for Mono {
//!     fn text_width(&self, _: FontId, _: u16, text: &str) -> i32 {
//!         text.len() as i32 * 7
//!     }
//!     fn text_height(&self, _: FontId, _: u16) -> i32 {
//!         12
//!     }
//! }
//!
//! let mut ctx = Context::new(Mono);
//! let mut volume = 0.5f32;
//! ctx.begin();
//! if ctx.begin_window("Mixer", Rect::new(0, 0, 240, 160)) {
//!     ctx.layout_row(&[80, -1], 0);
//!     ctx.label("Volume");
//!     ctx.slider(&mut volume, 0.0, 1.0);
//!     if ctx.button("Mute").contains(Response::SUBMIT) {
//!         volume = 0.0;
//!     }
//!     ctx.end_window();
//! }
//! ctx.end();
//! ```

pub mod slider;
pub mod textbox;

#[cfg(test)]
mod tests;

use stencil_core::{
    ColorId, Context, FontId, Icon, Id, MouseButton, Options, Rect, Response, TextMetrics, Vec2,
};

pub use slider::{Scalar, Sliders, format_real};
pub use textbox::{TextInput, pop_grapheme};

pub mod prelude {
    pub use crate::{Scalar, Sliders, TextInput, Widgets};
}

/// Labels, buttons, checkboxes and collapsible sections.
pub trait Widgets {
    /// Word-wrapped paragraph filling the width of the current cell.
    fn text(&mut self, text: &str);
    fn label(&mut self, text: &str);
    fn button(&mut self, label: &str) -> Response;
    /// Button with an optional icon. An empty label hashes the icon instead.
    fn button_ex(&mut self, label: &str, icon: Option<Icon>, opt: Options) -> Response;
    fn checkbox(&mut self, label: &str, state: &mut bool) -> Response;
    fn header(&mut self, label: &str) -> Response;
    fn header_ex(&mut self, label: &str, opt: Options) -> Response;
    /// Returns `ACTIVE` while expanded; only then call [`end_treenode`](Self::end_treenode).
    fn begin_treenode(&mut self, label: &str) -> Response;
    fn begin_treenode_ex(&mut self, label: &str, opt: Options) -> Response;
    fn end_treenode(&mut self);
}

/// Byte length of the longest prefix of `line` that fits in `width`,
/// breaking at spaces. A first word wider than `width` is kept whole.
pub fn wrap_point(
    metrics: &dyn TextMetrics,
    font: FontId,
    size: u16,
    line: &str,
    width: i32,
) -> usize {
    let breaks = line
        .match_indices(' ')
        .map(|(i, _)| i)
        .chain(std::iter::once(line.len()));
    let mut end = 0;
    for i in breaks {
        if end > 0 && metrics.text_width(font, size, &line[..i]) > width {
            break;
        }
        end = i;
    }
    end
}

fn header(ctx: &mut Context, label: &str, treenode: bool, opt: Options) -> (Response, Id) {
    let id = ctx.get_id(label);
    let idx = ctx.treenode_pool().get(id);
    ctx.layout_row(&[-1], 0);

    let mut active = idx.is_some();
    let expanded = if opt.contains(Options::EXPANDED) {
        !active
    } else {
        active
    };
    let mut r = ctx.layout_next();
    ctx.update_control(id, r, Options::empty());

    if ctx.input().mouse_pressed == MouseButton::LEFT && ctx.focus() == id {
        active = !active;
    }

    let frame = ctx.frame();
    let pool = ctx.treenode_pool_mut();
    match idx {
        Some(i) if active => pool.update(i, frame),
        Some(i) => pool.remove(i),
        None if active => {
            pool.init(id, frame);
        }
        None => {}
    }

    if treenode {
        if ctx.hover() == id {
            ctx.draw_frame(r, ColorId::ButtonHover);
        }
    } else {
        ctx.draw_control_frame(id, r, ColorId::Button, Options::empty());
    }
    let icon = if expanded {
        Icon::Expanded
    } else {
        Icon::Collapsed
    };
    let color = ctx.style().color(ColorId::Text);
    ctx.draw_icon(icon, Rect::new(r.x, r.y, r.h, r.h), color);
    let shift = r.h - ctx.style().padding.left;
    r.x += shift;
    r.w -= shift;
    ctx.draw_control_text(label, r, ColorId::Text, Options::empty());
    ctx.draw_focus_ring(id, r);

    let res = if expanded {
        Response::ACTIVE
    } else {
        Response::empty()
    };
    (res, id)
}

impl Widgets for Context {
    fn text(&mut self, text: &str) {
        let font = self.style().font;
        let size = self.style().font_size;
        let color = self.style().color(ColorId::Text);
        let line_height = self.text_height(font, size);

        self.layout_begin_column();
        self.layout_row(&[-1], line_height);
        for paragraph in text.split('\n') {
            let mut rest = paragraph;
            loop {
                let r = self.layout_next();
                let end = wrap_point(self.metrics(), font, size, rest, r.w);
                let (line, tail) = rest.split_at(end);
                if !line.is_empty() {
                    self.draw_text(font, size, line, Vec2::new(r.x, r.y), color);
                }
                rest = tail.strip_prefix(' ').unwrap_or(tail);
                if rest.is_empty() {
                    break;
                }
            }
        }
        self.layout_end_column();
    }

    fn label(&mut self, text: &str) {
        let r = self.layout_next();
        self.draw_control_text(text, r, ColorId::Text, Options::empty());
    }

    fn button(&mut self, label: &str) -> Response {
        self.button_ex(label, None, Options::ALIGN_CENTER)
    }

    fn button_ex(&mut self, label: &str, icon: Option<Icon>, opt: Options) -> Response {
        let id = match icon {
            Some(icon) if label.is_empty() => self.get_id(&(icon as u32)),
            _ => self.get_id(label),
        };
        let r = self.layout_next();
        let held = self.focus() == id;
        self.update_control(id, r, opt);

        // Fires once, on the release that ends a press begun on this button.
        // A press and release inside one frame count as such a press.
        let pressed_here = held || self.focus() == id;
        let mut res = Response::empty();
        if pressed_here && self.input().mouse_released == MouseButton::LEFT && self.mouse_over(r) {
            log::trace!("button {label:?} activated");
            res |= Response::SUBMIT;
        }

        self.draw_control_frame(id, r, ColorId::Button, opt);
        if !label.is_empty() {
            self.draw_control_text(label, r, ColorId::Text, opt);
        }
        if let Some(icon) = icon {
            let color = self.style().color(ColorId::Text);
            self.draw_icon(icon, r, color);
        }
        self.draw_focus_ring(id, r);
        res
    }

    fn checkbox(&mut self, label: &str, state: &mut bool) -> Response {
        let id = self.get_id(label);
        let r = self.layout_next();
        let check = Rect::new(r.x, r.y, r.h, r.h);
        self.update_control(id, r, Options::empty());

        let mut res = Response::empty();
        if self.input().mouse_pressed == MouseButton::LEFT && self.focus() == id {
            *state = !*state;
            res |= Response::CHANGE;
        }

        self.draw_control_frame(id, check, ColorId::Base, Options::empty());
        if *state {
            let color = self.style().color(ColorId::Text);
            self.draw_icon(Icon::Check, check, color);
        }
        let r = Rect::new(r.x + check.w, r.y, r.w - check.w, r.h);
        self.draw_control_text(label, r, ColorId::Text, Options::empty());
        self.draw_focus_ring(id, r);
        res
    }

    fn header(&mut self, label: &str) -> Response {
        self.header_ex(label, Options::empty())
    }

    fn header_ex(&mut self, label: &str, opt: Options) -> Response {
        header(self, label, false, opt).0
    }

    fn begin_treenode(&mut self, label: &str) -> Response {
        self.begin_treenode_ex(label, Options::empty())
    }

    fn begin_treenode_ex(&mut self, label: &str, opt: Options) -> Response {
        let (res, id) = header(self, label, true, opt);
        if res.contains(Response::ACTIVE) {
            let indent = self.style().indent;
            self.current_layout().indent += indent;
            self.push_id_raw(id);
        }
        res
    }

    fn end_treenode(&mut self) {
        let indent = self.style().indent;
        self.current_layout().indent -= indent;
        self.pop_id();
    }
}
