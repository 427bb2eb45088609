//! Windows, popups, panels and their scrollbars.
//!
//! Containers are retained: their rectangle, scroll offset, z-index and
//! open flag live in a fixed pool keyed by id and survive between frames.
//! Windows and popups are root containers with their own draw segment and
//! z-order; panels sit inside the current layout.

use crate::error::{UsageError, fatal};
use crate::layout::Layout;
use crate::{Axis, ColorId, Context, Icon, Id, MouseButton, Options, Rect, Vec2};

pub const ROOT_LIST_SIZE: usize = 32;
pub const CONTAINER_STACK_SIZE: usize = 32;

const MIN_WINDOW_SIZE: Vec2 = Vec2::new(96, 64);

/// Slot of a container in the context's container pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ContainerRef(pub(crate) usize);

impl ContainerRef {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Container {
    pub id: Id,
    pub rect: Rect,
    /// Visible content area after title, footer and scrollbars.
    pub body: Rect,
    pub content_size: Vec2,
    pub scroll: Vec2,
    pub zindex: i32,
    pub open: bool,
    /// Set once the container has been given a rectangle.
    pub placed: bool,
    /// Draw segment this container recorded into this frame.
    pub head: usize,
    /// Segment length when the container closed.
    pub tail: usize,
}

impl Context {
    pub fn container(&self, c: ContainerRef) -> &Container {
        &self.containers[c.0]
    }

    pub fn container_mut(&mut self, c: ContainerRef) -> &mut Container {
        &mut self.containers[c.0]
    }

    #[track_caller]
    pub fn current_container(&self) -> ContainerRef {
        match self.container_stack.last() {
            Some(c) => *c,
            None => fatal(UsageError::Missing {
                what: "container",
            }),
        }
    }

    /// Looks up or creates the container named `name` in the current scope.
    pub fn get_container(&mut self, name: &str) -> ContainerRef {
        let id = self.get_id(name);
        self.container_slot(id)
    }

    /// Looks up the container named `name` without creating it.
    pub fn find_container(&mut self, name: &str) -> Option<ContainerRef> {
        let id = self.get_id(name);
        self.container_pool.get(id).map(ContainerRef)
    }

    pub fn bring_to_front(&mut self, c: ContainerRef) {
        self.last_zindex += 1;
        self.containers[c.0].zindex = self.last_zindex;
    }

    fn container_slot(&mut self, id: Id) -> ContainerRef {
        let frame = self.frame();
        if let Some(idx) = self.container_pool.get(id) {
            self.container_pool.update(idx, frame);
            return ContainerRef(idx);
        }
        let idx = self.container_pool.init(id, frame);
        self.containers[idx] = Container {
            id,
            open: true,
            ..Container::default()
        };
        let c = ContainerRef(idx);
        self.bring_to_front(c);
        c
    }

    /// With `CLOSED`, an unknown id yields `None` and a known but closed
    /// container is not touched.
    fn lookup_container(&mut self, id: Id, opt: Options) -> Option<ContainerRef> {
        let frame = self.frame();
        if let Some(idx) = self.container_pool.get(id) {
            if self.containers[idx].open || !opt.contains(Options::CLOSED) {
                self.container_pool.update(idx, frame);
            }
            return Some(ContainerRef(idx));
        }
        if opt.contains(Options::CLOSED) {
            return None;
        }
        Some(self.container_slot(id))
    }

    pub fn begin_window(&mut self, title: &str, rect: Rect) -> bool {
        self.begin_window_ex(title, rect, Options::empty())
    }

    /// Starts a window. When it returns `true` the caller declares the body
    /// and then calls [`end_window`](Self::end_window).
    pub fn begin_window_ex(&mut self, title: &str, rect: Rect, opt: Options) -> bool {
        let id = self.get_id(title);
        let Some(cnt) = self.lookup_container(id, opt) else {
            return false;
        };
        if !self.containers[cnt.0].open {
            return false;
        }
        self.push_id_raw(id);

        {
            let c = &mut self.containers[cnt.0];
            if !c.placed || opt.contains(Options::FIXED_SIZE) {
                c.rect = rect;
                c.placed = true;
            }
        }
        self.begin_root_container(cnt);
        let rect = self.containers[cnt.0].rect;
        let mut body = rect;

        if !opt.contains(Options::NO_FRAME) {
            self.draw_frame(rect, ColorId::WindowBg);
        }

        let mut title_rect = rect;
        title_rect.h = self.style().title_height;
        if !opt.contains(Options::NO_TITLE) {
            self.draw_frame(title_rect, ColorId::TitleBg);

            let tid = self.get_id("!title");
            self.update_control(tid, title_rect, opt);
            self.draw_control_text(title, title_rect, ColorId::TitleText, opt);
            self.draw_focus_ring(tid, title_rect);
            if self.focus() == tid && self.input().mouse_down == MouseButton::LEFT {
                let d = self.input().mouse_delta;
                let c = &mut self.containers[cnt.0];
                c.rect.x += d.x;
                c.rect.y += d.y;
            }
            body.y += title_rect.h;
            body.h -= title_rect.h;

            if !opt.contains(Options::NO_CLOSE) {
                let cid = self.get_id("!close");
                let r = Rect::new(
                    title_rect.right() - title_rect.h,
                    title_rect.y,
                    title_rect.h,
                    title_rect.h,
                );
                let color = self.style().color(ColorId::TitleText);
                self.draw_icon(Icon::Close, r, color);
                self.update_control(cid, r, opt);
                self.draw_focus_ring(cid, r);
                if self.input().mouse_pressed == MouseButton::LEFT && self.focus() == cid {
                    log::debug!("window {title:?} closed");
                    self.containers[cnt.0].open = false;
                }
            }
        }

        if !opt.contains(Options::NO_RESIZE) {
            let sz = self.style().footer_height;
            let rid = self.get_id("!resize");
            let footer = Rect::new(rect.x, rect.bottom() - sz, rect.w, sz);
            self.draw_frame(footer, ColorId::FooterBg);
            let r = Rect::new(rect.right() - sz, rect.bottom() - sz, sz, sz);
            self.update_control(rid, r, opt);
            let color = self.style().color(ColorId::Text);
            self.draw_icon(Icon::Resize, r, color);
            self.draw_focus_ring(rid, r);
            if self.focus() == rid && self.input().mouse_down == MouseButton::LEFT {
                let d = self.input().mouse_delta;
                let c = &mut self.containers[cnt.0];
                c.rect.w = (c.rect.w + d.x).max(MIN_WINDOW_SIZE.x);
                c.rect.h = (c.rect.h + d.y).max(MIN_WINDOW_SIZE.y);
            }
            body.h -= sz;
        }

        self.push_container_body(cnt, body, opt);

        if opt.contains(Options::AUTO_SIZE) {
            let r = self.current_layout().body;
            let c = &mut self.containers[cnt.0];
            c.rect.w = c.content_size.x + (c.rect.w - r.w);
            c.rect.h = c.content_size.y + (c.rect.h - r.h);
        }

        if opt.contains(Options::POPUP)
            && !self.input().mouse_pressed.is_empty()
            && self.hover_root != Some(cnt)
        {
            self.containers[cnt.0].open = false;
        }

        let body = self.containers[cnt.0].body;
        self.push_clip(body);
        true
    }

    pub fn end_window(&mut self) {
        self.pop_clip();
        self.end_root_container();
    }

    /// Opens popup `name` at the mouse and makes it the hover root so the
    /// press that opened it does not immediately close it.
    pub fn open_popup(&mut self, name: &str) {
        let cnt = self.get_container(name);
        self.hover_root = Some(cnt);
        self.next_hover_root = Some(cnt);
        let m = self.mouse_pos();
        {
            let c = &mut self.containers[cnt.0];
            c.rect = Rect::new(m.x, m.y, 1, 1);
            c.placed = true;
            c.open = true;
        }
        self.bring_to_front(cnt);
    }

    pub fn begin_popup(&mut self, name: &str) -> bool {
        let opt = Options::POPUP
            | Options::AUTO_SIZE
            | Options::NO_RESIZE
            | Options::NO_SCROLL
            | Options::NO_TITLE
            | Options::CLOSED;
        self.begin_window_ex(name, Rect::default(), opt)
    }

    pub fn end_popup(&mut self) {
        self.end_window();
    }

    pub fn begin_panel(&mut self, name: &str) {
        self.begin_panel_ex(name, Options::empty());
    }

    pub fn begin_panel_ex(&mut self, name: &str, opt: Options) {
        let id = self.get_id(name);
        self.push_id_raw(id);
        let cnt = self.container_slot(id);
        let rect = self.layout_next();
        self.containers[cnt.0].rect = rect;
        if !opt.contains(Options::NO_FRAME) {
            self.draw_frame(rect, ColorId::PanelBg);
        }
        self.container_stack.push(cnt);
        self.push_container_body(cnt, rect, opt);
        let body = self.containers[cnt.0].body;
        self.push_clip(body);
    }

    pub fn end_panel(&mut self) {
        self.pop_clip();
        self.pop_container();
    }

    fn begin_root_container(&mut self, cnt: ContainerRef) {
        self.container_stack.push(cnt);
        self.root_list.push(cnt);
        let head = self.commands.begin_segment();
        self.containers[cnt.0].head = head;

        let c = &self.containers[cnt.0];
        if c.rect.contains(self.mouse_pos()) {
            let above = match self.next_hover_root {
                Some(r) => c.zindex > self.containers[r.0].zindex,
                None => true,
            };
            if above {
                self.next_hover_root = Some(cnt);
            }
        }
        self.clip.push_unclipped();
    }

    fn end_root_container(&mut self) {
        let cnt = self.current_container();
        self.pop_clip();
        self.pop_container();
        self.containers[cnt.0].tail = self.commands.end_segment();
    }

    fn pop_container(&mut self) {
        let cnt = self.current_container();
        let size = match self.layouts.last() {
            Some(l) => l.content_size(self.style()),
            None => fatal(UsageError::Missing { what: "layout" }),
        };
        self.containers[cnt.0].content_size = size;
        self.container_stack.pop();
        self.layouts.pop();
        self.pop_id();
    }

    fn push_container_body(&mut self, cnt: ContainerRef, body: Rect, opt: Options) {
        let mut body = body;
        if !opt.contains(Options::NO_SCROLL) {
            self.scrollbars(cnt, &mut body);
        }
        let inner = body.shrink(self.style().padding);
        let scroll = self.containers[cnt.0].scroll;
        self.layouts.push(Layout::new(inner, scroll));
        self.containers[cnt.0].body = body;
        if self.mouse_over(body) {
            let id = self.containers[cnt.0].id;
            self.hovered.push(id);
        }
    }

    fn scrollbars(&mut self, cnt: ContainerRef, body: &mut Rect) {
        let sz = self.style().scrollbar_size;
        let pad = self.style().padding;
        let c = &self.containers[cnt.0];
        let cs = Vec2::new(
            c.content_size.x + pad.horizontal(),
            c.content_size.y + pad.vertical(),
        );
        let last_body = c.body;
        self.push_clip(*body);
        if cs.y > last_body.h {
            body.w -= sz;
        }
        if cs.x > last_body.w {
            body.h -= sz;
        }
        self.scrollbar(cnt, *body, cs, Axis::Y);
        self.scrollbar(cnt, *body, cs, Axis::X);
        self.pop_clip();
    }

    fn scrollbar(&mut self, cnt: ContainerRef, b: Rect, cs: Vec2, axis: Axis) {
        let extent = b.extent(axis);
        let maxscroll = cs.axis(axis) - extent;
        if maxscroll <= 0 || extent <= 0 {
            *self.containers[cnt.0].scroll.axis_mut(axis) = 0;
            return;
        }
        let id = match axis {
            Axis::X => self.get_id("!scrollbarx"),
            Axis::Y => self.get_id("!scrollbary"),
        };

        let other = axis.other();
        let mut base = b;
        *base.pos_mut(other) = b.pos(other) + b.extent(other);
        *base.extent_mut(other) = self.style().scrollbar_size;

        self.update_control(id, base, Options::empty());
        let dragging = self.focus() == id && self.input().mouse_down == MouseButton::LEFT;
        let drag = self.input().mouse_delta.axis(axis);
        {
            let scroll = self.containers[cnt.0].scroll.axis_mut(axis);
            if dragging {
                *scroll += drag * cs.axis(axis) / base.extent(axis);
            }
            *scroll = (*scroll).clamp(0, maxscroll);
        }

        self.draw_frame(base, ColorId::ScrollBase);
        let mut thumb = base;
        let track = base.extent(axis);
        *thumb.extent_mut(axis) = self.style().thumb_size.max(track * extent / cs.axis(axis));
        let scroll = self.containers[cnt.0].scroll.axis(axis);
        *thumb.pos_mut(axis) += scroll * (track - thumb.extent(axis)) / maxscroll;
        self.draw_frame(thumb, ColorId::ScrollThumb);

        if self.mouse_over(b) {
            self.scroll_target = Some(cnt);
        }
        self.draw_focus_ring(id, base);
    }
}
