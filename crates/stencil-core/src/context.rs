//! The engine state and its per-frame cycle.
//!
//! A [`Context`] owns everything that survives between frames (pools,
//! containers, focus, style) and everything that is rebuilt each frame
//! (stacks, handlers, draw segments). One thread drives it through
//! `begin()`, the UI declaration, and `end()`.

use std::rc::Rc;

use crate::clip::{Clip, ClipStack};
use crate::container::{CONTAINER_STACK_SIZE, Container, ContainerRef, ROOT_LIST_SIZE};
use crate::error::{UsageError, fatal};
use crate::events::{Event, EventKind, Handlers, Routes, dispatch_all};
use crate::layout::{Layout, LayoutStack, NextPlacement};
use crate::pool::{CONTAINER_POOL_SIZE, Pool, TREENODE_POOL_SIZE};
use crate::scene::{CommandList, Scene, SceneNode};
use crate::stack::FixedStack;
use crate::{
    Color, ColorId, FontId, Icon, Id, IdSource, Input, Key, MouseButton, Options, Rect,
    RenderBackend, Style, TextMetrics, Vec2,
};

pub const ID_STACK_SIZE: usize = 32;
/// Capacity of the numeric edit buffer, in bytes.
pub const MAX_FMT: usize = 127;

/// Text-entry state for a numeric control switched into editing mode.
#[derive(Clone, Debug, Default)]
pub struct NumberEdit {
    pub id: Id,
    pub buf: String,
}

pub struct Context {
    metrics: Box<dyn TextMetrics>,
    style: Style,

    hover: Id,
    focus: Id,
    last_focus: Id,
    should_focus_next: bool,
    updated_focus: bool,
    /// Focus came from a press rather than from Tab or `set_focus`.
    pointer_focus: bool,
    prev_id: Id,
    cur_id: Id,
    last_rect: Rect,
    pub(crate) last_zindex: i32,
    frame: u64,
    in_frame: bool,

    pub(crate) hover_root: Option<ContainerRef>,
    pub(crate) next_hover_root: Option<ContainerRef>,
    pub(crate) scroll_target: Option<ContainerRef>,
    number_edit: NumberEdit,

    pub(crate) root_list: FixedStack<ContainerRef, ROOT_LIST_SIZE>,
    pub(crate) container_stack: FixedStack<ContainerRef, CONTAINER_STACK_SIZE>,
    pub(crate) clip: ClipStack,
    id_stack: FixedStack<Id, ID_STACK_SIZE>,
    pub(crate) layouts: LayoutStack,
    /// Bodies under the pointer this frame, outermost first.
    pub(crate) hovered: Vec<Id>,
    /// Id stack as it was when focus was last set.
    focus_path: Vec<Id>,

    events: Vec<Event>,
    handlers: Handlers,

    pub(crate) container_pool: Pool<CONTAINER_POOL_SIZE>,
    pub(crate) containers: Vec<Container>,
    treenode_pool: Pool<TREENODE_POOL_SIZE>,

    input: Input,
    pub(crate) commands: CommandList,
    scene: Scene,
}

impl Context {
    pub fn new(metrics: impl TextMetrics + 'static) -> Self {
        Self::with_style(metrics, Style::default())
    }

    pub fn with_style(metrics: impl TextMetrics + 'static, style: Style) -> Self {
        Context {
            metrics: Box::new(metrics),
            style,
            hover: Id::NONE,
            focus: Id::NONE,
            last_focus: Id::NONE,
            should_focus_next: false,
            updated_focus: false,
            pointer_focus: false,
            prev_id: Id::NONE,
            cur_id: Id::NONE,
            last_rect: Rect::default(),
            last_zindex: 0,
            frame: 0,
            in_frame: false,
            hover_root: None,
            next_hover_root: None,
            scroll_target: None,
            number_edit: NumberEdit::default(),
            root_list: FixedStack::new("root list"),
            container_stack: FixedStack::new("container"),
            clip: ClipStack::default(),
            id_stack: FixedStack::new("id"),
            layouts: FixedStack::new("layout"),
            hovered: Vec::new(),
            focus_path: Vec::new(),
            events: Vec::new(),
            handlers: Handlers::default(),
            container_pool: Pool::new(),
            containers: vec![Container::default(); CONTAINER_POOL_SIZE],
            treenode_pool: Pool::new(),
            input: Input::default(),
            commands: CommandList::default(),
            scene: Scene::default(),
        }
    }

    // ---- frame cycle ----

    #[track_caller]
    pub fn begin(&mut self) {
        if self.in_frame {
            fatal(UsageError::NestedFrame);
        }
        self.in_frame = true;
        self.commands.clear();
        self.root_list.clear();
        self.hovered.clear();
        self.handlers.clear();
        self.scroll_target = None;
        self.hover_root = self.next_hover_root.take();
        self.input.prelude();
        self.frame += 1;
    }

    #[track_caller]
    pub fn end(&mut self) {
        if !self.in_frame {
            fatal(UsageError::NotInFrame);
        }
        self.container_stack.expect_empty();
        self.clip.expect_empty();
        self.id_stack.expect_empty();
        self.layouts.expect_empty();

        let focus = if self.focus.is_some() {
            self.focus
        } else {
            self.last_focus
        };
        dispatch_all(
            &self.handlers,
            &self.events,
            Routes {
                hovered: &self.hovered,
                focus_path: &self.focus_path,
                focus,
            },
        );
        self.events.clear();

        if let Some(target) = self.scroll_target {
            let delta = self.input.scroll_delta;
            let c = &mut self.containers[target.0];
            c.scroll.x += delta.x;
            c.scroll.y += delta.y;
        }

        if !self.updated_focus && self.focus.is_some() {
            log::debug!("focus {} not re-declared, clearing", self.focus);
            self.focus = Id::NONE;
        }
        self.updated_focus = false;

        if !self.input.mouse_pressed.is_empty()
            && let Some(root) = self.next_hover_root
        {
            let z = self.containers[root.0].zindex;
            if z < self.last_zindex && z >= 0 {
                self.bring_to_front(root);
            }
        }

        self.input.epilogue();

        let mut roots: Vec<ContainerRef> = self.root_list.iter().copied().collect();
        roots.sort_by_key(|r| self.containers[r.0].zindex);
        let order: Vec<(usize, usize)> = roots
            .iter()
            .map(|r| {
                let c = &self.containers[r.0];
                (c.head, c.tail)
            })
            .collect();
        self.scene = self.commands.splice(&order);
        self.in_frame = false;
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn render(&self, backend: &mut dyn RenderBackend) {
        self.scene.replay(backend);
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    pub fn metrics(&self) -> &dyn TextMetrics {
        self.metrics.as_ref()
    }

    pub fn text_width(&self, font: FontId, size: u16, text: &str) -> i32 {
        self.metrics.text_width(font, size, text)
    }

    pub fn text_height(&self, font: FontId, size: u16) -> i32 {
        self.metrics.text_height(font, size)
    }

    // ---- identity ----

    /// Hashes `src` onto the innermost scope.
    pub fn get_id<S: IdSource + ?Sized>(&mut self, src: &S) -> Id {
        let seed = self.id_stack.last().copied().unwrap_or(Id::ROOT);
        let id = Id::hash(seed, &src.id_bytes());
        self.prev_id = self.cur_id;
        self.cur_id = id;
        id
    }

    pub fn push_id<S: IdSource + ?Sized>(&mut self, src: &S) {
        let id = self.get_id(src);
        self.id_stack.push(id);
    }

    pub fn push_id_raw(&mut self, id: Id) {
        self.id_stack.push(id);
    }

    #[track_caller]
    pub fn pop_id(&mut self) {
        self.id_stack.pop();
    }

    /// The id produced by the most recent `get_id`.
    pub fn current_id(&self) -> Id {
        self.cur_id
    }

    pub fn id_depth(&self) -> usize {
        self.id_stack.len()
    }

    // ---- focus / hover ----

    pub fn set_focus(&mut self, id: Id) {
        if id != self.focus {
            log::debug!("focus {} -> {}", self.focus, id);
        }
        self.last_focus = self.focus;
        self.focus = id;
        self.updated_focus = true;
        self.pointer_focus = false;
        if id.is_some() {
            self.focus_path.clear();
            self.focus_path.extend(self.id_stack.iter().copied());
        }
    }

    pub fn focus(&self) -> Id {
        self.focus
    }

    pub fn last_focus(&self) -> Id {
        self.last_focus
    }

    pub fn hover(&self) -> Id {
        self.hover
    }

    /// Focused now, or the last control that held focus.
    pub fn has_focus(&self, id: Id) -> bool {
        (self.focus.is_some() && self.focus == id) || self.last_focus == id
    }

    pub fn number_edit(&self) -> &NumberEdit {
        &self.number_edit
    }

    pub fn number_edit_mut(&mut self) -> &mut NumberEdit {
        &mut self.number_edit
    }

    pub fn treenode_pool(&self) -> &Pool<TREENODE_POOL_SIZE> {
        &self.treenode_pool
    }

    pub fn treenode_pool_mut(&mut self) -> &mut Pool<TREENODE_POOL_SIZE> {
        &mut self.treenode_pool
    }

    // ---- input ----

    pub fn input(&self) -> &Input {
        &self.input
    }

    pub fn mouse_pos(&self) -> Vec2 {
        self.input.mouse_pos
    }

    pub fn input_mouse_move(&mut self, x: i32, y: i32) {
        let pos = Vec2::new(x, y);
        let prev = self.input.mouse_pos;
        self.events.push(Event::MouseMove {
            pos,
            delta: Vec2::new(x - prev.x, y - prev.y),
        });
        self.input.mouse_pos = pos;
    }

    pub fn input_mouse_down(&mut self, x: i32, y: i32, button: MouseButton) {
        if self.input.mouse_pos != Vec2::new(x, y) {
            self.input_mouse_move(x, y);
        }
        self.events.push(Event::MouseDown {
            pos: Vec2::new(x, y),
            button,
        });
        self.input.mouse_down |= button;
        self.input.mouse_pressed |= button;
    }

    pub fn input_mouse_up(&mut self, x: i32, y: i32, button: MouseButton) {
        if self.input.mouse_pos != Vec2::new(x, y) {
            self.input_mouse_move(x, y);
        }
        self.events.push(Event::MouseUp {
            pos: Vec2::new(x, y),
            button,
        });
        self.input.mouse_down.remove(button);
        self.input.mouse_released |= button;
    }

    pub fn input_scroll(&mut self, x: i32, y: i32) {
        self.input.scroll_delta.x += x;
        self.input.scroll_delta.y += y;
        self.events.push(Event::Scroll {
            delta: Vec2::new(x, y),
        });
    }

    pub fn input_key_down(&mut self, key: Key) {
        self.events.push(Event::KeyDown { key });
        self.input.key_pressed |= key;
        self.input.key_down |= key;
    }

    pub fn input_key_up(&mut self, key: Key) {
        self.events.push(Event::KeyUp { key });
        self.input.key_down.remove(key);
    }

    #[track_caller]
    pub fn input_text(&mut self, text: &str) {
        self.input.push_text(text);
        self.events.push(Event::Text(text.to_string()));
    }

    // ---- events ----

    /// Registers a handler scoped to the innermost id scope.
    pub fn on_event(&mut self, kinds: EventKind, handler: impl Fn(&Event) -> bool + 'static) {
        let scope = self.id_stack.last().copied().unwrap_or(Id::NONE);
        self.handlers.register(scope, kinds, Rc::new(handler));
    }

    /// Registers a handler that sees every event of `kinds`, before any
    /// scoped handler.
    pub fn on_global_event(
        &mut self,
        kinds: EventKind,
        handler: impl Fn(&Event) -> bool + 'static,
    ) {
        self.handlers.register_global(kinds, Rc::new(handler));
    }

    pub fn has_event(&self, kinds: EventKind) -> bool {
        self.events.iter().any(|e| kinds.intersects(e.kind()))
    }

    // ---- clipping ----

    pub fn push_clip(&mut self, rect: Rect) {
        self.clip.push(rect);
    }

    pub fn pop_clip(&mut self) {
        self.clip.pop();
    }

    pub fn clip_rect(&self) -> Rect {
        self.clip.current()
    }

    pub fn check_clip(&self, rect: Rect) -> Clip {
        self.clip.check(rect)
    }

    // ---- drawing ----

    pub fn draw_rect(&mut self, rect: Rect, color: Color) {
        let r = rect.intersect(&self.clip.current());
        if r.w > 0 && r.h > 0 {
            self.commands.push(SceneNode::Rect { rect: r, color });
        }
    }

    pub fn draw_box(&mut self, rect: Rect, color: Color) {
        self.clipped(rect, SceneNode::Border { rect, color });
    }

    pub fn draw_text(&mut self, font: FontId, size: u16, text: &str, pos: Vec2, color: Color) {
        let rect = Rect::new(
            pos.x,
            pos.y,
            self.text_width(font, size, text),
            self.text_height(font, size),
        );
        self.clipped(
            rect,
            SceneNode::Text {
                pos,
                text: text.to_string(),
                color,
                font,
                size,
            },
        );
    }

    pub fn draw_icon(&mut self, icon: Icon, rect: Rect, color: Color) {
        self.clipped(rect, SceneNode::Icon { icon, rect, color });
    }

    fn clipped(&mut self, bounds: Rect, node: SceneNode) {
        match self.clip.check(bounds) {
            Clip::All => {}
            Clip::None => self.commands.push(node),
            Clip::Part => {
                let rect = self.clip.current();
                self.commands.push(SceneNode::PushClip { rect });
                self.commands.push(node);
                self.commands.push(SceneNode::PopClip);
            }
        }
    }

    /// Runs the style's frame hook.
    pub fn draw_frame(&mut self, rect: Rect, color: ColorId) {
        let hook = self.style.draw_frame;
        hook(self, rect, color);
    }

    /// Frame for a control: `color` promoted to its hover or focus variant.
    pub fn draw_control_frame(&mut self, id: Id, rect: Rect, color: ColorId, opt: Options) {
        if opt.contains(Options::NO_FRAME) {
            return;
        }
        let color = if self.focus == id {
            color.focus()
        } else if self.hover == id {
            color.hover()
        } else {
            color
        };
        self.draw_frame(rect, color);
    }

    /// Single line of text inside `rect`, vertically centred and clipped.
    pub fn draw_control_text(&mut self, text: &str, rect: Rect, color: ColorId, opt: Options) {
        let font = self.style.font;
        let size = self.style.font_size;
        let tw = self.text_width(font, size, text);
        self.push_clip(rect);
        let y = rect.y + (rect.h - self.text_height(font, size)) / 2;
        let pad = self.style.padding.left;
        let x = if opt.contains(Options::ALIGN_CENTER) {
            rect.x + (rect.w - tw) / 2
        } else if opt.contains(Options::ALIGN_RIGHT) {
            rect.x + rect.w - tw - pad
        } else {
            rect.x + pad
        };
        let c = self.style.color(color);
        self.draw_text(font, size, text, Vec2::new(x, y), c);
        self.pop_clip();
    }

    pub fn draw_focus_ring(&mut self, id: Id, rect: Rect) {
        if self.has_focus(id) {
            let c = self.style.color(ColorId::FocusBorder);
            self.draw_box(rect, c);
        }
    }

    // ---- interaction ----

    fn in_hover_root(&self) -> bool {
        match self.hover_root {
            Some(root) => self.container_stack.iter().rev().any(|c| *c == root),
            None => false,
        }
    }

    /// Pointer inside `rect`, inside the clip, and inside the hovered root.
    pub fn mouse_over(&self, rect: Rect) -> bool {
        let p = self.input.mouse_pos;
        rect.contains(p) && self.clip.current().contains(p) && self.in_hover_root()
    }

    /// Advances the hover/focus state machine for one control.
    pub fn update_control(&mut self, id: Id, rect: Rect, opt: Options) {
        let mut took_focus_next = false;
        if self.should_focus_next {
            self.set_focus(id);
            self.should_focus_next = false;
            took_focus_next = true;
        }
        let mouseover = self.mouse_over(rect);

        if self.focus == id {
            self.updated_focus = true;
        }
        if opt.contains(Options::NO_INTERACT) {
            return;
        }
        if mouseover && self.input.mouse_down.is_empty() {
            self.hover = id;
        }

        if self.focus == id {
            if !self.input.mouse_pressed.is_empty() && !mouseover {
                self.set_focus(Id::NONE);
            } else if !opt.contains(Options::HOLD_FOCUS) {
                let released = !self.input.mouse_released.is_empty();
                let up = self.input.mouse_down.is_empty();
                if released || (up && self.pointer_focus) {
                    self.set_focus(Id::NONE);
                }
            }
        }

        if self.hover == id {
            if !self.input.mouse_pressed.is_empty() {
                self.set_focus(id);
                self.pointer_focus = true;
            } else if !mouseover {
                self.hover = Id::NONE;
            }
        }

        if self.input.key_pressed.contains(Key::TAB) && !took_focus_next && self.has_focus(id) {
            if self.input.key_down.contains(Key::SHIFT) {
                self.set_focus(self.prev_id);
            } else {
                self.should_focus_next = true;
            }
        }
    }

    // ---- layout ----

    #[track_caller]
    pub fn current_layout(&mut self) -> &mut Layout {
        match self.layouts.last_mut() {
            Some(l) => l,
            None => fatal(UsageError::Missing { what: "layout" }),
        }
    }

    pub fn layout_row(&mut self, widths: &[i32], height: i32) {
        self.current_layout().row(widths, height);
    }

    pub fn layout_width(&mut self, width: i32) {
        self.current_layout().set_width(width);
    }

    pub fn layout_height(&mut self, height: i32) {
        self.current_layout().set_height(height);
    }

    pub fn layout_set_next(&mut self, rect: Rect, relative: bool) {
        let placement = if relative {
            NextPlacement::Relative
        } else {
            NextPlacement::Absolute
        };
        self.current_layout().set_next(rect, placement);
    }

    pub fn layout_set_next_size(&mut self, size: Vec2) {
        self.current_layout().set_next_size(size);
    }

    #[track_caller]
    pub fn layout_next(&mut self) -> Rect {
        let rect = match self.layouts.last_mut() {
            Some(l) => l.next(&self.style),
            None => fatal(UsageError::Missing { what: "layout" }),
        };
        self.last_rect = rect;
        rect
    }

    pub fn layout_begin_column(&mut self) {
        let cell = self.layout_next();
        self.layouts.push(Layout::new(cell, Vec2::ZERO));
    }

    #[track_caller]
    pub fn layout_end_column(&mut self) {
        let child = self.layouts.pop();
        self.current_layout().fold_column(&child);
    }

    /// Rectangle most recently handed out by the layout.
    pub fn last_rect(&self) -> Rect {
        self.last_rect
    }
}
