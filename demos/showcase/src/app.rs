use std::collections::HashMap;

use stencil_core::{Color, ColorId, Context, Options, Rect, Response};
use stencil_ui::prelude::*;

const LOG_CAPACITY: usize = 127;

/// State the demo windows edit. Lives across frames so every control keeps
/// its address and with it its id.
pub struct App {
    pub bg: [f32; 3],
    pub log: String,
    log_updated: bool,
    input: String,
    checks: [bool; 3],
    do_button: bool,
    scratch: f32,
    /// Where named controls were laid out last frame, for the input script.
    pub targets: HashMap<&'static str, Rect>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            bg: [90.0, 95.0, 100.0],
            log: String::new(),
            log_updated: false,
            input: String::new(),
            checks: [true, false, true],
            do_button: false,
            scratch: 0.0,
            targets: HashMap::new(),
        }
    }
}

impl App {
    pub fn write_log(&mut self, text: &str) {
        if !self.log.is_empty() {
            self.log.push('\n');
        }
        self.log.push_str(text);
        self.log_updated = true;
        log::info!("log: {text}");
    }

    pub fn background(&self) -> Color {
        Color(self.bg[0] as u8, self.bg[1] as u8, self.bg[2] as u8, 255)
    }

    fn mark(&mut self, ctx: &Context, name: &'static str) {
        self.targets.insert(name, ctx.last_rect());
    }

    fn button(&mut self, ctx: &mut Context, label: &'static str) -> bool {
        let pressed = ctx.button(label).contains(Response::SUBMIT);
        self.mark(ctx, label);
        pressed
    }

    pub fn frame(&mut self, ctx: &mut Context) {
        self.style_window(ctx);
        self.log_window(ctx);
        self.test_window(ctx);
    }

    fn test_window(&mut self, ctx: &mut Context) {
        if !ctx.begin_window("Demo Window", Rect::new(40, 40, 300, 450)) {
            return;
        }
        let win = ctx.current_container();
        {
            let rect = &mut ctx.container_mut(win).rect;
            rect.w = rect.w.max(240);
            rect.h = rect.h.max(300);
        }

        if ctx.header("Window Info").contains(Response::ACTIVE) {
            let rect = ctx.container(win).rect;
            ctx.layout_row(&[54, -1], 0);
            ctx.label("Position:");
            ctx.label(&format!("{}, {}", rect.x, rect.y));
            ctx.label("Size:");
            ctx.label(&format!("{}, {}", rect.w, rect.h));
        }

        if ctx
            .header_ex("Test Buttons", Options::EXPANDED)
            .contains(Response::ACTIVE)
        {
            ctx.layout_row(&[86, -110, -1], 0);
            ctx.label("Test buttons 1:");
            if self.button(ctx, "Button 1") {
                self.write_log("Pressed button 1");
            }
            if self.button(ctx, "Button 2") {
                self.write_log("Pressed button 2");
            }
            ctx.label("Test buttons 2:");
            if self.button(ctx, "Button 3") {
                self.write_log("Pressed button 3");
            }
            if self.button(ctx, "Popup") {
                ctx.open_popup("Test Popup");
            }
            if ctx.begin_popup("Test Popup") {
                if self.button(ctx, "Hello") {
                    self.write_log("Hello from the popup");
                }
                ctx.button("World");
                ctx.end_popup();
            }
        }

        if ctx
            .header_ex("Tree and Text", Options::EXPANDED)
            .contains(Response::ACTIVE)
        {
            ctx.layout_row(&[140, -1], 0);
            ctx.layout_begin_column();
            self.tree(ctx);
            ctx.layout_end_column();

            ctx.layout_begin_column();
            ctx.layout_row(&[-1], 0);
            ctx.text(
                "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Maecenas lacinia, \
                 sem eu lacinia molestie, mi risus faucibus ipsum, eu varius magna felis a nulla.",
            );
            ctx.layout_end_column();
        }

        if ctx
            .header_ex("Background Color", Options::EXPANDED)
            .contains(Response::ACTIVE)
        {
            self.background_sliders(ctx);
        }

        ctx.end_window();
    }

    fn tree(&mut self, ctx: &mut Context) {
        if ctx.begin_treenode("Test 1").contains(Response::ACTIVE) {
            if ctx.begin_treenode("Test 1a").contains(Response::ACTIVE) {
                ctx.label("Hello");
                ctx.label("world");
                ctx.end_treenode();
            }
            if ctx.begin_treenode("Test 1b").contains(Response::ACTIVE) {
                if ctx.button("Button 1").contains(Response::SUBMIT) {
                    self.write_log("Pressed button 1");
                }
                if ctx.button("Button 2").contains(Response::SUBMIT) {
                    self.write_log("Pressed button 2");
                }
                ctx.end_treenode();
            }
            ctx.end_treenode();
        }
        if ctx.begin_treenode("Test 2").contains(Response::ACTIVE) {
            ctx.layout_row(&[54, 54], 0);
            for i in 3..=6 {
                if ctx.button(&format!("Button {i}")).contains(Response::SUBMIT) {
                    self.write_log(&format!("Pressed button {i}"));
                }
            }
            ctx.end_treenode();
        }
        if ctx.begin_treenode("Test 3").contains(Response::ACTIVE) {
            let [a, b, c] = &mut self.checks;
            ctx.checkbox("Checkbox 1", a);
            ctx.checkbox("Checkbox 2", b);
            ctx.checkbox("Checkbox 3", c);
            ctx.end_treenode();
        }
    }

    fn background_sliders(&mut self, ctx: &mut Context) {
        ctx.checkbox("use button for the right layout", &mut self.do_button);
        ctx.layout_row(&[-78, -1], 0);

        ctx.layout_begin_column();
        ctx.layout_row(&[46, -1], 0);
        let top = ctx.layout_next();
        ctx.layout_set_next(top, false);
        for (label, value) in ["Red:", "Green:", "Blue:"].into_iter().zip(&mut self.bg) {
            ctx.label(label);
            ctx.slider(value, 0.0, 255.0);
        }
        let bottom = ctx.layout_next();
        ctx.layout_set_next(bottom, false);
        ctx.layout_end_column();

        let mut r = ctx.layout_next();
        r.h = bottom.y - top.y - ctx.style().margin.y;
        let bg = self.background();
        let hex = bg.to_hex();
        if self.do_button {
            ctx.layout_set_next(r, false);
            let prev = ctx.style().color(ColorId::Button);
            ctx.style_mut().set_color(ColorId::Button, bg);
            ctx.button(&hex);
            ctx.style_mut().set_color(ColorId::Button, prev);
        } else {
            ctx.draw_rect(r, bg);
            ctx.draw_control_text(&hex, r, ColorId::Text, Options::ALIGN_CENTER);
        }
    }

    fn log_window(&mut self, ctx: &mut Context) {
        if !ctx.begin_window("Log Window", Rect::new(350, 40, 300, 200)) {
            return;
        }
        ctx.layout_row(&[-1], -25);
        ctx.begin_panel("Log Output");
        let panel = ctx.current_container();
        ctx.layout_row(&[-1], -1);
        ctx.text(&self.log);
        ctx.end_panel();
        if self.log_updated {
            let c = ctx.container_mut(panel);
            c.scroll.y = c.content_size.y;
            self.log_updated = false;
        }

        let mut submitted = false;
        ctx.layout_row(&[-70, -1], 0);
        if ctx
            .textbox(&mut self.input, LOG_CAPACITY)
            .contains(Response::SUBMIT)
        {
            let id = ctx.current_id();
            ctx.set_focus(id);
            submitted = true;
        }
        self.mark(ctx, "log input");
        if self.button(ctx, "Submit") {
            submitted = true;
        }
        if submitted {
            let line = std::mem::take(&mut self.input);
            self.write_log(&line);
        }

        ctx.end_window();
    }

    fn style_window(&mut self, ctx: &mut Context) {
        if !ctx.begin_window("Style Editor", Rect::new(350, 250, 300, 240)) {
            return;
        }
        let sw = (ctx.container(ctx.current_container()).body.w as f32 * 0.14) as i32;
        ctx.layout_row(&[80, sw, sw, sw, sw, -1], 0);
        for id in ColorId::ALL {
            if id == ColorId::FocusBorder {
                continue;
            }
            ctx.label(&format!("{}:", id.name()));
            let mut color = ctx.style().color(id);
            for channel in 0..4 {
                ctx.push_id(&(id.index() * 4 + channel));
                self.scratch = *color.channel_mut(channel) as f32;
                ctx.slider_ex(&mut self.scratch, 0.0, 255.0, 0.0, 0, Options::ALIGN_CENTER);
                *color.channel_mut(channel) = self.scratch as u8;
                ctx.pop_id();
            }
            ctx.style_mut().set_color(id, color);
            let swatch = ctx.layout_next();
            ctx.draw_rect(swatch, color);
        }
        ctx.end_window();
    }
}
