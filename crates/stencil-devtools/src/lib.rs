use web_time::Instant;

use stencil_core::{Context, Options, Rect};
use stencil_ui::Widgets;

pub struct Hud {
    pub enabled: bool,
    /// Where the overlay window first appears.
    pub rect: Rect,
    frame_count: u64,
    last_frame: Option<Instant>,
    build_start: Option<Instant>,
    fps_smooth: f32,
    pub metrics: Option<Metrics>,
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}

impl Hud {
    pub fn new() -> Self {
        Self {
            enabled: false,
            rect: Rect::new(8, 8, 180, 160),
            frame_count: 0,
            last_frame: None,
            build_start: None,
            fps_smooth: 0.0,
            metrics: None,
        }
    }

    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
        log::debug!("devtools hud {}", if self.enabled { "on" } else { "off" });
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn fps(&self) -> f32 {
        self.fps_smooth
    }

    /// Call right before `Context::begin`.
    pub fn start(&mut self) {
        self.build_start = Some(Instant::now());
    }

    /// Call right after `Context::end`.
    pub fn finish(&mut self, ctx: &Context) {
        let now = Instant::now();
        let build_ms = self
            .build_start
            .take()
            .map(|s| (now - s).as_secs_f32() * 1000.0)
            .unwrap_or(0.0);
        self.metrics = Some(Metrics {
            build_ms,
            scene_nodes: ctx.scene().len(),
        });
        self.tick(now);
    }

    fn tick(&mut self, now: Instant) {
        self.frame_count += 1;
        if let Some(prev) = self.last_frame.replace(now) {
            let dt = (now - prev).as_secs_f32();
            if dt > 0.0 {
                let fps = 1.0 / dt;
                // simple EMA
                let a = 0.2;
                self.fps_smooth = if self.fps_smooth == 0.0 {
                    fps
                } else {
                    (1.0 - a) * self.fps_smooth + a * fps
                };
            }
        }
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("frame: {}", self.frame_count),
            format!("fps: {:.1}", self.fps_smooth),
        ];
        if let Some(m) = &self.metrics {
            lines.push(format!("build: {:.2} ms", m.build_ms));
            lines.push(format!("nodes: {}", m.scene_nodes));
        }
        lines
    }

    /// Declares the overlay window. Call between `begin` and `end`.
    pub fn window(&self, ctx: &mut Context) {
        if !self.enabled {
            return;
        }
        let opt = Options::NO_CLOSE | Options::NO_RESIZE | Options::NO_SCROLL;
        if ctx.begin_window_ex("Devtools", self.rect, opt) {
            let style = ctx.style();
            let (font, size, margin) = (style.font, style.font_size, style.margin.y);
            let h = ctx.text_height(font, size);
            ctx.layout_row(&[160], h + 2 * margin);
            for line in self.lines() {
                ctx.label(&line);
            }
            ctx.end_window();
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Metrics {
    pub build_ms: f32,
    pub scene_nodes: usize,
}
