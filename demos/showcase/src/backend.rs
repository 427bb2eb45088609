use stencil_core::{Color, FontId, Icon, Rect, RenderBackend, TextMetrics, Vec2};

/// Monospace metrics: every byte is `advance` pixels wide.
pub struct Mono {
    pub advance: i32,
    pub line_height: i32,
}

impl Default for Mono {
    fn default() -> Self {
        Self {
            advance: 7,
            line_height: 14,
        }
    }
}

impl TextMetrics for Mono {
    fn text_width(&self, _font: FontId, _size: u16, text: &str) -> i32 {
        text.len() as i32 * self.advance
    }

    fn text_height(&self, _font: FontId, _size: u16) -> i32 {
        self.line_height
    }
}

/// Backend that rasterizes nothing; it counts primitives and traces them.
#[derive(Debug, Default)]
pub struct LogBackend {
    pub rects: usize,
    pub borders: usize,
    pub texts: usize,
    pub icons: usize,
    clip_depth: usize,
    pub max_clip_depth: usize,
}

impl RenderBackend for LogBackend {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.rects += 1;
        log::trace!("fill {rect:?} {}", color.to_hex());
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        self.borders += 1;
        log::trace!("stroke {rect:?} {}", color.to_hex());
    }

    fn text(&mut self, _font: FontId, _size: u16, text: &str, pos: Vec2, color: Color) {
        self.texts += 1;
        log::trace!("text {pos:?} {text:?} {}", color.to_hex());
    }

    fn icon(&mut self, icon: Icon, rect: Rect, color: Color) {
        self.icons += 1;
        log::trace!("icon {icon:?} {rect:?} {}", color.to_hex());
    }

    fn push_clip(&mut self, rect: Rect) {
        self.clip_depth += 1;
        self.max_clip_depth = self.max_clip_depth.max(self.clip_depth);
        log::trace!("clip {rect:?}");
    }

    fn pop_clip(&mut self) {
        self.clip_depth = self.clip_depth.saturating_sub(1);
    }
}
