use crate::scene::Scene;
use crate::{Color, FontId, Icon, Rect, Vec2};

/// Rasterizes a finished [`Scene`]. Geometry is already in screen space and
/// clip runs are bracketed by `push_clip`/`pop_clip`.
pub trait RenderBackend {
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn stroke_rect(&mut self, rect: Rect, color: Color);
    fn text(&mut self, font: FontId, size: u16, text: &str, pos: Vec2, color: Color);
    fn icon(&mut self, icon: Icon, rect: Rect, color: Color);
    fn push_clip(&mut self, rect: Rect);
    fn pop_clip(&mut self);

    fn frame(&mut self, scene: &Scene)
    where
        Self: Sized,
    {
        scene.replay(self);
    }
}

/// Font measurement supplied by the host. Must be pure within a frame; text
/// wrapping calls it once per word.
pub trait TextMetrics {
    fn text_width(&self, font: FontId, size: u16, text: &str) -> i32;
    fn text_height(&self, font: FontId, size: u16) -> i32;
}
