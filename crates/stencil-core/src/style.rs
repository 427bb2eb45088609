//! Theme and sizing configuration.
//!
//! `Style::default()` is the built-in dark theme. With the `serde` feature a
//! style can be loaded from any serde format; the frame hook is not
//! serialized and comes back as [`default_draw_frame`].

use crate::{Color, Context, Rect, Sides, Vec2};

pub const COLOR_COUNT: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(usize)]
pub enum ColorId {
    Text,
    Border,
    WindowBg,
    TitleBg,
    FooterBg,
    TitleText,
    PanelBg,
    Button,
    ButtonHover,
    ButtonFocus,
    Base,
    BaseHover,
    BaseFocus,
    ScrollBase,
    ScrollThumb,
    FocusBorder,
}

impl ColorId {
    pub const ALL: [ColorId; COLOR_COUNT] = [
        ColorId::Text,
        ColorId::Border,
        ColorId::WindowBg,
        ColorId::TitleBg,
        ColorId::FooterBg,
        ColorId::TitleText,
        ColorId::PanelBg,
        ColorId::Button,
        ColorId::ButtonHover,
        ColorId::ButtonFocus,
        ColorId::Base,
        ColorId::BaseHover,
        ColorId::BaseFocus,
        ColorId::ScrollBase,
        ColorId::ScrollThumb,
        ColorId::FocusBorder,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorId::Text => "text",
            ColorId::Border => "border",
            ColorId::WindowBg => "windowbg",
            ColorId::TitleBg => "titlebg",
            ColorId::FooterBg => "footerbg",
            ColorId::TitleText => "titletext",
            ColorId::PanelBg => "panelbg",
            ColorId::Button => "button",
            ColorId::ButtonHover => "buttonhover",
            ColorId::ButtonFocus => "buttonfocus",
            ColorId::Base => "base",
            ColorId::BaseHover => "basehover",
            ColorId::BaseFocus => "basefocus",
            ColorId::ScrollBase => "scrollbase",
            ColorId::ScrollThumb => "scrollthumb",
            ColorId::FocusBorder => "focusborder",
        }
    }

    /// Hover variant of a control colour (`Button`, `Base`); other ids are
    /// returned unchanged.
    pub fn hover(self) -> ColorId {
        match self {
            ColorId::Button => ColorId::ButtonHover,
            ColorId::Base => ColorId::BaseHover,
            other => other,
        }
    }

    pub fn focus(self) -> ColorId {
        match self {
            ColorId::Button => ColorId::ButtonFocus,
            ColorId::Base => ColorId::BaseFocus,
            other => other,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Icon {
    Close,
    Resize,
    Check,
    Collapsed,
    Expanded,
}

/// Opaque font handle, interpreted only by [`TextMetrics`](crate::TextMetrics)
/// and the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontId(pub i32);

impl FontId {
    pub const DEFAULT: FontId = FontId(-1);
}

pub type DrawFrameFn = fn(&mut Context, Rect, ColorId);

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Style {
    pub font: FontId,
    pub font_size: u16,
    pub icon_font: FontId,
    pub icon_size: u16,
    /// Default cell size for zero-sized layout requests.
    pub size: Vec2,
    pub padding: Sides,
    pub margin: Vec2,
    pub indent: i32,
    pub title_height: i32,
    pub footer_height: i32,
    pub scrollbar_size: i32,
    pub thumb_size: i32,
    pub colors: [Color; COLOR_COUNT],
    #[cfg_attr(feature = "serde", serde(skip, default = "default_draw_frame_fn"))]
    pub draw_frame: DrawFrameFn,
}

impl Style {
    pub fn color(&self, id: ColorId) -> Color {
        self.colors[id.index()]
    }

    pub fn set_color(&mut self, id: ColorId, c: Color) {
        self.colors[id.index()] = c;
    }

    /// Line height of the body font as reported by `metrics`.
    pub fn text_height(&self, metrics: &dyn crate::TextMetrics) -> i32 {
        metrics.text_height(self.font, self.font_size)
    }
}

impl Default for Style {
    fn default() -> Self {
        Style {
            font: FontId::DEFAULT,
            font_size: 12,
            icon_font: FontId::DEFAULT,
            icon_size: 12,
            size: Vec2::new(68, 44),
            padding: Sides::all(0),
            margin: Vec2::new(10, 10),
            indent: 24,
            title_height: 24,
            footer_height: 20,
            scrollbar_size: 12,
            thumb_size: 8,
            colors: [
                Color(230, 230, 230, 255),
                Color(25, 25, 25, 255),
                Color(50, 50, 50, 255),
                Color(25, 25, 25, 255),
                Color(115, 115, 115, 255),
                Color(240, 240, 240, 255),
                Color(0, 0, 0, 0),
                Color(75, 75, 75, 255),
                Color(95, 95, 95, 255),
                Color(115, 115, 115, 255),
                Color(30, 30, 30, 255),
                Color(35, 35, 35, 255),
                Color(40, 40, 40, 255),
                Color(43, 43, 43, 255),
                Color(30, 30, 30, 255),
                Color(0, 255, 255, 100),
            ],
            draw_frame: default_draw_frame,
        }
    }
}

#[cfg(feature = "serde")]
fn default_draw_frame_fn() -> DrawFrameFn {
    default_draw_frame
}

/// Fills `rect` and, for control colours, outlines it one pixel outside with
/// the border colour.
pub fn default_draw_frame(ctx: &mut Context, rect: Rect, color: ColorId) {
    let fill = ctx.style().color(color);
    ctx.draw_rect(rect, fill);
    if matches!(
        color,
        ColorId::ScrollBase | ColorId::ScrollThumb | ColorId::TitleBg
    ) {
        return;
    }
    let border = ctx.style().color(ColorId::Border);
    if border.a() > 0 {
        ctx.draw_box(rect.expand(1), border);
    }
}
