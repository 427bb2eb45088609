//! Sliders and drag-to-change numbers.

use stencil_core::{
    ColorId, Context, Id, Key, MAX_FMT, MouseButton, Options, Rect, Response, ptr_bytes,
};

use crate::TextInput;

/// A value a slider can drive.
pub trait Scalar: Copy + PartialOrd {
    const ZERO: Self;

    /// Value under a point `offset` pixels into a track `width` pixels wide.
    fn at_offset(low: Self, high: Self, offset: i32, width: i32) -> Self;

    /// Nearest multiple of `step`; unchanged for a zero step.
    fn snap(self, step: Self) -> Self;

    /// Pixel offset of `self` on a track `width` pixels wide.
    fn offset_in(self, low: Self, high: Self, width: i32) -> i32;

    fn display(self, precision: usize) -> String;
}

impl Scalar for i32 {
    const ZERO: Self = 0;

    fn at_offset(low: Self, high: Self, offset: i32, width: i32) -> Self {
        if width <= 0 {
            return low;
        }
        let v = low as i64 + offset as i64 * (high as i64 - low as i64) / width as i64;
        v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
    }

    fn snap(self, step: Self) -> Self {
        if step == 0 {
            return self;
        }
        let step = step as i64;
        let v = (self as i64 + step / 2).div_euclid(step) * step;
        v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
    }

    fn offset_in(self, low: Self, high: Self, width: i32) -> i32 {
        if high == low {
            return 0;
        }
        ((self as i64 - low as i64) * width as i64 / (high as i64 - low as i64)) as i32
    }

    fn display(self, _precision: usize) -> String {
        self.to_string()
    }
}

macro_rules! float_scalar {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            const ZERO: Self = 0.0;

            fn at_offset(low: Self, high: Self, offset: i32, width: i32) -> Self {
                if width <= 0 {
                    return low;
                }
                low + offset as $t * (high - low) / width as $t
            }

            fn snap(self, step: Self) -> Self {
                if step == 0.0 {
                    return self;
                }
                ((self + step / 2.0) / step).floor() * step
            }

            fn offset_in(self, low: Self, high: Self, width: i32) -> i32 {
                if high == low {
                    return 0;
                }
                ((self - low) * width as $t / (high - low)) as i32
            }

            fn display(self, precision: usize) -> String {
                format!("{self:.precision$}")
            }
        }
    )*};
}

float_scalar!(f32, f64);

fn clamp<T: Scalar>(v: T, low: T, high: T) -> T {
    if v < low {
        low
    } else if v > high {
        high
    } else {
        v
    }
}

/// Three significant digits, trailing zeros dropped. Seeds the edit buffer
/// when a number switches into text entry.
pub fn format_real(v: f32) -> String {
    if v == 0.0 || !v.is_finite() {
        return format!("{v}");
    }
    let exp = v.abs().log10().floor() as i32;
    if !(-4..3).contains(&exp) {
        return format!("{v:.2e}");
    }
    let decimals = (2 - exp).max(0) as usize;
    let s = format!("{v:.decimals$}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

pub trait Sliders {
    /// Slider with no step, two decimals, centred text.
    fn slider<T: Scalar>(&mut self, value: &mut T, low: T, high: T) -> Response;
    fn slider_ex<T: Scalar>(
        &mut self,
        value: &mut T,
        low: T,
        high: T,
        step: T,
        precision: usize,
        opt: Options,
    ) -> Response;
    /// Drag horizontally to change `value` by `step` per pixel. Shift+click
    /// types a value instead.
    fn number(&mut self, value: &mut f32, step: f32) -> Response;
    fn number_ex(&mut self, value: &mut f32, step: f32, precision: usize, opt: Options)
    -> Response;
}

/// Runs the text-entry mode of a number. Returns `true` while editing, when
/// the caller must not draw the normal control.
fn number_textbox(ctx: &mut Context, value: &mut f32, r: Rect, id: Id) -> bool {
    let input = ctx.input();
    if input.mouse_pressed == MouseButton::LEFT
        && input.key_down.contains(Key::SHIFT)
        && ctx.hover() == id
    {
        let buf = format_real(*value);
        let edit = ctx.number_edit_mut();
        edit.id = id;
        edit.buf = buf;
    }
    if ctx.number_edit().id != id {
        return false;
    }

    let mut buf = std::mem::take(&mut ctx.number_edit_mut().buf);
    let res = ctx.textbox_raw(&mut buf, MAX_FMT, id, r, Options::empty());
    if !res.contains(Response::SUBMIT) && ctx.focus() == id {
        ctx.number_edit_mut().buf = buf;
        return true;
    }

    match buf.trim().parse::<f32>() {
        Ok(v) => *value = v,
        Err(err) => log::warn!("ignoring number entry {buf:?}: {err}"),
    }
    ctx.number_edit_mut().id = Id::NONE;
    false
}

impl Sliders for Context {
    fn slider<T: Scalar>(&mut self, value: &mut T, low: T, high: T) -> Response {
        self.slider_ex(value, low, high, T::ZERO, 2, Options::ALIGN_CENTER)
    }

    fn slider_ex<T: Scalar>(
        &mut self,
        value: &mut T,
        low: T,
        high: T,
        step: T,
        precision: usize,
        opt: Options,
    ) -> Response {
        let last = *value;
        let mut v = last;
        let id = self.get_id(&ptr_bytes(&*value)[..]);
        let base = self.layout_next();
        self.update_control(id, base, opt);

        let input = self.input();
        if self.focus() == id && (input.mouse_down | input.mouse_pressed) == MouseButton::LEFT {
            v = T::at_offset(low, high, input.mouse_pos.x - base.x, base.w).snap(step);
        }
        v = clamp(v, low, high);
        *value = v;
        let mut res = Response::empty();
        if last != v {
            res |= Response::CHANGE;
        }

        self.draw_control_frame(id, base, ColorId::Base, opt);
        let w = self.style().thumb_size;
        let x = v.offset_in(low, high, base.w - w);
        let thumb = Rect::new(base.x + x, base.y, w, base.h);
        self.draw_control_frame(id, thumb, ColorId::Button, opt);
        let text = v.display(precision);
        self.draw_control_text(&text, base, ColorId::Text, opt);
        res
    }

    fn number(&mut self, value: &mut f32, step: f32) -> Response {
        self.number_ex(value, step, 2, Options::ALIGN_CENTER)
    }

    fn number_ex(
        &mut self,
        value: &mut f32,
        step: f32,
        precision: usize,
        opt: Options,
    ) -> Response {
        let id = self.get_id(&ptr_bytes(&*value)[..]);
        let base = self.layout_next();
        let last = *value;

        if number_textbox(self, value, base, id) {
            return Response::empty();
        }

        self.update_control(id, base, opt);
        if self.focus() == id && self.input().mouse_down == MouseButton::LEFT {
            *value += self.input().mouse_delta.x as f32 * step;
        }
        let mut res = Response::empty();
        if *value != last {
            res |= Response::CHANGE;
        }

        self.draw_control_frame(id, base, ColorId::Base, opt);
        let text = format!("{:.*}", precision, *value);
        self.draw_control_text(&text, base, ColorId::Text, opt);
        self.draw_focus_ring(id, base);
        res
    }
}
