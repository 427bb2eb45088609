use stencil_core::{ColorId, Context, Id, Key, Options, Rect, Response, Vec2, ptr_bytes};
use unicode_segmentation::UnicodeSegmentation;

/// Single-line text entry.
pub trait TextInput {
    /// Edits `buf`, holding it to at most `capacity` bytes. The buffer's
    /// address is its identity, so keep it in place between frames.
    fn textbox(&mut self, buf: &mut String, capacity: usize) -> Response;
    fn textbox_ex(&mut self, buf: &mut String, capacity: usize, opt: Options) -> Response;
    /// Text box with a caller-chosen id and rectangle.
    fn textbox_raw(
        &mut self,
        buf: &mut String,
        capacity: usize,
        id: Id,
        rect: Rect,
        opt: Options,
    ) -> Response;
}

/// Drops the last grapheme cluster. Returns `false` if `buf` was empty.
pub fn pop_grapheme(buf: &mut String) -> bool {
    match buf.grapheme_indices(true).next_back() {
        Some((start, _)) => {
            buf.truncate(start);
            true
        }
        None => false,
    }
}

/// Longest prefix of `text` no longer than `room` bytes that ends on a char
/// boundary.
fn fitting_prefix(text: &str, room: usize) -> &str {
    if text.len() <= room {
        return text;
    }
    let mut end = room;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

impl TextInput for Context {
    fn textbox(&mut self, buf: &mut String, capacity: usize) -> Response {
        self.textbox_ex(buf, capacity, Options::empty())
    }

    fn textbox_ex(&mut self, buf: &mut String, capacity: usize, opt: Options) -> Response {
        let id = self.get_id(&ptr_bytes(&*buf)[..]);
        let r = self.layout_next();
        self.textbox_raw(buf, capacity, id, r, opt)
    }

    fn textbox_raw(
        &mut self,
        buf: &mut String,
        capacity: usize,
        id: Id,
        r: Rect,
        opt: Options,
    ) -> Response {
        let mut res = Response::empty();
        self.update_control(id, r, opt | Options::HOLD_FOCUS);

        if self.focus() == id {
            let room = capacity.saturating_sub(buf.len());
            let typed = fitting_prefix(self.input().text(), room);
            if !typed.is_empty() {
                buf.push_str(typed);
                res |= Response::CHANGE;
            }
            let keys = self.input().key_pressed;
            if keys.contains(Key::BACKSPACE) && pop_grapheme(buf) {
                res |= Response::CHANGE;
            }
            if keys.contains(Key::RETURN) {
                self.set_focus(Id::NONE);
                res |= Response::SUBMIT;
            }
        }

        self.draw_control_frame(id, r, ColorId::Base, opt);
        if self.focus() == id {
            let style = self.style();
            let (font, size, pad) = (style.font, style.font_size, style.padding.left);
            let color = style.color(ColorId::Text);
            let textw = self.text_width(font, size, buf);
            let texth = self.text_height(font, size);
            // Right-align once the text outgrows the box so the caret stays visible.
            let ofx = r.w - pad - textw - 1;
            let textx = r.x + ofx.min(pad);
            let texty = r.y + (r.h - texth) / 2;
            self.push_clip(r);
            self.draw_text(font, size, buf, Vec2::new(textx, texty), color);
            self.draw_rect(Rect::new(textx + textw, texty, 1, texth), color);
            self.pop_clip();
        } else {
            self.draw_control_text(buf, r, ColorId::Text, opt);
        }
        self.draw_focus_ring(id, r);
        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backspace_removes_whole_clusters() {
        let mut s = String::from("ae\u{301}");
        assert!(pop_grapheme(&mut s));
        assert_eq!(s, "a");
        assert!(pop_grapheme(&mut s));
        assert!(!pop_grapheme(&mut s));
        assert!(s.is_empty());
    }

    #[test]
    fn prefix_never_splits_a_char() {
        assert_eq!(fitting_prefix("héllo", 2), "h");
        assert_eq!(fitting_prefix("héllo", 3), "hé");
        assert_eq!(fitting_prefix("ok", 10), "ok");
        assert_eq!(fitting_prefix("ok", 0), "");
    }
}
