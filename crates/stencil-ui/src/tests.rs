use crate::prelude::*;
use crate::wrap_point;
use stencil_core::*;

/// Eight pixels per byte, ten pixels per line.
struct FixedMetrics;

impl TextMetrics for FixedMetrics {
    fn text_width(&self, _font: FontId, _size: u16, text: &str) -> i32 {
        text.len() as i32 * 8
    }
    fn text_height(&self, _font: FontId, _size: u16) -> i32 {
        10
    }
}

const PLAIN: Options = Options::NO_TITLE
    .union(Options::NO_RESIZE)
    .union(Options::NO_FRAME)
    .union(Options::NO_SCROLL);

/// One frame with a single borderless window covering (0,0)-(200,200).
fn run(ctx: &mut Context, body: impl FnOnce(&mut Context)) {
    ctx.begin();
    if ctx.begin_window_ex("test", Rect::new(0, 0, 200, 200), PLAIN) {
        body(ctx);
        ctx.end_window();
    }
    ctx.end();
}

/// Moves the pointer to `(x, y)` and runs a frame so the window becomes the
/// hover root before anything is pressed.
fn settle(ctx: &mut Context, x: i32, y: i32, body: impl Fn(&mut Context)) {
    ctx.input_mouse_move(x, y);
    run(ctx, &body);
    run(ctx, &body);
}

#[test]
fn button_fires_once_on_release() {
    let mut ctx = Context::new(FixedMetrics);
    let mut log = Vec::new();
    let step = |ctx: &mut Context| {
        let mut res = Response::empty();
        run(ctx, |ctx| {
            ctx.layout_row(&[70], 40);
            res = ctx.button("ok");
            assert_eq!(ctx.last_rect(), Rect::new(10, 10, 50, 20));
        });
        res
    };

    ctx.input_mouse_move(20, 15);
    log.push(step(&mut ctx));
    log.push(step(&mut ctx));
    ctx.input_mouse_down(20, 15, MouseButton::LEFT);
    log.push(step(&mut ctx));
    ctx.input_mouse_up(20, 15, MouseButton::LEFT);
    log.push(step(&mut ctx));
    log.push(step(&mut ctx));

    let fired: Vec<bool> = log.iter().map(|r| r.contains(Response::SUBMIT)).collect();
    assert_eq!(fired, [false, false, false, true, false]);
}

#[test]
fn button_release_outside_does_nothing() {
    let mut ctx = Context::new(FixedMetrics);
    let decl = |ctx: &mut Context| {
        ctx.layout_row(&[70], 40);
        ctx.button("ok");
    };
    settle(&mut ctx, 20, 15, decl);
    ctx.input_mouse_down(20, 15, MouseButton::LEFT);
    run(&mut ctx, decl);

    ctx.input_mouse_up(150, 150, MouseButton::LEFT);
    let mut res = Response::empty();
    run(&mut ctx, |ctx| {
        ctx.layout_row(&[70], 40);
        res = ctx.button("ok");
    });
    assert!(res.is_empty());
    assert!(ctx.focus().is_none());
}

#[test]
fn click_within_one_frame_fires_and_releases_focus() {
    let mut ctx = Context::new(FixedMetrics);
    let decl = |ctx: &mut Context| {
        ctx.layout_row(&[70], 40);
        ctx.button("ok");
    };
    settle(&mut ctx, 20, 15, decl);

    ctx.input_mouse_down(20, 15, MouseButton::LEFT);
    ctx.input_mouse_up(20, 15, MouseButton::LEFT);
    let mut fired = Vec::new();
    for _ in 0..3 {
        run(&mut ctx, |ctx| {
            ctx.layout_row(&[70], 40);
            fired.push(ctx.button("ok").contains(Response::SUBMIT));
        });
    }
    assert_eq!(fired, [true, false, false]);
    assert!(ctx.focus().is_none());
}

#[test]
fn checkbox_clicked_within_one_frame_lets_go_of_focus() {
    let mut ctx = Context::new(FixedMetrics);
    let mut on = false;
    let mut frame = |ctx: &mut Context, on: &mut bool| {
        run(ctx, |ctx| {
            ctx.layout_row(&[120], 40);
            ctx.checkbox("On", on);
        });
    };
    ctx.input_mouse_move(15, 15);
    frame(&mut ctx, &mut on);
    frame(&mut ctx, &mut on);

    ctx.input_mouse_down(15, 15, MouseButton::LEFT);
    ctx.input_mouse_up(15, 15, MouseButton::LEFT);
    frame(&mut ctx, &mut on);
    assert!(on);
    assert!(ctx.focus().is_some());

    frame(&mut ctx, &mut on);
    assert!(on);
    assert!(ctx.focus().is_none());
}

#[test]
fn checkbox_toggles_on_press() {
    let mut ctx = Context::new(FixedMetrics);
    let mut on = false;
    let mut changes = 0;
    let mut frame = |ctx: &mut Context, on: &mut bool| {
        run(ctx, |ctx| {
            ctx.layout_row(&[120], 40);
            if ctx.checkbox("On", on).contains(Response::CHANGE) {
                changes += 1;
            }
        });
    };

    ctx.input_mouse_move(15, 15);
    frame(&mut ctx, &mut on);
    frame(&mut ctx, &mut on);
    ctx.input_mouse_down(15, 15, MouseButton::LEFT);
    frame(&mut ctx, &mut on);
    assert!(on);
    ctx.input_mouse_up(15, 15, MouseButton::LEFT);
    frame(&mut ctx, &mut on);
    assert!(on);
    assert_eq!(changes, 1);
}

#[test]
fn checked_checkbox_scene() {
    let mut ctx = Context::new(FixedMetrics);
    let mut on = true;
    run(&mut ctx, |ctx| {
        ctx.layout_row(&[120], 40);
        ctx.checkbox("On", &mut on);
    });
    insta::assert_snapshot!(ctx.scene().dump(), @r#"
    rect 10,10 20x20 #1E1E1E
    border 9,9 22x22 #191919
    icon Check 10,10 20x20 #E6E6E6
    text 30,15 "On" #E6E6E6
    "#);
}

#[test]
fn textbox_edits_and_submits() {
    let mut ctx = Context::new(FixedMetrics);
    let mut buf = String::new();
    let type_frame = |ctx: &mut Context, buf: &mut String| {
        let mut res = Response::empty();
        run(ctx, |ctx| {
            ctx.layout_row(&[120], 40);
            res = ctx.textbox(buf, 16);
        });
        res
    };

    ctx.input_mouse_move(15, 15);
    type_frame(&mut ctx, &mut buf);
    type_frame(&mut ctx, &mut buf);
    ctx.input_mouse_down(15, 15, MouseButton::LEFT);
    type_frame(&mut ctx, &mut buf);
    ctx.input_mouse_up(15, 15, MouseButton::LEFT);
    type_frame(&mut ctx, &mut buf);
    assert!(ctx.focus().is_some(), "text boxes hold focus after release");

    ctx.input_text("hey");
    let res = type_frame(&mut ctx, &mut buf);
    assert_eq!(buf, "hey");
    assert!(res.contains(Response::CHANGE));

    ctx.input_key_down(Key::BACKSPACE);
    type_frame(&mut ctx, &mut buf);
    ctx.input_key_up(Key::BACKSPACE);
    assert_eq!(buf, "he");

    ctx.input_key_down(Key::RETURN);
    let res = type_frame(&mut ctx, &mut buf);
    assert!(res.contains(Response::SUBMIT));
    assert!(ctx.focus().is_none());
}

#[test]
fn textbox_respects_capacity() {
    let mut ctx = Context::new(FixedMetrics);
    let mut buf = String::from("ab");
    let id = Id(7);
    let r = Rect::new(10, 10, 100, 20);
    ctx.input_text("cdef");
    run(&mut ctx, |ctx| {
        ctx.set_focus(id);
        ctx.textbox_raw(&mut buf, 4, id, r, Options::empty());
    });
    assert_eq!(buf, "abcd");
}

#[test]
fn treenode_expands_after_click_and_indents() {
    let mut ctx = Context::new(FixedMetrics);
    let mut child_x = None;
    let node = |ctx: &mut Context, child_x: &mut Option<i32>| {
        let mut expanded = false;
        run(ctx, |ctx| {
            if ctx.begin_treenode("Node").contains(Response::ACTIVE) {
                expanded = true;
                *child_x = Some(ctx.layout_next().x);
                ctx.end_treenode();
            }
        });
        expanded
    };

    ctx.input_mouse_move(20, 20);
    assert!(!node(&mut ctx, &mut child_x));
    assert!(!node(&mut ctx, &mut child_x));
    ctx.input_mouse_down(20, 20, MouseButton::LEFT);
    assert!(!node(&mut ctx, &mut child_x), "takes effect next frame");
    ctx.input_mouse_up(20, 20, MouseButton::LEFT);
    assert!(node(&mut ctx, &mut child_x));
    assert_eq!(child_x, Some(34));

    ctx.input_mouse_down(20, 20, MouseButton::LEFT);
    assert!(node(&mut ctx, &mut child_x));
    ctx.input_mouse_up(20, 20, MouseButton::LEFT);
    assert!(!node(&mut ctx, &mut child_x));
    assert!(ctx.treenode_pool().is_empty());
}

#[test]
fn expanded_header_starts_open() {
    let mut ctx = Context::new(FixedMetrics);
    let mut res = Response::empty();
    run(&mut ctx, |ctx| {
        res = ctx.header_ex("Section", Options::EXPANDED);
    });
    assert!(res.contains(Response::ACTIVE));
}

#[test]
fn slider_tracks_pointer() {
    let mut ctx = Context::new(FixedMetrics);
    let mut value = 0.0f32;
    let frame = |ctx: &mut Context, value: &mut f32| {
        let mut res = Response::empty();
        run(ctx, |ctx| {
            ctx.layout_row(&[110], 40);
            res = ctx.slider(value, 0.0, 100.0);
        });
        res
    };

    ctx.input_mouse_move(55, 15);
    frame(&mut ctx, &mut value);
    frame(&mut ctx, &mut value);
    ctx.input_mouse_down(55, 15, MouseButton::LEFT);
    let res = frame(&mut ctx, &mut value);
    assert_eq!(value, 50.0);
    assert!(res.contains(Response::CHANGE));

    ctx.input_mouse_move(500, 15);
    frame(&mut ctx, &mut value);
    assert_eq!(value, 100.0, "clamped to the top of the range");
}

#[test]
fn stepped_integer_slider() {
    let mut ctx = Context::new(FixedMetrics);
    let mut value = 0i32;
    let frame = |ctx: &mut Context, value: &mut i32| {
        run(ctx, |ctx| {
            ctx.layout_row(&[110], 40);
            ctx.slider_ex(value, 0, 100, 10, 0, Options::ALIGN_CENTER);
        });
    };
    ctx.input_mouse_move(50, 15);
    frame(&mut ctx, &mut value);
    frame(&mut ctx, &mut value);
    ctx.input_mouse_down(50, 15, MouseButton::LEFT);
    frame(&mut ctx, &mut value);
    assert_eq!(value, 40);
}

#[test]
fn number_drags_by_step() {
    let mut ctx = Context::new(FixedMetrics);
    let mut value = 1.0f32;
    let frame = |ctx: &mut Context, value: &mut f32| {
        let mut res = Response::empty();
        run(ctx, |ctx| {
            ctx.layout_row(&[120], 40);
            res = ctx.number(value, 0.5);
        });
        res
    };

    ctx.input_mouse_move(15, 15);
    frame(&mut ctx, &mut value);
    frame(&mut ctx, &mut value);
    ctx.input_mouse_down(15, 15, MouseButton::LEFT);
    frame(&mut ctx, &mut value);
    assert_eq!(value, 1.0);
    ctx.input_mouse_move(25, 15);
    let res = frame(&mut ctx, &mut value);
    assert_eq!(value, 6.0);
    assert!(res.contains(Response::CHANGE));
}

#[test]
fn shift_click_edits_number_as_text() {
    let mut ctx = Context::new(FixedMetrics);
    let mut value = 1.5f32;
    let frame = |ctx: &mut Context, value: &mut f32| {
        let mut res = Response::empty();
        run(ctx, |ctx| {
            ctx.layout_row(&[120], 40);
            res = ctx.number(value, 0.5);
        });
        res
    };

    ctx.input_mouse_move(15, 15);
    frame(&mut ctx, &mut value);
    frame(&mut ctx, &mut value);
    ctx.input_key_down(Key::SHIFT);
    ctx.input_mouse_down(15, 15, MouseButton::LEFT);
    frame(&mut ctx, &mut value);
    assert_eq!(ctx.number_edit().buf, "1.5");

    ctx.input_key_up(Key::SHIFT);
    ctx.input_mouse_up(15, 15, MouseButton::LEFT);
    ctx.input_key_down(Key::BACKSPACE);
    frame(&mut ctx, &mut value);
    ctx.input_key_up(Key::BACKSPACE);
    ctx.input_text("75");
    frame(&mut ctx, &mut value);
    assert_eq!(ctx.number_edit().buf, "1.75");
    assert_eq!(value, 1.5, "not committed while editing");

    ctx.input_key_down(Key::RETURN);
    let res = frame(&mut ctx, &mut value);
    assert_eq!(value, 1.75);
    assert!(res.contains(Response::CHANGE));
    assert!(ctx.number_edit().id.is_none());
}

#[test]
fn text_wraps_at_word_boundaries() {
    let mut ctx = Context::new(FixedMetrics);
    run(&mut ctx, |ctx| {
        ctx.layout_row(&[-1], 0);
        ctx.text("one two three four five six\nend");
    });
    let lines: Vec<(i32, i32, &str)> = ctx
        .scene()
        .nodes
        .iter()
        .filter_map(|n| match n {
            SceneNode::Text { pos, text, .. } => Some((pos.x, pos.y, text.as_str())),
            _ => None,
        })
        .collect();
    assert_eq!(
        lines,
        [
            (20, 20, "one two three"),
            (20, 30, "four five six"),
            (20, 40, "end"),
        ]
    );
}

#[test]
fn wrap_point_keeps_long_words_whole() {
    let m = FixedMetrics;
    assert_eq!(wrap_point(&m, FontId::DEFAULT, 12, "abcdefgh ij", 16), 8);
    assert_eq!(wrap_point(&m, FontId::DEFAULT, 12, "ab cd", 100), 5);
    assert_eq!(wrap_point(&m, FontId::DEFAULT, 12, "", 100), 0);
}
