//! Headless tour of the toolkit: builds the demo, log and style editor
//! windows, replays a short input script against them and reports what was
//! drawn.
//!
//! `showcase [theme.json]` loads a `Style` from JSON before starting.
//! `RUST_LOG=trace` prints every draw call.

mod app;
mod backend;

use std::collections::VecDeque;

use anyhow::Context as _;
use stencil_core::{Context, Key, MouseButton, Rect, RenderBackend, Style, Vec2};
use stencil_devtools::Hud;

use app::App;
use backend::{LogBackend, Mono};

/// One scripted step. Clicks and typing expand into several frames.
#[derive(Clone, Copy, Debug)]
enum Step {
    Click(&'static str),
    Type(&'static str),
    Press(Key),
    Idle(usize),
}

#[derive(Clone, Copy, Debug)]
enum Raw {
    Move(Vec2),
    Down(Vec2),
    Up(Vec2),
    Text(&'static str),
    KeyDown(Key),
    KeyUp(Key),
    Nothing,
}

fn centre(r: Rect) -> Vec2 {
    Vec2::new(r.x + r.w / 2, r.y + r.h / 2)
}

fn expand(step: Step, app: &App) -> Vec<Raw> {
    match step {
        Step::Click(name) => match app.targets.get(name) {
            Some(r) => {
                let p = centre(*r);
                vec![Raw::Move(p), Raw::Nothing, Raw::Down(p), Raw::Up(p)]
            }
            None => {
                log::warn!("no control named {name:?} on screen, skipping click");
                Vec::new()
            }
        },
        Step::Type(text) => vec![Raw::Text(text)],
        Step::Press(key) => vec![Raw::KeyDown(key), Raw::KeyUp(key)],
        Step::Idle(n) => vec![Raw::Nothing; n],
    }
}

fn apply(ctx: &mut Context, raw: Raw) {
    match raw {
        Raw::Move(p) => ctx.input_mouse_move(p.x, p.y),
        Raw::Down(p) => ctx.input_mouse_down(p.x, p.y, MouseButton::LEFT),
        Raw::Up(p) => ctx.input_mouse_up(p.x, p.y, MouseButton::LEFT),
        Raw::Text(t) => ctx.input_text(t),
        Raw::KeyDown(k) => ctx.input_key_down(k),
        Raw::KeyUp(k) => ctx.input_key_up(k),
        Raw::Nothing => {}
    }
}

fn load_style() -> anyhow::Result<Style> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(Style::default());
    };
    let json = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let style = serde_json::from_str(&json).with_context(|| format!("parsing theme {path}"))?;
    log::info!("loaded theme from {path}");
    Ok(style)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut ctx = Context::with_style(Mono::default(), load_style()?);
    let mut app = App::default();
    let mut hud = Hud::new();
    hud.rect = Rect::new(40, 500, 180, 160);
    hud.toggle();

    let script = [
        Step::Idle(1),
        Step::Click("Button 1"),
        Step::Click("Button 3"),
        Step::Click("log input"),
        Step::Type("hello"),
        Step::Press(Key::RETURN),
        Step::Type("again"),
        Step::Click("Submit"),
        Step::Idle(2),
    ];

    let mut pending: VecDeque<Step> = script.into_iter().collect();
    let mut queue: VecDeque<Raw> = VecDeque::new();
    let mut backend = LogBackend::default();

    loop {
        if queue.is_empty() {
            match pending.pop_front() {
                Some(step) => queue.extend(expand(step, &app)),
                None => break,
            }
            if queue.is_empty() {
                continue;
            }
        }
        if let Some(raw) = queue.pop_front() {
            apply(&mut ctx, raw);
        }

        hud.start();
        ctx.begin();
        app.frame(&mut ctx);
        hud.window(&mut ctx);
        ctx.end();
        hud.finish(&ctx);
        backend = LogBackend::default();
        backend.frame(ctx.scene());
    }

    println!("frames: {}", ctx.frame());
    println!(
        "last frame: {} rects, {} borders, {} texts, {} icons, clip depth {}",
        backend.rects, backend.borders, backend.texts, backend.icons, backend.max_clip_depth
    );
    println!("background: {}", app.background().to_hex());
    println!("log:\n{}", app.log);
    Ok(())
}
