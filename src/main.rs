//! Interactive split-screen viewer: top-down map on the left, first-person
//! wireframe on the right.
//!
//! ```bash
//! RUST_LOG=debug cargo run --release -- [--x 140 --y 160 --heading -95]
//! ```
//!
//! Controls  ↑/W = forward  ↓/S = back  ←/A, →/D = turn 10°  Q/Esc = quit

use anyhow::Context;
use clap::Parser;
use log::{info, warn};
use minifb::{Key, KeyRepeat, Window, WindowOptions};

use wireframe_rs::{
    config::{Args, Config},
    engine::Engine,
    renderer::Software,
    sim::Action,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // ─────────── configuration ────────────
    let cfg = Config::from_args(&Args::parse()).context("invalid configuration")?;
    info!(
        "screen {}×{}, focal distance {}, focal width {}, start ({}, {}) @ {}°",
        cfg.screen.w,
        cfg.screen.h,
        cfg.optics.focal_distance,
        cfg.optics.focal_width,
        cfg.start.x,
        cfg.start.y,
        cfg.start_degrees
    );

    let world = cfg.build_world().context("building wall layout")?;
    info!(
        "{} walls, {} points",
        world.walls().len(),
        world.points().len()
    );

    let mut player = cfg.player();
    let mut engine = Engine::new(Software::default(), world, cfg.camera(), cfg.screen);

    // ─────────── window ───────────────────
    let (w, h) = engine.frame_size();
    let mut win = Window::new("Wireframe view", w, h, WindowOptions::default())
        .context("opening window")?;
    win.set_target_fps(60);

    // ─────────── one frame per action ─────
    loop {
        engine
            .render_frame(|fb, w, h| win.update_with_buffer(fb, w, h))
            .context("presenting frame")?;

        match wait_for_action(&mut win) {
            Action::Quit => break,
            action => match player.apply(action, &engine.world) {
                Ok(true) => player.sync(&mut engine.camera),
                Ok(false) => {}
                Err(e) => warn!("{e}"),
            },
        }
    }

    info!("quit");
    Ok(())
}

/// Block until the user produces an action; a closed window counts as quit.
fn wait_for_action(win: &mut Window) -> Action {
    while win.is_open() {
        if let Some(action) = win
            .get_keys_pressed(KeyRepeat::Yes)
            .into_iter()
            .map(action_for_key)
            .find(|a| *a != Action::Noop)
        {
            return action;
        }
        win.update();
    }
    Action::Quit
}

fn action_for_key(key: Key) -> Action {
    match key {
        Key::Up | Key::W => Action::Up,
        Key::Down | Key::S => Action::Down,
        Key::Left | Key::A => Action::Left,
        Key::Right | Key::D => Action::Right,
        Key::Q | Key::Escape => Action::Quit,
        _ => Action::Noop,
    }
}
