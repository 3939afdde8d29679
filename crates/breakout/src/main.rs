//! Breakout played with desktop windows
//!
//! The ball is a small undecorated window that bounces around the desktop.
//! The paddle is a regular, resizable window: drag it under the ball to
//! keep it in play. Closing the paddle ends the game.

mod collision;
mod config;
mod error;
mod game;

use std::process::ExitCode;

use okna::foundation::logging;
use okna::prelude::*;

use crate::config::BreakoutConfig;
use crate::error::GameError;
use crate::game::{initial_layout, Breakout};

/// Optional settings file, looked up in the working directory
const CONFIG_PATH: &str = "breakout.toml";

fn main() -> ExitCode {
    logging::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), GameError> {
    let config = BreakoutConfig::load_or_default(CONFIG_PATH)?;
    config.validate()?;

    let mut okna = Okna::init()?;
    let screen = okna.monitor_size()?;
    let (paddle_rect, ball_rect) = initial_layout(&config, screen);

    let floating = WindowFlags::FLOATING | WindowFlags::TRANSPARENT;
    let mut bar = okna.create_window(
        WindowSettings::new("Breakout", config.paddle.width, config.paddle.height)
            .at(paddle_rect.position)
            .with_flags(floating | WindowFlags::DECORATED | WindowFlags::RESIZABLE)
            .with_fill(config.paddle.color),
    )?;
    let mut ball = okna.create_window(
        WindowSettings::new("Breakout ball", config.ball.width, config.ball.height)
            .at(ball_rect.position)
            .with_flags(floating)
            .with_fill(config.ball.color),
    )?;

    let mut game = Breakout::new(config.ball.velocity, screen, config.boundary);
    let mut clock = Clock::new(config.target_fps)?;

    log::info!("Starting main loop...");
    clock.start();
    while play_frame(&mut game, &mut bar, &mut ball, clock.delta_time()) {
        clock.tick();
    }

    log::info!(
        "Game over after {} frames ({:.1} fps average), ball velocity {:?}",
        clock.frame_count(),
        clock.average_fps(),
        game.velocity()
    );

    drop(ball);
    drop(bar);
    okna.terminate();
    Ok(())
}

/// Run one frame: move the ball window, then pick up what the user did to
/// either window since the last frame
///
/// Returns false once the paddle or the ball has been closed.
fn play_frame(game: &mut Breakout, bar: &mut Window, ball: &mut Window, dt: f32) -> bool {
    let mut ball_rect = ball.rect();
    game.step(&mut ball_rect, &bar.rect(), dt);
    ball.set_position(ball_rect.position);

    bar.sync();
    ball.sync();
    bar.is_active() && ball.is_active()
}
