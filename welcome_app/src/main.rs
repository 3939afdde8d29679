//! Welcome screen
//!
//! Opens a black 640x480 window centered on the primary monitor and idles at
//! 60 FPS until it is closed.
//!
//! The greeting is not drawn in the window. okna has no font or text
//! rendering, so the centered white "Welcome, Creative Coders!" text of the
//! classic welcome screen is dropped: the window stays a plain fill, the
//! title bar carries the title and the greeting goes to the log.

use std::process::ExitCode;

use okna::foundation::logging;
use okna::prelude::*;
use serde::{Deserialize, Serialize};

/// Optional settings file, looked up in the working directory
const CONFIG_PATH: &str = "welcome.toml";

/// Welcome screen configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
struct WelcomeConfig {
    title: String,
    message: String,
    width: u32,
    height: u32,
    target_fps: f32,
    background: Color,
}

impl Default for WelcomeConfig {
    fn default() -> Self {
        Self {
            title: "Creative Coding: Welcome!".to_string(),
            message: "Welcome, Creative Coders!".to_string(),
            width: 640,
            height: 480,
            target_fps: 60.0,
            background: Color::BLACK,
        }
    }
}

impl Config for WelcomeConfig {}

impl WelcomeConfig {
    /// Reject settings the welcome screen cannot run with
    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.target_fps.is_finite() && self.target_fps > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "target_fps must be positive, got {}",
                self.target_fps
            )));
        }
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window must have a non-zero size, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

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

fn run() -> OknaResult<()> {
    let config = WelcomeConfig::load_or_default(CONFIG_PATH)?;
    config.validate()?;

    let mut okna = Okna::init()?;
    let screen = okna.monitor_size()?;
    let centered = Vec2::new(
        (screen.x - config.width as f32) / 2.0,
        (screen.y - config.height as f32) / 2.0,
    );

    let mut window = okna.create_window(
        WindowSettings::new(config.title.as_str(), config.width, config.height)
            .at(centered)
            .with_fill(config.background),
    )?;
    log::info!("{}", config.message);

    let mut clock = Clock::new(config.target_fps)?;
    clock.start();
    while window.is_active() {
        window.sync();
        clock.tick();
    }

    drop(window);
    okna.terminate();
    Ok(())
}
