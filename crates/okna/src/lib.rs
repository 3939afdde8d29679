//! # Okna
//!
//! A minimal desktop window and game-loop shim built on GLFW with an
//! OpenGL 3.3 core context.
//!
//! Every [`Window`] mirrors the position, size and fill color of one native
//! window. The OS owns the truth: [`Window::sync`] copies it into the mirror
//! once per tick and never writes it back. A [`Clock`] paces the loop at a
//! fixed frame rate.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use okna::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     okna::foundation::logging::init();
//!
//!     let mut okna = Okna::init()?;
//!     let mut window = okna.create_window(
//!         WindowSettings::new("Hello", 640, 480).with_fill(Color::BLACK),
//!     )?;
//!
//!     let mut clock = Clock::new(60.0)?;
//!     clock.start();
//!     while window.is_active() {
//!         window.sync();
//!         clock.tick();
//!     }
//!
//!     okna.terminate();
//!     Ok(())
//! }
//! ```

#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod foundation;
pub mod window;

mod context;

pub use context::{Okna, OknaError, OknaResult};

/// Common imports for okna users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        foundation::{
            color::Color,
            math::{Rect, Vec2},
            time::{Clock, ClockError},
        },
        window::{Window, WindowFlags, WindowSettings},
        Okna, OknaError, OknaResult,
    };
}
