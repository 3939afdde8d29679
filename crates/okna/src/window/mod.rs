//! Window management subsystem
//!
//! ```text
//! ┌─────────────────────────────────┐
//! │     Application Code            │
//! └─────────────┬───────────────────┘
//!               │ Uses
//!         ┌─────▼─────┐
//!         │  Window   │ ← Mirrored state (handle.rs)
//!         └─────┬─────┘
//!               │ Uses
//!      ┌────────▼────────┐
//!      │ WindowBackend   │ ← Internal trait (backend.rs)
//!      └────────┬────────┘
//!               │ Implemented by
//!      ┌────────▼────────┐     ┌─────────────────┐
//!      │ GlfwBackend     │     │ HeadlessBackend │
//!      │ (glfw_backend)  │     │ (headless.rs)   │
//!      └─────────────────┘     └─────────────────┘
//!        GLFW + OpenGL           in-memory desktop
//! ```
//!
//! Applications create windows through [`crate::Okna::create_window`] and
//! only ever see [`Window`]. [`Window::headless`] opens one with no native
//! window behind it, for driving game loops in tests.

mod backend;
mod glfw_backend;
mod handle;
mod headless;

pub(crate) use backend::WindowBackend;
pub(crate) use glfw_backend::GlfwBackend;
pub use handle::Window;
pub use headless::{HeadlessDesktop, HeadlessState};

use crate::foundation::{color::Color, math::Vec2};
use crate::{OknaError, OknaResult};
use bitflags::bitflags;

bitflags! {
    /// Creation-time window attributes
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WindowFlags: u32 {
        /// Title bar and borders drawn by the window manager
        const DECORATED = 1 << 0;
        /// User may resize the window
        const RESIZABLE = 1 << 1;
        /// Stays above regular windows
        const FLOATING = 1 << 2;
        /// Framebuffer alpha is composited with the desktop
        const TRANSPARENT = 1 << 3;
    }
}

impl Default for WindowFlags {
    fn default() -> Self {
        Self::DECORATED
    }
}

/// Everything needed to open a window
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSettings {
    /// Title bar text
    pub title: String,
    /// Client area width in pixels
    pub width: u32,
    /// Client area height in pixels
    pub height: u32,
    /// Initial top-left position on the desktop; `None` lets the window
    /// manager decide
    pub position: Option<Vec2>,
    /// Creation-time attributes
    pub flags: WindowFlags,
    /// Color the window is cleared to
    pub fill: Color,
}

impl WindowSettings {
    /// Decorated, non-resizable window of the given size
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            position: None,
            flags: WindowFlags::default(),
            fill: Color::default(),
        }
    }

    /// Place the window's top-left corner at `position`
    #[must_use]
    pub fn at(mut self, position: Vec2) -> Self {
        self.position = Some(position);
        self
    }

    /// Replace the creation flags
    #[must_use]
    pub fn with_flags(mut self, flags: WindowFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Set the fill color
    #[must_use]
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    /// Check the settings describe a window GLFW can create
    ///
    /// # Errors
    /// Returns [`OknaError::InvalidSettings`] for a zero width or height, or
    /// an initial position that is not finite.
    pub fn validate(&self) -> OknaResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(OknaError::InvalidSettings(format!(
                "window '{}' must have a non-zero size, got {}x{}",
                self.title, self.width, self.height
            )));
        }
        if let Some(position) = self.position {
            if !(position.x.is_finite() && position.y.is_finite()) {
                return Err(OknaError::InvalidSettings(format!(
                    "window '{}' has a non-finite position",
                    self.title
                )));
            }
        }
        Ok(())
    }
}
