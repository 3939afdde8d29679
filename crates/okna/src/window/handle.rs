//! Mirrored window state
//!
//! A [`Window`] keeps a local copy of its native window's position, size and
//! fill color. Writes go to the OS immediately; reads come from the local
//! copy, which [`Window::sync`] refreshes from the OS once per tick.
//!
//! # Ownership of State
//!
//! The OS is authoritative. The user can drag or resize a window at any
//! moment, and the window manager may refuse or adjust a move, so the mirror
//! is only ever as fresh as the last sync. Sync reads and never writes:
//! copying a stale position back to the OS would undo whatever the user
//! just did.
//!
//! # Lifetime
//!
//! Closing is one-way. After [`Window::close`], whether called directly,
//! triggered by a close request seen during sync, or run on drop, every
//! method that would reach the OS is a silent no-op and the mirror keeps
//! its last values.

use super::{WindowBackend, WindowFlags, WindowSettings};
use crate::foundation::{
    color::Color,
    math::{Rect, Vec2},
};

/// A native window and its mirrored state
///
/// Created by [`crate::Okna::create_window`], or [`Window::headless`] when
/// no display is involved. The native window is destroyed when the
/// `Window` is closed or dropped.
///
/// # Thread Safety
/// Not `Send`: GLFW requires windows to be driven from the main thread.
pub struct Window {
    backend: Box<dyn WindowBackend>,
    title: String,
    flags: WindowFlags,
    position: Vec2,
    width: u32,
    height: u32,
    fill_color: Color,
    active: bool,
}

impl Window {
    /// Wrap a freshly created native window
    ///
    /// Paints the fill color and, when the settings ask for one, moves the
    /// window to its initial position.
    pub(crate) fn new(backend: Box<dyn WindowBackend>, settings: WindowSettings) -> Self {
        let (x, y) = backend.position();
        let mut window = Self {
            backend,
            title: settings.title,
            flags: settings.flags,
            position: Vec2::new(x as f32, y as f32),
            width: settings.width,
            height: settings.height,
            fill_color: settings.fill,
            active: true,
        };

        window.fill(settings.fill);
        if let Some(position) = settings.position {
            window.set_position(position);
        }
        window
    }

    /// Title the window was created with
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Creation flags
    pub const fn flags(&self) -> WindowFlags {
        self.flags
    }

    /// Mirrored top-left position
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Mirrored client area width
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Mirrored client area height
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Current fill color
    pub const fn fill_color(&self) -> Color {
        self.fill_color
    }

    /// False once the window has been closed
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// The window's rectangle on the desktop
    pub fn rect(&self) -> Rect {
        Rect::from_position(self.position, self.width as f32, self.height as f32)
    }

    /// Move the window's top-left corner to `position`
    ///
    /// Positions are rounded to whole pixels before reaching the OS; the
    /// mirror keeps the fractional value until the next sync.
    pub fn set_position(&mut self, position: Vec2) {
        if !self.active {
            return;
        }
        self.position = position;
        self.backend
            .set_position(position.x.round() as i32, position.y.round() as i32);
    }

    /// Move the window by `offset`
    pub fn move_by(&mut self, offset: Vec2) {
        self.set_position(self.position + offset);
    }

    /// Clear the window to `color` and present it
    pub fn fill(&mut self, color: Color) {
        self.fill_color = color;
        if self.active {
            self.backend.present(color);
        }
    }

    /// Destroy the native window
    pub fn close(&mut self) {
        if self.active {
            log::info!("Closing window '{}'", self.title);
            self.backend.close();
            self.active = false;
        }
    }

    /// Refresh the mirror from the OS
    ///
    /// Polls events, then copies the OS position (and size, for resizable
    /// windows) into local state. A close request from the OS closes the
    /// window. Nothing is written back to the OS.
    pub fn sync(&mut self) {
        if !self.active {
            return;
        }

        self.backend.poll_events();
        if self.flags.contains(WindowFlags::RESIZABLE) {
            self.sync_size();
        }
        self.sync_position();

        if self.backend.should_close() {
            self.close();
        }
    }

    fn sync_size(&mut self) {
        let (width, height) = self.backend.size();
        let (width, height) = (width.max(0) as u32, height.max(0) as u32);
        if (width, height) == (self.width, self.height) {
            return;
        }

        log::debug!(
            "Window '{}' resized {}x{} -> {width}x{height}",
            self.title,
            self.width,
            self.height
        );
        self.width = width;
        self.height = height;
        self.backend.resize_viewport(width as i32, height as i32);
        self.backend.present(self.fill_color);
    }

    fn sync_position(&mut self) {
        let (x, y) = self.backend.position();
        self.position = Vec2::new(x as f32, y as f32);
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        self.close();
    }
}
