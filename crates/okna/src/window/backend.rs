//! Backend-agnostic window trait
//!
//! [`super::Window`] talks to the native window only through this trait, so
//! the mirror logic can be exercised against the in-memory backend in tests.

use crate::foundation::color::Color;

/// Internal trait for native window implementations
///
/// Positions and sizes are in desktop pixels, as the OS reports them.
///
/// # Contract
/// - **Raw values**: backends report and accept exactly what the OS uses.
///   Rounding, caching and change detection belong to [`super::Window`].
/// - **No write-back**: the query methods never move or resize anything.
/// - **After close**: methods called after [`WindowBackend::close`] must be
///   harmless no-ops, and `should_close` must then return true.
///
/// # Thread Safety
/// Not `Send`. GLFW windows may only be touched from the main thread, and
/// the trait makes no attempt to hide that.
pub(crate) trait WindowBackend {
    /// Process pending window system events
    fn poll_events(&mut self);

    /// Whether the OS or the user asked the window to close
    fn should_close(&self) -> bool;

    /// Current top-left position on the desktop
    fn position(&self) -> (i32, i32);

    /// Move the window's top-left corner
    fn set_position(&mut self, x: i32, y: i32);

    /// Current client area size
    fn size(&self) -> (i32, i32);

    /// Match the drawable viewport to a new client area size
    fn resize_viewport(&mut self, width: i32, height: i32);

    /// Clear the window to `color` and present it
    fn present(&mut self, color: Color);

    /// Destroy the native window
    fn close(&mut self);
}
