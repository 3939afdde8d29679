//! Window management using GLFW
//!
//! Each window owns an OpenGL 3.3 core context, loaded through `glow`, that
//! is only used to clear the framebuffer to the window's fill color.

#![allow(unsafe_code)]

use glfw::Context as _;
use glow::HasContext;

use super::{WindowBackend, WindowFlags, WindowSettings};
use crate::context::{OknaError, OknaResult};
use crate::foundation::color::Color;

/// Oldest OpenGL version a window context may report
const MIN_GL_VERSION: (u32, u32) = (3, 3);

/// GLFW window wrapper with proper resource management
pub(crate) struct GlfwBackend {
    // `None` once closed; dropping the `PWindow` destroys the native window.
    window: Option<glfw::PWindow>,
    _events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
    gl: glow::Context,
}

impl GlfwBackend {
    /// Create the native window and its GL context
    pub(crate) fn create(glfw: &mut glfw::Glfw, settings: &WindowSettings) -> OknaResult<Self> {
        let flags = settings.flags;
        glfw.window_hint(glfw::WindowHint::Resizable(flags.contains(WindowFlags::RESIZABLE)));
        glfw.window_hint(glfw::WindowHint::Decorated(flags.contains(WindowFlags::DECORATED)));
        glfw.window_hint(glfw::WindowHint::Floating(flags.contains(WindowFlags::FLOATING)));
        glfw.window_hint(glfw::WindowHint::TransparentFramebuffer(
            flags.contains(WindowFlags::TRANSPARENT),
        ));

        let (mut window, events) = glfw
            .create_window(
                settings.width,
                settings.height,
                &settings.title,
                glfw::WindowMode::Windowed,
            )
            .ok_or_else(|| OknaError::CreationFailed(settings.title.clone()))?;

        window.make_current();
        // SAFETY: the window's context is current on this thread, so the
        // loaded function pointers belong to it.
        let gl = unsafe {
            glow::Context::from_loader_function(|symbol| window.get_proc_address(symbol) as *const _)
        };

        let version = gl.version();
        if (version.major, version.minor) < MIN_GL_VERSION {
            return Err(OknaError::GlLoaderFailed {
                major: version.major,
                minor: version.minor,
            });
        }
        log::debug!(
            "Window '{}' got OpenGL {}.{} ({})",
            settings.title,
            version.major,
            version.minor,
            version.vendor_info
        );

        let mut backend = Self {
            window: Some(window),
            _events: events,
            gl,
        };
        backend.resize_viewport(settings.width as i32, settings.height as i32);
        Ok(backend)
    }
}

impl WindowBackend for GlfwBackend {
    fn poll_events(&mut self) {
        if let Some(window) = self.window.as_mut() {
            window.glfw.poll_events();
        }
    }

    fn should_close(&self) -> bool {
        self.window.as_ref().map_or(true, |window| window.should_close())
    }

    fn position(&self) -> (i32, i32) {
        self.window.as_ref().map_or((0, 0), |window| window.get_pos())
    }

    fn set_position(&mut self, x: i32, y: i32) {
        if let Some(window) = self.window.as_mut() {
            window.set_pos(x, y);
        }
    }

    fn size(&self) -> (i32, i32) {
        self.window.as_ref().map_or((0, 0), |window| window.get_size())
    }

    fn resize_viewport(&mut self, width: i32, height: i32) {
        if let Some(window) = self.window.as_mut() {
            window.make_current();
            // SAFETY: this window's context was just made current.
            unsafe { self.gl.viewport(0, 0, width, height) };
        }
    }

    fn present(&mut self, color: Color) {
        let Some(window) = self.window.as_mut() else {
            return;
        };

        window.make_current();
        let [r, g, b, a] = color.to_normalized();
        // SAFETY: this window's context was just made current.
        unsafe {
            self.gl.clear_color(r, g, b, a);
            self.gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }
        window.swap_buffers();
    }

    fn close(&mut self) {
        self.window = None;
    }
}
