//! Library lifetime and window creation

use thiserror::Error;

use crate::config::ConfigError;
use crate::foundation::{math::Vec2, time::ClockError};
use crate::window::{GlfwBackend, Window, WindowSettings};

/// Okna errors
#[derive(Error, Debug)]
pub enum OknaError {
    /// GLFW could not be initialized
    #[error("GLFW initialization failed: {0}")]
    InitializationFailed(String),

    /// No monitor is connected
    #[error("no monitor available")]
    NoMonitor,

    /// Window settings GLFW cannot honor
    #[error("invalid window settings: {0}")]
    InvalidSettings(String),

    /// GLFW refused to create a window
    #[error("can't create window '{0}'")]
    CreationFailed(String),

    /// The window's OpenGL context is unusable
    #[error("can't load OpenGL: context reports {major}.{minor}, need 3.3")]
    GlLoaderFailed {
        /// Reported major version
        major: u32,
        /// Reported minor version
        minor: u32,
    },

    /// Settings could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The frame clock could not be set up
    #[error(transparent)]
    Clock(#[from] ClockError),
}

/// Result alias for okna operations
pub type OknaResult<T> = Result<T, OknaError>;

/// An initialized windowing library
///
/// Creating [`Okna`] initializes GLFW with hints for an OpenGL 3.3 core,
/// forward-compatible context. GLFW is released once this value and every
/// window created from it have been dropped.
pub struct Okna {
    glfw: glfw::Glfw,
}

impl Okna {
    /// Initialize GLFW
    pub fn init() -> OknaResult<Self> {
        let mut glfw = glfw::init(glfw::log_errors)
            .map_err(|e| OknaError::InitializationFailed(format!("{e:?}")))?;

        glfw.window_hint(glfw::WindowHint::ContextVersion(3, 3));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(glfw::OpenGlProfileHint::Core));
        glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));

        log::info!("Initialized GLFW {}", glfw::get_version_string());
        Ok(Self { glfw })
    }

    /// Resolution of the primary monitor's current video mode
    pub fn monitor_size(&mut self) -> OknaResult<Vec2> {
        let mode = self
            .glfw
            .with_primary_monitor(|_, monitor| monitor.and_then(|monitor| monitor.get_video_mode()))
            .ok_or(OknaError::NoMonitor)?;

        log::info!("Primary monitor is {}x{}", mode.width, mode.height);
        Ok(Vec2::new(mode.width as f32, mode.height as f32))
    }

    /// Open a window
    ///
    /// The window comes up painted in its fill color and, if requested, at
    /// its initial position. Zero-sized settings are rejected before GLFW
    /// sees them.
    pub fn create_window(&mut self, settings: WindowSettings) -> OknaResult<Window> {
        settings.validate()?;
        let backend = GlfwBackend::create(&mut self.glfw, &settings)?;
        log::info!(
            "Created window '{}' ({}x{}, {:?})",
            settings.title,
            settings.width,
            settings.height,
            settings.flags
        );
        Ok(Window::new(Box::new(backend), settings))
    }

    /// Release the library
    pub fn terminate(self) {
        log::info!("Terminating GLFW");
    }
}
