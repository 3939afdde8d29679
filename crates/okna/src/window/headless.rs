//! In-memory window backend
//!
//! A headless window keeps what the OS would know about it in a
//! [`HeadlessState`] shared with the caller. Tests play the user's part by
//! editing that state (dragging, resizing, clicking close) and then check
//! what the window asked of the OS.

use std::cell::RefCell;
use std::rc::Rc;

use super::{Window, WindowBackend, WindowSettings};
use crate::foundation::color::Color;

/// What the fake desktop knows about one window
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeadlessState {
    /// Top-left position on the desktop
    pub position: (i32, i32),
    /// Client area size
    pub size: (i32, i32),
    /// Set to ask the window to close on its next sync
    pub close_requested: bool,
    /// Whether the window has been destroyed
    pub closed: bool,
    /// Number of event polls
    pub polls: usize,
    /// Every position the window was moved to, in order
    pub moves: Vec<(i32, i32)>,
    /// Every color the window was cleared to, in order
    pub presents: Vec<Color>,
    /// Last viewport size set after a resize
    pub viewport: Option<(i32, i32)>,
}

/// Shared handle onto a headless window's state
pub type HeadlessDesktop = Rc<RefCell<HeadlessState>>;

pub(crate) struct HeadlessBackend {
    state: HeadlessDesktop,
}

impl WindowBackend for HeadlessBackend {
    fn poll_events(&mut self) {
        self.state.borrow_mut().polls += 1;
    }

    fn should_close(&self) -> bool {
        let state = self.state.borrow();
        state.close_requested || state.closed
    }

    fn position(&self) -> (i32, i32) {
        self.state.borrow().position
    }

    fn set_position(&mut self, x: i32, y: i32) {
        let mut state = self.state.borrow_mut();
        state.position = (x, y);
        state.moves.push((x, y));
    }

    fn size(&self) -> (i32, i32) {
        self.state.borrow().size
    }

    fn resize_viewport(&mut self, width: i32, height: i32) {
        self.state.borrow_mut().viewport = Some((width, height));
    }

    fn present(&mut self, color: Color) {
        self.state.borrow_mut().presents.push(color);
    }

    fn close(&mut self) {
        self.state.borrow_mut().closed = true;
    }
}

impl Window {
    /// Open a window with no native window behind it
    ///
    /// The returned handle shares the window's desktop state. The window
    /// starts at the origin with the size from `settings`, then behaves as
    /// a native one would: it is painted and, if asked, moved.
    pub fn headless(settings: WindowSettings) -> (Self, HeadlessDesktop) {
        let desktop = Rc::new(RefCell::new(HeadlessState {
            size: (settings.width as i32, settings.height as i32),
            ..HeadlessState::default()
        }));
        let backend = HeadlessBackend {
            state: Rc::clone(&desktop),
        };
        (Self::new(Box::new(backend), settings), desktop)
    }
}
