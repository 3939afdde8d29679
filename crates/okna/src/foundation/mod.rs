//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout okna:
//! - Math types (vectors, rectangles)
//! - Colors
//! - Frame timing
//! - Logging utilities

pub mod color;
pub mod logging;
pub mod math;
pub mod time;
