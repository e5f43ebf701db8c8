//! Page components.

pub mod apod;
pub mod gallery;
pub mod reveal;
pub mod starfield;
