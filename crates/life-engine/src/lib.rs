//! Life engine crate.
//!
//! Double-buffered Game of Life simulation plus the platform + GPU runtime
//! that draws it: one pre-built quad per cell, only live cells redrawn.

pub mod sim;

pub mod coords;
pub mod core;
pub mod device;
pub mod logging;
pub mod paint;
pub mod render;
pub mod time;
pub mod window;
