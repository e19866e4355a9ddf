//! iconbench engine crate.
//!
//! Software composition of icon/label/frame layers plus the window, GPU and
//! presentation plumbing the harness runs on.

pub mod assets;
pub mod compose;
pub mod coords;
pub mod core;
pub mod device;
pub mod error;
pub mod logging;
pub mod raster;
pub mod render;
pub mod text;
pub mod window;

pub use error::{StartupError, StartupStage};
