//! Select a rectangular region of an image with the mouse, then save a
//! preview with the region outlined and the region's coordinates as JSON.

pub mod cli;
pub mod config;
pub mod error;
pub mod flow;
pub mod gui;
pub mod interact;
pub mod logging;
pub mod persist;
pub mod rect;
pub mod render;

pub use config::Config;
pub use error::{Error, Result};
pub use interact::{PreviewDisplay, RegionSelector};
pub use rect::Rectangle;
