//! Native windows for selecting a region and previewing the result.
//!
//! Each window runs its own `eframe` event loop on the calling thread and
//! returns once the window closes.

mod canvas;
mod preview;
mod selector;

use eframe::egui;
use image::RgbaImage;

pub use preview::EguiPreview;
pub use selector::EguiSelector;

// room for the status bar above the canvas
const CHROME_HEIGHT: f32 = 40.0;

/// Window sized to the image, within sane limits.
fn native_options(title: &str, image: &RgbaImage) -> eframe::NativeOptions {
    let width = (image.width() as f32).clamp(400.0, 1600.0);
    let height = (image.height() as f32 + CHROME_HEIGHT).clamp(300.0, 1000.0);
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_title(title),
        ..Default::default()
    }
}
