use std::path::Path;

use image::{ImageError, ImageReader, RgbaImage};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::interact::{PreviewDisplay, RegionSelector};
use crate::persist;
use crate::rect::Rectangle;
use crate::render;

/// Decode `path`, picking the decoder from the file contents rather than
/// the extension.
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let decoded = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(ImageError::IoError)
        .and_then(|reader| reader.decode());
    let img = decoded.map_err(|source| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), width = img.width(), height = img.height(), "loaded image");
    Ok(img.to_rgba8())
}

/// Load, select, render, show, then write the preview and the selection.
///
/// Nothing is written unless the image loads and a selection comes back.
/// The preview is written before the selection file, so a failed preview
/// write leaves no selection file behind.
pub fn run(
    input: &Path,
    output: &Path,
    config: &Config,
    selector: &mut dyn RegionSelector,
    display: &mut dyn PreviewDisplay,
) -> Result<Rectangle> {
    let img = load_image(input)?;

    let rect = selector.select_region(&img)?;
    if rect.is_empty() {
        tracing::warn!(%rect, "selection has zero area");
    } else {
        tracing::info!(%rect, "selection confirmed");
    }

    let rendered = render::with_outline(&img, rect, config.color, config.thickness);
    display.show(&rendered)?;

    persist::save_preview(&config.preview_path, &rendered)?;
    persist::save_selection(output, &rect)?;
    Ok(rect)
}
