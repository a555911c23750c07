use image::{Rgba, RgbaImage};

use crate::rect::Rectangle;

/// Draw the outline of `rect` onto `img`.
///
/// The edges run through columns `x` and `x + w` and rows `y` and `y + h`,
/// so the far corner is part of the outline. Each stroke is `thickness`
/// pixels wide and straddles its edge; anything outside the image is
/// clipped.
pub fn outline(img: &mut RgbaImage, rect: Rectangle, color: [u8; 4], thickness: u32) {
    let t = thickness.max(1) as i64;
    let (x0, y0) = (rect.x as i64, rect.y as i64);
    let (x1, y1) = (rect.right() as i64, rect.bottom() as i64);
    // first and last pixel of a stroke centered on `edge`
    let band = |edge: i64| (edge - t / 2, edge - t / 2 + t - 1);

    let (top_a, top_b) = band(y0);
    let (bot_a, bot_b) = band(y1);
    let (left_a, left_b) = band(x0);
    let (right_a, right_b) = band(x1);

    // horizontal strokes cover the corners
    fill(img, left_a, top_a, right_b, top_b, color);
    fill(img, left_a, bot_a, right_b, bot_b, color);
    fill(img, left_a, top_a, left_b, bot_b, color);
    fill(img, right_a, top_a, right_b, bot_b, color);
}

/// Copy of `src` with the outline drawn on it.
pub fn with_outline(src: &RgbaImage, rect: Rectangle, color: [u8; 4], thickness: u32) -> RgbaImage {
    let mut img = src.clone();
    outline(&mut img, rect, color, thickness);
    img
}

fn fill(img: &mut RgbaImage, x0: i64, y0: i64, x1: i64, y1: i64, color: [u8; 4]) {
    let (w, h) = (img.width() as i64, img.height() as i64);
    let (xa, xb) = (x0.max(0), x1.min(w - 1));
    let (ya, yb) = (y0.max(0), y1.min(h - 1));
    for py in ya..=yb {
        for px in xa..=xb {
            img.put_pixel(px as u32, py as u32, Rgba(color));
        }
    }
}
