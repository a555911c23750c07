use std::io::{self, Write};
use std::path::Path;

use image::{DynamicImage, ImageFormat, RgbaImage};
use serde::Serialize;

use crate::error::Result;
use crate::rect::Rectangle;

/// Single-line JSON with a space after every `:` and `,`.
///
/// `{"x": 10, "y": 20, "w": 30, "h": 40}`
struct SpacedFormatter;

impl serde_json::ser::Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }
}

pub fn selection_to_string(rect: &Rectangle) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    rect.serialize(&mut ser)?;
    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn save_selection(path: &Path, rect: &Rectangle) -> Result<()> {
    let data = selection_to_string(rect)?;
    std::fs::write(path, data)?;
    tracing::info!(path = %path.display(), %rect, "wrote selection");
    Ok(())
}

/// Write the preview, format from the extension. Formats whose encoders
/// take no alpha channel get the image flattened to RGB first.
pub fn save_preview(path: &Path, img: &RgbaImage) -> Result<()> {
    match ImageFormat::from_path(path) {
        Ok(ImageFormat::Jpeg | ImageFormat::Pnm) => {
            DynamicImage::ImageRgba8(img.clone()).to_rgb8().save(path)?
        }
        _ => img.save(path)?,
    }
    tracing::info!(path = %path.display(), "wrote preview");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;
    use tempfile::tempdir;

    #[rstest]
    #[case(Rectangle::new(10, 20, 30, 40), r#"{"x": 10, "y": 20, "w": 30, "h": 40}"#)]
    #[case(Rectangle::default(), r#"{"x": 0, "y": 0, "w": 0, "h": 0}"#)]
    #[case(
        Rectangle::new(4000, 3000, 1, 1),
        r#"{"x": 4000, "y": 3000, "w": 1, "h": 1}"#
    )]
    fn selection_json_layout(#[case] rect: Rectangle, #[case] expected: &str) {
        assert_eq!(selection_to_string(&rect).unwrap(), expected);
    }

    #[test]
    fn saved_selection_reads_back_as_integers() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("selection.json");
        save_selection(&path, &Rectangle::new(1, 2, 3, 4)).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        for key in ["x", "y", "w", "h"] {
            assert!(obj[key].is_u64(), "{key} is not an integer");
        }
        let back: Rectangle = serde_json::from_value(value).unwrap();
        assert_eq!(back, Rectangle::new(1, 2, 3, 4));
    }

    #[test]
    fn preview_is_a_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preview.png");
        save_preview(&path, &RgbaImage::new(3, 2)).unwrap();

        let loaded = image::open(&path).unwrap();
        assert_eq!((loaded.width(), loaded.height()), (3, 2));
    }

    #[rstest]
    #[case("preview.jpg")]
    #[case("preview.jpeg")]
    #[case("preview.ppm")]
    fn preview_without_alpha_support(#[case] name: &str) {
        let dir = tempdir().unwrap();
        let path = dir.path().join(name);
        let img = RgbaImage::from_pixel(4, 4, image::Rgba([255, 0, 0, 255]));
        save_preview(&path, &img).unwrap();

        let loaded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(loaded.dimensions(), (4, 4));
        // lossy for jpeg, so only check the red channel dominates
        let px = loaded.get_pixel(2, 2).0;
        assert!(px[0] > 200 && px[1] < 60 && px[2] < 60, "{px:?}");
    }

    #[test]
    fn selection_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope").join("selection.json");
        assert!(save_selection(&path, &Rectangle::default()).is_err());
    }
}
