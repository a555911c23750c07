use std::path::PathBuf;

pub const DEFAULT_PREVIEW_PATH: &str = "selected_with_rect.png";

/// Options for a selection run.
///
/// Everything except the input and output paths lives here so the GUI
/// front end and the tests drive the same flow.
#[derive(Clone, Debug)]
pub struct Config {
    /// Where the image with the outline drawn on it is written.
    ///
    /// Relative paths resolve against the working directory.
    pub preview_path: PathBuf,

    /// Outline color as straight RGBA.
    pub color: [u8; 4],

    /// Outline width in pixels, at least 1.
    pub thickness: u32,

    /// Title of the selection window.
    pub select_title: String,

    /// Title of the preview window.
    pub preview_title: String,

    /// Draw a crosshair through the center of the selection.
    pub show_crosshair: bool,

    /// The drag start is the center of the selection rather than a corner.
    pub from_center: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preview_path: PathBuf::from(DEFAULT_PREVIEW_PATH),
            color: [255, 0, 0, 255],
            thickness: 2,
            select_title: "Select Region".to_string(),
            preview_title: "Selected".to_string(),
            show_crosshair: false,
            from_center: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_preview_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.preview_path = path.into();
        self
    }

    // Zero is bumped to 1
    pub fn set_thickness(mut self, thickness: u32) -> Self {
        self.thickness = thickness.max(1);
        self
    }

    pub fn set_show_crosshair(mut self, show: bool) -> Self {
        self.show_crosshair = show;
        self
    }

    pub fn set_from_center(mut self, from_center: bool) -> Self {
        self.from_center = from_center;
        self
    }
}
