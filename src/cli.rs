use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use crate::config::{Config, DEFAULT_PREVIEW_PATH};
use crate::error::{Error, Result};

#[derive(Parser, Debug)]
#[command(name = "select-roi", version)]
#[command(about = "Drag a rectangle over an image and save its coordinates as JSON")]
pub struct Cli {
    /// Image to select a region on
    pub input_image: PathBuf,

    /// Where to write the selection as {"x", "y", "w", "h"}
    pub output_json: PathBuf,

    /// Where to write the image with the selection drawn on it
    #[arg(long, env = "SELECT_ROI_PREVIEW", default_value = DEFAULT_PREVIEW_PATH)]
    pub preview: PathBuf,

    /// Outline width in pixels
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..))]
    pub thickness: u32,

    /// Draw a crosshair through the selection while dragging
    #[arg(long)]
    pub crosshair: bool,

    /// Drag out the selection from its center instead of a corner
    #[arg(long)]
    pub from_center: bool,

    /// Anything after the two paths is accepted and ignored
    #[arg(hide = true)]
    pub extra: Vec<OsString>,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config::new()
            .set_preview_path(&self.preview)
            .set_thickness(self.thickness)
            .set_show_crosshair(self.crosshair)
            .set_from_center(self.from_center)
    }
}

pub fn usage() -> String {
    Cli::command().render_usage().to_string()
}

/// Missing positionals become [`Error::Usage`]; every other clap failure,
/// `--help` and `--version` included, is passed through as [`Error::Cli`].
pub fn parse_args<I, T>(args: I) -> Result<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|err| match err.kind() {
        ErrorKind::MissingRequiredArgument => Error::Usage(usage()),
        _ => Error::Cli(err),
    })
}
