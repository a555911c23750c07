//! The two places the flow waits on a person.
//!
//! [`crate::gui`] has the windowed implementations; tests plug in fakes.

use image::RgbaImage;

use crate::error::Result;
use crate::rect::Rectangle;

pub trait RegionSelector {
    /// Block until the user confirms or cancels a selection on `image`.
    ///
    /// A cancelled selection is the zero rectangle.
    fn select_region(&mut self, image: &RgbaImage) -> Result<Rectangle>;
}

pub trait PreviewDisplay {
    /// Show `image` and block until the user dismisses it.
    fn show(&mut self, image: &RgbaImage) -> Result<()>;
}
