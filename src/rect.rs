use serde::{Deserialize, Serialize};

/// A selected region in source-image pixel coordinates.
///
/// `x`/`y` is the top-left corner, `w`/`h` the extent. Field order is the
/// order the keys are written in the selection file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rectangle {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle spanned by two drag points given in image space.
    ///
    /// The points may come in any order. Both are clamped to
    /// `0..=bounds` before being rounded to whole pixels, so the result
    /// always lies inside an image of size `bounds`.
    pub fn from_points(a: (f32, f32), b: (f32, f32), bounds: (u32, u32)) -> Self {
        let (bw, bh) = (bounds.0 as f32, bounds.1 as f32);
        let left = snap(a.0.min(b.0), bw);
        let right = snap(a.0.max(b.0), bw);
        let top = snap(a.1.min(b.1), bh);
        let bottom = snap(a.1.max(b.1), bh);
        Self {
            x: left,
            y: top,
            w: right - left,
            h: bottom - top,
        }
    }

    /// Rectangle centered on `center` with one corner at `corner`.
    pub fn centered(center: (f32, f32), corner: (f32, f32), bounds: (u32, u32)) -> Self {
        let dx = (corner.0 - center.0).abs();
        let dy = (corner.1 - center.1).abs();
        Self::from_points(
            (center.0 - dx, center.1 - dy),
            (center.0 + dx, center.1 + dy),
            bounds,
        )
    }

    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.w)
    }

    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.h)
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }
}

impl std::fmt::Display for Rectangle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {}\u{d7}{}", self.x, self.y, self.w, self.h)
    }
}

fn snap(v: f32, max: f32) -> u32 {
    // NaN casts to 0
    v.clamp(0.0, max).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case((10.0, 20.0), (40.0, 60.0))]
    #[case((40.0, 60.0), (10.0, 20.0))]
    #[case((10.0, 60.0), (40.0, 20.0))]
    #[case((40.0, 20.0), (10.0, 60.0))]
    fn drag_direction_does_not_matter(#[case] a: (f32, f32), #[case] b: (f32, f32)) {
        let rect = Rectangle::from_points(a, b, (100, 100));
        assert_eq!(rect, Rectangle::new(10, 20, 30, 40));
    }

    #[test]
    fn points_outside_the_image_are_clamped() {
        let rect = Rectangle::from_points((-15.0, -3.0), (250.0, 80.0), (200, 100));
        assert_eq!(rect, Rectangle::new(0, 0, 200, 80));
        assert_eq!(rect.right(), 200);
    }

    #[test]
    fn fractional_points_round_to_whole_pixels() {
        let rect = Rectangle::from_points((10.4, 20.6), (30.5, 40.2), (100, 100));
        assert_eq!(rect, Rectangle::new(10, 21, 21, 19));
    }

    #[test]
    fn a_click_without_drag_is_empty() {
        let rect = Rectangle::from_points((5.0, 5.0), (5.0, 5.0), (10, 10));
        assert_eq!(rect, Rectangle::new(5, 5, 0, 0));
        assert!(rect.is_empty());
    }

    #[test]
    fn centered_mirrors_the_corner() {
        let rect = Rectangle::centered((50.0, 50.0), (60.0, 30.0), (100, 100));
        assert_eq!(rect, Rectangle::new(40, 30, 20, 40));
    }

    #[test]
    fn centered_is_clamped_at_the_border() {
        let rect = Rectangle::centered((5.0, 5.0), (15.0, 15.0), (100, 100));
        assert_eq!(rect, Rectangle::new(0, 0, 15, 15));
    }

    #[test]
    fn nan_points_collapse_to_origin() {
        let rect = Rectangle::from_points((f32::NAN, 4.0), (f32::NAN, 8.0), (10, 10));
        assert_eq!(rect.x, 0);
        assert_eq!(rect.w, 0);
        assert_eq!(rect.h, 4);
    }

    #[test]
    fn display_reads_like_the_status_bar() {
        assert_eq!(Rectangle::new(1, 2, 3, 4).to_string(), "1, 2, 3\u{d7}4");
    }
}
