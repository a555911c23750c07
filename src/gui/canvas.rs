use eframe::egui;
use image::RgbaImage;

/// An image on a pannable, zoomable surface.
///
/// Shared by the selection and preview windows. Image space is source
/// pixels with the origin at the top-left corner.
pub struct Canvas {
    pending: Option<egui::ColorImage>,
    texture: Option<egui::TextureHandle>,
    image_size: (f32, f32),

    // pan & zoom
    pan: egui::Vec2,
    zoom: f32,
    panning: bool,
    fitted: bool,
}

impl Canvas {
    pub fn new(image: &RgbaImage) -> Self {
        let size = [image.width() as usize, image.height() as usize];
        Self {
            pending: Some(egui::ColorImage::from_rgba_unmultiplied(
                size,
                image.as_raw(),
            )),
            texture: None,
            image_size: (image.width() as f32, image.height() as f32),
            pan: egui::Vec2::ZERO,
            zoom: 1.0,
            panning: false,
            fitted: false,
        }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn is_panning(&self) -> bool {
        self.panning
    }

    /// Convert image-space coords to screen-space
    pub fn image_to_screen(&self, canvas_rect: egui::Rect, img_pos: egui::Pos2) -> egui::Pos2 {
        let center = canvas_rect.center();
        center
            + self.pan
            + (img_pos.to_vec2() - egui::vec2(self.image_size.0, self.image_size.1) * 0.5)
                * self.zoom
    }

    /// Convert screen-space coords to image-space
    pub fn screen_to_image(&self, canvas_rect: egui::Rect, screen_pos: egui::Pos2) -> egui::Pos2 {
        let center = canvas_rect.center();
        let rel = screen_pos - center - self.pan;
        egui::pos2(
            rel.x / self.zoom + self.image_size.0 * 0.5,
            rel.y / self.zoom + self.image_size.1 * 0.5,
        )
    }

    pub fn image_rect_on_screen(&self, canvas_rect: egui::Rect) -> egui::Rect {
        let top_left = self.image_to_screen(canvas_rect, egui::Pos2::ZERO);
        let bot_right = self.image_to_screen(
            canvas_rect,
            egui::pos2(self.image_size.0, self.image_size.1),
        );
        egui::Rect::from_min_max(top_left, bot_right)
    }

    pub fn ensure_texture(&mut self, ctx: &egui::Context) {
        if let Some(color_image) = self.pending.take() {
            self.texture = Some(ctx.load_texture(
                "image",
                color_image,
                egui::TextureOptions::LINEAR,
            ));
        }
    }

    /// Background plus image. The first call also shrinks the zoom so a
    /// large image fits the canvas; small images stay at 100%.
    pub fn paint(&mut self, painter: &egui::Painter, canvas_rect: egui::Rect) {
        if !self.fitted && self.image_size.0 > 0.0 && self.image_size.1 > 0.0 {
            self.zoom = (canvas_rect.width() / self.image_size.0)
                .min(canvas_rect.height() / self.image_size.1)
                .clamp(0.1, 1.0);
            self.fitted = true;
        }

        painter.rect_filled(canvas_rect, 0.0, egui::Color32::from_gray(40));

        if let Some(ref tex) = self.texture {
            painter.image(
                tex.id(),
                self.image_rect_on_screen(canvas_rect),
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }
    }

    /// Middle button pans, the wheel zooms around the cursor.
    pub fn handle_pan_zoom(&mut self, ctx: &egui::Context, response: &egui::Response) {
        let canvas_rect = response.rect;

        let middle_down = ctx.input(|i| i.pointer.middle_down());
        if middle_down {
            let delta = ctx.input(|i| i.pointer.delta());
            self.pan += delta;
            self.panning = true;
        } else {
            self.panning = false;
        }

        let scroll_delta = ctx.input(|i| i.smooth_scroll_delta.y);
        if scroll_delta != 0.0 && response.hovered() {
            let zoom_factor = 1.0 + scroll_delta * 0.002;
            let new_zoom = (self.zoom * zoom_factor).clamp(0.1, 10.0);
            if let Some(cursor) = response.hover_pos() {
                let cursor_rel = cursor - canvas_rect.center() - self.pan;
                self.pan -= cursor_rel * (new_zoom / self.zoom - 1.0);
            }
            self.zoom = new_zoom;
        }
    }
}
