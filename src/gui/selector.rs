use std::cell::Cell;
use std::rc::Rc;

use eframe::egui;
use image::RgbaImage;

use super::canvas::Canvas;
use super::native_options;
use crate::config::Config;
use crate::error::Result;
use crate::interact::RegionSelector;
use crate::rect::Rectangle;

/// Rectangle selection in a native window.
///
/// Drag with the left button, confirm with Enter or Space, cancel with C or
/// Escape. Closing the window also cancels.
#[derive(Clone, Debug)]
pub struct EguiSelector {
    title: String,
    color: [u8; 4],
    thickness: u32,
    show_crosshair: bool,
    from_center: bool,
}

impl EguiSelector {
    pub fn new(config: &Config) -> Self {
        Self {
            title: config.select_title.clone(),
            color: config.color,
            thickness: config.thickness,
            show_crosshair: config.show_crosshair,
            from_center: config.from_center,
        }
    }
}

impl RegionSelector for EguiSelector {
    fn select_region(&mut self, image: &RgbaImage) -> Result<Rectangle> {
        let outcome = Rc::new(Cell::new(None));
        let app = SelectApp::new(image, self.clone(), Rc::clone(&outcome));

        eframe::run_native(
            &self.title,
            native_options(&self.title, image),
            Box::new(move |_cc| Ok(Box::new(app))),
        )?;

        let rect = outcome.get().unwrap_or_default();
        tracing::debug!(%rect, confirmed = outcome.get().is_some(), "selection window closed");
        Ok(rect)
    }
}

// ── App ─────────────────────────────────────────────────────────────────────

struct SelectApp {
    canvas: Canvas,
    bounds: (u32, u32),
    opts: EguiSelector,

    // image-space drag origin while the primary button is held
    drag_start: Option<egui::Pos2>,
    selection: Option<Rectangle>,

    outcome: Rc<Cell<Option<Rectangle>>>,
}

impl SelectApp {
    fn new(image: &RgbaImage, opts: EguiSelector, outcome: Rc<Cell<Option<Rectangle>>>) -> Self {
        Self {
            canvas: Canvas::new(image),
            bounds: image.dimensions(),
            opts,
            drag_start: None,
            selection: None,
            outcome,
        }
    }

    fn color(&self) -> egui::Color32 {
        let [r, g, b, a] = self.opts.color;
        egui::Color32::from_rgba_unmultiplied(r, g, b, a)
    }

    fn rect_between(&self, start: egui::Pos2, end: egui::Pos2) -> Rectangle {
        let (a, b) = ((start.x, start.y), (end.x, end.y));
        if self.opts.from_center {
            Rectangle::centered(a, b, self.bounds)
        } else {
            Rectangle::from_points(a, b, self.bounds)
        }
    }

    fn finish(&mut self, ctx: &egui::Context, rect: Rectangle) {
        self.outcome.set(Some(rect));
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }

    fn draw_selection(&self, painter: &egui::Painter, canvas_rect: egui::Rect, rect: Rectangle) {
        let min = self
            .canvas
            .image_to_screen(canvas_rect, egui::pos2(rect.x as f32, rect.y as f32));
        let max = self.canvas.image_to_screen(
            canvas_rect,
            egui::pos2(rect.right() as f32, rect.bottom() as f32),
        );
        let screen = egui::Rect::from_min_max(min, max);
        let c = self.color();
        let t = (self.opts.thickness as f32 * self.canvas.zoom()).max(1.0);
        painter.rect_stroke(screen, 0.0, egui::Stroke::new(t, c), egui::StrokeKind::Middle);

        if self.opts.show_crosshair {
            let center = screen.center();
            let thin = egui::Stroke::new(1.0, c);
            painter.line_segment(
                [egui::pos2(screen.left(), center.y), egui::pos2(screen.right(), center.y)],
                thin,
            );
            painter.line_segment(
                [egui::pos2(center.x, screen.top()), egui::pos2(center.x, screen.bottom())],
                thin,
            );
        }
    }
}

impl eframe::App for SelectApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.canvas.ensure_texture(ctx);

        let (confirm, cancel) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Space),
                i.key_pressed(egui::Key::Escape) || i.key_pressed(egui::Key::C),
            )
        });
        if confirm {
            let rect = self.selection.unwrap_or_default();
            self.finish(ctx, rect);
        } else if cancel {
            self.finish(ctx, Rectangle::default());
        }

        egui::TopBottomPanel::top("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Drag to select. ENTER or SPACE confirms, C or ESC cancels.");
                ui.separator();
                match self.selection {
                    Some(rect) => ui.label(format!("Selection: {}", rect)),
                    None => ui.label("Selection: none"),
                };
                ui.separator();
                ui.label(format!("Zoom: {:.0}%", self.canvas.zoom() * 100.0));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
            let canvas_rect = response.rect;

            self.canvas.paint(&painter, canvas_rect);
            if let Some(rect) = self.selection {
                self.draw_selection(&painter, canvas_rect, rect);
            }

            self.canvas.handle_pan_zoom(ctx, &response);

            // primary button only, not while panning
            if self.canvas.is_panning() {
                return;
            }
            if response.drag_started_by(egui::PointerButton::Primary) {
                if let Some(pos) = response.interact_pointer_pos() {
                    self.drag_start = Some(self.canvas.screen_to_image(canvas_rect, pos));
                    self.selection = None;
                }
            }
            if response.dragged_by(egui::PointerButton::Primary) {
                if let (Some(start), Some(pos)) = (self.drag_start, response.interact_pointer_pos())
                {
                    let end = self.canvas.screen_to_image(canvas_rect, pos);
                    self.selection = Some(self.rect_between(start, end));
                }
            }
            if response.drag_stopped_by(egui::PointerButton::Primary) {
                self.drag_start = None;
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(from_center: bool) -> SelectApp {
        let config = Config::new().set_from_center(from_center);
        SelectApp::new(
            &RgbaImage::new(100, 80),
            EguiSelector::new(&config),
            Rc::new(Cell::new(None)),
        )
    }

    #[test]
    fn corner_drag_spans_both_points() {
        let rect = app(false).rect_between(egui::pos2(70.0, 60.0), egui::pos2(20.0, 10.0));
        assert_eq!(rect, Rectangle::new(20, 10, 50, 50));
    }

    #[test]
    fn center_drag_grows_both_ways() {
        let rect = app(true).rect_between(egui::pos2(50.0, 40.0), egui::pos2(60.0, 45.0));
        assert_eq!(rect, Rectangle::new(40, 35, 20, 10));
    }

    #[test]
    fn drag_is_clamped_to_the_image() {
        let rect = app(false).rect_between(egui::pos2(90.0, 70.0), egui::pos2(500.0, -40.0));
        assert_eq!(rect, Rectangle::new(90, 0, 10, 70));
    }
}
