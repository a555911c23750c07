use eframe::egui;
use image::RgbaImage;

use super::canvas::Canvas;
use super::native_options;
use crate::config::Config;
use crate::error::Result;
use crate::interact::PreviewDisplay;

/// Shows the rendered image until any key is pressed or the window closes.
pub struct EguiPreview {
    title: String,
}

impl EguiPreview {
    pub fn new(config: &Config) -> Self {
        Self {
            title: config.preview_title.clone(),
        }
    }
}

impl PreviewDisplay for EguiPreview {
    fn show(&mut self, image: &RgbaImage) -> Result<()> {
        let app = PreviewApp {
            canvas: Canvas::new(image),
        };
        eframe::run_native(
            &self.title,
            native_options(&self.title, image),
            Box::new(move |_cc| Ok(Box::new(app))),
        )?;
        Ok(())
    }
}

struct PreviewApp {
    canvas: Canvas,
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.canvas.ensure_texture(ctx);

        let any_key = ctx.input(|i| {
            i.events
                .iter()
                .any(|e| matches!(e, egui::Event::Key { pressed: true, .. }))
        });
        if any_key {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::drag());
            self.canvas.paint(&painter, response.rect);
            self.canvas.handle_pan_zoom(ctx, &response);
        });
    }
}
