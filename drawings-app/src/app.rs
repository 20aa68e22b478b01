use std::time::{Duration, Instant};

use eframe::egui;
use tracing::debug;

use drawings_render::render_state;

use crate::controller::Controller;
use crate::preferences::AppPreferences;
use crate::ui::zoom_dialog::ZoomEntry;

// ---------------------------------------------------------------------------
// Application struct
// ---------------------------------------------------------------------------

pub(crate) struct DrawingsApp {
    pub(crate) controller: Controller,
    pub(crate) preferences: AppPreferences,

    // Canvas
    pub(crate) texture: Option<egui::TextureHandle>,
    /// Canvas size in pixels, as of the last frame.
    pub(crate) canvas_size: [u32; 2],
    pub(crate) render_time: Duration,

    // Dialogs
    pub(crate) zoom_entry: Option<ZoomEntry>,
}

impl DrawingsApp {
    pub(crate) fn new(preferences: AppPreferences) -> Self {
        Self {
            controller: Controller::new(),
            preferences,
            texture: None,
            canvas_size: [0, 0],
            render_time: Duration::ZERO,
            zoom_entry: None,
        }
    }

    fn check_resize(&mut self, width: u32, height: u32) {
        if self.canvas_size != [width, height] {
            debug!(width, height, "Canvas resized");
            self.canvas_size = [width, height];
            self.controller.request_render();
        }
    }

    /// Recompute the whole canvas from the current state and upload it.
    fn redraw(&mut self, ctx: &egui::Context) {
        let [width, height] = self.canvas_size;
        let start = Instant::now();
        let buffer = render_state(self.controller.state(), width, height);
        self.render_time = start.elapsed();

        if buffer.is_empty() {
            self.texture = None;
            return;
        }
        let image = egui::ColorImage::from_rgba_unmultiplied(
            [buffer.width as usize, buffer.height as usize],
            &buffer.pixels,
        );
        match self.texture.as_mut() {
            Some(texture) => texture.set(image, egui::TextureOptions::NEAREST),
            None => {
                self.texture =
                    Some(ctx.load_texture("drawing", image, egui::TextureOptions::NEAREST));
            }
        }
    }

    fn draw_canvas(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let available = ui.available_size();
                let width = available.x.max(0.0) as u32;
                let height = available.y.max(0.0) as u32;

                self.check_resize(width, height);

                if self.controller.take_render_request() {
                    self.redraw(ctx);
                }

                let (response, painter) = ui.allocate_painter(available, egui::Sense::hover());

                let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                if let Some(ref tex) = self.texture {
                    painter.image(tex.id(), response.rect, uv, egui::Color32::WHITE);
                }

                if self.zoom_entry.is_none() {
                    self.handle_canvas_input(ctx, &response);
                }
            });
    }
}

// ---------------------------------------------------------------------------
// eframe::App
// ---------------------------------------------------------------------------

impl eframe::App for DrawingsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.draw_menu_bar(ctx);
        self.draw_status_bar(ctx);
        self.draw_canvas(ctx);
        self.draw_zoom_dialog(ctx);

        if self.controller.needs_render() {
            ctx.request_repaint();
        }
    }
}
