use eframe::egui;

use crate::app::DrawingsApp;

impl DrawingsApp {
    pub(crate) fn draw_status_bar(&self, ctx: &egui::Context) {
        let state = self.controller.state();
        let text = format!(
            "{}  |  {}  |  zoom {}  |  {}×{} in {:.1} ms",
            state.field().name,
            state.coloring().name,
            state.zoom(),
            self.canvas_size[0],
            self.canvas_size[1],
            self.render_time.as_secs_f64() * 1000.0,
        );
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(egui::RichText::new(text).small());
        });
    }
}
