use eframe::egui;

use crate::app::DrawingsApp;

impl DrawingsApp {
    /// Draw the top menu bar. Must be called **before** `CentralPanel` so that
    /// `egui` reserves vertical space for it.
    pub(crate) fn draw_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                self.menu_drawings(ui);
                self.menu_color(ui);
                self.menu_tools(ui, ctx);
            });
        });
    }

    fn menu_drawings(&mut self, ui: &mut egui::Ui) {
        ui.menu_button("Drawings", |ui| {
            let current = self.controller.state().field().name;
            let mut selected = self
                .controller
                .fields()
                .iter()
                .position(|field| field.name == current);
            let mut picked = None;
            for (i, field) in self.controller.fields().iter().enumerate() {
                if ui.selectable_value(&mut selected, Some(i), field.name).clicked() {
                    picked = Some(*field);
                }
            }
            if let Some(field) = picked {
                ui.close();
                self.controller.select_field(field);
            }
        });
    }

    fn menu_color(&mut self, ui: &mut egui::Ui) {
        ui.menu_button("Color", |ui| {
            let current = self.controller.state().coloring().name;
            let mut selected = self
                .controller
                .colorings()
                .iter()
                .position(|coloring| coloring.name == current);
            let mut picked = None;
            for (i, coloring) in self.controller.colorings().iter().enumerate() {
                if ui.selectable_value(&mut selected, Some(i), coloring.name).clicked() {
                    picked = Some(*coloring);
                }
            }
            if let Some(coloring) = picked {
                ui.close();
                self.controller.select_coloring(coloring);
            }
        });
    }

    fn menu_tools(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.menu_button("Tools", |ui| {
            if ui.button("Export as Image").clicked() {
                ui.close();
                self.export_image();
            }
            ui.separator();
            if ui.button("Set Zoom").clicked() {
                ui.close();
                self.open_zoom_dialog();
            }
            ui.separator();
            if ui.button("Quit").clicked() {
                ui.close();
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });
    }
}
