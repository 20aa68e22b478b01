use eframe::egui;

use crate::app::DrawingsApp;

/// Text buffer of the open "Set Zoom" prompt.
pub(crate) struct ZoomEntry {
    pub(crate) text: String,
    focus_pending: bool,
}

impl ZoomEntry {
    pub(crate) fn new(zoom: f64) -> Self {
        Self {
            text: zoom.to_string(),
            focus_pending: true,
        }
    }
}

impl DrawingsApp {
    pub(crate) fn open_zoom_dialog(&mut self) {
        self.zoom_entry = Some(ZoomEntry::new(self.controller.state().zoom()));
    }

    /// Modal numeric prompt. A bad entry is logged by the controller and the
    /// prompt simply closes.
    pub(crate) fn draw_zoom_dialog(&mut self, ctx: &egui::Context) {
        let Some(entry) = self.zoom_entry.as_mut() else {
            return;
        };

        let mut open = true;
        let mut submit = false;
        let mut cancel = false;

        egui::Window::new("Set Zoom")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Choose the Zoom Level");
                ui.add_space(4.0);
                let response =
                    ui.add(egui::TextEdit::singleline(&mut entry.text).desired_width(160.0));
                if entry.focus_pending {
                    response.request_focus();
                    entry.focus_pending = false;
                }
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submit = true;
                }
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        submit = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                });
            });

        if submit {
            if let Some(entry) = self.zoom_entry.take() {
                let _ = self.controller.set_zoom(&entry.text);
            }
        } else if cancel || !open {
            self.zoom_entry = None;
        }
    }
}
