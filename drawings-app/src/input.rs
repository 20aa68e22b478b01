use eframe::egui;

use crate::app::DrawingsApp;

/// Scroll distance in points that counts as one wheel notch.
const POINTS_PER_NOTCH: f32 = 50.0;

/// Convert one wheel event into notches of rotation.
///
/// Rolling toward the user (content scrolls up, `delta_y < 0`) gives a positive
/// rotation and zooms in; rolling away zooms out.
pub(crate) fn wheel_rotation(unit: egui::MouseWheelUnit, delta_y: f32) -> f64 {
    let notches = match unit {
        egui::MouseWheelUnit::Point => delta_y / POINTS_PER_NOTCH,
        egui::MouseWheelUnit::Line | egui::MouseWheelUnit::Page => delta_y,
    };
    -(notches as f64)
}

impl DrawingsApp {
    pub(crate) fn handle_canvas_input(&mut self, ctx: &egui::Context, response: &egui::Response) {
        if !response.hovered() {
            return;
        }

        let rotation: f64 = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::MouseWheel { unit, delta, .. } => {
                        Some(wheel_rotation(*unit, delta.y))
                    }
                    _ => None,
                })
                .sum()
        });

        if rotation != 0.0 {
            self.controller.adjust_zoom(rotation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_wheel_maps_one_to_one() {
        assert_eq!(wheel_rotation(egui::MouseWheelUnit::Line, -1.0), 1.0);
        assert_eq!(wheel_rotation(egui::MouseWheelUnit::Line, 3.0), -3.0);
    }

    #[test]
    fn point_wheel_is_scaled_to_notches() {
        assert_eq!(wheel_rotation(egui::MouseWheelUnit::Point, -50.0), 1.0);
        assert_eq!(wheel_rotation(egui::MouseWheelUnit::Point, 25.0), -0.5);
    }
}
