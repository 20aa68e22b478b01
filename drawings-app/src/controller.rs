//! Session controller: owns the [`RenderState`], applies user events to it and
//! tracks whether the canvas needs a redraw.

use std::path::Path;

use tracing::{error, info};

use drawings_core::{
    builtin_colorings, builtin_fields, ColorMapping, CoreError, RenderState, ScalarField,
};

pub(crate) struct Controller {
    state: RenderState,
    fields: Vec<ScalarField>,
    colorings: Vec<ColorMapping>,
    needs_render: bool,
}

impl Controller {
    pub(crate) fn new() -> Self {
        Self {
            state: RenderState::default(),
            fields: builtin_fields(),
            colorings: builtin_colorings(),
            needs_render: true,
        }
    }

    pub(crate) fn state(&self) -> &RenderState {
        &self.state
    }

    pub(crate) fn fields(&self) -> &[ScalarField] {
        &self.fields
    }

    pub(crate) fn colorings(&self) -> &[ColorMapping] {
        &self.colorings
    }

    pub(crate) fn needs_render(&self) -> bool {
        self.needs_render
    }

    /// Ask for a full redraw on the next frame (e.g. after a resize).
    pub(crate) fn request_render(&mut self) {
        self.needs_render = true;
    }

    /// Clear and return the pending redraw flag.
    pub(crate) fn take_render_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_render)
    }

    pub(crate) fn select_field(&mut self, field: ScalarField) {
        self.state.select_field(field);
        info!(field = field.name, zoom = self.state.zoom(), "Field selected");
        self.needs_render = true;
    }

    pub(crate) fn select_coloring(&mut self, coloring: ColorMapping) {
        self.state.select_coloring(coloring);
        info!(coloring = coloring.name, "Coloring selected");
        self.needs_render = true;
    }

    /// Mouse-wheel zoom; `wheel_rotation` is in notches.
    pub(crate) fn adjust_zoom(&mut self, wheel_rotation: f64) {
        let zoom = self.state.adjust_zoom(wheel_rotation);
        info!("zoom : {zoom}");
        self.needs_render = true;
    }

    /// Zoom from the "Set Zoom" prompt. A rejected entry is logged and leaves
    /// the state untouched.
    pub(crate) fn set_zoom(&mut self, text: &str) -> Result<f64, CoreError> {
        match self.state.set_zoom_text(text) {
            Ok(zoom) => {
                info!("zoom : {zoom}");
                self.needs_render = true;
                Ok(zoom)
            }
            Err(e) => {
                error!("Failed to set zoom: {e}");
                Err(e)
            }
        }
    }

    /// Render the current selection offscreen and write it as a PNG.
    ///
    /// Output is `canvas_width × canvas_width`.
    pub(crate) fn request_export(
        &self,
        path: &Path,
        canvas_width: u32,
        canvas_height: u32,
    ) -> drawings_render::Result<(u32, u32)> {
        drawings_render::export_canvas(&self.state, canvas_width, canvas_height, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_defaults_and_pending_render() {
        let mut c = Controller::new();
        assert_eq!(c.state().field().name, "x + y");
        assert_eq!(c.state().coloring().name, "Rainbow");
        assert_eq!(c.state().zoom(), 1.0);
        assert!(c.take_render_request());
        assert!(!c.take_render_request());
    }

    #[test]
    fn wheel_zoom_clamps_at_zero() {
        let mut c = Controller::new();
        c.take_render_request();
        c.adjust_zoom(-15.0);
        assert_eq!(c.state().zoom(), 0.0);
        assert!(c.needs_render());
    }

    #[test]
    fn set_zoom_parses_text() {
        let mut c = Controller::new();
        assert_eq!(c.set_zoom("2.5").unwrap(), 2.5);
        assert_eq!(c.state().zoom(), 2.5);
    }

    #[test]
    fn set_zoom_rejects_garbage_without_redraw() {
        let mut c = Controller::new();
        c.set_zoom("3").unwrap();
        c.take_render_request();

        assert!(c.set_zoom("abc").is_err());
        assert_eq!(c.state().zoom(), 3.0);
        assert!(!c.needs_render());
    }

    #[test]
    fn select_field_resets_zoom() {
        let mut c = Controller::new();
        c.set_zoom("9").unwrap();
        let xor = c.fields()[7];
        c.select_field(xor);
        assert_eq!(c.state().field().name, "XOR");
        assert_eq!(c.state().zoom(), 1.0);
        assert!(c.needs_render());
    }

    #[test]
    fn select_coloring_keeps_zoom() {
        let mut c = Controller::new();
        c.set_zoom("0.5").unwrap();
        c.take_render_request();
        let gray = c.colorings()[3];
        c.select_coloring(gray);
        assert_eq!(c.state().coloring().name, "BLACK/WHITE");
        assert_eq!(c.state().zoom(), 0.5);
        assert!(c.needs_render());
    }

    #[test]
    fn export_uses_width_for_both_sides() {
        let c = Controller::new();
        let dir = std::env::temp_dir().join("drawings_app_test_export");
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join("drawing.png");

        let dims = c.request_export(&path, 100, 200).expect("export should succeed");
        assert_eq!(dims, (100, 100));
        assert!(path.exists());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
