use tracing::debug;

use crate::coloring::ColorMapping;
use crate::error::CoreError;
use crate::field::ScalarField;

/// Zoom change per unit of mouse-wheel rotation.
pub const WHEEL_ZOOM_STEP: f64 = 0.1;

/// The session's current selection: which field, which coloring, and the zoom
/// factor applied to the field output before coloring.
///
/// Zoom is kept non-negative by every mutator.
#[derive(Debug, Clone, Copy)]
pub struct RenderState {
    field: ScalarField,
    coloring: ColorMapping,
    zoom: f64,
}

impl RenderState {
    pub const DEFAULT_ZOOM: f64 = 1.0;

    pub fn new(field: ScalarField, coloring: ColorMapping) -> Self {
        Self {
            field,
            coloring,
            zoom: Self::DEFAULT_ZOOM,
        }
    }

    #[inline]
    pub fn field(&self) -> &ScalarField {
        &self.field
    }

    #[inline]
    pub fn coloring(&self) -> &ColorMapping {
        &self.coloring
    }

    #[inline]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Switch to another field. Always resets zoom to the default.
    pub fn select_field(&mut self, field: ScalarField) {
        self.field = field;
        self.zoom = Self::DEFAULT_ZOOM;
    }

    /// Switch to another coloring. Zoom is left alone.
    pub fn select_coloring(&mut self, coloring: ColorMapping) {
        self.coloring = coloring;
    }

    /// Set zoom directly, clamping negative values (and NaN) to zero.
    pub fn set_zoom(&mut self, zoom: f64) -> f64 {
        self.zoom = zoom.max(0.0);
        debug!(zoom = self.zoom, "Zoom set");
        self.zoom
    }

    /// Apply a mouse-wheel rotation: `zoom + delta · 0.1`, clamped at zero.
    pub fn adjust_zoom(&mut self, wheel_delta: f64) -> f64 {
        self.set_zoom(self.zoom + wheel_delta * WHEEL_ZOOM_STEP)
    }

    /// Parse user-entered text and set zoom from it.
    ///
    /// Surrounding whitespace is ignored. On failure zoom is unchanged.
    pub fn set_zoom_text(&mut self, text: &str) -> crate::Result<f64> {
        match text.trim().parse::<f64>() {
            Ok(zoom) => Ok(self.set_zoom(zoom)),
            Err(source) => Err(CoreError::InvalidZoom {
                input: text.to_string(),
                source,
            }),
        }
    }
}

impl Default for RenderState {
    fn default() -> Self {
        Self::new(ScalarField::default(), ColorMapping::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coloring::builtin_colorings;
    use crate::field::builtin_fields;

    #[test]
    fn default_state() {
        let state = RenderState::default();
        assert_eq!(state.field().name, "x + y");
        assert_eq!(state.coloring().name, "Rainbow");
        assert_eq!(state.zoom(), 1.0);
    }

    #[test]
    fn wheel_clamps_at_zero() {
        let mut state = RenderState::default();
        assert_eq!(state.adjust_zoom(-15.0), 0.0);
        assert_eq!(state.zoom(), 0.0);
        // Further scrolling down stays at zero.
        state.adjust_zoom(-1.0);
        assert_eq!(state.zoom(), 0.0);
    }

    #[test]
    fn wheel_steps_by_a_tenth() {
        let mut state = RenderState::default();
        state.adjust_zoom(3.0);
        assert!((state.zoom() - 1.3).abs() < 1e-12);
        state.adjust_zoom(-1.0);
        assert!((state.zoom() - 1.2).abs() < 1e-12);
    }

    #[test]
    fn set_zoom_from_text() {
        let mut state = RenderState::default();
        assert_eq!(state.set_zoom_text("2.5").unwrap(), 2.5);
        assert_eq!(state.zoom(), 2.5);
        assert_eq!(state.set_zoom_text(" 4 ").unwrap(), 4.0);
    }

    #[test]
    fn bad_zoom_text_leaves_zoom_unchanged() {
        let mut state = RenderState::default();
        state.set_zoom(3.0);
        let err = state.set_zoom_text("abc").unwrap_err();
        assert!(matches!(err, CoreError::InvalidZoom { ref input, .. } if input == "abc"));
        assert_eq!(state.zoom(), 3.0);
        assert!(state.set_zoom_text("").is_err());
        assert_eq!(state.zoom(), 3.0);
    }

    #[test]
    fn negative_zoom_clamps() {
        let mut state = RenderState::default();
        assert_eq!(state.set_zoom_text("-2").unwrap(), 0.0);
        assert_eq!(state.set_zoom(f64::NAN), 0.0);
    }

    #[test]
    fn selecting_field_resets_zoom() {
        let mut state = RenderState::default();
        for field in builtin_fields() {
            state.set_zoom(7.5);
            state.select_field(field);
            assert_eq!(state.zoom(), 1.0);
            assert_eq!(state.field().name, field.name);
        }
    }

    #[test]
    fn selecting_coloring_keeps_zoom() {
        let mut state = RenderState::default();
        state.set_zoom(0.25);
        for coloring in builtin_colorings() {
            state.select_coloring(coloring);
            assert_eq!(state.zoom(), 0.25);
            assert_eq!(state.coloring(), &coloring);
        }
    }
}
