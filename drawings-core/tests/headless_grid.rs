use drawings_core::{
    builtin_colorings, builtin_fields, ColorMapping, RenderState, Rgb, ScalarField,
};

/// Evaluate every pixel of a `width × height` canvas without a pixel buffer.
fn color_grid(
    field: &ScalarField,
    coloring: &ColorMapping,
    zoom: f64,
    width: u32,
    height: u32,
) -> Vec<Rgb> {
    let mut colors = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            colors.push(coloring.color(field.eval(x as f64, y as f64) * zoom));
        }
    }
    colors
}

#[test]
fn every_pairing_covers_the_canvas() {
    for field in builtin_fields() {
        for coloring in builtin_colorings() {
            let colors = color_grid(&field, &coloring, 1.0, 32, 24);
            assert_eq!(colors.len(), 32 * 24);
        }
    }
}

#[test]
fn headless_grid_is_deterministic() {
    let state = RenderState::default();
    let run1 = color_grid(state.field(), state.coloring(), state.zoom(), 40, 30);
    let run2 = color_grid(state.field(), state.coloring(), state.zoom(), 40, 30);
    assert_eq!(
        run1.iter().map(|c| c.to_rgba8()).collect::<Vec<_>>(),
        run2.iter().map(|c| c.to_rgba8()).collect::<Vec<_>>(),
        "two identical evaluations must produce identical colors"
    );
}

#[test]
fn zero_zoom_collapses_finite_fields() {
    let coloring = ColorMapping::default();
    let field = ScalarField::default();
    let colors = color_grid(&field, &coloring, 0.0, 16, 16);
    let first = colors[0].to_rgba8();
    assert!(colors.iter().all(|c| c.to_rgba8() == first));
}

#[test]
fn special_values_reach_the_coloring() {
    // x/y at the top row divides by zero; the coloring must absorb it.
    let div = builtin_fields().into_iter().find(|f| f.name == "x/y").unwrap();
    for coloring in builtin_colorings() {
        let colors = color_grid(&div, &coloring, 1.0, 8, 8);
        assert_eq!(colors.len(), 64);
    }
}
