//! The catalog of scalar fields: pure functions from a pixel coordinate to a
//! real value.
//!
//! Every field is total over the reals. Nothing is bounds-checked, so
//! divisions by zero, logarithms of non-positive values and overflowing
//! tangents come out as IEEE-754 infinities or NaN and flow straight into the
//! color mapping stage.

use std::fmt;

use crate::error::CoreError;

/// A named scalar field `(x, y) -> value`.
///
/// `x` and `y` are pixel coordinates relative to the top-left corner of the
/// canvas, with `y` growing downward.
#[derive(Clone, Copy)]
pub struct ScalarField {
    pub name: &'static str,
    func: fn(f64, f64) -> f64,
}

impl ScalarField {
    pub const fn new(name: &'static str, func: fn(f64, f64) -> f64) -> Self {
        Self { name, func }
    }

    /// Evaluate the field at a single coordinate.
    #[inline]
    pub fn eval(&self, x: f64, y: f64) -> f64 {
        (self.func)(x, y)
    }
}

impl fmt::Debug for ScalarField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarField").field("name", &self.name).finish()
    }
}

impl Default for ScalarField {
    /// The plain `x + y` field selected at startup.
    fn default() -> Self {
        ScalarField::new("x + y", linear_sum)
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// All built-in fields, in menu order.
pub fn builtin_fields() -> Vec<ScalarField> {
    vec![
        ScalarField::default(),
        ScalarField::new("sin (x) cos(y) tan(x*y)", sin_cos_tan),
        ScalarField::new("sin (x) tan(x*y)", cos_minus_tan),
        ScalarField::new("centered sin (x) tan(x*y)", centered_cos_minus_tan),
        ScalarField::new("centered sin (x) tan(x*y) wide", wide_cos_minus_tan),
        ScalarField::new("AND", bit_and),
        ScalarField::new("OR", bit_or),
        ScalarField::new("XOR", bit_xor),
        ScalarField::new("x XOR x & y", x_xor_and),
        ScalarField::new("x | y XOR x & y", or_xor_and),
        ScalarField::new("x*y", product),
        ScalarField::new("x/y", quotient),
        ScalarField::new("sin(x) * sin(y)", sin_sin),
        ScalarField::new("cos(x) * cos(y)", cos_cos),
        ScalarField::new("tan(x) * tan(y)", tan_tan),
        ScalarField::new("sin(x) * tan(y)", sin_tan),
        ScalarField::new("x + y (scaled)", scaled_sum),
        ScalarField::new("x - y", scaled_difference),
        ScalarField::new("x pow y", power),
        ScalarField::new("x log y", log_product),
        ScalarField::new("x hypot y", hypot),
        ScalarField::new("e^x * e^y", exp_product),
    ]
}

/// Look up a built-in field by its display name.
pub fn field_by_name(name: &str) -> crate::Result<ScalarField> {
    builtin_fields()
        .into_iter()
        .find(|f| f.name == name)
        .ok_or_else(|| CoreError::UnknownField(name.to_string()))
}

// ---------------------------------------------------------------------------
// Field functions
// ---------------------------------------------------------------------------

/// Truncate toward zero into an `i32`. Saturates at the integer bounds and
/// maps NaN to zero.
#[inline]
fn trunc(v: f64) -> i32 {
    v as i32
}

fn linear_sum(x: f64, y: f64) -> f64 {
    x + y
}

fn sin_cos_tan(x: f64, y: f64) -> f64 {
    const FAC_SIN: f64 = 0.05;
    const FAC_COS: f64 = 0.05;
    const FAC_TAN: f64 = 0.0015;
    (x * FAC_SIN).sin() * (y * FAC_COS).cos() * ((x * y) * FAC_TAN).tan()
}

/// `cos(xy·a + d) − tan(xy·b + d)`, shared by the three "sin tan" variants.
#[inline]
fn cos_minus_tan_with(x: f64, y: f64, fac_cos: f64, fac_tan: f64, delta: f64) -> f64 {
    (x * y * fac_cos + delta).cos() - (x * y * fac_tan + delta).tan()
}

fn cos_minus_tan(x: f64, y: f64) -> f64 {
    cos_minus_tan_with(x, y, 0.0005, 0.000015, 1000.0)
}

fn centered_cos_minus_tan(x: f64, y: f64) -> f64 {
    cos_minus_tan_with(x, y, 0.0002, 0.024, 100.0)
}

fn wide_cos_minus_tan(x: f64, y: f64) -> f64 {
    cos_minus_tan_with(x, y, 0.00002, 0.0000024, 100.0)
}

fn bit_and(x: f64, y: f64) -> f64 {
    (trunc(x) & trunc(y)) as f64
}

fn bit_or(x: f64, y: f64) -> f64 {
    (trunc(x) | trunc(y)) as f64
}

fn bit_xor(x: f64, y: f64) -> f64 {
    (trunc(x) ^ trunc(y)) as f64
}

fn x_xor_and(x: f64, y: f64) -> f64 {
    const FAC: f64 = 0.005;
    let (x, y) = (trunc(x), trunc(y));
    (x ^ (x & y)) as f64 * FAC
}

fn or_xor_and(x: f64, y: f64) -> f64 {
    const FAC: f64 = 0.005;
    let (x, y) = (trunc(x), trunc(y));
    ((x | y) ^ (x & y)) as f64 * FAC
}

fn product(x: f64, y: f64) -> f64 {
    x * y
}

fn quotient(x: f64, y: f64) -> f64 {
    x / y
}

fn sin_sin(x: f64, y: f64) -> f64 {
    const FAC: f64 = 0.05;
    (x * FAC).sin() * (y * FAC).sin()
}

fn cos_cos(x: f64, y: f64) -> f64 {
    const FAC: f64 = 0.05;
    (x * FAC).cos() * (y * FAC).cos()
}

fn tan_tan(x: f64, y: f64) -> f64 {
    const FAC: f64 = 2.1;
    (x * FAC).tan() * (y * FAC).tan()
}

fn sin_tan(x: f64, y: f64) -> f64 {
    const FAC_X: f64 = 0.01;
    const FAC_Y: f64 = 2.1;
    (x * FAC_X).sin() * (y * FAC_Y).tan()
}

fn scaled_sum(x: f64, y: f64) -> f64 {
    x * 0.01 + y * 0.05
}

fn scaled_difference(x: f64, y: f64) -> f64 {
    x * 0.01 - y * 0.05
}

fn power(x: f64, y: f64) -> f64 {
    (x * 0.01).powf(y * 0.01)
}

fn log_product(x: f64, y: f64) -> f64 {
    const FAC: f64 = 1.5;
    (x * FAC).ln() * (y * FAC).ln()
}

fn hypot(x: f64, y: f64) -> f64 {
    (x * 0.1).hypot(y * 0.1)
}

fn exp_product(x: f64, y: f64) -> f64 {
    (x * 0.01).exp() * (y * 0.005).exp()
}
