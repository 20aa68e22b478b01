pub mod coloring;
pub mod error;
pub mod field;
pub mod state;

// Re-export primary types for convenience.
pub use coloring::{
    builtin_colorings, coloring_by_name, ColorMapping, ColorRule, RainbowParams, Rgb,
};
pub use error::CoreError;
pub use field::{builtin_fields, field_by_name, ScalarField};
pub use state::{RenderState, WHEEL_ZOOM_STEP};

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
