use std::num::ParseFloatError;

use thiserror::Error;

/// Errors originating from the catalogs and session state.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid zoom {input:?}: {source}")]
    InvalidZoom {
        input: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("unknown scalar field: {0}")]
    UnknownField(String),

    #[error("unknown color mapping: {0}")]
    UnknownColoring(String),
}
