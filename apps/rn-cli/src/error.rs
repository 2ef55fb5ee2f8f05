//! Error types for the rn-cli entry point.

/// Application error wrapping the library diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Parse(#[from] rn_parse::ParseError),

    #[error("render failed: {0}")]
    Render(#[from] rn_graph::GraphError),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for rn-cli operations.
pub type AppResult<T> = Result<T, AppError>;
