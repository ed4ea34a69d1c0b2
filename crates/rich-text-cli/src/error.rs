//! CLI error types.

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Document(#[from] rich_text_types::Error),

    #[error("Failed to encode tree: {0}")]
    Encode(#[from] serde_json::Error),
}
