use thiserror::Error;

/// Failures while turning laid-out pages into PDF bytes.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to write PDF output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode PDF content: {0}")]
    Encode(#[from] lopdf::Error),

    /// A page or the trailer was written before `begin_document` or after `finish`.
    #[error("no document in progress")]
    NoDocument,
}
