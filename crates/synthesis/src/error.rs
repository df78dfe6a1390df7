use thiserror::Error;

#[derive(Error, Debug)]
pub enum SynthesisError {
    #[error("Invalid page URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Failed to serialize structured data payload: {0}")]
    Payload(#[from] serde_json::Error),
}
