// src/error.rs
use geo_report_layout::LayoutError;
use geo_report_render_core::RenderError;
use geo_report_synthesis::SynthesisError;
use thiserror::Error;

/// A comprehensive error type for the whole synthesize-then-render pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Synthesis failed: {0}")]
    Synthesis(#[from] SynthesisError),

    #[error("Layout configuration is invalid: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
