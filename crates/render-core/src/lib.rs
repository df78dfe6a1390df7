//! Core rendering abstractions for report documents.
//!
//! This crate provides the fundamental traits and types used by rendering backends:
//! - `DocumentRenderer` trait for abstracting PDF writing operations
//! - `DocumentInfo` metadata carried into the output
//! - Error types for rendering operations
//! - Shared utility functions for font resources and coordinate conversion

mod error;
mod traits;
mod types;
pub mod utils;

pub use error::RenderError;
pub use traits::DocumentRenderer;
pub use types::DocumentInfo;
