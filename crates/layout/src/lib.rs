use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid render configuration: {0}")]
    InvalidConfig(String),
    #[error("Failed to parse render configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Failed to read render configuration: {0}")]
    Io(#[from] std::io::Error),
}

pub mod algorithms;
pub mod composer;
pub mod config;
pub mod fonts;
pub mod output;
pub mod state;
pub mod style;
pub mod text;

pub use self::composer::PageComposer;
pub use self::config::{PageSize, RenderConfig};
pub use self::fonts::{FontFace, text_width};
pub use self::output::{Page, PageSink, PageTrace, Primitive};
pub use self::state::LayoutState;
pub use self::style::{HeadingLevel, TextStyle};

// Re-export geometry types used by primitives to prevent type mismatches
pub use geo_report_types::{Color, Rect};
