//! Streaming PDF renderer using lopdf.
//!
//! Pages are encoded with the PDF standard fonts and written to the output as soon as
//! they are laid out, so peak memory does not grow with the page count.

mod helpers;
mod renderer;
mod writer;

pub use helpers::{page_to_content, to_win_ansi};
pub use renderer::LopdfRenderer;
pub use writer::StreamingPdfWriter;
