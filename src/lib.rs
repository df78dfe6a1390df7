//! GEO audit report generation.
//!
//! Turns crawl records and category scores into a [`FullReport`] and renders it as a
//! paginated PDF. The work is split across the workspace crates; this crate wires
//! them together behind [`PipelineBuilder`].
//!
//! ```no_run
//! use geo_report::{CrawlData, GeoScore, PipelineBuilder};
//!
//! # fn main() -> Result<(), geo_report::PipelineError> {
//! let crawl: Vec<CrawlData> = serde_json::from_str(&std::fs::read_to_string("crawl.json")?)?;
//! let score: GeoScore = serde_json::from_str(&std::fs::read_to_string("score.json")?)?;
//! let pipeline = PipelineBuilder::new().build()?;
//! pipeline.generate_to_file(&crawl, &score, "example.com", "report.pdf")?;
//! # Ok(())
//! # }
//! ```

pub mod document;
pub mod error;
pub mod pipeline;
pub mod sink;

pub use error::PipelineError;
pub use pipeline::{PipelineBuilder, ReportPipeline};
pub use sink::RendererSink;

pub use geo_report_layout::{PageSize, PageTrace, RenderConfig};
pub use geo_report_synthesis::{CompetitorAnalysisProvider, PlaceholderCompetitors};
pub use geo_report_types::{CrawlData, FullReport, GeoScore, Score};
