#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use geo_report::{
    CrawlData, FullReport, GeoScore, PageTrace, PipelineBuilder, PipelineError, RenderConfig,
    ReportPipeline,
};
use geo_report_layout::Primitive;
use lopdf::Document as LopdfDocument;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub const DOMAIN: &str = "acme-rockets.example";

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Text of a 1-based page
    pub fn page_text(&self, page_num: u32) -> String {
        pdf_assertions::page_text(&self.doc, page_num)
    }

    /// Save PDF to a file for manual debugging
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn default_pipeline() -> Result<ReportPipeline, PipelineError> {
    init_logging();
    PipelineBuilder::new().build()
}

/// Synthesize and render with the default pipeline
pub fn generate(
    crawl: &[CrawlData],
    score: &GeoScore,
) -> Result<(FullReport, GeneratedPdf), Box<dyn std::error::Error>> {
    let pipeline = default_pipeline()?;
    let (report, bytes) = pipeline.generate(crawl, score, DOMAIN)?;
    Ok((report, GeneratedPdf::from_bytes(bytes)?))
}

/// Render an already synthesized report
pub fn render(
    pipeline: &ReportPipeline,
    report: &FullReport,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let bytes = pipeline.render_to_vec(report)?;
    GeneratedPdf::from_bytes(bytes)
}

/// Lowest point a primitive reaches, measured down from the top of the page.
pub fn primitive_bottom(primitive: &Primitive) -> f32 {
    match primitive {
        Primitive::Text { y, size, .. } => y + size,
        Primitive::Rect { rect, .. } => rect.bottom(),
        Primitive::Circle { cy, radius, .. } => cy + radius,
        Primitive::Line { from, to, .. } => from.1.max(to.1),
    }
}

/// Panics when any primitive of the trace starts above the page or reaches below the
/// bottom margin.
pub fn assert_within_body(trace: &PageTrace, config: &RenderConfig) {
    let limit = config.body_bottom() + 1.0;
    for page in &trace.pages {
        for primitive in &page.primitives {
            let bottom = primitive_bottom(primitive);
            assert!(
                bottom <= limit,
                "page {} draws below the bottom margin ({bottom} > {limit}): {primitive:?}",
                page.index
            );
            if let Primitive::Text { y, .. } = primitive {
                assert!(*y >= 0.0, "text above page {}", page.index);
            }
        }
    }
}
