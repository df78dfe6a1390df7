// src/pipeline.rs
use crate::document::{self, document_info};
use crate::error::PipelineError;
use crate::sink::RendererSink;
use geo_report_layout::{PageTrace, RenderConfig};
use geo_report_render_core::DocumentRenderer;
use geo_report_render_lopdf::LopdfRenderer;
use geo_report_synthesis::{CompetitorAnalysisProvider, ReportSynthesizer};
use geo_report_types::{CrawlData, FullReport, GeoScore};
use std::fs::File;
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// A builder for creating a [`ReportPipeline`].
#[derive(Default)]
pub struct PipelineBuilder {
    config: RenderConfig,
    synthesizer: ReportSynthesizer,
}

impl PipelineBuilder {
    /// Creates a builder with the default page geometry and competitor provider.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Loads the render configuration from a JSON string.
    pub fn with_config_json(self, json: &str) -> Result<Self, PipelineError> {
        let config = RenderConfig::from_json(json)?;
        Ok(self.with_config(config))
    }

    /// Loads the render configuration from a JSON file.
    pub fn with_config_file<P: AsRef<Path>>(self, path: P) -> Result<Self, PipelineError> {
        let config = RenderConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Replaces the placeholder competitor comparison.
    pub fn with_competitor_provider(
        mut self,
        provider: impl CompetitorAnalysisProvider + 'static,
    ) -> Self {
        self.synthesizer = self.synthesizer.with_competitor_provider(provider);
        self
    }

    /// Validates the configuration and creates the pipeline.
    pub fn build(self) -> Result<ReportPipeline, PipelineError> {
        self.config.validate()?;
        Ok(ReportPipeline {
            config: Arc::new(self.config),
            synthesizer: self.synthesizer,
        })
    }
}

/// Synthesizes audit reports and renders them to PDF.
///
/// The configuration is shared read-only, so one pipeline can serve concurrent
/// runs; every call gets its own renderer and layout state.
pub struct ReportPipeline {
    config: Arc<RenderConfig>,
    synthesizer: ReportSynthesizer,
}

impl ReportPipeline {
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn synthesize(
        &self,
        crawl: &[CrawlData],
        score: &GeoScore,
        domain: &str,
    ) -> Result<FullReport, PipelineError> {
        Ok(self.synthesizer.synthesize(crawl, score, domain)?)
    }

    /// Renders `report` into `writer`, streaming each page as soon as it is laid out.
    pub fn render<W>(&self, report: &FullReport, writer: W) -> Result<W, PipelineError>
    where
        W: Write + Seek + Send,
    {
        let start = Instant::now();
        let mut renderer = LopdfRenderer::new();
        renderer.begin_document(writer, &document_info(report))?;

        let sink: RendererSink<_, W> = RendererSink::new(renderer);
        let (sink, pages) = document::write_report(report, Arc::clone(&self.config), sink)?;
        let writer = sink.finish()?;
        log::info!(
            "Rendered report {} ({} pages) in {:.2?}",
            report.report_id,
            pages,
            start.elapsed()
        );
        Ok(writer)
    }

    pub fn render_to_vec(&self, report: &FullReport) -> Result<Vec<u8>, PipelineError> {
        Ok(self.render(report, Cursor::new(Vec::new()))?.into_inner())
    }

    /// Lays the report out without producing a PDF, returning every page's primitives.
    pub fn layout_trace(&self, report: &FullReport) -> PageTrace {
        match document::write_report(report, Arc::clone(&self.config), PageTrace::new()) {
            Ok((trace, _)) => trace,
            Err(never) => match never {},
        }
    }

    /// Synthesizes and renders in one call.
    pub fn generate(
        &self,
        crawl: &[CrawlData],
        score: &GeoScore,
        domain: &str,
    ) -> Result<(FullReport, Vec<u8>), PipelineError> {
        let report = self.synthesize(crawl, score, domain)?;
        let bytes = self.render_to_vec(&report)?;
        Ok((report, bytes))
    }

    /// Synthesizes and renders straight into a file.
    pub fn generate_to_file<P: AsRef<Path>>(
        &self,
        crawl: &[CrawlData],
        score: &GeoScore,
        domain: &str,
        path: P,
    ) -> Result<FullReport, PipelineError> {
        let path = path.as_ref();
        let report = self.synthesize(crawl, score, domain)?;
        let file = File::create(path)?;
        let mut writer = self.render(&report, BufWriter::new(file))?;
        writer.flush()?;
        log::info!("Wrote {}", path.display());
        Ok(report)
    }
}
