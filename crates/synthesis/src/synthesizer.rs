use crate::appendix::build_appendix;
use crate::competitors::{CompetitorAnalysisProvider, PlaceholderCompetitors};
use crate::context::SiteContext;
use crate::direct_answers::direct_answer_recommendations;
use crate::error::SynthesisError;
use crate::pages::analyze_pages;
use crate::roadmap::{build_roadmap, project_scores};
use crate::schema::schema_recommendations;
use crate::sections::build_sections;
use crate::summary::build_summary;
use chrono::{DateTime, SecondsFormat, Utc};
use geo_report_types::{CrawlData, FullReport, GeoScore, SCHEMA_VERSION};

/// Builds a [`FullReport`] from crawl records and category scores.
///
/// Synthesis performs no I/O. The only non-deterministic output is the report
/// identifier and timestamp, which never influence the report content.
pub struct ReportSynthesizer {
    competitors: Box<dyn CompetitorAnalysisProvider>,
}

impl Default for ReportSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSynthesizer {
    pub fn new() -> Self {
        Self {
            competitors: Box::new(PlaceholderCompetitors),
        }
    }

    pub fn with_competitor_provider(
        mut self,
        provider: impl CompetitorAnalysisProvider + 'static,
    ) -> Self {
        self.competitors = Box::new(provider);
        self
    }

    pub fn synthesize(
        &self,
        crawl: &[CrawlData],
        score: &GeoScore,
        domain: &str,
    ) -> Result<FullReport, SynthesisError> {
        self.synthesize_at(crawl, score, domain, Utc::now())
    }

    /// Same as [`ReportSynthesizer::synthesize`] with an explicit timestamp.
    pub fn synthesize_at(
        &self,
        crawl: &[CrawlData],
        score: &GeoScore,
        domain: &str,
        now: DateTime<Utc>,
    ) -> Result<FullReport, SynthesisError> {
        let site = SiteContext::new(domain, crawl)?;

        let sections = build_sections(&site, score);
        let executive_summary = build_summary(domain, score, &sections);
        let page_analysis = analyze_pages(&site);
        let direct_answer_recommendations = direct_answer_recommendations(&site);
        let schema_recommendations = schema_recommendations(&site)?;
        let competitor_analysis = self.competitors.analyze(domain);
        let implementation_roadmap = build_roadmap(
            score,
            &sections,
            &schema_recommendations,
            &direct_answer_recommendations,
            domain,
        );
        let score_projection = project_scores(score.overall_score, &sections);
        let technical_appendix = build_appendix(&site, &score.limitations);

        let report = FullReport {
            schema_version: SCHEMA_VERSION.to_string(),
            report_id: report_id(domain, now),
            domain: domain.to_string(),
            generated_at: now.to_rfc3339_opts(SecondsFormat::Secs, true),
            executive_summary,
            sections,
            page_analysis,
            direct_answer_recommendations,
            schema_recommendations,
            competitor_analysis,
            implementation_roadmap,
            score_projection,
            technical_appendix,
        };
        log::info!(
            "Synthesized report {} for {}: {} pages, overall {}",
            report.report_id,
            domain,
            report.page_analysis.len(),
            report.executive_summary.score
        );
        Ok(report)
    }
}

/// `geo-<domain-slug>-<timestamp>-<random hex>`; used for traceability only.
pub fn report_id(domain: &str, now: DateTime<Utc>) -> String {
    format!(
        "geo-{}-{}-{:06x}",
        slug::slugify(domain),
        now.format("%Y%m%d%H%M%S"),
        rand::random::<u32>() & 0x00ff_ffff
    )
}

/// Synthesizes with the default collaborators.
pub fn synthesize(
    crawl: &[CrawlData],
    score: &GeoScore,
    domain: &str,
) -> Result<FullReport, SynthesisError> {
    ReportSynthesizer::new().synthesize(crawl, score, domain)
}
