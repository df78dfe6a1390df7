//! Report synthesis for AI citation readiness audits.
//!
//! Turns crawl records ([`CrawlData`](geo_report_types::CrawlData)) and category scores
//! ([`GeoScore`](geo_report_types::GeoScore)) into a [`FullReport`](geo_report_types::FullReport):
//! - category sections chosen from a score-banded narrative table
//! - page-scoped fixes produced by [`PageRule`]s
//! - direct-answer and structured-data suggestions
//! - a phased roadmap and score projection

mod appendix;
mod competitors;
mod context;
mod direct_answers;
mod error;
mod pages;
mod roadmap;
mod rules;
mod schema;
mod sections;
mod summary;
mod synthesizer;
pub mod templates;

pub use competitors::{CompetitorAnalysisProvider, PlaceholderCompetitors};
pub use context::{PageContext, SiteContext};
pub use error::SynthesisError;
pub use pages::{rank_and_truncate, PageRule, MAX_FIXES_PER_PAGE};
pub use roadmap::{project_scores, week1_effort};
pub use rules::{apply_rules, Rule};
pub use summary::primary_obstacle;
pub use synthesizer::{report_id, synthesize, ReportSynthesizer};
