//! The synthesized report tree.
//!
//! A [`FullReport`] is built once by the synthesizer and then only read. It serializes to a
//! stable JSON interchange format so consumers other than the PDF renderer can use it
//! without re-running synthesis.

use crate::scoring::{effort_label, Category, Priority, Score, Status};
use serde::{Deserialize, Serialize};

/// Version of the serialized report layout.
pub const SCHEMA_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullReport {
    pub schema_version: String,
    pub report_id: String,
    pub domain: String,
    /// RFC 3339 timestamp of synthesis.
    pub generated_at: String,
    pub executive_summary: ExecutiveSummary,
    pub sections: Vec<ReportSection>,
    pub page_analysis: Vec<PageRecommendation>,
    pub direct_answer_recommendations: Vec<DirectAnswerRecommendation>,
    pub schema_recommendations: Vec<SchemaRecommendation>,
    pub competitor_analysis: Vec<CompetitorAnalysis>,
    pub implementation_roadmap: ImplementationRoadmap,
    pub score_projection: ScoreProjection,
    pub technical_appendix: TechnicalAppendix,
}

impl FullReport {
    pub fn section(&self, category: Category) -> Option<&ReportSection> {
        self.sections.iter().find(|s| s.category == category)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutiveSummary {
    pub score: Score,
    pub tier: String,
    pub synthesis: String,
    pub key_findings: Vec<KeyFinding>,
    pub primary_obstacle: PrimaryObstacle,
    pub quick_wins: Vec<String>,
    pub top_hesitations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyFinding {
    pub category: Category,
    pub score: Score,
    pub status: Status,
    pub finding: String,
}

/// The weakest category and the narrative explaining why it blocks citation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryObstacle {
    pub category: Category,
    pub title: String,
    pub score: Score,
    pub narrative: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSection {
    pub category: Category,
    pub title: String,
    pub score: Score,
    pub weight: u8,
    pub status: Status,
    pub findings: Findings,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Findings {
    pub what_we_found: String,
    pub why_it_matters: String,
    pub evidence: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub action: String,
    pub expected_improvement: u32,
    /// 1 (very easy) to 5 (very hard).
    pub effort_level: u8,
    pub pages_affected: Vec<String>,
}

impl Recommendation {
    pub fn effort_label(&self) -> &'static str {
        effort_label(self.effort_level)
    }
}

/// Analysis and fixes for a single crawled page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRecommendation {
    pub url: String,
    pub title: String,
    pub content_inventory: Vec<InventoryItem>,
    pub recommendations: Vec<PageFix>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InventoryKind {
    Title,
    MetaDescription,
    H1,
    H2,
    DirectAnswer,
}

impl InventoryKind {
    pub fn label(self) -> &'static str {
        match self {
            InventoryKind::Title => "Title",
            InventoryKind::MetaDescription => "Meta description",
            InventoryKind::H1 => "H1",
            InventoryKind::H2 => "H2",
            InventoryKind::DirectAnswer => "Direct answer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub kind: InventoryKind,
    pub text: String,
    /// Where on the page the text was found, e.g. `<h2> #3`.
    pub location: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixCategory {
    DirectAnswers,
    Schema,
    Meta,
    Structure,
    Content,
}

impl FixCategory {
    pub fn key(self) -> &'static str {
        match self {
            FixCategory::DirectAnswers => "direct_answers",
            FixCategory::Schema => "schema",
            FixCategory::Meta => "meta",
            FixCategory::Structure => "structure",
            FixCategory::Content => "content",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnippetLanguage {
    Html,
    Json,
    Text,
}

/// A page-scoped fix with a ready-to-apply snippet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageFix {
    pub category: FixCategory,
    pub priority: Priority,
    pub issue: String,
    pub action: String,
    pub code_snippet: String,
    pub snippet_language: SnippetLanguage,
    pub expected_impact: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectAnswerRecommendation {
    pub url: String,
    pub page_title: String,
    pub has_direct_answer: bool,
    pub current_word_count: usize,
    pub suggested_heading: String,
    pub suggested_answer: String,
    pub markup: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaState {
    Missing,
    Present,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaRecommendation {
    pub schema_type: String,
    pub current_state: SchemaState,
    /// URLs on which the type was detected.
    pub detected_on: Vec<String>,
    /// Complete JSON-LD payload, pretty printed.
    pub payload: String,
    pub placement: String,
    pub priority: Priority,
    pub estimated_impact: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorAnalysis {
    pub domain: String,
    pub score: Score,
    pub strengths: Vec<String>,
    pub gap_analysis: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImplementationRoadmap {
    pub week_1: Vec<RoadmapTask>,
    pub week_2_4: Vec<RoadmapTask>,
    pub ongoing: Vec<RoadmapTask>,
}

impl ImplementationRoadmap {
    /// The three buckets with their display titles, in chronological order.
    pub fn buckets(&self) -> [(&'static str, &[RoadmapTask]); 3] {
        [
            ("Week 1", &self.week_1),
            ("Weeks 2-4", &self.week_2_4),
            ("Ongoing", &self.ongoing),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapTask {
    pub task: String,
    /// Time estimate such as `15min` or `1hr`.
    pub effort: String,
    pub impact: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreProjection {
    pub current: Score,
    pub after_week_1: Score,
    pub after_week_4: Score,
    pub after_3_months: Score,
    pub target_score: Score,
}

impl ScoreProjection {
    /// Milestones in chronological order with short chart labels.
    pub fn milestones(&self) -> [(&'static str, Score); 5] {
        [
            ("Current", self.current),
            ("Week 1", self.after_week_1),
            ("Week 4", self.after_week_4),
            ("3 Months", self.after_3_months),
            ("Target", self.target_score),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnicalAppendix {
    pub pages_crawled: usize,
    pub words_analyzed: usize,
    pub schema_blocks_found: usize,
    pub faq_blocks_found: usize,
    pub entity_mentions_found: usize,
    pub methodology: Vec<String>,
    pub limitations: Vec<String>,
}
