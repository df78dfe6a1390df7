//! Records handed in by the crawler and the scoring model.

use crate::scoring::{Category, Score};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Per-page signals extracted by the crawler.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Signals {
    pub direct_answer_blocks: Vec<String>,
    pub entity_mentions: Vec<String>,
}

/// One crawled page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CrawlData {
    pub url: String,
    pub title: String,
    pub meta_description: Option<String>,
    pub h1: Vec<String>,
    pub h2: Vec<String>,
    #[serde(alias = "content")]
    pub text_content: String,
    #[serde(alias = "structuredData")]
    pub json_ld: Vec<Value>,
    pub signals: Signals,
}

impl CrawlData {
    pub fn word_count(&self) -> usize {
        self.text_content.split_whitespace().count()
    }

    /// All `@type` values declared by this page's structured data.
    pub fn schema_types(&self) -> Vec<String> {
        let mut types = Vec::new();
        for block in &self.json_ld {
            collect_types(block, &mut types);
        }
        types
    }

    pub fn has_schema_type(&self, wanted: &str) -> bool {
        self.schema_types()
            .iter()
            .any(|t| t.eq_ignore_ascii_case(wanted))
    }

    /// Whether the page looks like a FAQ page by URL or title.
    pub fn is_faq_like(&self) -> bool {
        self.url.to_ascii_lowercase().contains("faq")
            || self.title.to_ascii_lowercase().contains("faq")
    }

    pub fn has_question_h1(&self) -> bool {
        self.h1.iter().any(|h| h.contains('?'))
    }

    pub fn meta_description_len(&self) -> usize {
        self.meta_description
            .as_deref()
            .map(|m| m.trim().chars().count())
            .unwrap_or(0)
    }
}

fn collect_types(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            match map.get("@type") {
                Some(Value::String(t)) => out.push(t.clone()),
                Some(Value::Array(items)) => {
                    out.extend(items.iter().filter_map(|v| v.as_str().map(str::to_string)))
                }
                _ => {}
            }
            if let Some(graph) = map.get("@graph") {
                collect_types(graph, out);
            }
        }
        Value::Array(items) => items.iter().for_each(|v| collect_types(v, out)),
        _ => {}
    }
}

/// Category scores as produced by the scoring model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionScores {
    pub entity_clarity: Score,
    pub direct_answers: Score,
    pub trust_signals: Score,
    pub competitive_positioning: Score,
    pub technical_accessibility: Score,
}

impl SectionScores {
    pub fn uniform(score: Score) -> Self {
        Self {
            entity_clarity: score,
            direct_answers: score,
            trust_signals: score,
            competitive_positioning: score,
            technical_accessibility: score,
        }
    }

    pub fn get(&self, category: Category) -> Score {
        match category {
            Category::EntityClarity => self.entity_clarity,
            Category::DirectAnswers => self.direct_answers,
            Category::TrustSignals => self.trust_signals,
            Category::CompetitivePositioning => self.competitive_positioning,
            Category::TechnicalAccessibility => self.technical_accessibility,
        }
    }
}

/// Output of the scoring model for one site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoScore {
    pub overall_score: Score,
    pub tier: String,
    pub section_scores: SectionScores,
    pub top_ai_hesitations: Vec<String>,
    pub week1_fix_plan: Vec<String>,
    pub limitations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_camel_case_crawl_record() {
        let page: CrawlData = serde_json::from_value(json!({
            "url": "https://example.com/faq",
            "title": "FAQ",
            "h1": ["Questions?"],
            "jsonLd": [{ "@type": ["FAQPage", "WebPage"] }],
            "signals": { "directAnswerBlocks": ["A short answer."] }
        }))
        .unwrap();

        assert!(page.meta_description.is_none());
        assert!(page.is_faq_like());
        assert!(page.has_question_h1());
        assert!(page.has_schema_type("faqpage"));
        assert_eq!(page.signals.direct_answer_blocks.len(), 1);
        assert!(page.signals.entity_mentions.is_empty());
    }

    #[test]
    fn schema_types_walk_graph() {
        let page = CrawlData {
            json_ld: vec![json!({
                "@context": "https://schema.org",
                "@graph": [{ "@type": "Organization" }, { "@type": "WebSite" }]
            })],
            ..Default::default()
        };
        assert_eq!(page.schema_types(), vec!["Organization", "WebSite"]);
    }

    #[test]
    fn geo_score_clamps_out_of_range_values() {
        let score: GeoScore = serde_json::from_value(json!({
            "overall_score": 120,
            "tier": "Weak / Inconsistent",
            "section_scores": { "entity_clarity": -4, "direct_answers": 55.5 }
        }))
        .unwrap();
        assert_eq!(score.overall_score.value(), 100);
        assert_eq!(score.section_scores.entity_clarity.value(), 0);
        assert_eq!(score.section_scores.direct_answers.value(), 56);
        assert_eq!(score.section_scores.get(Category::TrustSignals).value(), 0);
    }
}
