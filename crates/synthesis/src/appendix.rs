use crate::context::SiteContext;
use geo_report_types::TechnicalAppendix;

const METHODOLOGY: [&str; 4] = [
    "Each crawled page was inspected for titles, meta descriptions, headings, structured data and direct-answer blocks.",
    "Category scores come from the scoring model and are weighted 30/30/20/10/10 into the overall score.",
    "Narrative findings are selected by score band and backed by evidence counted from the crawl.",
    "Projected scores assume the listed recommendations are implemented as described.",
];

pub fn build_appendix(site: &SiteContext<'_>, limitations: &[String]) -> TechnicalAppendix {
    TechnicalAppendix {
        pages_crawled: site.page_count(),
        words_analyzed: site.words(),
        schema_blocks_found: site.schema_blocks(),
        faq_blocks_found: site.schema_type_count("FAQPage"),
        entity_mentions_found: site.entity_mentions(),
        methodology: METHODOLOGY.iter().map(|s| s.to_string()).collect(),
        limitations: limitations.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_report_types::{CrawlData, Signals};
    use serde_json::json;

    #[test]
    fn aggregates_counters() {
        let crawl = vec![
            CrawlData {
                url: "https://example.com/".into(),
                text_content: "one two three".into(),
                json_ld: vec![json!({"@type": "Organization"}), json!({"@type": "FAQPage"})],
                signals: Signals {
                    entity_mentions: vec!["Example".into()],
                    ..Default::default()
                },
                ..Default::default()
            },
            CrawlData {
                url: "https://example.com/faq".into(),
                text_content: "four five".into(),
                json_ld: vec![json!({"@graph": [{"@type": "FAQPage"}]})],
                ..Default::default()
            },
        ];
        let site = SiteContext::new("example.com", &crawl).unwrap();
        let appendix = build_appendix(&site, &["Only public pages were crawled".to_string()]);
        assert_eq!(appendix.pages_crawled, 2);
        assert_eq!(appendix.words_analyzed, 5);
        assert_eq!(appendix.schema_blocks_found, 3);
        assert_eq!(appendix.faq_blocks_found, 2);
        assert_eq!(appendix.entity_mentions_found, 1);
        assert_eq!(appendix.limitations.len(), 1);
    }
}
