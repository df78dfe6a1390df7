use geo_report::{CrawlData, GeoScore, Score};
use geo_report_types::{SectionScores, Signals};
use serde_json::json;

const BODY: &str = "Acme Rockets designs and launches small satellites for research teams. \
Our launch vehicles carry payloads up to two hundred kilograms to low earth orbit. ";

pub fn body(words_hint: usize) -> String {
    BODY.repeat(words_hint.div_ceil(25).max(1))
}

/// Site root without Organization structured data.
pub fn home_page() -> CrawlData {
    CrawlData {
        url: "https://acme-rockets.example/".into(),
        title: "Acme Rockets | Small satellite launch".into(),
        meta_description: Some("Launch services for small satellites.".into()),
        h1: vec!["Launch your satellite with Acme Rockets".into()],
        h2: vec!["Why Acme".into(), "Our vehicles".into()],
        text_content: body(400),
        json_ld: vec![json!({ "@context": "https://schema.org", "@type": "WebSite", "name": "Acme Rockets" })],
        signals: Signals {
            direct_answer_blocks: vec![],
            entity_mentions: vec!["Acme Rockets".into()],
        },
    }
}

pub fn faq_page() -> CrawlData {
    CrawlData {
        url: "https://acme-rockets.example/faq".into(),
        title: "FAQ - Acme Rockets".into(),
        meta_description: None,
        h1: vec!["Frequently asked questions?".into()],
        h2: vec!["How much does a launch cost?".into(), "How long is the wait?".into()],
        text_content: body(250),
        json_ld: vec![],
        signals: Signals::default(),
    }
}

pub fn pricing_page() -> CrawlData {
    CrawlData {
        url: "https://acme-rockets.example/pricing".into(),
        title: "Pricing: Acme Rockets".into(),
        meta_description: Some("Launch pricing for rideshare and dedicated missions at Acme Rockets, with transparent per-kilogram rates.".into()),
        h1: vec!["Pricing".into()],
        h2: vec![],
        text_content: body(600),
        json_ld: vec![],
        signals: Signals::default(),
    }
}

pub fn answered_page() -> CrawlData {
    CrawlData {
        url: "https://acme-rockets.example/blog/what-is-rideshare".into(),
        title: "What is a rideshare launch?".into(),
        meta_description: Some("A rideshare launch carries many small satellites on one rocket, sharing the cost between customers.".into()),
        h1: vec!["What is a rideshare launch?".into()],
        h2: vec!["Benefits".into()],
        text_content: body(800),
        json_ld: vec![json!({
            "@context": "https://schema.org",
            "@graph": [
                { "@type": "Organization", "name": "Acme Rockets" },
                { "@type": ["Article", "BlogPosting"], "headline": "What is a rideshare launch?" }
            ]
        })],
        signals: Signals {
            direct_answer_blocks: vec!["A rideshare launch carries several satellites on one rocket.".into()],
            entity_mentions: vec!["Acme Rockets".into(), "rideshare".into()],
        },
    }
}

pub fn site() -> Vec<CrawlData> {
    vec![home_page(), faq_page(), pricing_page(), answered_page()]
}

/// Many pages under one domain, enough to span a long report.
pub fn large_site(pages: usize) -> Vec<CrawlData> {
    (0..pages)
        .map(|i| CrawlData {
            url: format!("https://acme-rockets.example/missions/mission-{i}"),
            title: format!("Mission {i} | Acme Rockets"),
            h1: vec![format!("Mission {i}")],
            text_content: body(150),
            ..CrawlData::default()
        })
        .collect()
}

/// Overall 42 with every category at 42.
pub fn weak_score() -> GeoScore {
    GeoScore {
        overall_score: Score::from(42),
        tier: "Weak / Inconsistent".into(),
        section_scores: SectionScores::uniform(Score::from(42)),
        top_ai_hesitations: vec![
            "Unclear what the company does".into(),
            "No structured organization data".into(),
            "Few direct answers".into(),
            "Thin supporting content".into(),
        ],
        week1_fix_plan: vec!["Add Organization schema".into()],
        limitations: vec!["Only public pages were crawled".into()],
    }
}

/// Entity clarity is the only weak category.
pub fn entity_gap_score() -> GeoScore {
    GeoScore {
        overall_score: Score::from(68),
        tier: String::new(),
        section_scores: SectionScores {
            entity_clarity: Score::from(30),
            direct_answers: Score::from(80),
            trust_signals: Score::from(78),
            competitive_positioning: Score::from(90),
            technical_accessibility: Score::from(85),
        },
        ..GeoScore::default()
    }
}
