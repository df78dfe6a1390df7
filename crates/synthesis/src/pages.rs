//! Per-page content inventory and page-scoped fixes.

use crate::context::{excerpt, topic_from_title, PageContext, SiteContext};
use crate::rules::{apply_rules, Rule};
use geo_report_types::{
    FixCategory, InventoryItem, InventoryKind, PageFix, PageRecommendation, Priority,
    SnippetLanguage,
};
use itertools::Itertools;
use serde_json::json;

/// Maximum number of fixes kept for a single page.
pub const MAX_FIXES_PER_PAGE: usize = 5;
const MAX_H2_INVENTORY: usize = 6;
const EXCERPT_CHARS: usize = 160;
const THIN_CONTENT_WORDS: usize = 300;

/// Page-scoped rules, listed in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRule {
    MissingDirectAnswer,
    MissingOrganizationSchema,
    MissingFaqSchema,
    WeakMetaDescription,
    MissingH1,
    ThinContent,
}

impl PageRule {
    pub const ALL: [PageRule; 6] = [
        PageRule::MissingDirectAnswer,
        PageRule::MissingOrganizationSchema,
        PageRule::MissingFaqSchema,
        PageRule::WeakMetaDescription,
        PageRule::MissingH1,
        PageRule::ThinContent,
    ];
}

impl<'a> Rule<PageContext<'a>> for PageRule {
    type Output = PageFix;

    fn applies(&self, ctx: &PageContext<'a>) -> bool {
        let page = ctx.page;
        match self {
            PageRule::MissingDirectAnswer => {
                page.signals.direct_answer_blocks.is_empty()
                    && !page.has_question_h1()
                    && !ctx.is_root
            }
            PageRule::MissingOrganizationSchema => {
                ctx.is_root && !page.has_schema_type("Organization")
            }
            PageRule::MissingFaqSchema => page.is_faq_like() && !page.has_schema_type("FAQPage"),
            PageRule::WeakMetaDescription => page.meta_description_len() < 120,
            PageRule::MissingH1 => page.h1.iter().all(|h| h.trim().is_empty()),
            PageRule::ThinContent => !ctx.is_root && page.word_count() < THIN_CONTENT_WORDS,
        }
    }

    fn synthesize(&self, ctx: &PageContext<'a>) -> PageFix {
        let title = ctx.display_title();
        match self {
            PageRule::MissingDirectAnswer => {
                let topic = topic_or_fallback(title);
                PageFix {
                    category: FixCategory::DirectAnswers,
                    priority: Priority::High,
                    issue: "No direct answer block and no question-form H1".into(),
                    action: "Insert a 40-60 word direct answer directly below the H1".into(),
                    code_snippet: format!(
                        "<section class=\"direct-answer\">\n  <h2>What is {topic}?</h2>\n  <p>{topic} is [one-sentence definition]. [Who it is for]. [The key fact or benefit, stated plainly].</p>\n</section>"
                    ),
                    snippet_language: SnippetLanguage::Html,
                    expected_impact: 8,
                }
            }
            PageRule::MissingOrganizationSchema => {
                let payload = json!({
                    "@context": "https://schema.org",
                    "@type": "Organization",
                    "name": topic_or_fallback(title),
                    "url": ctx.origin,
                    "description": ctx.page.meta_description.clone().unwrap_or_default(),
                });
                PageFix {
                    category: FixCategory::Schema,
                    priority: Priority::Critical,
                    issue: "Homepage has no Organization structured data".into(),
                    action: "Add Organization JSON-LD to the homepage <head>".into(),
                    code_snippet: script_tag(&payload),
                    snippet_language: SnippetLanguage::Html,
                    expected_impact: 10,
                }
            }
            PageRule::MissingFaqSchema => {
                let questions: Vec<&str> = ctx
                    .page
                    .h2
                    .iter()
                    .chain(ctx.page.h1.iter())
                    .filter(|h| h.contains('?'))
                    .map(String::as_str)
                    .take(5)
                    .collect();
                PageFix {
                    category: FixCategory::Schema,
                    priority: Priority::Critical,
                    issue: "FAQ page without FAQPage structured data".into(),
                    action: "Add FAQPage JSON-LD listing each question and its answer".into(),
                    code_snippet: script_tag(&faq_payload(&questions)),
                    snippet_language: SnippetLanguage::Html,
                    expected_impact: 8,
                }
            }
            PageRule::WeakMetaDescription => {
                let issue = match ctx.page.meta_description_len() {
                    0 => "Meta description is missing".to_string(),
                    n => format!("Meta description is only {n} characters"),
                };
                let description = compose_meta_description(title, &ctx.origin, &ctx.page.text_content);
                PageFix {
                    category: FixCategory::Meta,
                    priority: Priority::Medium,
                    issue,
                    action: "Replace the meta description with a 120-160 character summary".into(),
                    code_snippet: format!("<meta name=\"description\" content=\"{}\">", escape_attr(&description)),
                    snippet_language: SnippetLanguage::Html,
                    expected_impact: 3,
                }
            }
            PageRule::MissingH1 => PageFix {
                category: FixCategory::Structure,
                priority: Priority::High,
                issue: "Page has no H1 heading".into(),
                action: "Add a single descriptive H1 that names the page topic".into(),
                code_snippet: format!("<h1>{}</h1>", topic_or_fallback(title)),
                snippet_language: SnippetLanguage::Html,
                expected_impact: 4,
            },
            PageRule::ThinContent => PageFix {
                category: FixCategory::Content,
                priority: Priority::Low,
                issue: format!("Only {} words of body text", ctx.page.word_count()),
                action: format!("Expand the page to at least {THIN_CONTENT_WORDS} words of substantive content"),
                code_snippet: "Outline: definition, who it is for, how it works, key facts with sources, related questions.".into(),
                snippet_language: SnippetLanguage::Text,
                expected_impact: 3,
            },
        }
    }
}

/// Orders fixes by priority (stable, so equal priorities keep rule order) and keeps the top five.
pub fn rank_and_truncate(fixes: Vec<PageFix>) -> Vec<PageFix> {
    let total = fixes.len();
    let kept: Vec<PageFix> = fixes
        .into_iter()
        .sorted_by_key(|f| f.priority.rank())
        .take(MAX_FIXES_PER_PAGE)
        .collect();
    if total > kept.len() {
        log::debug!("Dropped {} lower-priority page fixes", total - kept.len());
    }
    kept
}

pub fn analyze_page(ctx: &PageContext<'_>) -> PageRecommendation {
    let fixes = apply_rules(&PageRule::ALL, ctx);
    log::debug!("{}: {} page rules triggered", ctx.url(), fixes.len());
    PageRecommendation {
        url: ctx.page.url.clone(),
        title: ctx.display_title().to_string(),
        content_inventory: content_inventory(ctx),
        recommendations: rank_and_truncate(fixes),
    }
}

pub fn analyze_pages(site: &SiteContext<'_>) -> Vec<PageRecommendation> {
    site.pages.iter().map(analyze_page).collect()
}

fn content_inventory(ctx: &PageContext<'_>) -> Vec<InventoryItem> {
    let page = ctx.page;
    let item = |kind, text: &str, location: String| InventoryItem {
        kind,
        text: excerpt(text, EXCERPT_CHARS),
        location,
    };

    let mut items = Vec::new();
    if !page.title.trim().is_empty() {
        items.push(item(InventoryKind::Title, &page.title, "<title>".into()));
    }
    if let Some(meta) = page.meta_description.as_deref().filter(|m| !m.trim().is_empty()) {
        items.push(item(InventoryKind::MetaDescription, meta, "<meta name=\"description\">".into()));
    }
    for (i, h) in page.h1.iter().enumerate() {
        items.push(item(InventoryKind::H1, h, format!("<h1> #{}", i + 1)));
    }
    for (i, h) in page.h2.iter().take(MAX_H2_INVENTORY).enumerate() {
        items.push(item(InventoryKind::H2, h, format!("<h2> #{}", i + 1)));
    }
    for (i, block) in page.signals.direct_answer_blocks.iter().enumerate() {
        items.push(item(
            InventoryKind::DirectAnswer,
            block,
            format!("direct-answer block #{}", i + 1),
        ));
    }
    items
}

fn topic_or_fallback(title: &str) -> String {
    let topic = topic_from_title(title);
    if topic.is_empty() { "this page".to_string() } else { topic }
}

pub(crate) fn script_tag(payload: &serde_json::Value) -> String {
    let body = serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string());
    format!("<script type=\"application/ld+json\">\n{body}\n</script>")
}

pub(crate) fn faq_payload(questions: &[&str]) -> serde_json::Value {
    let questions: Vec<&str> = if questions.is_empty() {
        vec!["[Your first customer question]?", "[Your second customer question]?"]
    } else {
        questions.to_vec()
    };
    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": questions.iter().map(|q| json!({
            "@type": "Question",
            "name": q,
            "acceptedAnswer": { "@type": "Answer", "text": "[40-60 word answer]" }
        })).collect::<Vec<_>>(),
    })
}

/// A meta description between 120 and 160 characters built from the page's own text.
pub fn compose_meta_description(title: &str, origin: &str, text: &str) -> String {
    const MIN: usize = 120;
    const MAX: usize = 160;
    let site = origin
        .trim_start_matches("https://")
        .trim_start_matches("http://");
    let topic = topic_or_fallback(title);
    let lead = text
        .split_terminator(['.', '!', '?'])
        .map(str::trim)
        .find(|s| s.split_whitespace().count() >= 5)
        .map(|s| format!("{s}."));

    let mut parts = vec![format!("{topic} from {site}.")];
    parts.extend(lead);
    parts.push(format!("Learn what {topic} is, who it is for, and how to get started."));
    parts.push("Clear answers, key facts and next steps in one place.".to_string());

    let mut out = String::new();
    for part in parts {
        if out.chars().count() >= MIN {
            break;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&part);
    }
    if out.chars().count() > MAX {
        out = excerpt(&out, MAX);
    }
    out
}

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;").replace('"', "&quot;")
}
