//! Read-only views over the crawl used by every generator.

use crate::error::SynthesisError;
use geo_report_types::CrawlData;
use url::Url;

/// A crawled page together with facts derived from its URL.
#[derive(Debug, Clone)]
pub struct PageContext<'a> {
    pub page: &'a CrawlData,
    pub path: String,
    pub origin: String,
    pub is_root: bool,
}

impl<'a> PageContext<'a> {
    pub fn new(page: &'a CrawlData) -> Result<Self, SynthesisError> {
        let parsed = Url::parse(page.url.trim()).map_err(|source| SynthesisError::InvalidUrl {
            url: page.url.clone(),
            source,
        })?;
        let path = parsed.path().to_string();
        Ok(Self {
            page,
            is_root: path.is_empty() || path == "/",
            origin: parsed.origin().ascii_serialization(),
            path,
        })
    }

    /// The page title, or its path when the title is blank.
    pub fn display_title(&self) -> &str {
        let title = self.page.title.trim();
        if title.is_empty() { &self.path } else { title }
    }

    pub fn url(&self) -> &str {
        &self.page.url
    }
}

/// The whole crawl for one domain.
#[derive(Debug, Clone)]
pub struct SiteContext<'a> {
    pub domain: &'a str,
    pub pages: Vec<PageContext<'a>>,
}

impl<'a> SiteContext<'a> {
    pub fn new(domain: &'a str, crawl: &'a [CrawlData]) -> Result<Self, SynthesisError> {
        let pages = crawl
            .iter()
            .map(PageContext::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { domain, pages })
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn root(&self) -> Option<&PageContext<'a>> {
        self.pages.iter().find(|p| p.is_root)
    }

    pub fn urls_where(&self, predicate: impl Fn(&PageContext<'a>) -> bool) -> Vec<String> {
        self.pages
            .iter()
            .filter(|p| predicate(p))
            .map(|p| p.page.url.clone())
            .collect()
    }

    pub fn count_where(&self, predicate: impl Fn(&PageContext<'a>) -> bool) -> usize {
        self.pages.iter().filter(|p| predicate(p)).count()
    }

    pub fn entity_mentions(&self) -> usize {
        self.pages
            .iter()
            .map(|p| p.page.signals.entity_mentions.len())
            .sum()
    }

    pub fn direct_answer_blocks(&self) -> usize {
        self.pages
            .iter()
            .map(|p| p.page.signals.direct_answer_blocks.len())
            .sum()
    }

    pub fn schema_blocks(&self) -> usize {
        self.pages.iter().map(|p| p.page.json_ld.len()).sum()
    }

    pub fn words(&self) -> usize {
        self.pages.iter().map(|p| p.page.word_count()).sum()
    }

    pub fn has_schema_type(&self, schema_type: &str) -> bool {
        self.pages.iter().any(|p| p.page.has_schema_type(schema_type))
    }

    pub fn schema_type_count(&self, schema_type: &str) -> usize {
        self.pages
            .iter()
            .map(|p| {
                p.page
                    .schema_types()
                    .iter()
                    .filter(|t| t.eq_ignore_ascii_case(schema_type))
                    .count()
            })
            .sum()
    }

    pub fn has_faq_page(&self) -> bool {
        self.pages.iter().any(|p| p.page.is_faq_like())
    }

    /// Headings across all pages phrased as questions.
    pub fn question_headings(&self) -> Vec<&'a str> {
        self.pages
            .iter()
            .flat_map(|p| p.page.h1.iter().chain(p.page.h2.iter()))
            .filter(|h| h.contains('?'))
            .map(String::as_str)
            .collect()
    }

    /// The organization's display name: the root page's title topic, else the bare domain.
    pub fn organization_name(&self) -> String {
        self.root()
            .map(|root| topic_from_title(&root.page.title))
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| name_from_domain(self.domain))
    }

    pub fn site_url(&self) -> String {
        self.root()
            .map(|r| r.origin.clone())
            .unwrap_or_else(|| format!("https://{}", self.domain.trim_end_matches('/')))
    }
}

/// The leading part of a title before the first separator (`|`, ` - `, `:`).
pub fn topic_from_title(title: &str) -> String {
    let title = title.trim();
    let cut = ["|", " - ", " \u{2013} ", " \u{2014} ", ":"]
        .iter()
        .filter_map(|sep| title.find(sep))
        .min()
        .unwrap_or(title.len());
    title[..cut].trim().to_string()
}

fn name_from_domain(domain: &str) -> String {
    let host = domain
        .trim()
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_start_matches("www.");
    let label = host.split(['.', '/']).next().unwrap_or(host);
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => domain.to_string(),
    }
}

/// Shortens text to at most `max_chars` characters, cutting at a word boundary.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if text.chars().count() <= max_chars {
        return text;
    }
    let mut out = String::new();
    for word in text.split(' ') {
        if out.chars().count() + word.chars().count() + 1 > max_chars.saturating_sub(3) {
            break;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out.push_str("...");
    out
}
