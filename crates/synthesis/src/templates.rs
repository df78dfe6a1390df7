//! Narrative, evidence and recommendation table for the five scored categories.
//!
//! Each category has three bundles keyed by [`ScoreBand`]. Adding a bundle or a category is a
//! change to [`CATEGORY_TABLE`], not to the generator code. Expected improvements shrink as
//! the band rises: a weak category has large cheap wins left, a strong one only polish.

use crate::context::{PageContext, SiteContext};
use crate::rules::Rule;
use geo_report_types::{Category, Recommendation, Score};
use itertools::Itertools;

/// Score range selecting a narrative bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    /// Below 50.
    Low,
    /// 50 to 74.
    Mid,
    /// 75 and above.
    High,
}

impl ScoreBand {
    pub fn of(score: Score) -> Self {
        match score.value() {
            0..=49 => ScoreBand::Low,
            50..=74 => ScoreBand::Mid,
            _ => ScoreBand::High,
        }
    }
}

/// A fact about the crawl rendered as one evidence string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvidenceRule {
    EntityMentions,
    OrganizationSchema,
    StructuredDataCoverage,
    DirectAnswerBlocks,
    QuestionHeadings,
    FaqPages,
    TrustPages,
    ComparisonPages,
    PagesCrawled,
    MetaDescriptionCoverage,
    H1Coverage,
    WordsAnalyzed,
}

impl EvidenceRule {
    pub fn evaluate(self, site: &SiteContext<'_>) -> String {
        let pages = site.page_count();
        match self {
            EvidenceRule::EntityMentions => format!(
                "{} entity mentions detected across {} crawled pages",
                site.entity_mentions(),
                pages
            ),
            EvidenceRule::OrganizationSchema => {
                let found = site.urls_where(|p| p.page.has_schema_type("Organization"));
                if found.is_empty() {
                    "No Organization structured data found on any crawled page".to_string()
                } else {
                    format!("Organization structured data found on {}", found.iter().join(", "))
                }
            }
            EvidenceRule::StructuredDataCoverage => {
                if pages == 0 {
                    "No pages were crawled, so structured data could not be verified".to_string()
                } else {
                    format!(
                        "{} of {} pages carry at least one structured-data block",
                        site.count_where(|p| !p.page.json_ld.is_empty()),
                        pages
                    )
                }
            }
            EvidenceRule::DirectAnswerBlocks => format!(
                "{} direct-answer blocks found; {} of {} pages have none",
                site.direct_answer_blocks(),
                site.count_where(|p| p.page.signals.direct_answer_blocks.is_empty()),
                pages
            ),
            EvidenceRule::QuestionHeadings => format!(
                "{} headings are phrased as questions",
                site.question_headings().len()
            ),
            EvidenceRule::FaqPages => {
                let faq = site.urls_where(|p| p.page.is_faq_like());
                if faq.is_empty() {
                    "No page with \"faq\" in its URL or title was found".to_string()
                } else {
                    format!("FAQ-style pages found: {}", faq.iter().join(", "))
                }
            }
            EvidenceRule::TrustPages => {
                let trust = site.urls_where(is_trust_page);
                if trust.is_empty() {
                    "No about, team or contact page was found in the crawl".to_string()
                } else {
                    format!("Trust pages found: {}", trust.iter().join(", "))
                }
            }
            EvidenceRule::ComparisonPages => format!(
                "{} comparison or alternatives pages found",
                site.count_where(is_comparison_page)
            ),
            EvidenceRule::PagesCrawled => format!("{} pages crawled", pages),
            EvidenceRule::MetaDescriptionCoverage => format!(
                "{} of {} pages have a meta description of 120 characters or more",
                site.count_where(|p| p.page.meta_description_len() >= 120),
                pages
            ),
            EvidenceRule::H1Coverage => format!(
                "{} of {} pages have an H1 heading",
                site.count_where(|p| !p.page.h1.is_empty()),
                pages
            ),
            EvidenceRule::WordsAnalyzed => format!("{} words of page text analyzed", site.words()),
        }
    }
}

fn is_trust_page(page: &PageContext<'_>) -> bool {
    let path = page.path.to_ascii_lowercase();
    ["about", "team", "contact", "company"]
        .iter()
        .any(|k| path.contains(k))
}

fn is_comparison_page(page: &PageContext<'_>) -> bool {
    let path = page.path.to_ascii_lowercase();
    ["-vs-", "/vs", "compare", "alternative"]
        .iter()
        .any(|k| path.contains(k))
}

/// Extra condition a section rule can require before it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Always,
    NoOrganizationSchema,
    NoFaqPage,
}

/// Which crawled pages a recommendation lists as affected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageScope {
    None,
    Root,
    All,
    WithoutDirectAnswer,
    WithDirectAnswer,
    FaqPages,
    MissingMeta,
    MissingH1,
}

impl PageScope {
    fn select(self, site: &SiteContext<'_>) -> Vec<String> {
        match self {
            PageScope::None => Vec::new(),
            PageScope::Root => site.urls_where(|p| p.is_root),
            PageScope::All => site.urls_where(|_| true),
            PageScope::WithoutDirectAnswer => {
                site.urls_where(|p| p.page.signals.direct_answer_blocks.is_empty())
            }
            PageScope::WithDirectAnswer => {
                site.urls_where(|p| !p.page.signals.direct_answer_blocks.is_empty())
            }
            PageScope::FaqPages => site.urls_where(|p| p.page.is_faq_like()),
            PageScope::MissingMeta => site.urls_where(|p| p.page.meta_description_len() < 120),
            PageScope::MissingH1 => site.urls_where(|p| p.page.h1.is_empty()),
        }
    }
}

/// A section-scoped recommendation row of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionRule {
    pub action: &'static str,
    pub expected_improvement: u32,
    pub effort_level: u8,
    pub gate: Gate,
    pub pages: PageScope,
}

/// Section rules look at the whole crawled site.
impl<'a> Rule<SiteContext<'a>> for SectionRule {
    type Output = Recommendation;

    fn applies(&self, site: &SiteContext<'a>) -> bool {
        match self.gate {
            Gate::Always => true,
            Gate::NoOrganizationSchema => !site.has_schema_type("Organization"),
            Gate::NoFaqPage => !site.has_faq_page(),
        }
    }

    fn synthesize(&self, site: &SiteContext<'a>) -> Recommendation {
        Recommendation {
            action: self.action.to_string(),
            expected_improvement: self.expected_improvement,
            effort_level: self.effort_level,
            pages_affected: self.pages.select(site),
        }
    }
}

#[derive(Debug)]
pub struct Template {
    pub what_we_found: &'static str,
    pub evidence: &'static [EvidenceRule],
    pub recommendations: &'static [SectionRule],
}

#[derive(Debug)]
pub struct CategoryProfile {
    pub category: Category,
    pub why_it_matters: &'static str,
    /// Sentence reused verbatim when this category is the primary obstacle.
    pub failure_narrative: &'static str,
    pub low: Template,
    pub mid: Template,
    pub high: Template,
}

impl CategoryProfile {
    pub fn template(&self, band: ScoreBand) -> &Template {
        match band {
            ScoreBand::Low => &self.low,
            ScoreBand::Mid => &self.mid,
            ScoreBand::High => &self.high,
        }
    }
}

pub fn profile(category: Category) -> &'static CategoryProfile {
    match category {
        Category::EntityClarity => &CATEGORY_TABLE[0],
        Category::DirectAnswers => &CATEGORY_TABLE[1],
        Category::TrustSignals => &CATEGORY_TABLE[2],
        Category::CompetitivePositioning => &CATEGORY_TABLE[3],
        Category::TechnicalAccessibility => &CATEGORY_TABLE[4],
    }
}

const fn rule(
    action: &'static str,
    expected_improvement: u32,
    effort_level: u8,
    gate: Gate,
    pages: PageScope,
) -> SectionRule {
    SectionRule {
        action,
        expected_improvement,
        effort_level,
        gate,
        pages,
    }
}

use EvidenceRule as E;
use Gate::*;
use PageScope as P;

pub static CATEGORY_TABLE: [CategoryProfile; 5] = [
    CategoryProfile {
        category: Category::EntityClarity,
        why_it_matters: "AI answer engines only cite sources they can identify with confidence. When the organization, its offerings and its relationships are ambiguous, the engine cites a clearer competitor instead.",
        failure_narrative: "AI systems cannot reliably tell who you are or what you offer, so they avoid citing the site.",
        low: Template {
            what_we_found: "The site does not clearly establish who the organization is. Names, offerings and relationships are inconsistent or missing from machine-readable markup.",
            evidence: &[E::EntityMentions, E::OrganizationSchema, E::StructuredDataCoverage],
            recommendations: &[
                rule("Add Organization structured data to the homepage", 10, 2, NoOrganizationSchema, P::Root),
                rule("Write a short 'who we are' paragraph on the homepage naming the organization, its category and its audience", 8, 2, Always, P::Root),
                rule("Use exactly the same organization name in titles, headings and the footer", 6, 1, Always, P::All),
                rule("Link official profiles through sameAs in the Organization markup", 4, 1, Always, P::Root),
            ],
        },
        mid: Template {
            what_we_found: "The organization is identifiable, but its offerings and relationships are only partly described in a form machines can parse.",
            evidence: &[E::EntityMentions, E::OrganizationSchema, E::StructuredDataCoverage],
            recommendations: &[
                rule("Extend the Organization markup with sameAs, logo and contactPoint", 5, 2, Always, P::Root),
                rule("Describe each core product or service on its own page under a consistent name", 4, 3, Always, P::None),
                rule("Link product and service pages back to the organization entity", 3, 2, Always, P::All),
            ],
        },
        high: Template {
            what_we_found: "Entity signals are strong: the organization and its offerings are named and described consistently.",
            evidence: &[E::EntityMentions, E::OrganizationSchema],
            recommendations: &[
                rule("Add Product or Service markup for flagship offerings", 2, 3, Always, P::None),
                rule("Review entity naming each quarter for drift", 1, 1, Always, P::None),
            ],
        },
    },
    CategoryProfile {
        category: Category::DirectAnswers,
        why_it_matters: "Answer engines extract short, self-contained passages. Pages that bury the answer inside long paragraphs are skipped in favour of pages that state it plainly.",
        failure_narrative: "Your pages rarely state answers in a short, extractable form, so AI engines have nothing to quote.",
        low: Template {
            what_we_found: "Few pages offer concise, self-contained answers. Key questions are answered deep inside long paragraphs, if at all.",
            evidence: &[E::DirectAnswerBlocks, E::QuestionHeadings, E::FaqPages],
            recommendations: &[
                rule("Add a 40-60 word direct answer block below the H1 of every key page", 10, 2, Always, P::WithoutDirectAnswer),
                rule("Rewrite H1 and H2 headings as the questions customers actually ask", 7, 2, Always, P::All),
                rule("Create an FAQ page covering the ten most common customer questions", 6, 3, NoFaqPage, P::None),
            ],
        },
        mid: Template {
            what_we_found: "Some pages contain extractable answers, but coverage is uneven and many answers run longer than engines prefer.",
            evidence: &[E::DirectAnswerBlocks, E::QuestionHeadings, E::FaqPages],
            recommendations: &[
                rule("Tighten existing answers to 40-60 words with the key fact first", 5, 2, Always, P::WithDirectAnswer),
                rule("Add direct answers to the pages that still lack them", 4, 2, Always, P::WithoutDirectAnswer),
                rule("Mark up question-and-answer content with FAQPage structured data", 3, 2, Always, P::FaqPages),
            ],
        },
        high: Template {
            what_we_found: "Direct answers are present and well formed on most pages.",
            evidence: &[E::DirectAnswerBlocks, E::QuestionHeadings],
            recommendations: &[
                rule("Test answers against real AI queries and refine the wording", 2, 2, Always, P::None),
                rule("Add answers for long-tail questions", 1, 3, Always, P::None),
            ],
        },
    },
    CategoryProfile {
        category: Category::TrustSignals,
        why_it_matters: "Engines weigh authorship, sourcing and organizational transparency when deciding whether a passage is safe to cite.",
        failure_narrative: "The site gives AI engines little evidence that its claims can be trusted.",
        low: Template {
            what_we_found: "Trust signals are thin: authorship, sources and company details are missing or hard to find.",
            evidence: &[E::TrustPages, E::PagesCrawled],
            recommendations: &[
                rule("Publish an About page with team, history and credentials", 8, 2, Always, P::None),
                rule("Add author names and short bios to articles", 6, 2, Always, P::All),
                rule("Cite sources and data for factual claims", 5, 3, Always, P::All),
            ],
        },
        mid: Template {
            what_we_found: "Basic trust signals exist, but authorship and sourcing are inconsistent across pages.",
            evidence: &[E::TrustPages, E::PagesCrawled],
            recommendations: &[
                rule("Add author bylines backed by Person markup", 4, 2, Always, P::All),
                rule("Show contact details and a physical address in the footer", 3, 1, Always, P::All),
                rule("Date every article and keep the dates current", 2, 1, Always, P::All),
            ],
        },
        high: Template {
            what_we_found: "Trust signals are strong: authorship, sourcing and company details are clear.",
            evidence: &[E::TrustPages],
            recommendations: &[
                rule("Add third-party reviews or certifications", 2, 3, Always, P::None),
                rule("Refresh outdated statistics", 1, 2, Always, P::None),
            ],
        },
    },
    CategoryProfile {
        category: Category::CompetitivePositioning,
        why_it_matters: "When several sources answer the same question, engines favour the one that states clearly what sets it apart.",
        failure_narrative: "Nothing on the site explains why it is a better answer than its competitors.",
        low: Template {
            what_we_found: "Differentiation is unclear; the site never says how it compares with the alternatives.",
            evidence: &[E::ComparisonPages, E::PagesCrawled],
            recommendations: &[
                rule("Publish a comparison page against the main alternatives", 6, 3, Always, P::None),
                rule("State the unique value proposition in the first paragraph of the homepage", 5, 2, Always, P::Root),
            ],
        },
        mid: Template {
            what_we_found: "Positioning exists but is implicit; comparisons and proof points are scattered.",
            evidence: &[E::ComparisonPages, E::PagesCrawled],
            recommendations: &[
                rule("Add concrete proof points such as numbers, customers and results to key pages", 3, 2, Always, P::All),
                rule("Consolidate comparison content into a single page", 2, 2, Always, P::None),
            ],
        },
        high: Template {
            what_we_found: "Positioning is clear and well supported.",
            evidence: &[E::ComparisonPages],
            recommendations: &[rule("Track how answer engines describe you against competitors", 1, 2, Always, P::None)],
        },
    },
    CategoryProfile {
        category: Category::TechnicalAccessibility,
        why_it_matters: "Content that crawlers cannot fetch, parse or understand is invisible to answer engines, however good it is.",
        failure_narrative: "Technical gaps keep AI crawlers from reading the content reliably.",
        low: Template {
            what_we_found: "Crawlers struggle with the site: metadata is missing and the page structure is hard to parse.",
            evidence: &[E::MetaDescriptionCoverage, E::H1Coverage, E::WordsAnalyzed],
            recommendations: &[
                rule("Write a unique meta description of 120-160 characters for every page", 5, 1, Always, P::MissingMeta),
                rule("Give every page exactly one descriptive H1", 4, 1, Always, P::MissingH1),
                rule("Allow AI crawlers such as GPTBot, ClaudeBot and PerplexityBot in robots.txt", 4, 1, Always, P::None),
            ],
        },
        mid: Template {
            what_we_found: "The site is crawlable, but metadata and heading structure have gaps.",
            evidence: &[E::MetaDescriptionCoverage, E::H1Coverage],
            recommendations: &[
                rule("Fill in missing or short meta descriptions", 3, 1, Always, P::MissingMeta),
                rule("Fix pages without an H1", 2, 1, Always, P::MissingH1),
            ],
        },
        high: Template {
            what_we_found: "Technical foundations are solid.",
            evidence: &[E::MetaDescriptionCoverage, E::H1Coverage],
            recommendations: &[rule("Monitor crawl errors and page speed every month", 1, 1, Always, P::None)],
        },
    },
];
