//! Walks a [`FullReport`] in reading order and lays it out through a [`PageComposer`].
//!
//! Each part of the report lives in its own module and writes directly into the
//! composer, so pages reach the sink as soon as they are full.

mod appendix;
mod chart;
mod competitors;
mod cover;
mod pages;
mod recommendations;
mod roadmap;
mod sections;
mod summary;
pub mod theme;

use geo_report_layout::{
    FontFace, HeadingLevel, PageComposer, PageSink, Primitive, RenderConfig, TextStyle,
    text_width,
};
use geo_report_render_core::DocumentInfo;
use geo_report_types::{Color, FullReport};
use std::sync::Arc;

pub const AUTHOR: &str = "GEO Report Generator";
const PRODUCER: &str = concat!("geo-report ", env!("CARGO_PKG_VERSION"), " (lopdf)");

/// Lays out the whole report and returns the sink together with the page count.
pub fn write_report<S: PageSink>(
    report: &FullReport,
    config: Arc<RenderConfig>,
    sink: S,
) -> Result<(S, usize), S::Error> {
    let mut c = PageComposer::new(config, report.domain.clone(), sink);

    cover::write(&mut c, report)?;
    c.new_page()?;
    summary::write(&mut c, report)?;
    sections::write(&mut c, report)?;
    pages::write(&mut c, report)?;
    recommendations::write_direct_answers(&mut c, report)?;
    recommendations::write_schema(&mut c, report)?;
    competitors::write(&mut c, report)?;
    roadmap::write(&mut c, report)?;
    chart::write(&mut c, report)?;
    appendix::write(&mut c, report)?;
    appendix::write_disclaimer(&mut c)?;

    let (sink, pages) = c.finish()?;
    log::debug!("Report {} laid out on {pages} pages", report.report_id);
    Ok((sink, pages))
}

/// Document metadata for the report.
pub fn document_info(report: &FullReport) -> DocumentInfo {
    DocumentInfo {
        title: format!("GEO Audit Report: {}", report.domain),
        author: AUTHOR.to_string(),
        subject: format!("AI citation readiness audit for {}", report.domain),
        creator: AUTHOR.to_string(),
        producer: PRODUCER.to_string(),
        creation_date: Some(report.generated_at.clone()),
        report_id: Some(report.report_id.clone()),
    }
}

/// Caption followed by a bullet list. Nothing at all is drawn for an empty list.
fn captioned_list<S: PageSink, T: AsRef<str>>(
    c: &mut PageComposer<S>,
    caption: &str,
    items: &[T],
) -> Result<(), S::Error> {
    if items.is_empty() {
        return Ok(());
    }
    let style = TextStyle::body(c.config());
    c.heading(caption, HeadingLevel::Caption)?;
    c.bullet_list(items, style)
}

/// Caption followed by a paragraph, skipped when the text is blank.
fn captioned_paragraph<S: PageSink>(
    c: &mut PageComposer<S>,
    caption: &str,
    text: &str,
) -> Result<(), S::Error> {
    if text.trim().is_empty() {
        return Ok(());
    }
    let style = TextStyle::body(c.config());
    c.heading(caption, HeadingLevel::Caption)?;
    c.paragraph(text, style)
}

/// A text primitive whose glyph box starts at `(x, y)`.
fn text_at(x: f32, y: f32, content: impl Into<String>, style: TextStyle) -> Primitive {
    Primitive::Text {
        x,
        y,
        size: style.size,
        face: style.face,
        color: style.color,
        content: content.into(),
    }
}

/// A text primitive horizontally centered on `cx`.
fn centered_text(cx: f32, y: f32, content: impl Into<String>, style: TextStyle) -> Primitive {
    let content = content.into();
    let width = text_width(&content, style.face, style.size);
    text_at(cx - width / 2.0, y, content, style)
}

fn bold(size: f32, color: Color) -> TextStyle {
    TextStyle::new(FontFace::Bold, size, color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_report_layout::PageTrace;
    use geo_report_synthesis::ReportSynthesizer;
    use geo_report_types::{CrawlData, GeoScore, Score, SectionScores, Signals};

    fn score(value: u8) -> GeoScore {
        GeoScore {
            overall_score: Score::from(value),
            tier: "Weak / Inconsistent".into(),
            section_scores: SectionScores::uniform(Score::from(value)),
            top_ai_hesitations: vec!["No clear entity definition".into()],
            ..GeoScore::default()
        }
    }

    fn page(url: &str, title: &str) -> CrawlData {
        CrawlData {
            url: url.into(),
            title: title.into(),
            h1: vec![title.into()],
            text_content: "Acme builds rockets for small payloads. ".repeat(20),
            signals: Signals::default(),
            ..CrawlData::default()
        }
    }

    fn layout(report: &FullReport) -> (PageTrace, usize) {
        let _ = env_logger::builder().is_test(true).try_init();
        match write_report(report, Arc::new(RenderConfig::default()), PageTrace::new()) {
            Ok(done) => done,
            Err(never) => match never {},
        }
    }

    fn report(crawl: &[CrawlData], value: u8) -> FullReport {
        ReportSynthesizer::new()
            .synthesize(crawl, &score(value), "acme.example")
            .unwrap()
    }

    #[test]
    fn trace_page_count_matches_composer() {
        let report = report(&[page("https://acme.example/", "Acme Rockets")], 42);
        let (trace, pages) = layout(&report);
        assert_eq!(trace.page_count(), pages);
        assert!(pages >= 5, "got {pages} pages");
    }

    #[test]
    fn cover_carries_score_and_category_grid() {
        let report = report(&[], 42);
        let (trace, _) = layout(&report);
        let cover = trace.page_text(0);
        assert!(cover.contains("AI Citation Readiness Report"));
        assert!(cover.contains("acme.example"));
        assert!(cover.contains("42"));
        assert!(cover.contains("Weak / Inconsistent"));
        assert!(cover.contains("Entity Clarity"));
        assert!(cover.contains("Technical Accessibility"));
        assert!(!cover.contains("Executive Summary"));
    }

    #[test]
    fn empty_page_analysis_skips_its_heading() {
        let report = report(&[], 42);
        let (trace, _) = layout(&report);
        assert!(trace.find_page("Page-by-Page Analysis").is_none());
        assert!(trace.find_page("Direct Answer Recommendations").is_none());
        assert!(trace.find_page("Executive Summary").is_some());
        assert!(trace.find_page("Technical Appendix").is_some());
    }

    #[test]
    fn chart_starts_its_own_page_and_disclaimer_is_last() {
        let report = report(&[page("https://acme.example/pricing", "Pricing")], 42);
        let (trace, pages) = layout(&report);
        let chart_page = trace.find_page("Score Projection").unwrap();
        assert!(trace.page_text(chart_page).contains("3 Months"));
        assert!(trace.find_page("Implementation Roadmap").unwrap() < chart_page);
        assert!(trace.page_text(pages - 1).contains("Disclaimer"));
    }

    #[test]
    fn sections_appear_in_reading_order() {
        let report = report(&[page("https://acme.example/about", "About Acme")], 42);
        let (trace, _) = layout(&report);
        let order = [
            "Executive Summary",
            "Section Breakdown",
            "Page-by-Page Analysis",
            "Structured Data Recommendations",
            "Competitive Landscape",
            "Implementation Roadmap",
            "Score Projection",
            "Technical Appendix",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|h| trace.find_page(h).unwrap_or_else(|| panic!("missing {h}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] <= w[1]), "{positions:?}");
    }

    #[test]
    fn appendix_labels_faq_count_as_structured_data() {
        let report = report(&[page("https://acme.example/faq", "FAQ")], 42);
        let (trace, _) = layout(&report);
        let appendix = trace.find_page("Crawl Statistics").unwrap();
        assert_eq!(trace.find_page("FAQ structured"), Some(appendix));
        assert!(trace.find_page("FAQ-style").is_none());
    }

    #[test]
    fn running_header_names_domain_on_later_pages() {
        let report = report(&[], 42);
        let (trace, _) = layout(&report);
        let second = trace.page_text(1);
        assert!(second.contains("acme.example"));
        assert!(second.contains("Page 2"));
    }

    #[test]
    fn document_info_describes_the_audit() {
        let report = report(&[], 42);
        let info = document_info(&report);
        assert_eq!(info.title, "GEO Audit Report: acme.example");
        assert_eq!(info.author, AUTHOR);
        assert_eq!(info.subject, "AI citation readiness audit for acme.example");
        assert_eq!(info.report_id.as_deref(), Some(report.report_id.as_str()));
        assert_eq!(info.creation_date.as_deref(), Some(report.generated_at.as_str()));
    }
}
