use super::theme::priority_color;
use geo_report_layout::{HeadingLevel, PageComposer, PageSink, TextStyle};
use geo_report_types::{FullReport, PageFix, PageRecommendation};

pub(super) fn write<S: PageSink>(c: &mut PageComposer<S>, report: &FullReport) -> Result<(), S::Error> {
    if report.page_analysis.is_empty() {
        log::debug!("No crawled pages; skipping page analysis");
        return Ok(());
    }
    c.heading("Page-by-Page Analysis", HeadingLevel::Part)?;
    for (i, page) in report.page_analysis.iter().enumerate() {
        if i > 0 {
            c.rule()?;
        }
        write_page(c, page)?;
    }
    c.gap();
    Ok(())
}

fn write_page<S: PageSink>(c: &mut PageComposer<S>, page: &PageRecommendation) -> Result<(), S::Error> {
    let muted = TextStyle::muted(c.config());
    let title = if page.title.trim().is_empty() { &page.url } else { &page.title };
    c.heading(title, HeadingLevel::Entry)?;
    c.paragraph(&page.url, muted)?;

    if !page.content_inventory.is_empty() {
        c.heading("Content Inventory", HeadingLevel::Caption)?;
        for item in &page.content_inventory {
            c.key_value_row(&format!("{} ({})", item.kind.label(), item.location), &item.text)?;
        }
        c.gap();
    }

    if page.recommendations.is_empty() {
        return c.paragraph("No fixes required for this page.", muted);
    }
    c.heading("Recommended Fixes", HeadingLevel::Caption)?;
    for fix in &page.recommendations {
        write_fix(c, fix)?;
    }
    Ok(())
}

fn write_fix<S: PageSink>(c: &mut PageComposer<S>, fix: &PageFix) -> Result<(), S::Error> {
    let body = TextStyle::body(c.config());
    let muted = TextStyle::muted(c.config());
    c.labeled_heading(
        &fix.issue,
        HeadingLevel::Entry,
        fix.priority.label(),
        priority_color(fix.priority),
    )?;
    c.paragraph(&fix.action, body)?;
    c.paragraph(
        &format!("Category: {}  |  Expected impact: +{} points", fix.category.key(), fix.expected_impact),
        muted,
    )?;
    c.code_block(&fix.code_snippet)
}
