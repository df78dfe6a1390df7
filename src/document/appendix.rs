use super::captioned_list;
use geo_report_layout::{HeadingLevel, PageComposer, PageSink, TextStyle};
use geo_report_types::FullReport;

const DISCLAIMER: [&str; 4] = [
    "This report estimates how readily AI assistants and answer engines can identify, trust and cite the audited site. Scores are model-based estimates derived from a sample of crawled pages and are not a guarantee of inclusion in any AI-generated answer.",
    "AI systems change their retrieval and ranking behaviour frequently and without notice. Projected scores assume the recommended changes are implemented as described and that the wider search landscape stays comparable.",
    "Code snippets and structured data payloads are starting points. Review them for accuracy against your business details and validate them with the relevant testing tools before publishing.",
    "Competitor figures are indicative benchmarks. They are not endorsements and do not reflect a full audit of the named sites.",
];

pub(super) fn write<S: PageSink>(c: &mut PageComposer<S>, report: &FullReport) -> Result<(), S::Error> {
    let appendix = &report.technical_appendix;
    c.heading("Technical Appendix", HeadingLevel::Part)?;
    c.heading("Crawl Statistics", HeadingLevel::Caption)?;
    for (key, value) in [
        ("Pages crawled", appendix.pages_crawled),
        ("Words analyzed", appendix.words_analyzed),
        ("Structured data blocks", appendix.schema_blocks_found),
        ("FAQ structured data blocks", appendix.faq_blocks_found),
        ("Entity mentions", appendix.entity_mentions_found),
    ] {
        c.key_value_row(key, &value.to_string())?;
    }
    c.gap();

    captioned_list(c, "Methodology", &appendix.methodology)?;
    captioned_list(c, "Limitations", &appendix.limitations)?;

    c.heading("Report Details", HeadingLevel::Caption)?;
    c.key_value_row("Report ID", &report.report_id)?;
    c.key_value_row("Generated", &report.generated_at)?;
    c.key_value_row("Format version", &report.schema_version)?;
    c.gap();
    Ok(())
}

/// Fixed closing page.
pub(super) fn write_disclaimer<S: PageSink>(c: &mut PageComposer<S>) -> Result<(), S::Error> {
    let muted = TextStyle::muted(c.config());
    c.new_page()?;
    c.heading("Disclaimer", HeadingLevel::Part)?;
    for paragraph in DISCLAIMER {
        c.paragraph(paragraph, muted)?;
    }
    Ok(())
}
