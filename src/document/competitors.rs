use super::captioned_list;
use super::theme::score_color;
use geo_report_layout::{HeadingLevel, PageComposer, PageSink, TextStyle};
use geo_report_types::FullReport;

pub(super) fn write<S: PageSink>(c: &mut PageComposer<S>, report: &FullReport) -> Result<(), S::Error> {
    if report.competitor_analysis.is_empty() {
        return Ok(());
    }
    let body = TextStyle::body(c.config());
    c.heading("Competitive Landscape", HeadingLevel::Part)?;
    for competitor in &report.competitor_analysis {
        c.labeled_heading(
            &competitor.domain,
            HeadingLevel::Entry,
            &format!("{}/100", competitor.score),
            score_color(competitor.score),
        )?;
        captioned_list(c, "Strengths", &competitor.strengths)?;
        c.paragraph(&competitor.gap_analysis, body)?;
    }
    c.rule()
}
