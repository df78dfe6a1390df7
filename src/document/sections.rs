use super::theme::status_color;
use super::{captioned_list, captioned_paragraph};
use geo_report_layout::{HeadingLevel, PageComposer, PageSink, TextStyle};
use geo_report_types::{FullReport, Recommendation, ReportSection};

pub(super) fn write<S: PageSink>(c: &mut PageComposer<S>, report: &FullReport) -> Result<(), S::Error> {
    if report.sections.is_empty() {
        return Ok(());
    }
    c.heading("Section Breakdown", HeadingLevel::Part)?;
    for (i, section) in report.sections.iter().enumerate() {
        if i > 0 {
            c.rule()?;
        }
        write_section(c, section)?;
    }
    Ok(())
}

fn write_section<S: PageSink>(c: &mut PageComposer<S>, section: &ReportSection) -> Result<(), S::Error> {
    let muted = TextStyle::muted(c.config());
    c.labeled_heading(
        &section.title,
        HeadingLevel::Entry,
        section.status.label(),
        status_color(section.status),
    )?;
    c.paragraph(
        &format!("Score {}/100  |  Weight {}%", section.score, section.weight),
        muted,
    )?;

    captioned_paragraph(c, "What We Found", &section.findings.what_we_found)?;
    captioned_paragraph(c, "Why It Matters", &section.findings.why_it_matters)?;
    captioned_list(c, "Evidence", &section.findings.evidence)?;

    let recommendations: Vec<String> = section.recommendations.iter().map(describe).collect();
    captioned_list(c, "Recommendations", &recommendations)
}

fn describe(rec: &Recommendation) -> String {
    let mut line = format!(
        "{} (+{} points, effort: {})",
        rec.action,
        rec.expected_improvement,
        rec.effort_label()
    );
    if !rec.pages_affected.is_empty() {
        line.push_str(" Pages: ");
        line.push_str(&rec.pages_affected.join(", "));
    }
    line
}
