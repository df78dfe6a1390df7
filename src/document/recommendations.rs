//! Direct-answer rewrites and structured data payloads.

use super::theme::priority_color;
use geo_report_layout::{HeadingLevel, PageComposer, PageSink, TextStyle};
use geo_report_types::{FullReport, SchemaRecommendation, SchemaState};

pub(super) fn write_direct_answers<S: PageSink>(
    c: &mut PageComposer<S>,
    report: &FullReport,
) -> Result<(), S::Error> {
    if report.direct_answer_recommendations.is_empty() {
        return Ok(());
    }
    let body = TextStyle::body(c.config());
    let muted = TextStyle::muted(c.config());
    c.heading("Direct Answer Recommendations", HeadingLevel::Part)?;
    for rec in &report.direct_answer_recommendations {
        c.heading(&rec.page_title, HeadingLevel::Entry)?;
        let current = if rec.has_direct_answer {
            "has a direct answer"
        } else {
            "no direct answer yet"
        };
        c.paragraph(
            &format!("{}  |  {current}  |  {} words on page", rec.url, rec.current_word_count),
            muted,
        )?;
        c.key_value_row("Suggested heading", &rec.suggested_heading)?;
        c.gap();
        c.heading("Suggested Answer", HeadingLevel::Caption)?;
        c.paragraph(&rec.suggested_answer, body)?;
        c.code_block(&rec.markup)?;
    }
    Ok(())
}

pub(super) fn write_schema<S: PageSink>(
    c: &mut PageComposer<S>,
    report: &FullReport,
) -> Result<(), S::Error> {
    if report.schema_recommendations.is_empty() {
        return Ok(());
    }
    c.heading("Structured Data Recommendations", HeadingLevel::Part)?;
    for rec in &report.schema_recommendations {
        write_schema_entry(c, rec)?;
    }
    Ok(())
}

fn write_schema_entry<S: PageSink>(
    c: &mut PageComposer<S>,
    rec: &SchemaRecommendation,
) -> Result<(), S::Error> {
    c.labeled_heading(
        &rec.schema_type,
        HeadingLevel::Entry,
        rec.priority.label(),
        priority_color(rec.priority),
    )?;
    c.key_value_row("Current state", &current_state(rec))?;
    c.key_value_row("Placement", &rec.placement)?;
    c.key_value_row("Estimated impact", &format!("+{} points", rec.estimated_impact))?;
    c.gap();
    c.code_block(&rec.payload)
}

fn current_state(rec: &SchemaRecommendation) -> String {
    match (rec.current_state, rec.detected_on.len()) {
        (SchemaState::Missing, _) | (SchemaState::Present, 0) => "Missing".to_string(),
        (SchemaState::Present, 1) => format!("Present on {}", rec.detected_on[0]),
        (SchemaState::Present, n) => format!("Present on {n} pages"),
    }
}
