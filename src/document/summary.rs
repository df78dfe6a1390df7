use super::theme;
use super::{captioned_list, captioned_paragraph};
use geo_report_layout::{HeadingLevel, PageComposer, PageSink, TextStyle};
use geo_report_types::FullReport;

pub(super) fn write<S: PageSink>(c: &mut PageComposer<S>, report: &FullReport) -> Result<(), S::Error> {
    let summary = &report.executive_summary;
    let body = TextStyle::body(c.config());
    c.heading("Executive Summary", HeadingLevel::Part)?;
    c.key_value_row(
        "Overall score",
        &format!("{} / 100 ({})", summary.score, summary.tier),
    )?;
    c.gap();
    c.paragraph(&summary.synthesis, body)?;

    let findings: Vec<String> = summary
        .key_findings
        .iter()
        .map(|f| format!("{} ({}/100, {}): {}", f.category.title(), f.score, f.status.label(), f.finding))
        .collect();
    captioned_list(c, "Key Findings", &findings)?;

    let obstacle = &summary.primary_obstacle;
    let color = theme::score_color(obstacle.score);
    c.labeled_heading(
        &format!("Primary Obstacle: {}", obstacle.title),
        HeadingLevel::Entry,
        &format!("{}/100", obstacle.score),
        color,
    )?;
    c.paragraph(&obstacle.narrative, body)?;

    captioned_list(c, "Quick Wins", &summary.quick_wins)?;
    captioned_list(c, "Top AI Hesitations", &summary.top_hesitations)?;
    captioned_paragraph(c, "What This Tier Means", tier_note(summary.score.value()))?;
    c.rule()
}

fn tier_note(score: u8) -> &'static str {
    match score {
        85..=100 => "AI systems can identify, trust and quote this site with little ambiguity.",
        70..=84 => "The fundamentals are in place. Targeted fixes will make citations more consistent.",
        55..=69 => "AI systems see the site but often prefer clearer sources for the same questions.",
        40..=54 => "Citations are occasional and inconsistent. Core signals need work before content scales.",
        _ => "AI systems currently struggle to recognise or quote this site.",
    }
}
