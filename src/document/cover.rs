//! Title page: score gauge, tier and the per-category grid.

use super::theme::{self, PANEL, PANEL_BORDER};
use super::{bold, centered_text, text_at};
use geo_report_layout::text::clip_to_width;
use geo_report_layout::{PageComposer, PageSink, Primitive, Rect, TextStyle};
use geo_report_types::{Category, Color, FullReport, Status};

const TITLE: &str = "AI Citation Readiness Report";
const GAUGE_RADIUS: f32 = 62.0;
const MIN_GAUGE_RADIUS: f32 = 30.0;
const GAUGE_SCORE_SIZE: f32 = 38.0;
/// Space under the gauge for the tier label.
const GAUGE_LABEL_SPACE: f32 = 60.0;
const GRID_COLUMNS: usize = 3;
const CELL_HEIGHT: f32 = 58.0;
const CELL_GAP: f32 = 10.0;

pub(super) fn write<S: PageSink>(c: &mut PageComposer<S>, report: &FullReport) -> Result<(), S::Error> {
    let config = c.config().clone();
    let summary = &report.executive_summary;

    c.place(70.0, |region, out| {
        let cx = region.x + region.width / 2.0;
        out.push(centered_text(cx, region.y + 8.0, TITLE, bold(24.0, theme::INK)));
        out.push(centered_text(
            cx,
            region.y + 42.0,
            report.domain.as_str(),
            bold(14.0, theme::GRAY),
        ));
    })?;

    let generated = report.generated_at.get(..10).unwrap_or(&report.generated_at).to_string();
    c.place(20.0, |region, out| {
        let style = TextStyle::muted(&config);
        out.push(centered_text(
            region.x + region.width / 2.0,
            region.y,
            format!("Generated {generated}  |  Report {}", report.report_id),
            style,
        ));
    })?;
    c.gap();

    let color = theme::score_color(summary.score);
    let tier = summary.tier.clone();
    c.place(2.0 * GAUGE_RADIUS + GAUGE_LABEL_SPACE, |region, out| {
        let radius = ((region.height - GAUGE_LABEL_SPACE) / 2.0).clamp(MIN_GAUGE_RADIUS, GAUGE_RADIUS);
        let score_size = GAUGE_SCORE_SIZE.min(radius * 0.62);
        let cx = region.x + region.width / 2.0;
        let cy = region.y + radius + 4.0;
        out.push(Primitive::Circle {
            cx,
            cy,
            radius,
            fill: color,
        });
        out.push(centered_text(
            cx,
            cy - 0.44 * score_size,
            summary.score.to_string(),
            bold(score_size, Color::WHITE),
        ));
        out.push(centered_text(cx, cy + radius * 0.36, "out of 100", bold(9.0, Color::WHITE)));
        out.push(centered_text(cx, cy + radius + 18.0, tier, bold(16.0, color)));
    })?;
    c.gap();

    let rows = Category::ALL.len().div_ceil(GRID_COLUMNS);
    let grid_height = rows as f32 * CELL_HEIGHT + (rows - 1) as f32 * CELL_GAP;
    let muted = TextStyle::muted(&config);
    c.place(grid_height, |region, out| {
        let cell_width =
            (region.width - (GRID_COLUMNS - 1) as f32 * CELL_GAP) / GRID_COLUMNS as f32;
        for (i, category) in Category::ALL.into_iter().enumerate() {
            let (row, col) = (i / GRID_COLUMNS, i % GRID_COLUMNS);
            let cell = Rect::new(
                region.x + col as f32 * (cell_width + CELL_GAP),
                region.y + row as f32 * (CELL_HEIGHT + CELL_GAP),
                cell_width,
                CELL_HEIGHT,
            );
            mini_score(out, cell, report, category, muted);
        }
    })?;
    Ok(())
}

fn mini_score(
    out: &mut Vec<Primitive>,
    cell: Rect,
    report: &FullReport,
    category: Category,
    muted: TextStyle,
) {
    let (score, status) = report
        .section(category)
        .map(|s| (s.score.to_string(), s.status))
        .unwrap_or_else(|| ("-".to_string(), Status::Unknown));
    let color = theme::status_color(status);
    let inner = cell.width - 16.0;

    out.push(Primitive::Rect {
        rect: cell,
        fill: Some(PANEL),
        stroke: Some(PANEL_BORDER),
    });
    let label = bold(8.5, theme::INK);
    out.push(text_at(
        cell.x + 8.0,
        cell.y + 8.0,
        clip_to_width(category.title(), label.face, label.size, inner),
        label,
    ));
    out.push(text_at(cell.x + 8.0, cell.y + 22.0, score, bold(16.0, color)));
    out.push(text_at(
        cell.x + 8.0,
        cell.y + 42.0,
        clip_to_width(status.label(), muted.face, muted.size, inner),
        muted.with_color(color),
    ));
}
