//! Score projection bar chart.
//!
//! Drawn in one shot on a fresh page, with every bar scaled against a fixed 0-100 axis.
//! On a short page the plot shrinks to the region it is given.

use super::theme::{self, score_color};
use super::{bold, centered_text};
use geo_report_layout::{HeadingLevel, PageComposer, PageSink, Primitive, Rect, TextStyle};
use geo_report_types::{Color, FullReport, Score};

const PLOT_HEIGHT: f32 = 200.0;
const VALUE_LABEL_SPACE: f32 = 20.0;
const AXIS_LABEL_SPACE: f32 = 24.0;
const BAR_FILL_RATIO: f32 = 0.5;
const GRID_COLOR: Color = Color::gray(225);

pub(super) fn write<S: PageSink>(c: &mut PageComposer<S>, report: &FullReport) -> Result<(), S::Error> {
    let body = TextStyle::body(c.config());
    let muted = TextStyle::muted(c.config());
    let projection = report.score_projection;

    c.new_page()?;
    c.heading("Score Projection", HeadingLevel::Part)?;
    c.paragraph(
        "Projected overall score if the roadmap is followed. Each bar uses the same 0-100 scale.",
        muted,
    )?;

    let milestones = projection.milestones();
    c.place(VALUE_LABEL_SPACE + PLOT_HEIGHT + AXIS_LABEL_SPACE, |region, out| {
        draw_bars(out, region, &milestones, muted);
    })?;
    c.gap();

    c.paragraph(
        &format!(
            "From {} today to {} after one week, {} after four weeks and {} after three months, against a target of {}.",
            projection.current,
            projection.after_week_1,
            projection.after_week_4,
            projection.after_3_months,
            projection.target_score
        ),
        body,
    )
}

fn draw_bars(out: &mut Vec<Primitive>, region: Rect, milestones: &[(&str, Score)], label: TextStyle) {
    let plot_height = (region.height - VALUE_LABEL_SPACE - AXIS_LABEL_SPACE).clamp(0.0, PLOT_HEIGHT);
    let baseline = region.y + VALUE_LABEL_SPACE + plot_height;
    let left = region.x;
    let right = region.right();

    for tick in [25.0, 50.0, 75.0, 100.0] {
        let y = baseline - plot_height * tick / 100.0;
        out.push(Primitive::Line {
            from: (left, y),
            to: (right, y),
            width: 0.3,
            color: GRID_COLOR,
        });
    }

    let column = region.width / milestones.len().max(1) as f32;
    let bar_width = column * BAR_FILL_RATIO;
    for (i, (name, score)) in milestones.iter().enumerate() {
        let cx = left + column * (i as f32 + 0.5);
        let height = plot_height * f32::from(score.value()) / 100.0;
        out.push(Primitive::Rect {
            rect: Rect::new(cx - bar_width / 2.0, baseline - height, bar_width, height),
            fill: Some(score_color(*score)),
            stroke: None,
        });
        out.push(centered_text(
            cx,
            baseline - height - 14.0,
            score.to_string(),
            bold(11.0, theme::INK),
        ));
        out.push(centered_text(cx, baseline + 8.0, *name, label));
    }

    out.push(Primitive::Line {
        from: (left, baseline),
        to: (right, baseline),
        width: 1.0,
        color: theme::GRAY,
    });
}
