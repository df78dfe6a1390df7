//! Report color palette.

use geo_report_types::{Color, Priority, Score, Status};

pub const RED: Color = Color::rgb(220, 38, 38);
pub const AMBER: Color = Color::rgb(217, 119, 6);
pub const BLUE: Color = Color::rgb(37, 99, 235);
pub const GREEN: Color = Color::rgb(22, 163, 74);
pub const GRAY: Color = Color::rgb(107, 114, 128);
pub const INK: Color = Color::rgb(17, 24, 39);
pub const PANEL: Color = Color::rgb(243, 244, 246);
pub const PANEL_BORDER: Color = Color::rgb(209, 213, 219);

/// Four-bucket ramp shared by the cover gauge and the projection chart.
pub fn score_color(score: Score) -> Color {
    match score.value() {
        0..=39 => RED,
        40..=59 => AMBER,
        60..=74 => BLUE,
        _ => GREEN,
    }
}

pub fn status_color(status: Status) -> Color {
    match status {
        Status::Critical => RED,
        Status::NeedsWork => AMBER,
        Status::Moderate => BLUE,
        Status::Good | Status::Excellent => GREEN,
        Status::Unknown => GRAY,
    }
}

pub fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::Critical => RED,
        Priority::High => AMBER,
        Priority::Medium => BLUE,
        Priority::Low => GRAY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_boundaries() {
        assert_eq!(score_color(Score::from(39)), RED);
        assert_eq!(score_color(Score::from(40)), AMBER);
        assert_eq!(score_color(Score::from(59)), AMBER);
        assert_eq!(score_color(Score::from(60)), BLUE);
        assert_eq!(score_color(Score::from(74)), BLUE);
        assert_eq!(score_color(Score::from(75)), GREEN);
        assert_eq!(score_color(Score::MAX), GREEN);
    }

    #[test]
    fn status_colors_follow_the_ramp() {
        for value in [0u8, 39, 40, 59, 60, 74, 75, 89, 90, 100] {
            let score = Score::from(value);
            assert_eq!(status_color(Status::from_score(score)), score_color(score), "{value}");
        }
    }
}
