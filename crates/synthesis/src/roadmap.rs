//! Time-phased roadmap and score projection arithmetic.

use geo_report_types::{
    Category, DirectAnswerRecommendation, GeoScore, ImplementationRoadmap, Recommendation,
    ReportSection, RoadmapTask, SchemaRecommendation, SchemaState, Score, ScoreProjection,
};

/// Flat impact estimate for each week-1 task.
const WEEK1_IMPACT: u32 = 10;
/// Categories whose recommendations feed the projection, the three highest weighted.
const PROJECTED_CATEGORIES: [Category; 3] = [
    Category::EntityClarity,
    Category::DirectAnswers,
    Category::TrustSignals,
];

/// Effort ladder for week-1 tasks: two 15 minute tasks, two 30 minute tasks, then an hour each.
pub fn week1_effort(index: usize) -> &'static str {
    match index {
        0 | 1 => "15min",
        2 | 3 => "30min",
        _ => "1hr",
    }
}

fn effort_time(level: u8) -> &'static str {
    match level {
        1 => "30min",
        2 => "1hr",
        3 => "half day",
        4 => "1-2 days",
        5 => "1 week",
        _ => "Unknown",
    }
}

pub fn build_roadmap(
    score: &GeoScore,
    sections: &[ReportSection],
    schema: &[SchemaRecommendation],
    direct_answers: &[DirectAnswerRecommendation],
    domain: &str,
) -> ImplementationRoadmap {
    let week_1 = score
        .week1_fix_plan
        .iter()
        .enumerate()
        .map(|(i, fix)| RoadmapTask {
            task: fix.clone(),
            effort: week1_effort(i).to_string(),
            impact: WEEK1_IMPACT,
        })
        .collect();

    let schema_tasks = schema
        .iter()
        .filter(|s| s.current_state == SchemaState::Missing)
        .map(|s| RoadmapTask {
            task: format!("Add {} structured data", s.schema_type),
            effort: "1hr".into(),
            impact: s.estimated_impact,
        });
    let answer_tasks = direct_answers.iter().map(|d| RoadmapTask {
        task: format!("Add a direct answer block to {}", d.url),
        effort: "30min".into(),
        impact: 3,
    });
    let heavy_tasks = sections
        .iter()
        .flat_map(|s| s.recommendations.iter())
        .filter(|r| r.effort_level >= 3)
        .map(|r| RoadmapTask {
            task: r.action.clone(),
            effort: effort_time(r.effort_level).to_string(),
            impact: r.expected_improvement,
        });

    ImplementationRoadmap {
        week_1,
        week_2_4: schema_tasks.chain(answer_tasks).chain(heavy_tasks).collect(),
        ongoing: vec![
            RoadmapTask {
                task: "Refresh direct answers and statistics every quarter".into(),
                effort: "1hr/month".into(),
                impact: 3,
            },
            RoadmapTask {
                task: format!("Monitor how AI answer engines cite {domain}"),
                effort: "30min/week".into(),
                impact: 2,
            },
            RoadmapTask {
                task: "Add new FAQ entries as customer questions emerge".into(),
                effort: "1hr/month".into(),
                impact: 2,
            },
        ],
    }
}

/// Projects milestones from the recommendations of the three highest-weighted categories.
///
/// Week 1 adds the first three improvements, week 4 adds 70% of the total and three months
/// 90%. Each milestone is clamped to 100 and never below the previous one.
pub fn project_scores(current: Score, sections: &[ReportSection]) -> ScoreProjection {
    let improvements: Vec<u32> = PROJECTED_CATEGORIES
        .iter()
        .filter_map(|c| sections.iter().find(|s| s.category == *c))
        .flat_map(|s| s.recommendations.iter().map(|r: &Recommendation| r.expected_improvement))
        .collect();
    let total: u32 = improvements.iter().sum();
    let first_three: u32 = improvements.iter().take(3).sum();

    let after_week_1 = current.plus(first_three);
    let after_week_4 = current.plus((f64::from(total) * 0.7).round() as u32).max(after_week_1);
    let after_3_months = current
        .plus((f64::from(total) * 0.9).round() as u32)
        .max(after_week_4);

    ScoreProjection {
        current,
        after_week_1,
        after_week_4,
        after_3_months,
        target_score: Score::MAX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_report_types::{Findings, Status};

    fn section(category: Category, improvements: &[u32]) -> ReportSection {
        ReportSection {
            category,
            title: category.title().into(),
            score: Score::from(42),
            weight: category.weight(),
            status: Status::NeedsWork,
            findings: Findings {
                what_we_found: String::new(),
                why_it_matters: String::new(),
                evidence: vec![],
            },
            recommendations: improvements
                .iter()
                .map(|&i| Recommendation {
                    action: format!("gain {i}"),
                    expected_improvement: i,
                    effort_level: 3,
                    pages_affected: vec![],
                })
                .collect(),
        }
    }

    #[test]
    fn effort_ladder() {
        let ladder: Vec<_> = (0..6).map(week1_effort).collect();
        assert_eq!(ladder, vec!["15min", "15min", "30min", "30min", "1hr", "1hr"]);
    }

    #[test]
    fn projection_arithmetic() {
        let sections = vec![
            section(Category::EntityClarity, &[10, 8]),
            section(Category::DirectAnswers, &[6, 4]),
            section(Category::TrustSignals, &[2]),
            section(Category::CompetitivePositioning, &[50]),
        ];
        let p = project_scores(Score::from(40), &sections);
        assert_eq!(p.after_week_1.value(), 64);
        // total 30: 0.7 -> 21, 0.9 -> 27; week 4 is lifted to the week 1 value.
        assert_eq!(p.after_week_4.value(), 64);
        assert_eq!(p.after_3_months.value(), 67);
        assert_eq!(p.target_score.value(), 100);
    }

    #[test]
    fn projection_is_capped_and_non_decreasing() {
        let sections = vec![section(Category::EntityClarity, &[40, 40, 40])];
        for start in [0u8, 42, 90, 100] {
            let p = project_scores(Score::from(start), &sections);
            let values: Vec<u8> = p.milestones().iter().map(|(_, s)| s.value()).collect();
            assert!(values.windows(2).all(|w| w[0] <= w[1]), "{values:?}");
            assert!(values.iter().all(|v| *v <= 100));
        }
    }

    #[test]
    fn week1_tasks_map_fix_plan_one_to_one() {
        let score = GeoScore {
            week1_fix_plan: vec!["a".into(), "b".into(), "c".into()],
            ..Default::default()
        };
        let roadmap = build_roadmap(&score, &[], &[], &[], "example.com");
        assert_eq!(roadmap.week_1.len(), 3);
        assert!(roadmap.week_1.iter().all(|t| t.impact == 10));
        assert_eq!(roadmap.week_1[2].effort, "30min");
        assert_eq!(roadmap.ongoing.len(), 3);
    }
}
