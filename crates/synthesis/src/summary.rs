use crate::templates::profile;
use geo_report_types::{
    tier_for, Category, ExecutiveSummary, GeoScore, KeyFinding, PrimaryObstacle, ReportSection,
};

const QUICK_WIN_COUNT: usize = 3;
const HESITATION_COUNT: usize = 3;

/// The category with the lowest score. Ties go to the earliest category in declaration order.
pub fn primary_obstacle(score: &GeoScore) -> PrimaryObstacle {
    let category = Category::ALL
        .iter()
        .copied()
        .min_by_key(|c| score.section_scores.get(*c))
        .unwrap_or(Category::EntityClarity);
    PrimaryObstacle {
        category,
        title: category.title().to_string(),
        score: score.section_scores.get(category),
        narrative: profile(category).failure_narrative.to_string(),
    }
}

pub fn build_summary(domain: &str, score: &GeoScore, sections: &[ReportSection]) -> ExecutiveSummary {
    let tier = if score.tier.trim().is_empty() {
        tier_for(score.overall_score).to_string()
    } else {
        score.tier.clone()
    };
    let obstacle = primary_obstacle(score);

    ExecutiveSummary {
        score: score.overall_score,
        synthesis: format!(
            "{} scores {}/100 ({}) for AI citation readiness; the biggest obstacle is {}.",
            domain,
            score.overall_score,
            tier,
            obstacle.title.to_lowercase()
        ),
        tier,
        key_findings: sections
            .iter()
            .map(|s| KeyFinding {
                category: s.category,
                score: s.score,
                status: s.status,
                finding: s.findings.what_we_found.clone(),
            })
            .collect(),
        primary_obstacle: obstacle,
        quick_wins: score.week1_fix_plan.iter().take(QUICK_WIN_COUNT).cloned().collect(),
        top_hesitations: score
            .top_ai_hesitations
            .iter()
            .take(HESITATION_COUNT)
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_report_types::{Score, SectionScores};

    fn scores(ec: u8, da: u8, ts: u8, cp: u8, ta: u8) -> GeoScore {
        GeoScore {
            overall_score: Score::from(60),
            section_scores: SectionScores {
                entity_clarity: Score::from(ec),
                direct_answers: Score::from(da),
                trust_signals: Score::from(ts),
                competitive_positioning: Score::from(cp),
                technical_accessibility: Score::from(ta),
            },
            ..Default::default()
        }
    }

    #[test]
    fn weakest_category_is_the_obstacle() {
        let obstacle = primary_obstacle(&scores(30, 80, 90, 75, 76));
        assert_eq!(obstacle.category, Category::EntityClarity);
        assert_eq!(obstacle.title, "Entity Clarity");
        assert_eq!(obstacle.narrative, profile(Category::EntityClarity).failure_narrative);
    }

    #[test]
    fn ties_break_by_declaration_order() {
        let obstacle = primary_obstacle(&scores(70, 50, 50, 50, 90));
        assert_eq!(obstacle.category, Category::DirectAnswers);
    }

    #[test]
    fn quick_wins_are_first_three_fixes_unmodified() {
        let mut score = scores(50, 50, 50, 50, 50);
        score.week1_fix_plan = vec!["a".into(), "b".into(), "c".into(), "d".into()];
        let summary = build_summary("example.com", &score, &[]);
        assert_eq!(summary.quick_wins, vec!["a", "b", "c"]);
        assert_eq!(summary.tier, "Moderate Visibility");
        assert!(summary.synthesis.contains("direct answer readiness") || summary.synthesis.contains("entity clarity"));
    }
}
