use crate::context::SiteContext;
use crate::rules::apply_rules;
use crate::templates::{profile, ScoreBand};
use geo_report_types::{Category, Findings, GeoScore, ReportSection, Status};

/// Builds the five category sections in declaration order.
pub fn build_sections(site: &SiteContext<'_>, score: &GeoScore) -> Vec<ReportSection> {
    Category::ALL
        .iter()
        .map(|&category| build_section(site, category, score))
        .collect()
}

/// Read the score, classify it, pick the band's bundle, then emit the section.
pub fn build_section(site: &SiteContext<'_>, category: Category, score: &GeoScore) -> ReportSection {
    let category_score = score.section_scores.get(category);
    let status = Status::from_score(category_score);
    let band = ScoreBand::of(category_score);
    let entry = profile(category);
    let template = entry.template(band);

    let recommendations = apply_rules(template.recommendations, site);
    log::debug!(
        "Section {}: score {} -> {:?}/{:?}, {} recommendations",
        category.key(),
        category_score,
        status,
        band,
        recommendations.len()
    );

    ReportSection {
        category,
        title: category.title().to_string(),
        score: category_score,
        weight: category.weight(),
        status,
        findings: Findings {
            what_we_found: template.what_we_found.to_string(),
            why_it_matters: entry.why_it_matters.to_string(),
            evidence: template
                .evidence
                .iter()
                .map(|rule| rule.evaluate(site))
                .collect(),
        },
        recommendations,
    }
}
